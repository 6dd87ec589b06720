// Разбор print statement
// Синтаксис: print "<message>"

use crate::asm::Instr;
use crate::common::error::CompileError;
use crate::compiler::context::CompilationContext;

pub fn compile_print(ctx: &mut CompilationContext, rest: &str) -> Result<(), CompileError> {
    let line = *ctx.current_line;

    // Кавычки срезаются с краев; экранирование внутренних кавычек
    // не поддерживается
    let message = rest.trim().trim_matches('"');
    if message.is_empty() {
        return Err(CompileError::ParseError {
            message: "print requires a message".to_string(),
            line,
        });
    }

    // Шаблон системного вызова write
    ctx.program.push_with_line(
        Instr::Mov {
            src: "$1".to_string(),
            dst: "%rax".to_string(),
        },
        line,
    );
    ctx.program.push_with_line(
        Instr::Mov {
            src: "$1".to_string(),
            dst: "%rdi".to_string(),
        },
        line,
    );
    ctx.program.push_with_line(
        Instr::Lea {
            src: message.to_string(),
            dst: "%rsi".to_string(),
        },
        line,
    );
    ctx.program.push_with_line(Instr::Syscall, line);

    Ok(())
}
