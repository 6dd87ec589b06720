// Разбор if statement
// Синтаксис: if <condition> {

use crate::asm::Instr;
use crate::common::error::CompileError;
use crate::compiler::blocks::Block;
use crate::compiler::context::CompilationContext;

pub fn compile_if(ctx: &mut CompilationContext, rest: &str) -> Result<(), CompileError> {
    let line = *ctx.current_line;

    // Условие - непрозрачный токен, без грамматики выражений
    let condition = rest.trim().trim_end_matches('{').trim();
    if condition.is_empty() {
        return Err(CompileError::ParseError {
            message: "if requires a condition".to_string(),
            line,
        });
    }

    // Метка ветки else создается при открытии и хранится в блоке
    // до закрытия
    let exit = ctx.labels.mint("else_label");
    ctx.blocks.push(Block::If { exit: exit.clone() });

    ctx.program.push_with_line(
        Instr::Cmp {
            lhs: condition.to_string(),
            rhs: "0".to_string(),
        },
        line,
    );
    ctx.program.push_with_line(Instr::Je(exit.to_string()), line);

    Ok(())
}
