// Разбор for statement
// Синтаксис: for <var> in range(<start>, <end>) {

use crate::asm::Instr;
use crate::common::error::CompileError;
use crate::compiler::blocks::Block;
use crate::compiler::context::CompilationContext;

pub fn compile_for(ctx: &mut CompilationContext, rest: &str) -> Result<(), CompileError> {
    let line = *ctx.current_line;

    let (var, range_part) =
        rest.split_once("in range(")
            .ok_or_else(|| CompileError::ParseError {
                message: "for loop requires 'in range(<start>, <end>)'".to_string(),
                line,
            })?;

    let var = var.trim();
    if var.is_empty() {
        return Err(CompileError::ParseError {
            message: "for loop requires a variable".to_string(),
            line,
        });
    }

    let close_paren = range_part.find(')').ok_or_else(|| CompileError::ParseError {
        message: "unbalanced parentheses in range".to_string(),
        line,
    })?;

    let (start, end) = range_part[..close_paren]
        .split_once(',')
        .ok_or_else(|| CompileError::ParseError {
            message: "range requires a start and an end".to_string(),
            line,
        })?;

    let start = start.trim();
    let end = end.trim();
    if start.is_empty() || end.is_empty() {
        return Err(CompileError::ParseError {
            message: "range requires a start and an end".to_string(),
            line,
        });
    }

    let (entry, exit) = ctx.labels.mint_pair("for_label", "end_for_label");
    ctx.blocks.push(Block::For {
        entry: entry.clone(),
        exit: exit.clone(),
    });

    // Инициализация счетчика, метка входа, проверка выхода
    ctx.program.push_with_line(
        Instr::Mov {
            src: start.to_string(),
            dst: format!("%{}", var),
        },
        line,
    );
    ctx.program.push_with_line(Instr::Label(entry.to_string()), line);
    ctx.program.push_with_line(
        Instr::Cmp {
            lhs: format!("%{}", var),
            rhs: end.to_string(),
        },
        line,
    );
    ctx.program.push_with_line(Instr::Jge(exit.to_string()), line);

    Ok(())
}
