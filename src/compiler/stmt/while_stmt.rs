// Разбор while statement
// Синтаксис: while <condition> {

use crate::asm::Instr;
use crate::common::error::CompileError;
use crate::compiler::blocks::Block;
use crate::compiler::context::CompilationContext;

pub fn compile_while(ctx: &mut CompilationContext, rest: &str) -> Result<(), CompileError> {
    let line = *ctx.current_line;

    let condition = rest.trim().trim_end_matches('{').trim();
    if condition.is_empty() {
        return Err(CompileError::ParseError {
            message: "while requires a condition".to_string(),
            line,
        });
    }

    // Пара меток входа/выхода с общим номером экземпляра цикла
    let (entry, exit) = ctx.labels.mint_pair("while_label", "end_while_label");
    ctx.blocks.push(Block::While {
        entry: entry.clone(),
        exit: exit.clone(),
    });

    ctx.program.push_with_line(Instr::Label(entry.to_string()), line);
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
