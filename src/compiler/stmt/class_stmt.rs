// Разбор заголовка класса
// Синтаксис: class <Name> {

use crate::asm::Instr;
use crate::common::error::CompileError;
use crate::compiler::blocks::Block;
use crate::compiler::context::CompilationContext;

pub fn compile_class(ctx: &mut CompilationContext, rest: &str) -> Result<(), CompileError> {
    let line = *ctx.current_line;

    let name = rest.trim().trim_end_matches('{').trim();
    if name.is_empty() {
        return Err(CompileError::ParseError {
            message: "class declaration requires a name".to_string(),
            line,
        });
    }

    // Границы класса - структурные маркеры, меток не нужно
    ctx.blocks.push(Block::Class {
        name: name.to_string(),
    });
    ctx.program.push_with_line(
        Instr::Comment(format!("Start of class {}", name)),
        line,
    );

    Ok(())
}
