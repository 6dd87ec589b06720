// Разбор заголовка метода
// Синтаксис: method <Name> {

use crate::asm::Instr;
use crate::common::error::CompileError;
use crate::compiler::blocks::Block;
use crate::compiler::context::CompilationContext;

pub fn compile_method(ctx: &mut CompilationContext, rest: &str) -> Result<(), CompileError> {
    let line = *ctx.current_line;

    let name = rest.trim().trim_end_matches('{').trim();
    if name.is_empty() {
        return Err(CompileError::ParseError {
            message: "method declaration requires a name".to_string(),
            line,
        });
    }

    ctx.blocks.push(Block::Method {
        name: name.to_string(),
    });
    ctx.program.push_with_line(
        Instr::Comment(format!("Start of method {}", name)),
        line,
    );

    Ok(())
}
