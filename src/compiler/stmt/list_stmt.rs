// Разбор объявления списка
// Синтаксис: list <name> = [<e1>, <e2>, ...]

use crate::asm::Instr;
use crate::common::error::CompileError;
use crate::compiler::context::CompilationContext;

pub fn compile_list(ctx: &mut CompilationContext, rest: &str) -> Result<(), CompileError> {
    let line = *ctx.current_line;

    let (name, elements_part) = rest.split_once('=').ok_or_else(|| CompileError::ParseError {
        message: "list declaration requires '='".to_string(),
        line,
    })?;

    let name = name.trim();
    if name.is_empty() {
        return Err(CompileError::ParseError {
            message: "list declaration requires a name".to_string(),
            line,
        });
    }

    let elements_part = elements_part.trim();
    if !elements_part.starts_with('[') || !elements_part.ends_with(']') {
        return Err(CompileError::ParseError {
            message: "unbalanced brackets in list declaration".to_string(),
            line,
        });
    }

    // Элементы сохраняются дословно, без проверки типов
    let inner = &elements_part[1..elements_part.len() - 1];
    let elements: Vec<String> = if inner.trim().is_empty() {
        Vec::new()
    } else {
        inner.split(',').map(|e| e.trim().to_string()).collect()
    };

    ctx.program.push_with_line(
        Instr::Data {
            name: name.to_string(),
            elements,
        },
        line,
    );

    Ok(())
}
