// Обработка закрытия блока
// Синтаксис: }

use crate::asm::Instr;
use crate::common::error::CompileError;
use crate::compiler::blocks::Block;
use crate::compiler::context::CompilationContext;

/// Снимает верхний блок со стека и эмитит его закрывающий фрагмент.
/// Метки переходов достаются из блока, сохраненные при открытии -
/// пересоздание здесь дало бы неверные цели переходов.
pub fn compile_block_close(ctx: &mut CompilationContext) -> Result<(), CompileError> {
    let line = *ctx.current_line;

    let block = ctx.blocks.pop().ok_or_else(|| CompileError::StructuralError {
        message: "mismatched block closure: '}' with no open block".to_string(),
        line,
    })?;

    match block {
        Block::Class { name } => {
            ctx.program.push_with_line(
                Instr::Comment(format!("End of class {}", name)),
                line,
            );
        }
        Block::Method { name } => {
            ctx.program.push_with_line(
                Instr::Comment(format!("End of method {}", name)),
                line,
            );
        }
        Block::If { exit } => {
            // Точка слияния ветки else
            ctx.program.push_with_line(Instr::Label(exit.to_string()), line);
        }
        Block::While { entry, exit } => {
            // Обратное ребро цикла, затем точка выхода
            ctx.program.push_with_line(Instr::Jmp(entry.to_string()), line);
            ctx.program.push_with_line(Instr::Label(exit.to_string()), line);
        }
        Block::For { entry, exit } => {
            ctx.program.push_with_line(Instr::Jmp(entry.to_string()), line);
            ctx.program.push_with_line(Instr::Label(exit.to_string()), line);
        }
    }

    Ok(())
}
