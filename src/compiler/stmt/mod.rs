// Модуль разбора statements

pub mod block_close;
pub mod class_stmt;
pub mod for_stmt;
pub mod if_stmt;
pub mod list_stmt;
pub mod method_stmt;
pub mod print_stmt;
pub mod while_stmt;

use crate::asm::Instr;
use crate::common::error::CompileError;
use crate::compiler::context::CompilationContext;

/// Диспетчеризация одной строки исходника по ведущему токену.
/// Комментарии и пустые строки поглощаются без вывода; нераспознанные
/// строки уходят в вывод диагностическим комментарием, а не ошибкой.
pub fn compile_line(ctx: &mut CompilationContext, line: &str) -> Result<(), CompileError> {
    let trimmed = line.trim();

    if trimmed.is_empty() || trimmed.starts_with('#') {
        return Ok(());
    }

    if let Some(rest) = trimmed.strip_prefix("list ") {
        list_stmt::compile_list(ctx, rest)
    } else if let Some(rest) = trimmed.strip_prefix("class ") {
        class_stmt::compile_class(ctx, rest)
    } else if let Some(rest) = trimmed.strip_prefix("method ") {
        method_stmt::compile_method(ctx, rest)
    } else if let Some(rest) = trimmed.strip_prefix("print ") {
        print_stmt::compile_print(ctx, rest)
    } else if let Some(rest) = trimmed.strip_prefix("if ") {
        if_stmt::compile_if(ctx, rest)
    } else if let Some(rest) = trimmed.strip_prefix("while ") {
        while_stmt::compile_while(ctx, rest)
    } else if let Some(rest) = trimmed.strip_prefix("for ") {
        for_stmt::compile_for(ctx, rest)
    } else if trimmed == "}" {
        block_close::compile_block_close(ctx)
    } else {
        ctx.diagnostics.report_unrecognized(*ctx.current_line, trimmed);
        ctx.program.push_with_line(
            Instr::Comment(format!("{} (unrecognized syntax)", trimmed)),
            *ctx.current_line,
        );
        Ok(())
    }
}
