// Публичный API компилятора KalaLang

pub mod asm;
pub mod cli;
pub mod common;
pub mod compiler;
pub mod repl;

// Публичный API для запуска трансляции
pub use asm::{Instr, Program};
pub use common::diag::{CompileReport, Diagnostic, DiagnosticKind, Diagnostics, Severity};
pub use common::error::CompileError;
pub use compiler::{CompileOutput, Translator, TranslatorOptions};

/// Транслирует исходник Kala в ассемблерный листинг с настройками
/// по умолчанию (нестрогий режим)
pub fn compile(source: &str) -> Result<CompileOutput, CompileError> {
    compile_with_options(source, TranslatorOptions::default())
}

/// Транслирует исходник Kala с явными настройками прогона
pub fn compile_with_options(
    source: &str,
    options: TranslatorOptions,
) -> Result<CompileOutput, CompileError> {
    // 1. Построчный проход: диспетчер → парсер конструкции → эмиттер
    let mut translator = Translator::with_options(options);
    translator.translate(source)?;

    // 2. Рендер итоговой последовательности инструкций
    Ok(translator.into_output())
}
