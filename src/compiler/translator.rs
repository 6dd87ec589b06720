// Транслятор Kala → ассемблер: однопроходный, построчный, слева направо

use crate::asm::Program;
use crate::common::diag::Diagnostics;
use crate::common::error::CompileError;
use crate::compiler::blocks::BlockStack;
use crate::compiler::context::CompilationContext;
use crate::compiler::labels::LabelAllocator;
use crate::compiler::stmt;

/// Настройки одного прогона компиляции
#[derive(Debug, Clone, Copy, Default)]
pub struct TranslatorOptions {
    /// В строгом режиме структурный сбой прерывает прогон;
    /// по умолчанию сбой фиксируется в диагностике и проход продолжается
    pub strict: bool,
}

/// Результат прогона: итоговый листинг плюс накопленные диагностики
#[derive(Debug, Clone)]
pub struct CompileOutput {
    pub asm: String,
    pub diagnostics: Diagnostics,
}

/// Состояние одного прогона. Каждая компиляция создает свежий экземпляр:
/// стек блоков, счетчик меток и буфер вывода не переживают прогон.
pub struct Translator {
    options: TranslatorOptions,
    program: Program,
    blocks: BlockStack,
    labels: LabelAllocator,
    diagnostics: Diagnostics,
    current_line: usize,
}

impl Translator {
    pub fn new() -> Self {
        Self::with_options(TranslatorOptions::default())
    }

    pub fn with_options(options: TranslatorOptions) -> Self {
        Self {
            options,
            program: Program::new(),
            blocks: BlockStack::new(),
            labels: LabelAllocator::new(),
            diagnostics: Diagnostics::new(),
            current_line: 0,
        }
    }

    /// Полный проход по исходнику: строка за строкой, без возврата
    /// и без заглядывания вперед, затем проверка конца прохода
    pub fn translate(&mut self, source: &str) -> Result<(), CompileError> {
        for (index, line) in source.lines().enumerate() {
            self.current_line = index + 1;
            self.dispatch_line(line)?;
        }
        self.finish()
    }

    /// Трансляция одной строки (построчный режим REPL).
    /// Открытые блоки сохраняются между вызовами.
    pub fn translate_line(&mut self, line: &str) -> Result<(), CompileError> {
        self.current_line += 1;
        self.dispatch_line(line)
    }

    fn dispatch_line(&mut self, line: &str) -> Result<(), CompileError> {
        crate::debug_println!("line {}: {:?}", self.current_line, line.trim());

        let mut ctx = CompilationContext {
            program: &mut self.program,
            blocks: &mut self.blocks,
            labels: &mut self.labels,
            diagnostics: &mut self.diagnostics,
            current_line: &mut self.current_line,
        };

        match stmt::compile_line(&mut ctx, line) {
            Ok(()) => Ok(()),
            // Локальные ошибки разбора: зафиксировать, пустой фрагмент,
            // продолжить со следующей строки
            Err(error @ CompileError::ParseError { .. }) => {
                self.diagnostics.report_error(&error);
                Ok(())
            }
            // Структурный сбой: фатален только в строгом режиме
            Err(error @ CompileError::StructuralError { .. }) => {
                self.diagnostics.report_error(&error);
                if self.options.strict {
                    Err(error)
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Проверка конца прохода: каждый оставшийся на стеке блок -
    /// структурный сбой (незакрытая скобка)
    pub fn finish(&mut self) -> Result<(), CompileError> {
        while let Some(block) = self.blocks.pop() {
            let error = CompileError::StructuralError {
                message: format!("unclosed {} block at end of input", block.kind_name()),
                line: self.current_line,
            };
            self.diagnostics.report_error(&error);
            if self.options.strict {
                return Err(error);
            }
        }
        Ok(())
    }

    pub fn program(&self) -> &Program {
        &self.program
    }

    pub fn diagnostics(&self) -> &Diagnostics {
        &self.diagnostics
    }

    pub fn render(&self) -> String {
        self.program.render()
    }

    pub fn into_output(self) -> CompileOutput {
        CompileOutput {
            asm: self.program.render(),
            diagnostics: self.diagnostics,
        }
    }
}

impl Default for Translator {
    fn default() -> Self {
        Self::new()
    }
}
