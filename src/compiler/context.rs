// Контекст компиляции для передачи между модулями

use crate::asm::Program;
use crate::common::diag::Diagnostics;
use crate::compiler::blocks::BlockStack;
use crate::compiler::labels::LabelAllocator;

/// Контекст одного прогона, передаваемый парсерам конструкций.
/// Владелец всех частей - Translator; парсеры получают только ссылки.
pub struct CompilationContext<'a> {
    pub program: &'a mut Program,
    pub blocks: &'a mut BlockStack,
    pub labels: &'a mut LabelAllocator,
    pub diagnostics: &'a mut Diagnostics,
    pub current_line: &'a mut usize,
}
