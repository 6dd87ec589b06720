// Единый формат ошибок компиляции

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompileError {
    // Локальная ошибка разбора одной конструкции - компиляция продолжается
    ParseError { message: String, line: usize },
    // Структурный сбой - '}' без открытого блока или незакрытый блок в конце
    StructuralError { message: String, line: usize },
}

impl CompileError {
    pub fn line(&self) -> usize {
        match self {
            CompileError::ParseError { line, .. } => *line,
            CompileError::StructuralError { line, .. } => *line,
        }
    }

    pub fn message(&self) -> &str {
        match self {
            CompileError::ParseError { message, .. } => message,
            CompileError::StructuralError { message, .. } => message,
        }
    }
}

impl std::fmt::Display for CompileError {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        match self {
            CompileError::ParseError { message, line } => {
                write!(f, "[Parse Error] Line {}: {}", line, message)
            }
            CompileError::StructuralError { message, line } => {
                write!(f, "[Structural Error] Line {}: {}", line, message)
            }
        }
    }
}

impl std::error::Error for CompileError {}
