// Сбор диагностик одного прогона компиляции

use serde::Serialize;

use crate::common::error::CompileError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Severity {
    Warning,
    Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DiagnosticKind {
    // Ошибка разбора одной конструкции
    Parse,
    // Структурный сбой вложенности блоков
    Structural,
    // Нераспознанная строка, пропущенная в вывод комментарием
    Unrecognized,
}

/// Одна запись диагностики с привязкой к строке исходника
#[derive(Debug, Clone, Serialize)]
pub struct Diagnostic {
    pub kind: DiagnosticKind,
    pub severity: Severity,
    pub line: usize,
    pub message: String,
}

/// Коллектор диагностик: ошибки дублируются в stderr и накапливаются
/// для проверки вызывающей стороной после прохода
#[derive(Debug, Clone, Default, Serialize)]
pub struct Diagnostics {
    pub records: Vec<Diagnostic>,
}

impl Diagnostics {
    pub fn new() -> Self {
        Self::default()
    }

    /// Зарегистрировать recoverable ошибку или структурный сбой
    pub fn report_error(&mut self, error: &CompileError) {
        eprintln!("{}", error);
        let kind = match error {
            CompileError::ParseError { .. } => DiagnosticKind::Parse,
            CompileError::StructuralError { .. } => DiagnosticKind::Structural,
        };
        self.records.push(Diagnostic {
            kind,
            severity: Severity::Error,
            line: error.line(),
            message: error.message().to_string(),
        });
    }

    /// Зарегистрировать нераспознанную строку (не ошибка - строка уходит
    /// в вывод диагностическим комментарием)
    pub fn report_unrecognized(&mut self, line: usize, text: &str) {
        self.records.push(Diagnostic {
            kind: DiagnosticKind::Unrecognized,
            severity: Severity::Warning,
            line,
            message: format!("unrecognized syntax: {}", text),
        });
    }

    pub fn records(&self) -> &[Diagnostic] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    pub fn error_count(&self) -> usize {
        self.count_severity(Severity::Error)
    }

    pub fn warning_count(&self) -> usize {
        self.count_severity(Severity::Warning)
    }

    pub fn parse_error_count(&self) -> usize {
        self.count_kind(DiagnosticKind::Parse)
    }

    pub fn structural_fault_count(&self) -> usize {
        self.count_kind(DiagnosticKind::Structural)
    }

    fn count_severity(&self, severity: Severity) -> usize {
        self.records.iter().filter(|d| d.severity == severity).count()
    }

    fn count_kind(&self, kind: DiagnosticKind) -> usize {
        self.records.iter().filter(|d| d.kind == kind).count()
    }
}

/// Машиночитаемый отчет о компиляции (флаг --json)
#[derive(Debug, Clone, Serialize)]
pub struct CompileReport {
    pub success: bool,
    pub error: Option<String>,
    pub diagnostics: Vec<Diagnostic>,
}

impl CompileReport {
    pub fn success(diagnostics: &Diagnostics) -> Self {
        Self {
            success: true,
            error: None,
            diagnostics: diagnostics.records.clone(),
        }
    }

    pub fn failure(error: &CompileError, diagnostics: &Diagnostics) -> Self {
        Self {
            success: false,
            error: Some(error.to_string()),
            diagnostics: diagnostics.records.clone(),
        }
    }
}
