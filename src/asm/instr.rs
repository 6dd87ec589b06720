// Типизированные целевые инструкции

use std::fmt;

/// Одна инструкция (или комментарий) итогового ассемблерного листинга.
/// Каждый вариант знает свою текстовую форму - парсеры конструкций только
/// собирают значения, форматирование целиком здесь.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Instr {
    /// Объявление данных: `name: .data e1, e2, ...`
    Data { name: String, elements: Vec<String> },
    /// Комментарий листинга: `; text`
    Comment(String),
    /// Определение метки: `name:`
    Label(String),
    /// Сравнение: `cmp lhs, rhs`
    Cmp { lhs: String, rhs: String },
    /// Условный переход если равно: `je target`
    Je(String),
    /// Условный переход если больше или равно: `jge target`
    Jge(String),
    /// Безусловный переход: `jmp target`
    Jmp(String),
    /// Пересылка: `mov src, dst`
    Mov { src: String, dst: String },
    /// Загрузка адреса: `lea src, dst`
    Lea { src: String, dst: String },
    /// Системный вызов
    Syscall,
}

impl fmt::Display for Instr {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self {
            Instr::Data { name, elements } => {
                if elements.is_empty() {
                    write!(f, "{}: .data", name)
                } else {
                    write!(f, "{}: .data {}", name, elements.join(", "))
                }
            }
            Instr::Comment(text) => write!(f, "; {}", text),
            Instr::Label(name) => write!(f, "{}:", name),
            Instr::Cmp { lhs, rhs } => write!(f, "cmp {}, {}", lhs, rhs),
            Instr::Je(target) => write!(f, "je {}", target),
            Instr::Jge(target) => write!(f, "jge {}", target),
            Instr::Jmp(target) => write!(f, "jmp {}", target),
            Instr::Mov { src, dst } => write!(f, "mov {}, {}", src, dst),
            Instr::Lea { src, dst } => write!(f, "lea {}, {}", src, dst),
            Instr::Syscall => write!(f, "syscall"),
        }
    }
}
