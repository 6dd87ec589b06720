// Program - упорядоченный буфер итоговых инструкций

use super::instr::Instr;

/// Итоговая последовательность инструкций одного прогона компиляции.
/// Только накопление и форматирование - никакой логики разбора.
#[derive(Debug, Clone)]
pub struct Program {
    pub code: Vec<Instr>,
    pub lines: Vec<usize>, // Номер строки исходника для каждой инструкции
}

impl Program {
    pub fn new() -> Self {
        Self {
            code: Vec::with_capacity(256),
            lines: Vec::with_capacity(256),
        }
    }

    pub fn push(&mut self, instr: Instr) {
        self.push_with_line(instr, 0);
    }

    pub fn push_with_line(&mut self, instr: Instr, line: usize) {
        self.code.push(instr);
        self.lines.push(line);
    }

    pub fn len(&self) -> usize {
        self.code.len()
    }

    pub fn is_empty(&self) -> bool {
        self.code.is_empty()
    }

    pub fn get_line(&self, index: usize) -> usize {
        if index < self.lines.len() {
            self.lines[index]
        } else {
            0
        }
    }

    /// Итоговый текст листинга
    pub fn render(&self) -> String {
        self.render_from(0)
    }

    /// Текст листинга начиная с инструкции start (для построчного режима)
    pub fn render_from(&self, start: usize) -> String {
        let mut result = String::new();
        for instr in &self.code[start.min(self.code.len())..] {
            result.push_str(&instr.to_string());
            result.push('\n');
        }
        result
    }

    /// Debug mode: дамп инструкций с номерами строк исходника
    pub fn dump(&self, name: &str) -> String {
        let mut result = format!("== {} ==\n", name);
        for (index, instr) in self.code.iter().enumerate() {
            let line = self.get_line(index);
            result.push_str(&format!("{:04} ", index));
            if index > 0 && line == self.lines[index - 1] {
                result.push_str("   | ");
            } else {
                result.push_str(&format!("{:4} ", line));
            }
            result.push_str(&format!("{}\n", instr));
        }
        result
    }
}

impl Default for Program {
    fn default() -> Self {
        Self::new()
    }
}
