// Выделение уникальных меток для конструкций потока управления

use std::fmt;

/// Символьная метка перехода, привязанная к одному экземпляру конструкции.
/// Создается один раз при открытии блока и достается из блока при закрытии -
/// никогда не генерируется заново.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Label(String);

impl Label {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for Label {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Монотонный счетчик меток, общий для всех видов конструкций.
/// Общий счетчик гарантирует попарную уникальность меток между любыми
/// конструкциями одного прогона, а не только внутри одного вида.
pub struct LabelAllocator {
    counter: usize,
}

impl LabelAllocator {
    pub fn new() -> Self {
        Self { counter: 0 }
    }

    fn next_id(&mut self) -> usize {
        let id = self.counter;
        self.counter += 1;
        id
    }

    /// Одиночная метка (выход из if)
    pub fn mint(&mut self, prefix: &str) -> Label {
        let id = self.next_id();
        Label(format!("{}_{}", prefix, id))
    }

    /// Пара меток входа/выхода с общим номером (циклы)
    pub fn mint_pair(&mut self, entry_prefix: &str, exit_prefix: &str) -> (Label, Label) {
        let id = self.next_id();
        (
            Label(format!("{}_{}", entry_prefix, id)),
            Label(format!("{}_{}", exit_prefix, id)),
        )
    }
}

impl Default for LabelAllocator {
    fn default() -> Self {
        Self::new()
    }
}
