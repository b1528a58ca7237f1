//! Entered-line history with Up/Down recall.

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct History {
    entries: Vec<String>,
    /// `None` while not recalling.
    cursor: Option<usize>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn entries(&self) -> &[String] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn cursor(&self) -> Option<usize> {
        self.cursor
    }

    /// Appends unconditionally (duplicates and invalid lines included) and stops recalling.
    pub fn push(&mut self, line: impl Into<String>) {
        self.entries.push(line.into());
        self.cursor = None;
    }

    /// Steps toward older entries, stopping at the oldest. Returns the new input text, or
    /// `None` when there is nothing to recall.
    pub fn recall_previous(&mut self) -> Option<&str> {
        let last = self.entries.len().checked_sub(1)?;
        let idx = match self.cursor {
            None => last,
            Some(idx) => idx.saturating_sub(1),
        };
        self.cursor = Some(idx);
        self.entries.get(idx).map(String::as_str)
    }

    /// Steps toward newer entries; when not recalling, starts from the oldest. Past the newest
    /// the input is cleared and recall ends. Returns `None` when the history is empty.
    pub fn recall_next(&mut self) -> Option<&str> {
        if self.entries.is_empty() {
            return None;
        }
        let next = self.cursor.map_or(0, |idx| idx + 1);
        match self.entries.get(next) {
            Some(entry) => {
                self.cursor = Some(next);
                Some(entry.as_str())
            }
            None => {
                self.cursor = None;
                Some("")
            }
        }
    }
}

#[cfg(test)]
#[path = "../../../tests/unit/kernel/shell/history.rs"]
mod tests;
