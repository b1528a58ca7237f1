//! Explorer window: a selectable list over the file store's names.

use crate::kernel::files::FileStore;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ExplorerState {
    selected: usize,
}

impl ExplorerState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected row, clamped to the current listing.
    pub fn selected(&self, files: &FileStore) -> usize {
        self.selected.min(files.len().saturating_sub(1))
    }

    pub fn selected_name<'a>(&self, files: &'a FileStore) -> Option<&'a str> {
        files.names().get(self.selected(files)).copied()
    }

    pub fn move_selection(&mut self, files: &FileStore, delta: isize) -> bool {
        let current = self.selected(files);
        let last = files.len().saturating_sub(1);
        let next = current.saturating_add_signed(delta).min(last);
        let changed = next != self.selected;
        self.selected = next;
        changed
    }

    /// Selects `name` if it is listed.
    pub fn select(&mut self, files: &FileStore, name: &str) -> bool {
        match files.names().iter().position(|n| *n == name) {
            Some(idx) => {
                self.selected = idx;
                true
            }
            None => false,
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/explorer.rs"]
mod tests;
