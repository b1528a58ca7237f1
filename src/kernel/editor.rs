//! Editor window binding: which file the editor edits. Content lives in the file store and every
//! keystroke writes through.

use crate::kernel::files::FileStore;

pub const UNTITLED: &str = "untitled.txt";

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditorSession {
    file: Option<String>,
}

impl EditorSession {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn bind(&mut self, name: impl Into<String>) {
        self.file = Some(name.into());
    }

    /// The edited file; `untitled.txt` while unbound.
    pub fn file_name(&self) -> &str {
        self.file.as_deref().unwrap_or(UNTITLED)
    }

    pub fn title(&self) -> String {
        match &self.file {
            Some(name) => format!("Editor - {name}"),
            None => "Editor".to_string(),
        }
    }

    /// Makes sure the edited file exists.
    pub fn mount(&self, files: &mut FileStore) {
        if !files.contains(self.file_name()) {
            files.touch(self.file_name());
        }
    }

    pub fn content<'a>(&self, files: &'a FileStore) -> &'a str {
        files.read(self.file_name()).unwrap_or_default()
    }

    pub fn insert_text(&self, files: &mut FileStore, text: &str) -> bool {
        if text.is_empty() {
            return false;
        }
        let mut content = self.content(files).to_string();
        content.push_str(text);
        files.write(self.file_name(), &content);
        true
    }

    pub fn delete_backward(&self, files: &mut FileStore) -> bool {
        let mut content = self.content(files).to_string();
        if content.pop().is_none() {
            return false;
        }
        files.write(self.file_name(), &content);
        true
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/editor.rs"]
mod tests;
