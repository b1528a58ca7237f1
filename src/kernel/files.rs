//! Virtual file store: a flat name -> content map persisted write-through.

use std::collections::BTreeMap;

use thiserror::Error;

use crate::kernel::services::ports::storage::{KeyValueStorage, FILES_KEY};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FileError {
    #[error("Not found")]
    NotFound(String),
    #[error("Destination exists")]
    Conflict(String),
}

pub type Result<T> = std::result::Result<T, FileError>;

pub fn default_files() -> BTreeMap<String, String> {
    [
        (
            "readme.txt",
            "Welcome to your files!\nEdit and it will be saved locally.",
        ),
        ("script.js", "console.log('Hello from file store');"),
        ("style.css", "body { background:#101418; color:#cfc; }"),
        ("index.html", "<!doctype html><title>ZeroDesk</title>"),
    ]
    .into_iter()
    .map(|(name, content)| (name.to_string(), content.to_string()))
    .collect()
}

pub struct FileStore {
    files: BTreeMap<String, String>,
    storage: Box<dyn KeyValueStorage>,
}

impl std::fmt::Debug for FileStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FileStore")
            .field("files", &self.files.len())
            .field("storage", &self.storage.name())
            .finish()
    }
}

impl FileStore {
    /// Reads the persisted map; seeds the default files when nothing usable is stored.
    pub fn load(storage: Box<dyn KeyValueStorage>) -> Self {
        let files = match storage.get(FILES_KEY) {
            Ok(Some(raw)) => match serde_json::from_str::<BTreeMap<String, String>>(&raw) {
                Ok(files) => files,
                Err(err) => {
                    tracing::warn!(error = %err, "stored files are corrupt; seeding defaults");
                    default_files()
                }
            },
            Ok(None) => default_files(),
            Err(err) => {
                tracing::warn!(medium = storage.name(), error = %err, "files unreadable; seeding defaults");
                default_files()
            }
        };
        tracing::debug!(count = files.len(), "file store loaded");
        Self { files, storage }
    }

    pub fn entries(&self) -> &BTreeMap<String, String> {
        &self.files
    }

    pub fn names(&self) -> Vec<&str> {
        self.files.keys().map(String::as_str).collect()
    }

    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.files.contains_key(name)
    }

    pub fn read(&self, name: &str) -> Result<&str> {
        self.files
            .get(name)
            .map(String::as_str)
            .ok_or_else(|| FileError::NotFound(name.to_string()))
    }

    /// Create-or-overwrite.
    pub fn write(&mut self, name: &str, content: &str) {
        self.files.insert(name.to_string(), content.to_string());
        self.persist();
    }

    /// Creates an empty file unless one exists; returns whether it was created.
    pub fn touch(&mut self, name: &str) -> bool {
        let created = !self.files.contains_key(name);
        if created {
            self.files.insert(name.to_string(), String::new());
        }
        self.persist();
        created
    }

    /// Appends `text` as a new line; no separator when the file is missing or empty.
    pub fn append(&mut self, name: &str, text: &str) {
        let content = self.files.entry(name.to_string()).or_default();
        if !content.is_empty() {
            content.push('\n');
        }
        content.push_str(text);
        self.persist();
    }

    pub fn delete(&mut self, name: &str) -> Result<()> {
        if self.files.remove(name).is_none() {
            return Err(FileError::NotFound(name.to_string()));
        }
        self.persist();
        Ok(())
    }

    pub fn rename(&mut self, old: &str, new: &str) -> Result<()> {
        if !self.files.contains_key(old) {
            return Err(FileError::NotFound(old.to_string()));
        }
        if self.files.contains_key(new) {
            return Err(FileError::Conflict(new.to_string()));
        }
        if let Some(content) = self.files.remove(old) {
            self.files.insert(new.to_string(), content);
        }
        self.persist();
        Ok(())
    }

    /// Copies `src` over `dst`, replacing any existing destination.
    pub fn copy(&mut self, src: &str, dst: &str) -> Result<()> {
        let content = self.read(src)?.to_string();
        self.files.insert(dst.to_string(), content);
        self.persist();
        Ok(())
    }

    /// Writes the whole map. Failures are logged and dropped: memory stays authoritative.
    fn persist(&mut self) {
        let raw = match serde_json::to_string(&self.files) {
            Ok(raw) => raw,
            Err(err) => {
                tracing::warn!(error = %err, "failed to encode files");
                return;
            }
        };
        if let Err(err) = self.storage.set(FILES_KEY, &raw) {
            tracing::warn!(medium = self.storage.name(), error = %err, "failed to persist files");
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/kernel/files.rs"]
mod tests;
