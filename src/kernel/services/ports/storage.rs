//! Key-value persistence contract shared by the file and settings stores.

use thiserror::Error;

/// Logical key holding the serialized `Settings`.
pub const SETTINGS_KEY: &str = "zerodesk.settings";
/// Logical key holding the serialized file map.
pub const FILES_KEY: &str = "zerodesk.files";

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io failure: {0}")]
    Io(#[from] std::io::Error),
    #[error("storage encoding failure: {0}")]
    Encoding(#[from] serde_json::Error),
    #[error("storage unavailable: {0}")]
    Unavailable(String),
}

pub type Result<T> = std::result::Result<T, StorageError>;

pub trait KeyValueStorage {
    fn name(&self) -> &'static str;

    fn get(&self, key: &str) -> Result<Option<String>>;

    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}

impl<S: KeyValueStorage + ?Sized> KeyValueStorage for Box<S> {
    fn name(&self) -> &'static str {
        (**self).name()
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }
}
