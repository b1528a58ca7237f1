//! Storage media behind `KeyValueStorage`.
//!
//! - `MemoryStorage`: shared in-process map (tests, ephemeral sessions)
//! - `DirStorage`: one JSON document per key inside a directory
//! - `CookieJarStorage`: single `name=value` jar file, values percent-encoded
//! - `MirroredStorage`: writes to both tiers, reads the fallback only when the primary is empty

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::rc::Rc;

use crate::kernel::services::ports::storage::{KeyValueStorage, Result, StorageError};

#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    entries: Rc<RefCell<BTreeMap<String, String>>>,
    fail_writes: Rc<Cell<bool>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_entry(self, key: &str, value: &str) -> Self {
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        self
    }

    /// Makes every subsequent `set` fail, for every clone of this handle.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.entries.borrow().clone()
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.borrow().get(key).cloned()
    }

    fn check_writable(&self) -> Result<()> {
        if self.fail_writes.get() {
            return Err(StorageError::Unavailable("memory storage is read-only".into()));
        }
        Ok(())
    }
}

impl KeyValueStorage for MemoryStorage {
    fn name(&self) -> &'static str {
        "memory"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.borrow().get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.check_writable()?;
        self.entries
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[derive(Debug, Clone)]
pub struct DirStorage {
    dir: PathBuf,
}

impl DirStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> PathBuf {
        let file: String = key
            .chars()
            .map(|ch| {
                if ch.is_ascii_alphanumeric() || matches!(ch, '.' | '-' | '_') {
                    ch
                } else {
                    '_'
                }
            })
            .collect();
        self.dir.join(format!("{file}.json"))
    }
}

impl KeyValueStorage for DirStorage {
    fn name(&self) -> &'static str {
        "dir"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        match std::fs::read_to_string(self.path_for(key)) {
            Ok(data) => Ok(Some(data)),
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(err.into()),
        }
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        if !self.dir.exists() {
            std::fs::create_dir_all(&self.dir)?;
        }
        // Write then rename so a crash never leaves a half-written document behind.
        let path = self.path_for(key);
        let tmp = path.with_extension("json.tmp");
        std::fs::write(&tmp, value)?;
        std::fs::rename(&tmp, &path)?;
        Ok(())
    }
}

/// Cookie-style jar: one `name=value` pair per line, both sides percent-encoded.
#[derive(Debug, Clone)]
pub struct CookieJarStorage {
    path: PathBuf,
}

impl CookieJarStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    fn read_jar(&self) -> Result<BTreeMap<String, String>> {
        let data = match std::fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(err) if err.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(data
            .lines()
            .filter_map(|line| {
                let (name, value) = line.split_once('=')?;
                Some((percent_decode(name)?, percent_decode(value)?))
            })
            .collect())
    }

    fn write_jar(&self, jar: &BTreeMap<String, String>) -> Result<()> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent)?;
            }
        }
        let mut out = String::new();
        for (name, value) in jar {
            out.push_str(&percent_encode(name));
            out.push('=');
            out.push_str(&percent_encode(value));
            out.push('\n');
        }
        std::fs::write(&self.path, out)?;
        Ok(())
    }
}

impl KeyValueStorage for CookieJarStorage {
    fn name(&self) -> &'static str {
        "cookie-jar"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.read_jar()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut jar = self.read_jar()?;
        jar.insert(key.to_string(), value.to_string());
        self.write_jar(&jar)
    }
}

fn percent_encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        if byte.is_ascii_alphanumeric() || matches!(byte, b'-' | b'_' | b'.' | b'~') {
            out.push(byte as char);
        } else {
            out.push_str(&format!("%{byte:02X}"));
        }
    }
    out
}

fn percent_decode(value: &str) -> Option<String> {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut idx = 0;
    while idx < bytes.len() {
        if bytes[idx] == b'%' {
            let hex = value.get(idx + 1..idx + 3)?;
            out.push(u8::from_str_radix(hex, 16).ok()?);
            idx += 3;
        } else {
            out.push(bytes[idx]);
            idx += 1;
        }
    }
    String::from_utf8(out).ok()
}

/// Primary medium with a mirrored fallback reader.
pub struct MirroredStorage {
    primary: Box<dyn KeyValueStorage>,
    mirror: Box<dyn KeyValueStorage>,
}

impl MirroredStorage {
    pub fn new(primary: Box<dyn KeyValueStorage>, mirror: Box<dyn KeyValueStorage>) -> Self {
        Self { primary, mirror }
    }
}

impl KeyValueStorage for MirroredStorage {
    fn name(&self) -> &'static str {
        "mirrored"
    }

    fn get(&self, key: &str) -> Result<Option<String>> {
        match self.primary.get(key) {
            Ok(Some(value)) if !value.is_empty() => return Ok(Some(value)),
            Ok(_) => {}
            Err(err) => {
                tracing::warn!(medium = self.primary.name(), key, error = %err, "primary read failed");
            }
        }
        self.mirror.get(key)
    }

    /// Both tiers are attempted; the first failure is reported after the second write ran.
    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let primary = self.primary.set(key, value);
        let mirror = self.mirror.set(key, value);
        primary.and(mirror)
    }
}

#[cfg(test)]
#[path = "../../../../tests/unit/kernel/services/adapters/storage.rs"]
mod tests;
