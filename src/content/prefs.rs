//! Key-value preference persistence.
//!
//! The file store keeps every preference in one flat JSON object, e.g. `{"language": "fr"}`.
//! Writes are synchronous and rewrite the whole file.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use crate::foundation::error::{TarotError, TarotResult};

/// Durable string-to-string preference storage.
pub trait PreferenceStore {
    /// Read the value stored under `key`, if any.
    fn get(&self, key: &str) -> TarotResult<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set(&mut self, key: &str, value: &str) -> TarotResult<()>;
}

/// Volatile store, useful for tests and hosts without a writable disk.
#[derive(Clone, Debug, Default)]
pub struct MemoryPreferenceStore {
    entries: BTreeMap<String, String>,
}

impl MemoryPreferenceStore {
    /// Empty store.
    pub fn new() -> Self {
        Self::default()
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> TarotResult<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> TarotResult<()> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Store backed by a JSON object file.
#[derive(Clone, Debug)]
pub struct FilePreferenceStore {
    path: PathBuf,
}

impl FilePreferenceStore {
    /// Store at `path`. The file is created on first write.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Backing file path.
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn load(&self) -> TarotResult<BTreeMap<String, String>> {
        let text = match std::fs::read_to_string(&self.path) {
            Ok(t) => t,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(e) => {
                return Err(TarotError::storage(format!(
                    "read '{}': {e}",
                    self.path.display()
                )));
            }
        };
        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }
        serde_json::from_str(&text).map_err(|e| {
            TarotError::serde(format!("parse preferences '{}': {e}", self.path.display()))
        })
    }
}

impl PreferenceStore for FilePreferenceStore {
    fn get(&self, key: &str) -> TarotResult<Option<String>> {
        Ok(self.load()?.remove(key))
    }

    fn set(&mut self, key: &str, value: &str) -> TarotResult<()> {
        let mut entries = self.load().unwrap_or_else(|e| {
            tracing::warn!(error = %e, "discarding unreadable preference file");
            BTreeMap::new()
        });
        entries.insert(key.to_owned(), value.to_owned());

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            std::fs::create_dir_all(parent).map_err(|e| {
                TarotError::storage(format!("create '{}': {e}", parent.display()))
            })?;
        }
        let json = serde_json::to_string_pretty(&entries)
            .map_err(|e| TarotError::serde(format!("encode preferences: {e}")))?;
        std::fs::write(&self.path, json)
            .map_err(|e| TarotError::storage(format!("write '{}': {e}", self.path.display())))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/content/prefs.rs"]
mod tests;
