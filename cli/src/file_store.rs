//! JSON-file key-value store for the terminal front end.
//!
//! The whole file is a flat JSON object of string values. It is read once on
//! open and rewritten on every `set`, which is fine for a handful of UI
//! preferences.

#[cfg(test)]
#[path = "file_store_test.rs"]
mod file_store_test;

use std::collections::BTreeMap;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use client::{KeyValueStore, StoreError};

use crate::CliError;

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: BTreeMap<String, String>,
}

impl FileStore {
    /// Load `path`. A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns [`CliError::StateRead`] if the file exists but cannot be read,
    /// or [`CliError::InvalidJson`] if it is not a JSON object of strings.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, CliError> {
        let path = path.into();
        let entries = match std::fs::read_to_string(&path) {
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(e) if e.kind() == ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(CliError::StateRead { path, source }),
        };
        Ok(Self { path, entries })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn flush(&self) -> Result<(), StoreError> {
        let raw = serde_json::to_string_pretty(&self.entries).map_err(|e| StoreError::Write(e.to_string()))?;
        std::fs::write(&self.path, raw).map_err(|e| StoreError::Write(format!("{}: {e}", self.path.display())))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        self.flush()
    }
}
