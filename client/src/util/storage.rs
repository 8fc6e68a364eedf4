//! Key-value persistence for UI preferences.
//!
//! SYSTEM CONTEXT
//! ==============
//! Components persist through [`KeyValueStore`] so the browser build can use
//! `localStorage`, the CLI a JSON file, and tests an in-memory map.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;

/// Failure to persist a value.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    /// No storage backend is reachable (e.g. `localStorage` disabled).
    #[error("storage unavailable")]
    Unavailable,
    /// The backend rejected or failed the write.
    #[error("storage write failed: {0}")]
    Write(String),
}

/// Minimal string key-value store.
pub trait KeyValueStore {
    /// Read `key`, or `None` when absent or unreadable.
    fn get(&self, key: &str) -> Option<String>;

    /// Write `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a [`StoreError`] if the value could not be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError>;
}

/// Process-local store. Values do not survive the process.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store pre-seeded with one entry.
    #[must_use]
    pub fn with_entry(key: &str, value: &str) -> Self {
        let mut entries = HashMap::new();
        entries.insert(key.to_owned(), value.to_owned());
        Self { entries }
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        self.entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}

/// Browser `window.localStorage`, scoped to the page origin.
#[cfg(feature = "hydrate")]
#[derive(Clone, Debug)]
pub struct LocalStorage {
    storage: Option<web_sys::Storage>,
}

#[cfg(feature = "hydrate")]
impl LocalStorage {
    /// Open the origin's local storage. Private-mode browsers may refuse;
    /// the store then reads nothing and rejects writes.
    #[must_use]
    pub fn open() -> Self {
        let storage = web_sys::window().and_then(|w| w.local_storage().ok().flatten());
        Self { storage }
    }
}

#[cfg(feature = "hydrate")]
impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Option<String> {
        self.storage.as_ref()?.get_item(key).ok().flatten()
    }

    fn set(&mut self, key: &str, value: &str) -> Result<(), StoreError> {
        let storage = self.storage.as_ref().ok_or(StoreError::Unavailable)?;
        storage
            .set_item(key, value)
            .map_err(|e| StoreError::Write(format!("{e:?}")))
    }
}
