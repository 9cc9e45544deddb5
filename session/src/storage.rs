//! Durable key-value slot used to rehydrate the session.
//!
//! SYSTEM CONTEXT
//! ==============
//! In the browser the slot is `localStorage` (see `client::util::storage`).
//! On the server and in tests it is [`MemorySlot`].

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::{Arc, Mutex};

/// Error returned by a [`DurableSlot`] or while decoding its contents.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// The backing storage is not reachable (no window, disabled storage).
    #[error("durable storage unavailable")]
    Unavailable,
    /// The backing storage refused the write (quota, privacy mode).
    #[error("durable storage rejected write: {0}")]
    Rejected(String),
    /// The stored record is not valid JSON for the expected layout.
    #[error("malformed session record: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// A string-keyed durable slot.
pub trait DurableSlot: Send + Sync {
    /// Read the raw value stored under `key`, if any.
    ///
    /// # Errors
    ///
    /// Returns [`StorageError::Unavailable`] when the backing storage cannot be reached.
    fn load(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Overwrite the value stored under `key`.
    ///
    /// # Errors
    ///
    /// Returns a [`StorageError`] when the backing storage cannot be reached
    /// or refuses the write.
    fn store(&self, key: &str, value: &str) -> Result<(), StorageError>;
}

/// Process-local slot. Clones share the same map.
#[derive(Clone, Debug, Default)]
pub struct MemorySlot {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl MemorySlot {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the value under `key`.
    #[must_use]
    pub fn get(&self, key: &str) -> Option<String> {
        self.entries.lock().ok()?.get(key).cloned()
    }

    /// Drop every entry, as if storage were cleared externally.
    pub fn clear(&self) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.clear();
        }
    }
}

impl DurableSlot for MemorySlot {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        Ok(entries.get(key).cloned())
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Unavailable)?;
        entries.insert(key.to_owned(), value.to_owned());
        Ok(())
    }
}
