//! Browser `localStorage` as a session durable slot.
//!
//! SYSTEM CONTEXT
//! ==============
//! Centralizes the hydrate-only web-sys glue. Outside the browser (SSR and
//! native tests) the slot is always empty and silently accepts writes, which
//! keeps server rendering deterministic.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use session::{DurableSlot, StorageError};

#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorageSlot;

impl DurableSlot for LocalStorageSlot {
    fn load(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?.get_item(key).map_err(|_| StorageError::Unavailable)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Ok(None)
        }
    }

    fn store(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            local_storage()?
                .set_item(key, value)
                .map_err(|e| StorageError::Rejected(format!("{e:?}")))
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Ok(())
        }
    }
}

#[cfg(feature = "hydrate")]
fn local_storage() -> Result<web_sys::Storage, StorageError> {
    web_sys::window()
        .and_then(|w| w.local_storage().ok().flatten())
        .ok_or(StorageError::Unavailable)
}
