#![cfg(not(feature = "hydrate"))]

use session::{SessionStore, StoreOptions};

use super::*;

#[test]
fn load_is_empty_outside_browser() {
    assert_eq!(LocalStorageSlot.load("auth-storage").unwrap(), None);
}

#[test]
fn store_is_accepted_outside_browser() {
    assert!(LocalStorageSlot.store("auth-storage", "{}").is_ok());
    assert_eq!(LocalStorageSlot.load("auth-storage").unwrap(), None);
}

#[test]
fn server_store_never_rehydrates_a_session() {
    let mut store = SessionStore::open(LocalStorageSlot, StoreOptions::default());
    store.login("a@b.com", true);
    let fresh = SessionStore::open(LocalStorageSlot, StoreOptions::default());
    assert!(!fresh.state().is_authenticated());
}
