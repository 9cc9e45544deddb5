use super::*;

#[test]
fn memory_slot_starts_empty() {
    let slot = MemorySlot::new();
    assert_eq!(slot.load("auth-storage").unwrap(), None);
    assert_eq!(slot.get("auth-storage"), None);
}

#[test]
fn memory_slot_store_then_load() {
    let slot = MemorySlot::new();
    slot.store("k", "v1").unwrap();
    slot.store("k", "v2").unwrap();
    assert_eq!(slot.load("k").unwrap().as_deref(), Some("v2"));
}

#[test]
fn memory_slot_clones_share_entries() {
    let slot = MemorySlot::new();
    let view = slot.clone();
    slot.store("k", "v").unwrap();
    assert_eq!(view.get("k").as_deref(), Some("v"));
}

#[test]
fn memory_slot_clear_removes_everything() {
    let slot = MemorySlot::new();
    slot.store("a", "1").unwrap();
    slot.store("b", "2").unwrap();
    slot.clear();
    assert_eq!(slot.get("a"), None);
    assert_eq!(slot.get("b"), None);
}

#[test]
fn storage_error_messages() {
    assert_eq!(StorageError::Unavailable.to_string(), "durable storage unavailable");
    assert_eq!(
        StorageError::Rejected("quota".to_owned()).to_string(),
        "durable storage rejected write: quota"
    );
}
