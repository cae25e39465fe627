use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_storage_missing_key_is_none() {
    let storage = MemoryStorage::new();
    assert_eq!(storage.get_item("user"), None);
}

#[test]
fn memory_storage_set_overwrites_prior_value() {
    let storage = MemoryStorage::new();
    storage.set_item("user", "first").unwrap();
    storage.set_item("user", "second").unwrap();
    assert_eq!(storage.get_item("user").as_deref(), Some("second"));
}

#[test]
fn memory_storage_remove_clears_value() {
    let storage = MemoryStorage::new();
    storage.set_item("user", "x").unwrap();
    storage.remove_item("user");
    storage.remove_item("never-set");
    assert_eq!(storage.get_item("user"), None);
}

#[test]
fn memory_storage_clones_share_items() {
    let storage = MemoryStorage::new();
    let other = storage.clone();
    storage.set_item("k", "v").unwrap();
    assert_eq!(other.get_item("k").as_deref(), Some("v"));
}

// =============================================================
// LocalStorage outside the browser
// =============================================================

#[cfg(not(feature = "hydrate"))]
#[test]
fn local_storage_is_noop_in_native_tests() {
    let storage = LocalStorage;
    assert!(storage.set_item("user", "x").is_ok());
    assert_eq!(storage.get_item("user"), None);
    storage.remove_item("user");
}

#[cfg(not(feature = "hydrate"))]
#[test]
fn browser_storage_falls_back_to_memory() {
    let storage = browser_storage();
    storage.set_item("user", "x").unwrap();
    assert_eq!(storage.get_item("user").as_deref(), Some("x"));
}
