use super::*;

// =============================================================
// MemoryStorage
// =============================================================

#[test]
fn memory_get_absent_key_is_none() {
    let storage = MemoryStorage::new();
    assert!(storage.get("missing").unwrap().is_none());
}

#[test]
fn memory_set_then_get_returns_value() {
    let storage = MemoryStorage::new();
    storage.set("darkMode", "true").unwrap();
    assert_eq!(storage.get("darkMode").unwrap().as_deref(), Some("true"));
}

#[test]
fn memory_set_overwrites_previous_value() {
    let storage = MemoryStorage::new();
    storage.set("k", "1").unwrap();
    storage.set("k", "2").unwrap();
    assert_eq!(storage.raw("k").as_deref(), Some("2"));
}

#[test]
fn memory_remove_deletes_key_and_tolerates_absent() {
    let storage = MemoryStorage::with_entries([("k", "v")]);
    storage.remove("k").unwrap();
    storage.remove("k").unwrap();
    assert!(storage.raw("k").is_none());
}

#[test]
fn memory_with_entries_prepopulates() {
    let storage = MemoryStorage::with_entries([("a", "1"), ("b", "2")]);
    assert_eq!(storage.get("a").unwrap().as_deref(), Some("1"));
    assert_eq!(storage.get("b").unwrap().as_deref(), Some("2"));
}

#[test]
fn memory_failing_writes_reject_set_and_keep_old_value() {
    let storage = MemoryStorage::with_entries([("k", "old")]);
    storage.set_fail_writes(true);
    let err = storage.set("k", "new").unwrap_err();
    assert!(matches!(err, StorageError::Write { ref key, .. } if key == "k"));
    assert!(matches!(storage.remove("k"), Err(StorageError::Remove { .. })));
    assert_eq!(storage.raw("k").as_deref(), Some("old"));

    storage.set_fail_writes(false);
    storage.set("k", "new").unwrap();
    assert_eq!(storage.raw("k").as_deref(), Some("new"));
}

#[test]
fn memory_failing_reads_reject_get() {
    let storage = MemoryStorage::with_entries([("k", "v")]);
    storage.set_fail_reads(true);
    assert!(matches!(storage.get("k"), Err(StorageError::Read { .. })));
}

#[test]
fn memory_failure_switches_can_be_turned_off() {
    let storage = MemoryStorage::with_entries([("k", "v")]);
    storage.set_fail_reads(true);
    storage.set_fail_writes(true);
    assert!(matches!(storage.remove("k"), Err(StorageError::Remove { ref key, .. }) if key == "k"));

    storage.set_fail_reads(false);
    storage.set_fail_writes(false);
    assert_eq!(storage.get("k").unwrap().as_deref(), Some("v"));
    storage.remove("k").unwrap();
    assert_eq!(storage.get("k").unwrap(), None);
}

// =============================================================
// LocalStorage (non-hydrate build)
// =============================================================

#[test]
fn local_storage_is_unavailable_outside_browser() {
    assert!(!LocalStorage::is_available());
    assert!(matches!(LocalStorage.get("k"), Err(StorageError::Unavailable)));
    assert!(matches!(LocalStorage.set("k", "v"), Err(StorageError::Unavailable)));
    assert!(matches!(LocalStorage.remove("k"), Err(StorageError::Unavailable)));
}

// =============================================================
// StorageError
// =============================================================

#[test]
fn storage_error_messages_name_the_key() {
    let err = StorageError::Write { key: "likedVideos".into(), reason: "quota exceeded".into() };
    assert_eq!(err.to_string(), "write of 'likedVideos' failed: quota exceeded");
    assert_eq!(StorageError::Unavailable.to_string(), "storage unavailable");
}
