//! Synchronous key-value persistence adapters.
//!
//! SYSTEM CONTEXT
//! ==============
//! The personalization store only sees the `KeyValueStore` trait. Browser
//! builds back it with `window.localStorage`; tests and browsers without
//! storage access use the in-process `MemoryStorage`.
//!
//! ERROR HANDLING
//! ==============
//! Every operation returns `StorageError` instead of panicking. Callers
//! decide whether a failure matters; the store logs and carries on.

#[cfg(test)]
#[path = "storage_test.rs"]
mod storage_test;

use std::collections::HashMap;
use std::sync::Mutex;
use std::sync::atomic::{AtomicBool, Ordering};

/// Errors produced by persistence adapters.
#[derive(Debug, thiserror::Error)]
pub enum StorageError {
    /// No storage backend is reachable (SSR, private mode, disabled storage).
    #[error("storage unavailable")]
    Unavailable,

    /// Reading a key failed.
    #[error("read of '{key}' failed: {reason}")]
    Read { key: String, reason: String },

    /// Writing a key failed (quota exceeded, security error).
    #[error("write of '{key}' failed: {reason}")]
    Write { key: String, reason: String },

    /// Removing a key failed.
    #[error("remove of '{key}' failed: {reason}")]
    Remove { key: String, reason: String },

    /// A stored value could not be encoded or decoded as JSON.
    #[error("codec error for '{key}': {source}")]
    Codec {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Narrow synchronous string key-value contract.
///
/// No ordering or transactionality is promised across keys.
pub trait KeyValueStore: Send + Sync {
    /// Read the raw value for `key`, `Ok(None)` when absent.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// Store `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backend rejects the write.
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Delete `key`. Removing an absent key is not an error.
    ///
    /// # Errors
    ///
    /// Returns a `StorageError` when the backend rejects the delete.
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// =============================================================
// localStorage
// =============================================================

/// Adapter over `window.localStorage`.
///
/// Holds no handle; each call looks the storage object up again, so the
/// adapter stays `Send + Sync` and survives storage being toggled off
/// mid-session. Outside hydrate builds every call reports `Unavailable`.
#[derive(Clone, Copy, Debug, Default)]
pub struct LocalStorage;

impl LocalStorage {
    /// Whether `localStorage` is reachable right now.
    pub fn is_available() -> bool {
        #[cfg(feature = "hydrate")]
        {
            browser_storage().is_some()
        }
        #[cfg(not(feature = "hydrate"))]
        {
            false
        }
    }
}

#[cfg(feature = "hydrate")]
fn browser_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|w| w.local_storage().ok().flatten())
}

impl KeyValueStore for LocalStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = browser_storage().ok_or(StorageError::Unavailable)?;
            storage
                .get_item(key)
                .map_err(|e| StorageError::Read { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = browser_storage().ok_or(StorageError::Unavailable)?;
            storage
                .set_item(key, value)
                .map_err(|e| StorageError::Write { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = (key, value);
            Err(StorageError::Unavailable)
        }
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        #[cfg(feature = "hydrate")]
        {
            let storage = browser_storage().ok_or(StorageError::Unavailable)?;
            storage
                .remove_item(key)
                .map_err(|e| StorageError::Remove { key: key.to_owned(), reason: format!("{e:?}") })
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = key;
            Err(StorageError::Unavailable)
        }
    }
}

// =============================================================
// In-memory
// =============================================================

/// In-process map implementing `KeyValueStore`.
///
/// Writes and reads can be switched to fail so callers can exercise the
/// degraded path.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
    fail_reads: AtomicBool,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a store pre-populated with raw `(key, value)` pairs.
    #[must_use]
    pub fn with_entries<I, K, V>(entries: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let map = entries.into_iter().map(|(k, v)| (k.into(), v.into())).collect();
        Self { entries: Mutex::new(map), ..Self::default() }
    }

    /// Make every subsequent `get` fail with `StorageError::Read`.
    pub fn set_fail_reads(&self, fail: bool) {
        self.fail_reads.store(fail, Ordering::Relaxed);
    }

    /// Make every subsequent `set` fail with `StorageError::Write` and every
    /// `remove` with `StorageError::Remove`.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::Relaxed);
    }

    /// Raw value currently held for `key`, bypassing failure switches.
    pub fn raw(&self, key: &str) -> Option<String> {
        self.entries.lock().ok().and_then(|map| map.get(key).cloned())
    }

    fn poisoned(key: &str) -> String {
        format!("memory storage lock poisoned while accessing '{key}'")
    }
}

impl KeyValueStore for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        if self.fail_reads.load(Ordering::Relaxed) {
            return Err(StorageError::Read { key: key.to_owned(), reason: "reads disabled".to_owned() });
        }
        let map = self
            .entries
            .lock()
            .map_err(|_| StorageError::Read { key: key.to_owned(), reason: Self::poisoned(key) })?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StorageError::Write { key: key.to_owned(), reason: "quota exceeded".to_owned() });
        }
        let mut map = self
            .entries
            .lock()
            .map_err(|_| StorageError::Write { key: key.to_owned(), reason: Self::poisoned(key) })?;
        map.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::Relaxed) {
            return Err(StorageError::Remove { key: key.to_owned(), reason: "writes disabled".to_owned() });
        }
        let mut map = self
            .entries
            .lock()
            .map_err(|_| StorageError::Remove { key: key.to_owned(), reason: Self::poisoned(key) })?;
        map.remove(key);
        Ok(())
    }
}
