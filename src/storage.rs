//! Key-Value Storage
//!
//! Durable string storage behind a trait so the task store can run against
//! `window.localStorage` in the browser and an in-memory map in tests.

use log::{error, warn};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

/// Storage-level errors
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("local storage is not available")]
    Unavailable,
    #[error("failed to read key \"{key}\": {message}")]
    Read { key: String, message: String },
    #[error("failed to write key \"{key}\": {message}")]
    Write { key: String, message: String },
    #[error("stored value for \"{key}\" is not valid JSON: {source}")]
    Corrupt {
        key: String,
        #[source]
        source: serde_json::Error,
    },
    #[error("failed to serialize value for \"{key}\": {source}")]
    Serialize {
        key: String,
        #[source]
        source: serde_json::Error,
    },
}

pub type StorageResult<T> = Result<T, StorageError>;

/// String key-value store
pub trait KeyValueStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;
    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}

/// `window.localStorage`, looked up on every call
#[derive(Debug, Clone, Copy, Default)]
pub struct BrowserStorage;

impl BrowserStorage {
    fn local_storage() -> StorageResult<web_sys::Storage> {
        web_sys::window()
            .ok_or(StorageError::Unavailable)?
            .local_storage()
            .map_err(|_| StorageError::Unavailable)?
            .ok_or(StorageError::Unavailable)
    }
}

impl KeyValueStorage for BrowserStorage {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Self::local_storage()?.get_item(key).map_err(|e| StorageError::Read {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        Self::local_storage()?.set_item(key, value).map_err(|e| StorageError::Write {
            key: key.to_string(),
            message: format!("{:?}", e),
        })
    }
}

/// Read and decode a JSON value. `Ok(None)` when the key is absent.
pub fn load_json<T, S>(storage: &S, key: &str) -> StorageResult<Option<T>>
where
    T: DeserializeOwned,
    S: KeyValueStorage + ?Sized,
{
    match storage.get(key)? {
        None => Ok(None),
        Some(raw) => serde_json::from_str(&raw)
            .map(Some)
            .map_err(|source| StorageError::Corrupt { key: key.to_string(), source }),
    }
}

/// Encode and write a JSON value, replacing whatever was stored
pub fn save_json<T, S>(storage: &S, key: &str, value: &T) -> StorageResult<()>
where
    T: Serialize + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    let raw = serde_json::to_string(value)
        .map_err(|source| StorageError::Serialize { key: key.to_string(), source })?;
    storage.set(key, &raw)
}

/// Load a value, falling back to `T::default()` on a missing, corrupt or
/// unreadable entry. Failures are logged, never returned.
pub fn load_or_default<T, S>(storage: &S, key: &str) -> T
where
    T: DeserializeOwned + Default,
    S: KeyValueStorage + ?Sized,
{
    match load_json(storage, key) {
        Ok(Some(value)) => value,
        Ok(None) => T::default(),
        Err(e @ StorageError::Corrupt { .. }) => {
            warn!("[Storage] Discarding unreadable value: {}", e);
            T::default()
        }
        Err(e) => {
            error!("[Storage] Error reading key \"{}\": {}", key, e);
            T::default()
        }
    }
}

/// Write a value, logging instead of failing
pub fn persist_or_log<T, S>(storage: &S, key: &str, value: &T) -> bool
where
    T: Serialize + ?Sized,
    S: KeyValueStorage + ?Sized,
{
    match save_json(storage, key, value) {
        Ok(()) => true,
        Err(e) => {
            error!("[Storage] Error setting key \"{}\": {}", key, e);
            false
        }
    }
}

#[cfg(test)]
pub mod memory {
    //! In-memory storage for tests

    use super::*;
    use std::collections::HashMap;
    use std::sync::{Arc, Mutex};

    /// Shared in-memory map; clones see the same entries
    #[derive(Debug, Clone, Default)]
    pub struct MemoryStorage {
        entries: Arc<Mutex<HashMap<String, String>>>,
    }

    impl MemoryStorage {
        pub fn new() -> Self {
            Self::default()
        }

        pub fn with_entry(key: &str, value: &str) -> Self {
            let storage = Self::new();
            storage.set(key, value).unwrap();
            storage
        }

        pub fn raw(&self, key: &str) -> Option<String> {
            self.entries.lock().unwrap().get(key).cloned()
        }
    }

    impl KeyValueStorage for MemoryStorage {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Ok(self.entries.lock().unwrap().get(key).cloned())
        }

        fn set(&self, key: &str, value: &str) -> StorageResult<()> {
            self.entries.lock().unwrap().insert(key.to_string(), value.to_string());
            Ok(())
        }
    }

    /// Storage that rejects every operation
    #[derive(Debug, Clone, Copy, Default)]
    pub struct BrokenStorage;

    impl KeyValueStorage for BrokenStorage {
        fn get(&self, key: &str) -> StorageResult<Option<String>> {
            Err(StorageError::Read { key: key.to_string(), message: "quota".to_string() })
        }

        fn set(&self, key: &str, _value: &str) -> StorageResult<()> {
            Err(StorageError::Write { key: key.to_string(), message: "quota".to_string() })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::memory::{BrokenStorage, MemoryStorage};
    use super::*;

    #[test]
    fn test_load_missing_key() {
        let storage = MemoryStorage::new();
        let loaded: Option<Vec<u32>> = load_json(&storage, "nums").unwrap();
        assert!(loaded.is_none());
    }

    #[test]
    fn test_save_then_load() {
        let storage = MemoryStorage::new();
        save_json(&storage, "nums", &vec![1, 2, 3]).unwrap();
        assert_eq!(storage.raw("nums").as_deref(), Some("[1,2,3]"));

        let loaded: Option<Vec<u32>> = load_json(&storage, "nums").unwrap();
        assert_eq!(loaded, Some(vec![1, 2, 3]));
    }

    #[test]
    fn test_corrupt_value_is_reported() {
        let storage = MemoryStorage::with_entry("nums", "[1, 2,");
        let result: StorageResult<Option<Vec<u32>>> = load_json(&storage, "nums");
        assert!(matches!(result, Err(StorageError::Corrupt { .. })));
    }

    #[test]
    fn test_load_or_default_degrades() {
        let corrupt = MemoryStorage::with_entry("nums", "{not json");
        let value: Vec<u32> = load_or_default(&corrupt, "nums");
        assert!(value.is_empty());

        let value: Vec<u32> = load_or_default(&BrokenStorage, "nums");
        assert!(value.is_empty());
    }

    #[test]
    fn test_persist_or_log_reports_failure() {
        assert!(!persist_or_log(&BrokenStorage, "nums", &vec![1]));
        assert!(persist_or_log(&MemoryStorage::new(), "nums", &vec![1]));
    }
}
