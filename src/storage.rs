//! Key-value persistence surface.
//!
//! The content store talks to storage through [`KeyValueStorage`]: a
//! synchronous get/set/remove by string key, fallible but always
//! terminating. [`FileStorage`] keeps one file per key under a data
//! directory; [`MemoryStorage`] backs tests.

use std::{
    collections::HashMap,
    fs, io,
    path::PathBuf,
    sync::Mutex,
};
use thiserror::Error;

/// Storage-surface errors.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("storage io error for key `{key}`")]
    Io {
        key: String,
        #[source]
        source: io::Error,
    },

    #[error("storage is unavailable")]
    Poisoned,
}

impl StorageError {
    pub fn io(key: &str, source: io::Error) -> Self {
        Self::Io {
            key: key.to_string(),
            source,
        }
    }
}

/// Synchronous key-value storage addressed by string keys.
pub trait KeyValueStorage: Send {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError>;
    fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;
    fn remove(&self, key: &str) -> Result<(), StorageError>;
}

// ============================================================================
// File-backed storage
// ============================================================================

/// One file per key under a data directory.
///
/// The directory is created lazily on the first write, so a read-only
/// session never touches the filesystem.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{key}.json"))
    }
}

impl KeyValueStorage for FileStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        match fs::read_to_string(self.path_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(err) => Err(StorageError::io(key, err)),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root).map_err(|err| StorageError::io(key, err))?;
        fs::write(self.path_for(key), value).map_err(|err| StorageError::io(key, err))
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        match fs::remove_file(self.path_for(key)) {
            Ok(()) => Ok(()),
            Err(err) if err.kind() == io::ErrorKind::NotFound => Ok(()),
            Err(err) => Err(StorageError::io(key, err)),
        }
    }
}

// ============================================================================
// In-memory storage
// ============================================================================

/// In-memory storage for tests and ephemeral sessions.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    entries: Mutex<HashMap<String, String>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate a key, bypassing the trait. Test setup helper.
    pub fn seed(&self, key: &str, value: &str) {
        if let Ok(mut entries) = self.entries.lock() {
            entries.insert(key.to_string(), value.to_string());
        }
    }
}

impl KeyValueStorage for MemoryStorage {
    fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut entries = self.entries.lock().map_err(|_| StorageError::Poisoned)?;
        entries.remove(key);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage_roundtrip() {
        let storage = MemoryStorage::new();
        assert_eq!(storage.get("k").unwrap(), None);
        storage.set("k", "v").unwrap();
        assert_eq!(storage.get("k").unwrap(), Some("v".to_string()));
        storage.remove("k").unwrap();
        assert_eq!(storage.get("k").unwrap(), None);
    }

    #[test]
    fn test_memory_storage_remove_missing_is_ok() {
        let storage = MemoryStorage::new();
        storage.remove("never-set").unwrap();
    }

    #[test]
    fn test_file_storage_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());

        assert_eq!(storage.get("content").unwrap(), None);
        storage.set("content", r#"{"a": 1}"#).unwrap();
        assert_eq!(
            storage.get("content").unwrap(),
            Some(r#"{"a": 1}"#.to_string())
        );
        storage.remove("content").unwrap();
        assert_eq!(storage.get("content").unwrap(), None);
    }

    #[test]
    fn test_file_storage_remove_missing_is_ok() {
        let dir = tempfile::tempdir().unwrap();
        let storage = FileStorage::new(dir.path());
        storage.remove("never-set").unwrap();
    }

    #[test]
    fn test_file_storage_creates_data_dir_on_write() {
        let dir = tempfile::tempdir().unwrap();
        let nested = dir.path().join("data").join("store");
        let storage = FileStorage::new(&nested);
        storage.set("k", "v").unwrap();
        assert!(nested.join("k.json").is_file());
    }
}
