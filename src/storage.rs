//! Key-value persistence used by the project store.
//!
//! Values are opaque strings. [`FileStorage`] keeps one file per key in a
//! data directory; [`MemoryStorage`] keeps them in a map.

use crate::error::{DevdeckError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

const FILE_EXTENSION: &str = "json";

pub trait Storage {
    /// Read the value stored under `key`. `Ok(None)` means nothing was ever stored.
    fn get_data(&self, key: &str) -> Result<Option<String>>;

    /// Store `value` under `key`, replacing any previous value.
    fn set_data(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: key `k` lives at `<dir>/k.json`.
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.{FILE_EXTENSION}"))
    }
}

impl Storage for FileStorage {
    fn get_data(&self, key: &str) -> Result<Option<String>> {
        let path = self.path_for(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(path)?))
    }

    fn set_data(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.dir)?;
        let path = self.path_for(key);
        // Write beside the target and rename so a failed write never truncates it.
        let tmp = self.dir.join(format!(".{key}.{FILE_EXTENSION}.tmp"));
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }
        Ok(())
    }
}

/// In-memory storage. Writes can be switched off to simulate a failing disk.
#[derive(Debug, Default)]
pub struct MemoryStorage {
    values: Mutex<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with `value` stored under `key`.
    pub fn with_value(key: &str, value: &str) -> Self {
        let storage = Self::new();
        storage.insert(key, value);
        storage
    }

    pub fn insert(&self, key: &str, value: &str) {
        if let Ok(mut values) = self.values.lock() {
            values.insert(key.to_string(), value.to_string());
        }
    }

    pub fn raw(&self, key: &str) -> Option<String> {
        self.values.lock().ok()?.get(key).cloned()
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl Storage for MemoryStorage {
    fn get_data(&self, key: &str) -> Result<Option<String>> {
        Ok(self.raw(key))
    }

    fn set_data(&self, key: &str, value: &str) -> Result<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(DevdeckError::Storage {
                key: key.to_string(),
                message: "writes are disabled".to_string(),
            });
        }
        self.insert(key, value);
        Ok(())
    }
}

impl<S: Storage + ?Sized> Storage for std::sync::Arc<S> {
    fn get_data(&self, key: &str) -> Result<Option<String>> {
        (**self).get_data(key)
    }

    fn set_data(&self, key: &str, value: &str) -> Result<()> {
        (**self).set_data(key, value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_file_storage_missing_key_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        assert!(storage.get_data("projects").unwrap().is_none());
    }

    #[test]
    fn test_file_storage_writes_key_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.set_data("projects", "[]").unwrap();

        let path = temp_dir.path().join("projects.json");
        assert_eq!(storage.path_for("projects"), path);
        assert_eq!(fs::read_to_string(path).unwrap(), "[]");
        assert_eq!(storage.get_data("projects").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_file_storage_overwrites_and_leaves_no_temp_file() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.set_data("projects", "first").unwrap();
        storage.set_data("projects", "second").unwrap();

        assert_eq!(
            storage.get_data("projects").unwrap().as_deref(),
            Some("second")
        );
        let entries: Vec<_> = fs::read_dir(temp_dir.path()).unwrap().collect();
        assert_eq!(entries.len(), 1);
    }

    #[test]
    fn test_file_storage_creates_missing_directory() {
        let temp_dir = TempDir::new().unwrap();
        let nested = temp_dir.path().join("a").join("b");
        let storage = FileStorage::new(&nested);
        storage.set_data("projects", "[]").unwrap();
        assert!(nested.join("projects.json").exists());
    }

    #[test]
    fn test_file_storage_failed_write_keeps_previous_value() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path());
        storage.set_data("projects", "kept").unwrap();

        // A directory where the temp file would go makes the write fail.
        fs::create_dir(temp_dir.path().join(".projects.json.tmp")).unwrap();
        assert!(storage.set_data("projects", "lost").is_err());
        assert_eq!(
            storage.get_data("projects").unwrap().as_deref(),
            Some("kept")
        );
    }

    #[test]
    fn test_memory_storage_round_trip() {
        let storage = MemoryStorage::new();
        assert!(storage.get_data("k").unwrap().is_none());
        storage.set_data("k", "v").unwrap();
        assert_eq!(storage.get_data("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_memory_storage_failing_writes() {
        let storage = MemoryStorage::with_value("k", "old");
        storage.set_fail_writes(true);
        let err = storage.set_data("k", "new").unwrap_err();
        assert!(matches!(err, DevdeckError::Storage { .. }));
        assert_eq!(storage.raw("k").as_deref(), Some("old"));
    }
}
