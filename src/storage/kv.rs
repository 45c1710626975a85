//! Key-value storage media
//!
//! The persistence bridge writes one string value under one key. Two media
//! are provided: an in-process map and a directory of JSON files.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::{Arc, RwLock};

use crate::error::BudgetError;

use super::file_io::{read_text, remove_if_exists, write_text_atomic};

/// String-keyed storage of string values
pub trait KeyValueStore {
    /// Value under `key`, or `None` if absent
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError>;

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError>;

    /// Remove `key`; removing an absent key succeeds
    fn remove(&self, key: &str) -> Result<(), BudgetError>;
}

/// In-memory storage. Clones share the same underlying map.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, String>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        let entries = self
            .entries
            .read()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire read lock: {}", e)))?;
        Ok(entries.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> Result<(), BudgetError> {
        let mut entries = self
            .entries
            .write()
            .map_err(|e| BudgetError::Storage(format!("Failed to acquire write lock: {}", e)))?;
        entries.remove(key);
        Ok(())
    }
}

/// File-backed storage: each key is a `<key>.json` file in one directory
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: PathBuf) -> Self {
        Self { dir }
    }

    /// Path of the file holding `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }

    fn check_key(key: &str) -> Result<(), BudgetError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if valid {
            Ok(())
        } else {
            Err(BudgetError::Storage(format!("Invalid storage key: {:?}", key)))
        }
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> Result<Option<String>, BudgetError> {
        Self::check_key(key)?;
        read_text(self.path_for(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), BudgetError> {
        Self::check_key(key)?;
        write_text_atomic(self.path_for(key), value)
    }

    fn remove(&self, key: &str) -> Result<(), BudgetError> {
        Self::check_key(key)?;
        remove_if_exists(self.path_for(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn exercise(store: &dyn KeyValueStore) {
        assert_eq!(store.get("budgetease_data").unwrap(), None);

        store.set("budgetease_data", "{}").unwrap();
        assert_eq!(store.get("budgetease_data").unwrap().as_deref(), Some("{}"));

        store.set("budgetease_data", "[]").unwrap();
        assert_eq!(store.get("budgetease_data").unwrap().as_deref(), Some("[]"));

        store.remove("budgetease_data").unwrap();
        assert_eq!(store.get("budgetease_data").unwrap(), None);
        store.remove("budgetease_data").unwrap();
    }

    #[test]
    fn test_memory_store() {
        exercise(&MemoryStore::new());
    }

    #[test]
    fn test_memory_store_clones_share_entries() {
        let a = MemoryStore::new();
        let b = a.clone();
        a.set("k", "v").unwrap();
        assert_eq!(b.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_store() {
        let temp_dir = TempDir::new().unwrap();
        exercise(&FileStore::new(temp_dir.path().join("data")));
    }

    #[test]
    fn test_file_store_layout() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());
        store.set("todoapp_data", "{}").unwrap();
        assert!(temp_dir.path().join("todoapp_data.json").exists());
    }

    #[test]
    fn test_file_store_rejects_path_like_keys() {
        let temp_dir = TempDir::new().unwrap();
        let store = FileStore::new(temp_dir.path().to_path_buf());
        assert!(store.set("../escape", "{}").is_err());
        assert!(store.get("").is_err());
    }
}
