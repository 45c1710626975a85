//! Storage layer for BudgetEase
//!
//! Provides the key-value storage media and the persistence bridge that
//! keeps each app's whole state as a single JSON blob.

pub mod file_io;
pub mod kv;
pub mod persistence;

pub use file_io::{read_text, write_text_atomic};
pub use kv::{FileStore, KeyValueStore, MemoryStore};
pub use persistence::{Persistence, BUDGET_STORAGE_KEY, TODO_STORAGE_KEY};

use crate::config::paths::BudgetPaths;
use crate::error::BudgetError;

/// Open the file-backed medium under the configured data directory
pub fn open_file_store(paths: &BudgetPaths) -> Result<FileStore, BudgetError> {
    paths.ensure_directories()?;
    Ok(FileStore::new(paths.data_dir()))
}
