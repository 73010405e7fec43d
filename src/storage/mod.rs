//! Storage layer for spendlog
//!
//! Provides JSON file storage for the expense list with atomic writes and
//! automatic directory creation. The store is stateless: it is a pure
//! read/write function of the ledger's current contents and never retains
//! its own copy of the records.

pub mod file_io;

pub use file_io::{read_json_or_default, remove_file_if_exists, write_json_atomic};

use std::path::{Path, PathBuf};

use crate::error::ExpenseError;
use crate::models::ExpenseRecord;

/// The persistence adapter for the expense list
///
/// The backing store is a single JSON array of record objects. Reading a
/// missing or malformed store yields an empty list; startup never fails on
/// the store. Saving replaces the full file contents atomically.
pub struct ExpenseStore {
    path: PathBuf,
}

impl ExpenseStore {
    /// Create a store backed by the given file path
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Whether the backing file currently exists
    pub fn exists(&self) -> bool {
        self.path.exists()
    }

    /// Load all records from the backing store
    ///
    /// Degrades to an empty list when the file is absent, unreadable, or not
    /// well-formed JSON. No distinction is surfaced between those cases.
    pub fn load(&self) -> Vec<ExpenseRecord> {
        read_json_or_default(&self.path)
    }

    /// Serialize the full record list to the backing store
    ///
    /// Full-replace write: prior contents are overwritten so the file always
    /// mirrors the in-memory list exactly.
    pub fn save(&self, records: &[ExpenseRecord]) -> Result<(), ExpenseError> {
        write_json_atomic(&self.path, &records)
    }

    /// Remove the backing store entirely
    ///
    /// A no-op (success) when the file does not exist.
    pub fn purge(&self) -> Result<(), ExpenseError> {
        remove_file_if_exists(&self.path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> ExpenseStore {
        ExpenseStore::new(temp_dir.path().join("expenses.json"))
    }

    fn sample_records() -> Vec<ExpenseRecord> {
        vec![
            ExpenseRecord::new(100.0, "Food", "2026-01-01"),
            ExpenseRecord::new(250.5, "Bills", "2026-01-02"),
            ExpenseRecord::new(49.5, "Food", "2026-01-03"),
        ]
    }

    #[test]
    fn test_load_missing_store_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        assert!(store.load().is_empty());
        assert!(!store.exists());
    }

    #[test]
    fn test_load_corrupt_store_is_empty() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        fs::write(store.path(), "{{{ definitely not json").unwrap();

        assert!(store.load().is_empty());
    }

    #[test]
    fn test_save_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);
        let records = sample_records();

        store.save(&records).unwrap();
        let loaded = store.load();
        assert_eq!(loaded, records);

        // Saving the loaded list and reloading yields the same sequence
        store.save(&loaded).unwrap();
        assert_eq!(store.load(), records);
    }

    #[test]
    fn test_save_is_full_replace() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.save(&sample_records()).unwrap();
        let shorter = vec![ExpenseRecord::new(10.0, "Transport", "2026-02-01")];
        store.save(&shorter).unwrap();

        assert_eq!(store.load(), shorter);
    }

    #[test]
    fn test_empty_list_serializes_to_empty_array() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.save(&[]).unwrap();
        let contents = fs::read_to_string(store.path()).unwrap();
        assert_eq!(contents.trim(), "[]");
    }

    #[test]
    fn test_store_format_is_bare_array_of_objects() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store
            .save(&[ExpenseRecord::new(20.0, "Shopping", "2026-03-10")])
            .unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(store.path()).unwrap()).unwrap();
        assert_eq!(value[0]["amount"], 20.0);
        assert_eq!(value[0]["category"], "Shopping");
        assert_eq!(value[0]["date"], "2026-03-10");
    }

    #[test]
    fn test_purge_removes_store() {
        let temp_dir = TempDir::new().unwrap();
        let store = store_in(&temp_dir);

        store.save(&sample_records()).unwrap();
        assert!(store.exists());

        store.purge().unwrap();
        assert!(!store.exists());
        assert!(store.load().is_empty());

        // Purging again is still a success
        store.purge().unwrap();
    }
}
