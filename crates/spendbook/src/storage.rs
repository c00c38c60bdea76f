//! File-backed storage for the record collection.
//!
//! The whole collection persists as one JSON payload under a fixed
//! namespace key; on disk that key is the file stem. The key carries the
//! schema version by hand: a change to the payload shape must introduce a
//! new key (and so a new file) instead of attempting to parse old data.

use std::fs;
use std::path::{Path, PathBuf};

use spendbook_core::{Storage, StorageError};

/// Namespace key for the persisted record collection.
const RECORDS_KEY: &str = "spendbook_records_v1";

/// Stores the serialized collection as `<root>/<RECORDS_KEY>.json`.
pub struct FileStorage {
    root: PathBuf,
}

impl FileStorage {
    /// Create file storage rooted at the given data directory.
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Create file storage at the default path (~/.spendbook/).
    pub fn with_default_path() -> Self {
        Self::new(default_data_dir())
    }

    /// Root of the data directory.
    pub fn root(&self) -> &Path {
        &self.root
    }

    fn records_path(&self) -> PathBuf {
        self.root.join(format!("{RECORDS_KEY}.json"))
    }
}

/// The default data directory path (~/.spendbook/).
pub fn default_data_dir() -> PathBuf {
    dirs::home_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join(".spendbook")
}

impl Storage for FileStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        let path = self.records_path();
        if !path.exists() {
            return Ok(None);
        }
        fs::read_to_string(&path)
            .map(Some)
            .map_err(|e| StorageError::Io(format!("Failed to read records: {}", e)))
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        fs::create_dir_all(&self.root)
            .map_err(|e| StorageError::Io(format!("Failed to create data directory: {}", e)))?;
        fs::write(self.records_path(), payload)
            .map_err(|e| StorageError::Io(format!("Failed to write records: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_load_is_absent_on_first_run() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join(".spendbook"));

        assert!(storage.load().unwrap().is_none());
    }

    #[test]
    fn test_save_creates_the_directory_and_round_trips() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join(".spendbook"));

        storage.save("[]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_save_replaces_the_previous_payload() {
        let temp_dir = TempDir::new().unwrap();
        let storage = FileStorage::new(temp_dir.path().join(".spendbook"));

        storage.save("[1]").unwrap();
        storage.save("[2]").unwrap();
        assert_eq!(storage.load().unwrap().as_deref(), Some("[2]"));
    }
}
