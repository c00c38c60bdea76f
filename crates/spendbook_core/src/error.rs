use std::fmt;

use crate::storage::StorageError;

/// Whether an edit found its target record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditOutcome {
    /// The record was updated in place.
    Updated,
    /// No record with the given id exists; nothing changed.
    NotFound,
}

/// Errors from record store operations
#[derive(Debug)]
pub enum StoreError {
    /// Input was rejected before any mutation took place
    Validation(String),
    /// The mutation succeeded in memory but persisting it failed
    Storage(StorageError),
}

impl fmt::Display for StoreError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StoreError::Validation(msg) => write!(f, "invalid input: {}", msg),
            StoreError::Storage(e) => write!(f, "storage error: {}", e),
        }
    }
}

impl std::error::Error for StoreError {}

impl From<StorageError> for StoreError {
    fn from(e: StorageError) -> Self {
        StoreError::Storage(e)
    }
}
