//! Storage abstraction for the persisted record collection.
//!
//! The store treats persistence as a single synchronous string slot: one
//! payload written after every mutation, one payload read at startup.
//! Implementations decide where that slot lives; the `spendbook` crate
//! provides a file-backed one, and [`MemoryStorage`] backs tests and
//! throwaway sessions.

use std::cell::RefCell;
use std::rc::Rc;

/// Error types for storage operations
#[derive(Debug)]
pub enum StorageError {
    /// I/O error (file unreadable, write rejected, etc.)
    Io(String),
    /// Serialization error
    Serialize(String),
    /// Storage medium refused service (full, unavailable)
    NotAvailable(String),
}

impl std::fmt::Display for StorageError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StorageError::Io(msg) => write!(f, "IO error: {}", msg),
            StorageError::Serialize(msg) => write!(f, "Serialization error: {}", msg),
            StorageError::NotAvailable(msg) => write!(f, "Storage not available: {}", msg),
        }
    }
}

impl std::error::Error for StorageError {}

/// Synchronous persistence slot for the serialized record collection.
pub trait Storage {
    /// Read the stored payload. `None` means nothing has been stored yet
    /// (first run).
    fn load(&self) -> Result<Option<String>, StorageError>;

    /// Replace the stored payload.
    fn save(&self, payload: &str) -> Result<(), StorageError>;
}

impl<S: Storage + ?Sized> Storage for Box<S> {
    fn load(&self) -> Result<Option<String>, StorageError> {
        (**self).load()
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        (**self).save(payload)
    }
}

/// In-memory storage slot.
///
/// Clones share the same slot, so a test can hand one handle to a store
/// and keep another to inspect or reload what was written.
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    slot: Rc<RefCell<Option<String>>>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    /// Start with a payload already in place, as if left by a prior run.
    pub fn with_payload(payload: &str) -> Self {
        Self {
            slot: Rc::new(RefCell::new(Some(payload.to_string()))),
        }
    }

    /// Inspect the currently stored payload.
    pub fn payload(&self) -> Option<String> {
        self.slot.borrow().clone()
    }
}

impl Storage for MemoryStorage {
    fn load(&self) -> Result<Option<String>, StorageError> {
        Ok(self.slot.borrow().clone())
    }

    fn save(&self, payload: &str) -> Result<(), StorageError> {
        *self.slot.borrow_mut() = Some(payload.to_string());
        Ok(())
    }
}
