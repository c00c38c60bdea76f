//! Record store for a personal expense ledger.
//!
//! This crate owns the canonical list of expense records and everything
//! around it:
//! - The [`Record`] model (item, amount, calendar date, creation time)
//! - The load/save lifecycle against a pluggable [`Storage`] slot
//! - The grouped-by-date and running-total derivations
//! - The mutation operations: add, edit, delete one, clear a day, clear all
//!
//! It has no terminal or UI dependency; the presentation layer in the
//! `spendbook` crate drives it through [`RecordStore`].

pub mod error;
pub mod record;
pub mod storage;
pub mod store;

#[cfg(test)]
mod tests;

pub use error::{EditOutcome, StoreError};
pub use record::{DayGroup, Record, RecordId};
pub use storage::{MemoryStorage, Storage, StorageError};
pub use store::RecordStore;
