//! Tests for the record store
//!
//! Organized by topic:
//! - `mutations` - add/edit/delete/clear operations and their no-op cases
//! - `grouping` - derived grouped view, totals, ordering
//! - `persistence` - wire format, round-trips, corrupt and failing storage

mod grouping;
mod mutations;

use jiff::civil::Date;

use crate::storage::MemoryStorage;
use crate::store::RecordStore;

/// Shorthand for a civil date in test bodies.
pub(crate) fn date(year: i16, month: i8, day: i8) -> Date {
    jiff::civil::date(year, month, day)
}

/// A store over a fresh in-memory slot, plus a handle to that slot.
pub(crate) fn empty_store() -> (RecordStore<MemoryStorage>, MemoryStorage) {
    let storage = MemoryStorage::new();
    (RecordStore::load(storage.clone()), storage)
}
