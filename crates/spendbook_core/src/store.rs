//! The record store: canonical collection, load/save lifecycle, and the
//! grouping/total derivations.

use jiff::Timestamp;
use jiff::civil::Date;

use crate::error::{EditOutcome, StoreError};
use crate::record::{DayGroup, Record, RecordId};
use crate::storage::{Storage, StorageError};

/// Owns the record collection and mirrors it to storage after every
/// mutation.
///
/// Construction performs the one-time load, so a store value is always
/// fully initialized and a save can never overwrite persisted data with a
/// half-loaded state. The in-memory collection remains the source of truth
/// even when a save fails; the failure is reported to the caller and the
/// session continues.
pub struct RecordStore<S: Storage> {
    storage: S,
    records: Vec<Record>,
}

impl<S: Storage> RecordStore<S> {
    /// Load the collection from storage.
    ///
    /// A first run (nothing stored) and an unreadable payload both start
    /// empty. A bad payload is logged and skipped so a corrupted store
    /// never locks the user out.
    pub fn load(storage: S) -> Self {
        let records = match storage.load() {
            Ok(Some(payload)) => match serde_json::from_str::<Vec<Record>>(&payload) {
                Ok(records) => records,
                Err(e) => {
                    tracing::warn!(error = %e, "stored records are unreadable, starting empty");
                    Vec::new()
                }
            },
            Ok(None) => Vec::new(),
            Err(e) => {
                tracing::warn!(error = %e, "failed to read storage, starting empty");
                Vec::new()
            }
        };
        Self { storage, records }
    }

    /// Add a new record, assigning a fresh id and creation time.
    ///
    /// The caller validates its input (non-empty item, already-parsed
    /// amount); the store does not re-validate. The record is always
    /// added; `Err` only means persisting it failed.
    pub fn add(&mut self, item: &str, amount: i64, date: Date) -> Result<(), StorageError> {
        let record = Record {
            id: RecordId::generate(),
            item: item.to_string(),
            amount,
            date,
            created_at: Timestamp::now().as_millisecond(),
        };
        // Newest first, before any date sorting in the derived view.
        self.records.insert(0, record);
        self.persist()
    }

    /// Replace `item` and `amount` of the record with the given id,
    /// leaving `id`, `date`, and `created_at` untouched.
    ///
    /// The amount arrives as raw text and must parse as an integer,
    /// otherwise nothing changes. An unknown id is a no-op.
    pub fn edit(
        &mut self,
        id: &RecordId,
        item: &str,
        amount: &str,
    ) -> Result<EditOutcome, StoreError> {
        let Some(pos) = self.records.iter().position(|r| &r.id == id) else {
            return Ok(EditOutcome::NotFound);
        };

        let parsed: i64 = amount
            .trim()
            .parse()
            .map_err(|_| StoreError::Validation(format!("not a whole number: {amount:?}")))?;

        let record = &mut self.records[pos];
        record.item = item.to_string();
        record.amount = parsed;

        self.persist()?;
        Ok(EditOutcome::Updated)
    }

    /// Remove the record with the given id, if present.
    pub fn delete_one(&mut self, id: &RecordId) -> Result<(), StorageError> {
        self.records.retain(|r| &r.id != id);
        self.persist()
    }

    /// Remove every record logged on the given date.
    pub fn delete_by_date(&mut self, date: Date) -> Result<(), StorageError> {
        self.records.retain(|r| r.date != date);
        self.persist()
    }

    /// Remove everything.
    pub fn clear_all(&mut self) -> Result<(), StorageError> {
        self.records.clear();
        self.persist()
    }

    /// Records bucketed by date, newest date first and newest record first
    /// within a day. Recomputed on every call, never persisted.
    pub fn grouped_by_date(&self) -> Vec<DayGroup> {
        let mut sorted = self.records.clone();
        // Stable sort over the newest-first backing order: records created
        // within the same millisecond keep insertion order.
        sorted.sort_by(|a, b| b.date.cmp(&a.date).then(b.created_at.cmp(&a.created_at)));

        let mut groups: Vec<DayGroup> = Vec::new();
        for record in sorted {
            match groups.last_mut() {
                Some(group) if group.date == record.date => group.records.push(record),
                _ => groups.push(DayGroup {
                    date: record.date,
                    records: vec![record],
                }),
            }
        }
        groups
    }

    /// Sum of all amounts.
    pub fn total(&self) -> i64 {
        self.records.iter().map(|r| r.amount).sum()
    }

    /// Sum of the amounts logged on one date.
    pub fn day_total(&self, date: Date) -> i64 {
        self.records
            .iter()
            .filter(|r| r.date == date)
            .map(|r| r.amount)
            .sum()
    }

    /// The collection in insertion order, newest first.
    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    fn persist(&self) -> Result<(), StorageError> {
        let payload = serde_json::to_string(&self.records)
            .map_err(|e| StorageError::Serialize(e.to_string()))?;
        self.storage.save(&payload)
    }
}
