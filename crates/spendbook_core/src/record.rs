//! The expense record model and the derived per-day grouping.

use jiff::civil::Date;
use serde::{Deserialize, Serialize};

/// Unique identifier for a [`Record`], assigned at creation and immutable
/// for the record's lifetime.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RecordId(pub String);

impl RecordId {
    /// Generate a fresh random identifier.
    pub fn generate() -> Self {
        Self(uuid::Uuid::new_v4().to_string())
    }
}

impl std::fmt::Display for RecordId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One logged expense entry.
///
/// `id` and `created_at` are fixed at creation; an edit may only replace
/// `item` and `amount`. `created_at` orders records within a day and is
/// never shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    pub id: RecordId,
    pub item: String,
    pub amount: i64,
    pub date: Date,
    #[serde(rename = "createdAt")]
    pub created_at: i64,
}

/// All records sharing one calendar date, in display order.
#[derive(Debug, Clone)]
pub struct DayGroup {
    pub date: Date,
    pub records: Vec<Record>,
}

impl DayGroup {
    /// Sum of the amounts logged on this day.
    pub fn total(&self) -> i64 {
        self.records.iter().map(|r| r.amount).sum()
    }
}
