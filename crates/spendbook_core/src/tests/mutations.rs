//! Tests for record store mutations
//!
//! These tests verify:
//! - Adds grow the collection and assign distinct ids
//! - Edit replaces only item and amount, rejects bad amounts, and is a
//!   no-op for unknown ids
//! - Delete-one, delete-by-date, and clear-all remove exactly what they
//!   should

use std::collections::HashSet;

use crate::error::{EditOutcome, StoreError};
use crate::record::RecordId;

use super::{date, empty_store};

#[test]
fn test_add_grows_collection_with_distinct_ids() {
    let (mut store, _storage) = empty_store();

    for i in 0..20 {
        store.add(&format!("item {i}"), i, date(2024, 5, 1)).unwrap();
    }

    assert_eq!(store.len(), 20);

    let ids: HashSet<_> = store.records().iter().map(|r| r.id.clone()).collect();
    assert_eq!(ids.len(), 20, "every generated id must be distinct");
}

#[test]
fn test_add_prepends_newest_first() {
    let (mut store, _storage) = empty_store();

    store.add("first", 1, date(2024, 5, 1)).unwrap();
    store.add("second", 2, date(2024, 5, 1)).unwrap();

    assert_eq!(store.records()[0].item, "second");
    assert_eq!(store.records()[1].item, "first");
}

#[test]
fn test_add_permits_zero_and_negative_amounts() {
    let (mut store, _storage) = empty_store();

    store.add("refund", -350, date(2024, 5, 1)).unwrap();
    store.add("freebie", 0, date(2024, 5, 1)).unwrap();

    assert_eq!(store.total(), -350);
}

#[test]
fn test_edit_replaces_item_and_amount_only() {
    let (mut store, _storage) = empty_store();

    store.add("coffee", 80, date(2024, 5, 2)).unwrap();
    let before = store.records()[0].clone();

    let outcome = store.edit(&before.id, "latte", "95").unwrap();
    assert_eq!(outcome, EditOutcome::Updated);

    let after = &store.records()[0];
    assert_eq!(after.item, "latte");
    assert_eq!(after.amount, 95);
    assert_eq!(after.id, before.id);
    assert_eq!(after.date, before.date);
    assert_eq!(after.created_at, before.created_at);
}

#[test]
fn test_edit_unknown_id_is_a_noop() {
    let (mut store, storage) = empty_store();

    store.add("coffee", 80, date(2024, 5, 2)).unwrap();
    let before = store.records().to_vec();
    let persisted_before = storage.payload();

    let missing = RecordId("no-such-record".to_string());
    let outcome = store.edit(&missing, "latte", "95").unwrap();

    assert_eq!(outcome, EditOutcome::NotFound);
    assert_eq!(store.records(), &before[..]);
    assert_eq!(storage.payload(), persisted_before, "no-op must not re-persist");
}

#[test]
fn test_edit_rejects_unparseable_amount_without_mutating() {
    let (mut store, _storage) = empty_store();

    store.add("coffee", 80, date(2024, 5, 2)).unwrap();
    let id = store.records()[0].id.clone();
    let before = store.records().to_vec();

    let err = store.edit(&id, "latte", "ninety-five").unwrap_err();
    assert!(matches!(err, StoreError::Validation(_)));
    assert_eq!(store.records(), &before[..]);
}

#[test]
fn test_edit_may_set_empty_item() {
    // The original never validated the edited item; stay permissive.
    let (mut store, _storage) = empty_store();

    store.add("coffee", 80, date(2024, 5, 2)).unwrap();
    let id = store.records()[0].id.clone();

    store.edit(&id, "", "80").unwrap();
    assert_eq!(store.records()[0].item, "");
}

#[test]
fn test_delete_one_removes_only_the_match() {
    let (mut store, _storage) = empty_store();

    store.add("groceries", 350, date(2024, 5, 1)).unwrap();
    store.add("lunch", 120, date(2024, 5, 1)).unwrap();
    let lunch_id = store.records()[0].id.clone();

    store.delete_one(&lunch_id).unwrap();

    assert_eq!(store.len(), 1);
    assert_eq!(store.records()[0].item, "groceries");
}

#[test]
fn test_delete_one_unknown_id_is_a_noop() {
    let (mut store, _storage) = empty_store();

    store.add("groceries", 350, date(2024, 5, 1)).unwrap();
    store
        .delete_one(&RecordId("no-such-record".to_string()))
        .unwrap();

    assert_eq!(store.len(), 1);
}

#[test]
fn test_delete_by_date_removes_exactly_that_day() {
    let (mut store, _storage) = empty_store();

    // Interleaved insertion order on purpose.
    store.add("a", 1, date(2024, 5, 1)).unwrap();
    store.add("b", 2, date(2024, 5, 2)).unwrap();
    store.add("c", 3, date(2024, 5, 1)).unwrap();
    store.add("d", 4, date(2024, 5, 3)).unwrap();
    store.add("e", 5, date(2024, 5, 1)).unwrap();

    store.delete_by_date(date(2024, 5, 1)).unwrap();

    let survivors: Vec<&str> = store.records().iter().map(|r| r.item.as_str()).collect();
    assert_eq!(survivors, vec!["d", "b"]);
    assert!(store.records().iter().all(|r| r.date != date(2024, 5, 1)));
}

#[test]
fn test_clear_all_empties_everything() {
    let (mut store, _storage) = empty_store();

    store.add("a", 1, date(2024, 5, 1)).unwrap();
    store.add("b", 2, date(2024, 5, 2)).unwrap();

    store.clear_all().unwrap();

    assert!(store.is_empty());
    assert!(store.grouped_by_date().is_empty());
    assert_eq!(store.total(), 0);
}
