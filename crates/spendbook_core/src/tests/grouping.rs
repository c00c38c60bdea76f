//! Tests for the derived grouped view and totals
//!
//! These tests verify:
//! - Groups ordered by date descending, records by creation time descending
//! - Day totals and the running total
//! - The worked example: three adds across two days, then one delete

use super::{date, empty_store};

#[test]
fn test_groups_ordered_by_date_descending() {
    let (mut store, _storage) = empty_store();

    store.add("a", 1, date(2024, 1, 1)).unwrap();
    store.add("b", 2, date(2024, 1, 3)).unwrap();
    store.add("c", 3, date(2024, 1, 2)).unwrap();

    let grouped = store.grouped_by_date();
    let dates: Vec<_> = grouped.iter().map(|g| g.date).collect();
    assert_eq!(
        dates,
        vec![date(2024, 1, 3), date(2024, 1, 2), date(2024, 1, 1)]
    );
}

#[test]
fn test_records_within_a_day_newest_first() {
    let (mut store, _storage) = empty_store();

    store.add("breakfast", 60, date(2024, 5, 1)).unwrap();
    store.add("lunch", 120, date(2024, 5, 1)).unwrap();
    store.add("dinner", 200, date(2024, 5, 1)).unwrap();

    let grouped = store.grouped_by_date();
    assert_eq!(grouped.len(), 1);

    // Most recent insert first, even when created_at values collide
    // within one millisecond.
    let items: Vec<&str> = grouped[0].records.iter().map(|r| r.item.as_str()).collect();
    assert_eq!(items, vec!["dinner", "lunch", "breakfast"]);
}

#[test]
fn test_grouping_is_pure_and_repeatable() {
    let (mut store, _storage) = empty_store();

    store.add("a", 1, date(2024, 5, 1)).unwrap();
    store.add("b", 2, date(2024, 5, 2)).unwrap();

    let first = store.grouped_by_date();
    let second = store.grouped_by_date();

    assert_eq!(first.len(), second.len());
    for (x, y) in first.iter().zip(second.iter()) {
        assert_eq!(x.date, y.date);
        assert_eq!(x.records, y.records);
    }
    // Deriving the view must not disturb the backing collection.
    assert_eq!(store.records()[0].item, "b");
}

#[test]
fn test_day_total_sums_one_date_only() {
    let (mut store, _storage) = empty_store();

    store.add("a", 100, date(2024, 5, 1)).unwrap();
    store.add("b", 20, date(2024, 5, 1)).unwrap();
    store.add("c", 3, date(2024, 5, 2)).unwrap();

    assert_eq!(store.day_total(date(2024, 5, 1)), 120);
    assert_eq!(store.day_total(date(2024, 5, 2)), 3);
    assert_eq!(store.day_total(date(2024, 5, 3)), 0);
}

#[test]
fn test_three_purchases_across_two_days() {
    let (mut store, _storage) = empty_store();

    store.add("全聯買菜", 350, date(2024, 5, 1)).unwrap();
    store.add("午餐", 120, date(2024, 5, 1)).unwrap();
    store.add("咖啡", 80, date(2024, 5, 2)).unwrap();

    assert_eq!(store.total(), 550);

    let grouped = store.grouped_by_date();
    assert_eq!(grouped.len(), 2);

    assert_eq!(grouped[0].date, date(2024, 5, 2));
    assert_eq!(grouped[0].records.len(), 1);
    assert_eq!(grouped[0].records[0].amount, 80);

    assert_eq!(grouped[1].date, date(2024, 5, 1));
    let amounts: Vec<i64> = grouped[1].records.iter().map(|r| r.amount).collect();
    assert_eq!(amounts, vec![120, 350]);
    assert_eq!(grouped[1].total(), 470);
}

#[test]
fn test_deleting_one_record_adjusts_both_totals() {
    let (mut store, _storage) = empty_store();

    store.add("全聯買菜", 350, date(2024, 5, 1)).unwrap();
    store.add("午餐", 120, date(2024, 5, 1)).unwrap();
    store.add("咖啡", 80, date(2024, 5, 2)).unwrap();

    let lunch_id = store
        .records()
        .iter()
        .find(|r| r.item == "午餐")
        .map(|r| r.id.clone())
        .unwrap();
    store.delete_one(&lunch_id).unwrap();

    assert_eq!(store.day_total(date(2024, 5, 1)), 350);
    assert_eq!(store.total(), 430);
}
