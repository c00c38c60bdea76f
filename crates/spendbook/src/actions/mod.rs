// Actions module - store-facing handler implementations
//
// Each handler runs one record store operation and translates the outcome
// into status feedback, keeping app.rs a thin dispatcher.

use jiff::civil::Date;
use spendbook_core::{EditOutcome, RecordId, StorageError, StoreError};

use crate::state::{AppState, Flash};
use crate::util::format::day_label;

/// Result of an action handler
#[derive(Debug, PartialEq, Eq)]
pub enum ActionResult {
    /// Action completed (possibly with a warning flash already set)
    Done,
    /// Action was rejected with an error message; nothing changed
    Error(String),
}

/// Validate the entry form and add a record.
///
/// Validation failures abort with no state change. A record that was
/// added but could not be persisted still counts as added: the form
/// resets and a warning replaces the success flash.
pub fn handle_add(state: &mut AppState) -> ActionResult {
    let input = match state.form.parse() {
        Ok(input) => input,
        Err(msg) => return ActionResult::Error(msg),
    };

    let result = state.store.add(&input.item, input.amount, input.date);
    finish_mutation(state, result, &format!("Added \"{}\"", input.item));
    state.form.reset_after_add();
    ActionResult::Done
}

/// Apply an edit modal's values to the record it was opened for.
pub fn handle_edit(state: &mut AppState, id: &RecordId, item: &str, amount: &str) -> ActionResult {
    match state.store.edit(id, item, amount) {
        Ok(EditOutcome::Updated) => {
            state.set_flash(Flash::info("Updated"));
            ActionResult::Done
        }
        // The record disappeared between opening the modal and saving;
        // treat like the store does: a quiet no-op.
        Ok(EditOutcome::NotFound) => ActionResult::Done,
        Err(StoreError::Validation(msg)) => ActionResult::Error(msg),
        Err(StoreError::Storage(e)) => {
            persist_warning(state, &e, "Updated");
            ActionResult::Done
        }
    }
}

/// Delete one record. Confirmation already happened; this is
/// unconditional.
pub fn handle_delete_record(state: &mut AppState, id: &RecordId) -> ActionResult {
    let result = state.store.delete_one(id);
    finish_mutation(state, result, "Deleted");
    state.clamp_selection();
    ActionResult::Done
}

/// Delete every record on one date.
pub fn handle_clear_day(state: &mut AppState, date: Date) -> ActionResult {
    let result = state.store.delete_by_date(date);
    finish_mutation(state, result, &format!("Cleared {}", day_label(date)));
    state.clamp_selection();
    ActionResult::Done
}

/// Delete everything.
pub fn handle_clear_all(state: &mut AppState) -> ActionResult {
    let result = state.store.clear_all();
    finish_mutation(state, result, "All records cleared");
    state.selected = 0;
    ActionResult::Done
}

fn finish_mutation(state: &mut AppState, result: Result<(), StorageError>, success: &str) {
    match result {
        Ok(()) => state.set_flash(Flash::info(success)),
        Err(e) => persist_warning(state, &e, success),
    }
}

fn persist_warning(state: &mut AppState, error: &StorageError, success: &str) {
    tracing::warn!(error = %error, "mutation applied in memory but not persisted");
    state.set_flash(Flash::warning(format!(
        "{success}, but saving to disk failed"
    )));
}
