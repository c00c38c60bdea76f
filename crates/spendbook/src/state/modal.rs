//! Modal types for confirmations and record edits.

use jiff::civil::Date;
use spendbook_core::{Record, RecordId};

use crate::util::format::day_label;

#[derive(Debug)]
pub enum ModalState {
    None,
    Confirm(ConfirmModal),
    Edit(EditModal),
}

/// The destructive operation a confirm modal guards.
///
/// The record store never sees the modal; the confirmed action is
/// dispatched to the matching store operation only after the user says
/// yes, and declining is a full no-op.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ConfirmAction {
    DeleteRecord(RecordId),
    ClearDay(Date),
    ClearAll,
}

#[derive(Debug)]
pub struct ConfirmModal {
    pub title: String,
    pub message: String,
    pub action: ConfirmAction,
}

impl ConfirmModal {
    pub fn delete_record(record: &Record) -> Self {
        Self {
            title: "Delete record".to_string(),
            message: format!("Delete \"{}\"?", record.item),
            action: ConfirmAction::DeleteRecord(record.id.clone()),
        }
    }

    pub fn clear_day(date: Date) -> Self {
        Self {
            title: "Clear day".to_string(),
            message: format!("Delete every record on {}?", day_label(date)),
            action: ConfirmAction::ClearDay(date),
        }
    }

    pub fn clear_all() -> Self {
        Self {
            title: "Clear everything".to_string(),
            message: "Delete ALL records? This cannot be undone.".to_string(),
            action: ConfirmAction::ClearAll,
        }
    }
}

/// Which edit-modal field has focus.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EditField {
    Item,
    Amount,
}

/// Two-field form for editing an existing record.
///
/// Only item and amount are editable; id, date, and creation time stay
/// with the record.
#[derive(Debug)]
pub struct EditModal {
    pub id: RecordId,
    pub item: String,
    pub amount: String,
    pub focused: EditField,
}

impl EditModal {
    pub fn for_record(record: &Record) -> Self {
        Self {
            id: record.id.clone(),
            item: record.item.clone(),
            amount: record.amount.to_string(),
            focused: EditField::Item,
        }
    }

    fn focused_value_mut(&mut self) -> &mut String {
        match self.focused {
            EditField::Item => &mut self.item,
            EditField::Amount => &mut self.amount,
        }
    }

    pub fn insert_char(&mut self, c: char) {
        self.focused_value_mut().push(c);
    }

    pub fn backspace(&mut self) {
        self.focused_value_mut().pop();
    }

    pub fn toggle_focus(&mut self) {
        self.focused = match self.focused {
            EditField::Item => EditField::Amount,
            EditField::Amount => EditField::Item,
        };
    }
}
