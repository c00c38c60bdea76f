use std::time::{Duration, Instant};

use spendbook_core::{Record, RecordStore, Storage};

use super::{BookingForm, ModalState};

/// How long transient feedback stays on screen.
pub const FLASH_DURATION: Duration = Duration::from_secs(2);

/// The store type the application runs on. Boxing the storage keeps the
/// state concrete while tests inject an in-memory slot.
pub type AppStore = RecordStore<Box<dyn Storage>>;

/// Which part of the screen receives keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Form,
    List,
}

/// Transient feedback shown after an operation, self-dismissing after
/// [`FLASH_DURATION`]. Purely cosmetic; it never affects state.
#[derive(Debug)]
pub struct Flash {
    pub message: String,
    pub is_warning: bool,
    deadline: Instant,
}

impl Flash {
    pub fn info(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_warning: false,
            deadline: Instant::now() + FLASH_DURATION,
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            is_warning: true,
            deadline: Instant::now() + FLASH_DURATION,
        }
    }

    pub fn expired(&self) -> bool {
        Instant::now() >= self.deadline
    }
}

/// Main application state
pub struct AppState {
    pub store: AppStore,
    pub focus: Focus,
    pub form: BookingForm,
    /// Cursor over the record rows of the grouped list.
    pub selected: usize,
    pub modal: ModalState,
    pub flash: Option<Flash>,
    pub error_message: Option<String>,
    pub exit: bool,
}

impl AppState {
    pub fn new(store: AppStore) -> Self {
        Self {
            store,
            focus: Focus::Form,
            form: BookingForm::new(),
            selected: 0,
            modal: ModalState::None,
            flash: None,
            error_message: None,
            exit: false,
        }
    }

    /// The record rows of the grouped view, flattened in display order.
    /// The selection cursor indexes into this.
    pub fn visible_records(&self) -> Vec<Record> {
        self.store
            .grouped_by_date()
            .into_iter()
            .flat_map(|g| g.records)
            .collect()
    }

    pub fn selected_record(&self) -> Option<Record> {
        self.visible_records().get(self.selected).cloned()
    }

    pub fn move_selection_up(&mut self) {
        self.selected = self.selected.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        let last = self.store.len().saturating_sub(1);
        if self.selected < last {
            self.selected += 1;
        }
    }

    /// Keep the cursor on a real row after deletions.
    pub fn clamp_selection(&mut self) {
        let last = self.store.len().saturating_sub(1);
        self.selected = self.selected.min(last);
    }

    pub fn set_error(&mut self, message: String) {
        self.error_message = Some(message);
    }

    pub fn clear_error(&mut self) {
        self.error_message = None;
    }

    /// Show feedback, replacing any error line it would sit under.
    pub fn set_flash(&mut self, flash: Flash) {
        self.error_message = None;
        self.flash = Some(flash);
    }

    /// Advance timers; called on every poll tick of the event loop.
    pub fn tick(&mut self) {
        if self.flash.as_ref().is_some_and(|f| f.expired()) {
            self.flash = None;
        }
    }
}
