mod confirm;
mod edit_form;

use crossterm::event::KeyEvent;
use ratatui::{Frame, layout::Rect};
use spendbook_core::RecordId;

use crate::state::{AppState, ConfirmAction, ModalState};

pub use confirm::render_confirm_modal;
pub use edit_form::render_edit_modal;

/// Result of handling a modal key event
#[derive(Debug, PartialEq, Eq)]
pub enum ModalResult {
    /// Confirm modal accepted; run the guarded operation
    Confirmed(ConfirmAction),
    /// Edit modal submitted with new field values
    Submitted {
        id: RecordId,
        item: String,
        amount: String,
    },
    /// Modal was dismissed with nothing done
    Cancelled,
    /// Key was handled, modal still active
    Continue,
}

/// Render the active modal as an overlay
pub fn render_modal(frame: &mut Frame, state: &AppState) {
    match &state.modal {
        ModalState::None => {}
        ModalState::Confirm(modal) => render_confirm_modal(frame, modal),
        ModalState::Edit(modal) => render_edit_modal(frame, modal),
    }
}

/// Handle key events for the active modal
pub fn handle_modal_key(key: KeyEvent, state: &mut AppState) -> ModalResult {
    match &mut state.modal {
        ModalState::None => ModalResult::Continue,
        ModalState::Confirm(modal) => confirm::handle_confirm_key(key, modal),
        ModalState::Edit(modal) => edit_form::handle_edit_key(key, modal),
    }
}

/// Create a centered rectangle within the given area
pub fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect::new(x, y, width.min(area.width), height.min(area.height))
}
