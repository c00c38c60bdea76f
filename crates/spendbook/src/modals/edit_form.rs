use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph},
};

use crate::state::{EditField, EditModal};

use super::{ModalResult, centered_rect};

const MODAL_WIDTH: u16 = 50;
const MODAL_HEIGHT: u16 = 8;

fn field_line<'a>(modal: &'a EditModal, field: EditField, label: &'static str) -> Line<'a> {
    let focused = modal.focused == field;
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().fg(Color::DarkGray)
    };

    let value = match field {
        EditField::Item => modal.item.as_str(),
        EditField::Amount => modal.amount.as_str(),
    };

    let mut spans = vec![Span::styled(format!(" {label:>6}: "), label_style), Span::raw(value)];
    if focused {
        spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
    }
    Line::from(spans)
}

/// Render the edit modal
pub fn render_edit_modal(frame: &mut Frame, modal: &EditModal) {
    let area = frame.area();
    let modal_area = centered_rect(MODAL_WIDTH, MODAL_HEIGHT, area);

    frame.render_widget(Clear, modal_area);

    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(Style::default().fg(Color::Yellow))
        .title(" Edit record ");

    let inner = block.inner(modal_area);
    frame.render_widget(block, modal_area);

    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Item
            Constraint::Length(1), // Amount
            Constraint::Length(1), // Spacing
            Constraint::Length(1), // Help text
        ])
        .split(inner);

    frame.render_widget(
        Paragraph::new(field_line(modal, EditField::Item, "Item")),
        chunks[1],
    );
    frame.render_widget(
        Paragraph::new(field_line(modal, EditField::Amount, "Amount")),
        chunks[2],
    );

    let help = Paragraph::new(Line::from(vec![
        Span::styled("[Tab]", Style::default().fg(Color::Yellow)),
        Span::raw(" Field  "),
        Span::styled("[Enter]", Style::default().fg(Color::Green)),
        Span::raw(" Save  "),
        Span::styled("[Esc]", Style::default().fg(Color::Red)),
        Span::raw(" Cancel"),
    ]));
    frame.render_widget(help, chunks[4]);
}

/// Handle key events for the edit modal
pub fn handle_edit_key(key: KeyEvent, modal: &mut EditModal) -> ModalResult {
    match key.code {
        KeyCode::Enter => ModalResult::Submitted {
            id: modal.id.clone(),
            item: modal.item.clone(),
            amount: modal.amount.clone(),
        },
        KeyCode::Esc => ModalResult::Cancelled,
        KeyCode::Tab | KeyCode::Up | KeyCode::Down => {
            modal.toggle_focus();
            ModalResult::Continue
        }
        KeyCode::Backspace => {
            modal.backspace();
            ModalResult::Continue
        }
        KeyCode::Char(c) if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT => {
            modal.insert_char(c);
            ModalResult::Continue
        }
        _ => ModalResult::Continue,
    }
}
