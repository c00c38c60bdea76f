//! The always-visible entry form card.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::actions::{self, ActionResult};
use crate::state::{AppState, Focus, FormField};

pub struct BookingFormCard;

impl BookingFormCard {
    pub fn new() -> Self {
        Self
    }

    fn field_line<'a>(state: &'a AppState, field: FormField) -> Line<'a> {
        let focused = state.focus == Focus::Form && state.form.focused == field;

        let label_style = if focused {
            Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD)
        } else {
            Style::default().fg(Color::DarkGray)
        };

        let value = match field {
            FormField::Item => state.form.item.as_str(),
            FormField::Amount => state.form.amount.as_str(),
            FormField::Date => state.form.date.as_str(),
        };

        let mut spans = vec![
            Span::styled(format!(" {:>6}: ", field.label()), label_style),
            Span::raw(value),
        ];
        if focused {
            spans.push(Span::styled("▏", Style::default().fg(Color::Yellow)));
        }
        Line::from(spans)
    }
}

impl Component for BookingFormCard {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Enter => {
                if let ActionResult::Error(msg) = actions::handle_add(state) {
                    state.set_error(msg);
                }
                EventResult::Handled
            }
            KeyCode::Up => {
                state.form.focus_prev();
                EventResult::Handled
            }
            KeyCode::Down => {
                state.form.focus_next();
                EventResult::Handled
            }
            KeyCode::Backspace => {
                state.form.backspace();
                EventResult::Handled
            }
            KeyCode::Char(c)
                if key.modifiers.is_empty() || key.modifiers == KeyModifiers::SHIFT =>
            {
                state.form.insert_char(c);
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let border_style = if state.focus == Focus::Form {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" NEW EXPENSE ");

        let lines = vec![
            Self::field_line(state, FormField::Item),
            Self::field_line(state, FormField::Amount),
            Self::field_line(state, FormField::Date),
            Line::from(Span::styled(
                " Enter: add | Up/Down: field | Tab: list",
                Style::default().fg(Color::DarkGray),
            )),
        ];

        frame.render_widget(Paragraph::new(lines).block(block), area);
    }
}
