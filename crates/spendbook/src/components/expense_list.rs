//! Day-grouped record list with a selection cursor.

use crossterm::event::{KeyCode, KeyEvent};
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
};

use super::{Component, EventResult};
use crate::state::{AppState, ConfirmModal, EditModal, Focus, ModalState};
use crate::util::format::{day_label, format_amount};

pub struct ExpenseList {
    list_state: ListState,
}

impl ExpenseList {
    pub fn new() -> Self {
        Self {
            list_state: ListState::default(),
        }
    }
}

impl Component for ExpenseList {
    fn handle_key(&mut self, key: KeyEvent, state: &mut AppState) -> EventResult {
        match key.code {
            KeyCode::Char('q') => EventResult::Exit,
            KeyCode::Up | KeyCode::Char('k') => {
                state.move_selection_up();
                EventResult::Handled
            }
            KeyCode::Down | KeyCode::Char('j') => {
                state.move_selection_down();
                EventResult::Handled
            }
            KeyCode::Char('e') => {
                if let Some(record) = state.selected_record() {
                    state.modal = ModalState::Edit(EditModal::for_record(&record));
                }
                EventResult::Handled
            }
            KeyCode::Char('d') => {
                if let Some(record) = state.selected_record() {
                    state.modal = ModalState::Confirm(ConfirmModal::delete_record(&record));
                }
                EventResult::Handled
            }
            KeyCode::Char('x') => {
                if let Some(record) = state.selected_record() {
                    state.modal = ModalState::Confirm(ConfirmModal::clear_day(record.date));
                }
                EventResult::Handled
            }
            KeyCode::Char('C') => {
                if !state.store.is_empty() {
                    state.modal = ModalState::Confirm(ConfirmModal::clear_all());
                }
                EventResult::Handled
            }
            _ => EventResult::NotHandled,
        }
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let border_style = if state.focus == Focus::List {
            Style::default().fg(Color::Yellow)
        } else {
            Style::default()
        };

        let block = Block::default()
            .borders(Borders::ALL)
            .border_style(border_style)
            .title(" EXPENSES ");

        if state.store.is_empty() {
            let empty = Paragraph::new(Line::from(Span::styled(
                " Nothing here yet. Log your first expense above.",
                Style::default().fg(Color::DarkGray),
            )))
            .block(block);
            frame.render_widget(empty, area);
            return;
        }

        let grouped = state.store.grouped_by_date();
        let mut items: Vec<ListItem> = Vec::new();
        let mut selected_row = None;
        let mut record_idx = 0usize;

        for group in &grouped {
            items.push(ListItem::new(Line::from(vec![
                Span::styled(
                    format!(" {}", day_label(group.date)),
                    Style::default()
                        .fg(Color::Cyan)
                        .add_modifier(Modifier::BOLD),
                ),
                Span::styled(
                    format!("  spent {}", format_amount(group.total())),
                    Style::default().fg(Color::DarkGray),
                ),
            ])));

            for record in &group.records {
                let is_selected = state.focus == Focus::List && record_idx == state.selected;
                if record_idx == state.selected {
                    selected_row = Some(items.len());
                }

                let (marker, item_style, amount_style) = if is_selected {
                    let highlight = Style::default()
                        .fg(Color::Yellow)
                        .add_modifier(Modifier::BOLD);
                    ("> ", highlight, highlight)
                } else {
                    ("  ", Style::default(), Style::default().fg(Color::Red))
                };

                items.push(ListItem::new(Line::from(vec![
                    Span::styled(format!("  {marker}{:<30}", record.item), item_style),
                    Span::styled(format!("{:>12}", format_amount(record.amount)), amount_style),
                ])));
                record_idx += 1;
            }
        }

        // Keep the cursor's row in view; the list widget handles the
        // scroll offset from the selected row.
        self.list_state.select(selected_row);

        let list = List::new(items).block(block);
        frame.render_stateful_widget(list, area, &mut self.list_state);
    }
}
