//! Running-total footer, shown only while records exist.

use crossterm::event::KeyEvent;
use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
};

use super::{Component, EventResult};
use crate::state::AppState;
use crate::util::format::format_amount;

pub struct SummaryBar;

impl SummaryBar {
    pub fn new() -> Self {
        Self
    }
}

impl Component for SummaryBar {
    fn handle_key(&mut self, _key: KeyEvent, _state: &mut AppState) -> EventResult {
        EventResult::NotHandled
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, state: &AppState) {
        let line = Line::from(vec![
            Span::styled(" Total spent ", Style::default().fg(Color::DarkGray)),
            Span::styled(
                format_amount(state.store.total()),
                Style::default()
                    .fg(Color::Green)
                    .add_modifier(Modifier::BOLD),
            ),
            Span::styled(
                "   (C in the list clears everything)",
                Style::default().fg(Color::DarkGray),
            ),
        ]);

        let paragraph = Paragraph::new(line).block(Block::default().borders(Borders::ALL));
        frame.render_widget(paragraph, area);
    }
}
