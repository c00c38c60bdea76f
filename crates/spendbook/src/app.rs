use std::io;
use std::path::PathBuf;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use ratatui::{
    DefaultTerminal, Frame,
    layout::{Constraint, Direction, Layout},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};
use spendbook_core::{RecordStore, Storage};

use crate::actions::{self, ActionResult};
use crate::components::{
    Component, EventResult, booking_form::BookingFormCard, expense_list::ExpenseList,
    status_bar::StatusBar, summary_bar::SummaryBar,
};
use crate::modals::{ModalResult, handle_modal_key, render_modal};
use crate::state::{AppState, ConfirmAction, Focus, ModalState};
use crate::storage::FileStorage;

/// How long to wait for input before a timer tick.
const POLL_INTERVAL: Duration = Duration::from_millis(200);

pub struct App {
    state: AppState,
    booking_form: BookingFormCard,
    expense_list: ExpenseList,
    summary_bar: SummaryBar,
    status_bar: StatusBar,
}

impl App {
    /// Create the app over any storage. Loading happens here, exactly
    /// once, before any mutation can run.
    pub fn new(storage: Box<dyn Storage>) -> Self {
        Self {
            state: AppState::new(RecordStore::load(storage)),
            booking_form: BookingFormCard::new(),
            expense_list: ExpenseList::new(),
            summary_bar: SummaryBar::new(),
            status_bar: StatusBar::new(),
        }
    }

    /// Create the app backed by files in the given data directory.
    pub fn with_data_dir(data_dir: PathBuf) -> Self {
        Self::new(Box::new(FileStorage::new(data_dir)))
    }

    /// runs the application's main loop until the user quits
    pub fn run(&mut self, terminal: &mut DefaultTerminal) -> color_eyre::Result<()> {
        while !self.state.exit {
            terminal.draw(|frame| self.draw(frame))?;
            self.handle_events()?;
        }
        Ok(())
    }

    fn draw(&mut self, frame: &mut Frame) {
        let summary_height = if self.state.store.is_empty() { 0 } else { 3 };

        let chunks = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),              // Header
                Constraint::Length(6),              // Entry form
                Constraint::Min(0),                 // Grouped list
                Constraint::Length(summary_height), // Summary footer
                Constraint::Length(2),              // Status bar
            ])
            .split(frame.area());

        let header = Paragraph::new(Line::from(Span::styled(
            " SPENDBOOK  (a little expense book)",
            Style::default().add_modifier(Modifier::BOLD).fg(Color::Cyan),
        )));
        frame.render_widget(header, chunks[0]);

        self.booking_form.render(frame, chunks[1], &self.state);
        self.expense_list.render(frame, chunks[2], &self.state);
        if summary_height > 0 {
            self.summary_bar.render(frame, chunks[3], &self.state);
        }
        self.status_bar.render(frame, chunks[4], &self.state);

        // Render modal overlay (if active)
        render_modal(frame, &self.state);
    }

    fn handle_events(&mut self) -> io::Result<()> {
        if event::poll(POLL_INTERVAL)? {
            match event::read()? {
                Event::Key(key_event) if key_event.kind == KeyEventKind::Press => {
                    self.handle_key_event(key_event)
                }
                _ => {}
            }
        }
        // Expire transient feedback even while the user is idle.
        self.state.tick();
        Ok(())
    }

    fn handle_key_event(&mut self, key_event: KeyEvent) {
        // Handle modal first if active
        if !matches!(self.state.modal, ModalState::None) {
            match handle_modal_key(key_event, &mut self.state) {
                ModalResult::Confirmed(action) => self.handle_confirmed(action),
                ModalResult::Submitted { id, item, amount } => {
                    self.state.modal = ModalState::None;
                    let result = actions::handle_edit(&mut self.state, &id, &item, &amount);
                    self.apply_action_result(result);
                }
                ModalResult::Cancelled => {
                    self.state.modal = ModalState::None;
                }
                ModalResult::Continue => {}
            }
            return;
        }

        // Global key bindings
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
                self.state.exit = true;
                return;
            }
            KeyCode::Tab => {
                self.state.focus = match self.state.focus {
                    Focus::Form => Focus::List,
                    Focus::List => Focus::Form,
                };
                self.state.clamp_selection();
                return;
            }
            KeyCode::Esc => {
                self.state.clear_error();
                self.state.flash = None;
                return;
            }
            _ => {}
        }

        let result = match self.state.focus {
            Focus::Form => self.booking_form.handle_key(key_event, &mut self.state),
            Focus::List => self.expense_list.handle_key(key_event, &mut self.state),
        };

        if result == EventResult::Exit {
            self.state.exit = true;
        }
    }

    /// Dispatch a confirmed destructive operation. Declining never gets
    /// here; cancel closed the modal with nothing done.
    fn handle_confirmed(&mut self, action: ConfirmAction) {
        self.state.modal = ModalState::None;
        let result = match action {
            ConfirmAction::DeleteRecord(id) => actions::handle_delete_record(&mut self.state, &id),
            ConfirmAction::ClearDay(date) => actions::handle_clear_day(&mut self.state, date),
            ConfirmAction::ClearAll => actions::handle_clear_all(&mut self.state),
        };
        self.apply_action_result(result);
    }

    fn apply_action_result(&mut self, result: ActionResult) {
        match result {
            ActionResult::Done => {}
            ActionResult::Error(msg) => self.state.set_error(msg),
        }
    }
}
