//! Terminal expense ledger.
//!
//! A single-screen ratatui application over the `spendbook_core` record
//! store: an always-visible entry form, a day-grouped list with per-day
//! subtotals, a running-total footer, and confirm/edit modals in front of
//! every destructive or mutating action.

pub mod actions;
pub mod app;
pub mod components;
pub mod logging;
pub mod modals;
pub mod state;
pub mod storage;
pub mod util;

pub use app::App;
pub use logging::init_logging;
pub use storage::FileStorage;
