use std::path::PathBuf;

use clap::Parser;
use spendbook::{App, init_logging};

#[derive(Parser, Debug)]
#[command(name = "spendbook")]
#[command(about = "A terminal ledger for small daily expenses")]
struct Args {
    /// Path to the data directory (default: ~/.spendbook/)
    #[arg(short, long)]
    data_dir: Option<PathBuf>,

    /// Log level (debug, info, warn, error)
    #[arg(short, long, default_value = "info")]
    log_level: String,
}

fn main() -> color_eyre::Result<()> {
    color_eyre::install()?;

    let args = Args::parse();
    let data_dir = args
        .data_dir
        .unwrap_or_else(spendbook::storage::default_data_dir);

    let _guard = init_logging(&data_dir, &args.log_level)?;

    let mut app = App::with_data_dir(data_dir);

    ratatui::run(|terminal| app.run(terminal))?;

    tracing::info!("Application shutting down");

    if let Err(err) = ratatui::try_restore() {
        tracing::error!("Failed to restore terminal: {err}");
    }

    Ok(())
}
