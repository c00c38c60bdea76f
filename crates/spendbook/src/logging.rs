use std::path::Path;

use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{EnvFilter, fmt, layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize logging to a file in the data directory.
///
/// Logs are written to `{data_dir}/spendbook.log.<date>` through a
/// daily-rolling, non-blocking appender. The level can be controlled via
/// the `level` parameter or the `RUST_LOG` environment variable. The
/// returned guard must be held for the life of the process so buffered
/// lines are flushed on exit.
pub fn init_logging(data_dir: &Path, level: &str) -> color_eyre::Result<WorkerGuard> {
    std::fs::create_dir_all(data_dir)?;

    let appender = tracing_appender::rolling::daily(data_dir, "spendbook.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);

    let default_filter = format!("spendbook={level},spendbook_core=warn");
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&default_filter));

    tracing_subscriber::registry()
        .with(env_filter)
        .with(
            fmt::layer()
                .with_writer(writer)
                .with_ansi(false)
                .with_target(true),
        )
        .init();

    tracing::info!(
        "Spendbook logging initialized (data_dir={})",
        data_dir.display()
    );
    Ok(guard)
}
