use anyhow::Result;
use chrono::Local;
use std::path::{Path, PathBuf};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Log file name for a session started now
fn log_filename() -> String {
    format!("credform-{}.log", Local::now().format("%Y-%m-%d-%H-%M-%S"))
}

/// Default logs directory: ~/.config/credform/logs
pub fn default_logs_dir() -> Result<PathBuf> {
    Ok(dirs::config_dir()
        .ok_or(anyhow::anyhow!("Could not find config directory"))?
        .join("credform")
        .join("logs"))
}

/// Initialize tracing with file-based logging
///
/// The terminal belongs to the form, so nothing is written to stdout or
/// stderr. Logs go to `<logs_dir>/credform-YYYY-MM-DD-HH-MM-SS.log`. The
/// returned guard flushes the writer when dropped and must outlive the app.
pub fn init_logging(logs_dir: &Path) -> Result<(PathBuf, WorkerGuard)> {
    std::fs::create_dir_all(logs_dir)?;

    let log_filename = log_filename();
    let log_path = logs_dir.join(&log_filename);

    let file_appender = tracing_appender::rolling::never(logs_dir, &log_filename);
    let (non_blocking, guard) = tracing_appender::non_blocking(file_appender);

    let file_layer = fmt::layer()
        .with_writer(non_blocking)
        .with_ansi(false) // No ANSI codes in log file
        .with_target(true)
        .with_thread_ids(true)
        .with_line_number(true);

    // Default to INFO, can be overridden with RUST_LOG
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .try_init()?;

    Ok((log_path, guard))
}
