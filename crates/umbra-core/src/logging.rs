//! File logging through `tracing`
//!
//! The TUI owns stdout, so every crate logs into a daily rolling file:
//!
//! ```bash
//! UMBRA_LOG=debug umbra
//! UMBRA_LOG=umbra_webhook=trace umbra
//! UMBRA_LOG_DIR=/tmp/umbra-logs umbra
//! ```

use std::path::{Path, PathBuf};
use tracing_appender::rolling::{RollingFileAppender, Rotation};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use crate::error::{Result, ResultExt};

/// Filter directives, e.g. `debug` or `umbra_webhook=trace`
pub const LOG_ENV_VAR: &str = "UMBRA_LOG";

/// Replaces the default log directory
pub const LOG_DIR_ENV_VAR: &str = "UMBRA_LOG_DIR";

const LOG_FILE_PREFIX: &str = "umbra.log";

const DEFAULT_FILTER: &str =
    "umbra=info,umbra_core=info,umbra_webhook=info,umbra_app=info,umbra_tui=info,warn";

/// Install the global subscriber and return the directory being written to.
///
/// Consultation payloads are only written at `debug`.
pub fn init() -> Result<PathBuf> {
    let dir = log_directory(std::env::var_os(LOG_DIR_ENV_VAR).as_deref().map(Path::new));
    std::fs::create_dir_all(&dir).context("creating log directory")?;

    let filter = EnvFilter::try_from_env(LOG_ENV_VAR).unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    let writer = RollingFileAppender::new(Rotation::DAILY, &dir, LOG_FILE_PREFIX);

    let file_layer = fmt::layer()
        .with_writer(writer)
        .with_ansi(false)
        .with_target(true)
        .with_line_number(true)
        .with_timer(fmt::time::ChronoLocal::new("%Y-%m-%d %H:%M:%S%.3f".to_string()));

    tracing_subscriber::registry()
        .with(filter)
        .with(file_layer)
        .init();

    tracing::info!(version = env!("CARGO_PKG_VERSION"), dir = %dir.display(), "logging started");
    Ok(dir)
}

/// `override_dir` wins; otherwise `<data_local_dir>/umbra/logs`
fn log_directory(override_dir: Option<&Path>) -> PathBuf {
    match override_dir {
        Some(dir) => dir.to_path_buf(),
        None => dirs::data_local_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join("umbra")
            .join("logs"),
    }
}
