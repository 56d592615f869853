//! Tracing initialization and subscriber setup.

use super::file_writer::{FileWriter, LogWriter};
use crate::Config;
use std::sync::Arc;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Name of the log file inside the data directory.
pub const LOG_FILE_NAME: &str = "listkeeper.log";

/// Installs the global tracing subscriber writing JSON lines to a rotating file.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable, if set and valid
/// 2. `config.trace_level`
/// 3. Default: `"info"`
///
/// # File Location
///
/// `config.log_dir` if set, otherwise the plugin data directory
/// (see [`get_data_dir`](crate::infrastructure::get_data_dir)).
///
/// # Initialization Behavior
///
/// - Creates the log directory if it doesn't exist
/// - Silently skips setup if that fails; logging is optional
/// - Idempotent: only the first successful call installs a subscriber
pub fn init_tracing(config: &Config) {
    let level = config
        .trace_level
        .clone()
        .unwrap_or_else(|| "info".to_string());

    let log_dir = config
        .log_dir
        .clone()
        .unwrap_or_else(crate::infrastructure::get_data_dir);
    if std::fs::create_dir_all(&log_dir).is_err() {
        return;
    }

    let file_writer = Arc::new(FileWriter::new(log_dir.join(LOG_FILE_NAME)));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .json()
        .with_ansi(false)
        .with_writer(move || LogWriter::new(Arc::clone(&file_writer)));

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level));

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(fmt_layer)
        .try_init();
}
