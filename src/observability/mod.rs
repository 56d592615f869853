//! Structured logging to a rotating file.
//!
//! ```text
//! tracing macros → EnvFilter → fmt JSON layer → LogWriter → FileWriter → listkeeper.log
//! ```
//!
//! Plugin panes own stdout for rendering, so log output goes to a file. Each
//! event is one JSON object per line.
//!
//! # Usage
//!
//! ```rust
//! use listkeeper::observability::init_tracing;
//! use listkeeper::Config;
//!
//! let dir = std::env::temp_dir().join("listkeeper-doc");
//! let config = Config {
//!     log_dir: Some(dir),
//!     trace_level: Some("debug".to_string()),
//!     ..Default::default()
//! };
//! init_tracing(&config);
//!
//! tracing::debug!("logging initialized");
//! ```
//!
//! # Modules
//!
//! - [`init`]: Subscriber setup
//! - [`file_writer`]: Size-based rotating file writer

pub mod file_writer;
mod init;

pub use file_writer::{FileWriter, LogWriter};
pub use init::{init_tracing, LOG_FILE_NAME};
