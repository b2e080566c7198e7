//! Structured logging setup.
//!
//! Everything in the crate logs through `tracing` macros and spans. This module
//! installs the subscriber that turns them into output.
//!
//! # Configuration
//!
//! Level is controlled via:
//! 1. `RUST_LOG` environment variable (highest priority)
//! 2. `trace_level` config option
//! 3. Default: `"info"`
//!
//! Output goes to stderr unless `log_file` is configured, in which case lines
//! are appended to a file that rotates at 10 MB with 3 backups.
//!
//! ```rust
//! use employee_directory::observability::init_tracing;
//! use employee_directory::Config;
//!
//! init_tracing(&Config::default());
//! tracing::debug!("directory initialized");
//! ```

mod file_writer;
mod init;

pub use file_writer::RotatingFileWriter;
pub use init::{init_tracing, DEFAULT_LEVEL};
