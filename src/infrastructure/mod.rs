//! Infrastructure layer for filesystem and environment interactions.
//!
//! Currently this is path handling: where preferences and logs live and how
//! user-supplied paths are expanded.

pub mod paths;

pub use paths::{default_data_dir, expand_tilde, preferences_path, resolve_data_dir};
