//! Persistence collaborator for small user preferences.
//!
//! The employee list itself is never persisted; this layer only backs
//! preferences such as the light/dark theme.
//!
//! # Modules
//!
//! - `backend`: The [`KeyValueStore`] trait
//! - `json`: JSON file implementation with atomic writes
//! - `memory`: In-memory implementation
//! - `preferences`: Typed theme preference on top of any store

pub mod backend;
pub mod json;
pub mod memory;
pub mod preferences;

pub use backend::KeyValueStore;
pub use json::JsonKeyValueStore;
pub use memory::MemoryStore;
pub use preferences::{ThemePreference, THEME_KEY};
