//! Persisted theme preference.
//!
//! The preference is stored as the string `"light"` or `"dark"` under
//! [`THEME_KEY`]. An absent or unrecognised value falls back to the caller's
//! default (usually the system appearance).

use std::fmt;
use std::str::FromStr;

use crate::domain::error::{DirectoryError, Result};
use crate::storage::backend::KeyValueStore;

/// Storage key holding the theme preference.
pub const THEME_KEY: &str = "@employee_directory_theme";

/// Light or dark appearance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemePreference {
    #[default]
    Light,
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    #[must_use]
    pub const fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    /// Reads the saved preference, or `fallback` when none is saved.
    ///
    /// An unreadable value is logged and treated as absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the store itself cannot be read.
    pub fn load(store: &dyn KeyValueStore, fallback: Self) -> Result<Self> {
        let Some(raw) = store.get(THEME_KEY)? else {
            return Ok(fallback);
        };
        Ok(raw.parse().unwrap_or_else(|e: DirectoryError| {
            tracing::debug!(value = %raw, error = %e, "ignoring saved theme");
            fallback
        }))
    }

    /// Persists this preference.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be written.
    pub fn save(self, store: &mut dyn KeyValueStore) -> Result<()> {
        store.set(THEME_KEY, self.as_str())
    }

    /// Flips the saved preference and returns the new value.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be read or written.
    pub fn toggle(store: &mut dyn KeyValueStore, fallback: Self) -> Result<Self> {
        let next = Self::load(store, fallback)?.toggled();
        next.save(store)?;
        tracing::debug!(theme = next.as_str(), "theme toggled");
        Ok(next)
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = DirectoryError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(DirectoryError::Config(format!("unknown theme {other:?}"))),
        }
    }
}
