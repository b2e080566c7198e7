//! Employee Directory: the data and state core of a staff directory client.
//!
//! The crate provides:
//! - A data store that loads the employee list from a remote API with a
//!   single-flight `idle → loading → ready / error` state machine
//! - Pure client-side search across name, department, title and email
//! - Derived views (counts, loading flags, lookups) and change notification
//! - A persisted light/dark theme preference
//! - A plain-text renderer and a small CLI on top of all of the above

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  CLI (main.rs)                                      │  ← Entry point
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← State machine
//! │  - Event handling                                   │
//! │  - DirectoryStore (owns state, runs requests)       │
//! │  - Filter function, query debouncer                 │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Storage Layer │   │ API Layer     │
//! │ (ui/)         │   │ (storage/)    │   │ (api/)        │
//! │ - View models │   │ - JSON k/v    │   │ - Source trait│
//! │ - Rendering   │   │ - Theme pref  │   │ - reqwest     │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Infrastructure & Domain Layers                     │
//! │  - Data paths (infrastructure/)                     │
//! │  - Error types, Employee model (domain/)            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - tracing subscriber, rotating log file            │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Configuration
//!
//! Settings come from an optional TOML file, overlaid by CLI flags:
//!
//! ```toml
//! base_url = "https://dummyjson.com"
//! request_timeout_ms = 10000
//! page_limit = 30
//! search_debounce_ms = 300
//! trace_level = "debug"
//! log_file = "~/.local/share/employee-directory/directory.log"
//! data_dir = "~/.local/share/employee-directory"
//! ```
//!
//! # Example
//!
//! ```no_run
//! use employee_directory::Config;
//!
//! # async fn run() -> employee_directory::Result<()> {
//! let store = Config::default().build_store()?;
//! store.fetch().await;
//! store.set_search_query("engineer");
//! println!("{} matches", store.counts().filtered);
//! # Ok(())
//! # }
//! ```

pub mod api;
pub mod app;
pub mod domain;
pub mod infrastructure;
pub mod observability;
pub mod storage;
pub mod ui;

pub use api::{ApiError, EmployeeSource, HttpEmployeeSource};
pub use app::{filter_employees, handle_event, DirectoryState, DirectoryStore, Event, Status};
pub use domain::{DirectoryError, Employee, Result};
pub use ui::Theme;

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;

use serde::Deserialize;
use url::Url;

use crate::api::PageRequest;

/// Runtime configuration.
///
/// Missing keys take their defaults; unknown keys in a TOML file are rejected.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Root of the directory API. Default: `https://dummyjson.com`
    pub base_url: String,

    /// Per-request timeout in milliseconds. Default: `10000`
    pub request_timeout_ms: u64,

    /// Employees requested per load. Default: `30`
    pub page_limit: u32,

    /// Quiet period before a typed query is applied. Default: `300`
    pub search_debounce_ms: u64,

    /// Log filter directive such as `debug` or `employee_directory=trace`.
    ///
    /// `RUST_LOG` takes precedence. Default: `"info"`
    pub trace_level: Option<String>,

    /// Write logs to this rotating file instead of stderr.
    pub log_file: Option<String>,

    /// Where preferences are stored. Defaults to the platform data directory.
    pub data_dir: Option<String>,
}

/// Prefix of environment variables that override config keys.
pub const ENV_PREFIX: &str = "EMPLOYEE_DIRECTORY_";

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: api::DEFAULT_BASE_URL.to_string(),
            request_timeout_ms: 10_000,
            page_limit: api::DEFAULT_PAGE_LIMIT,
            search_debounce_ms: 300,
            trace_level: None,
            log_file: None,
            data_dir: None,
        }
    }
}

impl Config {
    /// Overlays string key/value pairs, such as environment overrides.
    ///
    /// Blank values, unparsable numbers and unknown keys are ignored, leaving
    /// the current value in place.
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use employee_directory::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("page_limit".to_string(), "50".to_string());
    /// map.insert("request_timeout_ms".to_string(), "soon".to_string());
    ///
    /// let config = Config::default().with_overrides(&map);
    /// assert_eq!(config.page_limit, 50);
    /// assert_eq!(config.request_timeout_ms, 10_000);
    /// ```
    #[must_use]
    pub fn with_overrides(self, map: &BTreeMap<String, String>) -> Self {
        let text = |key: &str| {
            map.get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        Self {
            base_url: text("base_url").unwrap_or(self.base_url),
            request_timeout_ms: text("request_timeout_ms")
                .and_then(|s| s.parse().ok())
                .unwrap_or(self.request_timeout_ms),
            page_limit: text("page_limit")
                .and_then(|s| s.parse().ok())
                .filter(|&n: &u32| n > 0)
                .unwrap_or(self.page_limit),
            search_debounce_ms: text("search_debounce_ms")
                .and_then(|s| s.parse().ok())
                .unwrap_or(self.search_debounce_ms),
            trace_level: text("trace_level").or(self.trace_level),
            log_file: text("log_file").or(self.log_file),
            data_dir: text("data_dir").or(self.data_dir),
        }
    }

    /// Collects `EMPLOYEE_DIRECTORY_*` variables as lowercase config keys.
    ///
    /// `EMPLOYEE_DIRECTORY_PAGE_LIMIT=50` becomes `page_limit = "50"`.
    #[must_use]
    pub fn env_overrides<I>(vars: I) -> BTreeMap<String, String>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        vars.into_iter()
            .filter_map(|(name, value)| {
                name.strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_ascii_lowercase(), value))
            })
            .collect()
    }

    /// Parses and validates a TOML document.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] on invalid TOML, unknown keys or
    /// values that fail [`validate`](Self::validate).
    pub fn from_toml_str(contents: &str) -> Result<Self> {
        let config: Self = toml::from_str(contents)
            .map_err(|e| DirectoryError::Config(format!("invalid config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and parses a TOML config file.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Io`] if the file cannot be read, otherwise as
    /// [`from_toml_str`](Self::from_toml_str).
    pub fn load(path: &Path) -> Result<Self> {
        tracing::debug!(path = ?path, "loading config file");
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Checks values that would otherwise fail later at request time.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] for a zero page limit or timeout, or an
    /// unparsable base URL.
    pub fn validate(&self) -> Result<()> {
        if self.page_limit == 0 {
            return Err(DirectoryError::Config(
                "page_limit must be positive".to_string(),
            ));
        }
        if self.request_timeout_ms == 0 {
            return Err(DirectoryError::Config(
                "request_timeout_ms must be positive".to_string(),
            ));
        }
        self.parsed_base_url().map(|_| ())
    }

    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_millis(self.request_timeout_ms)
    }

    #[must_use]
    pub const fn search_debounce(&self) -> Duration {
        Duration::from_millis(self.search_debounce_ms)
    }

    /// Resolved data directory, with `~` expanded.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        infrastructure::resolve_data_dir(self.data_dir.as_deref())
    }

    /// Path of the JSON preference store.
    #[must_use]
    pub fn preferences_path(&self) -> PathBuf {
        infrastructure::preferences_path(&self.resolved_data_dir())
    }

    fn parsed_base_url(&self) -> Result<Url> {
        Url::parse(&self.base_url).map_err(|e| {
            DirectoryError::Config(format!("invalid base_url {:?}: {e}", self.base_url))
        })
    }

    /// Builds the HTTP employee source described by this config.
    ///
    /// # Errors
    ///
    /// Returns [`DirectoryError::Config`] for a bad base URL and
    /// [`DirectoryError::Api`] if the HTTP client cannot be built.
    pub fn build_source(&self) -> Result<HttpEmployeeSource> {
        let source = HttpEmployeeSource::new(self.parsed_base_url()?, self.request_timeout())?;
        Ok(source)
    }

    /// Builds a store backed by [`build_source`](Self::build_source) that
    /// loads the first `page_limit` employees.
    ///
    /// # Errors
    ///
    /// As [`build_source`](Self::build_source).
    pub fn build_store(&self) -> Result<DirectoryStore> {
        let source = self.build_source()?;
        tracing::debug!(
            base_url = %source.base_url(),
            page_limit = self.page_limit,
            "directory store configured"
        );
        Ok(DirectoryStore::with_page(
            Arc::new(source),
            PageRequest::first(self.page_limit),
        ))
    }
}
