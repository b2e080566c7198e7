//! Tracing initialization and subscriber setup.

use super::file_writer::RotatingFileWriter;
use crate::infrastructure::expand_tilde;
use crate::Config;
use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Level used when neither `RUST_LOG` nor the config names one.
pub const DEFAULT_LEVEL: &str = "info";

/// Installs the global tracing subscriber.
///
/// # Level Resolution
///
/// 1. `RUST_LOG` environment variable
/// 2. `config.trace_level`
/// 3. [`DEFAULT_LEVEL`]
///
/// Output goes to `config.log_file` through a [`RotatingFileWriter`] when set,
/// otherwise to stderr. Calling this more than once is harmless: only the first
/// subscriber is installed.
pub fn init_tracing(config: &Config) {
    let filter = build_filter(config);

    let Some(log_file) = config.log_file.as_deref() else {
        let _ = tracing_subscriber::registry()
            .with(filter)
            .with(fmt::layer().with_writer(std::io::stderr).with_target(false))
            .try_init();
        return;
    };

    let path = expand_tilde(log_file);
    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        if std::fs::create_dir_all(parent).is_err() {
            // Logging is optional; run without it.
            return;
        }
    }

    let _ = tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_ansi(false)
                .with_writer(RotatingFileWriter::new(path)),
        )
        .try_init();
}

fn build_filter(config: &Config) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        let level = config.trace_level.as_deref().unwrap_or(DEFAULT_LEVEL);
        EnvFilter::try_new(level).unwrap_or_else(|_| EnvFilter::new(DEFAULT_LEVEL))
    })
}
