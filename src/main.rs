//! Command-line entry point.
//!
//! A thin layer over the library: it resolves configuration, installs logging,
//! drives a `DirectoryStore` and prints rendered text.
//!
//! # Commands
//!
//! - `list [--query Q] [--refresh]`: load the directory and print matching employees
//! - `show ID`: print one employee's detail screen
//! - `search Q [--limit N]`: search on the server instead of locally
//! - `theme [--toggle]`: print or flip the saved light/dark preference
//!
//! Global flags `--config`, `--base-url` and `--data-dir` overlay the config
//! file and any `EMPLOYEE_DIRECTORY_*` environment variables. Colors follow the saved theme when stdout is a terminal.

#![allow(clippy::multiple_crate_versions)]

use std::io::IsTerminal;
use std::path::PathBuf;
use std::process::ExitCode;
use std::sync::Arc;

use clap::{Parser, Subcommand};

use employee_directory::api::ApiError;
use employee_directory::app::{DirectoryState, QueryDebouncer, Status};
use employee_directory::storage::{JsonKeyValueStore, ThemePreference};
use employee_directory::ui::{self, EmployeeDetail, Theme};
use employee_directory::{observability, Config, DirectoryError, EmployeeSource, Result};
use tracing::Instrument;

#[derive(Debug, Parser)]
#[command(name = "employee-directory", version, about = "Browse and search the employee directory")]
struct Cli {
    /// TOML config file.
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Override the API base URL.
    #[arg(long, global = true, value_name = "URL")]
    base_url: Option<String>,

    /// Override where preferences are stored.
    #[arg(long, global = true, value_name = "DIR")]
    data_dir: Option<String>,

    /// Never emit color escape sequences.
    #[arg(long, global = true)]
    plain: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Load the directory and list employees, optionally filtered.
    List {
        /// Case-insensitive filter over name, department, title and email.
        #[arg(long, short)]
        query: Option<String>,

        /// Load once, then refresh before printing.
        #[arg(long)]
        refresh: bool,
    },
    /// Show one employee.
    Show { id: u64 },
    /// Search on the server.
    Search {
        query: String,

        #[arg(long, default_value_t = employee_directory::api::DEFAULT_PAGE_LIMIT)]
        limit: u32,
    },
    /// Print the saved theme, or flip it.
    Theme {
        #[arg(long)]
        toggle: bool,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    let config = match resolve_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("error: {e}");
            return ExitCode::FAILURE;
        }
    };
    observability::init_tracing(&config);

    let span = tracing::debug_span!("cli", command = ?cli.command);
    match run(cli, &config).instrument(span).await {
        Ok(code) => code,
        Err(e) => {
            tracing::debug!(error = ?e, "command failed");
            eprintln!("error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn resolve_config(cli: &Cli) -> Result<Config> {
    let vars = std::env::vars_os()
        .filter_map(|(name, value)| Some((name.into_string().ok()?, value.into_string().ok()?)));
    resolve_config_with_env(cli, vars)
}

/// Config file (if any), then `EMPLOYEE_DIRECTORY_*` variables, then flags.
fn resolve_config_with_env(
    cli: &Cli,
    vars: impl IntoIterator<Item = (String, String)>,
) -> Result<Config> {
    let file = match &cli.config {
        Some(path) => Config::load(path)?,
        None => Config::default(),
    };
    let mut config = file.with_overrides(&Config::env_overrides(vars));
    if let Some(base_url) = &cli.base_url {
        config.base_url.clone_from(base_url);
    }
    if let Some(data_dir) = &cli.data_dir {
        config.data_dir = Some(data_dir.clone());
    }
    config.validate()?;
    Ok(config)
}

async fn run(cli: Cli, config: &Config) -> Result<ExitCode> {
    let theme = if cli.plain || !std::io::stdout().is_terminal() {
        None
    } else {
        Some(Theme::for_preference(saved_theme(config)))
    };

    match cli.command {
        Command::List { query, refresh } => list(config, query, refresh, theme.as_ref()).await,
        Command::Show { id } => show(config, id, theme.as_ref()).await,
        Command::Search { query, limit } => search(config, &query, limit, theme.as_ref()).await,
        Command::Theme { toggle } => theme_command(config, toggle),
    }
}

async fn list(
    config: &Config,
    query: Option<String>,
    refresh: bool,
    theme: Option<&Theme>,
) -> Result<ExitCode> {
    let store = Arc::new(config.build_store()?);

    store.fetch().await;
    if refresh && !store.status().is_error() {
        store.refresh().await;
    }

    if let Some(query) = query {
        let debouncer = QueryDebouncer::for_store(Arc::clone(&store), config.search_debounce());
        debouncer.push(query);
        debouncer.flush().await;
    }

    let state = store.snapshot();
    print!("{}", ui::render(&state, theme, terminal_width()));
    Ok(if load_failed(&state) {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    })
}

async fn show(config: &Config, id: u64, theme: Option<&Theme>) -> Result<ExitCode> {
    let source = config.build_source()?;
    let employee = source
        .get_employee(id)
        .await
        .map_err(|e| match e {
            ApiError::Http { status: 404 } => DirectoryError::EmployeeNotFound(id),
            other => DirectoryError::Api(other),
        })?;

    print!(
        "{}",
        ui::render_detail(&EmployeeDetail::from_employee(&employee), theme)
    );
    Ok(ExitCode::SUCCESS)
}

async fn search(config: &Config, query: &str, limit: u32, theme: Option<&Theme>) -> Result<ExitCode> {
    let source = config.build_source()?;
    let page = source.search_employees(query, limit).await?;
    tracing::debug!(
        returned = page.users.len(),
        total = page.total,
        "remote search finished"
    );

    // Results are already filtered; show them as a loaded list.
    let state = DirectoryState {
        employees: page.users,
        status: Status::Ready,
        ..DirectoryState::default()
    };
    print!("{}", ui::render(&state, theme, terminal_width()));
    Ok(ExitCode::SUCCESS)
}

fn theme_command(config: &Config, toggle: bool) -> Result<ExitCode> {
    let mut store = JsonKeyValueStore::open(config.preferences_path())?;
    let preference = if toggle {
        ThemePreference::toggle(&mut store, ThemePreference::default())?
    } else {
        ThemePreference::load(&store, ThemePreference::default())?
    };
    println!("{preference}");
    Ok(ExitCode::SUCCESS)
}

/// Saved theme, or the default when preferences cannot be read.
fn saved_theme(config: &Config) -> ThemePreference {
    JsonKeyValueStore::open(config.preferences_path())
        .and_then(|store| ThemePreference::load(&store, ThemePreference::default()))
        .unwrap_or_else(|e| {
            tracing::debug!(error = %e, "using default theme");
            ThemePreference::default()
        })
}

fn load_failed(state: &DirectoryState) -> bool {
    state.status.is_error()
}

fn terminal_width() -> usize {
    std::env::var("COLUMNS")
        .ok()
        .and_then(|c| c.parse().ok())
        .unwrap_or(100)
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn no_env() -> Vec<(String, String)> {
        Vec::new()
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }

    #[test]
    fn flags_overlay_defaults() {
        let cli = Cli::parse_from([
            "employee-directory",
            "--base-url",
            "http://localhost:3000",
            "--data-dir",
            "/tmp/dir",
            "list",
            "--query",
            "ada",
        ]);
        let config = resolve_config_with_env(&cli, no_env()).expect("config");
        assert_eq!(config.base_url, "http://localhost:3000");
        assert_eq!(config.data_dir.as_deref(), Some("/tmp/dir"));
        assert!(matches!(cli.command, Command::List { query: Some(ref q), .. } if q == "ada"));
    }

    #[test]
    fn env_sits_between_file_and_flags() {
        let vars = [
            ("EMPLOYEE_DIRECTORY_BASE_URL", "http://env:1"),
            ("EMPLOYEE_DIRECTORY_PAGE_LIMIT", "12"),
        ]
        .map(|(k, v)| (k.to_string(), v.to_string()));

        let cli = Cli::parse_from(["employee-directory", "theme"]);
        let config = resolve_config_with_env(&cli, vars.clone()).expect("config");
        assert_eq!(config.base_url, "http://env:1");
        assert_eq!(config.page_limit, 12);

        let cli = Cli::parse_from(["employee-directory", "--base-url", "http://flag:2", "theme"]);
        let config = resolve_config_with_env(&cli, vars).expect("config");
        assert_eq!(config.base_url, "http://flag:2");
        assert_eq!(config.page_limit, 12);
    }

    #[test]
    fn bad_base_url_is_rejected() {
        let cli = Cli::parse_from(["employee-directory", "--base-url", "nope", "theme"]);
        assert!(matches!(resolve_config_with_env(&cli, no_env()), Err(DirectoryError::Config(_))));
    }

    #[test]
    fn search_limit_defaults_to_a_page() {
        let cli = Cli::parse_from(["employee-directory", "search", "eng"]);
        assert!(matches!(cli.command, Command::Search { limit: 30, .. }));
    }

    #[test]
    fn error_state_exits_nonzero() {
        let failed = DirectoryState {
            status: Status::Error {
                message: "Network error".to_string(),
            },
            ..DirectoryState::default()
        };
        assert!(load_failed(&failed));
        assert!(!load_failed(&DirectoryState::new()));
    }
}
