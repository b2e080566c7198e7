//! Path helpers for the directory's local state.
//!
//! Preferences and the optional log file live under the platform data
//! directory (`~/.local/share/employee-directory` on Linux) unless the
//! configuration points somewhere else.

use std::path::{Path, PathBuf};

/// Directory name used under the platform data directory.
pub const APP_DIR_NAME: &str = "employee-directory";

/// File name of the JSON preference store inside the data directory.
pub const PREFERENCES_FILE: &str = "preferences.json";

/// Returns the default data directory.
///
/// Falls back to the system temp directory when the platform exposes no data
/// directory (for example a minimal container without `$HOME`).
#[must_use]
pub fn default_data_dir() -> PathBuf {
    dirs::data_dir()
        .unwrap_or_else(std::env::temp_dir)
        .join(APP_DIR_NAME)
}

/// Resolves the data directory, preferring an explicit override.
///
/// The override goes through [`expand_tilde`] so config files can say
/// `~/somewhere`.
#[must_use]
pub fn resolve_data_dir(override_dir: Option<&str>) -> PathBuf {
    override_dir.map_or_else(default_data_dir, |dir| expand_tilde(dir))
}

/// Path of the preference store inside `data_dir`.
#[must_use]
pub fn preferences_path(data_dir: &Path) -> PathBuf {
    data_dir.join(PREFERENCES_FILE)
}

/// Expands a leading `~` to the user's home directory.
///
/// Paths without a leading tilde, and `~user` forms, are returned unchanged.
/// When no home directory is known the path is returned as given.
///
/// # Examples
///
/// ```
/// use employee_directory::infrastructure::expand_tilde;
/// use std::path::PathBuf;
///
/// assert_eq!(expand_tilde("/absolute/path"), PathBuf::from("/absolute/path"));
/// ```
#[must_use]
pub fn expand_tilde(path: &str) -> PathBuf {
    let Some(home) = dirs::home_dir() else {
        return PathBuf::from(path);
    };
    if path == "~" {
        home
    } else if let Some(rest) = path.strip_prefix("~/") {
        home.join(rest)
    } else {
        PathBuf::from(path)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absolute_paths_pass_through() {
        assert_eq!(expand_tilde("/var/data"), PathBuf::from("/var/data"));
        assert_eq!(expand_tilde("relative/dir"), PathBuf::from("relative/dir"));
        assert_eq!(expand_tilde("~other/dir"), PathBuf::from("~other/dir"));
    }

    #[test]
    fn tilde_expands_to_home() {
        if let Some(home) = dirs::home_dir() {
            assert_eq!(expand_tilde("~"), home);
            assert_eq!(expand_tilde("~/prefs"), home.join("prefs"));
        }
    }

    #[test]
    fn override_wins_over_default() {
        assert_eq!(resolve_data_dir(Some("/tmp/dir")), PathBuf::from("/tmp/dir"));
        assert!(resolve_data_dir(None).ends_with(APP_DIR_NAME));
    }

    #[test]
    fn preferences_live_in_the_data_dir() {
        assert_eq!(
            preferences_path(Path::new("/data")),
            PathBuf::from("/data/preferences.json")
        );
    }
}
