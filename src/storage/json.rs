//! JSON file-based key/value store.
//!
//! The whole map is held in memory and rewritten on every change using an
//! atomic write (write to a temporary file, then rename) so a crash never
//! leaves a half-written file behind.
//!
//! # File Format
//!
//! ```json
//! {
//!   "version": 1,
//!   "entries": {
//!     "@employee_directory_theme": "dark"
//!   }
//! }
//! ```

use crate::domain::error::{DirectoryError, Result};
use crate::storage::backend::KeyValueStore;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

/// Current on-disk format version.
const FORMAT_VERSION: u32 = 1;

#[derive(Debug, Clone, Serialize, Deserialize)]
struct StorageData {
    version: u32,

    #[serde(default)]
    entries: BTreeMap<String, String>,
}

impl Default for StorageData {
    fn default() -> Self {
        Self {
            version: FORMAT_VERSION,
            entries: BTreeMap::new(),
        }
    }
}

/// Key/value store persisted to a single JSON file.
///
/// `Send` but not `Sync`; wrap it in a mutex to share it.
#[derive(Debug)]
pub struct JsonKeyValueStore {
    file_path: PathBuf,
    data: StorageData,
    dirty: bool,
}

impl JsonKeyValueStore {
    /// Opens the store at `file_path`, creating parent directories as needed.
    ///
    /// A missing file starts an empty store; it is created on the first write.
    ///
    /// # Errors
    ///
    /// Returns an error if the parent directory cannot be created or the file
    /// exists but cannot be read or parsed.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// use employee_directory::storage::JsonKeyValueStore;
    /// use std::path::PathBuf;
    ///
    /// let store = JsonKeyValueStore::open(PathBuf::from("/tmp/preferences.json"))?;
    /// # Ok::<(), employee_directory::DirectoryError>(())
    /// ```
    pub fn open(file_path: PathBuf) -> Result<Self> {
        tracing::debug!(path = ?file_path, "opening JSON key/value store");

        if let Some(parent) = file_path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let data = if file_path.exists() {
            Self::load_from_file(&file_path)?
        } else {
            tracing::debug!("no existing file, starting empty");
            StorageData::default()
        };

        tracing::debug!(entries = data.entries.len(), "key/value store opened");

        Ok(Self {
            file_path,
            data,
            dirty: false,
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn load_from_file(path: &Path) -> Result<StorageData> {
        let contents = std::fs::read_to_string(path)?;
        let data: StorageData = serde_json::from_str(&contents)
            .map_err(|e| DirectoryError::Storage(format!("failed to parse JSON: {e}")))?;

        if data.version > FORMAT_VERSION {
            return Err(DirectoryError::Storage(format!(
                "unsupported storage version {} (expected <= {FORMAT_VERSION})",
                data.version
            )));
        }

        Ok(data)
    }

    fn save_to_file(&mut self) -> Result<()> {
        if !self.dirty {
            tracing::trace!("skipping save, no changes");
            return Ok(());
        }

        let json = serde_json::to_string_pretty(&self.data)
            .map_err(|e| DirectoryError::Serialization(format!("failed to serialize JSON: {e}")))?;

        let tmp_path = self.file_path.with_extension("tmp");
        std::fs::write(&tmp_path, json)?;
        std::fs::rename(&tmp_path, &self.file_path)?;

        self.dirty = false;
        tracing::debug!(path = ?self.file_path, "key/value store saved");
        Ok(())
    }
}

impl KeyValueStore for JsonKeyValueStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.data.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        let _span = tracing::debug_span!("json_set", key = %key).entered();

        if self.data.entries.get(key).map(String::as_str) == Some(value) {
            return Ok(());
        }
        self.data.entries.insert(key.to_string(), value.to_string());
        self.dirty = true;
        self.save_to_file()
    }
}

impl Drop for JsonKeyValueStore {
    fn drop(&mut self) {
        if self.dirty {
            tracing::debug!("saving dirty data on drop");
            if let Err(e) = self.save_to_file() {
                tracing::error!(error = %e, "failed to save on drop");
            }
        }
    }
}
