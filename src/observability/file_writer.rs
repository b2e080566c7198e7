//! Size-rotating log file used as a `tracing_subscriber` writer.
//!
//! When the active file grows past [`MAX_FILE_SIZE_BYTES`] it is renamed to
//! `<name>.<unix_timestamp>` and a fresh file is started. Only the newest
//! [`MAX_BACKUP_FILES`] backups are kept.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};
use std::time::{SystemTime, UNIX_EPOCH};

use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of backup files to retain after rotation.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating log file.
///
/// The file is opened lazily on the first write, so construction never fails.
pub struct RotatingFileWriter {
    file_path: PathBuf,
    max_bytes: u64,
    file: Mutex<Option<File>>,
}

impl RotatingFileWriter {
    #[must_use]
    pub fn new(file_path: PathBuf) -> Self {
        Self::with_limit(file_path, MAX_FILE_SIZE_BYTES)
    }

    /// Creates a writer that rotates after `max_bytes`.
    #[must_use]
    pub const fn with_limit(file_path: PathBuf, max_bytes: u64) -> Self {
        Self {
            file_path,
            max_bytes,
            file: Mutex::new(None),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.file_path
    }

    fn lock(&self) -> io::Result<MutexGuard<'_, Option<File>>> {
        self.file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("mutex poisoned: {e}")))
    }

    fn write_locked(&self, slot: &mut Option<File>, buf: &[u8]) -> io::Result<()> {
        if fs::metadata(&self.file_path).is_ok_and(|m| m.len() > self.max_bytes) {
            *slot = None;
            self.rotate()?;
        }

        if slot.is_none() {
            *slot = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.file_path)?,
            );
        }
        let Some(file) = slot.as_mut() else {
            return Err(io::Error::new(io::ErrorKind::Other, "no log file available"));
        };
        file.write_all(buf)?;
        file.flush()
    }

    fn rotate(&self) -> io::Result<()> {
        let timestamp = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos())
            .unwrap_or_default();

        let mut backup = self.file_path.clone().into_os_string();
        backup.push(format!(".{timestamp}"));

        if self.file_path.exists() {
            fs::rename(&self.file_path, PathBuf::from(backup))?;
        }
        self.cleanup_old_backups()
    }

    fn cleanup_old_backups(&self) -> io::Result<()> {
        let parent = self
            .file_path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let Some(file_name) = self.file_path.file_name().and_then(|s| s.to_str()) else {
            return Err(io::Error::new(io::ErrorKind::Other, "invalid log file name"));
        };
        let prefix = format!("{file_name}.");

        let mut backups: Vec<PathBuf> = fs::read_dir(parent)?
            .filter_map(Result::ok)
            .map(|entry| entry.path())
            .filter(|path| {
                path.file_name()
                    .and_then(|name| name.to_str())
                    .and_then(|name| name.strip_prefix(&prefix))
                    .is_some_and(|suffix| suffix.chars().all(|c| c.is_ascii_digit()))
            })
            .collect();

        // Timestamps share a width, so newest sorts last.
        backups.sort();
        let excess = backups.len().saturating_sub(MAX_BACKUP_FILES);
        for old in backups.iter().take(excess) {
            let _ = fs::remove_file(old);
        }
        Ok(())
    }
}

impl Write for &RotatingFileWriter {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        let mut slot = self.lock()?;
        self.write_locked(&mut slot, buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        let mut slot = self.lock()?;
        slot.as_mut().map_or(Ok(()), File::flush)
    }
}

impl<'a> MakeWriter<'a> for RotatingFileWriter {
    type Writer = &'a RotatingFileWriter;

    fn make_writer(&'a self) -> Self::Writer {
        self
    }
}

impl std::fmt::Debug for RotatingFileWriter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFileWriter")
            .field("file_path", &self.file_path)
            .field("max_bytes", &self.max_bytes)
            .finish_non_exhaustive()
    }
}
