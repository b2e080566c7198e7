//! Key/value persistence abstraction.
//!
//! This module defines the [`KeyValueStore`] trait, the persistence
//! collaborator. It is deliberately tiny: string keys to string values. The
//! directory only persists small preferences through it, never the employee
//! list.

use crate::domain::error::Result;

/// String key/value persistence.
///
/// # Implementations
///
/// - [`JsonKeyValueStore`](crate::storage::JsonKeyValueStore): JSON file with atomic writes
/// - [`MemoryStore`](crate::storage::MemoryStore): process-local map, used in tests
///
/// # Examples
///
/// ```
/// use employee_directory::storage::{KeyValueStore, MemoryStore};
///
/// let mut store = MemoryStore::default();
/// store.set("greeting", "hello")?;
/// assert_eq!(store.get("greeting")?.as_deref(), Some("hello"));
/// assert_eq!(store.get("missing")?, None);
/// # Ok::<(), employee_directory::DirectoryError>(())
/// ```
pub trait KeyValueStore: Send {
    /// Returns the value stored under `key`, or `None` when absent.
    ///
    /// # Errors
    ///
    /// Returns an error if the backend cannot be read.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Stores `value` under `key`, replacing any previous value.
    ///
    /// # Errors
    ///
    /// Returns an error if the write cannot be persisted.
    fn set(&mut self, key: &str, value: &str) -> Result<()>;
}
