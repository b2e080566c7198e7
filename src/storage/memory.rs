//! In-memory key/value store.

use crate::domain::error::Result;
use crate::storage::backend::KeyValueStore;
use std::collections::HashMap;

/// Process-local [`KeyValueStore`]. Nothing is persisted.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: HashMap<String, String>,
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.entries.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> Result<()> {
        self.entries.insert(key.to_string(), value.to_string());
        Ok(())
    }
}
