//! In-memory configuration store.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::ConfigStore;
use crate::error::Result;

/// Configuration kept in a map for the lifetime of the value.
///
/// Nothing is persisted. Used by tests and by callers that need the vault
/// flow without touching the user's git config.
#[derive(Debug, Default)]
pub struct MemoryStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-populated with `(key, value)` pairs.
    pub fn with_entries(entries: &[(&str, &str)]) -> Self {
        let store = Self::new();
        {
            let mut values = store.values.borrow_mut();
            for (k, v) in entries {
                values.insert(k.to_string(), v.to_string());
            }
        }
        store
    }

    /// Copy of all current entries.
    pub fn snapshot(&self) -> BTreeMap<String, String> {
        self.values.borrow().clone()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl ConfigStore for MemoryStore {
    fn get(&self, key: &str) -> Result<Option<String>> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    /// Drops `section` and all of its subsections, as `git config` does
    /// once every `[section "sub"]` has been removed.
    fn remove_section(&self, section: &str) -> Result<()> {
        let prefix = format!("{}.", section);
        self.values
            .borrow_mut()
            .retain(|k, _| !k.starts_with(&prefix));
        Ok(())
    }
}
