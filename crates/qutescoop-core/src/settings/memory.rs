//! In-memory settings store for tests and headless embedding.

use std::cell::RefCell;
use std::collections::BTreeMap;

use super::error::{SettingsError, validate_entry};
use crate::ports::SettingsStore;

/// Settings kept in a map for the lifetime of the value.
#[derive(Debug, Default)]
pub struct MemorySettingsStore {
    values: RefCell<BTreeMap<String, String>>,
}

impl MemorySettingsStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored entries.
    pub fn len(&self) -> usize {
        self.values.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.borrow().is_empty()
    }
}

impl SettingsStore for MemorySettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.values.borrow().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        validate_entry(key, value)?;
        self.values
            .borrow_mut()
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn entries(&self) -> Result<Vec<(String, String)>, SettingsError> {
        Ok(self
            .values
            .borrow()
            .iter()
            .map(|(k, v)| (k.clone(), v.clone()))
            .collect())
    }
}
