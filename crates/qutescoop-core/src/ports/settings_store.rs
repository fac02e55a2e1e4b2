//! Settings store port.
//!
//! Flat string key-value persistence. The resolver only needs one key
//! ([`RESOLVED_DIR_KEY`](crate::settings::RESOLVED_DIR_KEY)), but the store
//! is shared with every other preference of the application.

use crate::settings::SettingsError;

/// Persistent key-value settings.
///
/// # Design Rules
///
/// - Values are plain strings; typed access lives with the callers
/// - `get` reads the backing storage every time, so a value written by `set`
///   is visible immediately
pub trait SettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError>;

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError>;

    /// All entries, sorted by key.
    fn entries(&self) -> Result<Vec<(String, String)>, SettingsError>;
}
