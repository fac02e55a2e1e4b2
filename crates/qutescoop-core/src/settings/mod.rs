//! Persistent settings.
//!
//! The application keeps every preference in one flat string store. This
//! module provides the stores and the helpers other subsystems use to build
//! paths under the resolved data directory.

mod error;
mod file;
mod memory;
mod transfer;

use std::path::PathBuf;

use crate::ports::SettingsStore;

pub use error::SettingsError;
pub use file::{FileSettingsStore, SETTINGS_FILE_ENV};
pub use memory::MemorySettingsStore;
pub use transfer::{export_settings, import_settings};

/// Key holding the absolute path of the resolved application data directory.
pub const RESOLVED_DIR_KEY: &str = "general/calculatedApplicationDataDirectory";

/// The resolved application data directory, as cached in the store.
pub fn resolved_directory(store: &dyn SettingsStore) -> Result<PathBuf, SettingsError> {
    match store.get(RESOLVED_DIR_KEY)? {
        Some(value) if !value.is_empty() => Ok(PathBuf::from(value)),
        _ => Err(SettingsError::NotResolved),
    }
}

/// Compose `<resolvedDir>/<relative>`.
///
/// Reads the cached value on every call; it never triggers a new resolution.
///
/// ```
/// use qutescoop_core::{MemorySettingsStore, RESOLVED_DIR_KEY, SettingsStore, application_data_path};
///
/// let store = MemorySettingsStore::new();
/// store.set(RESOLVED_DIR_KEY, "/srv/qutescoop").unwrap();
/// let log = application_data_path(&store, "log.txt").unwrap();
/// assert_eq!(log, std::path::PathBuf::from("/srv/qutescoop/log.txt"));
/// ```
pub fn application_data_path(
    store: &dyn SettingsStore,
    relative: &str,
) -> Result<PathBuf, SettingsError> {
    Ok(resolved_directory(store)?.join(relative))
}
