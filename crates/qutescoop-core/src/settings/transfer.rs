//! Export and import of the whole settings store.

use std::path::Path;

use super::error::SettingsError;
use super::file::FileSettingsStore;
use crate::ports::SettingsStore;

/// Copy every entry of `store` into the settings file at `path`.
///
/// Existing entries in the target file are overwritten, others are kept.
/// Returns the number of exported entries.
pub fn export_settings(store: &dyn SettingsStore, path: &Path) -> Result<usize, SettingsError> {
    let target = FileSettingsStore::new(path);
    let entries = store.entries()?;
    for (key, value) in &entries {
        target.set(key, value)?;
    }
    tracing::info!("Exported {} settings to {}", entries.len(), path.display());
    Ok(entries.len())
}

/// Copy every entry of the settings file at `path` into `store`.
///
/// Returns the number of imported entries.
pub fn import_settings(store: &dyn SettingsStore, path: &Path) -> Result<usize, SettingsError> {
    if !path.is_file() {
        return Err(SettingsError::Io {
            path: path.to_path_buf(),
            reason: "file not found".to_string(),
        });
    }

    let source = FileSettingsStore::new(path);
    let entries = source.entries()?;
    for (key, value) in &entries {
        store.set(key, value)?;
    }
    tracing::info!("Imported {} settings from {}", entries.len(), path.display());
    Ok(entries.len())
}
