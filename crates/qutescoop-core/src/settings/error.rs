//! Settings store error types.

use std::path::PathBuf;
use thiserror::Error;

/// Errors raised by [`SettingsStore`](crate::ports::SettingsStore)
/// implementations and the helpers built on them.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// Could not determine the system configuration directory.
    #[error("Cannot determine system configuration directory")]
    NoConfigDir,

    /// Failed to read or write a settings file.
    #[error("Failed to access settings file {path}: {reason}")]
    Io { path: PathBuf, reason: String },

    /// A line in a settings file is not a `key=value` pair.
    #[error("{path}:{line_number}: expected key=value, found {line:?}")]
    Parse {
        path: PathBuf,
        line_number: usize,
        line: String,
    },

    /// Keys must be non-empty and must not contain `=` or line breaks.
    #[error("Invalid settings key {0:?}")]
    InvalidKey(String),

    /// Values must fit on a single line.
    #[error("Invalid value for settings key {key}: line breaks are not allowed")]
    InvalidValue { key: String },

    /// The application data directory has not been resolved yet.
    #[error("Application data directory has not been resolved")]
    NotResolved,
}

pub(super) fn validate_entry(key: &str, value: &str) -> Result<(), SettingsError> {
    if key.trim().is_empty() || key.contains(['=', '\n', '\r']) {
        return Err(SettingsError::InvalidKey(key.to_string()));
    }
    if value.contains(['\n', '\r']) {
        return Err(SettingsError::InvalidValue {
            key: key.to_string(),
        });
    }
    Ok(())
}
