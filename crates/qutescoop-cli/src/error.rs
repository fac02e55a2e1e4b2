//! CLI-specific error types and mappings.
//!
//! This module provides the error type for the CLI adapter and mappings
//! from core errors to exit codes and user-facing messages.

use qutescoop_core::{PathError, SettingsError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Candidate discovery failed.
    #[error("Path error: {0}")]
    Path(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow sysexits.h where a category fits.
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Path(_) => 1,
            Self::Io(_) => 74,     // EX_IOERR
            Self::Config(_) => 78, // EX_CONFIG
        }
    }
}

impl From<PathError> for CliError {
    fn from(err: PathError) -> Self {
        Self::Path(err.to_string())
    }
}

impl From<SettingsError> for CliError {
    fn from(err: SettingsError) -> Self {
        match err {
            SettingsError::Io { .. } => Self::Io(err.to_string()),
            SettingsError::NotResolved => Self::Config(format!(
                "{err}; run `qutescoop resolve` first"
            )),
            _ => Self::Config(err.to_string()),
        }
    }
}
