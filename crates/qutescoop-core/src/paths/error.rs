//! Path-related error types.
//!
//! Only candidate discovery can fail hard. Resolution itself never returns an
//! error, and migration failures are collected in a report instead (see
//! [`MigrationError`](super::MigrationError)).

use thiserror::Error;

/// Errors that can occur while building the candidate list.
#[derive(Debug, Error)]
pub enum PathError {
    /// Could not determine the user's home directory.
    #[error("Cannot determine home directory")]
    NoHomeDir,

    /// Could not determine the directory holding the running executable.
    #[error("Cannot determine executable directory: {0}")]
    NoExecutableDir(String),

    /// An empty path was provided.
    #[error("Path cannot be empty")]
    EmptyPath,

    /// Failed to get the current working directory.
    #[error("Cannot determine current directory: {0}")]
    CurrentDirError(String),

    /// The candidate list ended up empty.
    #[error("No candidate data directories")]
    NoCandidates,
}
