//! Platform-specific path detection.
//!
//! Private helpers for locating the OS user-data directory and the directory
//! of the running executable. Public API is exposed through
//! [`CandidateSet::discover`](super::CandidateSet::discover).

use std::env;
use std::path::PathBuf;

use super::error::PathError;

/// Organisation and application name, in the order they nest under the OS
/// data directory.
pub const ORGANIZATION_NAME: &str = "QuteScoop";
pub const APPLICATION_NAME: &str = "QuteScoop";

/// Overrides the OS user-data location (still priority 0).
pub const DATA_DIR_ENV: &str = "QUTESCOOP_DATA_DIR";

/// Additional candidate locations, appended after the executable directory.
pub const EXTRA_DATA_DIRS_ENV: &str = "QUTESCOOP_EXTRA_DATA_DIRS";

/// Get the preferred location for application data.
///
/// Resolution order:
/// 1. `QUTESCOOP_DATA_DIR` environment variable
/// 2. System data directory (e.g. `~/.local/share/QuteScoop/QuteScoop`)
///
/// Returns `None` when neither is available. Unlike the executable directory
/// this is not fatal; the candidate is simply left out.
pub(super) fn user_data_location() -> Option<PathBuf> {
    if let Ok(raw) = env::var(DATA_DIR_ENV) {
        if !raw.trim().is_empty() {
            match normalize_user_path(&raw) {
                Ok(path) => return Some(path),
                Err(e) => tracing::warn!("Ignoring {DATA_DIR_ENV}={raw:?}: {e}"),
            }
        }
    }

    dirs::data_local_dir().map(|dir| dir.join(ORGANIZATION_NAME).join(APPLICATION_NAME))
}

/// Directory containing the running executable.
pub(super) fn executable_dir() -> Result<PathBuf, PathError> {
    let exe = env::current_exe().map_err(|e| PathError::NoExecutableDir(e.to_string()))?;
    exe.parent()
        .map(std::path::Path::to_path_buf)
        .ok_or_else(|| PathError::NoExecutableDir(format!("{} has no parent", exe.display())))
}

/// Extra candidates configured through `QUTESCOOP_EXTRA_DATA_DIRS`.
///
/// Uses the platform's path-list syntax (`:` on Unix, `;` on Windows).
/// Entries that cannot be normalised are skipped with a warning.
pub(super) fn configured_extra_locations() -> Vec<PathBuf> {
    let Some(raw) = env::var_os(EXTRA_DATA_DIRS_ENV) else {
        return Vec::new();
    };

    env::split_paths(&raw)
        .filter_map(|entry| {
            let entry = entry.to_string_lossy().into_owned();
            if entry.trim().is_empty() {
                return None;
            }
            match normalize_user_path(&entry) {
                Ok(path) => Some(path),
                Err(e) => {
                    tracing::warn!("Ignoring extra data directory {entry:?}: {e}");
                    None
                }
            }
        })
        .collect()
}

/// Normalize a user-provided path, expanding `~` and making it absolute.
pub(crate) fn normalize_user_path(raw: &str) -> Result<PathBuf, PathError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(PathError::EmptyPath);
    }

    let expanded = if trimmed.starts_with("~/") || trimmed == "~" {
        let home = dirs::home_dir().ok_or(PathError::NoHomeDir)?;
        if trimmed == "~" {
            home
        } else {
            home.join(trimmed.trim_start_matches("~/"))
        }
    } else {
        PathBuf::from(trimmed)
    };

    if expanded.is_absolute() {
        Ok(expanded)
    } else {
        env::current_dir()
            .map(|cwd| cwd.join(expanded))
            .map_err(|e| PathError::CurrentDirError(e.to_string()))
    }
}
