//! Best-effort copy of the data tree from one location into another.
//!
//! Nothing here aborts early: every failure is recorded in the
//! [`MigrationReport`] and the remaining subdirectories and files are still
//! processed. The source is never modified.

use std::fmt::Write as _;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::ports::{FilesystemProbe, Prompter};

/// A single failed migration step.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum MigrationError {
    /// The destination subdirectory could not be created; its files were skipped.
    #[error("Error creating directory '{}': {reason}", path.display())]
    CreateDirectory { path: PathBuf, reason: String },

    /// The source subdirectory could not be listed; its files were skipped.
    #[error("Error listing directory '{}': {reason}", path.display())]
    ListDirectory { path: PathBuf, reason: String },

    /// A stale destination file could not be removed; the file was skipped.
    #[error(
        "Error removing existing file '{}': {reason}. Please consider removing it by hand.",
        path.display()
    )]
    RemoveExisting { path: PathBuf, reason: String },

    #[error("Error copying file '{}' to '{}': {reason}", from.display(), to.display())]
    Copy {
        from: PathBuf,
        to: PathBuf,
        reason: String,
    },
}

/// Result of one migration step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MigrationOutcome {
    Copied,
    Failed(MigrationError),
}

/// Per-path outcome of a migration, in the order the steps ran.
///
/// Keys are destination paths: a file for copy and remove steps, a directory
/// for create and list steps.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MigrationReport {
    entries: Vec<(PathBuf, MigrationOutcome)>,
}

impl MigrationReport {
    pub fn new() -> Self {
        Self::default()
    }

    fn record(&mut self, path: PathBuf, outcome: MigrationOutcome) {
        self.entries.push((path, outcome));
    }

    fn fail(&mut self, path: PathBuf, error: MigrationError) {
        tracing::warn!("{error}");
        self.record(path, MigrationOutcome::Failed(error));
    }

    pub fn errors(&self) -> impl Iterator<Item = &MigrationError> {
        self.entries.iter().filter_map(|(_, outcome)| match outcome {
            MigrationOutcome::Failed(err) => Some(err),
            MigrationOutcome::Copied => None,
        })
    }

    /// Destination paths of the files copied successfully.
    pub fn copied(&self) -> impl Iterator<Item = &Path> {
        self.entries
            .iter()
            .filter(|(_, outcome)| matches!(outcome, MigrationOutcome::Copied))
            .map(|(path, _)| path.as_path())
    }

    pub fn has_errors(&self) -> bool {
        self.errors().next().is_some()
    }

    pub fn error_count(&self) -> usize {
        self.errors().count()
    }

    /// All error messages, one per line.
    pub fn summary(&self) -> String {
        let mut out = String::new();
        for err in self.errors() {
            let _ = writeln!(out, "{err}");
        }
        out
    }
}

/// Copy every file of `source/<subdir>` into `destination/<subdir>`.
///
/// For each subdirectory the destination directory is created if missing.
/// Files already present at the destination are removed first and copied
/// again, so running the migration twice gives the same result. The user is
/// told which files are about to be copied for each subdirectory.
pub fn migrate<S: AsRef<str>>(
    probe: &dyn FilesystemProbe,
    prompter: &dyn Prompter,
    source: &Path,
    destination: &Path,
    subdirs: &[S],
) -> MigrationReport {
    let mut report = MigrationReport::new();

    for subdir in subdirs {
        let subdir = subdir.as_ref();
        let source_dir = source.join(subdir);
        let dest_dir = destination.join(subdir);

        if !probe.exists(&dest_dir) {
            if let Err(e) = probe.make_dir_path(&dest_dir) {
                report.fail(
                    dest_dir.clone(),
                    MigrationError::CreateDirectory {
                        path: dest_dir,
                        reason: e.to_string(),
                    },
                );
                continue;
            }
        }

        let file_names = match probe.list_files(&source_dir) {
            Ok(names) => names,
            Err(e) => {
                report.fail(
                    dest_dir,
                    MigrationError::ListDirectory {
                        path: source_dir,
                        reason: e.to_string(),
                    },
                );
                continue;
            }
        };

        if file_names.is_empty() {
            tracing::debug!("Nothing to copy from {}", source_dir.display());
            continue;
        }

        prompter.notify(
            "Copying",
            &format!(
                "Now copying files\n'{}'\nto directory '{}'",
                file_names.join("',\n'"),
                dest_dir.display()
            ),
        );

        for name in &file_names {
            let from = source_dir.join(name);
            let to = dest_dir.join(name);

            if probe.exists(&to) {
                if let Err(e) = probe.remove_file(&to) {
                    report.fail(
                        to.clone(),
                        MigrationError::RemoveExisting {
                            path: to,
                            reason: e.to_string(),
                        },
                    );
                    continue;
                }
            }

            match probe.copy_file(&from, &to) {
                Ok(()) => {
                    tracing::debug!("Copied {} to {}", from.display(), to.display());
                    report.record(to, MigrationOutcome::Copied);
                }
                Err(e) => report.fail(
                    to.clone(),
                    MigrationError::Copy {
                        from,
                        to,
                        reason: e.to_string(),
                    },
                ),
            }
        }
    }

    tracing::info!(
        copied = report.copied().count(),
        errors = report.error_count(),
        "Migration from {} to {} finished",
        source.display(),
        destination.display()
    );
    report
}
