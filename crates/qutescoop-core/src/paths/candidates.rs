//! Candidate base directories for the application data tree.
//!
//! The list is rebuilt on every start: OS-reported locations can move between
//! installs, so nothing here is persisted.

use std::path::{Path, PathBuf};

use super::error::PathError;
use super::platform::{configured_extra_locations, executable_dir, user_data_location};

/// Subdirectories that must all exist under a candidate for it to qualify.
pub const REQUIRED_SUBDIRS: [&str; 4] = ["data", "downloaded", "screenshots", "textures"];

/// A base directory eligible to host the application data tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateLocation {
    pub path: PathBuf,
    /// 0 is the most preferred location.
    pub priority: usize,
}

impl CandidateLocation {
    pub fn subdir(&self, name: &str) -> PathBuf {
        self.path.join(name)
    }
}

/// Ordered candidate locations plus the unconditional fallback directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateSet {
    candidates: Vec<CandidateLocation>,
    fallback: PathBuf,
}

impl CandidateSet {
    /// Build a candidate set from paths listed in priority order.
    ///
    /// Priorities are assigned from position. Repeated paths keep only their
    /// first (higher-priority) occurrence.
    pub fn new<I, P>(paths: I, fallback: impl Into<PathBuf>) -> Result<Self, PathError>
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        let mut unique: Vec<PathBuf> = Vec::new();
        for path in paths {
            let path = path.into();
            if !unique.contains(&path) {
                unique.push(path);
            }
        }

        if unique.is_empty() {
            return Err(PathError::NoCandidates);
        }

        let candidates = unique
            .into_iter()
            .enumerate()
            .map(|(priority, path)| CandidateLocation { path, priority })
            .collect();

        Ok(Self {
            candidates,
            fallback: fallback.into(),
        })
    }

    /// Discover the candidates for the current platform and installation.
    ///
    /// Order:
    /// 1. OS user-data location (or `QUTESCOOP_DATA_DIR`)
    /// 2. Directory of the running executable
    /// 3. Entries of `QUTESCOOP_EXTRA_DATA_DIRS`
    ///
    /// The executable directory doubles as the hard fallback.
    pub fn discover() -> Result<Self, PathError> {
        let exe_dir = executable_dir()?;

        let mut paths = Vec::new();
        match user_data_location() {
            Some(path) => paths.push(path),
            None => tracing::warn!("No OS user-data directory available; skipping that candidate"),
        }
        paths.push(exe_dir.clone());
        paths.extend(configured_extra_locations());

        let set = Self::new(paths, exe_dir)?;
        tracing::debug!(
            candidates = ?set.candidates.iter().map(|c| &c.path).collect::<Vec<_>>(),
            "Discovered candidate data directories"
        );
        Ok(set)
    }

    pub fn candidates(&self) -> &[CandidateLocation] {
        &self.candidates
    }

    /// The most preferred candidate.
    pub fn preferred(&self) -> &CandidateLocation {
        // `new` rejects empty lists.
        &self.candidates[0]
    }

    /// Directory used when no candidate holds any data.
    pub fn fallback(&self) -> &Path {
        &self.fallback
    }
}
