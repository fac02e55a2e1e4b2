//! Application data directory resolution.
//!
//! Picks one base directory among the candidates on every start:
//! 1. The first fully writable candidate, in priority order
//! 2. Otherwise the first candidate holding the data read-only, offering to
//!    migrate its data into the preferred location
//! 3. Otherwise the executable directory, with a critical diagnostic
//!
//! The choice is persisted under [`RESOLVED_DIR_KEY`] before returning. Later
//! path lookups read that cached value instead of resolving again.

use std::fmt;
use std::path::PathBuf;

use super::candidates::{CandidateLocation, CandidateSet, REQUIRED_SUBDIRS};
use super::capability::Capability;
use super::migration::{MigrationReport, migrate};
use crate::ports::{FilesystemProbe, Prompter, SettingsStore};
use crate::settings::RESOLVED_DIR_KEY;

/// Why a read-only candidate was kept instead of migrating.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DegradedReason {
    /// The degraded candidate already is the preferred location.
    PreferredIsDegraded,
    /// The preferred location neither exists nor could be created.
    PreferredUnavailable,
    /// The user declined the migration.
    Declined,
    /// The migration ran but some steps failed.
    MigrationFailed,
}

/// How the resolved directory was chosen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionSource {
    /// A fully writable candidate.
    Writable { priority: usize },
    /// Data was migrated from `from` into the preferred location.
    Migrated { from: PathBuf },
    /// A read-only candidate; downloads, logs and screenshots will not work.
    Degraded {
        priority: usize,
        reason: DegradedReason,
    },
    /// No candidate held the data; the executable directory is used.
    Fallback,
}

impl fmt::Display for ResolutionSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Writable { priority } => write!(f, "writable candidate #{priority}"),
            Self::Migrated { from } => write!(f, "migrated from {}", from.display()),
            Self::Degraded { priority, reason } => {
                write!(f, "read-only candidate #{priority} ({reason:?})")
            }
            Self::Fallback => f.write_str("fallback to executable directory"),
        }
    }
}

/// The single base directory chosen for this process.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDirectory {
    pub path: PathBuf,
    pub source: ResolutionSource,
    /// Present when a migration was attempted.
    pub migration: Option<MigrationReport>,
}

/// Capabilities measured for one candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CandidateProbe {
    pub candidate: CandidateLocation,
    /// Minimum over `subdirs`.
    pub capability: Capability,
    pub subdirs: Vec<(String, Capability)>,
}

/// Resolves the application data directory.
///
/// Collaborators are borrowed for the duration of the resolution; the caller
/// owns them and keeps using the settings store afterwards.
pub struct DirectoryResolver<'a> {
    candidates: CandidateSet,
    subdirs: Vec<String>,
    probe: &'a dyn FilesystemProbe,
    settings: &'a dyn SettingsStore,
    prompter: &'a dyn Prompter,
}

impl<'a> DirectoryResolver<'a> {
    pub fn new(
        candidates: CandidateSet,
        probe: &'a dyn FilesystemProbe,
        settings: &'a dyn SettingsStore,
        prompter: &'a dyn Prompter,
    ) -> Self {
        Self {
            candidates,
            subdirs: REQUIRED_SUBDIRS.iter().map(ToString::to_string).collect(),
            probe,
            settings,
            prompter,
        }
    }

    /// Replace the required subdirectory names.
    #[must_use]
    pub fn with_required_subdirs<I, S>(mut self, subdirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.subdirs = subdirs.into_iter().map(Into::into).collect();
        self
    }

    fn probe_candidate(&self, candidate: &CandidateLocation) -> CandidateProbe {
        let subdirs: Vec<(String, Capability)> = self
            .subdirs
            .iter()
            .map(|name| (name.clone(), self.probe.test_writable(&candidate.subdir(name))))
            .collect();
        let capability = Capability::combine_all(subdirs.iter().map(|(_, cap)| *cap));
        tracing::debug!(
            "{} has capability {capability} (priority {})",
            candidate.path.display(),
            candidate.priority
        );
        CandidateProbe {
            candidate: candidate.clone(),
            capability,
            subdirs,
        }
    }

    /// Probe every required subdirectory of every candidate.
    pub fn probe_candidates(&self) -> Vec<CandidateProbe> {
        self.candidates
            .candidates()
            .iter()
            .map(|candidate| self.probe_candidate(candidate))
            .collect()
    }

    /// Choose, persist and return the application data directory.
    ///
    /// Candidates are probed in priority order and probing stops at the first
    /// writable one. Never fails: when nothing usable is found the executable
    /// directory is returned and the problem is reported to the user.
    pub fn resolve(&self) -> ResolvedDirectory {
        let mut probed = Vec::with_capacity(self.candidates.candidates().len());
        let mut writable = None;
        for candidate in self.candidates.candidates() {
            let probe = self.probe_candidate(candidate);
            if probe.capability.is_writable() {
                writable = Some(probe);
                break;
            }
            probed.push(probe);
        }

        let resolved = if let Some(hit) = writable {
            ResolvedDirectory {
                path: hit.candidate.path,
                source: ResolutionSource::Writable {
                    priority: hit.candidate.priority,
                },
                migration: None,
            }
        } else if let Some(hit) = probed.iter().find(|p| p.capability.is_usable()) {
            self.resolve_degraded(&hit.candidate)
        } else {
            self.resolve_fallback()
        };

        tracing::info!(
            "Using application data directory {} ({})",
            resolved.path.display(),
            resolved.source
        );
        self.persist(&resolved);
        resolved
    }

    fn subdir_list(&self) -> String {
        self.subdirs.join("', '")
    }

    fn resolve_degraded(&self, degraded: &CandidateLocation) -> ResolvedDirectory {
        let preferred = self.candidates.preferred();

        let warning = format!(
            "The directories '{}' were found at '{}' but are read-only. This means that neither \
             automatic sectorfile download nor saving logs, screenshots or downloaded Whazzups \
             will work.\nPreferably, data should be at '{}' and this location should be writable.",
            self.subdir_list(),
            degraded.path.display(),
            preferred.path.display()
        );
        tracing::warn!("{warning}");
        self.prompter.notify("Warning", &warning);

        let keep = |reason| ResolvedDirectory {
            path: degraded.path.clone(),
            source: ResolutionSource::Degraded {
                priority: degraded.priority,
                reason,
            },
            migration: None,
        };

        if degraded.priority == preferred.priority {
            return keep(DegradedReason::PreferredIsDegraded);
        }

        if !self.probe.exists(&preferred.path) {
            if let Err(e) = self.probe.make_dir_path(&preferred.path) {
                tracing::warn!(
                    "Preferred data directory {} cannot be created: {e}",
                    preferred.path.display()
                );
                return keep(DegradedReason::PreferredUnavailable);
            }
        }

        let question = format!(
            "The preferred data directory '{}' exists or could be created.\nDo you want \
             QuteScoop to install its data files there [recommended]?",
            preferred.path.display()
        );
        if !self.prompter.confirm("Install data files?", &question) {
            tracing::info!("User declined migrating data to {}", preferred.path.display());
            return keep(DegradedReason::Declined);
        }

        let report = migrate(
            self.probe,
            self.prompter,
            &degraded.path,
            &preferred.path,
            self.subdirs.as_slice(),
        );

        if report.has_errors() {
            self.prompter.error(
                "Error",
                &format!(
                    "The following errors occurred during copy:\n{}\nWhen in doubt if important \
                     files were left out, delete the new data directory and let QuteScoop copy \
                     the files again.",
                    report.summary()
                ),
            );
            let mut resolved = keep(DegradedReason::MigrationFailed);
            resolved.migration = Some(report);
            return resolved;
        }

        self.prompter.notify(
            "Success",
            &format!(
                "Data files installed. QuteScoop will now use '{}' as data directory.",
                preferred.path.display()
            ),
        );
        ResolvedDirectory {
            path: preferred.path.clone(),
            source: ResolutionSource::Migrated {
                from: degraded.path.clone(),
            },
            migration: Some(report),
        }
    }

    fn resolve_fallback(&self) -> ResolvedDirectory {
        let preferred = self.candidates.preferred();
        let others: Vec<String> = self
            .candidates
            .candidates()
            .iter()
            .skip(1)
            .map(|c| c.path.display().to_string())
            .collect();

        let critical = format!(
            "No complete data directory, neither read- nor writable, was found. QuteScoop might \
             be behaving unexpectedly.\nPreferably, '{}' should have the subdirectories '{}' and \
             these locations should be writable.\nQuteScoop will look for the data files in the \
             following locations, too:\n'{}'",
            preferred.path.display(),
            self.subdir_list(),
            others.join("',\n'")
        );
        tracing::error!("{critical}");
        self.prompter.error("Critical", &critical);

        ResolvedDirectory {
            path: self.candidates.fallback().to_path_buf(),
            source: ResolutionSource::Fallback,
            migration: None,
        }
    }

    fn persist(&self, resolved: &ResolvedDirectory) {
        let value = resolved.path.to_string_lossy();
        if resolved.path.to_str().is_none() {
            tracing::warn!(
                "Application data directory {} is not valid UTF-8; it is saved as '{value}'",
                resolved.path.display()
            );
        }
        if let Err(e) = self.settings.set(RESOLVED_DIR_KEY, &value) {
            tracing::error!("Failed to persist application data directory: {e}");
            self.prompter.error(
                "Error",
                &format!("Could not save the application data directory '{value}': {e}"),
            );
        }
    }
}
