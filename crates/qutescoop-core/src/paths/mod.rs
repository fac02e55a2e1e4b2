//! Application data directory resolution and migration.
//!
//! On every start the application needs one base directory holding
//! `data`, `downloaded`, `screenshots` and `textures`:
//! - [`CandidateSet`] lists the eligible locations in priority order
//! - [`Capability`] grades each location by its weakest subdirectory
//! - [`migrate`] copies an existing read-only tree into the preferred location
//! - [`DirectoryResolver`] makes the decision and persists it
//!
//! # Design
//!
//! - No interactive or terminal I/O here; prompts go through [`Prompter`](crate::Prompter)
//! - Disk access goes through [`FilesystemProbe`](crate::FilesystemProbe)
//! - OS-specific logic is kept private in `platform`

mod candidates;
mod capability;
mod error;
mod migration;
mod platform;
mod probe;
mod resolver;

#[cfg(test)]
pub(crate) mod test_utils;

// Error type
pub use error::PathError;

// Candidates and capabilities
pub use candidates::{CandidateLocation, CandidateSet, REQUIRED_SUBDIRS};
pub use capability::Capability;
pub use platform::{APPLICATION_NAME, DATA_DIR_ENV, EXTRA_DATA_DIRS_ENV, ORGANIZATION_NAME};

// Filesystem adapter
pub use probe::{LocalFilesystem, WRITE_PROBE_FILE};

// Migration
pub use migration::{MigrationError, MigrationOutcome, MigrationReport, migrate};

// Resolution
pub use resolver::{
    CandidateProbe, DegradedReason, DirectoryResolver, ResolutionSource, ResolvedDirectory,
};
