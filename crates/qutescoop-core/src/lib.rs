//! Core of the QuteScoop startup sequence: finding, validating, and if needed
//! migrating the application data directory.
//!
//! The crate is split into:
//! - [`paths`]: candidate discovery, capability probing, migration and the
//!   [`DirectoryResolver`] that ties them together
//! - [`ports`]: the trait seams for user interaction and filesystem access
//! - [`settings`]: the persistent key-value store holding the resolved path
//!
//! Nothing in here talks to a UI toolkit. Adapters (the CLI, tests) inject a
//! [`Prompter`] and a [`SettingsStore`].

#![deny(unused_crate_dependencies)]

pub mod paths;
pub mod ports;
pub mod settings;

pub use paths::{
    CandidateLocation, CandidateProbe, CandidateSet, Capability, DegradedReason,
    DirectoryResolver, LocalFilesystem, MigrationError, MigrationOutcome, MigrationReport,
    PathError, REQUIRED_SUBDIRS, ResolutionSource, ResolvedDirectory, migrate,
};
pub use ports::{FilesystemProbe, NoopPrompter, Prompter, SettingsStore};
pub use settings::{
    FileSettingsStore, MemorySettingsStore, RESOLVED_DIR_KEY, SettingsError,
    application_data_path, export_settings, import_settings, resolved_directory,
};
