//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces the resolver expects from infrastructure.
//! They contain no UI toolkit types.
//!
//! # Design Rules
//!
//! - Collaborators are injected by reference, never reached through globals
//! - Filesystem operations return `io::Result` so callers can record the reason
//! - User interaction is synchronous and blocking

pub mod filesystem;
pub mod prompter;
pub mod settings_store;

pub use filesystem::FilesystemProbe;
pub use prompter::{NoopPrompter, Prompter};
pub use settings_store::SettingsStore;
