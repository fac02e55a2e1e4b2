//! Composition root for the CLI.
//!
//! Builds the collaborators the resolver and the handlers share. They are
//! constructed once per process and passed down by reference.

use std::path::PathBuf;

use qutescoop_core::{FileSettingsStore, LocalFilesystem};

use crate::error::CliError;
use crate::utils::TerminalPrompter;

/// Inputs for [`bootstrap`], taken from the command line.
#[derive(Debug, Clone, Default)]
pub struct CliConfig {
    /// Explicit settings file; the platform default is used otherwise.
    pub settings_path: Option<PathBuf>,
    /// Answer to confirmations given up front.
    pub scripted_answer: Option<bool>,
}

/// Everything a handler needs.
#[derive(Debug)]
pub struct CliContext {
    pub settings: FileSettingsStore,
    pub filesystem: LocalFilesystem,
    pub prompter: TerminalPrompter,
}

/// Wire the CLI's collaborators together.
pub fn bootstrap(config: CliConfig) -> Result<CliContext, CliError> {
    let settings = match config.settings_path {
        Some(path) => FileSettingsStore::new(path),
        None => FileSettingsStore::open_default()?,
    };
    tracing::debug!("Expecting settings at {}", settings.path().display());

    Ok(CliContext {
        settings,
        filesystem: LocalFilesystem::new(),
        prompter: TerminalPrompter::new(config.scripted_answer),
    })
}
