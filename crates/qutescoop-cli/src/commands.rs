//! Subcommand definitions.

use std::path::PathBuf;

use clap::Subcommand;

/// Top-level commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Resolve the application data directory (default), migrating data if needed
    Resolve,
    /// Show the capability of every candidate location without deciding anything
    Probe {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the persisted application data directory and its subdirectories
    Paths {
        /// Print JSON instead of `key = value` lines
        #[arg(long)]
        json: bool,
    },
    /// Export, import or show stored settings
    Settings {
        #[command(subcommand)]
        command: SettingsCommand,
    },
}

/// Settings command variants.
#[derive(Subcommand)]
pub enum SettingsCommand {
    /// Show all stored settings
    Show,
    /// Write all settings to another file
    Export {
        /// Target file (entries already in it are kept unless overwritten)
        file: PathBuf,
    },
    /// Read all settings from another file
    Import {
        /// Source file in `key=value` format
        file: PathBuf,
    },
}
