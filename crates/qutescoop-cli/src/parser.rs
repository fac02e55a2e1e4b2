//! Main CLI parser and top-level argument handling.
//!
//! This module defines the root CLI structure with global options.

use std::path::PathBuf;

use clap::{ArgAction, Parser};

use crate::commands::Commands;

/// Command-line interface for locating QuteScoop's application data directory.
///
/// Running without a subcommand performs the startup resolution.
#[derive(Parser)]
#[command(name = "qutescoop")]
#[command(about = "Resolve and inspect QuteScoop's application data directory")]
#[command(version)]
pub struct Cli {
    /// Settings file to read and persist the resolved directory to
    #[arg(long, global = true, env = "QUTESCOOP_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Answer yes to the data migration question
    #[arg(long, global = true, action = ArgAction::SetTrue, conflicts_with = "no")]
    pub yes: bool,

    /// Answer no to the data migration question
    #[arg(long, global = true, action = ArgAction::SetTrue)]
    pub no: bool,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

impl Cli {
    /// Scripted answer to confirmations, if one was given on the command line.
    pub const fn scripted_answer(&self) -> Option<bool> {
        if self.yes {
            Some(true)
        } else if self.no {
            Some(false)
        } else {
            None
        }
    }
}
