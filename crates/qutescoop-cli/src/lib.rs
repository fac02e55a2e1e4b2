//! Command-line front end for QuteScoop's startup sequence.
//!
//! `main.rs` is the composition root: it installs logging, builds the
//! [`CliContext`] through [`bootstrap`], and dispatches to [`handlers`].

#![deny(unsafe_code)]
#![deny(unused_crate_dependencies)]

pub mod bootstrap;
pub mod commands;
pub mod error;
pub mod handlers;
pub mod logging;
pub mod parser;
pub mod utils;

// Re-export primary types for convenient access
pub use bootstrap::{CliConfig, CliContext, bootstrap};
pub use commands::{Commands, SettingsCommand};
pub use error::CliError;
pub use logging::{StartupLog, init_tracing};
pub use parser::Cli;
