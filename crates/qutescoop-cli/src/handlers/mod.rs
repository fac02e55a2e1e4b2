//! Command handlers.
//!
//! Each handler takes the [`CliContext`](crate::CliContext) built by
//! bootstrap and returns `anyhow::Result`.

pub mod paths;
pub mod probe;
pub mod resolve;
pub mod settings;
