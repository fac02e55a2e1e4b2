//! Terminal helpers.

pub mod input;
pub mod prompter;

pub use prompter::TerminalPrompter;
