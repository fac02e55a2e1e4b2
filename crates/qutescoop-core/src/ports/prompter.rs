//! User prompt port.
//!
//! The resolver asks for confirmation and reports warnings or errors through
//! this trait. A desktop shell would back it with modal dialogs, the CLI
//! reads from stdin, and tests supply a scripted responder.

/// Blocking user interaction.
///
/// Calls suspend until the operator responds; there is no timeout.
#[cfg_attr(test, mockall::automock)]
pub trait Prompter {
    /// Ask a yes/no question. Returns `true` for yes.
    fn confirm(&self, title: &str, message: &str) -> bool;

    /// Show an informational or warning message.
    fn notify(&self, title: &str, message: &str);

    /// Show an error message.
    fn error(&self, title: &str, message: &str);
}

/// Prompter for unattended runs: declines every question and drops messages.
///
/// Everything shown to the user is also logged by the resolver, so nothing is
/// lost when this is used.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoopPrompter;

impl Prompter for NoopPrompter {
    fn confirm(&self, _title: &str, _message: &str) -> bool {
        false
    }

    fn notify(&self, _title: &str, _message: &str) {}

    fn error(&self, _title: &str, _message: &str) {}
}
