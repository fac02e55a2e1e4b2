//! [`Prompter`] for the terminal.

use qutescoop_core::Prompter;

use super::input::prompt_confirmation;

/// Shows messages on stderr and asks questions on stdin.
///
/// With a scripted answer (`--yes` / `--no`) questions are printed but not
/// asked, so the startup can run unattended.
#[derive(Debug, Default, Clone, Copy)]
pub struct TerminalPrompter {
    scripted_answer: Option<bool>,
}

impl TerminalPrompter {
    pub const fn new(scripted_answer: Option<bool>) -> Self {
        Self { scripted_answer }
    }
}

impl Prompter for TerminalPrompter {
    fn confirm(&self, title: &str, message: &str) -> bool {
        eprintln!("== {title} ==\n{message}");

        if let Some(answer) = self.scripted_answer {
            eprintln!("-> {}", if answer { "yes" } else { "no" });
            return answer;
        }

        prompt_confirmation("Proceed?", true).unwrap_or_else(|e| {
            tracing::warn!("Could not read answer, assuming no: {e:#}");
            false
        })
    }

    fn notify(&self, title: &str, message: &str) {
        eprintln!("== {title} ==\n{message}");
    }

    fn error(&self, title: &str, message: &str) {
        eprintln!("!! {title} !!\n{message}");
    }
}
