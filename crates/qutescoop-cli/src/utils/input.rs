//! User input utilities for interactive command-line prompts.

use std::io::{self, BufRead};

use anyhow::{Context, Result};

/// Interpret a yes/no answer. Empty input picks `default`.
///
/// Returns `None` for anything that is not a recognised answer.
pub fn parse_confirmation(input: &str, default: bool) -> Option<bool> {
    match input.trim().to_lowercase().as_str() {
        "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        "" => Some(default),
        _ => None,
    }
}

/// Prompts the user for a yes/no confirmation on stderr, reading from `reader`.
///
/// Accepts 'y', 'yes', 'n', 'no' (case insensitive). Empty input and end of
/// input select `default`.
pub fn prompt_confirmation_from<R: BufRead>(
    reader: &mut R,
    prompt: &str,
    default: bool,
) -> Result<bool> {
    let hint = if default { "(Y/n)" } else { "(y/N)" };
    loop {
        eprint!("{prompt} {hint}: ");

        let mut input = String::new();
        let read = reader
            .read_line(&mut input)
            .context("Failed to read user input")?;
        if read == 0 {
            eprintln!();
            return Ok(default);
        }

        if let Some(answer) = parse_confirmation(&input, default) {
            return Ok(answer);
        }
        eprintln!("Please enter 'y' for yes or 'n' for no.");
    }
}

/// Prompts the user for a yes/no confirmation on stdin.
pub fn prompt_confirmation(prompt: &str, default: bool) -> Result<bool> {
    prompt_confirmation_from(&mut io::stdin().lock(), prompt, default)
}
