//! Resolve command handler: the startup sequence.

use anyhow::Result;

use qutescoop_core::{CandidateSet, DirectoryResolver, ResolvedDirectory};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::logging::{LOG_FILE_NAME, StartupLog};

/// Resolve the application data directory with the platform candidates,
/// then open the log file inside it.
pub fn execute(ctx: &CliContext, startup_log: &StartupLog) -> Result<()> {
    let candidates = CandidateSet::discover().map_err(CliError::from)?;
    let resolved = run(ctx, candidates, startup_log);
    println!("{}", resolved.path.display());
    Ok(())
}

/// Resolve with an explicit candidate set.
pub fn run(
    ctx: &CliContext,
    candidates: CandidateSet,
    startup_log: &StartupLog,
) -> ResolvedDirectory {
    let resolved =
        DirectoryResolver::new(candidates, &ctx.filesystem, &ctx.settings, &ctx.prompter).resolve();

    let log_path = resolved.path.join(LOG_FILE_NAME);
    if let Err(e) = startup_log.attach(&log_path) {
        eprintln!("Cannot write log file {}: {e}", log_path.display());
    }

    tracing::info!(
        "Expecting application data directory at {} (gets calculated on each start)",
        resolved.path.display()
    );

    if let Some(report) = &resolved.migration {
        tracing::info!(
            copied = report.copied().count(),
            errors = report.error_count(),
            "Data migration attempted"
        );
    }

    resolved
}
