//! CLI entry point - the composition root.
//!
//! This is the ONLY place where infrastructure is wired together via bootstrap.
//! Command dispatch routes to handlers.

use std::process::ExitCode;

use clap::Parser;

use qutescoop_cli::{
    Cli, CliConfig, CliError, Commands, StartupLog, bootstrap, handlers, init_tracing,
};

fn run(cli: Cli, startup_log: &StartupLog) -> anyhow::Result<()> {
    let config = CliConfig {
        settings_path: cli.settings.clone(),
        scripted_answer: cli.scripted_answer(),
    };
    let ctx = bootstrap(config)?;

    let command = cli.command.unwrap_or(Commands::Resolve);
    if !matches!(command, Commands::Resolve) {
        // Only the startup resolution owns log.txt.
        startup_log.disable();
    }

    match command {
        Commands::Resolve => handlers::resolve::execute(&ctx, startup_log),
        Commands::Probe { json } => handlers::probe::execute(&ctx, json),
        Commands::Paths { json } => handlers::paths::execute(&ctx, json),
        Commands::Settings { command } => handlers::settings::execute(&ctx, &command),
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Initialize logging
    let startup_log = init_tracing(cli.verbose);
    tracing::debug!("qutescoop {}", env!("CARGO_PKG_VERSION"));

    match run(cli, &startup_log) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            let code = err.downcast_ref::<CliError>().map_or(1, CliError::exit_code);
            ExitCode::from(code)
        }
    }
}
