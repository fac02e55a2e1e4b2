//! Settings command handlers.

use std::path::Path;

use anyhow::Result;

use qutescoop_core::{SettingsStore, export_settings, import_settings};

use crate::bootstrap::CliContext;
use crate::commands::SettingsCommand;
use crate::error::CliError;

pub fn execute(ctx: &CliContext, command: &SettingsCommand) -> Result<()> {
    match command {
        SettingsCommand::Show => show(&ctx.settings),
        SettingsCommand::Export { file } => export(&ctx.settings, file),
        SettingsCommand::Import { file } => import(&ctx.settings, file),
    }
}

fn show(store: &dyn SettingsStore) -> Result<()> {
    let entries = store.entries().map_err(CliError::from)?;
    if entries.is_empty() {
        println!("No settings stored.");
    }
    for (key, value) in entries {
        println!("{key} = {value}");
    }
    Ok(())
}

fn export(store: &dyn SettingsStore, file: &Path) -> Result<()> {
    let count = export_settings(store, file).map_err(CliError::from)?;
    println!("Exported {count} settings to {}", file.display());
    Ok(())
}

fn import(store: &dyn SettingsStore, file: &Path) -> Result<()> {
    let count = import_settings(store, file).map_err(CliError::from)?;
    println!("Imported {count} settings from {}", file.display());
    Ok(())
}
