//! Paths command handler.
//!
//! Displays the persisted application data directory and the paths built on
//! it. Reads the cached value only; nothing is resolved again.

use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use anyhow::Result;
use serde::Serialize;

use qutescoop_core::{REQUIRED_SUBDIRS, SettingsStore, resolved_directory};

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::logging::LOG_FILE_NAME;

/// Paths derived from the resolved directory.
#[derive(Debug, Serialize, PartialEq, Eq)]
pub struct DataPaths {
    pub data_dir: String,
    pub log_file: String,
    pub subdirs: BTreeMap<String, String>,
}

impl DataPaths {
    pub fn from_store(store: &dyn SettingsStore) -> Result<Self, CliError> {
        let root = resolved_directory(store)?;
        Ok(Self::under(&root))
    }

    fn under(root: &Path) -> Self {
        Self {
            data_dir: root.display().to_string(),
            log_file: root.join(LOG_FILE_NAME).display().to_string(),
            subdirs: REQUIRED_SUBDIRS
                .iter()
                .map(|name| ((*name).to_string(), root.join(name).display().to_string()))
                .collect(),
        }
    }
}

impl fmt::Display for DataPaths {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "data_dir = {}", self.data_dir)?;
        writeln!(f, "log_file = {}", self.log_file)?;
        for (name, path) in &self.subdirs {
            writeln!(f, "{name} = {path}")?;
        }
        Ok(())
    }
}

/// Execute the paths command.
pub fn execute(ctx: &CliContext, json: bool) -> Result<()> {
    let paths = DataPaths::from_store(&ctx.settings)?;
    if json {
        println!("{}", serde_json::to_string_pretty(&paths)?);
    } else {
        print!("{paths}");
    }
    Ok(())
}
