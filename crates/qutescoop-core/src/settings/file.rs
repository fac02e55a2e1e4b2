//! File-backed settings store.
//!
//! Settings live in a plain `key=value` text file. Updates rewrite the file
//! in place: the line of an existing key is replaced, new keys are appended,
//! and unrelated lines and comments are kept untouched. Keys are trimmed;
//! values are kept byte for byte as written after the first `=`.

use std::collections::BTreeMap;
use std::env;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::error::{SettingsError, validate_entry};
use crate::paths::{APPLICATION_NAME, ORGANIZATION_NAME};
use crate::ports::SettingsStore;

/// Overrides the default settings file location.
pub const SETTINGS_FILE_ENV: &str = "QUTESCOOP_SETTINGS";

/// Settings persisted to a `key=value` file.
#[derive(Debug, Clone)]
pub struct FileSettingsStore {
    path: PathBuf,
}

impl FileSettingsStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Store at the default location.
    ///
    /// Resolution order:
    /// 1. `QUTESCOOP_SETTINGS` environment variable
    /// 2. System config directory (e.g. `~/.config/QuteScoop/QuteScoop.conf`)
    pub fn open_default() -> Result<Self, SettingsError> {
        Ok(Self::new(default_settings_path()?))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Raw lines of the file; a missing file reads as empty.
    fn read_lines(&self) -> Result<Vec<String>, SettingsError> {
        match fs::read_to_string(&self.path) {
            Ok(contents) => Ok(contents.lines().map(str::to_string).collect()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(Vec::new()),
            Err(e) => Err(self.io_error(&e)),
        }
    }

    fn parse(&self) -> Result<BTreeMap<String, String>, SettingsError> {
        let mut values = BTreeMap::new();
        for (index, line) in self.read_lines()?.iter().enumerate() {
            let Some((key, value)) = parse_line(line) else {
                if is_blank_or_comment(line) {
                    continue;
                }
                return Err(SettingsError::Parse {
                    path: self.path.clone(),
                    line_number: index + 1,
                    line: line.clone(),
                });
            };
            values.insert(key.to_string(), value.to_string());
        }
        Ok(values)
    }

    fn write_lines(&self, lines: &[String]) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent).map_err(|e| self.io_error(&e))?;
            }
        }

        let mut file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(true)
            .open(&self.path)
            .map_err(|e| self.io_error(&e))?;

        let mut content = lines.join("\n");
        content.push('\n');
        file.write_all(content.as_bytes())
            .map_err(|e| self.io_error(&e))
    }

    fn io_error(&self, err: &std::io::Error) -> SettingsError {
        SettingsError::Io {
            path: self.path.clone(),
            reason: err.to_string(),
        }
    }
}

impl SettingsStore for FileSettingsStore {
    fn get(&self, key: &str) -> Result<Option<String>, SettingsError> {
        Ok(self.parse()?.remove(key))
    }

    fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        validate_entry(key, value)?;

        let lines = self.read_lines()?;
        let mut updated = false;
        let mut output: Vec<String> = Vec::with_capacity(lines.len() + 1);

        for line in lines {
            match parse_line(&line) {
                Some((lhs, _)) if lhs == key => {
                    // Later duplicates of the key are dropped.
                    if !updated {
                        output.push(format!("{key}={value}"));
                        updated = true;
                    }
                }
                _ => output.push(line),
            }
        }

        if !updated {
            output.push(format!("{key}={value}"));
        }

        self.write_lines(&output)
    }

    fn entries(&self) -> Result<Vec<(String, String)>, SettingsError> {
        Ok(self.parse()?.into_iter().collect())
    }
}

fn default_settings_path() -> Result<PathBuf, SettingsError> {
    if let Ok(path) = env::var(SETTINGS_FILE_ENV) {
        if !path.trim().is_empty() {
            return Ok(PathBuf::from(path));
        }
    }

    let config = dirs::config_dir().ok_or(SettingsError::NoConfigDir)?;
    Ok(config
        .join(ORGANIZATION_NAME)
        .join(format!("{APPLICATION_NAME}.conf")))
}

fn is_blank_or_comment(line: &str) -> bool {
    let trimmed = line.trim();
    trimmed.is_empty() || trimmed.starts_with('#') || trimmed.starts_with(';')
}

fn parse_line(line: &str) -> Option<(&str, &str)> {
    if is_blank_or_comment(line) {
        return None;
    }
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value))
}
