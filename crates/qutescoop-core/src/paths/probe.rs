//! [`FilesystemProbe`] backed by the local filesystem.

use std::fs::{self, OpenOptions};
use std::io::{self, ErrorKind, Write};
use std::path::Path;

use super::capability::Capability;
use crate::ports::FilesystemProbe;

/// Name of the throwaway file used to test writability.
pub const WRITE_PROBE_FILE: &str = ".qutescoop_write_test";

/// The real filesystem, through `std::fs`.
#[derive(Debug, Default, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    pub const fn new() -> Self {
        Self
    }
}

impl FilesystemProbe for LocalFilesystem {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }

    fn test_writable(&self, path: &Path) -> Capability {
        match fs::metadata(path) {
            Ok(meta) if meta.is_dir() => {}
            Ok(_) => {
                tracing::debug!("{} exists but is not a directory", path.display());
                return Capability::NotOpen;
            }
            Err(e) if e.kind() == ErrorKind::NotFound => return Capability::NotOpen,
            Err(e) => {
                tracing::debug!("Cannot inspect {}: {e}", path.display());
                return Capability::NotOpen;
            }
        }

        match write_probe(path) {
            Ok(()) => Capability::ReadWrite,
            Err(e) => {
                tracing::debug!("{} is not writable: {e}", path.display());
                Capability::ReadOnly
            }
        }
    }

    fn list_files(&self, path: &Path) -> io::Result<Vec<String>> {
        let mut names = Vec::new();
        for entry in fs::read_dir(path)? {
            let entry = entry?;
            // `file_type` does not follow symlinks, so links are skipped here.
            if !entry.file_type()?.is_file() {
                continue;
            }
            match entry.file_name().into_string() {
                Ok(name) => names.push(name),
                Err(raw) => tracing::warn!(
                    "Skipping non UTF-8 file name {:?} in {}",
                    raw,
                    path.display()
                ),
            }
        }
        names.sort();
        Ok(names)
    }

    fn copy_file(&self, source: &Path, destination: &Path) -> io::Result<()> {
        fs::copy(source, destination).map(|_| ())
    }

    fn make_dir_path(&self, path: &Path) -> io::Result<()> {
        fs::create_dir_all(path)
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        fs::remove_file(path)
    }
}

/// Create, write and remove the probe file inside `dir`.
///
/// The directory only counts as writable when all three steps succeed.
fn write_probe(dir: &Path) -> io::Result<()> {
    write_probe_with(dir, |file| fs::remove_file(file))
}

fn write_probe_with(dir: &Path, remove: impl FnOnce(&Path) -> io::Result<()>) -> io::Result<()> {
    let test_file = dir.join(WRITE_PROBE_FILE);
    let mut file = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(&test_file)?;
    let written = file.write_all(b"test");
    drop(file);
    let removed = remove(&test_file);
    written?;
    removed.inspect_err(|e| {
        tracing::warn!("Could not remove probe file {}: {e}", test_file.display());
    })
}
