//! Filesystem probe port.
//!
//! The resolver and the migration only touch the disk through this trait, so
//! both can be exercised against an in-memory filesystem in tests.

use std::io;
use std::path::Path;

use crate::paths::Capability;

/// Filesystem operations needed to probe and populate data directories.
pub trait FilesystemProbe {
    /// Whether anything exists at `path`.
    fn exists(&self, path: &Path) -> bool;

    /// Probe a directory by creating, writing and deleting a throwaway file.
    ///
    /// - `ReadWrite` if the probe file could be written
    /// - `ReadOnly` if the directory exists but the probe failed
    /// - `NotOpen` if the directory does not exist or cannot be inspected
    fn test_writable(&self, path: &Path) -> Capability;

    /// Names of the regular files directly inside `path`, sorted.
    ///
    /// Not recursive. Subdirectories and symlinks are left out.
    fn list_files(&self, path: &Path) -> io::Result<Vec<String>>;

    fn copy_file(&self, source: &Path, destination: &Path) -> io::Result<()>;

    /// Create `path` along with any missing parents.
    fn make_dir_path(&self, path: &Path) -> io::Result<()>;

    fn remove_file(&self, path: &Path) -> io::Result<()>;
}
