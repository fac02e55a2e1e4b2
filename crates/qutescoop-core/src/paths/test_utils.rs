//! Test doubles for path tests.
//!
//! - [`ENV_LOCK`] / [`EnvVarGuard`] serialise tests that touch environment
//!   variables such as `QUTESCOOP_DATA_DIR`
//! - [`FakeFilesystem`] is an in-memory [`FilesystemProbe`] with injectable
//!   failures and a counter of mutating operations
//! - [`ScriptedPrompter`] answers confirmations from a queue and records
//!   everything shown to the user

use std::cell::{Cell, RefCell};
use std::collections::{BTreeMap, BTreeSet, VecDeque};
use std::env;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

use super::capability::Capability;
use crate::ports::{FilesystemProbe, Prompter};

/// Shared lock to serialize tests that depend on environment variables.
pub static ENV_LOCK: Mutex<()> = Mutex::new(());

/// RAII guard that restores an environment variable to its original value on drop.
pub struct EnvVarGuard {
    key: String,
    previous: Option<String>,
}

impl EnvVarGuard {
    #[allow(unsafe_code)]
    pub fn set(key: &str, value: &str) -> Self {
        let previous = env::var(key).ok();
        unsafe {
            env::set_var(key, value);
        }
        Self {
            key: key.to_string(),
            previous,
        }
    }
}

impl Drop for EnvVarGuard {
    #[allow(unsafe_code)]
    fn drop(&mut self) {
        if let Some(ref value) = self.previous {
            unsafe {
                env::set_var(&self.key, value);
            }
        } else {
            unsafe {
                env::remove_var(&self.key);
            }
        }
    }
}

fn denied(what: &str, path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::PermissionDenied,
        format!("{what} denied for {}", path.display()),
    )
}

fn not_found(path: &Path) -> io::Error {
    io::Error::new(
        io::ErrorKind::NotFound,
        format!("{} not found", path.display()),
    )
}

/// In-memory filesystem.
///
/// Directories carry a writable flag that drives `test_writable`. Failures
/// for `make_dir_path`, `copy_file` and `remove_file` are injected per path.
#[derive(Debug, Default)]
pub struct FakeFilesystem {
    /// Directory path -> writable.
    dirs: RefCell<BTreeMap<PathBuf, bool>>,
    files: RefCell<BTreeMap<PathBuf, Vec<u8>>>,
    fail_mkdir: BTreeSet<PathBuf>,
    fail_copy: BTreeSet<PathBuf>,
    fail_remove: BTreeSet<PathBuf>,
    writes: Cell<usize>,
    probes: Cell<usize>,
}

impl FakeFilesystem {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a directory (and its missing parents, which are writable).
    pub fn with_dir(self, path: impl Into<PathBuf>, writable: bool) -> Self {
        let path = path.into();
        {
            let mut dirs = self.dirs.borrow_mut();
            for ancestor in path.ancestors().skip(1) {
                if ancestor.as_os_str().is_empty() {
                    continue;
                }
                dirs.entry(ancestor.to_path_buf()).or_insert(true);
            }
            dirs.insert(path, writable);
        }
        self
    }

    /// Add a file. Its parent directory must already be present.
    pub fn with_file(self, path: impl Into<PathBuf>, contents: &[u8]) -> Self {
        self.files
            .borrow_mut()
            .insert(path.into(), contents.to_vec());
        self
    }

    /// Add `base/<subdir>` for every subdir, each holding the given files.
    pub fn with_tree(mut self, base: &str, writable: bool, subdirs: &[(&str, &[&str])]) -> Self {
        for (subdir, files) in subdirs {
            let dir = Path::new(base).join(subdir);
            self = self.with_dir(&dir, writable);
            for name in *files {
                let contents = format!("{subdir}/{name}");
                self = self.with_file(dir.join(name), contents.as_bytes());
            }
        }
        self
    }

    pub fn fail_mkdir(mut self, path: impl Into<PathBuf>) -> Self {
        self.fail_mkdir.insert(path.into());
        self
    }

    /// Fail copies whose destination is `path`.
    pub fn fail_copy(mut self, path: impl Into<PathBuf>) -> Self {
        self.fail_copy.insert(path.into());
        self
    }

    pub fn fail_remove(mut self, path: impl Into<PathBuf>) -> Self {
        self.fail_remove.insert(path.into());
        self
    }

    /// Mutating operations performed, write probes excluded.
    pub fn writes(&self) -> usize {
        self.writes.get()
    }

    pub fn probes(&self) -> usize {
        self.probes.get()
    }

    pub fn file(&self, path: impl AsRef<Path>) -> Option<Vec<u8>> {
        self.files.borrow().get(path.as_ref()).cloned()
    }

    pub fn is_dir(&self, path: impl AsRef<Path>) -> bool {
        self.dirs.borrow().contains_key(path.as_ref())
    }

    fn bump_writes(&self) {
        self.writes.set(self.writes.get() + 1);
    }
}

impl FilesystemProbe for FakeFilesystem {
    fn exists(&self, path: &Path) -> bool {
        self.dirs.borrow().contains_key(path) || self.files.borrow().contains_key(path)
    }

    fn test_writable(&self, path: &Path) -> Capability {
        self.probes.set(self.probes.get() + 1);
        match self.dirs.borrow().get(path) {
            Some(true) => Capability::ReadWrite,
            Some(false) => Capability::ReadOnly,
            None => Capability::NotOpen,
        }
    }

    fn list_files(&self, path: &Path) -> io::Result<Vec<String>> {
        if !self.dirs.borrow().contains_key(path) {
            return Err(not_found(path));
        }
        Ok(self
            .files
            .borrow()
            .keys()
            .filter(|file| file.parent() == Some(path))
            .filter_map(|file| file.file_name())
            .map(|name| name.to_string_lossy().into_owned())
            .collect())
    }

    fn copy_file(&self, source: &Path, destination: &Path) -> io::Result<()> {
        self.bump_writes();
        if self.fail_copy.contains(destination) {
            return Err(denied("copy", destination));
        }
        let contents = self
            .files
            .borrow()
            .get(source)
            .cloned()
            .ok_or_else(|| not_found(source))?;
        let parent = destination.parent().ok_or_else(|| not_found(destination))?;
        if !self.dirs.borrow().contains_key(parent) {
            return Err(not_found(parent));
        }
        if self.files.borrow().contains_key(destination) {
            return Err(io::Error::new(
                io::ErrorKind::AlreadyExists,
                format!("{} already exists", destination.display()),
            ));
        }
        self.files
            .borrow_mut()
            .insert(destination.to_path_buf(), contents);
        Ok(())
    }

    fn make_dir_path(&self, path: &Path) -> io::Result<()> {
        self.bump_writes();
        if self.fail_mkdir.contains(path) {
            return Err(denied("mkdir", path));
        }
        let mut dirs = self.dirs.borrow_mut();
        for ancestor in path.ancestors() {
            if ancestor.as_os_str().is_empty() {
                continue;
            }
            dirs.entry(ancestor.to_path_buf()).or_insert(true);
        }
        Ok(())
    }

    fn remove_file(&self, path: &Path) -> io::Result<()> {
        self.bump_writes();
        if self.fail_remove.contains(path) {
            return Err(denied("remove", path));
        }
        self.files
            .borrow_mut()
            .remove(path)
            .map(|_| ())
            .ok_or_else(|| not_found(path))
    }
}

/// One interaction with the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Prompt {
    Confirm { title: String, message: String },
    Notify { title: String, message: String },
    Error { title: String, message: String },
}

/// Prompter answering confirmations from a fixed script.
///
/// Panics when asked a question with no scripted answer left, which makes
/// unexpected prompts fail the test.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: RefCell<VecDeque<bool>>,
    log: RefCell<Vec<Prompt>>,
}

impl ScriptedPrompter {
    pub fn answering(answers: &[bool]) -> Self {
        Self {
            answers: RefCell::new(answers.iter().copied().collect()),
            log: RefCell::default(),
        }
    }

    pub fn log(&self) -> Vec<Prompt> {
        self.log.borrow().clone()
    }

    pub fn confirmations(&self) -> usize {
        self.log
            .borrow()
            .iter()
            .filter(|p| matches!(p, Prompt::Confirm { .. }))
            .count()
    }

    pub fn errors(&self) -> Vec<String> {
        self.log
            .borrow()
            .iter()
            .filter_map(|p| match p {
                Prompt::Error { message, .. } => Some(message.clone()),
                _ => None,
            })
            .collect()
    }
}

impl Prompter for ScriptedPrompter {
    fn confirm(&self, title: &str, message: &str) -> bool {
        self.log.borrow_mut().push(Prompt::Confirm {
            title: title.to_string(),
            message: message.to_string(),
        });
        self.answers
            .borrow_mut()
            .pop_front()
            .unwrap_or_else(|| panic!("unexpected confirmation: {title}: {message}"))
    }

    fn notify(&self, title: &str, message: &str) {
        self.log.borrow_mut().push(Prompt::Notify {
            title: title.to_string(),
            message: message.to_string(),
        });
    }

    fn error(&self, title: &str, message: &str) {
        self.log.borrow_mut().push(Prompt::Error {
            title: title.to_string(),
            message: message.to_string(),
        });
    }
}
