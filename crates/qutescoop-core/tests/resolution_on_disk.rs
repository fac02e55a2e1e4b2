//! Resolution and migration against the real filesystem.
//!
//! Unit tests cover the decision logic with an in-memory filesystem; these
//! tests make sure the same flows hold with `LocalFilesystem` and a
//! file-backed settings store.

use std::cell::RefCell;
use std::fs;
use std::path::{Path, PathBuf};

use qutescoop_core::{
    CandidateSet, DirectoryResolver, FileSettingsStore, LocalFilesystem, Prompter,
    REQUIRED_SUBDIRS, RESOLVED_DIR_KEY, ResolutionSource, SettingsStore, application_data_path,
    migrate,
};
use qutescoop_core::paths::WRITE_PROBE_FILE;
use tempfile::{TempDir, tempdir};

/// Answers every confirmation with `answer` and remembers what it was shown.
struct FixedAnswer {
    answer: bool,
    shown: RefCell<Vec<String>>,
    confirmations: RefCell<usize>,
}

impl FixedAnswer {
    fn new(answer: bool) -> Self {
        Self {
            answer,
            shown: RefCell::new(Vec::new()),
            confirmations: RefCell::new(0),
        }
    }
}

impl Prompter for FixedAnswer {
    fn confirm(&self, _title: &str, message: &str) -> bool {
        *self.confirmations.borrow_mut() += 1;
        self.shown.borrow_mut().push(message.to_string());
        self.answer
    }

    fn notify(&self, _title: &str, message: &str) {
        self.shown.borrow_mut().push(message.to_string());
    }

    fn error(&self, _title: &str, message: &str) {
        self.shown.borrow_mut().push(message.to_string());
    }
}

fn populate(base: &Path) {
    for subdir in REQUIRED_SUBDIRS {
        let dir = base.join(subdir);
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join(format!("{subdir}.dat")), subdir.as_bytes()).unwrap();
    }
}

struct Layout {
    _temp: TempDir,
    prefer: PathBuf,
    legacy: PathBuf,
    exe: PathBuf,
    settings: FileSettingsStore,
}

fn layout() -> Layout {
    let temp = tempdir().unwrap();
    let prefer = temp.path().join("prefer");
    let legacy = temp.path().join("legacy");
    let exe = temp.path().join("bin");
    fs::create_dir_all(&exe).unwrap();
    let settings = FileSettingsStore::new(temp.path().join("config").join("QuteScoop.conf"));
    Layout {
        _temp: temp,
        prefer,
        legacy,
        exe,
        settings,
    }
}

impl Layout {
    fn candidates(&self) -> CandidateSet {
        CandidateSet::new([self.prefer.clone(), self.legacy.clone()], self.exe.clone()).unwrap()
    }
}

#[test]
fn writable_preferred_is_chosen_and_persisted() {
    let l = layout();
    populate(&l.prefer);
    populate(&l.legacy);
    let prompter = FixedAnswer::new(true);

    let resolved =
        DirectoryResolver::new(l.candidates(), &LocalFilesystem, &l.settings, &prompter).resolve();

    assert_eq!(resolved.path, l.prefer);
    assert_eq!(resolved.source, ResolutionSource::Writable { priority: 0 });
    assert!(prompter.shown.borrow().is_empty());
    for subdir in REQUIRED_SUBDIRS {
        assert!(!l.prefer.join(subdir).join(WRITE_PROBE_FILE).exists());
    }

    let stored = l.settings.get(RESOLVED_DIR_KEY).unwrap();
    assert_eq!(stored.as_deref(), Some(l.prefer.to_string_lossy().as_ref()));
    assert_eq!(
        application_data_path(&l.settings, "log.txt").unwrap(),
        l.prefer.join("log.txt")
    );
}

#[test]
fn writable_legacy_is_used_when_preferred_is_missing() {
    let l = layout();
    populate(&l.legacy);
    let prompter = FixedAnswer::new(true);

    let resolved =
        DirectoryResolver::new(l.candidates(), &LocalFilesystem, &l.settings, &prompter).resolve();

    assert_eq!(resolved.path, l.legacy);
    assert_eq!(*prompter.confirmations.borrow(), 0);
    assert!(!l.prefer.exists());
}

#[test]
fn empty_installation_falls_back_to_executable_directory() {
    let l = layout();
    let prompter = FixedAnswer::new(true);

    let resolved =
        DirectoryResolver::new(l.candidates(), &LocalFilesystem, &l.settings, &prompter).resolve();

    assert_eq!(resolved.path, l.exe);
    assert_eq!(resolved.source, ResolutionSource::Fallback);
    let shown = prompter.shown.borrow();
    assert_eq!(shown.len(), 1);
    assert!(shown[0].contains("No complete data directory"));
}

#[cfg(unix)]
#[test]
fn resolved_path_with_surrounding_spaces_round_trips() {
    let temp = tempdir().unwrap();
    let prefer = temp.path().join(" data dir ");
    populate(&prefer);
    let exe = temp.path().join("bin");
    fs::create_dir_all(&exe).unwrap();
    let settings = FileSettingsStore::new(temp.path().join("QuteScoop.conf"));
    let prompter = FixedAnswer::new(true);
    let candidates = CandidateSet::new([prefer.clone()], exe).unwrap();

    let resolved = DirectoryResolver::new(candidates, &LocalFilesystem, &settings, &prompter).resolve();

    assert_eq!(resolved.path, prefer);
    assert_eq!(
        application_data_path(&settings, "log.txt").unwrap(),
        prefer.join("log.txt")
    );
}

#[test]
fn migration_on_disk_is_repeatable() {
    let l = layout();
    populate(&l.legacy);
    let prompter = FixedAnswer::new(true);

    let first = migrate(
        &LocalFilesystem,
        &prompter,
        &l.legacy,
        &l.prefer,
        &REQUIRED_SUBDIRS,
    );
    assert!(!first.has_errors(), "{}", first.summary());
    assert_eq!(first.copied().count(), REQUIRED_SUBDIRS.len());

    fs::write(l.legacy.join("data").join("data.dat"), b"updated").unwrap();
    let second = migrate(
        &LocalFilesystem,
        &prompter,
        &l.legacy,
        &l.prefer,
        &REQUIRED_SUBDIRS,
    );
    assert_eq!(second.error_count(), 0);
    assert_eq!(
        fs::read(l.prefer.join("data").join("data.dat")).unwrap(),
        b"updated"
    );
    assert!(l.legacy.join("data").join("data.dat").exists());
}

/// Make every subdirectory read-only. Returns `false` when permissions are
/// not enforced for this user (e.g. running as root).
#[cfg(unix)]
fn make_read_only(base: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;

    for subdir in REQUIRED_SUBDIRS {
        fs::set_permissions(base.join(subdir), fs::Permissions::from_mode(0o555)).unwrap();
    }
    fs::write(base.join("data").join("check"), b"x").is_err()
}

#[cfg(unix)]
fn restore_permissions(base: &Path) {
    use std::os::unix::fs::PermissionsExt;

    for subdir in REQUIRED_SUBDIRS {
        let _ = fs::set_permissions(base.join(subdir), fs::Permissions::from_mode(0o755));
    }
}

#[cfg(unix)]
#[test]
fn read_only_legacy_is_migrated_after_confirmation() {
    let l = layout();
    populate(&l.legacy);
    if !make_read_only(&l.legacy) {
        restore_permissions(&l.legacy);
        eprintln!("skipped: permission bits are not enforced for this user");
        return;
    }
    let prompter = FixedAnswer::new(true);

    let resolved =
        DirectoryResolver::new(l.candidates(), &LocalFilesystem, &l.settings, &prompter).resolve();
    restore_permissions(&l.legacy);

    assert_eq!(resolved.path, l.prefer);
    assert_eq!(
        resolved.source,
        ResolutionSource::Migrated {
            from: l.legacy.clone()
        }
    );
    assert!(!resolved.migration.unwrap().has_errors());
    assert!(l.prefer.join("textures").join("textures.dat").exists());
}

#[cfg(unix)]
#[test]
fn read_only_legacy_is_kept_when_declined() {
    let l = layout();
    populate(&l.legacy);
    if !make_read_only(&l.legacy) {
        restore_permissions(&l.legacy);
        eprintln!("skipped: permission bits are not enforced for this user");
        return;
    }
    let prompter = FixedAnswer::new(false);

    let resolved =
        DirectoryResolver::new(l.candidates(), &LocalFilesystem, &l.settings, &prompter).resolve();
    restore_permissions(&l.legacy);

    assert_eq!(resolved.path, l.legacy);
    assert!(!l.prefer.join("data").exists());
}
