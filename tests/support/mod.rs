//! Test support utilities for gp integration tests.
//!
//! Provides an isolated environment per test: a git repository, a home
//! directory for the global git config and `~/.gp`, and a fake `p4` on PATH.

#![allow(dead_code)]

pub mod assertions;
pub mod commands;

#[allow(unused_imports)]
pub use assertions::*;
#[allow(unused_imports)]
pub use fixtures::*;

use std::fs;
use std::path::{Path, PathBuf};

use tempfile::TempDir;

/// Test environment with isolated temp directories.
///
/// No process-global state is mutated; child processes get HOME, PATH and
/// the working directory explicitly so tests can run in parallel.
pub struct Test {
    /// Working directory, a git repository once `repo` is called
    pub dir: TempDir,
    /// Temporary home directory
    pub home: TempDir,
    /// Directory holding the fake `p4`
    pub bin: TempDir,
}

impl Test {
    /// Create a new empty test environment with the fake `p4` installed.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("failed to create temp dir");
        let home = TempDir::new().expect("failed to create temp home");
        let bin = TempDir::new().expect("failed to create temp bin");

        install(&bin.path().join("p4"), FAKE_P4);

        Self { dir, home, bin }
    }

    /// Create a logged-in test environment whose repository was cloned from
    /// `//depot/proj/`: `p4/HEAD` is the import commit and `git p4` is
    /// answered by a stub.
    pub fn p4_clone() -> Self {
        let git = which::which("git").expect("git not found");
        let t = Self::with_credentials();
        install(
            &t.bin.path().join("git"),
            &FAKE_GIT.replace("{git}", &git.to_string_lossy()),
        );

        t.git(&["init", "-q"]);
        t.git(&["commit", "-q", "--allow-empty", "-m", IMPORT_MESSAGE]);
        t.git(&["update-ref", "refs/remotes/p4/HEAD", "HEAD"]);
        t
    }

    /// Commit `file` with `contents` and return the new commit SHA.
    pub fn commit_file(&self, file: &str, contents: &str, message: &str) -> String {
        fs::write(self.dir.path().join(file), contents).expect("failed to write file");
        self.git(&["add", file]);
        self.git(&["commit", "-q", "-m", message]);
        self.git(&["rev-parse", "HEAD"]).trim().to_string()
    }

    /// Set what the fake `p4 changes` prints.
    pub fn set_p4_changes(&self, listing: &str) {
        fs::write(self.home.path().join("p4.changes"), listing).unwrap();
    }

    /// Everything `git p4` was called with.
    pub fn git_p4_log(&self) -> String {
        fs::read_to_string(self.home.path().join("git-p4.log")).unwrap_or_default()
    }

    /// Create a test environment with a repository holding one commit.
    pub fn repo(message: &str) -> Self {
        let t = Self::new();
        t.git(&["init", "-q"]);
        t.git(&["commit", "-q", "--allow-empty", "-m", message]);
        t
    }

    /// Create a test environment with a repository whose commit adds `file`.
    pub fn repo_with_file(message: &str, file: &str, contents: &str) -> Self {
        let t = Self::new();
        t.git(&["init", "-q"]);
        fs::write(t.dir.path().join(file), contents).expect("failed to write file");
        t.git(&["add", file]);
        t.git(&["commit", "-q", "-m", message]);
        t
    }

    /// Create a test environment with stored credentials.
    pub fn with_credentials() -> Self {
        let t = Self::new();
        let output = t.login_with_input(LOGIN_INPUT);
        assert!(
            output.status.success(),
            "Failed to log in: {}",
            String::from_utf8_lossy(&output.stderr)
        );
        t
    }

    /// `~/.gp/p4-changes`
    pub fn ledger_path(&self) -> PathBuf {
        self.home.path().join(".gp").join("p4-changes")
    }

    pub fn write_ledger(&self, contents: &str) {
        let path = self.ledger_path();
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(path, contents).unwrap();
    }

    pub fn read_ledger(&self) -> String {
        fs::read_to_string(self.ledger_path()).unwrap_or_default()
    }

    /// Everything the fake `p4` was called with.
    pub fn p4_log(&self) -> String {
        fs::read_to_string(self.home.path().join("p4.log")).unwrap_or_default()
    }

    /// What the fake `p4 login` read from stdin.
    pub fn p4_stdin(&self) -> String {
        fs::read_to_string(self.home.path().join("p4.stdin")).unwrap_or_default()
    }
}

/// Write an executable script.
fn install(path: &Path, script: &str) {
    fs::write(path, script).expect("failed to write script");
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        fs::set_permissions(path, fs::Permissions::from_mode(0o755))
            .expect("failed to make script executable");
    }
}
