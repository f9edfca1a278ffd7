//! git command-line client.
//!
//! All functions shell out to `git` in the current directory. The core only
//! sees the [`Repository`] trait; the extra `git p4` passthroughs are used
//! by the command layer.

use std::process::Command;

use tracing::debug;

use crate::core::constants::P4_HEAD;
use crate::core::p4::Session;
use crate::core::process;
use crate::core::types::CommitSha;
use crate::error::Result;

/// Commit operations needed by the review and annotation steps.
pub trait Repository {
    /// Full message of the tip commit.
    fn head_message(&self) -> Result<String>;

    /// Replace the tip commit's message.
    fn amend(&self, message: &str) -> Result<()>;

    /// Attach `payload` as a note, overwriting an existing one.
    ///
    /// `None` targets the tip commit.
    fn add_note(&self, payload: &str, target: Option<&str>) -> Result<()>;
}

impl<T: Repository + ?Sized> Repository for &T {
    fn head_message(&self) -> Result<String> {
        (**self).head_message()
    }

    fn amend(&self, message: &str) -> Result<()> {
        (**self).amend(message)
    }

    fn add_note(&self, payload: &str, target: Option<&str>) -> Result<()> {
        (**self).add_note(payload, target)
    }
}

/// The repository in the current directory.
#[derive(Debug, Default, Clone, Copy)]
pub struct Git;

impl Git {
    fn command() -> Command {
        Command::new("git")
    }

    /// Non-merge commits in `upstream..HEAD`, newest first.
    pub fn commits_since(&self, upstream: &str) -> Result<Vec<CommitSha>> {
        let mut cmd = Self::command();
        cmd.args(["rev-list", "--no-merges", &format!("{}..", upstream)]);
        let out = process::output(&mut cmd)?;
        Ok(out
            .lines()
            .map(str::trim)
            .filter(|l| !l.is_empty())
            .map(str::to_string)
            .collect())
    }

    /// `git log` entry of the last commit imported from p4.
    pub fn last_import_log(&self) -> Result<String> {
        let mut cmd = Self::command();
        cmd.args(["log", P4_HEAD, "-n1"]);
        process::output(&mut cmd)
    }

    /// Run `git p4 <args>` against `session` with inherited stdio.
    pub fn p4(&self, session: &Session, args: &[&str]) -> Result<()> {
        let mut cmd = Self::command();
        cmd.arg("p4").args(args);
        session.apply(&mut cmd);
        process::run(&mut cmd)
    }

    /// `git rebase -x <exec> <upstream>`.
    pub fn rebase_exec(&self, exec: &str, upstream: &str) -> Result<()> {
        let mut cmd = Self::command();
        cmd.args(["rebase", "-x", exec, upstream]);
        process::run(&mut cmd)
    }
}

impl Repository for Git {
    fn head_message(&self) -> Result<String> {
        let mut cmd = Self::command();
        cmd.args(["show", "-s", "--format=%B"]);
        process::output(&mut cmd)
    }

    fn amend(&self, message: &str) -> Result<()> {
        debug!(len = message.len(), "amending tip commit");
        let mut cmd = Self::command();
        // whitespace cleanup keeps `#review` lines that strip mode would drop;
        // only the message changes, so an empty tip commit must amend too
        cmd.args([
            "commit",
            "--amend",
            "--allow-empty",
            "--cleanup=whitespace",
            "-m",
            message,
        ]);
        process::output(&mut cmd)?;
        Ok(())
    }

    fn add_note(&self, payload: &str, target: Option<&str>) -> Result<()> {
        let mut cmd = Self::command();
        cmd.args(["notes", "add", "-f", "-m", payload]);
        if let Some(target) = target {
            cmd.arg(target);
        }
        process::run(&mut cmd)
    }
}
