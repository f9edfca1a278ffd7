//! git config backed storage.

use std::collections::BTreeSet;
use std::process::{Command, Stdio};

use tracing::{debug, trace};

use super::ConfigStore;
use crate::core::process;
use crate::error::{ConfigError, ProcessError, Result};

/// Which git config file a [`GitConfig`] reads and writes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Scope {
    /// `~/.gitconfig` (`--global`)
    Global,
    /// The current repository's `.git/config`
    Local,
}

/// Configuration store that shells out to `git config`.
#[derive(Debug, Clone, Copy)]
pub struct GitConfig {
    scope: Scope,
}

impl GitConfig {
    pub fn new(scope: Scope) -> Self {
        Self { scope }
    }

    pub fn global() -> Self {
        Self::new(Scope::Global)
    }

    pub fn local() -> Self {
        Self::new(Scope::Local)
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("git");
        cmd.arg("config");
        if self.scope == Scope::Global {
            cmd.arg("--global");
        }
        cmd
    }

    /// Names of every key under `section`, subsections included.
    fn names(&self, section: &str) -> Result<Vec<String>> {
        let mut cmd = self.command();
        cmd.args(["--name-only", "--get-regexp", &format!("^{}\\.", section)])
            .stdin(Stdio::null());
        let command = process::describe(&cmd);

        let output = cmd
            .output()
            .map_err(|source| ProcessError::Spawn { command, source })?;

        // exit 1: nothing matched
        if output.status.code() == Some(1) {
            return Ok(Vec::new());
        }
        if !output.status.success() {
            return Err(ConfigError::RemoveSection {
                section: section.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        Ok(String::from_utf8_lossy(&output.stdout)
            .lines()
            .map(str::to_string)
            .collect())
    }
}

/// The distinct sections that hold `names`, limited to `section` and its
/// subsections.
///
/// git keeps `gp.key` in `[gp]` and `gp.reviewers.default` in
/// `[gp "reviewers"]`; each one has to be removed on its own.
fn sections_of<'a>(
    names: impl IntoIterator<Item = &'a str>,
    section: &str,
) -> BTreeSet<String> {
    let nested = format!("{}.", section);
    names
        .into_iter()
        .filter_map(|name| name.rsplit_once('.').map(|(head, _)| head))
        .filter(|head| head.eq_ignore_ascii_case(section) || head.starts_with(&nested))
        .map(str::to_string)
        .collect()
}

impl ConfigStore for GitConfig {
    fn get(&self, key: &str) -> Result<Option<String>> {
        trace!(key, scope = ?self.scope, "reading config");

        let mut cmd = self.command();
        cmd.arg(key).stdin(Stdio::null());
        let command = process::describe(&cmd);

        let output = cmd
            .output()
            .map_err(|source| ProcessError::Spawn { command, source })?;

        // git config exits with 1 when the key is not set
        if output.status.code() == Some(1) {
            return Ok(None);
        }
        if !output.status.success() {
            return Err(ConfigError::Read {
                key: key.to_string(),
                reason: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            }
            .into());
        }

        let mut value = String::from_utf8(output.stdout).map_err(|_| ConfigError::Read {
            key: key.to_string(),
            reason: "value is not valid UTF-8".to_string(),
        })?;
        // git terminates the printed value with a newline
        if value.ends_with('\n') {
            value.pop();
        }
        Ok(Some(value))
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        debug!(key, scope = ?self.scope, "writing config");

        let mut cmd = self.command();
        cmd.args(["--replace-all", key, value]);
        process::output(&mut cmd).map_err(|e| ConfigError::Write {
            key: key.to_string(),
            reason: e.to_string(),
        })?;
        Ok(())
    }

    fn remove_section(&self, section: &str) -> Result<()> {
        let names = self.names(section)?;
        let sections = sections_of(names.iter().map(String::as_str), section);
        if sections.is_empty() {
            debug!(section, "config section already absent");
            return Ok(());
        }

        // subsections sort after their parent; remove them first
        for name in sections.iter().rev() {
            debug!(section = %name, scope = ?self.scope, "removing config section");
            let mut cmd = self.command();
            cmd.args(["--remove-section", name]);
            process::output(&mut cmd).map_err(|e| ConfigError::RemoveSection {
                section: name.clone(),
                reason: e.to_string(),
            })?;
        }
        Ok(())
    }
}
