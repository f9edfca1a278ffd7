//! Pending changes ledger.
//!
//! Change lists submitted or shelved from local commits that still wait for
//! their review tag, one id per line in `~/.gp/p4-changes`. Entries are
//! written in submission order and consumed from the tail.
//!
//! A missing file reads as an empty ledger.

use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::core::constants::{LEDGER_FILE, WORK_DIR};
use crate::core::types::ChangeId;
use crate::error::{ConfigError, LedgerError, Result};

/// The per-user working directory (`~/.gp`).
pub fn work_dir() -> Result<PathBuf> {
    let home = dirs::home_dir().ok_or(ConfigError::NoHomeDir)?;
    Ok(home.join(WORK_DIR))
}

/// File-backed list of pending change ids.
#[derive(Debug, Clone)]
pub struct Ledger {
    path: PathBuf,
}

impl Ledger {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Ledger at `~/.gp/p4-changes`.
    pub fn open_default() -> Result<Self> {
        Ok(Self::new(work_dir()?.join(LEDGER_FILE)))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All pending ids in stored order. Blank lines are skipped.
    pub fn read(&self) -> Result<Vec<ChangeId>> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                debug!(path = %self.path.display(), "no pending changes file");
                return Ok(Vec::new());
            }
            Err(source) => {
                return Err(LedgerError::Read {
                    path: self.path.clone(),
                    source,
                }
                .into())
            }
        };

        let changes: Vec<ChangeId> = contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string)
            .collect();
        debug!(count = changes.len(), "pending changes read");
        Ok(changes)
    }

    /// Replace the file contents with `changes`, one per line.
    pub fn write(&self, changes: &[ChangeId]) -> Result<()> {
        let write_err = |source| LedgerError::Write {
            path: self.path.clone(),
            source,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(write_err)?;
        }

        let mut contents = String::new();
        for change in changes {
            contents.push_str(change);
            contents.push('\n');
        }
        fs::write(&self.path, contents).map_err(write_err)?;

        debug!(count = changes.len(), "pending changes written");
        Ok(())
    }
}
