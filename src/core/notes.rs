//! Commit annotation.
//!
//! Records which backend change list a commit became, as a git note
//! (`p4:<change>`). Notes leave the commit hash untouched and are force
//! written, so annotating the same commit again just replaces the note.

use tracing::{debug, warn};

use crate::core::constants::NOTE_PREFIX;
use crate::core::git::Repository;
use crate::core::ledger::Ledger;
use crate::core::types::{ChangeId, CommitSha};
use crate::error::Result;

/// Note payload for a change list.
pub fn payload(change: &str) -> String {
    format!("{}{}", NOTE_PREFIX, change)
}

/// Attach `change` to `target`; an empty target means the tip commit.
pub fn attach<R: Repository + ?Sized>(repo: &R, change: &str, target: &str) -> Result<()> {
    let target = (!target.is_empty()).then_some(target);
    debug!(change, target = target.unwrap_or("HEAD"), "annotating commit");
    repo.add_note(&payload(change), target)
}

/// Pair shelved `changes` with local `commits` and record the pairs.
///
/// Both listings are newest first. The first change annotates the first
/// commit and so on; changes past the last commit belong to older shelves
/// and are ignored, commits past the last change stay unannotated. The
/// paired changes replace the contents of `ledger`, newest first, so the
/// tail is the oldest commit.
pub fn correlate<R: Repository + ?Sized>(
    repo: &R,
    changes: &[ChangeId],
    commits: &[CommitSha],
    ledger: &Ledger,
) -> Result<Vec<ChangeId>> {
    if changes.len() < commits.len() {
        warn!(
            changes = changes.len(),
            commits = commits.len(),
            "fewer shelved changes than local commits"
        );
    }

    let mut pending = Vec::with_capacity(commits.len().min(changes.len()));
    for (change, sha) in changes.iter().zip(commits) {
        attach(repo, change, sha)?;
        pending.push(change.clone());
    }

    ledger.write(&pending)?;
    debug!(count = pending.len(), "shelved changes correlated");
    Ok(pending)
}
