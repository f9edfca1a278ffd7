//! Review tag rewriting.
//!
//! The tip commit's message carries a `#review` trailer that moves through
//! two states:
//!
//! - no tag: append a blank line, `#review` and the reviewer list
//! - tag present (bare or with a stale `-N` suffix): pop the newest pending
//!   change from the ledger and rewrite the tag to `#review-<number>`
//!
//! Once the ledger is empty there is nothing left to correlate and the
//! message is left alone.

use tracing::{debug, info};

use crate::core::constants::REVIEW_TAG;
use crate::core::git::Repository;
use crate::core::ledger::Ledger;
use crate::core::notes;
use crate::core::types::ChangeId;
use crate::error::{ParseError, Result};

/// Maps a backend change list to the review number the review system gives it.
pub trait ReviewNumbering {
    fn review_number(&self, change: u64) -> Option<u64>;
}

/// Reviews are numbered one past the change list that created them.
#[derive(Debug, Default, Clone, Copy)]
pub struct NextChange;

impl ReviewNumbering for NextChange {
    fn review_number(&self, change: u64) -> Option<u64> {
        change.checked_add(1)
    }
}

/// What a rewrite did to the tip commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    /// A fresh `#review` trailer was appended.
    Tagged,
    /// The tag now carries the review number of `change`.
    Resolved { change: ChangeId, review: u64 },
    /// Tag present but no pending change left.
    Unchanged,
}

/// Whether `message` contains a review tag in any form.
pub fn has_tag(message: &str) -> bool {
    message.contains(REVIEW_TAG)
}

/// `message` with a `#review` trailer and reviewer list appended.
pub fn insert_tag(message: &str, reviewers: &str) -> String {
    format!("{}\n\n{}\n{}", message.trim_end(), REVIEW_TAG, reviewers.trim())
}

/// Replace every `#review` / `#review-<digits>` with `#review-<number>`.
pub fn replace_tag(message: &str, number: u64) -> String {
    let replacement = format!("{}-{}", REVIEW_TAG, number);
    let mut out = String::with_capacity(message.len() + 8);
    let mut rest = message;

    while let Some(pos) = rest.find(REVIEW_TAG) {
        out.push_str(&rest[..pos]);
        out.push_str(&replacement);
        rest = &rest[pos + REVIEW_TAG.len()..];

        if let Some(suffix) = rest.strip_prefix('-') {
            let digits = suffix.bytes().take_while(u8::is_ascii_digit).count();
            if digits > 0 {
                rest = &suffix[digits..];
            }
        }
    }
    out.push_str(rest);
    out
}

/// Drives the tag state machine for the tip commit of a repository.
pub struct Rewriter<'a, R, N = NextChange> {
    repo: R,
    ledger: &'a Ledger,
    numbering: N,
}

impl<'a, R: Repository> Rewriter<'a, R, NextChange> {
    pub fn new(repo: R, ledger: &'a Ledger) -> Self {
        Self::with_numbering(repo, ledger, NextChange)
    }
}

impl<'a, R: Repository, N: ReviewNumbering> Rewriter<'a, R, N> {
    pub fn with_numbering(repo: R, ledger: &'a Ledger, numbering: N) -> Self {
        Self {
            repo,
            ledger,
            numbering,
        }
    }

    /// Advance the tip commit by one state.
    ///
    /// `reviewers` is only called when a fresh tag has to be inserted.
    ///
    /// # Errors
    ///
    /// Returns `ParseError::InvalidChange` for a non-numeric ledger entry.
    /// The ledger is only shortened after the amend and note succeeded.
    pub fn rewrite<F>(&self, reviewers: F) -> Result<Outcome>
    where
        F: FnOnce() -> Result<String>,
    {
        let message = self.repo.head_message()?;

        if !has_tag(&message) {
            let reviewers = reviewers()?;
            self.repo.amend(&insert_tag(&message, &reviewers))?;
            info!("review tag added");
            return Ok(Outcome::Tagged);
        }

        let mut pending = self.ledger.read()?;
        let Some(change) = pending.pop() else {
            debug!("no pending changes, review tag left as is");
            return Ok(Outcome::Unchanged);
        };

        let review = change
            .parse::<u64>()
            .ok()
            .and_then(|cl| self.numbering.review_number(cl))
            .ok_or_else(|| ParseError::InvalidChange(change.clone()))?;

        self.repo.amend(&replace_tag(&message, review))?;
        // amend gives the commit a new identity, the old note stays behind
        notes::attach(&self.repo, &change, "")?;
        self.ledger.write(&pending)?;

        info!(change = %change, review, "review tag resolved");
        Ok(Outcome::Resolved { change, review })
    }
}
