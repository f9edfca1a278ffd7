//! Review command.
//!
//! Runs on HEAD, usually once per commit from `git rebase -x`.

use crate::cli::{output, session, Options};
use crate::core::git::Git;
use crate::core::ledger::Ledger;
use crate::core::review::{Outcome, Rewriter};
use crate::error::Result;

/// Add a `#review` trailer to HEAD, or resolve it from the ledger.
pub fn execute(options: &Options) -> Result<()> {
    let ledger = Ledger::open_default()?;
    let outcome = Rewriter::new(Git, &ledger).rewrite(|| session::reviewers(&options.reviewers))?;

    match outcome {
        Outcome::Tagged => output::success("review trailer added"),
        Outcome::Resolved { change, review } => output::success(&format!(
            "change {} tracked as #review-{}",
            output::change(&change),
            review
        )),
        Outcome::Unchanged => output::dimmed("no pending changes"),
    }
    Ok(())
}
