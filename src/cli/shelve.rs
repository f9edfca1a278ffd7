//! Shelve command.
//!
//! Shelves local commits, then records which change list each commit became:
//! as a note on the commit and as an entry in the pending changes ledger.
//! The next `gp shelve` walks the commits again with `gp review`, which
//! turns each `#review` trailer into `#review-<number>` from that ledger.

use std::path::Path;

use crate::cli::{output, session, Options};
use crate::core::constants::P4_HEAD;
use crate::core::git::Git;
use crate::core::ledger::Ledger;
use crate::core::notes;
use crate::core::p4::P4;
use crate::core::process::shell_quote;
use crate::error::Result;

/// Shelve local commits, optionally adding review trailers first.
pub fn execute(options: &Options, no_review: bool) -> Result<()> {
    let session = session::prepare_submit(options)?;

    if !no_review {
        // prompt for the list here, not inside the rebase
        session::reviewers(&options.reviewers)?;
        let exec = review_exec(&std::env::current_exe()?, &options.reviewers);
        Git.rebase_exec(&exec, P4_HEAD)?;
    }

    Git.p4(&session, &["submit", "--shelve"])?;

    let workspace = session.client.clone().unwrap_or_default();
    let changes = P4::new(session).shelved_changes(&workspace)?;
    let commits = Git.commits_since(P4_HEAD)?;
    let pending = notes::correlate(&Git, &changes, &commits, &Ledger::open_default()?)?;

    match pending.len() {
        0 => output::warn("no shelved changes found for local commits"),
        n => {
            output::success(&format!("{} commit(s) shelved", n));
            for change in &pending {
                output::kv("change", output::change(change));
            }
        }
    }
    Ok(())
}

/// Command line `git rebase -x` hands to `sh` for every commit.
fn review_exec(program: &Path, group: &str) -> String {
    format!(
        "{} review --reviewers {}",
        shell_quote(&program.to_string_lossy()),
        shell_quote(group)
    )
}
