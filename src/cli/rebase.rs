//! Rebase command.

use crate::cli::{session, Options};
use crate::core::git::Git;
use crate::error::Result;

/// `git p4 rebase` after logging in.
pub fn execute(options: &Options) -> Result<()> {
    let session = session::login(options)?;
    Git.p4(&session, &["rebase"])
}
