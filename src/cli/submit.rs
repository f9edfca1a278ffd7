//! Submit command.

use crate::cli::{output, session, Options};
use crate::core::git::Git;
use crate::error::Result;

/// Submit local commits through `git p4 submit`.
pub fn execute(options: &Options) -> Result<()> {
    let session = session::prepare_submit(options)?;
    Git.p4(&session, &["submit"])?;
    output::success("changes submitted");
    Ok(())
}
