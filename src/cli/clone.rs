//! Clone command.

use crate::cli::{session, Options};
use crate::core::git::Git;
use crate::error::Result;

/// `git p4 clone <depot_path> [directory]` after logging in.
pub fn execute(options: &Options, depot_path: &str, directory: Option<&str>) -> Result<()> {
    let session = session::login(options)?;

    let mut args = vec!["clone", depot_path];
    args.extend(directory);
    Git.p4(&session, &args)
}
