//! Logout command.

use crate::cli::{output, session};
use crate::error::Result;

/// Remove every stored credential. Safe to run when nothing is stored.
pub fn execute() -> Result<()> {
    session::vault().clear_all()?;
    output::success("stored credentials removed");
    Ok(())
}
