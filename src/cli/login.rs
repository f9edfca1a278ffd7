//! Login command.

use crate::cli::{output, session, Options};
use crate::error::Result;

/// Log in to the p4 server, prompting for missing credentials.
pub fn execute(options: &Options) -> Result<()> {
    let session = session::login(options)?;
    output::success(&format!("logged in as {}", session.user));
    output::kv("host", &session.host);
    Ok(())
}
