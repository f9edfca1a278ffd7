//! Completions command.
//!
//! Prints the completion script of the whole `gp` command tree, global
//! flags included, e.g. `gp completions zsh > ~/.zfunc/_gp`.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::{generate, Shell};

use crate::cli::Cli;
use crate::error::Result;

/// Print the completion script for `shell` on stdout.
pub fn execute(shell: Shell) -> Result<()> {
    let mut out = std::io::stdout().lock();
    render(shell, &mut out);
    out.flush()?;
    Ok(())
}

/// Write the completion script for `shell` to `out`.
pub fn render(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    generate(shell, &mut cmd, name, out);
}
