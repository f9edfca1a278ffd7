//! gp - Perforce helper for git-p4 users.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use gp::cli::output;
use gp::cli::{execute, Cli};
use gp::error::{CipherError, Error, ParseError, ProcessError};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("GP_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("gp=debug")
        } else {
            EnvFilter::new("gp=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(
            fmt::layer()
                .with_target(false)
                .without_time()
                .with_writer(std::io::stderr),
        )
        .init();

    let options = cli.options();
    if let Err(e) = execute(cli.command, &options) {
        let suggestion = match &e {
            Error::Cipher(CipherError::Authentication | CipherError::KeyTooShort { .. }) => {
                Some("run: gp login --clear-credentials".to_string())
            }
            Error::Process(ProcessError::NotInstalled { program }) => {
                Some(format!("install {} and make sure it is on PATH", program))
            }
            Error::Parse(ParseError::PatternNotFound("git-p4 logs")) => {
                Some("run gp inside a repository created with: gp clone".to_string())
            }
            _ => None,
        };

        output::error(&e.to_string());
        if let Some(hint) = suggestion {
            output::hint(&hint);
        }
        std::process::exit(1);
    }
}
