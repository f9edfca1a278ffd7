//! Command-line interface.

pub mod clone;
pub mod completions;
pub mod login;
pub mod logout;
pub mod output;
pub mod rebase;
pub mod review;
pub mod session;
pub mod shelve;
pub mod submit;

use clap::{Parser, Subcommand};

use crate::core::config::ConfigField;

/// gp - Perforce helper for git-p4 users.
#[derive(Parser)]
#[command(
    name = "gp",
    about = "Drive git-p4 with stored credentials and review bookkeeping",
    version
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,

    /// Remove stored credentials and ask for them again
    #[arg(short = 'c', long, global = true)]
    pub clear_credentials: bool,

    /// Reviewer group whose list goes into new #review trailers
    #[arg(
        short = 'r',
        long,
        global = true,
        default_value = "default",
        value_parser = parse_group
    )]
    pub reviewers: String,

    /// Enable debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

impl Cli {
    pub fn options(&self) -> Options {
        Options {
            clear_credentials: self.clear_credentials,
            reviewers: self.reviewers.clone(),
        }
    }
}

/// Reject reviewer group names git config cannot hold as a variable name.
fn parse_group(group: &str) -> Result<String, String> {
    ConfigField::reviewers(group)
        .map(|_| group.to_string())
        .map_err(|e| e.to_string())
}

/// Flags shared by every command.
#[derive(Debug, Clone)]
pub struct Options {
    pub clear_credentials: bool,
    pub reviewers: String,
}

/// Top-level commands.
#[derive(Subcommand)]
pub enum Command {
    /// Log in to the p4 server with the stored credentials
    Login,

    /// Remove stored host, username, key and password
    Logout,

    /// Create a new git repository from an existing p4 depot path
    #[command(after_help = "\
Examples:
    gp clone //depot/project
    gp clone //depot/stream destination

To import the entire p4 history, use the @all modifier:
    gp clone //depot/project@all")]
    Clone {
        /// Depot or stream path
        depot_path: String,
        /// Destination directory
        directory: Option<String>,
    },

    /// Update the git repository with recent changes from p4
    Rebase,

    /// Submit local commits to p4
    Submit,

    /// Shelve local commits in p4 and track their review numbers
    Shelve {
        /// Do not add #review trailers before shelving
        #[arg(long)]
        no_review: bool,
    },

    /// Add or resolve the #review trailer of the HEAD commit
    Review,

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: clap_complete::Shell,
    },
}

/// Execute a command.
pub fn execute(command: Command, options: &Options) -> crate::error::Result<()> {
    use Command::*;

    match command {
        Login => login::execute(options),
        Logout => logout::execute(),
        Clone {
            depot_path,
            directory,
        } => clone::execute(options, &depot_path, directory.as_deref()),
        Rebase => rebase::execute(options),
        Submit => submit::execute(options),
        Shelve { no_review } => shelve::execute(options, no_review),
        Review => review::execute(options),
        Completions { shell } => completions::execute(shell),
    }
}
