//! Steps shared by the commands that talk to the p4 server.

use tracing::debug;

use crate::cli::{output, Options};
use crate::core::config::{ConfigField, ConfigStore, FieldStore, GitConfig};
use crate::core::git::Git;
use crate::core::ledger;
use crate::core::p4::{P4Backend, Session, P4};
use crate::core::prompt::Terminal;
use crate::core::vault::{LoginOptions, Vault};
use crate::core::workspace;
use crate::error::Result;

/// Vault over the global git config, prompting on the terminal.
pub fn vault() -> Vault<GitConfig, Terminal> {
    Vault::new(GitConfig::global(), Terminal)
}

/// Log in, returning the session without a client workspace.
pub fn login(options: &Options) -> Result<Session> {
    let login = LoginOptions {
        clear_credentials: options.clear_credentials,
    };
    vault().login(&login, &P4Backend)
}

/// Log in, make sure the workspace exists and configure git-p4 for submits.
///
/// Returns the session bound to the workspace.
pub fn prepare_submit(options: &Options) -> Result<Session> {
    let session = login(options)?;

    let depot_path = workspace::parse_depot_path(&Git.last_import_log()?)?;
    let p4 = P4::new(session.clone());
    let name = workspace::ensure(&p4, &depot_path, &ledger::work_dir()?)?;
    output::kv("workspace", &name);

    let local = GitConfig::local();
    local.set("git-p4.skipSubmitEdit", "true")?;
    local.set("notes.rewriteRef", "refs/notes/commits")?;
    debug!(workspace = %name, "git-p4 configured for submit");

    Ok(session.with_client(name))
}

/// Reviewer list of `group`, prompted and stored on first use.
pub fn reviewers(group: &str) -> Result<String> {
    let fields = FieldStore::new(GitConfig::global(), Terminal);
    Ok(fields
        .get_or_prompt(&ConfigField::reviewers(group)?)?
        .trim()
        .to_string())
}
