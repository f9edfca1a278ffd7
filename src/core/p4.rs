//! Perforce command-line client.
//!
//! Connection settings travel as child-process environment (`P4PORT`,
//! `P4USER`, `P4CLIENT`) instead of being set on the gp process itself.
//! Output of listing commands goes through small dedicated parsers so an
//! unexpected format is a typed error rather than an empty match.

use std::process::Command;

use tracing::debug;

use crate::core::process;
use crate::core::types::{ChangeId, WorkspaceName};
use crate::error::{ParseError, Result};

/// Server connection settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub host: String,
    pub user: String,
    pub client: Option<WorkspaceName>,
}

impl Session {
    pub fn new(host: impl Into<String>, user: impl Into<String>) -> Self {
        Self {
            host: host.into(),
            user: user.into(),
            client: None,
        }
    }

    pub fn with_client(mut self, client: impl Into<WorkspaceName>) -> Self {
        self.client = Some(client.into());
        self
    }

    /// Set the connection variables on a child command.
    pub fn apply(&self, cmd: &mut Command) {
        cmd.env("P4PORT", &self.host).env("P4USER", &self.user);
        if let Some(client) = &self.client {
            cmd.env("P4CLIENT", client);
        }
    }
}

/// Non-interactive backend login.
pub trait Backend {
    /// Authenticate `session` with `password`.
    ///
    /// Implementations must not pass the password as an argument or through
    /// the environment.
    fn login(&self, session: &Session, password: &str) -> Result<()>;
}

/// [`Backend`] that runs `p4 login`.
#[derive(Debug, Default, Clone, Copy)]
pub struct P4Backend;

impl Backend for P4Backend {
    fn login(&self, session: &Session, password: &str) -> Result<()> {
        P4::new(session.clone()).login(password)
    }
}

/// `p4` invocations bound to a session.
#[derive(Debug, Clone)]
pub struct P4 {
    session: Session,
}

impl P4 {
    pub fn new(session: Session) -> Self {
        Self { session }
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    fn command(&self) -> Command {
        let mut cmd = Command::new("p4");
        self.session.apply(&mut cmd);
        cmd
    }

    /// `p4 login` with the password written to stdin.
    pub fn login(&self, password: &str) -> Result<()> {
        process::ensure_installed("p4")?;
        debug!(host = %self.session.host, user = %self.session.user, "p4 login");

        let mut cmd = self.command();
        cmd.arg("login");
        process::run_with_input(&mut cmd, password)
    }

    /// Shelved change lists of `workspace`, in listing order (newest first).
    pub fn shelved_changes(&self, workspace: &str) -> Result<Vec<ChangeId>> {
        let mut cmd = self.command();
        cmd.args(["changes", "-s", "shelved", "-c", workspace]);
        let out = process::output(&mut cmd)?;
        Ok(parse_changes(&out))
    }

    /// Client workspaces owned by `user`.
    pub fn clients(&self, user: &str) -> Result<Vec<WorkspaceName>> {
        let mut cmd = self.command();
        cmd.args(["-ztag", "clients", "-u", user]);
        let out = process::output(&mut cmd)?;
        parse_ztag_clients(&out)
    }

    /// Whether `path` names a stream depot path.
    pub fn is_stream(&self, path: &str) -> Result<bool> {
        let mut cmd = self.command();
        cmd.args(["streams", path]);
        process::succeeds(&mut cmd)
    }

    /// `p4 client -i` with the client spec written to stdin.
    pub fn create_client(&self, spec: &str) -> Result<()> {
        let mut cmd = self.command();
        cmd.args(["client", "-i"]);
        process::run_with_input(&mut cmd, spec)
    }
}

/// Extract change numbers from `p4 changes` output.
///
/// Lines look like `Change 1042 on 2024/01/31 by alice@ws *pending* 'msg'`;
/// any other line is ignored.
pub fn parse_changes(output: &str) -> Vec<ChangeId> {
    output
        .lines()
        .filter_map(|line| {
            let rest = line.strip_prefix("Change ")?;
            let (number, tail) = rest.split_once(' ')?;
            if number.is_empty() || !number.bytes().all(|b| b.is_ascii_digit()) {
                return None;
            }
            tail.starts_with("on ").then(|| number.to_string())
        })
        .collect()
}

/// Extract client names from `p4 -ztag clients` output.
///
/// Tagged output is made of `... <field> <value>` lines; every `client`
/// field is a workspace name. Empty output means no clients.
///
/// # Errors
///
/// Returns `ParseError::PatternNotFound` when the output is not empty but
/// contains no tagged fields at all.
pub fn parse_ztag_clients(output: &str) -> Result<Vec<WorkspaceName>> {
    if output.trim().is_empty() {
        return Ok(Vec::new());
    }

    let mut tagged = false;
    let mut clients = Vec::new();
    for line in output.lines() {
        let Some(field) = line.strip_prefix("...") else {
            continue;
        };
        let field = field.trim_start();
        let (name, value) = field.split_once(char::is_whitespace).unwrap_or((field, ""));
        if name.is_empty() {
            continue;
        }
        tagged = true;
        if name == "client" {
            clients.push(value.trim().to_string());
        }
    }

    if !tagged {
        return Err(ParseError::PatternNotFound("p4 clients").into());
    }
    Ok(clients)
}
