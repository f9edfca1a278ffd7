//! Backend client workspace for the current repository.
//!
//! The workspace is derived from the depot path recorded in the trailer of
//! the last commit imported by `git p4` and is created once per user and
//! depot path. Its root lives under `~/.gp/<name>`.

use std::path::{Path, PathBuf};

use tracing::{debug, info};

use crate::core::p4::P4;
use crate::core::types::WorkspaceName;
use crate::error::{ParseError, Result};

const CLIENT_OPTIONS: &str = "allwrite noclobber compress unlocked nomodtime rmdir";

/// Depot path from the `[git-p4: depot-paths = "...": change = N]` trailer.
///
/// # Errors
///
/// `ParseError::PatternNotFound` when the log carries no trailer, or the
/// trailer has no `depot-paths` entry.
pub fn parse_depot_path(log: &str) -> Result<String> {
    let start = log
        .find("[git-p4:")
        .ok_or(ParseError::PatternNotFound("git-p4 logs"))?;
    let body = &log[start + "[git-p4:".len()..];
    let end = body
        .find(']')
        .ok_or(ParseError::PatternNotFound("git-p4 logs"))?;

    body[..end]
        .split(':')
        .filter_map(|entry| entry.split_once('='))
        .find(|(name, _)| name.trim() == "depot-paths")
        .map(|(_, value)| value.trim_matches(|c| c == ' ' || c == '"').to_string())
        .filter(|path| !path.is_empty())
        .ok_or_else(|| ParseError::PatternNotFound("depot path").into())
}

/// `alice` + `//depot/proj/` gives `alice_depot_proj`.
pub fn workspace_name(user: &str, depot_path: &str) -> WorkspaceName {
    let inner = depot_path.trim_end_matches('/');
    let inner = inner.strip_prefix('/').unwrap_or(inner);
    format!("{}{}", user, inner.replace('/', "_"))
}

/// Client spec fed to `p4 client -i`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientSpec {
    pub name: WorkspaceName,
    pub owner: String,
    pub root: PathBuf,
    pub depot_path: String,
    pub stream: Option<String>,
}

impl ClientSpec {
    pub fn new(owner: &str, depot_path: &str, work_dir: &Path) -> Self {
        let name = workspace_name(owner, depot_path);
        Self {
            root: work_dir.join(&name),
            name,
            owner: owner.to_string(),
            depot_path: format!("{}/", depot_path.trim_end_matches('/')),
            stream: None,
        }
    }

    /// Depot path without its trailing slash, as `p4 streams` expects it.
    pub fn stream_path(&self) -> &str {
        self.depot_path.trim_end_matches('/')
    }

    pub fn with_stream(mut self, is_stream: bool) -> Self {
        self.stream = is_stream.then(|| self.stream_path().to_string());
        self
    }

    /// The single view line mapping the depot path into the workspace.
    pub fn view(&self) -> String {
        let relative = self.depot_path.trim_start_matches('/');
        format!("\t{}... //{}/{}...", self.depot_path, self.name, relative)
    }

    pub fn render(&self) -> String {
        let mut spec = format!(
            "Client: {}\nOwner: {}\nRoot: {}\nOptions: {}\n",
            self.name,
            self.owner,
            self.root.display(),
            CLIENT_OPTIONS
        );
        if let Some(stream) = &self.stream {
            spec.push_str(&format!("Stream: {}\n", stream));
        }
        spec.push_str("View:\n");
        spec.push_str(&self.view());
        spec.push('\n');
        spec
    }
}

/// Reuse the user's workspace for `depot_path`, creating it when missing.
pub fn ensure(p4: &P4, depot_path: &str, work_dir: &Path) -> Result<WorkspaceName> {
    let user = p4.session().user.clone();
    let spec = ClientSpec::new(&user, depot_path, work_dir);

    if p4.clients(&user)?.contains(&spec.name) {
        debug!(workspace = %spec.name, "workspace exists");
        return Ok(spec.name);
    }

    let is_stream = p4.is_stream(spec.stream_path())?;
    let spec = spec.with_stream(is_stream);
    info!(workspace = %spec.name, stream = is_stream, "creating workspace");
    p4.create_client(&spec.render())?;
    Ok(spec.name)
}
