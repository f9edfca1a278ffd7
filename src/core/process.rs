//! External process execution.
//!
//! Every git and p4 invocation goes through these helpers so failures carry
//! the command line and exit status. Calls block until the child exits.

use std::io::Write;
use std::process::{Command, Stdio};

use tracing::debug;

use crate::error::{ProcessError, Result};

/// Render a command as `program arg1 arg2` for messages and logs.
pub fn describe(cmd: &Command) -> String {
    let mut line = cmd.get_program().to_string_lossy().into_owned();
    for arg in cmd.get_args() {
        line.push(' ');
        line.push_str(&arg.to_string_lossy());
    }
    line
}

/// Quote `value` as a single POSIX shell word.
///
/// ```
/// assert_eq!(gp::core::process::shell_quote("it's"), r"'it'\''s'");
/// ```
pub fn shell_quote(value: &str) -> String {
    format!("'{}'", value.replace('\'', r"'\''"))
}

/// Fail early with a readable error when `program` is not on PATH.
pub fn ensure_installed(program: &str) -> Result<()> {
    which::which(program).map_err(|_| ProcessError::NotInstalled {
        program: program.to_string(),
    })?;
    Ok(())
}

/// Run a command with inherited stdio, echoing it first.
pub fn run(cmd: &mut Command) -> Result<()> {
    let line = describe(cmd);
    eprintln!("$ {}", line);
    debug!(command = %line, "running");

    let status = cmd
        .status()
        .map_err(|source| ProcessError::Spawn {
            command: line.clone(),
            source,
        })?;

    if !status.success() {
        return Err(ProcessError::Exited {
            command: line,
            status: status.to_string(),
        }
        .into());
    }
    Ok(())
}

/// Run a command and return its stdout.
///
/// Stderr is captured and included in the error on non-zero exit.
pub fn output(cmd: &mut Command) -> Result<String> {
    let line = describe(cmd);
    debug!(command = %line, "capturing output");

    let output = cmd
        .stdin(Stdio::null())
        .output()
        .map_err(|source| ProcessError::Spawn {
            command: line.clone(),
            source,
        })?;

    if !output.status.success() {
        return Err(ProcessError::Failed {
            command: line,
            status: output.status.to_string(),
            stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
        }
        .into());
    }

    String::from_utf8(output.stdout)
        .map_err(|_| ProcessError::InvalidOutput { command: line }.into())
}

/// Run a command and report whether it exited successfully.
///
/// Spawn failures are still errors; a non-zero exit is `Ok(false)`.
pub fn succeeds(cmd: &mut Command) -> Result<bool> {
    let line = describe(cmd);
    debug!(command = %line, "checking status");

    let status = cmd
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .status()
        .map_err(|source| ProcessError::Spawn {
            command: line,
            source,
        })?;
    Ok(status.success())
}

/// Run a command feeding `input` through its stdin.
///
/// Used for secrets and specs that must never appear in the argument list.
pub fn run_with_input(cmd: &mut Command, input: &str) -> Result<()> {
    let line = describe(cmd);
    eprintln!("$ {}", line);
    debug!(command = %line, input_len = input.len(), "running with stdin");

    let mut child = cmd
        .stdin(Stdio::piped())
        .spawn()
        .map_err(|source| ProcessError::Spawn {
            command: line.clone(),
            source,
        })?;

    if let Some(mut stdin) = child.stdin.take() {
        stdin
            .write_all(input.as_bytes())
            .map_err(|source| ProcessError::Stdin {
                command: line.clone(),
                source,
            })?;
        // stdin is dropped here so the child sees EOF
    }

    let status = child.wait().map_err(|source| ProcessError::Spawn {
        command: line.clone(),
        source,
    })?;

    if !status.success() {
        return Err(ProcessError::Exited {
            command: line,
            status: status.to_string(),
        }
        .into());
    }
    Ok(())
}
