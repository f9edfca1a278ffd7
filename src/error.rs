//! Error types.
//!
//! One enum per failure class, wrapped by the top-level [`Error`].

use std::path::PathBuf;

use thiserror::Error;

/// Top-level error returned by every fallible operation.
#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Cipher(#[from] CipherError),

    #[error(transparent)]
    Process(#[from] ProcessError),

    #[error(transparent)]
    Parse(#[from] ParseError),

    #[error(transparent)]
    Ledger(#[from] LedgerError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration store and prompt failures.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read config value {key}: {reason}")]
    Read { key: String, reason: String },

    #[error("failed to write config value {key}: {reason}")]
    Write { key: String, reason: String },

    #[error("failed to remove config section {section}: {reason}")]
    RemoveSection { section: String, reason: String },

    #[error("failed to read {title}: {reason}")]
    Prompt { title: String, reason: String },

    #[error("invalid reviewer group {0:?}: use letters, digits and '-', starting with a letter")]
    InvalidGroup(String),

    #[error("unable to determine home directory")]
    NoHomeDir,
}

/// Key and AEAD failures.
#[derive(Error, Debug)]
pub enum CipherError {
    #[error("key is too short: {len} bytes, need at least {min}")]
    KeyTooShort { len: usize, min: usize },

    #[error("ciphertext too short")]
    CiphertextTooShort,

    #[error("ciphertext is not valid base64: {0}")]
    Encoding(#[from] base64::DecodeError),

    #[error("stored secret failed authentication (wrong key or tampered ciphertext)")]
    Authentication,

    #[error("decrypted secret is not valid UTF-8")]
    InvalidUtf8,

    #[error("encryption failed: {0}")]
    EncryptionFailed(String),

    #[error("random source unavailable: {0}")]
    Random(String),
}

/// External process failures (git, p4).
#[derive(Error, Debug)]
pub enum ProcessError {
    #[error("{program} not found on PATH")]
    NotInstalled { program: String },

    #[error("failed to spawn {command}: {source}")]
    Spawn {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} exited with {status}")]
    Exited { command: String, status: String },

    #[error("{command} failed ({status}): {stderr}")]
    Failed {
        command: String,
        status: String,
        stderr: String,
    },

    #[error("failed to write stdin of {command}: {source}")]
    Stdin {
        command: String,
        #[source]
        source: std::io::Error,
    },

    #[error("{command} produced non UTF-8 output")]
    InvalidOutput { command: String },
}

/// Unexpected shape of ledger entries or tool output.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("invalid change list id in pending changes: {0:?}")]
    InvalidChange(String),

    #[error("couldn't find {0}")]
    PatternNotFound(&'static str),
}

/// Pending-changes file failures.
#[derive(Error, Debug)]
pub enum LedgerError {
    #[error("failed to read pending changes {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to write pending changes {}: {source}", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
