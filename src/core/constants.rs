//! Constants used throughout gp.
//!
//! Centralizes config keys, file names and tags.

/// Private git config section holding all gp values.
pub const CONFIG_SECTION: &str = "gp";

/// Server address (`gp.P4PORT`).
pub const HOST_KEY: &str = "P4PORT";

/// Server username (`gp.P4USER`).
pub const USER_KEY: &str = "P4USER";

/// Encrypted server password (`gp.P4PASSWD`).
pub const PASSWORD_KEY: &str = "P4PASSWD";

/// Local symmetric key, hex encoded (`gp.key`).
pub const SYMMETRIC_KEY: &str = "key";

/// Prefix of reviewer-group entries (`gp.reviewers.<group>`).
pub const REVIEWERS_PREFIX: &str = "reviewers";

/// Per-user working directory relative to HOME (~/.gp).
pub const WORK_DIR: &str = ".gp";

/// Pending changes file name inside the working directory.
pub const LEDGER_FILE: &str = "p4-changes";

/// Payload prefix of commit notes.
pub const NOTE_PREFIX: &str = "p4:";

/// Review trailer tag.
pub const REVIEW_TAG: &str = "#review";

/// Ref of the last commit imported from p4.
pub const P4_HEAD: &str = "p4/HEAD";
