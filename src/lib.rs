//! gp - Perforce helper for git-p4 users.
//!
//! # Architecture
//!
//! ```text
//! src/
//! ├── cli/              # Command-line interface
//! │   ├── login         # Store credentials and log in
//! │   ├── logout        # Forget stored credentials
//! │   ├── clone         # git p4 clone
//! │   ├── rebase        # git p4 rebase
//! │   ├── submit        # git p4 submit
//! │   ├── shelve        # git p4 submit --shelve + review bookkeeping
//! │   ├── review        # Review tag rewriting on HEAD
//! │   └── completions   # Shell completions
//! └── core/             # Core library components
//!     ├── config/       # git config storage and prompted fields
//!     ├── cipher/       # Password sealing
//!     │   ├── mod       # Cipher trait
//!     │   └── aes       # AES-256-GCM implementation
//!     ├── keys          # Local symmetric key
//!     ├── vault         # Credential vault and login sequence
//!     ├── ledger        # Pending changes file
//!     ├── notes         # Commit notes
//!     ├── review        # Review tag state machine
//!     ├── workspace     # p4 client workspace
//!     ├── git           # git adapter
//!     └── p4            # p4 adapter
//! ```
//!
//! # Features
//!
//! - Server password sealed at rest with a locally generated key
//! - Non-interactive `p4 login` with the password on stdin
//! - Commits annotated with the change lists they became
//! - `#review` trailers kept in step with shelved change lists

pub mod cli;
pub mod core;
pub mod error;

/// Re-exports for the benchmarks.
#[doc(hidden)]
pub mod bench {
    pub use crate::core::cipher::{AesGcm, Cipher};
}
