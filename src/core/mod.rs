//! Core library components.
//!
//! This module contains the credential vault, the change correlation
//! bookkeeping and the adapters for the `git` and `p4` command-line clients.

pub mod cipher;
pub mod config;
pub mod constants;
pub mod git;
pub mod keys;
pub mod ledger;
pub mod notes;
pub mod p4;
pub mod process;
pub mod prompt;
pub mod review;
pub mod types;
pub mod vault;
pub mod workspace;

#[cfg(test)]
pub(crate) mod testing;
