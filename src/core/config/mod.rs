//! Key-value configuration storage.
//!
//! All persisted settings (host, username, key, encrypted password,
//! reviewer lists) live in git config under the private `gp` section.
//! Access goes through the [`ConfigStore`] trait so the vault and the
//! field store can run against an in-memory fake in tests.
//!
//! ## Implementations
//!
//! - [`GitConfig`]: spawns `git config`, global or repository scope
//! - [`MemoryStore`]: process-local map, nothing persisted

mod field;
mod git;
mod memory;

pub use field::{ConfigField, FieldStore, HOST, PASSWORD, USERNAME};
pub use git::{GitConfig, Scope};
pub use memory::MemoryStore;

use crate::core::constants::CONFIG_SECTION;
use crate::error::Result;

/// Configuration storage trait.
pub trait ConfigStore {
    /// Read a value. `Ok(None)` means the key is not set.
    fn get(&self, key: &str) -> Result<Option<String>>;

    /// Write a value, replacing every existing value of `key`.
    fn set(&self, key: &str, value: &str) -> Result<()>;

    /// Remove a section together with its subsections. Removing a missing
    /// section succeeds.
    fn remove_section(&self, section: &str) -> Result<()>;
}

impl<T: ConfigStore + ?Sized> ConfigStore for &T {
    fn get(&self, key: &str) -> Result<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        (**self).set(key, value)
    }

    fn remove_section(&self, section: &str) -> Result<()> {
        (**self).remove_section(section)
    }
}

/// Full config key for a name inside the `gp` section.
///
/// ```
/// assert_eq!(gp::core::config::key("P4PORT"), "gp.P4PORT");
/// ```
pub fn key(name: &str) -> String {
    format!("{}.{}", CONFIG_SECTION, name)
}
