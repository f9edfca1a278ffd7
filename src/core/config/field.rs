//! Get-or-prompt configuration fields.

use std::borrow::Cow;

use tracing::debug;
use zeroize::Zeroizing;

use super::{key, ConfigStore};
use crate::core::constants::{HOST_KEY, PASSWORD_KEY, REVIEWERS_PREFIX, USER_KEY};
use crate::core::prompt::Prompter;
use crate::error::{ConfigError, Result};

/// A named configuration value and how to ask for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigField {
    name: Cow<'static, str>,
    title: &'static str,
    secured: bool,
}

/// Server address.
pub const HOST: ConfigField = ConfigField::new(HOST_KEY, "Server Host", false);

/// Server username.
pub const USERNAME: ConfigField = ConfigField::new(USER_KEY, "Username", false);

/// Server password; stored sealed, prompted masked.
pub const PASSWORD: ConfigField = ConfigField::new(PASSWORD_KEY, "Password", true);

impl ConfigField {
    pub const fn new(name: &'static str, title: &'static str, secured: bool) -> Self {
        Self {
            name: Cow::Borrowed(name),
            title,
            secured,
        }
    }

    /// Reviewer list of a reviewer group (`gp.reviewers.<group>`).
    ///
    /// The group becomes a git config variable name, so it has to start
    /// with an ASCII letter and hold only ASCII letters, digits and `-`.
    pub fn reviewers(group: &str) -> Result<Self> {
        if !is_group_name(group) {
            return Err(ConfigError::InvalidGroup(group.to_string()).into());
        }
        Ok(Self {
            name: Cow::Owned(format!("{}.{}", REVIEWERS_PREFIX, group)),
            title: "Reviewers",
            secured: false,
        })
    }

    /// Full config key.
    pub fn key(&self) -> String {
        key(&self.name)
    }

    pub fn title(&self) -> &'static str {
        self.title
    }

    pub fn is_secured(&self) -> bool {
        self.secured
    }
}

fn is_group_name(group: &str) -> bool {
    let mut chars = group.chars();
    chars.next().is_some_and(|c| c.is_ascii_alphabetic())
        && chars.all(|c| c.is_ascii_alphanumeric() || c == '-')
}

/// Resolves fields from a [`ConfigStore`], prompting for missing ones.
pub struct FieldStore<S, P> {
    store: S,
    prompter: P,
}

impl<S: ConfigStore, P: Prompter> FieldStore<S, P> {
    pub fn new(store: S, prompter: P) -> Self {
        Self { store, prompter }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Return the stored value of `field`, prompting and persisting on a miss.
    ///
    /// Stored values are returned as-is. Prompted input is trimmed before it
    /// is written back.
    pub fn get_or_prompt(&self, field: &ConfigField) -> Result<String> {
        self.get_or_prompt_with(field, |input| Ok(input.to_string()))
    }

    /// Like [`get_or_prompt`](Self::get_or_prompt), passing prompted input
    /// through `seal` before it is written.
    ///
    /// The sealed form is what gets stored and returned.
    pub fn get_or_prompt_with<F>(&self, field: &ConfigField, seal: F) -> Result<String>
    where
        F: FnOnce(&str) -> Result<String>,
    {
        let key = field.key();
        if let Some(value) = self.store.get(&key)? {
            debug!(key = %key, "config hit");
            return Ok(value);
        }

        debug!(key = %key, secured = field.secured, "config miss, prompting");
        let input = Zeroizing::new(self.prompter.read_line(field.title, field.secured)?);
        let value = seal(input.trim())?;
        self.store.set(&key, &value)?;
        Ok(value)
    }
}
