//! Local symmetric key.
//!
//! One key per installation, stored hex encoded in the global git config
//! (`gp.key`) and reused for every encrypt/decrypt call. Never rotated
//! automatically; clearing credentials removes it along with the password.

use rand::rngs::OsRng;
use rand::RngCore;
use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::config::{self, ConfigStore};
use crate::core::constants::SYMMETRIC_KEY;
use crate::error::{CipherError, Result};

/// Number of random bytes behind a generated key.
const KEY_BYTES: usize = 16;

/// Key material as stored in config.
///
/// A generated key is 16 random bytes hex encoded to 32 ASCII characters,
/// which are used directly as the 32-byte AES-256 key.
pub struct SymmetricKey(Zeroizing<String>);

impl SymmetricKey {
    /// Generate a fresh key from the OS random source.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Random` if the OS random source fails.
    pub fn generate() -> Result<Self> {
        let mut bytes = Zeroizing::new([0u8; KEY_BYTES]);
        OsRng
            .try_fill_bytes(&mut bytes[..])
            .map_err(|e| CipherError::Random(e.to_string()))?;
        Ok(Self(Zeroizing::new(hex::encode(&bytes[..]))))
    }

    /// Wrap a stored value. Length is checked at encryption time.
    pub fn from_stored(value: String) -> Self {
        Self(Zeroizing::new(value))
    }

    pub fn expose(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Debug for SymmetricKey {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SymmetricKey")
            .field("len", &self.0.len())
            .finish_non_exhaustive()
    }
}

/// Return the stored key, generating and persisting one on first use.
///
/// The stored value is returned verbatim.
///
/// # Errors
///
/// Propagates config store failures and random source failures.
pub fn get_or_create<S: ConfigStore + ?Sized>(store: &S) -> Result<SymmetricKey> {
    let key = config::key(SYMMETRIC_KEY);

    if let Some(stored) = store.get(&key)? {
        debug!(len = stored.len(), "using stored key");
        return Ok(SymmetricKey::from_stored(stored));
    }

    let generated = SymmetricKey::generate()?;
    store.set(&key, generated.expose())?;
    info!("generated local key");

    Ok(generated)
}
