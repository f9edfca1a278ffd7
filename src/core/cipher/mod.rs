//! Cryptographic operations.
//!
//! Seals a single secret string under the local symmetric key.
//!
//! ## Format
//!
//! `base64(nonce || ciphertext || tag)`. Nonce and tag sizes come from the
//! AEAD construction; every encryption draws a fresh random nonce, so the
//! same plaintext never yields the same output twice.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `Cipher` trait
//! 2. Add the implementation in a new file
//! 3. Re-export from this module

use zeroize::Zeroizing;

use crate::error::Result;

mod aes;

pub use aes::{AesGcm, MIN_KEY_LEN};

/// Authenticated encryption backend.
pub trait Cipher {
    /// Encrypt `plaintext` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::KeyTooShort` if `key` is shorter than the
    /// backend requires.
    fn encrypt(&self, plaintext: &str, key: &[u8]) -> Result<String>;

    /// Decrypt and authenticate `encoded` under `key`.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Authentication` for a wrong key, truncated or
    /// tampered ciphertext. Never returns unauthenticated plaintext.
    fn decrypt(&self, encoded: &str, key: &[u8]) -> Result<Zeroizing<String>>;

    /// Backend name for logs.
    fn name(&self) -> &'static str;
}

/// Encrypt with the default AES-256-GCM backend.
pub fn encrypt(plaintext: &str, key: &[u8]) -> Result<String> {
    AesGcm.encrypt(plaintext, key)
}

/// Decrypt with the default AES-256-GCM backend.
pub fn decrypt(encoded: &str, key: &[u8]) -> Result<Zeroizing<String>> {
    AesGcm.decrypt(encoded, key)
}
