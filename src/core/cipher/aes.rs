//! AES-256-GCM backend.

use aes_gcm::aead::generic_array::typenum::Unsigned;
use aes_gcm::aead::{Aead, AeadCore, KeyInit, OsRng};
use aes_gcm::{Aes256Gcm, Nonce};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use tracing::trace;
use zeroize::Zeroizing;

use super::Cipher;
use crate::error::{CipherError, Result};

/// Minimum key length in bytes; the first 32 bytes are the AES-256 key.
pub const MIN_KEY_LEN: usize = 32;

/// AES-256-GCM with a random nonce per encryption.
#[derive(Debug, Default, Clone, Copy)]
pub struct AesGcm;

impl AesGcm {
    fn build(key: &[u8]) -> Result<Aes256Gcm> {
        if key.len() < MIN_KEY_LEN {
            return Err(CipherError::KeyTooShort {
                len: key.len(),
                min: MIN_KEY_LEN,
            }
            .into());
        }
        Aes256Gcm::new_from_slice(&key[..MIN_KEY_LEN])
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()).into())
    }

    fn nonce_len() -> usize {
        <<Aes256Gcm as AeadCore>::NonceSize as Unsigned>::USIZE
    }
}

impl Cipher for AesGcm {
    fn name(&self) -> &'static str {
        "aes-256-gcm"
    }

    fn encrypt(&self, plaintext: &str, key: &[u8]) -> Result<String> {
        trace!(plaintext_len = plaintext.len(), "encrypting");

        let cipher = Self::build(key)?;
        let nonce = Aes256Gcm::generate_nonce(&mut OsRng);
        let sealed = cipher
            .encrypt(&nonce, plaintext.as_bytes())
            .map_err(|e| CipherError::EncryptionFailed(e.to_string()))?;

        let mut blob = Vec::with_capacity(nonce.len() + sealed.len());
        blob.extend_from_slice(&nonce);
        blob.extend_from_slice(&sealed);

        trace!(sealed_len = blob.len(), "encrypted");
        Ok(STANDARD.encode(blob))
    }

    fn decrypt(&self, encoded: &str, key: &[u8]) -> Result<Zeroizing<String>> {
        trace!(encoded_len = encoded.len(), "decrypting");

        let cipher = Self::build(key)?;
        let blob = STANDARD.decode(encoded).map_err(CipherError::Encoding)?;

        let nonce_len = Self::nonce_len();
        if blob.len() < nonce_len {
            return Err(CipherError::CiphertextTooShort.into());
        }

        let (nonce, sealed) = blob.split_at(nonce_len);
        let plaintext = cipher
            .decrypt(Nonce::from_slice(nonce), sealed)
            .map_err(|_| CipherError::Authentication)?;

        String::from_utf8(plaintext)
            .map(Zeroizing::new)
            .map_err(|_| CipherError::InvalidUtf8.into())
    }
}
