//! Credential vault.
//!
//! Composes the key store, the cipher and the field store into the login
//! sequence: resolve host and username, resolve or create the local key,
//! resolve the sealed password (prompting and sealing on first use),
//! decrypt it and hand it to the backend over stdin.
//!
//! Writes made before a later step fails (host, username, key) stay in
//! place; the sequence is not transactional.

use tracing::{debug, info};
use zeroize::Zeroizing;

use crate::core::cipher::{AesGcm, Cipher};
use crate::core::config::{ConfigStore, FieldStore, HOST, PASSWORD, USERNAME};
use crate::core::constants::CONFIG_SECTION;
use crate::core::keys::{self, SymmetricKey};
use crate::core::p4::{Backend, Session};
use crate::core::prompt::Prompter;
use crate::error::Result;

/// Options for [`Vault::login`].
#[derive(Debug, Default, Clone, Copy)]
pub struct LoginOptions {
    /// Remove all stored credentials before resolving them again.
    pub clear_credentials: bool,
}

/// Stored server credentials.
pub struct Vault<S, P, C = AesGcm> {
    fields: FieldStore<S, P>,
    cipher: C,
}

impl<S: ConfigStore, P: Prompter> Vault<S, P, AesGcm> {
    /// Vault using AES-256-GCM.
    pub fn new(store: S, prompter: P) -> Self {
        Self::with_cipher(store, prompter, AesGcm)
    }
}

impl<S: ConfigStore, P: Prompter, C: Cipher> Vault<S, P, C> {
    pub fn with_cipher(store: S, prompter: P, cipher: C) -> Self {
        Self {
            fields: FieldStore::new(store, prompter),
            cipher,
        }
    }

    pub fn store(&self) -> &S {
        self.fields.store()
    }

    /// Remove host, username, key and password. Clearing twice is fine.
    pub fn clear_all(&self) -> Result<()> {
        info!("clearing stored credentials");
        self.store().remove_section(CONFIG_SECTION)
    }

    /// Server host, prompted on first use.
    pub fn host(&self) -> Result<String> {
        Ok(self.fields.get_or_prompt(&HOST)?.trim().to_string())
    }

    /// Server username, prompted on first use.
    pub fn username(&self) -> Result<String> {
        Ok(self.fields.get_or_prompt(&USERNAME)?.trim().to_string())
    }

    /// Host and username as a session without a client workspace.
    pub fn session(&self) -> Result<Session> {
        let host = self.host()?;
        let user = self.username()?;
        Ok(Session::new(host, user))
    }

    /// The local key, created on first use.
    pub fn key(&self) -> Result<SymmetricKey> {
        keys::get_or_create(self.store())
    }

    /// Seal `plaintext` and store it as the password, replacing any old one.
    pub fn store_password(&self, plaintext: &str) -> Result<()> {
        let key = self.key()?;
        let sealed = self.cipher.encrypt(plaintext, key_material(&key))?;
        self.store().set(&PASSWORD.key(), &sealed)?;
        debug!(cipher = self.cipher.name(), "password stored");
        Ok(())
    }

    /// Decrypted password, prompting (masked) and sealing on first use.
    ///
    /// # Errors
    ///
    /// Returns `CipherError::Authentication` when the stored ciphertext does
    /// not verify under the local key; clear credentials to recover.
    pub fn password(&self) -> Result<Zeroizing<String>> {
        let key = self.key()?;
        let material = key_material(&key);

        let sealed = self
            .fields
            .get_or_prompt_with(&PASSWORD, |input| self.cipher.encrypt(input, material))?;

        self.cipher.decrypt(sealed.trim(), material)
    }

    /// Full login sequence. Returns the session that was logged in.
    pub fn login<B: Backend + ?Sized>(
        &self,
        options: &LoginOptions,
        backend: &B,
    ) -> Result<Session> {
        if options.clear_credentials {
            self.clear_all()?;
        }

        let session = self.session()?;
        let password = self.password()?;

        info!(host = %session.host, user = %session.user, "logging in");
        backend.login(&session, &password)?;
        Ok(session)
    }
}

fn key_material(key: &SymmetricKey) -> &[u8] {
    key.expose().trim().as_bytes()
}
