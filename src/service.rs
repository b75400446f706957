//! Salted symmetric encryption service
//!
//! [`CipherService`] holds one validated secret and derives a fresh AES-256 key
//! per call from `SHA-256(secret ‖ salt)`. Each encryption uses a new random IV,
//! emitted as `base64(IV ‖ ciphertext)`.
//!
//! There is no integrity tag. Decrypting with the wrong salt fails padding
//! validation in the overwhelming majority of cases, but roughly 1 in 256
//! attempts can still yield garbage bytes instead of an error. Callers that
//! expose decryption to attacker-controlled input must not reveal failure
//! details or timing.

use std::fmt;

use log::{debug, trace};

use crate::crypto::{aes, envelope, key, random};
use crate::error::{EncrypterError, Result};

/// Default length in bytes for [`CipherService::generate_encryption_key`]
pub const DEFAULT_KEY_LENGTH: usize = 32;

/// Default length in bytes for [`CipherService::generate_salt`]
pub const DEFAULT_SALT_LENGTH: usize = 16;

/// AES-256-CBC encryption bound to a single secret
#[derive(Clone)]
pub struct CipherService {
    secret: Vec<u8>,
}

impl CipherService {
    /// Create a service from a 16, 32 or 64 byte secret
    ///
    /// The OS random source is probed once here; if it cannot deliver bytes the
    /// service is not constructed.
    pub fn new(secret: impl Into<Vec<u8>>) -> Result<Self> {
        let secret = secret.into();

        if !key::is_valid_length(secret.len()) {
            return Err(EncrypterError::InvalidKeyLength(secret.len()));
        }

        let mut probe = [0u8; 1];
        random::fill_random(&mut probe).map_err(EncrypterError::CryptoUnavailable)?;

        debug!("cipher service created with {}-byte secret", secret.len());
        Ok(Self { secret })
    }

    /// Length of the secret in bytes
    pub fn secret_len(&self) -> usize {
        self.secret.len()
    }

    /// Encrypt `data` and return a base64 envelope
    pub fn encrypt(&self, data: &[u8], salt: Option<&[u8]>) -> Result<String> {
        let iv = random::random_iv().map_err(EncrypterError::EncryptionFailed)?;
        let derived = key::derive_key(&self.secret, salt);

        let ciphertext = aes::encrypt(data, &derived, &iv)?;
        debug!("encrypted {} bytes into {} bytes", data.len(), ciphertext.len());

        Ok(envelope::seal(&iv, &ciphertext))
    }

    /// Decrypt an envelope produced by [`CipherService::encrypt`]
    ///
    /// `salt` must match the one used to encrypt.
    pub fn decrypt(&self, data: &str, salt: Option<&[u8]>) -> Result<Vec<u8>> {
        let (iv, ciphertext) = envelope::open(data)?;
        let derived = key::derive_key(&self.secret, salt);

        let plaintext = aes::decrypt(&ciphertext, &derived, &iv).inspect_err(|_| {
            debug!("decryption of {}-byte ciphertext failed", ciphertext.len());
        })?;

        debug!("decrypted {} bytes into {} bytes", ciphertext.len(), plaintext.len());
        Ok(plaintext)
    }

    /// Encrypt a UTF-8 string with an optional string salt
    pub fn encrypt_str(&self, data: &str, salt: Option<&str>) -> Result<String> {
        self.encrypt(data.as_bytes(), salt.map(str::as_bytes))
    }

    /// Decrypt an envelope whose plaintext is expected to be UTF-8
    pub fn decrypt_str(&self, data: &str, salt: Option<&str>) -> Result<String> {
        let plaintext = self.decrypt(data, salt.map(str::as_bytes))?;
        String::from_utf8(plaintext).map_err(|_| EncrypterError::DecryptionFailed)
    }

    /// Generate a random hex-encoded key of `length` bytes (16, 32 or 64)
    pub fn generate_encryption_key(length: usize) -> Result<String> {
        if !key::is_valid_length(length) {
            return Err(EncrypterError::InvalidKeyLength(length));
        }
        trace!("generating {}-byte encryption key", length);
        random::random_hex(length).map_err(EncrypterError::CryptoUnavailable)
    }

    /// Generate a random hex-encoded salt of `length` bytes (16, 32 or 64)
    ///
    /// Same algorithm as [`CipherService::generate_encryption_key`]; only the
    /// error kind differs.
    pub fn generate_salt(length: usize) -> Result<String> {
        if !key::is_valid_length(length) {
            return Err(EncrypterError::InvalidSaltLength(length));
        }
        trace!("generating {}-byte salt", length);
        random::random_hex(length).map_err(EncrypterError::CryptoUnavailable)
    }

    /// [`CipherService::generate_encryption_key`] with [`DEFAULT_KEY_LENGTH`]
    pub fn generate_default_encryption_key() -> Result<String> {
        Self::generate_encryption_key(DEFAULT_KEY_LENGTH)
    }

    /// [`CipherService::generate_salt`] with [`DEFAULT_SALT_LENGTH`]
    pub fn generate_default_salt() -> Result<String> {
        Self::generate_salt(DEFAULT_SALT_LENGTH)
    }
}

impl fmt::Debug for CipherService {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CipherService")
            .field("secret", &"<redacted>")
            .finish()
    }
}
