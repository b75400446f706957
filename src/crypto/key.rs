//! Key derivation for AES-256 encryption
//!
//! The encryption key is the raw SHA-256 digest of `secret ‖ salt`.
//! A missing salt is treated as an empty byte string, so `None` and
//! `Some(b"")` derive the same key.

use sha2::{Digest, Sha256};

/// Key length for AES-256 (32 bytes = 256 bits), equal to the SHA-256 digest size
pub const KEY_LENGTH: usize = 32;

/// Byte lengths accepted for secrets, generated keys and generated salts
pub const VALID_KEY_LENGTHS: [usize; 3] = [16, 32, 64];

/// Check a byte length against [`VALID_KEY_LENGTHS`]
pub fn is_valid_length(length: usize) -> bool {
    VALID_KEY_LENGTHS.contains(&length)
}

/// Derive the per-call AES-256 key from the secret and optional salt
pub fn derive_key(secret: &[u8], salt: Option<&[u8]>) -> [u8; KEY_LENGTH] {
    let mut hasher = Sha256::new();
    hasher.update(secret);
    hasher.update(salt.unwrap_or_default());

    let mut key = [0u8; KEY_LENGTH];
    key.copy_from_slice(&hasher.finalize());
    key
}
