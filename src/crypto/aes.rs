//! AES-256-CBC encryption and decryption
//!
//! Raw cipher layer: PKCS7 padding, caller-supplied key and IV.
//! Envelope framing and key derivation live elsewhere.

use aes::Aes256;
use block_padding::Pkcs7;
use cbc::cipher::{BlockDecryptMut, BlockEncryptMut, KeyIvInit};
use cbc::{Decryptor, Encryptor};

use super::key::KEY_LENGTH;
use crate::error::{EncrypterError, Result};

/// IV size for AES-CBC (16 bytes = 128 bits)
pub const IV_SIZE: usize = 16;

/// AES block size
pub const BLOCK_SIZE: usize = 16;

type Aes256CbcEnc = Encryptor<Aes256>;
type Aes256CbcDec = Decryptor<Aes256>;

/// Encrypt plaintext using AES-256-CBC with PKCS7 padding
///
/// The output is always a non-empty multiple of [`BLOCK_SIZE`]; an empty
/// plaintext encrypts to one full padding block.
pub fn encrypt(plaintext: &[u8], key: &[u8; KEY_LENGTH], iv: &[u8; IV_SIZE]) -> Result<Vec<u8>> {
    let encryptor = Aes256CbcEnc::new_from_slices(key, iv)
        .map_err(|e| EncrypterError::EncryptionFailed(format!("cipher init: {}", e)))?;

    Ok(encryptor.encrypt_padded_vec_mut::<Pkcs7>(plaintext))
}

/// Decrypt AES-256-CBC ciphertext and strip PKCS7 padding
///
/// Every failure collapses into [`EncrypterError::DecryptionFailed`].
pub fn decrypt(ciphertext: &[u8], key: &[u8; KEY_LENGTH], iv: &[u8; IV_SIZE]) -> Result<Vec<u8>> {
    if ciphertext.is_empty() || ciphertext.len() % BLOCK_SIZE != 0 {
        return Err(EncrypterError::DecryptionFailed);
    }

    let decryptor = Aes256CbcDec::new_from_slices(key, iv)
        .map_err(|_| EncrypterError::DecryptionFailed)?;

    decryptor
        .decrypt_padded_vec_mut::<Pkcs7>(ciphertext)
        .map_err(|_| EncrypterError::DecryptionFailed)
}
