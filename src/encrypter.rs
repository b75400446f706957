//! Encrypter trait

use crate::error::Result;
use crate::service::{CipherService, DEFAULT_KEY_LENGTH, DEFAULT_SALT_LENGTH};

/// Salted encrypt/decrypt plus key and salt generation
///
/// Implemented by [`CipherService`]; depend on this trait where the concrete
/// cipher should stay swappable.
pub trait Encrypter {
    /// Encrypt `data`, returning a printable envelope
    fn encrypt(&self, data: &[u8], salt: Option<&[u8]>) -> Result<String>;

    /// Recover the plaintext from an envelope produced by [`Encrypter::encrypt`]
    fn decrypt(&self, data: &str, salt: Option<&[u8]>) -> Result<Vec<u8>>;

    /// Random hex-encoded key of `length` bytes
    fn generate_encryption_key(&self, length: usize) -> Result<String>;

    /// Random hex-encoded salt of `length` bytes
    fn generate_salt(&self, length: usize) -> Result<String>;

    /// Random hex-encoded key of [`DEFAULT_KEY_LENGTH`] bytes
    fn generate_default_encryption_key(&self) -> Result<String> {
        self.generate_encryption_key(DEFAULT_KEY_LENGTH)
    }

    /// Random hex-encoded salt of [`DEFAULT_SALT_LENGTH`] bytes
    fn generate_default_salt(&self) -> Result<String> {
        self.generate_salt(DEFAULT_SALT_LENGTH)
    }
}

impl Encrypter for CipherService {
    fn encrypt(&self, data: &[u8], salt: Option<&[u8]>) -> Result<String> {
        CipherService::encrypt(self, data, salt)
    }

    fn decrypt(&self, data: &str, salt: Option<&[u8]>) -> Result<Vec<u8>> {
        CipherService::decrypt(self, data, salt)
    }

    fn generate_encryption_key(&self, length: usize) -> Result<String> {
        CipherService::generate_encryption_key(length)
    }

    fn generate_salt(&self, length: usize) -> Result<String> {
        CipherService::generate_salt(length)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roundtrip(encrypter: &dyn Encrypter) -> Vec<u8> {
        let salt = encrypter.generate_salt(16).unwrap();
        let envelope = encrypter.encrypt(b"through the trait", Some(salt.as_bytes())).unwrap();
        encrypter.decrypt(&envelope, Some(salt.as_bytes())).unwrap()
    }

    #[test]
    fn test_trait_object_roundtrip() {
        let service = CipherService::new(vec![9u8; 16]).unwrap();
        assert_eq!(roundtrip(&service), b"through the trait");
    }

    #[test]
    fn test_trait_generation() {
        let service = CipherService::new(vec![9u8; 64]).unwrap();
        assert_eq!(Encrypter::generate_encryption_key(&service, 64).unwrap().len(), 128);
        assert!(Encrypter::generate_salt(&service, 12).is_err());
    }

    #[test]
    fn test_trait_object_defaults() {
        let service = CipherService::new(vec![9u8; 32]).unwrap();
        let encrypter: &dyn Encrypter = &service;
        assert_eq!(encrypter.generate_default_encryption_key().unwrap().len(), 64);
        assert_eq!(encrypter.generate_default_salt().unwrap().len(), 32);
    }
}
