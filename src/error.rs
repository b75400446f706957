//! Error types for the encrypter

use thiserror::Error;

/// Main error type for encrypter operations
#[derive(Error, Debug)]
pub enum EncrypterError {
    /// Cipher or random source backend could not be initialized
    #[error("Crypto backend unavailable: {0}")]
    CryptoUnavailable(String),

    /// Secret or generated key length is not 16, 32 or 64 bytes
    #[error("The key must be 16, 32, or 64 bytes long. Current length: {0} bytes")]
    InvalidKeyLength(usize),

    /// Generated salt length is not 16, 32 or 64 bytes
    #[error("The salt length must be 16, 32, or 64 bytes. Current length: {0} bytes")]
    InvalidSaltLength(usize),

    /// Envelope is not valid base64 or is shorter than an IV
    #[error("Invalid encoding: {0}")]
    InvalidEncoding(String),

    /// Encryption failed
    #[error("Encryption failed: {0}")]
    EncryptionFailed(String),

    /// Decryption failed. Deliberately carries no cause.
    #[error("Decryption failed. Verify that the encrypted data is correct and that you are using the proper encryption key and salt")]
    DecryptionFailed,

    /// Configuration missing or malformed
    #[error("Configuration error: {0}")]
    Config(String),
}

impl From<serde_json::Error> for EncrypterError {
    fn from(err: serde_json::Error) -> Self {
        EncrypterError::Config(err.to_string())
    }
}

/// Result type alias for encrypter operations
pub type Result<T> = std::result::Result<T, EncrypterError>;
