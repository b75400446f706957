//! # Encrypter
//!
//! Salted symmetric encryption for opaque byte payloads.
//!
//! ## Features
//!
//! - AES-256-CBC encryption with PKCS7 padding
//! - Per-call key derivation: `SHA-256(secret ‖ salt)`
//! - Fresh random IV per encryption, stored in a base64 envelope
//! - Random hex key and salt generation
//!
//! The scheme provides confidentiality only. There is no MAC, so tampered
//! ciphertext is not reliably detected and decryption errors must not be
//! exposed to untrusted callers in a way that distinguishes their cause.
//!
//! ## Example
//!
//! ```
//! use encrypter::CipherService;
//!
//! let service = CipherService::new("0123456789abcdef0123456789abcdef").unwrap();
//!
//! let envelope = service.encrypt(b"card number", Some(b"tenant-42")).unwrap();
//! let plaintext = service.decrypt(&envelope, Some(b"tenant-42")).unwrap();
//! assert_eq!(plaintext, b"card number");
//! ```

pub mod config;
pub mod crypto;
pub mod encrypter;
pub mod error;
pub mod service;

// Re-export main types
pub use config::{EncrypterConfig, SECRET_ENV_VAR};
pub use encrypter::Encrypter;
pub use error::{EncrypterError, Result};
pub use service::{CipherService, DEFAULT_KEY_LENGTH, DEFAULT_SALT_LENGTH};
