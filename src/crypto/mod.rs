//! Cryptographic primitives
//!
//! AES-256-CBC with PKCS7 padding, SHA-256 key derivation from a secret and
//! salt, OS-backed randomness and the base64 envelope format.

pub mod aes;
pub mod envelope;
pub mod key;
pub mod random;

pub use self::aes::{BLOCK_SIZE, IV_SIZE};
pub use self::key::{KEY_LENGTH, VALID_KEY_LENGTHS, derive_key, is_valid_length};
pub use self::random::{random_bytes, random_hex};
