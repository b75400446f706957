//! Random byte generation
//!
//! Everything here draws from the operating system CSPRNG. Failure to obtain
//! entropy is reported, never papered over with a weaker source.

use rand::TryRngCore;
use rand::rngs::OsRng;

use super::aes::IV_SIZE;

/// Fill a buffer with OS entropy
pub fn fill_random(buffer: &mut [u8]) -> Result<(), String> {
    OsRng
        .try_fill_bytes(buffer)
        .map_err(|e| format!("OS random source failed: {}", e))
}

/// Generate `length` random bytes
pub fn random_bytes(length: usize) -> Result<Vec<u8>, String> {
    let mut buffer = vec![0u8; length];
    fill_random(&mut buffer)?;
    Ok(buffer)
}

/// Generate a fresh IV for AES-CBC
pub fn random_iv() -> Result<[u8; IV_SIZE], String> {
    let mut iv = [0u8; IV_SIZE];
    fill_random(&mut iv)?;
    Ok(iv)
}

/// Generate `length` random bytes as a lowercase hex string (`2 * length` chars)
pub fn random_hex(length: usize) -> Result<String, String> {
    random_bytes(length).map(hex::encode)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_random_bytes_length() {
        assert_eq!(random_bytes(0).unwrap().len(), 0);
        assert_eq!(random_bytes(16).unwrap().len(), 16);
        assert_eq!(random_bytes(64).unwrap().len(), 64);
    }

    #[test]
    fn test_random_iv_differs() {
        let a = random_iv().unwrap();
        let b = random_iv().unwrap();
        assert_ne!(a, b);
    }

    #[test]
    fn test_random_hex_format() {
        let value = random_hex(32).unwrap();
        assert_eq!(value.len(), 64);
        assert!(value.chars().all(|c| c.is_ascii_digit() || ('a'..='f').contains(&c)));
    }
}
