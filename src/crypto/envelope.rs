//! Envelope framing: base64(IV ‖ ciphertext)
//!
//! This layout is the persisted format. Changing it breaks every value
//! encrypted so far.

use base64::Engine as _;
use base64::engine::general_purpose::STANDARD;

use super::aes::IV_SIZE;
use crate::error::{EncrypterError, Result};

/// Prepend the IV to the ciphertext and base64-encode the result
pub fn seal(iv: &[u8; IV_SIZE], ciphertext: &[u8]) -> String {
    let mut raw = Vec::with_capacity(IV_SIZE + ciphertext.len());
    raw.extend_from_slice(iv);
    raw.extend_from_slice(ciphertext);
    STANDARD.encode(raw)
}

/// Decode an envelope and split it into IV and ciphertext
///
/// The ciphertext part is not validated here; an empty or misaligned
/// remainder is left for the cipher layer to reject.
pub fn open(envelope: &str) -> Result<([u8; IV_SIZE], Vec<u8>)> {
    let raw = STANDARD
        .decode(envelope.trim())
        .map_err(|e| EncrypterError::InvalidEncoding(e.to_string()))?;

    if raw.len() < IV_SIZE {
        return Err(EncrypterError::InvalidEncoding(format!(
            "decoded {} bytes, need at least {}",
            raw.len(),
            IV_SIZE
        )));
    }

    let (iv_part, ciphertext) = raw.split_at(IV_SIZE);
    let mut iv = [0u8; IV_SIZE];
    iv.copy_from_slice(iv_part);

    Ok((iv, ciphertext.to_vec()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_seal_layout() {
        let iv = [0u8; IV_SIZE];
        let sealed = seal(&iv, &[0xffu8; 16]);

        let raw = STANDARD.decode(&sealed).unwrap();
        assert_eq!(raw.len(), 32);
        assert_eq!(&raw[..16], &iv);
        assert_eq!(&raw[16..], &[0xffu8; 16]);
    }

    #[test]
    fn test_open_splits_iv() {
        let iv: [u8; IV_SIZE] = core::array::from_fn(|i| i as u8);
        let (opened_iv, ciphertext) = open(&seal(&iv, b"0123456789abcdef")).unwrap();

        assert_eq!(opened_iv, iv);
        assert_eq!(ciphertext, b"0123456789abcdef");
    }

    #[test]
    fn test_open_trims_whitespace() {
        let iv = [7u8; IV_SIZE];
        let sealed = format!("  {}\n", seal(&iv, &[1u8; 16]));
        assert!(open(&sealed).is_ok());
    }

    #[test]
    fn test_open_rejects_bad_base64() {
        assert!(matches!(open("not base64!!"), Err(EncrypterError::InvalidEncoding(_))));
    }

    #[test]
    fn test_open_rejects_short_input() {
        // 15 bytes decoded
        let short = STANDARD.encode([0u8; 15]);
        assert!(matches!(open(&short), Err(EncrypterError::InvalidEncoding(_))));
        assert!(matches!(open(""), Err(EncrypterError::InvalidEncoding(_))));
    }

    #[test]
    fn test_open_iv_only() {
        let (_, ciphertext) = open(&STANDARD.encode([0u8; IV_SIZE])).unwrap();
        assert!(ciphertext.is_empty());
    }
}
