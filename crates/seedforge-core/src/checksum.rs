//! Checksum computation and placement.
//!
//! The entropy bytes are hashed and the digest's most-significant
//! `checksum_bits` are appended as the tail of the buffer, giving downstream
//! wallet software a way to detect transcription errors. SHA-256 is the
//! default; any digest with at least `checksum_bits` of output plugs in
//! through the `sha2::Digest` trait.

use log::debug;
use sha2::{Digest, Sha256};

use crate::bits::BitBuf;
use crate::error::MnemonicError;
use crate::scheme::PhraseLength;

/// Append the SHA-256 checksum suffix to an entropy buffer, producing the
/// combined buffer of `total_bits` bits.
pub fn append_checksum(
    entropy: &BitBuf,
    length: PhraseLength,
) -> Result<BitBuf, MnemonicError> {
    append_checksum_with::<Sha256>(entropy, length)
}

/// [`append_checksum`] with a caller-chosen hash function.
pub fn append_checksum_with<D: Digest>(
    entropy: &BitBuf,
    length: PhraseLength,
) -> Result<BitBuf, MnemonicError> {
    if entropy.len() != length.entropy_bits() {
        return Err(MnemonicError::invariant(format!(
            "entropy buffer holds {} bits, expected {}",
            entropy.len(),
            length.entropy_bits()
        )));
    }

    let digest = D::digest(entropy.as_bytes());
    let checksum = checksum_bits(digest.as_slice(), length.checksum_bits());
    debug!(
        "appended {}-bit checksum to {}-bit entropy",
        checksum.len(),
        entropy.len()
    );

    let mut combined = entropy.clone();
    combined.extend_from(&checksum);
    Ok(combined)
}

/// Top `n_bits` of a digest as a bit buffer.
fn checksum_bits(digest: &[u8], n_bits: usize) -> BitBuf {
    let mut buf = BitBuf::with_capacity(n_bits);
    for i in 0..n_bits {
        buf.push((digest[i / 8] >> (7 - (i % 8))) & 1 == 1);
    }
    buf
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_zero_entropy_checksum_is_0x66() {
        // SHA-256 of 32 zero bytes starts 0x66.
        let entropy = BitBuf::from_bytes(&[0u8; 32]);
        let combined = append_checksum(&entropy, PhraseLength::W24).unwrap();
        assert_eq!(combined.len(), 264);
        assert_eq!(combined.slice_u16(256, 8), 0x66);
    }

    #[test]
    fn test_all_ff_entropy_checksum_is_0xaf() {
        // SHA-256 of 32 0xFF bytes starts 0xAF.
        let entropy = BitBuf::from_bytes(&[0xFFu8; 32]);
        let combined = append_checksum(&entropy, PhraseLength::W24).unwrap();
        assert_eq!(combined.slice_u16(256, 8), 0xAF);
    }

    #[test]
    fn test_checksum_is_deterministic() {
        let entropy = BitBuf::from_bytes(&[0x5Au8; 32]);
        let a = append_checksum(&entropy, PhraseLength::W24).unwrap();
        let b = append_checksum(&entropy, PhraseLength::W24).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_combined_preserves_entropy_prefix() {
        let entropy = BitBuf::from_bytes(&[0xA5u8; 32]);
        let combined = append_checksum(&entropy, PhraseLength::W24).unwrap();
        for i in 0..entropy.len() {
            assert_eq!(combined.get(i), entropy.get(i));
        }
    }

    #[test]
    fn test_partial_byte_checksum_for_12_words() {
        // SHA-256 of 16 zero bytes starts 0x37; W12 keeps the top 4 bits.
        let entropy = BitBuf::from_bytes(&[0u8; 16]);
        let combined = append_checksum(&entropy, PhraseLength::W12).unwrap();
        assert_eq!(combined.len(), 132);
        assert_eq!(combined.slice_u16(128, 4), 0x3);
    }

    #[test]
    fn test_wrong_entropy_length_is_invariant_violation() {
        let entropy = BitBuf::from_bytes(&[0u8; 16]);
        let err = append_checksum(&entropy, PhraseLength::W24).unwrap_err();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_alternate_digest_differs_from_sha256() {
        let entropy = BitBuf::from_bytes(&[0x11u8; 32]);
        let sha256 = append_checksum_with::<Sha256>(&entropy, PhraseLength::W24).unwrap();
        let sha512 = append_checksum_with::<sha2::Sha512>(&entropy, PhraseLength::W24).unwrap();
        assert_ne!(sha256, sha512);
    }
}
