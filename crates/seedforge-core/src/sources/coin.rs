//! Coin-flip entropy source.
//!
//! One flip, one bit: H→1, T→0, case-insensitive, consumed in input order
//! and packed MSB-first. A deterministic bijection between the flip sequence
//! and the entropy bits — no folding, no loss.

use log::debug;

use crate::bits::BitBuf;
use crate::error::{MnemonicError, ValidationError};
use crate::scheme::PhraseLength;
use crate::source::{EntropySource, check_entropy_len};

use super::validate_symbols;

/// Alphabet accepted from the caller.
pub const COIN_ALPHABET: &str = "HhTt";

/// Manual entropy source fed by recorded coin flips.
#[derive(Debug, Clone)]
pub struct CoinFlipSource {
    flips: String,
}

impl CoinFlipSource {
    /// Wrap a recorded flip sequence. Validation happens at [`acquire`]
    /// time against the requested phrase length.
    ///
    /// [`acquire`]: EntropySource::acquire
    pub fn new(flips: impl Into<String>) -> Self {
        Self {
            flips: flips.into(),
        }
    }
}

impl EntropySource for CoinFlipSource {
    fn name(&self) -> &'static str {
        "coin"
    }

    fn description(&self) -> &'static str {
        "Physical coin flips, one entropy bit per flip (H=1, T=0)"
    }

    fn symbols_required(&self, length: PhraseLength) -> Option<usize> {
        Some(length.coin_flips())
    }

    fn acquire(&self, length: PhraseLength) -> Result<BitBuf, MnemonicError> {
        let buf = encode_coin_flips(&self.flips, length)?;
        check_entropy_len("coin", &buf, length)?;
        Ok(buf)
    }
}

/// Validate a flip sequence without encoding it.
pub fn validate_coin_flips(
    input: &str,
    length: PhraseLength,
) -> Result<(), ValidationError> {
    validate_symbols(input, length.coin_flips(), "flips", COIN_ALPHABET, |c| {
        matches!(c, 'H' | 'h' | 'T' | 't')
    })
}

/// Encode a validated flip sequence into entropy bits.
pub fn encode_coin_flips(
    input: &str,
    length: PhraseLength,
) -> Result<BitBuf, MnemonicError> {
    validate_coin_flips(input, length)?;

    let mut buf = BitBuf::with_capacity(length.entropy_bits());
    for flip in input.chars() {
        buf.push(matches!(flip, 'H' | 'h'));
    }
    debug!("coin encoded {} flips into {} bits", input.len(), buf.len());
    Ok(buf)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flips(pattern: &str, length: PhraseLength) -> String {
        pattern
            .chars()
            .cycle()
            .take(length.coin_flips())
            .collect()
    }

    #[test]
    fn test_all_heads_is_all_ones() {
        let buf = encode_coin_flips(&flips("H", PhraseLength::W24), PhraseLength::W24).unwrap();
        assert_eq!(buf.as_bytes(), &[0xFF; 32]);
    }

    #[test]
    fn test_all_tails_is_all_zeros() {
        let buf = encode_coin_flips(&flips("t", PhraseLength::W24), PhraseLength::W24).unwrap();
        assert_eq!(buf.as_bytes(), &[0x00; 32]);
    }

    #[test]
    fn test_msb_first_packing() {
        // "HTTTTTTT" repeated → each byte is 1000_0000.
        let buf =
            encode_coin_flips(&flips("HTTTTTTT", PhraseLength::W12), PhraseLength::W12).unwrap();
        assert_eq!(buf.as_bytes(), &[0x80; 16]);
    }

    #[test]
    fn test_case_insensitive() {
        let upper = encode_coin_flips(&flips("HT", PhraseLength::W12), PhraseLength::W12).unwrap();
        let lower = encode_coin_flips(&flips("ht", PhraseLength::W12), PhraseLength::W12).unwrap();
        assert_eq!(upper, lower);
    }

    #[test]
    fn test_single_flip_changes_single_bit() {
        let base = flips("T", PhraseLength::W24);
        let mut flipped: Vec<char> = base.chars().collect();
        flipped[100] = 'H';
        let flipped: String = flipped.into_iter().collect();

        let a = encode_coin_flips(&base, PhraseLength::W24).unwrap();
        let b = encode_coin_flips(&flipped, PhraseLength::W24).unwrap();

        let differing = (0..a.len()).filter(|&i| a.get(i) != b.get(i)).count();
        assert_eq!(differing, 1);
        assert!(b.get(100));
    }

    #[test]
    fn test_short_input_rejected() {
        let err = encode_coin_flips("HTH", PhraseLength::W24).unwrap_err();
        assert!(err.is_recoverable());
    }

    #[test]
    fn test_bad_symbol_rejected() {
        let mut input = flips("H", PhraseLength::W24);
        input.replace_range(5..6, "X");
        let err = encode_coin_flips(&input, PhraseLength::W24).unwrap_err();
        assert!(matches!(
            err,
            MnemonicError::Validation(ValidationError::Symbol {
                symbol: 'X',
                position: 5,
                ..
            })
        ));
    }

    #[test]
    fn test_source_trait_roundtrip() {
        let source = CoinFlipSource::new(flips("HTH", PhraseLength::W12));
        assert_eq!(source.symbols_required(PhraseLength::W12), Some(128));
        let buf = source.acquire(PhraseLength::W12).unwrap();
        assert_eq!(buf.len(), 128);
    }
}
