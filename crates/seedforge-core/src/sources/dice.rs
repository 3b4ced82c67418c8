//! Dice-roll entropy source and the fold encoder.
//!
//! Each word group consumes four rolls. A roll maps to a fixed 3-bit code
//! (1→000 … 6→101), so four rolls give 12 raw bits where only 11 are
//! needed. Instead of discarding the 12th bit, the encoder treats it as a
//! *decision bit*: when it is 1, the kept 11 bits are emitted complemented.
//! The final three rolls contribute one bit each (1-3→0, 4-6→1).
//!
//! The scheme is 24-word only: `11·(W-1) + 3` bits equals the entropy width
//! solely at W=24, so other phrase lengths are rejected up front with a
//! validation error rather than coming up bits short.
//!
//! The fold must stay bit-exact: generators that share this scheme produce
//! identical phrases from identical rolls. It is a heuristic
//! entropy-preservation choice, not a formally analyzed uniformity
//! transform; six-valued rolls squeezed into 3-bit codes are not uniform
//! over those codes to begin with. Do not "fix" it.

use log::debug;

use crate::bits::BitBuf;
use crate::error::{MnemonicError, ValidationError};
use crate::scheme::{INDEX_BITS, PhraseLength, ROLLS_PER_GROUP};
use crate::source::{EntropySource, check_entropy_len};

use super::validate_symbols;

/// Alphabet accepted from the caller.
pub const DICE_ALPHABET: &str = "123456";

/// 3-bit code for each face, indexed by face value minus one. Total and
/// fixed; codes 110 and 111 never occur.
const ROLL_CODES: [u16; 6] = [0b000, 0b001, 0b010, 0b011, 0b100, 0b101];

/// Mask selecting the 11 kept bits of a group.
const KEPT_MASK: u16 = (1 << INDEX_BITS) - 1;

/// Manual entropy source fed by recorded six-sided dice rolls.
#[derive(Debug, Clone)]
pub struct DiceRollSource {
    rolls: String,
}

impl DiceRollSource {
    /// Wrap a recorded roll sequence. Validation happens at [`acquire`]
    /// time against the requested phrase length.
    ///
    /// [`acquire`]: EntropySource::acquire
    pub fn new(rolls: impl Into<String>) -> Self {
        Self {
            rolls: rolls.into(),
        }
    }
}

impl EntropySource for DiceRollSource {
    fn name(&self) -> &'static str {
        "dice"
    }

    fn description(&self) -> &'static str {
        "Physical six-sided dice rolls, folded four rolls per word group"
    }

    fn symbols_required(&self, length: PhraseLength) -> Option<usize> {
        length.dice_rolls()
    }

    fn acquire(&self, length: PhraseLength) -> Result<BitBuf, MnemonicError> {
        let buf = encode_dice_rolls(&self.rolls, length)?;
        check_entropy_len("dice", &buf, length)?;
        Ok(buf)
    }
}

/// Validate a roll sequence without encoding it.
///
/// Fails with [`ValidationError::UnsupportedDiceLength`] for any length
/// other than 24 words before looking at the symbols at all.
pub fn validate_dice_rolls(
    input: &str,
    length: PhraseLength,
) -> Result<(), ValidationError> {
    let Some(rolls) = length.dice_rolls() else {
        return Err(ValidationError::UnsupportedDiceLength {
            words: length.word_count(),
        });
    };
    validate_symbols(input, rolls, "rolls", DICE_ALPHABET, |c| {
        matches!(c, '1'..='6')
    })
}

/// Fold one 4-roll group into 11 entropy bits.
///
/// `faces` are roll values 1-6. The 12-bit concatenation of their codes is
/// split into 11 kept bits and a trailing decision bit; a set decision bit
/// complements the kept bits.
fn fold_group(faces: [u8; ROLLS_PER_GROUP]) -> u16 {
    let mut raw = 0u16;
    for face in faces {
        raw = (raw << 3) | ROLL_CODES[usize::from(face - 1)];
    }
    let mut kept = raw >> 1;
    if raw & 1 == 1 {
        kept = !kept & KEPT_MASK;
    }
    kept
}

/// Encode a validated roll sequence into entropy bits.
pub fn encode_dice_rolls(
    input: &str,
    length: PhraseLength,
) -> Result<BitBuf, MnemonicError> {
    validate_dice_rolls(input, length)?;

    let faces: Vec<u8> = input.chars().map(|c| c as u8 - b'0').collect();
    let groups = length.word_count() - 1;

    let mut buf = BitBuf::with_capacity(length.entropy_bits());
    for group in faces[..groups * ROLLS_PER_GROUP].chunks_exact(ROLLS_PER_GROUP) {
        let faces: [u8; ROLLS_PER_GROUP] = group.try_into().map_err(|_| {
            MnemonicError::invariant("dice group shorter than four rolls")
        })?;
        buf.push_bits(fold_group(faces), INDEX_BITS);
    }

    // Trailing rolls carry one bit each: low half 0, high half 1.
    for &face in &faces[groups * ROLLS_PER_GROUP..] {
        buf.push(face >= 4);
    }

    debug!("dice encoded {} rolls into {} bits", faces.len(), buf.len());
    Ok(buf)
}
