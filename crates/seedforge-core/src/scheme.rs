//! Phrase-length parameters.
//!
//! Every bit and symbol count in the pipeline derives from the word count
//! W: `total_bits = 11·W`, split 32:1 between entropy and checksum
//! (`checksum_bits = total_bits / 33`). The five standard BIP39 lengths are
//! the only values for which these ratios come out whole.

use crate::error::{MnemonicError, ValidationError};

/// Number of bits addressing one dictionary word (2^11 = 2048).
pub const INDEX_BITS: usize = 11;

/// Dice rolls consumed per 11-bit word group.
pub const ROLLS_PER_GROUP: usize = 4;

/// Trailing dice rolls that each contribute a single bit.
pub const TRAILING_ROLLS: usize = 3;

/// One of the five standard mnemonic lengths. 24 words is the default.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum PhraseLength {
    /// 12 words — 128 entropy bits, 4 checksum bits.
    W12,
    /// 15 words — 160 entropy bits, 5 checksum bits.
    W15,
    /// 18 words — 192 entropy bits, 6 checksum bits.
    W18,
    /// 21 words — 224 entropy bits, 7 checksum bits.
    W21,
    /// 24 words — 256 entropy bits, 8 checksum bits.
    #[default]
    W24,
}

impl PhraseLength {
    /// All supported lengths, shortest first.
    pub const ALL: [PhraseLength; 5] = [
        Self::W12,
        Self::W15,
        Self::W18,
        Self::W21,
        Self::W24,
    ];

    /// Number of words in the phrase.
    pub fn word_count(self) -> usize {
        match self {
            Self::W12 => 12,
            Self::W15 => 15,
            Self::W18 => 18,
            Self::W21 => 21,
            Self::W24 => 24,
        }
    }

    /// Total bits: entropy plus checksum, `11 * word_count`.
    pub fn total_bits(self) -> usize {
        INDEX_BITS * self.word_count()
    }

    /// Checksum suffix width, one bit per 33 total bits.
    pub fn checksum_bits(self) -> usize {
        self.total_bits() / 33
    }

    /// Entropy bits collected from the source.
    pub fn entropy_bits(self) -> usize {
        self.total_bits() - self.checksum_bits()
    }

    /// Entropy length in whole bytes. Exact: `entropy_bits` is always a
    /// multiple of 8 for the standard lengths.
    pub fn entropy_bytes(self) -> usize {
        self.entropy_bits() / 8
    }

    /// Coin flips required: one per entropy bit.
    pub fn coin_flips(self) -> usize {
        self.entropy_bits()
    }

    /// Dice rolls required: four per word group plus three trailing rolls,
    /// or `None` for lengths without a dice scheme.
    ///
    /// The fold yields `11·(W-1) + 3` bits, which equals `entropy_bits`
    /// only at W=24; shorter lengths would come up short, so only the
    /// 24-word scheme exists.
    pub fn dice_rolls(self) -> Option<usize> {
        match self {
            Self::W24 => Some((self.word_count() - 1) * ROLLS_PER_GROUP + TRAILING_ROLLS),
            _ => None,
        }
    }

    /// Parse a word count supplied by a caller.
    pub fn from_word_count(words: usize) -> Result<Self, MnemonicError> {
        match words {
            12 => Ok(Self::W12),
            15 => Ok(Self::W15),
            18 => Ok(Self::W18),
            21 => Ok(Self::W21),
            24 => Ok(Self::W24),
            _ => Err(ValidationError::UnsupportedWordCount { words }.into()),
        }
    }
}

impl std::fmt::Display for PhraseLength {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} words", self.word_count())
    }
}
