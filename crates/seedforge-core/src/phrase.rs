//! Word-index slicing and phrase assembly.
//!
//! The combined buffer is cut into consecutive non-overlapping 11-bit
//! groups, each read MSB-first as an index into the dictionary. The slice
//! width equals log2 of the dictionary size, so every possible group value
//! resolves to a word; failure here means a broken invariant upstream, not
//! bad user input.

use crate::bits::BitBuf;
use crate::dictionary::WordDictionary;
use crate::error::MnemonicError;
use crate::scheme::{INDEX_BITS, PhraseLength};

/// Ordered sequence of dictionary words encoding entropy plus checksum.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MnemonicPhrase {
    words: Vec<&'static str>,
}

impl MnemonicPhrase {
    /// The words, most significant 11-bit group first.
    pub fn words(&self) -> &[&'static str] {
        &self.words
    }

    /// Number of words.
    pub fn word_count(&self) -> usize {
        self.words.len()
    }
}

impl std::fmt::Display for MnemonicPhrase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.words.join(" "))
    }
}

/// Slice a combined buffer into word indices.
pub fn word_indices(
    combined: &BitBuf,
    length: PhraseLength,
) -> Result<Vec<u16>, MnemonicError> {
    if combined.len() != length.total_bits() {
        return Err(MnemonicError::invariant(format!(
            "combined buffer holds {} bits, expected {}",
            combined.len(),
            length.total_bits()
        )));
    }
    Ok((0..length.word_count())
        .map(|i| combined.slice_u16(i * INDEX_BITS, INDEX_BITS))
        .collect())
}

/// Resolve a combined buffer into a mnemonic phrase through `dictionary`.
pub fn derive_phrase(
    combined: &BitBuf,
    length: PhraseLength,
    dictionary: &WordDictionary,
) -> Result<MnemonicPhrase, MnemonicError> {
    let words = word_indices(combined, length)?
        .into_iter()
        .map(|index| dictionary.word(index))
        .collect::<Result<Vec<_>, _>>()?;
    Ok(MnemonicPhrase { words })
}
