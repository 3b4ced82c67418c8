//! Read-only word dictionary.
//!
//! A dictionary is an ordered table of exactly 2048 lowercase words,
//! addressed by an 11-bit index. The default table is the English BIP39
//! list shipped by the `bip39` crate; the table is injected into the
//! indexer as a plain value rather than consulted as ambient global state.

use crate::error::{MnemonicError, ValidationError};
use crate::scheme::INDEX_BITS;

/// Number of words in a dictionary: 2^11.
pub const DICTIONARY_SIZE: usize = 1 << INDEX_BITS;

/// Ordered, immutable table of 2048 words.
#[derive(Debug, Clone, Copy)]
pub struct WordDictionary {
    words: &'static [&'static str; DICTIONARY_SIZE],
}

impl WordDictionary {
    /// The standard English BIP39 word list.
    pub fn english() -> Self {
        Self {
            words: bip39::Language::English.word_list(),
        }
    }

    /// Wrap a caller-supplied table. The table must already be sorted and
    /// deduplicated the way downstream wallet software expects; only the
    /// size is enforced here.
    pub fn from_table(
        words: &'static [&'static str],
    ) -> Result<Self, MnemonicError> {
        let table: &'static [&'static str; DICTIONARY_SIZE] = words
            .try_into()
            .map_err(|_| ValidationError::DictionarySize {
                actual: words.len(),
            })?;
        Ok(Self { words: table })
    }

    /// Word at `index`.
    ///
    /// An out-of-range index is an invariant violation: 11-bit slicing can
    /// never produce one, so reaching the error arm means the caller bypassed
    /// the indexer.
    pub fn word(&self, index: u16) -> Result<&'static str, MnemonicError> {
        self.words
            .get(usize::from(index))
            .copied()
            .ok_or_else(|| {
                MnemonicError::invariant(format!(
                    "dictionary index {index} out of range {DICTIONARY_SIZE}"
                ))
            })
    }

    /// Number of words. Always [`DICTIONARY_SIZE`].
    pub fn len(&self) -> usize {
        self.words.len()
    }

    /// Never true; present for API completeness.
    pub fn is_empty(&self) -> bool {
        self.words.is_empty()
    }
}

impl Default for WordDictionary {
    fn default() -> Self {
        Self::english()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_english_has_2048_words() {
        let dict = WordDictionary::english();
        assert_eq!(dict.len(), DICTIONARY_SIZE);
    }

    #[test]
    fn test_english_first_and_last_words() {
        let dict = WordDictionary::english();
        assert_eq!(dict.word(0).unwrap(), "abandon");
        assert_eq!(dict.word(2047).unwrap(), "zoo");
    }

    #[test]
    fn test_all_words_lowercase() {
        let dict = WordDictionary::english();
        for i in 0..DICTIONARY_SIZE as u16 {
            let w = dict.word(i).unwrap();
            assert!(w.chars().all(|c| c.is_ascii_lowercase()), "word {w:?}");
        }
    }

    #[test]
    fn test_out_of_range_index_is_invariant_violation() {
        let dict = WordDictionary::english();
        let err = dict.word(2048).unwrap_err();
        assert!(!err.is_recoverable());
    }

    #[test]
    fn test_from_table_rejects_wrong_size() {
        static SHORT: [&str; 3] = ["a", "b", "c"];
        let err = WordDictionary::from_table(&SHORT).unwrap_err();
        assert!(err.is_recoverable());
    }
}
