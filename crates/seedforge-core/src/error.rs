//! Error types for the derivation pipeline.
//!
//! Two kinds, with different recovery stories:
//!
//! - [`ValidationError`] — raw input length or alphabet mismatch. Expected
//!   in normal operation; callers re-prompt and retry. No entropy is
//!   committed until a fully valid input is available.
//! - [`MnemonicError::Invariant`] — a condition that cannot happen with
//!   valid constants (dictionary missing an index, buffer length mismatch
//!   after encoding). Fatal, not retryable.

use thiserror::Error;

/// Recoverable raw-input validation failure.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    /// Word count outside the five standard lengths.
    #[error("unsupported word count {words}: expected 12, 15, 18, 21, or 24")]
    UnsupportedWordCount { words: usize },

    /// Dice input offered for a phrase length without a dice scheme.
    #[error("dice rolls only support 24-word phrases, not {words} words")]
    UnsupportedDiceLength { words: usize },

    /// Symbol sequence has the wrong length.
    #[error("expected exactly {expected} {unit}, got {actual}")]
    Length {
        unit: &'static str,
        expected: usize,
        actual: usize,
    },

    /// Symbol outside the source's alphabet.
    #[error("illegal symbol {symbol:?} at position {position}: expected one of {alphabet}")]
    Symbol {
        symbol: char,
        position: usize,
        alphabet: &'static str,
    },

    /// Custom dictionary does not hold exactly 2048 words.
    #[error("word dictionary must hold exactly 2048 words, got {actual}")]
    DictionarySize { actual: usize },
}

/// Any failure the derivation pipeline can produce.
#[derive(Debug, Error)]
pub enum MnemonicError {
    /// Recoverable input problem; the caller should re-prompt.
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// Fatal defect in configuration or implementation. Never user error.
    #[error("internal invariant violated: {0}")]
    Invariant(String),
}

impl MnemonicError {
    /// Fatal invariant violation with a description of what broke.
    pub fn invariant(detail: impl Into<String>) -> Self {
        Self::Invariant(detail.into())
    }

    /// True for errors a caller can fix by supplying different input.
    pub fn is_recoverable(&self) -> bool {
        matches!(self, Self::Validation(_))
    }
}
