//! One-shot generation session.
//!
//! A session wires the pipeline end to end: acquire entropy from one
//! source, append the checksum, slice the combined buffer into words.
//! Derivation is all-or-nothing — a session either completes every phase or
//! produces no output — and nothing is retained afterwards; dropping the
//! [`Derivation`] releases the only copies of the buffers.
//!
//! Buffer contents are never logged. Debug logging covers phase
//! transitions and bit counts only, because intermediate values are secret
//! material.

use log::debug;

use crate::bits::BitBuf;
use crate::checksum::append_checksum;
use crate::dictionary::WordDictionary;
use crate::error::MnemonicError;
use crate::phrase::{MnemonicPhrase, derive_phrase};
use crate::scheme::PhraseLength;
use crate::source::EntropySource;

/// Parameters for one or more generation runs: phrase length plus the
/// dictionary to resolve indices against.
#[derive(Debug, Clone, Copy, Default)]
pub struct Session {
    length: PhraseLength,
    dictionary: WordDictionary,
}

impl Session {
    pub fn new(length: PhraseLength, dictionary: WordDictionary) -> Self {
        Self { length, dictionary }
    }

    /// Session for `length` with the English dictionary.
    pub fn english(length: PhraseLength) -> Self {
        Self::new(length, WordDictionary::english())
    }

    pub fn length(&self) -> PhraseLength {
        self.length
    }

    /// Run the full pipeline against one entropy source.
    pub fn run(&self, source: &dyn EntropySource) -> Result<Derivation, MnemonicError> {
        debug!(
            "session start: source={} length={}",
            source.name(),
            self.length
        );
        let entropy = source.acquire(self.length)?;
        debug!("entropy acquired: {} bits", entropy.len());
        let combined = append_checksum(&entropy, self.length)?;
        debug!("checksum appended: {} bits total", combined.len());
        let phrase = derive_phrase(&combined, self.length, &self.dictionary)?;
        debug!("phrase derived: {} words", phrase.word_count());

        Ok(Derivation {
            length: self.length,
            source_name: source.name(),
            entropy,
            combined,
            phrase,
        })
    }
}

/// Completed derivation: the phrase plus the buffers that produced it.
///
/// The buffers are exposed for caller-side diagnostic display. They are
/// secret material — anyone holding them can reconstruct the phrase — so
/// callers must not persist or log them. The `Debug` form redacts them,
/// so a stray `dbg!` or `{:?}` in a log line cannot leak the secret.
#[derive(Clone)]
pub struct Derivation {
    length: PhraseLength,
    source_name: &'static str,
    entropy: BitBuf,
    combined: BitBuf,
    phrase: MnemonicPhrase,
}

impl Derivation {
    pub fn length(&self) -> PhraseLength {
        self.length
    }

    /// Name of the source that produced the entropy.
    pub fn source_name(&self) -> &'static str {
        self.source_name
    }

    /// The raw entropy bits, pre-checksum.
    pub fn entropy(&self) -> &BitBuf {
        &self.entropy
    }

    /// Entropy plus checksum suffix.
    pub fn combined(&self) -> &BitBuf {
        &self.combined
    }

    /// The checksum suffix on its own.
    pub fn checksum(&self) -> BitBuf {
        let mut buf = BitBuf::with_capacity(self.length.checksum_bits());
        for i in self.length.entropy_bits()..self.length.total_bits() {
            buf.push(self.combined.get(i));
        }
        buf
    }

    /// The derived phrase.
    pub fn phrase(&self) -> &MnemonicPhrase {
        &self.phrase
    }
}

impl std::fmt::Debug for Derivation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Derivation")
            .field("length", &self.length)
            .field("source_name", &self.source_name)
            .field("entropy", &"<redacted>")
            .field("combined", &"<redacted>")
            .field("phrase", &"<redacted>")
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::sources::{CoinFlipSource, DiceRollSource, OsRandomSource};

    #[test]
    fn test_run_produces_full_phrase() {
        let session = Session::english(PhraseLength::W24);
        let derivation = session.run(&OsRandomSource).unwrap();
        assert_eq!(derivation.phrase().word_count(), 24);
        assert_eq!(derivation.entropy().len(), 256);
        assert_eq!(derivation.combined().len(), 264);
        assert_eq!(derivation.checksum().len(), 8);
        assert_eq!(derivation.source_name(), "os_rng");
    }

    #[test]
    fn test_identical_input_identical_phrase() {
        let session = Session::english(PhraseLength::W24);
        let rolls = "123456".chars().cycle().take(95).collect::<String>();
        let a = session.run(&DiceRollSource::new(&rolls)).unwrap();
        let b = session.run(&DiceRollSource::new(&rolls)).unwrap();
        assert_eq!(a.phrase(), b.phrase());
        assert_eq!(a.combined(), b.combined());
    }

    #[test]
    fn test_invalid_input_yields_no_output() {
        let session = Session::english(PhraseLength::W24);
        let result = session.run(&CoinFlipSource::new("HTH"));
        assert!(result.is_err());
        assert!(result.unwrap_err().is_recoverable());
    }

    #[test]
    fn test_checksum_accessor_matches_combined_tail() {
        let session = Session::english(PhraseLength::W24);
        let flips = "HT".chars().cycle().take(256).collect::<String>();
        let derivation = session.run(&CoinFlipSource::new(flips)).unwrap();
        let checksum = derivation.checksum();
        for i in 0..8 {
            assert_eq!(checksum.get(i), derivation.combined().get(256 + i));
        }
    }

    #[test]
    fn test_debug_output_redacts_secret_material() {
        let session = Session::english(PhraseLength::W24);
        let derivation = session.run(&CoinFlipSource::new("H".repeat(256))).unwrap();
        let rendered = format!("{derivation:?}");
        assert!(rendered.contains("<redacted>"));
        // All-heads entropy is 32×0xFF and resolves mostly to "zoo";
        // neither may appear in debug output.
        assert!(!rendered.contains("zoo"));
        assert!(!rendered.contains("255"));
        assert!(!rendered.contains("1111"));
    }

    #[test]
    fn test_every_length_runs_end_to_end() {
        for length in PhraseLength::ALL {
            let session = Session::english(length);
            let derivation = session.run(&OsRandomSource).unwrap();
            assert_eq!(derivation.phrase().word_count(), length.word_count());
        }
    }
}
