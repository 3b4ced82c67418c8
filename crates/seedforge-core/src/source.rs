//! Abstract entropy source trait.
//!
//! Every acquisition strategy implements [`EntropySource`]: the OS CSPRNG,
//! recorded coin flips, and recorded dice rolls. A source produces exactly
//! `entropy_bits` bits for the requested phrase length, or a validation
//! error if its raw symbols cannot do so.

use crate::bits::BitBuf;
use crate::error::MnemonicError;
use crate::scheme::PhraseLength;

/// Trait that every entropy acquisition strategy must implement.
pub trait EntropySource {
    /// Unique identifier (e.g. `"os_rng"`).
    fn name(&self) -> &'static str;

    /// One-line human-readable description.
    fn description(&self) -> &'static str;

    /// Number of manual symbols the source consumes for `length`, or
    /// `None` for automatic sources that need no caller input.
    fn symbols_required(&self, length: PhraseLength) -> Option<usize>;

    /// Produce exactly `length.entropy_bits()` bits.
    ///
    /// Manual sources re-validate their recorded symbols here; primary
    /// validation remains the caller's responsibility, so failures from a
    /// well-behaved caller indicate a bug upstream.
    fn acquire(&self, length: PhraseLength) -> Result<BitBuf, MnemonicError>;
}

/// Check an acquired buffer against the length the scheme demands.
///
/// Sources call this before handing a buffer back; a mismatch after a
/// successful encode is an encoder defect, not bad input.
pub(crate) fn check_entropy_len(
    source: &'static str,
    buf: &BitBuf,
    length: PhraseLength,
) -> Result<(), MnemonicError> {
    if buf.len() != length.entropy_bits() {
        return Err(MnemonicError::invariant(format!(
            "{source} produced {} bits, expected {}",
            buf.len(),
            length.entropy_bits()
        )));
    }
    Ok(())
}
