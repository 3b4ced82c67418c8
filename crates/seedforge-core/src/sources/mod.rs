//! The three entropy acquisition strategies.

pub mod coin;
pub mod dice;
pub mod osrng;

pub use coin::CoinFlipSource;
pub use dice::DiceRollSource;
pub use osrng::OsRandomSource;

use crate::error::ValidationError;

/// Reject a symbol sequence whose length or alphabet does not match.
///
/// `accept` decides per-character membership; `alphabet` only feeds the
/// error message. Shared by the coin and dice validators.
pub(crate) fn validate_symbols(
    input: &str,
    expected_len: usize,
    unit: &'static str,
    alphabet: &'static str,
    accept: impl Fn(char) -> bool,
) -> Result<(), ValidationError> {
    let actual = input.chars().count();
    if actual != expected_len {
        return Err(ValidationError::Length {
            unit,
            expected: expected_len,
            actual,
        });
    }
    for (position, symbol) in input.chars().enumerate() {
        if !accept(symbol) {
            return Err(ValidationError::Symbol {
                symbol,
                position,
                alphabet,
            });
        }
    }
    Ok(())
}
