//! # seedforge-core
//!
//! Entropy-to-mnemonic derivation following the BIP39 encoding scheme.
//!
//! Raw entropy comes from one of three acquisition strategies — the OS
//! CSPRNG, recorded coin flips, or recorded dice rolls — and flows through
//! a fixed pipeline: encode to bits, append a SHA-256 checksum, slice into
//! 11-bit indices, resolve against a 2048-word dictionary. The pipeline is
//! bit-exact with standard wallet software.
//!
//! ## Quick Start
//!
//! ```
//! use seedforge_core::{OsRandomSource, PhraseLength, Session};
//!
//! let session = Session::english(PhraseLength::W24);
//! let derivation = session.run(&OsRandomSource)?;
//! println!("Mnemonic: {}", derivation.phrase());
//! # Ok::<(), seedforge_core::MnemonicError>(())
//! ```
//!
//! ## Architecture
//!
//! Source (coin/dice/CSPRNG) → entropy bits → checksum → 11-bit slicing → words
//!
//! Manual sources take already-collected, already-length-checked symbol
//! strings and only re-validate defensively; interactive prompting and
//! retry loops belong to callers. The core is synchronous, single-threaded,
//! and stateless across sessions.

pub mod bits;
pub mod checksum;
pub mod dictionary;
pub mod error;
pub mod phrase;
pub mod scheme;
pub mod session;
pub mod source;
pub mod sources;

pub use bits::BitBuf;
pub use checksum::{append_checksum, append_checksum_with};
pub use dictionary::{DICTIONARY_SIZE, WordDictionary};
pub use error::{MnemonicError, ValidationError};
pub use phrase::{MnemonicPhrase, derive_phrase, word_indices};
pub use scheme::{INDEX_BITS, PhraseLength};
pub use session::{Derivation, Session};
pub use source::EntropySource;
pub use sources::coin::{COIN_ALPHABET, CoinFlipSource, encode_coin_flips, validate_coin_flips};
pub use sources::dice::{DICE_ALPHABET, DiceRollSource, encode_dice_rolls, validate_dice_rolls};
pub use sources::osrng::OsRandomSource;

/// Library version (from Cargo.toml).
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
