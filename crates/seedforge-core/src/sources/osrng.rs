//! OS CSPRNG entropy source.
//!
//! Fills the entropy buffer from the operating system's cryptographically
//! secure generator via the `getrandom` crate. Cross-platform, non-blocking,
//! no manual device file I/O.

use log::debug;

use crate::bits::BitBuf;
use crate::error::MnemonicError;
use crate::scheme::PhraseLength;
use crate::source::{EntropySource, check_entropy_len};

/// Automatic entropy source backed by the OS CSPRNG.
#[derive(Debug, Default, Clone, Copy)]
pub struct OsRandomSource;

impl EntropySource for OsRandomSource {
    fn name(&self) -> &'static str {
        "os_rng"
    }

    fn description(&self) -> &'static str {
        "Operating system cryptographically secure random generator"
    }

    fn symbols_required(&self, _length: PhraseLength) -> Option<usize> {
        None
    }

    fn acquire(&self, length: PhraseLength) -> Result<BitBuf, MnemonicError> {
        let mut bytes = vec![0u8; length.entropy_bytes()];
        // A CSPRNG failure is a platform fault, never recoverable input.
        getrandom::fill(&mut bytes)
            .map_err(|e| MnemonicError::invariant(format!("OS CSPRNG failed: {e}")))?;
        debug!("os_rng filled {} entropy bytes", bytes.len());

        let buf = BitBuf::from_bytes(&bytes);
        check_entropy_len("os_rng", &buf, length)?;
        Ok(buf)
    }
}
