//! Shared command plumbing: phrase-length parsing, the interactive symbol
//! collection loop, and result rendering.

pub mod coin;
pub mod dice;
pub mod generate;

use std::io::{BufRead, Write};

use log::warn;
use seedforge_core::{Derivation, PhraseLength};

pub type CliResult = Result<(), Box<dyn std::error::Error>>;

/// Parse the `--words` argument. clap's value parser has already restricted
/// it to the five supported counts.
pub fn parse_length(words: &str) -> Result<PhraseLength, Box<dyn std::error::Error>> {
    let count: usize = words.parse()?;
    Ok(PhraseLength::from_word_count(count)?)
}

/// Apply the overlong policy to symbols passed via a flag: keep the first
/// `required` symbols and print a notice, mirroring the interactive loop.
/// Short input falls through to core validation and its re-promptable error.
pub fn truncate_overlong(symbols: &str, required: usize) -> String {
    let trimmed = symbols.trim();
    if trimmed.chars().count() > required {
        println!("You entered too many. We'll just use the first {required}.");
        trimmed.chars().take(required).collect()
    } else {
        trimmed.to_string()
    }
}

/// Interactive accumulation loop for manual entropy symbols.
///
/// Reads lines from stdin until exactly `required` acceptable symbols are
/// collected. A line containing an out-of-alphabet character restarts
/// collection from scratch, overlong input is truncated to the first
/// `required` symbols with a notice, and short input re-prompts with the
/// remaining count.
pub fn collect_symbols(
    instruction: &str,
    required: usize,
    accept: impl Fn(char) -> bool,
) -> std::io::Result<String> {
    let stdin = std::io::stdin();
    let mut lines = stdin.lock().lines();
    let mut collected = String::new();

    println!("{instruction}");
    loop {
        print!("> ");
        std::io::stdout().flush()?;

        let line = match lines.next() {
            Some(line) => line?,
            None => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::UnexpectedEof,
                    format!("input ended {} symbols short", required - collected.len()),
                ));
            }
        };
        let line = line.trim();

        if !line.chars().all(&accept) {
            println!("Invalid input, let's try again...");
            collected.clear();
            continue;
        }
        collected.push_str(line);

        if collected.len() > required {
            println!("You entered too many. We'll just use the first {required}.");
            collected.truncate(required);
        }
        if collected.len() == required {
            return Ok(collected);
        }
        println!(
            "You were short by {}. Please add more.",
            required - collected.len()
        );
    }
}

/// Print a completed derivation as text or JSON.
///
/// Entropy and checksum bits appear only when `reveal_bits` is set; they
/// are enough to reconstruct the phrase and must never reach logs or
/// shell history in production use.
pub fn render(derivation: &Derivation, json: bool, reveal_bits: bool) {
    if reveal_bits {
        warn!("revealing entropy bits on stdout; treat this output as the phrase itself");
    }

    if json {
        let mut output = serde_json::json!({
            "source": derivation.source_name(),
            "word_count": derivation.length().word_count(),
            "entropy_bits": derivation.length().entropy_bits(),
            "checksum_bits": derivation.length().checksum_bits(),
            "words": derivation.phrase().words(),
        });
        if reveal_bits {
            output["entropy"] = derivation.entropy().to_bit_string().into();
            output["checksum"] = derivation.checksum().to_bit_string().into();
        }
        println!("{}", serde_json::to_string_pretty(&output).unwrap_or_default());
        return;
    }

    if reveal_bits {
        println!("Binary: {} (pre-checksum)", derivation.entropy().to_bit_string());
        println!("Checksum: {}", derivation.checksum().to_bit_string());
        println!("Binary: {}", derivation.combined().to_bit_string());
    }
    println!("Mnemonic: {}", derivation.phrase());
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate_overlong_keeps_first_symbols() {
        assert_eq!(truncate_overlong("HTHTHT", 4), "HTHT");
    }

    #[test]
    fn test_truncate_overlong_passes_exact_and_short_through() {
        assert_eq!(truncate_overlong("HTHT", 4), "HTHT");
        assert_eq!(truncate_overlong("  HT  ", 4), "HT");
    }

    #[test]
    fn test_parse_length() {
        assert_eq!(parse_length("24").unwrap(), PhraseLength::W24);
        assert_eq!(parse_length("12").unwrap(), PhraseLength::W12);
        assert!(parse_length("13").is_err());
        assert!(parse_length("abc").is_err());
    }
}
