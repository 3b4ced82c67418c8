use seedforge_core::{OsRandomSource, Session};

use super::CliResult;

pub fn run(words: &str, json: bool, reveal_bits: bool) -> CliResult {
    let length = super::parse_length(words)?;
    let session = Session::english(length);
    let derivation = session.run(&OsRandomSource)?;
    super::render(&derivation, json, reveal_bits);
    Ok(())
}
