use seedforge_core::{CoinFlipSource, Session};

use super::CliResult;

pub fn run(words: &str, flips: Option<&str>, json: bool, reveal_bits: bool) -> CliResult {
    let length = super::parse_length(words)?;

    let flips = match flips {
        Some(flips) => super::truncate_overlong(flips, length.coin_flips()),
        None => super::collect_symbols(
            &format!(
                "Flip a coin {} times and record the results without spacing: (H)eads/(T)ails",
                length.coin_flips()
            ),
            length.coin_flips(),
            |c| matches!(c, 'H' | 'h' | 'T' | 't'),
        )?,
    };

    let session = Session::english(length);
    let derivation = session.run(&CoinFlipSource::new(flips))?;
    super::render(&derivation, json, reveal_bits);
    Ok(())
}
