use seedforge_core::{DiceRollSource, Session};

use super::CliResult;

pub fn run(words: &str, rolls: Option<&str>, json: bool, reveal_bits: bool) -> CliResult {
    let length = super::parse_length(words)?;
    // clap restricts --words to 24 for this subcommand; the check stays for
    // callers reaching this function directly.
    let required = length.dice_rolls().ok_or_else(|| {
        format!(
            "dice rolls only support 24-word phrases, not {} words",
            length.word_count()
        )
    })?;

    let rolls = match rolls {
        Some(rolls) => super::truncate_overlong(rolls, required),
        None => super::collect_symbols(
            &format!(
                "Roll a six-sided die {required} times and record the results without spacing: [1-6]"
            ),
            required,
            |c| matches!(c, '1'..='6'),
        )?,
    };

    let session = Session::english(length);
    let derivation = session.run(&DiceRollSource::new(rolls))?;
    super::render(&derivation, json, reveal_bits);
    Ok(())
}
