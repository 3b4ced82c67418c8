//! CLI for seedforge — BIP39 mnemonics from a CSPRNG, coin flips, or dice rolls.

mod commands;

use clap::{Parser, Subcommand};

#[derive(Parser)]
#[command(name = "seedforge")]
#[command(about = "seedforge — BIP39 mnemonics from a CSPRNG, coin flips, or dice rolls")]
#[command(version = seedforge_core::VERSION)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate a phrase from the OS cryptographically secure generator
    Generate {
        /// Number of words: 12, 15, 18, 21, or 24
        #[arg(long, default_value = "24", value_parser = ["12", "15", "18", "21", "24"])]
        words: String,

        /// Emit a machine-readable JSON object instead of text
        #[arg(long)]
        json: bool,

        /// Show the entropy/checksum bits. SECRET MATERIAL — anyone who sees
        /// this output can reconstruct the phrase.
        #[arg(long)]
        reveal_bits: bool,
    },

    /// Generate a phrase from recorded coin flips (H/T)
    Coin {
        /// Number of words: 12, 15, 18, 21, or 24
        #[arg(long, default_value = "24", value_parser = ["12", "15", "18", "21", "24"])]
        words: String,

        /// Flip sequence over H/h/T/t; prompts interactively when omitted
        #[arg(long)]
        flips: Option<String>,

        /// Emit a machine-readable JSON object instead of text
        #[arg(long)]
        json: bool,

        /// Show the entropy/checksum bits. SECRET MATERIAL.
        #[arg(long)]
        reveal_bits: bool,
    },

    /// Generate a phrase from recorded six-sided dice rolls (1-6)
    Dice {
        /// Number of words; the dice scheme only exists for 24
        #[arg(long, default_value = "24", value_parser = ["24"])]
        words: String,

        /// Roll sequence over 1-6; prompts interactively when omitted
        #[arg(long)]
        rolls: Option<String>,

        /// Emit a machine-readable JSON object instead of text
        #[arg(long)]
        json: bool,

        /// Show the entropy/checksum bits. SECRET MATERIAL.
        #[arg(long)]
        reveal_bits: bool,
    },
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Generate {
            words,
            json,
            reveal_bits,
        } => commands::generate::run(&words, json, reveal_bits),
        Commands::Coin {
            words,
            flips,
            json,
            reveal_bits,
        } => commands::coin::run(&words, flips.as_deref(), json, reveal_bits),
        Commands::Dice {
            words,
            rolls,
            json,
            reveal_bits,
        } => commands::dice::run(&words, rolls.as_deref(), json, reveal_bits),
    };

    if let Err(e) = result {
        eprintln!("error: {e}");
        std::process::exit(1);
    }
}
