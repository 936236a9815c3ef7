// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0
//
// Run with:
//
// ```bash
// $ cargo r --example best_hand -- --private AsAh --shared AdAcKc7h8d
// ... INFO  Pool AsAhAdAcKc8d7h
// ... INFO  Best hand AsAhAdAcKc Four of a Kind A K A A A
// ```
//
// Set `RUST_LOG=trace` to log all the evaluated subsets.
use anyhow::{Context, Result};
use clap::Parser;
use log::info;

use showdown_eval::*;

#[derive(Debug, Parser)]
struct Cli {
    /// The player private cards.
    #[clap(long, short)]
    private: String,
    /// The shared cards.
    #[clap(long, short)]
    shared: String,
    /// The suits symbols for clubs, diamonds, hearts, and spades.
    #[clap(long, default_value = "cdhs")]
    suits: String,
    /// Another player private cards to compare against.
    #[clap(long, short)]
    opponent: Option<String>,
}

fn best_hand(notation: &Notation, private: &str, shared: [Card; 5]) -> Result<(Hand, HandValue)> {
    let private = notation
        .parse_exact::<2>(private)
        .with_context(|| format!("invalid private cards '{private}'"))?;

    let pool = Pool::new(private, shared).context("invalid pool")?;
    info!("Pool {}", notation.format(pool.cards()));

    Ok(pool.best_hand())
}

fn main() -> Result<()> {
    env_logger::builder()
        .filter_level(log::LevelFilter::Info)
        .format_target(false)
        .format_timestamp_millis()
        .parse_default_env()
        .init();

    let cli = Cli::parse();
    let notation = Notation::new(&cli.suits)?;
    let shared = notation
        .parse_exact::<5>(&cli.shared)
        .with_context(|| format!("invalid shared cards '{}'", cli.shared))?;

    let (hand, value) = best_hand(&notation, &cli.private, shared)?;
    info!("Best hand {} {value}", hand.format_with(&notation));

    if let Some(opponent) = cli.opponent {
        let (other, other_value) = best_hand(&notation, &opponent, shared)?;
        info!("Opponent hand {} {other_value}", other.format_with(&notation));

        match compare(value, other_value) {
            Outcome::FirstWins => info!("Player wins"),
            Outcome::SecondWins => info!("Opponent wins"),
            Outcome::Tie => info!("Split pot"),
        }
    }

    Ok(())
}
