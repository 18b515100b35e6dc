//! Strictly Memory - Unified CLI
//!
//! Memory-matching card game with a terminal front end.

#![warn(missing_docs)]

use anyhow::{Context, Result};
use clap::Parser;
use serde_json::json;
use strictly_memory::MemoryGame;
use strictly_memory_tui::{Cli, Command, GameArgs, load_config, logging, run_tui};
use tracing::{info, instrument};

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (RUST_LOG and friends)
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    match cli.command {
        Command::Play { game, log_file } => {
            let config = load_config(&game)?;
            run_tui(config, &log_file).await
        }
        Command::Deal { game } => {
            logging::init_stderr_tracing();
            deal(&game)
        }
        Command::Config { game } => {
            logging::init_stderr_tracing();
            print_config(&game)
        }
    }
}

/// Deal a deck and print it as JSON.
#[instrument(skip_all)]
fn deal(args: &GameArgs) -> Result<()> {
    let config = load_config(args)?;
    let game = MemoryGame::new(config).context("Failed to deal the deck")?;
    info!(seed = game.seed(), pairs = game.pair_count(), "Dealt deck");

    let report = json!({
        "seed": game.seed(),
        "pairs": game.pair_count(),
        "cards": game
            .deck()
            .iter()
            .map(|card| json!({ "id": card.id().to_string(), "image": card.image() }))
            .collect::<Vec<_>>(),
    });
    println!("{}", serde_json::to_string_pretty(&report)?);
    Ok(())
}

/// Print the effective configuration as TOML.
#[instrument(skip_all)]
fn print_config(args: &GameArgs) -> Result<()> {
    let config = load_config(args)?;
    print!("{}", config.to_toml_string()?);
    Ok(())
}
