//! Command-line interface for strictly_memory.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

/// Strictly Memory - flip cards, find pairs, beat the clock
#[derive(Parser, Debug)]
#[command(name = "strictly_memory")]
#[command(about = "Memory-matching card game for the terminal", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Subcommand to run
    #[command(subcommand)]
    pub command: Command,
}

/// Options shared by every command that deals a deck.
#[derive(Args, Debug, Clone, Default)]
pub struct GameArgs {
    /// Path to a TOML game config (defaults to ./strictly_memory.toml if present)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Number of pairs to deal (capped at the image pool size)
    #[arg(short, long)]
    pub pairs: Option<usize>,

    /// Shuffle seed, for reproducible deals
    #[arg(short, long)]
    pub seed: Option<u64>,

    /// Countdown length in seconds
    #[arg(short, long)]
    pub timer: Option<u32>,
}

/// Available commands
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Play in the terminal
    Play {
        /// Game options
        #[command(flatten)]
        game: GameArgs,

        /// Where to write logs while the terminal UI is running
        #[arg(long, default_value = "strictly_memory.log")]
        log_file: PathBuf,
    },

    /// Print a shuffled deal as JSON and exit
    Deal {
        /// Game options
        #[command(flatten)]
        game: GameArgs,
    },

    /// Print the effective configuration as TOML
    Config {
        /// Game options
        #[command(flatten)]
        game: GameArgs,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parses_play_with_overrides() {
        let cli = Cli::parse_from(["strictly_memory", "play", "--pairs", "4", "--seed", "9"]);
        match cli.command {
            Command::Play { game, log_file } => {
                assert_eq!(game.pairs, Some(4));
                assert_eq!(game.seed, Some(9));
                assert_eq!(log_file, PathBuf::from("strictly_memory.log"));
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_cli_definition_is_valid() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }
}
