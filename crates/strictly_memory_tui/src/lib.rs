//! Strictly Memory terminal client.
//!
//! Wires the pure game logic in [`strictly_memory`] to a crossterm/ratatui
//! terminal: command-line parsing, config resolution, logging and the
//! interactive board.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod cli;
pub mod config;
pub mod logging;
pub mod tui;

pub use cli::{Cli, Command, GameArgs};
pub use config::{DEFAULT_CONFIG_FILE, load_config, load_config_from};
pub use tui::{App, run_tui};
