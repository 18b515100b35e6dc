//! Game configuration.

use std::path::Path;
use std::time::Duration;

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, instrument, warn};

use crate::ImageKey;

/// Tunable settings for a memory game session.
///
/// Every field has a default, so a config file only needs the values it
/// changes.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Ordered pool of image identifiers. Pairs are drawn from the front.
    #[serde(default = "default_images")]
    images: Vec<ImageKey>,

    /// Number of pairs dealt (capped at the pool size).
    #[serde(default = "default_pair_count")]
    pair_count: usize,

    /// Cards per row on the board.
    #[serde(default = "default_columns")]
    columns: u16,

    /// Countdown length in seconds.
    #[serde(default = "default_timer_seconds")]
    timer_seconds: u32,

    /// Points awarded for a match.
    #[serde(default = "default_match_bonus")]
    match_bonus: u32,

    /// Points deducted for a mismatch (score never drops below zero).
    #[serde(default = "default_mismatch_penalty")]
    mismatch_penalty: u32,

    /// How long a matched pair is displayed before the selection clears.
    #[serde(default = "default_match_delay_ms")]
    match_delay_ms: u64,

    /// How long a mismatched pair stays face-up.
    #[serde(default = "default_mismatch_delay_ms")]
    mismatch_delay_ms: u64,

    /// How long the end-of-game message stays visible.
    #[serde(default = "default_message_ms")]
    message_ms: u64,

    /// Fixed shuffle seed; drawn from entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_images() -> Vec<ImageKey> {
    [
        "images/meme1.png",
        "images/meme2.png",
        "images/meme3.png",
        "images/meme4.png",
        "images/meme5.png",
        "images/meme6.png",
        "images/meme7.png",
        "images/meme8.png",
        "images/meme9.png",
        "images/meme10.webp",
        "images/meme11.webp",
        "images/meme12.png",
    ]
    .into_iter()
    .map(ImageKey::from)
    .collect()
}

fn default_pair_count() -> usize {
    8
}

fn default_columns() -> u16 {
    4
}

fn default_timer_seconds() -> u32 {
    120
}

fn default_match_bonus() -> u32 {
    10
}

fn default_mismatch_penalty() -> u32 {
    1
}

fn default_match_delay_ms() -> u64 {
    200
}

fn default_mismatch_delay_ms() -> u64 {
    800
}

fn default_message_ms() -> u64 {
    5000
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            images: default_images(),
            pair_count: default_pair_count(),
            columns: default_columns(),
            timer_seconds: default_timer_seconds(),
            match_bonus: default_match_bonus(),
            mismatch_penalty: default_mismatch_penalty(),
            match_delay_ms: default_match_delay_ms(),
            mismatch_delay_ms: default_mismatch_delay_ms(),
            message_ms: default_message_ms(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Creates a configuration over the given image pool with default timings.
    #[instrument(skip(images))]
    pub fn new(images: Vec<ImageKey>, pair_count: usize) -> Self {
        Self {
            images,
            pair_count,
            ..Self::default()
        }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml_str(&content)?;
        info!(
            images = config.images.len(),
            pair_count = config.pair_count,
            "Config loaded successfully"
        );
        Ok(config)
    }

    /// Parses configuration from TOML text.
    #[instrument(skip(content))]
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Renders the configuration as TOML.
    #[instrument(skip(self))]
    pub fn to_toml_string(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self)
            .map_err(|e| ConfigError::new(format!("Failed to serialize config: {}", e)))
    }

    /// Overrides the number of pairs.
    pub fn with_pair_count(mut self, pair_count: usize) -> Self {
        self.pair_count = pair_count;
        self
    }

    /// Overrides the shuffle seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the countdown length.
    pub fn with_timer_seconds(mut self, timer_seconds: u32) -> Self {
        self.timer_seconds = timer_seconds;
        self
    }

    /// Returns the configuration with `pair_count` capped at the pool size,
    /// a countdown of at least one second and `columns` at least one.
    #[instrument(skip(self))]
    pub fn resolved(mut self) -> Self {
        if self.pair_count > self.images.len() {
            warn!(
                requested = self.pair_count,
                available = self.images.len(),
                "Pair count exceeds image pool, capping"
            );
            self.pair_count = self.images.len();
        }
        if self.timer_seconds == 0 {
            warn!("Countdown of zero seconds, using one");
            self.timer_seconds = 1;
        }
        self.columns = self.columns.max(1);
        self
    }

    /// Match display delay as a [`Duration`].
    pub fn match_delay(&self) -> Duration {
        Duration::from_millis(self.match_delay_ms)
    }

    /// Mismatch display delay as a [`Duration`].
    pub fn mismatch_delay(&self) -> Duration {
        Duration::from_millis(self.mismatch_delay_ms)
    }

    /// End-of-game message lifetime as a [`Duration`].
    pub fn message_duration(&self) -> Duration {
        Duration::from_millis(self.message_ms)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
