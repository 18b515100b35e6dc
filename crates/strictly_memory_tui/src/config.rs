//! Resolving the game configuration from file, defaults and flags.

use std::path::{Path, PathBuf};

use strictly_memory::{ConfigError, GameConfig};
use tracing::{info, instrument};

use crate::cli::GameArgs;

/// Config file picked up from the working directory when `--config` is absent.
pub const DEFAULT_CONFIG_FILE: &str = "strictly_memory.toml";

/// Loads the configuration named by `args`, then applies flag overrides.
///
/// An explicit `--config` path must exist. Without one, `strictly_memory.toml`
/// in the working directory is used if present, else built-in defaults.
#[instrument(skip(args))]
pub fn load_config(args: &GameArgs) -> Result<GameConfig, ConfigError> {
    load_config_from(args, Path::new(DEFAULT_CONFIG_FILE))
}

/// Like [`load_config`], with an explicit fallback path.
#[instrument(skip(args, fallback), fields(fallback = %fallback.display()))]
pub fn load_config_from(args: &GameArgs, fallback: &Path) -> Result<GameConfig, ConfigError> {
    let path: Option<PathBuf> = match &args.config {
        Some(path) => Some(path.clone()),
        None if fallback.exists() => Some(fallback.to_path_buf()),
        None => None,
    };

    let mut config = match path {
        Some(path) => GameConfig::from_file(&path)?,
        None => {
            info!("No config file found, using defaults");
            GameConfig::default()
        }
    };

    if let Some(pairs) = args.pairs {
        info!(pairs, "Overriding pair count");
        config = config.with_pair_count(pairs);
    }
    if let Some(seed) = args.seed {
        info!(seed, "Overriding seed");
        config = config.with_seed(seed);
    }
    if let Some(timer) = args.timer {
        info!(timer, "Overriding countdown");
        config = config.with_timer_seconds(timer);
    }

    Ok(config.resolved())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_without_file() {
        let dir = tempfile::tempdir().unwrap();
        let config = load_config_from(&GameArgs::default(), &dir.path().join("none.toml")).unwrap();
        assert_eq!(config, GameConfig::default().resolved());
    }

    #[test]
    fn test_flags_override_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("game.toml");
        std::fs::write(&path, "pair_count = 6\ntimer_seconds = 90\n").unwrap();

        let args = GameArgs {
            config: Some(path),
            pairs: Some(20),
            seed: Some(5),
            timer: None,
        };
        let config = load_config_from(&args, Path::new("unused.toml")).unwrap();
        assert_eq!(*config.pair_count(), 12);
        assert_eq!(*config.seed(), Some(5));
        assert_eq!(*config.timer_seconds(), 90);
    }

    #[test]
    fn test_explicit_missing_file_fails() {
        let args = GameArgs {
            config: Some(PathBuf::from("/definitely/not/here.toml")),
            ..GameArgs::default()
        };
        assert!(load_config_from(&args, Path::new("unused.toml")).is_err());
    }
}
