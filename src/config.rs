//! Session configuration.
//!
//! Settings come from an optional TOML file and are overridden by
//! command-line flags.

use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for one console session.
#[derive(Debug, Clone, Default, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SessionConfig {
    /// Seed for the computer's random moves. Drawn from OS entropy when unset.
    seed: Option<u64>,

    /// Stop after this many rounds instead of asking to play again.
    max_rounds: Option<u32>,
}

impl SessionConfig {
    /// Creates a configuration.
    #[instrument]
    pub fn new(seed: Option<u64>, max_rounds: Option<u32>) -> Self {
        Self { seed, max_rounds }
    }

    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading session config");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        if config.max_rounds == Some(0) {
            return Err(ConfigError::new("max_rounds must be at least 1"));
        }

        info!(seed = ?config.seed, max_rounds = ?config.max_rounds, "Config loaded");
        Ok(config)
    }

    /// Applies command-line overrides; `Some` values win.
    #[instrument]
    pub fn with_overrides(self, seed: Option<u64>, max_rounds: Option<u32>) -> Self {
        Self {
            seed: seed.or(self.seed),
            max_rounds: max_rounds.or(self.max_rounds),
        }
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
    /// Creates a new config error with caller location tracking.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn write_config(text: &str) -> tempfile::NamedTempFile {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(text.as_bytes()).unwrap();
        file
    }

    #[test]
    fn test_load_full_config() {
        let file = write_config("seed = 42\nmax_rounds = 3\n");
        let config = SessionConfig::from_file(file.path()).unwrap();
        assert_eq!(*config.seed(), Some(42));
        assert_eq!(*config.max_rounds(), Some(3));
    }

    #[test]
    fn test_missing_keys_default() {
        let file = write_config("");
        let config = SessionConfig::from_file(file.path()).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn test_unknown_key_rejected() {
        let file = write_config("difficulty = \"hard\"\n");
        let err = SessionConfig::from_file(file.path()).unwrap_err();
        assert!(err.message.contains("Failed to parse config"));
    }

    #[test]
    fn test_zero_rounds_rejected() {
        let file = write_config("max_rounds = 0\n");
        assert!(SessionConfig::from_file(file.path()).is_err());
    }

    #[test]
    fn test_missing_file() {
        let err = SessionConfig::from_file("/nonexistent/noughts.toml").unwrap_err();
        assert!(err.message.contains("Failed to read config file"));
        assert!(err.file.ends_with("config.rs"));
    }

    #[test]
    fn test_cli_overrides_win() {
        let config = SessionConfig::new(Some(1), Some(5)).with_overrides(Some(9), None);
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.max_rounds(), Some(5));
    }
}
