//! Game configuration loaded from TOML.

use crate::tictactoe::PickerKind;
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;
use tracing::{debug, info, instrument};

/// Settings for a play session.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Pause before the AI moves, in milliseconds.
    #[serde(default = "default_ai_delay_ms")]
    ai_delay_ms: u64,

    /// AI strategy.
    #[serde(default)]
    ai: PickerKind,

    /// Seed for the random AI; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,
}

fn default_ai_delay_ms() -> u64 {
    1500
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            ai_delay_ms: default_ai_delay_ms(),
            ai: PickerKind::default(),
            seed: None,
        }
    }
}

impl GameConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(ai = %config.ai, delay_ms = config.ai_delay_ms, "Config loaded successfully");
        Ok(config)
    }

    /// Loads the file if it exists, otherwise returns defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            info!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Applies command-line overrides on top of file values.
    #[instrument(skip(self))]
    pub fn with_overrides(
        mut self,
        ai_delay_ms: Option<u64>,
        ai: Option<PickerKind>,
        seed: Option<u64>,
    ) -> Self {
        if let Some(delay) = ai_delay_ms {
            self.ai_delay_ms = delay;
        }
        if let Some(kind) = ai {
            self.ai = kind;
        }
        if seed.is_some() {
            self.seed = seed;
        }
        self
    }

    /// AI delay as a `Duration`.
    pub fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.ai_delay_ms)
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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_pause_and_strategy() {
        let config = GameConfig::default();
        assert_eq!(config.ai_delay(), Duration::from_millis(1500));
        assert_eq!(*config.ai(), PickerKind::Random);
        assert_eq!(*config.seed(), None);
    }

    #[test]
    fn test_partial_toml_fills_defaults() {
        let config: GameConfig = toml::from_str("seed = 9").unwrap();
        assert_eq!(*config.seed(), Some(9));
        assert_eq!(*config.ai_delay_ms(), 1500);
    }

    #[test]
    fn test_overrides_replace_only_given_values() {
        let config = GameConfig::default().with_overrides(Some(0), None, Some(5));
        assert_eq!(*config.ai_delay_ms(), 0);
        assert_eq!(*config.ai(), PickerKind::Random);
        assert_eq!(*config.seed(), Some(5));
    }

    #[test]
    fn test_error_records_location() {
        let err = ConfigError::new("boom".to_string());
        assert!(err.file.ends_with("config.rs"));
        assert!(err.to_string().starts_with("Config error: boom"));
    }
}
