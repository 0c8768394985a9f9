use std::path::Path;

use tracing::warn;

use crate::error::ConfigError;
use crate::game::{COLS, MAX_DIMENSION, MIN_DIMENSION, ROWS};

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub board: BoardConfig,
    pub display: DisplayConfig,
}

#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct BoardConfig {
    pub rows: usize,
    pub cols: usize,
}

impl Default for BoardConfig {
    fn default() -> Self {
        BoardConfig {
            rows: ROWS,
            cols: COLS,
        }
    }
}

/// Names shown for each player by the front ends.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
    pub player_one: String,
    pub player_two: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        DisplayConfig {
            player_one: "Red".to_string(),
            player_two: "Yellow".to_string(),
        }
    }
}

impl AppConfig {
    /// Load and validate configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let config = Self::parse_file(path)?;
        config.validate()?;
        Ok(config)
    }

    fn parse_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        Ok(toml::from_str(&content)?)
    }

    /// Parse configuration from a TOML file, falling back to defaults if the
    /// file does not exist. Not validated: callers apply their overrides and
    /// then call [`AppConfig::validate`].
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::parse_file(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.board.rows) {
            return Err(ConfigError::Validation(format!(
                "board.rows must be in [{MIN_DIMENSION}, {MAX_DIMENSION}]"
            )));
        }
        if !(MIN_DIMENSION..=MAX_DIMENSION).contains(&self.board.cols) {
            return Err(ConfigError::Validation(format!(
                "board.cols must be in [{MIN_DIMENSION}, {MAX_DIMENSION}]"
            )));
        }
        if self.display.player_one.trim().is_empty() {
            return Err(ConfigError::Validation(
                "display.player_one must not be empty".into(),
            ));
        }
        if self.display.player_two.trim().is_empty() {
            return Err(ConfigError::Validation(
                "display.player_two must not be empty".into(),
            ));
        }
        if self.display.player_one == self.display.player_two {
            return Err(ConfigError::Validation(
                "display.player_one and display.player_two must differ".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> String {
        toml::to_string_pretty(&AppConfig::default()).expect("default config serializes")
    }
}
