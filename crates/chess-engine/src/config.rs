//! Rules configuration loaded from TOML.
//!
//! ```toml
//! # chess-rules.toml
//! start_position = "4k3/8/8/8/8/8/8/R3K3"
//! stalemate = "continue"
//! ```

use crate::rules::StalemateRule;
use chess_core::{Board, Color};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Errors that can occur when loading or validating configuration.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to read the configuration file from disk.
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),
    /// Failed to parse the configuration file as valid TOML.
    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),
    /// The start position has no king for one side.
    #[error("Start position has no {0} king")]
    MissingKing(Color),
}

/// Settings that shape a game.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RulesConfig {
    /// Board a new game (and every reset) starts from, as FEN placement.
    /// Defaults to the standard starting position.
    pub start_position: Board,
    /// What a position with no legal move and no check means.
    /// Defaults to a draw.
    pub stalemate: StalemateRule,
}

impl Default for RulesConfig {
    fn default() -> Self {
        RulesConfig {
            start_position: Board::startpos(),
            stalemate: StalemateRule::Draw,
        }
    }
}

impl RulesConfig {
    /// Parses and validates a configuration from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, ConfigError> {
        let config: RulesConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads the configuration from [`Self::config_path()`].
    ///
    /// A missing file yields the default configuration.
    pub fn load() -> Result<Self, ConfigError> {
        let config_path = Self::config_path();
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            Ok(Self::default())
        }
    }

    /// Loads the configuration from the given file.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Returns the path to the configuration file.
    ///
    /// Currently returns `chess-rules.toml` in the current working directory.
    pub fn config_path() -> PathBuf {
        PathBuf::from("chess-rules.toml")
    }

    /// Checks that both sides have a king in the start position.
    pub fn validate(&self) -> Result<(), ConfigError> {
        for color in Color::ALL {
            if self.start_position.find_king(color).is_none() {
                return Err(ConfigError::MissingKing(color));
            }
        }
        Ok(())
    }
}
