//! Game configuration.

use crate::error::ConfigError;
use crate::types::Player;
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Who plays which side.
///
/// Loaded from TOML; absent keys take their defaults:
///
/// ```toml
/// ai_player = "O"
/// first_player = "X"
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct GameConfig {
    /// Side played by the automated opponent.
    #[serde(default = "default_ai_player")]
    ai_player: Player,

    /// Side that moves first.
    #[serde(default = "default_first_player")]
    first_player: Player,
}

fn default_ai_player() -> Player {
    Player::O
}

fn default_first_player() -> Player {
    Player::X
}

impl GameConfig {
    /// Creates a configuration.
    pub fn new(ai_player: Player, first_player: Player) -> Self {
        Self {
            ai_player,
            first_player,
        }
    }

    /// Side played by the human.
    pub fn human_player(&self) -> Player {
        self.ai_player.opponent()
    }

    /// Returns a copy with the automated side replaced.
    pub fn with_ai_player(mut self, ai_player: Player) -> Self {
        self.ai_player = ai_player;
        self
    }

    /// Returns a copy with the starting side replaced.
    pub fn with_first_player(mut self, first_player: Player) -> Self {
        self.first_player = first_player;
        self
    }

    /// Parses configuration from a TOML string.
    #[instrument(skip(content))]
    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))
    }

    /// Loads configuration from TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config = Self::from_toml(&content)?;
        info!(ai_player = %config.ai_player, first_player = %config.first_player, "Config loaded");
        Ok(config)
    }

    /// Loads `path` if it exists, otherwise returns the defaults.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn load_or_default(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        if path.as_ref().exists() {
            Self::from_file(path)
        } else {
            debug!("Config file not found, using defaults");
            Ok(Self::default())
        }
    }
}

impl Default for GameConfig {
    fn default() -> Self {
        Self::new(default_ai_player(), default_first_player())
    }
}
