//! Match configuration loaded from TOML.

use crate::games::quoridor::{DEFAULT_MAX_ATTEMPTS, MAX_PLAYERS, StrategyKind};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::{debug, info, instrument};

/// Settings for a single match.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Number of seated players (2-4).
    #[serde(default = "default_players")]
    players: usize,

    /// Strategy for each seat, in join order.
    #[serde(default = "default_seats")]
    seats: Vec<StrategyKind>,

    /// Seed for the bots' random sources; entropy when absent.
    #[serde(default)]
    seed: Option<u64>,

    /// Rejected actions tolerated per bot turn before the match stalls.
    #[serde(default = "default_max_attempts")]
    max_attempts: usize,

    /// Turn cap; unlimited when absent.
    #[serde(default)]
    max_turns: Option<usize>,
}

#[instrument]
fn default_players() -> usize {
    2
}

#[instrument]
fn default_seats() -> Vec<StrategyKind> {
    vec![StrategyKind::Human, StrategyKind::Hard]
}

#[instrument]
fn default_max_attempts() -> usize {
    DEFAULT_MAX_ATTEMPTS
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            players: default_players(),
            seats: default_seats(),
            seed: None,
            max_attempts: default_max_attempts(),
            max_turns: None,
        }
    }
}

impl MatchConfig {
    /// Loads configuration from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading config from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let config: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(players = config.players, seats = config.seats.len(), "Config loaded successfully");
        Ok(config)
    }

    /// Overrides the player count.
    ///
    /// When no explicit seats follow, the seat list is cut or padded with
    /// [`StrategyKind::Hard`] to match.
    pub fn with_players(mut self, players: usize) -> Self {
        self.players = players;
        self.seats.resize(players, StrategyKind::Hard);
        self
    }

    /// Overrides the seat list.
    pub fn with_seats(mut self, seats: Vec<StrategyKind>) -> Self {
        self.seats = seats;
        self
    }

    /// Overrides the random seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Overrides the turn cap.
    pub fn with_max_turns(mut self, max_turns: usize) -> Self {
        self.max_turns = Some(max_turns);
        self
    }

    /// Checks that the settings describe a playable match.
    #[instrument(skip(self))]
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(2..=MAX_PLAYERS).contains(&self.players) {
            return Err(ConfigError::new(format!(
                "players must be between 2 and {}, got {}",
                MAX_PLAYERS, self.players
            )));
        }
        if self.seats.len() != self.players {
            return Err(ConfigError::new(format!(
                "{} seats configured for {} players",
                self.seats.len(),
                self.players
            )));
        }
        if self.max_attempts == 0 {
            return Err(ConfigError::new("max_attempts must be at least 1".to_string()));
        }
        Ok(())
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
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
