//! Game setup configuration.
//!
//! A `GameConfig` is built once per game from interactive input. It
//! validates everything the session relies on, so construction errors are
//! answered by re-prompting the user rather than aborting.

use thiserror::Error;

/// Fewest players a game supports.
pub const MIN_PLAYERS: usize = 2;

/// Most players a game supports.
pub const MAX_PLAYERS: usize = 4;

/// Rejected game setup.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("player count must be between 2 and 4, got {0}")]
    PlayerCount(usize),
    #[error("target score must be positive")]
    TargetScore,
    #[error("player {0} has an empty name")]
    EmptyName(usize),
}

/// Validated configuration for one game session.
///
/// The order of `player_names` is the turn order for the whole session.
#[derive(Clone, Debug)]
pub struct GameConfig {
    player_names: Vec<String>,
    target_score: u32,
}

impl GameConfig {
    /// Validate and build a configuration.
    ///
    /// Requires 2-4 names, none of them blank, and a positive target
    /// score. A zero target score is rejected rather than producing a game
    /// that is already won.
    pub fn new(player_names: Vec<String>, target_score: u32) -> Result<Self, ConfigError> {
        if !(MIN_PLAYERS..=MAX_PLAYERS).contains(&player_names.len()) {
            return Err(ConfigError::PlayerCount(player_names.len()));
        }
        if target_score == 0 {
            return Err(ConfigError::TargetScore);
        }
        if let Some(index) = player_names.iter().position(|name| name.trim().is_empty()) {
            return Err(ConfigError::EmptyName(index + 1));
        }

        Ok(Self {
            player_names,
            target_score,
        })
    }

    /// Player names in turn order.
    #[must_use]
    pub fn player_names(&self) -> &[String] {
        &self.player_names
    }

    #[must_use]
    pub fn player_count(&self) -> usize {
        self.player_names.len()
    }

    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }
}
