//! Core game types: players, dice, configuration.
//!
//! Everything here is console-free. The session and the interactive binary
//! build on these pieces.

pub mod config;
pub mod player;
pub mod rng;

pub use config::{ConfigError, GameConfig, MAX_PLAYERS, MIN_PLAYERS};
pub use player::Player;
pub use rng::{DiceRoller, RollSource, DIE_SIDES};
