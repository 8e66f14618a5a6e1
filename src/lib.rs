//! # dice-race
//!
//! A turn-based console dice game: players take turns rolling a six-sided
//! die, and the first to reach the target score wins. Finished games are
//! appended to a flat-text history log that can be replayed verbatim.
//!
//! ## Design Principles
//!
//! 1. **Pure session core**: `GameSession` is a state machine driven by a
//!    validated `GameConfig` and a roll source. It never touches the
//!    console; the interactive loop lives in the binary.
//!
//! 2. **Explicit randomness**: rolls come from a `DiceRoller` owned by the
//!    caller and seeded once at construction. Tests fix the seed or script
//!    whole roll sequences through the `RollSource` trait.
//!
//! 3. **Append-only history**: completed games are persisted as textual
//!    blocks that replay line-for-line; existing records are never
//!    rewritten.
//!
//! ## Modules
//!
//! - `core`: players, dice, game configuration
//! - `session`: turn loop, win detection, leaderboard
//! - `history`: persisted game records

pub mod core;
pub mod history;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    ConfigError, DiceRoller, GameConfig, Player, RollSource, DIE_SIDES, MAX_PLAYERS, MIN_PLAYERS,
};

pub use crate::history::{HistoryError, HistoryStore, DEFAULT_HISTORY_FILE};

pub use crate::session::{GameSession, SessionState, TurnError, TurnOutcome};
