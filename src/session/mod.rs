//! Turn orchestration: one game from first roll to a declared winner.
//!
//! The session is a pure state machine. It consumes a validated
//! [`GameConfig`](crate::core::GameConfig) and a roll source, and emits one
//! [`TurnOutcome`] per turn; all console interaction belongs to the caller.
//! That keeps the whole game loop testable without simulating a terminal.

use log::debug;
use thiserror::Error;

use crate::core::config::GameConfig;
use crate::core::player::Player;
use crate::core::rng::RollSource;

/// Why a turn could not be played.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TurnError {
    #[error("the game is already won")]
    GameOver,
}

/// What happened during one turn.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Index into the session's player list (turn order).
    pub player: usize,
    /// Face value rolled this turn.
    pub roll: u8,
    /// The player's score after the roll.
    pub score: u32,
    /// True when this roll reached the target score and ended the game.
    pub winning: bool,
}

/// Session progress.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    /// Waiting for the player at this turn-order index to roll.
    AwaitingTurn(usize),
    /// Terminal: the player at this index reached the target score.
    Won(usize),
}

/// One game session.
///
/// Turn order is the player order given at configuration and never changes.
/// Turns are strictly sequential, one roll each, wrapping back to the first
/// player after the last. The game ends the moment a score reaches or
/// passes the target; later players in the same round do not get a
/// levelling roll, so roll counts may end up unequal.
#[derive(Clone, Debug)]
pub struct GameSession {
    players: Vec<Player>,
    target_score: u32,
    state: SessionState,
}

impl GameSession {
    /// Start a session: one player per configured name, in input order,
    /// with the first player to act.
    #[must_use]
    pub fn new(config: &GameConfig) -> Self {
        let players = config.player_names().iter().map(Player::new).collect();
        Self {
            players,
            target_score: config.target_score(),
            state: SessionState::AwaitingTurn(0),
        }
    }

    #[must_use]
    pub fn state(&self) -> SessionState {
        self.state
    }

    #[must_use]
    pub fn target_score(&self) -> u32 {
        self.target_score
    }

    /// Players in turn order. The leaderboard is a separate sorted view;
    /// this order never changes for the lifetime of the session.
    #[must_use]
    pub fn players(&self) -> &[Player] {
        &self.players
    }

    /// The player due to roll, or `None` once the game is won.
    #[must_use]
    pub fn current_player(&self) -> Option<&Player> {
        match self.state {
            SessionState::AwaitingTurn(index) => Some(&self.players[index]),
            SessionState::Won(_) => None,
        }
    }

    /// The winner, once declared.
    #[must_use]
    pub fn winner(&self) -> Option<&Player> {
        match self.state {
            SessionState::Won(index) => Some(&self.players[index]),
            SessionState::AwaitingTurn(_) => None,
        }
    }

    #[must_use]
    pub fn is_over(&self) -> bool {
        matches!(self.state, SessionState::Won(_))
    }

    /// Play the current player's turn: exactly one roll, applied to their
    /// score.
    ///
    /// Transitions to `Won` when the score reaches or passes the target,
    /// otherwise advances to the next player in turn order.
    pub fn play_turn(&mut self, dice: &mut impl RollSource) -> Result<TurnOutcome, TurnError> {
        let index = match self.state {
            SessionState::AwaitingTurn(index) => index,
            SessionState::Won(_) => return Err(TurnError::GameOver),
        };

        let roll = dice.roll();
        let player = &mut self.players[index];
        player.add_roll(roll);
        let score = player.score();

        let winning = score >= self.target_score;
        if winning {
            debug!(
                "{} reached {} (target {}), game over",
                player.name(),
                score,
                self.target_score
            );
            self.state = SessionState::Won(index);
        } else {
            self.state = SessionState::AwaitingTurn((index + 1) % self.players.len());
        }

        Ok(TurnOutcome {
            player: index,
            roll,
            score,
            winning,
        })
    }

    /// Play turns until the game is won, returning the winning turn.
    ///
    /// Terminates after at most `players * target_score` turns since every
    /// roll scores at least 1. Fails only if the game was already over.
    pub fn play_to_completion(
        &mut self,
        dice: &mut impl RollSource,
    ) -> Result<TurnOutcome, TurnError> {
        loop {
            let outcome = self.play_turn(dice)?;
            if outcome.winning {
                return Ok(outcome);
            }
        }
    }

    /// Final standings: descending score, original turn order among equal
    /// scores. Does not mutate the session's turn order.
    #[must_use]
    pub fn leaderboard(&self) -> Vec<&Player> {
        let mut ranked: Vec<&Player> = self.players.iter().collect();
        // sort_by is stable, so ties keep their entry order.
        ranked.sort_by(|a, b| b.score().cmp(&a.score()));
        ranked
    }
}
