//! Append-only game history persisted as a flat text log.
//!
//! One textual block per completed game (see [`format_record`]). The log
//! is only ever appended to; replay returns the stored content verbatim,
//! so saving N games and replaying yields exactly the N blocks in save
//! order.

use std::fs::OpenOptions;
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use log::debug;
use thiserror::Error;

use crate::core::player::Player;

/// Default history file, created in the working directory.
pub const DEFAULT_HISTORY_FILE: &str = "dice_game_history.txt";

/// History storage failure. Never fatal to a game: a finished game's
/// result is still shown on screen even when it could not be persisted.
#[derive(Debug, Error)]
pub enum HistoryError {
    #[error("could not append to history file: {0}")]
    Append(io::Error),
    #[error("could not read history file: {0}")]
    Read(io::Error),
}

/// Append-only store of completed game records.
#[derive(Clone, Debug)]
pub struct HistoryStore {
    path: PathBuf,
}

impl HistoryStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one completed game to the log, creating the file if absent.
    /// Existing content is never truncated or rewritten.
    ///
    /// The file handle is scoped to this call: it is flushed and closed on
    /// every exit path, success or failure.
    pub fn save(
        &self,
        target_score: u32,
        players: &[Player],
        winner_name: &str,
    ) -> Result<(), HistoryError> {
        let record = format_record(target_score, players, winner_name);

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(HistoryError::Append)?;
        let mut writer = BufWriter::new(file);
        writer
            .write_all(record.as_bytes())
            .map_err(HistoryError::Append)?;
        writer.flush().map_err(HistoryError::Append)?;

        debug!("saved game record to {}", self.path.display());
        Ok(())
    }

    /// The full stored content, verbatim and in original line order.
    ///
    /// `Ok(None)` means the log has never been created: the benign
    /// no-history-yet condition, distinct from a read failure.
    pub fn replay(&self) -> Result<Option<String>, HistoryError> {
        match std::fs::read_to_string(&self.path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(HistoryError::Read(e)),
        }
    }
}

/// Render one completed game as its persisted block:
///
/// ```text
/// ===== New Game =====
/// Target Score: 15
/// Alice: 4 5 6 (Total: 15, Avg: 5.00)
/// Bob: 3 2 (Total: 5, Avg: 2.50)
/// Winner: Alice
/// ====================
/// ```
///
/// followed by one blank line. Players appear in turn order; every roll
/// carries a trailing space, and the average always has two decimals.
#[must_use]
pub fn format_record(target_score: u32, players: &[Player], winner_name: &str) -> String {
    let mut out = String::new();
    out.push_str("===== New Game =====\n");
    out.push_str(&format!("Target Score: {target_score}\n"));
    for player in players {
        out.push_str(&format!("{}: ", player.name()));
        for roll in player.rolls() {
            out.push_str(&format!("{roll} "));
        }
        out.push_str(&format!(
            "(Total: {}, Avg: {:.2})\n",
            player.score(),
            player.average_roll()
        ));
    }
    out.push_str(&format!("Winner: {winner_name}\n"));
    out.push_str("====================\n\n");
    out
}
