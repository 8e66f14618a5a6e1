//! Player identity and per-game scoring state.

/// A participant in one game session.
///
/// Holds the ordered, append-only sequence of rolls and the running total.
/// The score is always the sum of the recorded rolls.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Player {
    name: String,
    score: u32,
    rolls: Vec<u8>,
}

impl Player {
    /// Create a player with a zero score and no rolls.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            score: 0,
            rolls: Vec::new(),
        }
    }

    /// Record one die roll: appends to the roll history and adds the face
    /// value to the score.
    ///
    /// The caller is responsible for only passing values produced by a
    /// roll source, i.e. `1..=DIE_SIDES`.
    pub fn add_roll(&mut self, value: u8) {
        self.rolls.push(value);
        self.score += u32::from(value);
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn score(&self) -> u32 {
        self.score
    }

    /// Rolls in the order they were made.
    #[must_use]
    pub fn rolls(&self) -> &[u8] {
        &self.rolls
    }

    /// Arithmetic mean of all recorded rolls, 0 when there are none yet.
    #[must_use]
    pub fn average_roll(&self) -> f64 {
        if self.rolls.is_empty() {
            return 0.0;
        }
        f64::from(self.score) / self.rolls.len() as f64
    }
}
