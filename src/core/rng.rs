//! Dice rolls backed by a deterministic, seedable RNG.
//!
//! ## Key Features
//!
//! - **Explicitly owned**: the roller is a value the caller constructs and
//!   passes around, not hidden process-wide state.
//! - **Deterministic**: same seed produces the identical roll sequence.
//! - **Substitutable**: the session only sees the `RollSource` trait, so
//!   tests can script exact sequences.
//!
//! ```
//! use dice_race::{DiceRoller, RollSource};
//!
//! let mut a = DiceRoller::from_seed(42);
//! let mut b = DiceRoller::from_seed(42);
//! assert_eq!(a.roll(), b.roll());
//! ```

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of faces on the die.
pub const DIE_SIDES: u8 = 6;

/// Source of die rolls.
///
/// Every call yields a value in `1..=DIE_SIDES`, independent of prior
/// calls. Implemented by [`DiceRoller`]; tests substitute scripted
/// sequences.
pub trait RollSource {
    /// Produce the next roll.
    fn roll(&mut self) -> u8;
}

/// Seedable dice roller.
///
/// Uses ChaCha8, seeded exactly once at construction: from OS entropy for
/// interactive play (so repeated runs see different sequences), or from a
/// fixed `u64` for reproducible games and tests.
#[derive(Clone, Debug)]
pub struct DiceRoller {
    inner: ChaCha8Rng,
}

impl DiceRoller {
    /// Create a roller seeded from OS entropy.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self {
            inner: ChaCha8Rng::from_entropy(),
        }
    }

    /// Create a roller with a fixed seed. Same seed, same sequence.
    #[must_use]
    pub fn from_seed(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
        }
    }
}

impl RollSource for DiceRoller {
    fn roll(&mut self) -> u8 {
        self.inner.gen_range(1..=DIE_SIDES)
    }
}
