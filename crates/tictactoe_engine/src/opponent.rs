//! Computer opponents.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use tracing::{debug, instrument};

use crate::{Board, Position};

/// Something that can pick the next move for the computer side.
pub trait Opponent: Send + std::fmt::Debug {
    /// Chooses one of the empty positions on `board`.
    ///
    /// Returns `None` only when the board is full.
    fn choose(&mut self, board: &Board) -> Option<Position>;

    /// Returns the opponent's display name.
    fn name(&self) -> &str;
}

/// Opponent that picks uniformly at random among the empty cells.
#[derive(Debug)]
pub struct RandomOpponent {
    rng: StdRng,
}

impl RandomOpponent {
    /// Creates a random opponent seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    /// Creates a reproducible opponent.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomOpponent {
    fn default() -> Self {
        Self::new()
    }
}

impl Opponent for RandomOpponent {
    #[instrument(skip(self, board))]
    fn choose(&mut self, board: &Board) -> Option<Position> {
        let empty = board.empty_positions();
        if empty.is_empty() {
            return None;
        }
        let pick = empty[self.rng.random_range(0..empty.len())];
        debug!(position = %pick, choices = empty.len(), "Random opponent chose");
        Some(pick)
    }

    fn name(&self) -> &str {
        "Random"
    }
}
