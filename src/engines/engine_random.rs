//! Uniform random move selection.
//!
//! Picks one legal move with equal probability. Used to drive simulated
//! games in tests and benchmarks; seed it for reproducible runs.

use rand::prelude::IndexedRandom;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::game_state::chess_types::*;
use crate::move_generation::legal_move_generator::all_legal_moves;

pub struct RandomMoveSelector {
    rng: StdRng,
}

impl RandomMoveSelector {
    /// Seeded from the operating system.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_os_rng(),
        }
    }

    pub fn with_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// A uniformly chosen legal move, or `None` when there is none.
    pub fn select(&mut self, position: &Position) -> Option<Move> {
        let legal_moves = all_legal_moves(position);
        legal_moves.as_slice().choose(&mut self.rng).copied()
    }

    /// This selector as a move-selection capability for `play_out`.
    pub fn as_selector(&mut self) -> impl FnMut(&Position) -> Option<Move> + '_ {
        move |position| self.select(position)
    }
}

impl Default for RandomMoveSelector {
    fn default() -> Self {
        Self::new()
    }
}
