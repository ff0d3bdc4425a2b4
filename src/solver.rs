//! Reference move chooser
//!
//! Uses nothing but the engine's public API:
//! 1. If some legal move wins on the spot, play the first one found
//! 2. Otherwise pick a legal move uniformly at random
//!
//! It has no lookahead beyond one ply.

use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;
use tracing::{debug, instrument};

use crate::board::Pos;
use crate::engine::{Move, Renju};

/// Legal moves that end the game in the mover's favour, in board order.
///
/// Each candidate is applied to a scratch copy and taken back again.
pub fn winning_moves(renju: &Renju) -> Vec<Pos> {
    if renju.finished() {
        return Vec::new();
    }

    let mover = renju.putter();
    let mut scratch = renju.clone();
    renju
        .legal_moves()
        .filter(|&pos| {
            if scratch.add_move(Move::at(pos)).is_err() {
                return false;
            }
            let wins = scratch.winner() == Some(mover);
            scratch.undo().is_ok() && wins
        })
        .collect()
}

/// Random/greedy solver with its own RNG
#[derive(Debug, Clone)]
pub struct RandomSolver {
    rng: StdRng,
}

impl RandomSolver {
    /// Seeded for reproducible games, or from OS entropy with `None`.
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self { rng }
    }

    /// Pick a move for the player to move, or `None` when the game is over
    /// or nothing is legal.
    #[instrument(skip_all, fields(turn = renju.turn(), putter = %renju.putter()))]
    pub fn choose(&mut self, renju: &Renju) -> Option<Pos> {
        if renju.finished() {
            return None;
        }

        if let Some(&pos) = winning_moves(renju).first() {
            debug!(%pos, "Winning move found");
            return Some(pos);
        }

        let candidates: Vec<Pos> = renju.legal_moves().collect();
        let choice = candidates.choose(&mut self.rng).copied();
        debug!(candidates = candidates.len(), ?choice, "Random move chosen");
        choice
    }
}
