use anyhow::{Context, Result};
use rand::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::Strategy;
use crate::core::{Move, Snapshot};
use crate::engine::legality::legal_moves;

/// Uniformly random legal move.
pub struct RandomStrategy {
    rng: StdRng,
}

impl RandomStrategy {
    pub fn new() -> Self {
        Self::seeded(rand::random())
    }

    /// Same seed, same choices for the same positions.
    pub fn seeded(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }
}

impl Default for RandomStrategy {
    fn default() -> Self {
        Self::new()
    }
}

impl Strategy for RandomStrategy {
    fn name(&self) -> &str {
        "random"
    }

    fn choose(&mut self, snapshot: &Snapshot, playable: &[usize]) -> Result<Move> {
        let moves = legal_moves(snapshot, playable);
        let idx = (!moves.is_empty())
            .then(|| self.rng.random_range(0..moves.len()))
            .with_context(|| format!("no legal move in boards {:?}", playable))?;
        Ok(moves[idx])
    }
}
