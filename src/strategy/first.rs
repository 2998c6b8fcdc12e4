use anyhow::{Context, Result};

use super::Strategy;
use crate::core::{Move, Snapshot};
use crate::engine::legality::legal_moves;

/// Always the first legal move: lowest free tile of the first open board in
/// request order.
#[derive(Debug, Clone, Default)]
pub struct FirstFreeStrategy;

impl Strategy for FirstFreeStrategy {
    fn name(&self) -> &str {
        "first"
    }

    fn choose(&mut self, snapshot: &Snapshot, playable: &[usize]) -> Result<Move> {
        legal_moves(snapshot, playable)
            .first()
            .copied()
            .with_context(|| format!("no legal move in boards {:?}", playable))
    }
}
