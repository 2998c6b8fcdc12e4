use std::collections::VecDeque;

use anyhow::{bail, Result};

use super::Strategy;
use crate::core::{Move, Player, Snapshot};

/// Plays a fixed list of moves in order, whatever the position.
///
/// Moves are not checked here; the driver validates them like any other.
#[derive(Debug, Clone, Default)]
pub struct ScriptedStrategy {
    moves: VecDeque<Move>,
    player: Option<Player>,
    calls: Vec<Vec<usize>>,
    taken_seen: Vec<usize>,
}

impl ScriptedStrategy {
    pub fn new<I: IntoIterator<Item = Move>>(moves: I) -> Self {
        Self {
            moves: moves.into_iter().collect(),
            ..Self::default()
        }
    }

    /// The player announced through [`Strategy::start`], if any.
    pub fn player(&self) -> Option<Player> {
        self.player
    }

    /// The playable boards of every request seen so far.
    pub fn calls(&self) -> &[Vec<usize>] {
        &self.calls
    }

    /// Taken tiles in the snapshot handed to each request.
    pub fn taken_seen(&self) -> &[usize] {
        &self.taken_seen
    }
}

impl Strategy for ScriptedStrategy {
    fn name(&self) -> &str {
        "scripted"
    }

    fn start(&mut self, player: Player) {
        self.player = Some(player);
    }

    fn choose(&mut self, snapshot: &Snapshot, playable: &[usize]) -> Result<Move> {
        self.calls.push(playable.to_vec());
        self.taken_seen.push(snapshot.taken_count());
        match self.moves.pop_front() {
            Some(mv) => Ok(mv),
            None => bail!("script exhausted after {} moves", self.calls.len() - 1),
        }
    }
}
