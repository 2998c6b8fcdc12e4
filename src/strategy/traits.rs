use anyhow::Result;

use crate::core::{Move, Player, Snapshot};

/// Picks our moves.
///
/// The driver calls a strategy from one thread, one request at a time, and
/// always hands it a detached [`Snapshot`]. A strategy may keep whatever state
/// it likes between calls; any parallelism inside `choose` is its own business.
pub trait Strategy {
    fn name(&self) -> &str;

    /// Called once, when the arbiter tells us which player we are.
    fn start(&mut self, _player: Player) {}

    /// Return a move in one of the `playable` boards on a tile that is empty in
    /// `snapshot`. An error ends the match.
    fn choose(&mut self, snapshot: &Snapshot, playable: &[usize]) -> Result<Move>;
}

impl<S: Strategy + ?Sized> Strategy for Box<S> {
    fn name(&self) -> &str {
        (**self).name()
    }

    fn start(&mut self, player: Player) {
        (**self).start(player)
    }

    fn choose(&mut self, snapshot: &Snapshot, playable: &[usize]) -> Result<Move> {
        (**self).choose(snapshot, playable)
    }
}
