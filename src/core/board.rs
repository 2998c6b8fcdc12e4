//! Nested board model: nine local boards plus the outcome of each.

use std::ops::{Deref, Index};

use super::action::{Move, BOARD_COUNT, TILE_COUNT};
use super::player::{Outcome, Player, Tile};
use crate::error::{EngineError, EngineResult};

/// One 3x3 grid, tiles in row-major order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct LocalBoard {
    tiles: [Tile; TILE_COUNT],
}

impl LocalBoard {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn tiles(&self) -> &[Tile; TILE_COUNT] {
        &self.tiles
    }

    pub fn empty_tiles(&self) -> impl Iterator<Item = usize> + '_ {
        self.tiles
            .iter()
            .enumerate()
            .filter(|(_, tile)| tile.is_empty())
            .map(|(i, _)| i)
    }
}

impl Index<usize> for LocalBoard {
    type Output = Tile;

    fn index(&self, index: usize) -> &Self::Output {
        &self.tiles[index]
    }
}

/// The 3x3 arrangement of local boards.
///
/// Outcomes are kept alongside the boards rather than derived from them: the
/// arbiter decides wins and stalemates, and we record what it announces.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GlobalBoard {
    boards: [LocalBoard; BOARD_COUNT],
    outcomes: [Outcome; BOARD_COUNT],
}

impl GlobalBoard {
    pub fn new() -> Self {
        Self::default()
    }

    /// Mark `tile` of `board` for `player`. Tiles are write-once.
    pub fn place(&mut self, board: usize, tile: usize, player: Player) -> EngineResult<()> {
        let mv = Move::new(board, tile);
        if !mv.in_bounds() {
            return Err(EngineError::illegal_state(format!(
                "placement ({}) is out of range",
                mv
            )));
        }

        let slot = &mut self.boards[board].tiles[tile];
        if let Tile::Taken(owner) = *slot {
            return Err(EngineError::illegal_state(format!(
                "tile {} of board {} is already taken by {}",
                tile, board, owner
            )));
        }

        *slot = Tile::Taken(player);
        Ok(())
    }

    /// Record the outcome of `board`. Re-announcing the same outcome is a no-op,
    /// changing a decided outcome is not allowed.
    pub fn set_outcome(&mut self, board: usize, outcome: Outcome) -> EngineResult<()> {
        if board >= BOARD_COUNT {
            return Err(EngineError::illegal_state(format!(
                "board {} is out of range",
                board
            )));
        }

        let current = self.outcomes[board];
        if current.is_decided() && current != outcome {
            return Err(EngineError::illegal_state(format!(
                "board {} is already decided as {}, cannot become {}",
                board, current, outcome
            )));
        }

        self.outcomes[board] = outcome;
        Ok(())
    }

    /// # Panics
    ///
    /// The indexed accessors below panic when `board` or `tile` is 9 or more.
    /// Use [`GlobalBoard::get_tile`] or [`GlobalBoard::get_outcome`] for
    /// unchecked input.
    pub fn board(&self, board: usize) -> &LocalBoard {
        &self.boards[board]
    }

    pub fn boards(&self) -> &[LocalBoard; BOARD_COUNT] {
        &self.boards
    }

    pub fn tile(&self, board: usize, tile: usize) -> Tile {
        self.boards[board][tile]
    }

    pub fn outcome(&self, board: usize) -> Outcome {
        self.outcomes[board]
    }

    pub fn get_tile(&self, board: usize, tile: usize) -> Option<Tile> {
        self.boards.get(board)?.tiles.get(tile).copied()
    }

    pub fn get_outcome(&self, board: usize) -> Option<Outcome> {
        self.outcomes.get(board).copied()
    }

    pub fn outcomes(&self) -> &[Outcome; BOARD_COUNT] {
        &self.outcomes
    }

    /// A board with a decided outcome takes no further marks.
    pub fn is_closed(&self, board: usize) -> bool {
        self.outcomes[board].is_decided()
    }

    pub fn empty_tiles(&self, board: usize) -> impl Iterator<Item = usize> + '_ {
        self.boards[board].empty_tiles()
    }

    pub fn decided_count(&self) -> usize {
        self.outcomes.iter().filter(|o| o.is_decided()).count()
    }

    pub fn taken_count(&self) -> usize {
        self.boards
            .iter()
            .map(|b| b.tiles.iter().filter(|t| !t.is_empty()).count())
            .sum()
    }

    /// Copy of the current position for handing to code outside the engine.
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            board: self.clone(),
        }
    }
}

/// Read-only copy of a [`GlobalBoard`].
///
/// Owns its data, so nothing done with a snapshot reaches the live board.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snapshot {
    board: GlobalBoard,
}

impl Deref for Snapshot {
    type Target = GlobalBoard;

    fn deref(&self) -> &Self::Target {
        &self.board
    }
}
