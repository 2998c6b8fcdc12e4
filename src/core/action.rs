//! Moves

use anyhow::{ensure, Context, Result};
use std::fmt::Display;
use std::str::FromStr;

/// Number of local boards in the global board, and of tiles in a local board.
pub const BOARD_COUNT: usize = 9;
pub const TILE_COUNT: usize = 9;

/// A mark placed on `tile` of local board `board`. Both indices are row-major.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Move {
    pub board: usize,
    pub tile: usize,
}

impl Move {
    pub fn new(board: usize, tile: usize) -> Self {
        Self { board, tile }
    }

    pub const fn in_bounds(&self) -> bool {
        self.board < BOARD_COUNT && self.tile < TILE_COUNT
    }
}

impl From<(usize, usize)> for Move {
    fn from((board, tile): (usize, usize)) -> Self {
        Self { board, tile }
    }
}

impl Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {}", self.board, self.tile)
    }
}

impl FromStr for Move {
    type Err = anyhow::Error;

    /// Parses `<board> <tile>`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (board, tile) = s.trim().split_once(' ').context("Invalid move")?;
        let mv = Move {
            board: board.parse().context("Invalid board index")?,
            tile: tile.parse().context("Invalid tile index")?,
        };
        ensure!(mv.in_bounds(), "Move out of range: {}", mv);
        Ok(mv)
    }
}
