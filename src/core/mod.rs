//! Core game representations

pub mod action;
pub mod board;
pub mod display;
pub mod player;

pub use action::{Move, BOARD_COUNT, TILE_COUNT};
pub use board::{GlobalBoard, LocalBoard, Snapshot};
pub use player::{Outcome, Player, Tile};
