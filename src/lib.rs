//! Protocol engine for ultimate tic-tac-toe agents

pub mod core;
pub mod engine;
pub mod error;
pub mod protocol;
pub mod strategy;

// Re-export commonly used items
pub use crate::core::{GlobalBoard, LocalBoard, Move, Outcome, Player, Snapshot, Tile};
pub use crate::engine::{EngineOptions, MatchDriver, MatchReport, StrategyKind};
pub use crate::error::{EngineError, EngineResult};
pub use crate::protocol::{Command, ProtocolChannel, Response};
pub use crate::strategy::{build_strategy, Strategy};
