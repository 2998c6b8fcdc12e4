mod driver;
pub mod legality;
mod options;
mod state;

pub use driver::{MatchDriver, MatchPhase, MatchReport};
pub use legality::{legal_moves, validate_move};
pub use options::{EngineOptions, StrategyKind};
pub use state::{MatchState, Placement};
