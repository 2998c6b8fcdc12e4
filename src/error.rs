//! Engine error taxonomy

use derive_more::{Display, Error, From};

use crate::core::Move;

pub type EngineResult<T> = Result<T, EngineError>;

/// Faults raised while running a match. Every variant is fatal to the match.
#[derive(Debug, Display, Error, From)]
pub enum EngineError {
    /// The arbiter sent a line we cannot interpret, or sent it at the wrong time.
    #[display("protocol error: {reason} (line: {line:?})")]
    Protocol { line: String, reason: String },

    /// A move that breaks the placement rules.
    #[display("illegal move {mv}: {reason}")]
    IllegalMove { mv: Move, reason: String },

    /// An internal invariant was about to be broken.
    #[display("illegal state: {reason}")]
    IllegalState { reason: String },

    /// The strategy failed to produce a move.
    #[display("strategy failed: {message}")]
    Strategy { message: String },

    #[display("channel error: {_0}")]
    #[from]
    Io(std::io::Error),
}

impl EngineError {
    pub fn protocol(line: &str, reason: impl Into<String>) -> Self {
        EngineError::Protocol {
            line: line.to_string(),
            reason: reason.into(),
        }
    }

    pub fn illegal_move(mv: Move, reason: impl Into<String>) -> Self {
        EngineError::IllegalMove {
            mv,
            reason: reason.into(),
        }
    }

    pub fn illegal_state(reason: impl Into<String>) -> Self {
        EngineError::IllegalState {
            reason: reason.into(),
        }
    }

    pub fn is_protocol(&self) -> bool {
        matches!(self, EngineError::Protocol { .. })
    }

    pub fn is_illegal_move(&self) -> bool {
        matches!(self, EngineError::IllegalMove { .. })
    }

    pub fn is_illegal_state(&self) -> bool {
        matches!(self, EngineError::IllegalState { .. })
    }
}

impl From<anyhow::Error> for EngineError {
    fn from(err: anyhow::Error) -> Self {
        EngineError::Strategy {
            message: format!("{:#}", err),
        }
    }
}
