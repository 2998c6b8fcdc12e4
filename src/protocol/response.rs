//! Outbound lines

use std::fmt::Display;
use std::str::FromStr;

use crate::core::Move;
use crate::error::EngineError;

/// A line we send to the arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Response {
    /// `M <board> <tile>`
    Move(Move),
}

impl Display for Response {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Response::Move(mv) => write!(f, "M {} {}", mv.board, mv.tile),
        }
    }
}

impl FromStr for Response {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        match line.split_once(' ') {
            Some(("M", rest)) => rest
                .parse::<Move>()
                .map(Response::Move)
                .map_err(|e| EngineError::protocol(line, format!("{:#}", e))),
            _ => Err(EngineError::protocol(line, "expected a move line")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_move() {
        assert_eq!(Response::Move(Move::new(4, 4)).to_string(), "M 4 4");
        assert_eq!(Response::Move(Move::new(0, 8)).to_string(), "M 0 8");
    }

    #[test]
    fn test_parse_move() {
        assert_eq!(
            "M 3 1".parse::<Response>().unwrap(),
            Response::Move(Move::new(3, 1))
        );
        assert!("M 3".parse::<Response>().unwrap_err().is_protocol());
        assert!("m 3 1".parse::<Response>().unwrap_err().is_protocol());
        assert!("M 3 9".parse::<Response>().unwrap_err().is_protocol());
    }
}
