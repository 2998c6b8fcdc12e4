//! Inbound arbiter lines

use std::collections::HashSet;
use std::fmt::Display;
use std::str::FromStr;

use crate::core::{Move, Outcome, Player, BOARD_COUNT};
use crate::error::{EngineError, EngineResult};

/// One line from the arbiter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `S <P>`: the match starts and we play as `P`.
    Start(Player),
    /// `R <b0>,<b1>,...`: our move, in one of the listed boards.
    Request(Vec<usize>),
    /// `P <P> <board> <tile>`: a tile was marked.
    Placed { player: Player, mv: Move },
    /// `G <P|S> <board>`: a local board was decided.
    Decided { outcome: Outcome, board: usize },
}

/// Parse a single arbiter line. Surrounding whitespace is ignored.
pub fn parse_command(line: &str) -> EngineResult<Command> {
    line.parse()
}

fn parse_index(line: &str, token: &str, what: &str) -> EngineResult<usize> {
    if token.is_empty() || !token.bytes().all(|b| b.is_ascii_digit()) {
        return Err(EngineError::protocol(
            line,
            format!("invalid {} index {:?}", what, token),
        ));
    }

    match token.parse::<usize>() {
        Ok(index) if index < BOARD_COUNT => Ok(index),
        _ => Err(EngineError::protocol(
            line,
            format!("{} index {} out of range", what, token),
        )),
    }
}

fn expect_args(line: &str, args: &[&str], n: usize) -> EngineResult<()> {
    if args.len() != n {
        return Err(EngineError::protocol(
            line,
            format!("expected {} arguments, found {}", n, args.len()),
        ));
    }
    Ok(())
}

impl FromStr for Command {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let line = s.trim();
        let mut tokens = line.split(' ');
        let head = tokens.next().unwrap_or_default();
        let args: Vec<&str> = tokens.collect();

        match head {
            "S" => {
                expect_args(line, &args, 1)?;
                let player = args[0]
                    .parse()
                    .map_err(|_| EngineError::protocol(line, format!("invalid player {:?}", args[0])))?;
                Ok(Command::Start(player))
            }
            "R" => {
                expect_args(line, &args, 1)?;
                let mut seen = HashSet::new();
                let mut boards = Vec::new();
                for token in args[0].split(',') {
                    let board = parse_index(line, token, "board")?;
                    if !seen.insert(board) {
                        return Err(EngineError::protocol(
                            line,
                            format!("board {} listed twice", board),
                        ));
                    }
                    boards.push(board);
                }
                Ok(Command::Request(boards))
            }
            "P" => {
                expect_args(line, &args, 3)?;
                let player = args[0]
                    .parse()
                    .map_err(|_| EngineError::protocol(line, format!("invalid player {:?}", args[0])))?;
                let board = parse_index(line, args[1], "board")?;
                let tile = parse_index(line, args[2], "tile")?;
                Ok(Command::Placed {
                    player,
                    mv: Move::new(board, tile),
                })
            }
            "G" => {
                expect_args(line, &args, 2)?;
                let outcome = args[0]
                    .parse()
                    .map_err(|_| EngineError::protocol(line, format!("invalid outcome {:?}", args[0])))?;
                let board = parse_index(line, args[1], "board")?;
                Ok(Command::Decided { outcome, board })
            }
            _ => Err(EngineError::protocol(
                line,
                format!("unknown command {:?}", head),
            )),
        }
    }
}

impl Display for Command {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Command::Start(player) => write!(f, "S {}", player),
            Command::Request(boards) => {
                let boards = boards
                    .iter()
                    .map(|b| b.to_string())
                    .collect::<Vec<_>>()
                    .join(",");
                write!(f, "R {}", boards)
            }
            Command::Placed { player, mv } => write!(f, "P {} {}", player, mv),
            Command::Decided { outcome, board } => write!(f, "G {} {}", outcome, board),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("S R", Command::Start(Player::Red) ; "start red")]
    #[test_case("S B", Command::Start(Player::Blue) ; "start blue")]
    #[test_case("R 0,1,2,3,4,5,6,7,8", Command::Request((0..9).collect()) ; "request all")]
    #[test_case("R 5", Command::Request(vec![5]) ; "request one")]
    #[test_case("R 8,0,3", Command::Request(vec![8, 0, 3]) ; "request keeps order")]
    #[test_case("P B 2 7", Command::Placed { player: Player::Blue, mv: Move::new(2, 7) } ; "placed")]
    #[test_case("G R 4", Command::Decided { outcome: Outcome::Won(Player::Red), board: 4 } ; "won")]
    #[test_case("G S 3", Command::Decided { outcome: Outcome::Stalemate, board: 3 } ; "stalemate")]
    #[test_case("  P R 0 0\r", Command::Placed { player: Player::Red, mv: Move::new(0, 0) } ; "trimmed")]
    fn test_parse(line: &str, expected: Command) {
        assert_eq!(parse_command(line).unwrap(), expected);
    }

    #[test_case("X 1 2" ; "unknown command")]
    #[test_case("" ; "empty line")]
    #[test_case("s R" ; "lowercase command")]
    #[test_case("S" ; "start without player")]
    #[test_case("S S" ; "stalemate is not a player")]
    #[test_case("S R B" ; "start with extra token")]
    #[test_case("R" ; "request without boards")]
    #[test_case("R 1,,2" ; "empty board token")]
    #[test_case("R 1,9" ; "board out of range")]
    #[test_case("R 1,2,1" ; "duplicate board")]
    #[test_case("R 1, 2" ; "space in board list")]
    #[test_case("R +1" ; "signed index")]
    #[test_case("P R 1" ; "placed missing tile")]
    #[test_case("P X 1 2" ; "placed unknown player")]
    #[test_case("P R 1 x" ; "placed non numeric tile")]
    #[test_case("P R 1 10" ; "placed tile out of range")]
    #[test_case("P R  1 2" ; "double space")]
    #[test_case("G X 4" ; "unknown outcome")]
    #[test_case("G S" ; "decided without board")]
    #[test_case("M 4 4" ; "our own move echoed back")]
    fn test_parse_rejects(line: &str) {
        let err = parse_command(line).unwrap_err();
        match err {
            EngineError::Protocol { line: raw, .. } => assert_eq!(raw, line.trim()),
            other => panic!("expected protocol error, got {}", other),
        }
    }

    #[test]
    fn test_display_matches_wire_form() {
        for line in ["S B", "R 4,0,8", "P R 3 6", "G S 1", "G B 0"] {
            assert_eq!(parse_command(line).unwrap().to_string(), line);
        }
    }
}
