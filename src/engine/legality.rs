//! Move legality against the current position and the boards the arbiter
//! made playable.
//!
//! Checks never mutate anything; committing a move is the caller's job.

use crate::core::{GlobalBoard, Move, BOARD_COUNT};
use crate::error::{EngineError, EngineResult};

/// Check that `mv` may be played now.
///
/// `playable` is the list from the arbiter's move request and is taken as
/// given: which boards are open depends on the previous move, and the arbiter
/// tracks that.
pub fn validate_move(board: &GlobalBoard, mv: Move, playable: &[usize]) -> EngineResult<()> {
    if !playable.contains(&mv.board) {
        return Err(EngineError::illegal_move(
            mv,
            format!("board {} is not playable (playable: {:?})", mv.board, playable),
        ));
    }

    if !mv.in_bounds() {
        return Err(EngineError::illegal_move(mv, "index out of range"));
    }

    if board.is_closed(mv.board) {
        return Err(EngineError::illegal_move(
            mv,
            format!(
                "board {} is already decided ({})",
                mv.board,
                board.outcome(mv.board)
            ),
        ));
    }

    if let Some(owner) = board.tile(mv.board, mv.tile).owner() {
        return Err(EngineError::illegal_move(
            mv,
            format!("tile is already taken by {}", owner),
        ));
    }

    Ok(())
}

/// Every move that passes [`validate_move`], board by board in the order of
/// `playable`, tiles ascending.
pub fn legal_moves(board: &GlobalBoard, playable: &[usize]) -> Vec<Move> {
    playable
        .iter()
        .copied()
        .filter(|&b| b < BOARD_COUNT && !board.is_closed(b))
        .flat_map(|b| board.empty_tiles(b).map(move |t| Move::new(b, t)))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Outcome, Player, TILE_COUNT};
    use test_case::test_case;

    const ALL: [usize; 9] = [0, 1, 2, 3, 4, 5, 6, 7, 8];

    fn position() -> GlobalBoard {
        let mut board = GlobalBoard::new();
        board.place(0, 4, Player::Red).unwrap();
        board.place(4, 0, Player::Blue).unwrap();
        board.set_outcome(7, Outcome::Won(Player::Blue)).unwrap();
        board
    }

    #[test_case(Move::new(0, 0), &ALL ; "open tile on playable board")]
    #[test_case(Move::new(4, 8), &[4] ; "single playable board")]
    #[test_case(Move::new(8, 8), &[8, 2] ; "last tile of last board")]
    fn test_accepts(mv: Move, playable: &[usize]) {
        validate_move(&position(), mv, playable).unwrap();
    }

    #[test_case(Move::new(1, 0), &[4] ; "board not playable")]
    #[test_case(Move::new(7, 0), &ALL ; "board closed")]
    #[test_case(Move::new(0, 4), &ALL ; "tile taken by red")]
    #[test_case(Move::new(4, 0), &[4] ; "tile taken by blue")]
    #[test_case(Move::new(0, 9), &ALL ; "tile out of range")]
    #[test_case(Move::new(9, 0), &ALL ; "board out of range")]
    fn test_rejects(mv: Move, playable: &[usize]) {
        let err = validate_move(&position(), mv, playable).unwrap_err();
        assert!(err.is_illegal_move(), "{}", err);
    }

    #[test]
    fn test_validation_has_no_side_effect() {
        let board = position();
        let before = board.clone();
        let _ = validate_move(&board, Move::new(0, 0), &ALL);
        let _ = validate_move(&board, Move::new(0, 4), &ALL);
        assert_eq!(board, before);
    }

    #[test]
    fn test_legal_moves_skip_taken_and_closed() {
        let board = position();
        let moves = legal_moves(&board, &[7, 4, 0]);

        assert_eq!(moves.len(), 2 * TILE_COUNT - 2);
        assert_eq!(moves[0], Move::new(4, 1));
        assert!(!moves.iter().any(|m| m.board == 7));
        assert!(!moves.contains(&Move::new(0, 4)));

        for mv in moves {
            validate_move(&board, mv, &[7, 4, 0]).unwrap();
        }
    }

    #[test]
    fn test_legal_moves_empty_when_nothing_open() {
        let board = position();
        assert!(legal_moves(&board, &[7]).is_empty());
        assert!(legal_moves(&board, &[]).is_empty());
    }
}
