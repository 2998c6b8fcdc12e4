use crate::core::{GlobalBoard, Move, Outcome, Player};
use crate::error::EngineResult;

/// What a `P` line did to the match state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// A new mark was recorded.
    Recorded,
    /// The arbiter echoed the move we had already committed.
    Acknowledged,
}

/// Everything known about the running match.
#[derive(Debug, Clone)]
pub struct MatchState {
    player: Player,
    board: GlobalBoard,
    playable: Vec<usize>,
    /// Our last committed move, until the arbiter echoes it back.
    unacknowledged: Option<Move>,
}

impl MatchState {
    pub fn new(player: Player) -> Self {
        Self {
            player,
            board: GlobalBoard::new(),
            playable: Vec::new(),
            unacknowledged: None,
        }
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn board(&self) -> &GlobalBoard {
        &self.board
    }

    /// Boards from the most recent move request.
    pub fn playable(&self) -> &[usize] {
        &self.playable
    }

    pub fn set_playable(&mut self, playable: Vec<usize>) {
        self.playable = playable;
    }

    /// Record a placement announced by the arbiter.
    pub fn apply_placement(&mut self, player: Player, mv: Move) -> EngineResult<Placement> {
        if player == self.player && self.unacknowledged == Some(mv) {
            self.unacknowledged = None;
            return Ok(Placement::Acknowledged);
        }

        self.board.place(mv.board, mv.tile, player)?;
        Ok(Placement::Recorded)
    }

    pub fn apply_outcome(&mut self, board: usize, outcome: Outcome) -> EngineResult<()> {
        self.board.set_outcome(board, outcome)
    }

    /// Commit a move we are about to send. The caller validates it first.
    pub fn commit_own(&mut self, mv: Move) -> EngineResult<()> {
        self.board.place(mv.board, mv.tile, self.player)?;
        self.unacknowledged = Some(mv);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Tile;

    #[test]
    fn test_own_move_echo_is_acknowledged_once() {
        let mut state = MatchState::new(Player::Red);
        state.commit_own(Move::new(4, 4)).unwrap();

        assert_eq!(
            state.apply_placement(Player::Red, Move::new(4, 4)).unwrap(),
            Placement::Acknowledged
        );
        assert_eq!(state.board().tile(4, 4), Tile::Taken(Player::Red));

        // a second echo is a double write
        assert!(state
            .apply_placement(Player::Red, Move::new(4, 4))
            .unwrap_err()
            .is_illegal_state());
    }

    #[test]
    fn test_opponent_cannot_claim_our_tile() {
        let mut state = MatchState::new(Player::Blue);
        state.commit_own(Move::new(0, 1)).unwrap();

        assert!(state
            .apply_placement(Player::Red, Move::new(0, 1))
            .unwrap_err()
            .is_illegal_state());
        assert_eq!(state.board().tile(0, 1), Tile::Taken(Player::Blue));
    }

    #[test]
    fn test_opponent_placement_recorded() {
        let mut state = MatchState::new(Player::Blue);
        assert_eq!(
            state.apply_placement(Player::Red, Move::new(2, 3)).unwrap(),
            Placement::Recorded
        );
        assert_eq!(state.board().tile(2, 3), Tile::Taken(Player::Red));
    }
}
