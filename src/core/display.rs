use colored::Colorize;
use std::fmt;

use super::{
    board::{GlobalBoard, Snapshot},
    player::{Outcome, Player, Tile},
};

fn paint(player: Player, symbol: String) -> colored::ColoredString {
    match player {
        Player::Red => symbol.bright_red(),
        Player::Blue => symbol.bright_blue(),
    }
}

impl fmt::Display for Tile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Tile::Empty => write!(f, "·"), // middle dot for empty tiles
            Tile::Taken(player) => write!(f, "{}", paint(*player, player.to_string())),
        }
    }
}

impl fmt::Display for GlobalBoard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for outer_row in 0..3 {
            if outer_row > 0 {
                writeln!(f, "-------+-------+-------")?;
            }

            for inner_row in 0..3 {
                for outer_col in 0..3 {
                    if outer_col > 0 {
                        write!(f, " |")?;
                    }
                    let board = outer_row * 3 + outer_col;
                    for inner_col in 0..3 {
                        let tile = inner_row * 3 + inner_col;
                        write!(f, " {}", self.tile(board, tile))?;
                    }
                }
                writeln!(f)?;
            }
        }

        // One outcome per local board, in board order
        write!(f, "boards:")?;
        for outcome in self.outcomes() {
            match outcome {
                Outcome::Won(player) => write!(f, " {}", paint(*player, player.to_string()))?,
                other => write!(f, " {}", other)?,
            }
        }
        writeln!(f)
    }
}

impl fmt::Display for Snapshot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&**self, f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_render_layout() {
        colored::control::set_override(false);

        let mut board = GlobalBoard::new();
        board.place(0, 0, Player::Red).unwrap();
        board.place(8, 8, Player::Blue).unwrap();
        board.set_outcome(4, Outcome::Stalemate).unwrap();

        let text = board.snapshot().to_string();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines.len(), 12);
        assert_eq!(lines[0], " R · · | · · · | · · ·");
        assert_eq!(lines[3], "-------+-------+-------");
        assert_eq!(lines[10], " · · · | · · · | · · B");
        assert_eq!(lines[11], "boards: - - - - S - - - -");
    }
}
