use anyhow::{anyhow, bail, Result};
use std::fmt::Display;
use std::ops::Not;
use std::str::FromStr;

/// Player in the game. Red moves first and is announced as `R`, Blue as `B`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Player {
    Red,
    Blue,
}

impl Player {
    pub fn all() -> [Player; 2] {
        [Player::Red, Player::Blue]
    }

    pub fn opponent(self) -> Self {
        match self {
            Player::Red => Player::Blue,
            Player::Blue => Player::Red,
        }
    }

    pub fn to_char(self) -> char {
        match self {
            Player::Red => 'R',
            Player::Blue => 'B',
        }
    }

    pub fn from_char(c: char) -> Option<Self> {
        match c {
            'R' => Some(Player::Red),
            'B' => Some(Player::Blue),
            _ => None,
        }
    }
}

impl Not for Player {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.opponent()
    }
}

impl Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.to_char())
    }
}

impl FromStr for Player {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (Some(c), None) => Player::from_char(c).ok_or_else(|| anyhow!("Unknown player: {}", s)),
            _ => bail!("Unknown player: {}", s),
        }
    }
}

/// Contents of a single tile. Once a tile is taken it never changes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Tile {
    #[default]
    Empty,
    Taken(Player),
}

impl Tile {
    pub fn is_empty(self) -> bool {
        matches!(self, Tile::Empty)
    }

    pub fn owner(self) -> Option<Player> {
        match self {
            Tile::Empty => None,
            Tile::Taken(player) => Some(player),
        }
    }
}

impl From<Player> for Tile {
    fn from(player: Player) -> Self {
        Tile::Taken(player)
    }
}

/// Result of a local board, as announced by the arbiter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum Outcome {
    #[default]
    Undecided,
    Won(Player),
    Stalemate,
}

impl Outcome {
    pub fn is_decided(self) -> bool {
        !matches!(self, Outcome::Undecided)
    }

    /// Wire form of a decided outcome: `R`, `B` or `S`.
    pub fn to_char(self) -> Option<char> {
        match self {
            Outcome::Undecided => None,
            Outcome::Won(player) => Some(player.to_char()),
            Outcome::Stalemate => Some('S'),
        }
    }
}

impl Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::Undecided => write!(f, "-"),
            Outcome::Won(player) => write!(f, "{}", player),
            Outcome::Stalemate => write!(f, "S"),
        }
    }
}

impl FromStr for Outcome {
    type Err = anyhow::Error;

    /// Parses a decided outcome. There is no wire form for `Undecided`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "S" => Ok(Outcome::Stalemate),
            _ => s
                .parse::<Player>()
                .map(Outcome::Won)
                .map_err(|_| anyhow!("Unknown outcome: {}", s)),
        }
    }
}
