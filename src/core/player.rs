//! Players and cell contents.
//!
//! The game has exactly two marks. `Player` names the side to move and
//! `Cell` is what a grid square holds.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::error::EngineError;

/// One of the two sides, conventionally `X` and `O`.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Player {
    X,
    O,
}

impl Player {
    /// Both players, `X` first.
    pub const BOTH: [Player; 2] = [Player::X, Player::O];

    /// The other side.
    #[must_use]
    pub const fn opponent(self) -> Player {
        match self {
            Player::X => Player::O,
            Player::O => Player::X,
        }
    }

    /// The cell value this player's mark occupies.
    #[must_use]
    pub const fn cell(self) -> Cell {
        match self {
            Player::X => Cell::X,
            Player::O => Cell::O,
        }
    }

    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Player::X => 'X',
            Player::O => 'O',
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.symbol())
    }
}

impl FromStr for Player {
    type Err = EngineError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "X" | "x" => Ok(Player::X),
            "O" | "o" => Ok(Player::O),
            other => Err(EngineError::UnknownPlayer {
                name: other.to_string(),
            }),
        }
    }
}

/// Contents of a single grid square.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Cell {
    #[default]
    Empty,
    X,
    O,
}

impl Cell {
    #[must_use]
    pub const fn is_empty(self) -> bool {
        matches!(self, Cell::Empty)
    }

    /// The player owning this cell, if any.
    #[must_use]
    pub const fn player(self) -> Option<Player> {
        match self {
            Cell::Empty => None,
            Cell::X => Some(Player::X),
            Cell::O => Some(Player::O),
        }
    }

    #[must_use]
    pub const fn to_char(self) -> char {
        match self {
            Cell::Empty => '.',
            Cell::X => 'X',
            Cell::O => 'O',
        }
    }

    /// Parse a cell character. Accepts `.`, `_`, `-` and space for empty.
    #[must_use]
    pub fn from_char(c: char) -> Option<Cell> {
        match c {
            '.' | '_' | '-' | ' ' => Some(Cell::Empty),
            'X' | 'x' => Some(Cell::X),
            'O' | 'o' => Some(Cell::O),
            _ => None,
        }
    }

    /// Parse a whole cell string as used by front ends that keep `" "`,
    /// `"X"` and `"O"` per square. The empty string is an empty cell; any
    /// string longer than one character is rejected.
    #[must_use]
    pub fn from_symbol(s: &str) -> Option<Cell> {
        let mut chars = s.chars();
        match (chars.next(), chars.next()) {
            (None, _) => Some(Cell::Empty),
            (Some(c), None) => Cell::from_char(c),
            (Some(_), Some(_)) => None,
        }
    }
}

impl From<Player> for Cell {
    fn from(player: Player) -> Self {
        player.cell()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_opponent() {
        assert_eq!(Player::X.opponent(), Player::O);
        assert_eq!(Player::O.opponent(), Player::X);
        assert_eq!(Player::X.opponent().opponent(), Player::X);
    }

    #[test]
    fn test_player_cell_round_trip() {
        for player in Player::BOTH {
            assert_eq!(player.cell().player(), Some(player));
        }
        assert_eq!(Cell::Empty.player(), None);
    }

    #[test]
    fn test_cell_chars() {
        assert_eq!(Cell::from_char('x'), Some(Cell::X));
        assert_eq!(Cell::from_char('O'), Some(Cell::O));
        assert_eq!(Cell::from_char(' '), Some(Cell::Empty));
        assert_eq!(Cell::from_char('7'), None);
        assert_eq!(Cell::X.to_char(), 'X');
        assert_eq!(Cell::Empty.to_char(), '.');
    }

    #[test]
    fn test_cell_symbols() {
        assert_eq!(Cell::from_symbol("X"), Some(Cell::X));
        assert_eq!(Cell::from_symbol("o"), Some(Cell::O));
        assert_eq!(Cell::from_symbol(" "), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol(""), Some(Cell::Empty));
        assert_eq!(Cell::from_symbol("XO"), None);
        assert_eq!(Cell::from_symbol("Oops"), None);
        assert_eq!(Cell::from_symbol("?"), None);
    }

    #[test]
    fn test_player_from_str() {
        assert_eq!("X".parse::<Player>(), Ok(Player::X));
        assert_eq!(" o ".parse::<Player>(), Ok(Player::O));
        assert!(matches!(
            "Z".parse::<Player>(),
            Err(EngineError::UnknownPlayer { .. })
        ));
    }

    #[test]
    fn test_player_serialization() {
        let json = serde_json::to_string(&Player::O).unwrap();
        let deserialized: Player = serde_json::from_str(&json).unwrap();
        assert_eq!(deserialized, Player::O);
    }
}
