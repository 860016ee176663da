//! Terminal-state detection built on the board predicates.

use serde::{Deserialize, Serialize};

use crate::core::{Board, Player};

/// Result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameResult {
    /// Single winner.
    Winner(Player),
    /// Board filled with no completed line.
    Draw,
}

impl GameResult {
    /// Check if a player won.
    #[must_use]
    pub fn is_winner(&self, player: Player) -> bool {
        matches!(self, GameResult::Winner(p) if *p == player)
    }

    #[must_use]
    pub fn is_draw(&self) -> bool {
        matches!(self, GameResult::Draw)
    }
}

impl std::fmt::Display for GameResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GameResult::Winner(player) => write!(f, "Player {} wins!", player),
            GameResult::Draw => write!(f, "It's a draw!"),
        }
    }
}

/// The result of the game on `board`, or `None` if play continues.
///
/// A completed line takes precedence over a full board, so a win on the
/// last move is reported as a win.
#[must_use]
pub fn outcome(board: &Board) -> Option<GameResult> {
    if let Some(winner) = board.winner() {
        Some(GameResult::Winner(winner))
    } else if board.is_full() {
        Some(GameResult::Draw)
    } else {
        None
    }
}

/// True if the game on `board` is over.
#[must_use]
pub fn is_terminal(board: &Board) -> bool {
    outcome(board).is_some()
}
