//! Error types for rust-ttt.
//!
//! The search itself is total; errors only arise at the boundary where a
//! caller hands the engine coordinates, board strings or positions that
//! violate its preconditions.

use thiserror::Error;

/// Main error type for the engine.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum EngineError {
    #[error("position ({row}, {col}) is out of bounds (must be 0-2)")]
    OutOfBounds { row: usize, col: usize },

    #[error("invalid move: cell ({row}, {col}) is already occupied")]
    OccupiedCell { row: usize, col: usize },

    #[error("position is terminal: the game already has a winner or the board is full")]
    TerminalPosition,

    #[error("board string has {got} cells, expected {expected}")]
    InvalidBoardLength { expected: usize, got: usize },

    #[error("invalid character '{character}' at cell {position}")]
    InvalidCellCharacter { character: char, position: usize },

    #[error("unknown difficulty '{name}' (expected random, greedy, minimax or alphabeta)")]
    UnknownDifficulty { name: String },

    #[error("unknown player '{name}' (expected 'X' or 'O')")]
    UnknownPlayer { name: String },
}

/// Convenience type alias for Results using the crate's error type.
pub type Result<T> = std::result::Result<T, EngineError>;
