//! # rust-ttt
//!
//! An adversarial game-playing engine for 3×3 tic-tac-toe.
//!
//! ## Design Principles
//!
//! 1. **Pure core**: The board predicates and the search are side-effect
//!    free from the caller's point of view. Search mutates a private copy
//!    of the board and undoes every speculative mark.
//!
//! 2. **One parameterized search**: The maximizing mark is always an
//!    argument, never a hardcoded symbol, so every tier agrees on who is
//!    being optimized for.
//!
//! 3. **Injected randomness**: Random and greedy tiers draw from a seeded
//!    `GameRng` owned by the caller, never from a global source.
//!
//! ## Architecture
//!
//! The engine does no I/O. An external game loop owns the authoritative
//! board, asks the `Engine` for a move on the automated player's turn, and
//! applies it. Rendering and input validation stay on the loop's side.
//!
//! ## Modules
//!
//! - `core`: Cells, players, moves, the board and its predicates, RNG
//! - `rules`: Game outcome (win/draw) detection
//! - `search`: Minimax, alpha-beta, move policies, the engine facade
//! - `analysis`: Reachable-position enumeration and policy matches
//! - `error`: Error type for boundary violations

pub mod analysis;
pub mod core;
pub mod error;
pub mod rules;
pub mod search;

#[cfg(feature = "python")]
mod python;

// Re-export commonly used types
pub use crate::core::{Board, Cell, GameRng, GameRngState, Move, MoveList, Player, WINNING_LINES};

pub use crate::error::{EngineError, Result};

pub use crate::rules::{is_terminal, outcome, GameResult};

pub use crate::search::{
    Difficulty, Engine, EngineConfig, GreedyPolicy, Minimax, MinimaxPolicy, MovePolicy, Pruning,
    RandomPolicy, Score, ScoredMove, SearchStats,
};

pub use crate::analysis::{play_match, reachable_positions, run_matches, MatchRecord, MatchSummary};
