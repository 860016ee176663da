//! Board model: cells, players, moves, the grid itself, and the RNG.
//!
//! Everything in here is a small `Copy` value except `GameRng`. The search
//! layer builds on these types and never reaches past them.

pub mod board;
pub mod moves;
pub mod player;
pub mod rng;

pub use board::{Board, WINNING_LINES};
pub use moves::{Move, MoveList, CELLS, SIZE};
pub use player::{Cell, Player};
pub use rng::{GameRng, GameRngState};
