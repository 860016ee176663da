//! Game rules layered on the board model.
//!
//! The board answers "has this player completed a line" and "is the grid
//! full"; this module combines those into a game outcome that both the
//! engine and external game loops use to decide when play stops.

pub mod outcome;

pub use outcome::{is_terminal, outcome, GameResult};
