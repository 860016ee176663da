//! Whole-game analysis: position enumeration and policy matches.

pub mod reachable;
pub mod self_play;

pub use reachable::{open_positions, reachable_positions, to_move};
pub use self_play::{play_match, run_matches, MatchRecord, MatchSummary};
