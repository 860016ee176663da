//! Policy-vs-policy matches.
//!
//! Plays complete games between two move policies, mainly to check the
//! strength of the tiers against each other.

use serde::{Deserialize, Serialize};
use tracing::{debug, trace};

use crate::core::{Board, GameRng, Move, Player};
use crate::error::{EngineError, Result};
use crate::rules::{outcome, GameResult};
use crate::search::{MovePolicy, SearchStats};

/// A finished game.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchRecord {
    /// Player who made the first move.
    pub first: Player,
    /// Moves in the order they were played.
    pub moves: Vec<Move>,
    /// Final position.
    pub board: Board,
    /// How the game ended.
    pub result: GameResult,
    /// Search nodes spent by both sides.
    pub nodes: u64,
}

/// Tally of a series of matches.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct MatchSummary {
    pub x_wins: u32,
    pub o_wins: u32,
    pub draws: u32,
}

impl MatchSummary {
    pub fn record(&mut self, result: GameResult) {
        match result {
            GameResult::Winner(Player::X) => self.x_wins += 1,
            GameResult::Winner(Player::O) => self.o_wins += 1,
            GameResult::Draw => self.draws += 1,
        }
    }

    #[must_use]
    pub fn games(&self) -> u32 {
        self.x_wins + self.o_wins + self.draws
    }

    #[must_use]
    pub fn wins(&self, player: Player) -> u32 {
        match player {
            Player::X => self.x_wins,
            Player::O => self.o_wins,
        }
    }
}

/// Play one game from the empty board.
///
/// Fails only if a policy returns an occupied cell.
pub fn play_match(
    x_policy: &dyn MovePolicy,
    o_policy: &dyn MovePolicy,
    first: Player,
    rng: &mut GameRng,
) -> Result<MatchRecord> {
    let mut board = Board::new();
    let mut moves = Vec::with_capacity(9);
    let mut stats = SearchStats::new();
    let mut to_move = first;

    let result = loop {
        if let Some(result) = outcome(&board) {
            break result;
        }

        let policy = match to_move {
            Player::X => x_policy,
            Player::O => o_policy,
        };
        let mv = policy
            .choose_move(&board, to_move, rng, &mut stats)
            .ok_or(EngineError::TerminalPosition)?;
        board.place(mv, to_move)?;
        trace!(player = %to_move, %mv, policy = policy.name(), "played");

        moves.push(mv);
        to_move = to_move.opponent();
    };

    Ok(MatchRecord {
        first,
        moves,
        board,
        result,
        nodes: stats.nodes,
    })
}

/// Play `games` matches, each with its own fork of a `seed`ed RNG.
pub fn run_matches(
    x_policy: &dyn MovePolicy,
    o_policy: &dyn MovePolicy,
    first: Player,
    games: u32,
    seed: u64,
) -> Result<MatchSummary> {
    let mut rng = GameRng::new(seed);
    let mut summary = MatchSummary::default();

    for _ in 0..games {
        let mut game_rng = rng.fork();
        let record = play_match(x_policy, o_policy, first, &mut game_rng)?;
        summary.record(record.result);
    }

    debug!(
        x = x_policy.name(),
        o = o_policy.name(),
        x_wins = summary.x_wins,
        o_wins = summary.o_wins,
        draws = summary.draws,
        "match series finished"
    );
    Ok(summary)
}
