//! Seeded randomness for the random and greedy tiers.
//!
//! The engine never reads a global generator. A `GameRng` is created from a
//! seed in `EngineConfig` and passed into each policy call, so a session
//! replays exactly from its seed.
//!
//! ```
//! use rust_ttt::core::{Board, GameRng};
//!
//! let empties = Board::new().empty_cells();
//! let a = GameRng::new(7).pick_move(&empties);
//! let b = GameRng::new(7).pick_move(&empties);
//! assert_eq!(a, b);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

use super::moves::Move;

/// Golden-ratio increment used to spread per-game seeds apart.
const STREAM_STEP: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream with enough bookkeeping to snapshot and split it.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    streams: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            streams: 0,
        }
    }

    /// Split off an independent stream, e.g. one per game of a match series.
    ///
    /// The parent's own sequence is not advanced; only its stream counter is.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.streams += 1;
        Self::new(self.seed ^ self.streams.wrapping_mul(STREAM_STEP))
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Uniformly pick one of `moves`, or `None` if there are none.
    pub fn pick_move(&mut self, moves: &[Move]) -> Option<Move> {
        moves.choose(&mut self.inner).copied()
    }

    /// Snapshot for reproducing a session later.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.inner.get_word_pos(),
            streams: self.streams,
        }
    }

    #[must_use]
    pub fn from_state(state: &GameRngState) -> Self {
        let mut inner = ChaCha8Rng::seed_from_u64(state.seed);
        inner.set_word_pos(state.word_pos);
        Self {
            inner,
            seed: state.seed,
            streams: state.streams,
        }
    }
}

/// Serializable position of a `GameRng`.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    /// ChaCha8 word position.
    pub word_pos: u128,
    /// Streams forked so far.
    pub streams: u64,
}
