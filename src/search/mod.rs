//! Adversarial search for rust-ttt.
//!
//! ## Overview
//!
//! - **Minimax**: exhaustive depth-first search over every continuation,
//!   optionally with alpha-beta pruning. Both variants return identical
//!   scores; pruning only cuts the node count.
//! - **Policies**: one `MovePolicy` per difficulty tier (random, greedy
//!   one-ply, full search, full search with pruning).
//! - **Engine**: the facade an external game loop calls with its board.
//!
//! ## Usage
//!
//! ```rust
//! use rust_ttt::core::{Board, Player};
//! use rust_ttt::search::{Difficulty, Engine, EngineConfig};
//!
//! let mut board = Board::new();
//! let mut engine = Engine::new(EngineConfig::default().with_difficulty(Difficulty::AlphaBeta));
//!
//! let mv = engine.select_move(&board, Player::O).unwrap();
//! board.place(mv, Player::O).unwrap();
//! println!("{board}\nnodes searched: {}", engine.stats().nodes);
//! ```

pub mod config;
pub mod engine;
pub mod minimax;
pub mod policy;
pub mod stats;

pub use config::{Difficulty, EngineConfig};
pub use engine::Engine;
pub use minimax::{terminal_score, Minimax, Pruning, Score, ScoredMove, DRAW, LOSS, WIN};
pub use policy::{completing_move, GreedyPolicy, MinimaxPolicy, MovePolicy, RandomPolicy};
pub use stats::SearchStats;
