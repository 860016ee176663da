//! Engine bindings for Python.

use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{Board, Cell, Move, Player, SIZE};
use crate::error::EngineError;
use crate::search::{Difficulty, Engine, EngineConfig};

fn to_py_err(err: EngineError) -> PyErr {
    PyErr::new::<PyValueError, _>(err.to_string())
}

/// Convert a Python grid (`list[list[str]]`) into a `Board`.
///
/// Cells are `"X"`, `"O"`, or `" "`/`""` for empty. Longer strings are
/// rejected.
fn board_from_rows(rows: &[Vec<String>]) -> PyResult<Board> {
    if rows.len() != SIZE || rows.iter().any(|row| row.len() != SIZE) {
        return Err(PyErr::new::<PyValueError, _>("board must be a 3x3 grid"));
    }

    let mut board = Board::new();
    for (row, cells) in rows.iter().enumerate() {
        for (col, value) in cells.iter().enumerate() {
            let cell = Cell::from_symbol(value).ok_or_else(|| {
                // Report the first character that makes the string invalid.
                let mut chars = value.chars();
                let first = chars.next();
                to_py_err(EngineError::InvalidCellCharacter {
                    character: chars.next().or(first).unwrap_or_default(),
                    position: row * SIZE + col,
                })
            })?;
            board.set(Move::new(row, col).map_err(to_py_err)?, cell);
        }
    }
    Ok(board)
}

fn parse_player(player: &str) -> PyResult<Player> {
    player.parse::<Player>().map_err(to_py_err)
}

/// Python wrapper for Engine.
///
/// Chooses moves for the automated player at a fixed difficulty.
#[pyclass(name = "Engine")]
pub struct PyEngine {
    engine: Engine,
}

#[pymethods]
impl PyEngine {
    /// Create a new engine.
    ///
    /// # Arguments
    /// - difficulty: "random"/"easy", "greedy"/"medium", "minimax", "alphabeta"/"hard"
    /// - seed: RNG seed for the randomized tiers
    #[new]
    #[pyo3(signature = (difficulty = "alphabeta", seed = 42))]
    fn new(difficulty: &str, seed: u64) -> PyResult<Self> {
        let difficulty = difficulty.parse::<Difficulty>().map_err(to_py_err)?;
        let config = EngineConfig::default()
            .with_difficulty(difficulty)
            .with_seed(seed);
        Ok(Self {
            engine: Engine::new(config),
        })
    }

    /// Choose a move for `player` and return it as `(row, col)`.
    fn select_move(&mut self, board: Vec<Vec<String>>, player: &str) -> PyResult<(usize, usize)> {
        let board = board_from_rows(&board)?;
        let player = parse_player(player)?;
        self.engine
            .select_move(&board, player)
            .map(Into::into)
            .map_err(to_py_err)
    }

    /// Game-theoretic value (-1, 0, 1) of the position for `player` to move.
    fn evaluate(&mut self, board: Vec<Vec<String>>, player: &str) -> PyResult<i32> {
        let board = board_from_rows(&board)?;
        let player = parse_player(player)?;
        self.engine.evaluate(&board, player).map_err(to_py_err)
    }

    /// Nodes searched by the last call.
    #[getter]
    fn nodes(&self) -> u64 {
        self.engine.stats().nodes
    }

    #[getter]
    fn difficulty(&self) -> String {
        self.engine.policy_name().to_string()
    }

    fn __repr__(&self) -> String {
        format!("Engine(difficulty={:?})", self.engine.policy_name())
    }
}

/// True if `player` has completed a row, column or diagonal.
#[pyfunction]
pub fn is_winner(board: Vec<Vec<String>>, player: &str) -> PyResult<bool> {
    let board = board_from_rows(&board)?;
    Ok(board.is_winner(parse_player(player)?))
}

/// True if no cell is empty.
#[pyfunction]
pub fn is_full(board: Vec<Vec<String>>) -> PyResult<bool> {
    Ok(board_from_rows(&board)?.is_full())
}
