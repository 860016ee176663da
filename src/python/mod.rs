//! Python bindings for the rust-ttt engine.
//!
//! Lets a Python front end (console or GUI) keep its own board and game
//! loop while delegating move choice to the engine.
//!
//! # Quick Start
//!
//! ```python
//! import rust_ttt as ttt
//!
//! board = [[" "] * 3 for _ in range(3)]
//! board[1][1] = "X"
//!
//! engine = ttt.Engine(difficulty="hard", seed=7)
//! row, col = engine.select_move(board, "O")
//! board[row][col] = "O"
//!
//! if ttt.is_winner(board, "O"):
//!     print("O wins!")
//! elif ttt.is_full(board):
//!     print("It's a draw!")
//! ```

use pyo3::prelude::*;

mod py_engine;

pub use py_engine::*;

/// rust-ttt: tic-tac-toe move selection with minimax search.
#[pymodule]
fn rust_ttt(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyEngine>()?;
    m.add_function(wrap_pyfunction!(is_winner, m)?)?;
    m.add_function(wrap_pyfunction!(is_full, m)?)?;

    Ok(())
}
