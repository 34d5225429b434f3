//! Python bindings for the boop-zero engine.
//!
//! Implements the game interface an AlphaZero-style training loop calls.
//!
//! # Quick Start
//!
//! ```python
//! import boop_zero
//!
//! game = boop_zero.BoopGame()
//! board = game.getInitBoard()          # float32 array, shape (9, 6, 6)
//! mask = game.getValidMoves(board, 1)  # uint8 array, length 188
//! board, player = game.getNextState(board, 1, 14)
//! ```

use pyo3::prelude::*;

mod py_game;

pub use py_game::*;

/// boop-zero: the Boop board game for AlphaZero-style training.
#[pymodule]
fn boop_zero(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyBoopGame>()?;
    m.add("ACTION_SIZE", crate::core::ACTION_SPACE_SIZE)?;
    Ok(())
}
