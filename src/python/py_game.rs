//! Framework-facing game binding.
//!
//! Boards cross the boundary as `float32` arrays of shape `(9, 6, 6)` and
//! players as `1` / `-1`.

use numpy::{PyArray1, PyArray3, PyArrayMethods, PyReadonlyArray3};
use pyo3::exceptions::PyValueError;
use pyo3::prelude::*;

use crate::core::{BoopConfig, BoopError, Player, PromotionRule};
use crate::games::boop::BoopGame;
use crate::nn::tensor::BoardTensor;
use crate::rules::TwoPlayerGame;

impl From<BoopError> for PyErr {
    fn from(err: BoopError) -> PyErr {
        PyValueError::new_err(err.to_string())
    }
}

fn player_from_int(player: i32) -> PyResult<Player> {
    Player::from_sign(player)
        .ok_or_else(|| PyValueError::new_err(format!("player must be 1 or -1, got {}", player)))
}

fn board_from_numpy(board: PyReadonlyArray3<'_, f32>) -> PyResult<BoardTensor> {
    let view = board.as_array();
    if view.shape() != BoardTensor::SHAPE {
        return Err(PyValueError::new_err(format!(
            "board must have shape {:?}, got {:?}",
            BoardTensor::SHAPE,
            view.shape()
        )));
    }
    Ok(BoardTensor::from_vec(view.iter().copied().collect())?)
}

fn board_to_numpy(py: Python<'_>, board: BoardTensor) -> PyResult<Bound<'_, PyArray3<f32>>> {
    PyArray1::from_vec_bound(py, board.into_vec()).reshape(BoardTensor::SHAPE)
}

/// Python wrapper for BoopGame.
///
/// Exposes the method names the AlphaZero framework expects.
#[pyclass(name = "BoopGame")]
#[derive(Clone)]
pub struct PyBoopGame {
    inner: BoopGame,
}

#[pymethods]
impl PyBoopGame {
    /// Create a game.
    ///
    /// # Arguments
    /// - kittens_per_player: Starting kitten inventory per player
    /// - booping: Whether placements push adjacent pieces
    /// - promote_all: Graduate all three kittens of a triple into cats
    /// - draw_value: Value reported for a draw (must be non-zero)
    #[new]
    #[pyo3(signature = (
        kittens_per_player = 8,
        booping = true,
        promote_all = false,
        draw_value = 1e-4
    ))]
    fn new(
        kittens_per_player: u8,
        booping: bool,
        promote_all: bool,
        draw_value: f32,
    ) -> PyResult<Self> {
        if draw_value == 0.0 {
            return Err(PyValueError::new_err("draw_value must be non-zero"));
        }
        let promotion = if promote_all {
            PromotionRule::PromoteAll
        } else {
            PromotionRule::PromoteOne
        };
        let config = BoopConfig::new()
            .with_kittens_per_player(kittens_per_player)
            .with_booping(booping)
            .with_promotion(promotion)
            .with_draw_value(draw_value);
        Ok(Self {
            inner: BoopGame::new(config),
        })
    }

    #[pyo3(name = "getInitBoard")]
    fn get_init_board<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray3<f32>>> {
        board_to_numpy(py, self.inner.initial_board())
    }

    #[pyo3(name = "getBoardSize")]
    fn get_board_size(&self) -> (usize, usize) {
        self.inner.board_size()
    }

    #[pyo3(name = "getActionSize")]
    fn get_action_size(&self) -> usize {
        self.inner.action_size()
    }

    /// Returns `(next_board, next_player)`.
    #[pyo3(name = "getNextState")]
    fn get_next_state<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray3<'py, f32>,
        player: i32,
        action: i64,
    ) -> PyResult<(Bound<'py, PyArray3<f32>>, i32)> {
        let board = board_from_numpy(board)?;
        let (next, next_player) = self
            .inner
            .next_state(&board, player_from_int(player)?, action)?;
        Ok((board_to_numpy(py, next)?, i32::from(next_player.sign())))
    }

    #[pyo3(name = "getValidMoves")]
    fn get_valid_moves<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray3<'py, f32>,
        player: i32,
    ) -> PyResult<Bound<'py, PyArray1<u8>>> {
        let board = board_from_numpy(board)?;
        let mask = self.inner.valid_moves(&board, player_from_int(player)?)?;
        Ok(PyArray1::from_vec_bound(py, mask))
    }

    /// `0` ongoing, `1` won, `-1` lost, small non-zero value for a draw.
    #[pyo3(name = "getGameEnded")]
    fn get_game_ended(&self, board: PyReadonlyArray3<'_, f32>, player: i32) -> PyResult<f32> {
        let board = board_from_numpy(board)?;
        let outcome = self.inner.game_ended(&board, player_from_int(player)?)?;
        Ok(outcome.value(self.inner.config().draw_value))
    }

    #[pyo3(name = "getCanonicalForm")]
    fn get_canonical_form<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray3<'py, f32>,
        player: i32,
    ) -> PyResult<Bound<'py, PyArray3<f32>>> {
        let board = board_from_numpy(board)?;
        let canonical = self.inner.canonical_form(&board, player_from_int(player)?);
        board_to_numpy(py, canonical)
    }

    /// List of `(board, pi)` pairs, identity first.
    #[pyo3(name = "getSymmetries")]
    fn get_symmetries<'py>(
        &self,
        py: Python<'py>,
        board: PyReadonlyArray3<'py, f32>,
        pi: Vec<f32>,
    ) -> PyResult<Vec<(Bound<'py, PyArray3<f32>>, Bound<'py, PyArray1<f32>>)>> {
        let board = board_from_numpy(board)?;
        let mut out = Vec::with_capacity(8);
        for (b, p) in self.inner.symmetries(&board, &pi)? {
            out.push((board_to_numpy(py, b)?, PyArray1::from_vec_bound(py, p)));
        }
        Ok(out)
    }

    #[pyo3(name = "stringRepresentation")]
    fn string_representation(&self, board: PyReadonlyArray3<'_, f32>) -> PyResult<String> {
        let board = board_from_numpy(board)?;
        Ok(self.inner.string_representation(&board)?)
    }

    /// Hash of `stringRepresentation`, for transposition tables.
    #[pyo3(name = "fingerprintKey")]
    fn fingerprint_key(&self, board: PyReadonlyArray3<'_, f32>) -> PyResult<u64> {
        let board = board_from_numpy(board)?;
        Ok(self.inner.fingerprint_key(&board)?)
    }

    /// Human-readable board.
    fn display(&self, board: PyReadonlyArray3<'_, f32>) -> PyResult<String> {
        let board = board_from_numpy(board)?;
        Ok(self.inner.decode(&board)?.to_string())
    }

    fn __repr__(&self) -> String {
        let config = self.inner.config();
        format!(
            "BoopGame(kittens_per_player={}, booping={}, promotion={:?})",
            config.kittens_per_player, config.booping, config.promotion
        )
    }
}
