//! Tensor codec: `GameState` <-> `BoardTensor`.
//!
//! `decode(encode(s)) == s` for every state, and `encode(decode(t)) == t`
//! for every tensor `encode` produced. Anything else that reaches `decode`
//! is checked plane by plane and rejected as `MalformedTensor`.

use crate::core::{
    BoopError, Cell, GameState, Phase, Piece, Player, Rank, Result, ACTION_SPACE_SIZE,
};
use crate::nn::tensor::{inventory_plane, occupancy_plane, plane, BoardTensor};

/// Encodes game state into tensors for neural network input and back.
pub trait StateEncoder: Send + Sync {
    /// Encode the game state.
    fn encode(&self, state: &GameState) -> BoardTensor;

    /// Decode a tensor, validating every plane.
    fn decode(&self, tensor: &BoardTensor) -> Result<GameState>;

    /// Shape of encoded states.
    fn output_shape(&self) -> [usize; 3] {
        BoardTensor::SHAPE
    }

    /// Size of the policy vector.
    fn action_space_size(&self) -> usize {
        ACTION_SPACE_SIZE
    }
}

/// The 9-plane encoder described in [`crate::nn::tensor`].
#[derive(Clone, Copy, Debug, Default)]
pub struct PlaneEncoder;

/// Read a broadcast plane, requiring one non-negative integer everywhere.
fn uniform_count(tensor: &BoardTensor, p: usize) -> Result<u8> {
    let values = tensor.plane(p);
    let first = values[0];
    if values.iter().any(|&v| v != first) {
        return Err(BoopError::malformed(format!("plane {} is not uniform", p)));
    }
    if first < 0.0 || first.fract() != 0.0 || first > u8::MAX as f32 {
        return Err(BoopError::malformed(format!(
            "plane {} holds {} which is not a valid count",
            p, first
        )));
    }
    Ok(first as u8)
}

impl StateEncoder for PlaneEncoder {
    fn encode(&self, state: &GameState) -> BoardTensor {
        let mut tensor = BoardTensor::zeros();

        if state.phase() == Phase::AwaitingGraduationChoice {
            tensor.fill_plane(plane::PHASE, 1.0);
        }

        for cell in Cell::all() {
            if let Some(piece) = state.cell(cell) {
                tensor.set(occupancy_plane(piece), cell, 1.0);
            }
        }

        for player in Player::ALL {
            for rank in Rank::ALL {
                tensor.fill_plane(
                    inventory_plane(player, rank),
                    f32::from(state.inventory(player, rank)),
                );
            }
        }

        tensor
    }

    fn decode(&self, tensor: &BoardTensor) -> Result<GameState> {
        let mut state = GameState::empty();

        state.set_phase(match uniform_count(tensor, plane::PHASE)? {
            0 => Phase::AwaitingPlacement,
            1 => Phase::AwaitingGraduationChoice,
            other => {
                return Err(BoopError::malformed(format!(
                    "phase flag must be 0 or 1, got {}",
                    other
                )))
            }
        });

        for cell in Cell::all() {
            let mut occupant: Option<Piece> = None;
            for player in Player::ALL {
                for rank in Rank::ALL {
                    let piece = Piece::new(player, rank);
                    let value = tensor.get(occupancy_plane(piece), cell);
                    if value == 0.0 {
                        continue;
                    }
                    if value != 1.0 {
                        return Err(BoopError::malformed(format!(
                            "occupancy value {} at {} is not 0 or 1",
                            value, cell
                        )));
                    }
                    if occupant.is_some() {
                        return Err(BoopError::malformed(format!(
                            "more than one piece at {}",
                            cell
                        )));
                    }
                    occupant = Some(piece);
                }
            }
            state.set_cell(cell, occupant);
        }

        for player in Player::ALL {
            for rank in Rank::ALL {
                let count = uniform_count(tensor, inventory_plane(player, rank))?;
                state.set_inventory(player, rank, count);
            }
        }

        Ok(state)
    }
}
