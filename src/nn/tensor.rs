//! Fixed-shape board tensor exchanged with the training framework.
//!
//! Nine 6x6 planes stored flat in row-major `[plane][row][col]` order:
//!
//! | plane | content                          |
//! |-------|----------------------------------|
//! | 0     | phase flag (broadcast)           |
//! | 1     | A kitten occupancy               |
//! | 2     | A cat occupancy                  |
//! | 3     | B kitten occupancy               |
//! | 4     | B cat occupancy                  |
//! | 5     | A kitten inventory (broadcast)   |
//! | 6     | B kitten inventory (broadcast)   |
//! | 7     | A cat inventory (broadcast)      |
//! | 8     | B cat inventory (broadcast)      |

use serde::{Deserialize, Serialize};

use crate::core::{BoopError, Cell, Piece, Player, Rank, Result, BOARD_SIZE, CELL_COUNT};

/// Plane indices.
pub mod plane {
    pub const PHASE: usize = 0;
    pub const A_KITTEN: usize = 1;
    pub const A_CAT: usize = 2;
    pub const B_KITTEN: usize = 3;
    pub const B_CAT: usize = 4;
    pub const A_KITTEN_INVENTORY: usize = 5;
    pub const B_KITTEN_INVENTORY: usize = 6;
    pub const A_CAT_INVENTORY: usize = 7;
    pub const B_CAT_INVENTORY: usize = 8;

    /// Number of planes.
    pub const COUNT: usize = 9;

    /// Planes that exchange places when the players swap seats.
    pub const PLAYER_PAIRS: [(usize, usize); 4] = [
        (A_KITTEN, B_KITTEN),
        (A_CAT, B_CAT),
        (A_KITTEN_INVENTORY, B_KITTEN_INVENTORY),
        (A_CAT_INVENTORY, B_CAT_INVENTORY),
    ];
}

/// Occupancy plane holding `piece`.
#[must_use]
pub const fn occupancy_plane(piece: Piece) -> usize {
    match (piece.owner, piece.rank) {
        (Player::A, Rank::Kitten) => plane::A_KITTEN,
        (Player::A, Rank::Cat) => plane::A_CAT,
        (Player::B, Rank::Kitten) => plane::B_KITTEN,
        (Player::B, Rank::Cat) => plane::B_CAT,
    }
}

/// Inventory count plane for `(player, rank)`.
#[must_use]
pub const fn inventory_plane(player: Player, rank: Rank) -> usize {
    match (player, rank) {
        (Player::A, Rank::Kitten) => plane::A_KITTEN_INVENTORY,
        (Player::B, Rank::Kitten) => plane::B_KITTEN_INVENTORY,
        (Player::A, Rank::Cat) => plane::A_CAT_INVENTORY,
        (Player::B, Rank::Cat) => plane::B_CAT_INVENTORY,
    }
}

/// A 9x6x6 board tensor.
///
/// The length is checked on every construction path, including
/// deserialization, so indexing never goes out of bounds.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "Vec<f32>", into = "Vec<f32>")]
pub struct BoardTensor {
    data: Vec<f32>,
}

impl TryFrom<Vec<f32>> for BoardTensor {
    type Error = BoopError;

    fn try_from(data: Vec<f32>) -> Result<Self> {
        Self::from_vec(data)
    }
}

impl From<BoardTensor> for Vec<f32> {
    fn from(tensor: BoardTensor) -> Self {
        tensor.data
    }
}

impl BoardTensor {
    /// `[planes, rows, cols]`.
    pub const SHAPE: [usize; 3] = [plane::COUNT, BOARD_SIZE, BOARD_SIZE];

    /// Total number of elements.
    pub const LEN: usize = plane::COUNT * CELL_COUNT;

    /// Zero-filled tensor.
    #[must_use]
    pub fn zeros() -> Self {
        Self {
            data: vec![0.0; Self::LEN],
        }
    }

    /// Wrap flat row-major data, checking its length.
    pub fn from_vec(data: Vec<f32>) -> Result<Self> {
        if data.len() != Self::LEN {
            return Err(BoopError::malformed(format!(
                "expected {} values, got {}",
                Self::LEN,
                data.len()
            )));
        }
        Ok(Self { data })
    }

    #[must_use]
    pub fn shape(&self) -> [usize; 3] {
        Self::SHAPE
    }

    #[must_use]
    pub fn as_slice(&self) -> &[f32] {
        &self.data
    }

    #[must_use]
    pub fn into_vec(self) -> Vec<f32> {
        self.data
    }

    #[must_use]
    pub fn get(&self, plane: usize, cell: Cell) -> f32 {
        self.data[plane * CELL_COUNT + cell.index()]
    }

    pub fn set(&mut self, plane: usize, cell: Cell, value: f32) {
        self.data[plane * CELL_COUNT + cell.index()] = value;
    }

    /// One 6x6 plane as a flat slice.
    #[must_use]
    pub fn plane(&self, plane: usize) -> &[f32] {
        &self.data[plane * CELL_COUNT..(plane + 1) * CELL_COUNT]
    }

    /// Write `value` to every cell of a plane.
    pub fn fill_plane(&mut self, plane: usize, value: f32) {
        self.data[plane * CELL_COUNT..(plane + 1) * CELL_COUNT].fill(value);
    }

    /// Exchange every owner-A plane with its owner-B counterpart.
    #[must_use]
    pub fn swap_players(&self) -> Self {
        let mut out = self.clone();
        for (a, b) in plane::PLAYER_PAIRS {
            out.data[a * CELL_COUNT..(a + 1) * CELL_COUNT].copy_from_slice(self.plane(b));
            out.data[b * CELL_COUNT..(b + 1) * CELL_COUNT].copy_from_slice(self.plane(a));
        }
        out
    }

    /// Move every plane's cell values through `map`.
    ///
    /// `map` must be a permutation of the board's cells.
    #[must_use]
    pub fn map_cells(&self, map: impl Fn(Cell) -> Cell) -> Self {
        let mut out = Self::zeros();
        for cell in Cell::all() {
            let target = map(cell);
            for p in 0..plane::COUNT {
                out.set(p, target, self.get(p, cell));
            }
        }
        out
    }
}
