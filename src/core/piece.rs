//! Pieces and board coordinates.

use serde::{Deserialize, Serialize};

use super::error::BoopError;
use super::player::Player;

/// Side length of the square board.
pub const BOARD_SIZE: usize = 6;

/// Number of cells on the board.
pub const CELL_COUNT: usize = BOARD_SIZE * BOARD_SIZE;

/// Piece rank. Kittens graduate into cats.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Rank {
    Kitten,
    Cat,
}

impl Rank {
    pub const ALL: [Rank; 2] = [Rank::Kitten, Rank::Cat];

    #[must_use]
    pub const fn index(self) -> usize {
        match self {
            Rank::Kitten => 0,
            Rank::Cat => 1,
        }
    }
}

/// A piece on the board: an owner and a rank.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Piece {
    pub owner: Player,
    pub rank: Rank,
}

impl Piece {
    #[must_use]
    pub const fn new(owner: Player, rank: Rank) -> Self {
        Self { owner, rank }
    }

    /// Whether this piece can push `other` when placed next to it.
    ///
    /// Cats push everything; kittens only push kittens.
    #[must_use]
    pub fn can_boop(self, other: Piece) -> bool {
        !(self.rank == Rank::Kitten && other.rank == Rank::Cat)
    }

    /// Compact symbol: lowercase for `A`, uppercase for `B`.
    #[must_use]
    pub const fn symbol(self) -> char {
        match (self.owner, self.rank) {
            (Player::A, Rank::Kitten) => 'k',
            (Player::A, Rank::Cat) => 'c',
            (Player::B, Rank::Kitten) => 'K',
            (Player::B, Rank::Cat) => 'C',
        }
    }

    /// Symbol for a possibly-empty cell.
    #[must_use]
    pub fn cell_symbol(piece: Option<Piece>) -> char {
        piece.map_or('.', Piece::symbol)
    }
}

/// A board coordinate. Only [`Cell::new`], [`Cell::from_index`] and a
/// checked deserialize can build one, so it is always on the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawCell")]
pub struct Cell {
    row: u8,
    col: u8,
}

#[derive(Deserialize)]
struct RawCell {
    row: u8,
    col: u8,
}

impl TryFrom<RawCell> for Cell {
    type Error = BoopError;

    fn try_from(raw: RawCell) -> Result<Self, BoopError> {
        Cell::new(usize::from(raw.row), usize::from(raw.col)).ok_or_else(|| {
            BoopError::invalid_move(format!("cell ({}, {}) is off the board", raw.row, raw.col))
        })
    }
}

impl Cell {
    /// Create a cell. Returns `None` if off the board.
    #[must_use]
    pub fn new(row: usize, col: usize) -> Option<Self> {
        (row < BOARD_SIZE && col < BOARD_SIZE).then(|| Self {
            row: row as u8,
            col: col as u8,
        })
    }

    /// Create a cell from a row-major index in `0..CELL_COUNT`.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        (index < CELL_COUNT).then(|| Self {
            row: (index / BOARD_SIZE) as u8,
            col: (index % BOARD_SIZE) as u8,
        })
    }

    #[must_use]
    pub const fn row(self) -> usize {
        self.row as usize
    }

    #[must_use]
    pub const fn col(self) -> usize {
        self.col as usize
    }

    /// Row-major index.
    #[must_use]
    pub const fn index(self) -> usize {
        self.row as usize * BOARD_SIZE + self.col as usize
    }

    /// Step by a signed offset; `None` when the result leaves the board.
    #[must_use]
    pub fn offset(self, dr: i8, dc: i8) -> Option<Self> {
        let row = self.row as i8 + dr;
        let col = self.col as i8 + dc;
        if row < 0 || col < 0 {
            return None;
        }
        Cell::new(row as usize, col as usize)
    }

    /// All cells in row-major order.
    pub fn all() -> impl Iterator<Item = Cell> {
        (0..CELL_COUNT).filter_map(Cell::from_index)
    }

    /// The 8 neighbouring directions as (row, col) deltas.
    pub const NEIGHBOURS: [(i8, i8); 8] = [
        (-1, -1),
        (-1, 0),
        (-1, 1),
        (0, -1),
        (0, 1),
        (1, -1),
        (1, 0),
        (1, 1),
    ];
}

impl std::fmt::Display for Cell {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.row, self.col)
    }
}
