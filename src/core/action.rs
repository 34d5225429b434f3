//! Action codec: flat action index <-> structured `Move`.
//!
//! The action space is a fixed sequence of contiguous ranges:
//!
//! | kind                  | size | first index |
//! |-----------------------|------|-------------|
//! | place kitten          | 36   | 0           |
//! | place cat             | 36   | 36          |
//! | single graduation     | 36   | 72          |
//! | horizontal triple     | 24   | 108         |
//! | vertical triple       | 24   | 132         |
//! | diagonal-down triple  | 16   | 156         |
//! | diagonal-up triple    | 16   | 172         |
//!
//! Triples are addressed by their centre cell, so a horizontal triple
//! centred on `(r, c)` covers `(r, c-1), (r, c), (r, c+1)` and the centre
//! column ranges over `1..=4`.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::error::{BoopError, Result};
use super::piece::{Cell, Rank, BOARD_SIZE, CELL_COUNT};

/// Valid centre positions along an axis that a triple extends over.
const INNER: usize = BOARD_SIZE - 2;

const PLACE_KITTEN_BASE: usize = 0;
const PLACE_CAT_BASE: usize = PLACE_KITTEN_BASE + CELL_COUNT;
const SINGLE_BASE: usize = PLACE_CAT_BASE + CELL_COUNT;
const HORIZONTAL_BASE: usize = SINGLE_BASE + CELL_COUNT;
const VERTICAL_BASE: usize = HORIZONTAL_BASE + BOARD_SIZE * INNER;
const DIAGONAL_DOWN_BASE: usize = VERTICAL_BASE + INNER * BOARD_SIZE;
const DIAGONAL_UP_BASE: usize = DIAGONAL_DOWN_BASE + INNER * INNER;

/// Total number of distinct moves: 6*6*2 + 6*6 + 6*4 + 4*6 + 4*4*2 = 188.
pub const ACTION_SPACE_SIZE: usize = DIAGONAL_UP_BASE + INNER * INNER;

/// Orientation of an aligned triple.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Line {
    /// Along a row.
    Horizontal,
    /// Along a column.
    Vertical,
    /// `\`: row and column grow together.
    DiagonalDown,
    /// `/`: row shrinks as column grows.
    DiagonalUp,
}

impl Line {
    pub const ALL: [Line; 4] = [
        Line::Horizontal,
        Line::Vertical,
        Line::DiagonalDown,
        Line::DiagonalUp,
    ];

    /// Unit step from the centre towards the "forward" end of the line.
    #[must_use]
    pub const fn direction(self) -> (i8, i8) {
        match self {
            Line::Horizontal => (0, 1),
            Line::Vertical => (1, 0),
            Line::DiagonalDown => (1, 1),
            Line::DiagonalUp => (-1, 1),
        }
    }

    /// Classify a unit step. Opposite steps describe the same line.
    #[must_use]
    pub const fn from_direction(dr: i8, dc: i8) -> Option<Line> {
        match (dr, dc) {
            (0, 1) | (0, -1) => Some(Line::Horizontal),
            (1, 0) | (-1, 0) => Some(Line::Vertical),
            (1, 1) | (-1, -1) => Some(Line::DiagonalDown),
            (-1, 1) | (1, -1) => Some(Line::DiagonalUp),
            _ => None,
        }
    }
}

/// Three cells in a line, identified by orientation and centre.
///
/// Both ends are on the board; [`Triple::new`] and deserialization reject
/// an edge centre.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "RawTriple")]
pub struct Triple {
    line: Line,
    centre: Cell,
}

#[derive(Deserialize)]
struct RawTriple {
    line: Line,
    centre: Cell,
}

impl TryFrom<RawTriple> for Triple {
    type Error = BoopError;

    fn try_from(raw: RawTriple) -> Result<Self> {
        Triple::new(raw.line, raw.centre).ok_or_else(|| {
            BoopError::invalid_choice(format!(
                "{:?} triple centred on {} leaves the board",
                raw.line, raw.centre
            ))
        })
    }
}

impl Triple {
    #[must_use]
    pub fn new(line: Line, centre: Cell) -> Option<Self> {
        let (dr, dc) = line.direction();
        centre.offset(dr, dc)?;
        centre.offset(-dr, -dc)?;
        Some(Triple { line, centre })
    }

    #[must_use]
    pub const fn line(self) -> Line {
        self.line
    }

    #[must_use]
    pub const fn centre(self) -> Cell {
        self.centre
    }
}

/// A graduation the active player may choose.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Graduation {
    /// Graduate one piece (only offered once a player's inventory is empty).
    Single(Cell),
    /// Graduate an aligned triple.
    Triple(Triple),
}

impl Graduation {
    /// Build a triple, checking that all three cells are on the board.
    #[must_use]
    pub fn triple(line: Line, centre: Cell) -> Option<Self> {
        Triple::new(line, centre).map(Graduation::Triple)
    }

    /// Build a triple from three cells given in any order.
    #[must_use]
    pub fn triple_from_cells(cells: [Cell; 3]) -> Option<Self> {
        let mut sorted = cells;
        sorted.sort();
        let step = |a: Cell, b: Cell| {
            (
                b.row() as i8 - a.row() as i8,
                b.col() as i8 - a.col() as i8,
            )
        };
        let first = step(sorted[0], sorted[1]);
        if first != step(sorted[1], sorted[2]) {
            return None;
        }
        let line = Line::from_direction(first.0, first.1)?;
        Graduation::triple(line, sorted[1])
    }

    /// Cells removed by this graduation.
    #[must_use]
    pub fn cells(self) -> SmallVec<[Cell; 3]> {
        match self {
            Graduation::Single(cell) => smallvec::smallvec![cell],
            Graduation::Triple(triple) => {
                let centre = triple.centre();
                let (dr, dc) = triple.line().direction();
                let mut cells = SmallVec::new();
                if let Some(back) = centre.offset(-dr, -dc) {
                    cells.push(back);
                }
                cells.push(centre);
                if let Some(front) = centre.offset(dr, dc) {
                    cells.push(front);
                }
                cells
            }
        }
    }
}

/// A structured move.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Move {
    /// Place a piece of the given rank from inventory.
    Place { rank: Rank, cell: Cell },
    /// Resolve a pending graduation choice.
    Graduate(Graduation),
}

impl Move {
    /// Decode a flat action index.
    ///
    /// ```
    /// use boop_zero::core::{Cell, Move, Rank};
    ///
    /// let mv = Move::from_index(0).unwrap();
    /// assert_eq!(mv, Move::Place { rank: Rank::Kitten, cell: Cell::new(0, 0).unwrap() });
    /// assert!(Move::from_index(-1).is_err());
    /// ```
    pub fn from_index(index: i64) -> Result<Move> {
        let out_of_range = || BoopError::IndexOutOfRange {
            index,
            size: ACTION_SPACE_SIZE,
        };
        let i = usize::try_from(index).map_err(|_| out_of_range())?;
        if i >= ACTION_SPACE_SIZE {
            return Err(out_of_range());
        }

        let cell = |r: usize, c: usize| Cell::new(r, c).ok_or_else(out_of_range);
        let triple = |line: Line, r: usize, c: usize| {
            Graduation::triple(line, cell(r, c)?)
                .map(Move::Graduate)
                .ok_or_else(out_of_range)
        };

        if i < PLACE_CAT_BASE {
            let k = i - PLACE_KITTEN_BASE;
            Ok(Move::Place {
                rank: Rank::Kitten,
                cell: cell(k / BOARD_SIZE, k % BOARD_SIZE)?,
            })
        } else if i < SINGLE_BASE {
            let k = i - PLACE_CAT_BASE;
            Ok(Move::Place {
                rank: Rank::Cat,
                cell: cell(k / BOARD_SIZE, k % BOARD_SIZE)?,
            })
        } else if i < HORIZONTAL_BASE {
            let k = i - SINGLE_BASE;
            Ok(Move::Graduate(Graduation::Single(cell(
                k / BOARD_SIZE,
                k % BOARD_SIZE,
            )?)))
        } else if i < VERTICAL_BASE {
            let k = i - HORIZONTAL_BASE;
            triple(Line::Horizontal, k / INNER, k % INNER + 1)
        } else if i < DIAGONAL_DOWN_BASE {
            let k = i - VERTICAL_BASE;
            triple(Line::Vertical, k / BOARD_SIZE + 1, k % BOARD_SIZE)
        } else if i < DIAGONAL_UP_BASE {
            let k = i - DIAGONAL_DOWN_BASE;
            triple(Line::DiagonalDown, k / INNER + 1, k % INNER + 1)
        } else {
            let k = i - DIAGONAL_UP_BASE;
            triple(Line::DiagonalUp, k / INNER + 1, k % INNER + 1)
        }
    }

    /// Encode to a flat action index. Exact inverse of [`Move::from_index`].
    #[must_use]
    pub fn to_index(self) -> usize {
        match self {
            Move::Place {
                rank: Rank::Kitten,
                cell,
            } => PLACE_KITTEN_BASE + cell.index(),
            Move::Place {
                rank: Rank::Cat,
                cell,
            } => PLACE_CAT_BASE + cell.index(),
            Move::Graduate(Graduation::Single(cell)) => SINGLE_BASE + cell.index(),
            Move::Graduate(Graduation::Triple(triple)) => {
                // Centres of valid triples sit at least one step from the edge.
                let (r, c) = (triple.centre().row(), triple.centre().col());
                match triple.line() {
                    Line::Horizontal => HORIZONTAL_BASE + r * INNER + (c - 1),
                    Line::Vertical => VERTICAL_BASE + (r - 1) * BOARD_SIZE + c,
                    Line::DiagonalDown => DIAGONAL_DOWN_BASE + (r - 1) * INNER + (c - 1),
                    Line::DiagonalUp => DIAGONAL_UP_BASE + (r - 1) * INNER + (c - 1),
                }
            }
        }
    }

    #[must_use]
    pub fn is_placement(self) -> bool {
        matches!(self, Move::Place { .. })
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Move::Place { rank, cell } => write!(f, "place {:?} at {}", rank, cell),
            Move::Graduate(Graduation::Single(cell)) => write!(f, "graduate {}", cell),
            Move::Graduate(Graduation::Triple(triple)) => write!(
                f,
                "graduate {:?} triple centred on {}",
                triple.line(),
                triple.centre()
            ),
        }
    }
}
