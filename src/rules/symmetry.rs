//! Board symmetries: the eight elements of the dihedral group D4.
//!
//! Each symmetry maps cells to cells and line directions to line
//! directions. A triple keeps its centre and its line is relabelled from
//! the transformed direction, so a horizontal triple becomes a vertical
//! one under a quarter turn and the two diagonals swap under a flip.

use crate::core::{
    BoopError, Cell, Graduation, Line, Move, Result, ACTION_SPACE_SIZE, BOARD_SIZE,
};
use crate::nn::tensor::BoardTensor;

const MAX: usize = BOARD_SIZE - 1;

/// One element of D4.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Symmetry {
    Identity,
    /// Quarter turn clockwise.
    Rot90,
    Rot180,
    /// Quarter turn anticlockwise.
    Rot270,
    /// Mirror left-right.
    FlipH,
    /// Mirror top-bottom.
    FlipV,
    /// Mirror across the main diagonal.
    Transpose,
    /// Mirror across the anti-diagonal.
    AntiTranspose,
}

impl Symmetry {
    /// All symmetries, identity first.
    pub const ALL: [Symmetry; 8] = [
        Symmetry::Identity,
        Symmetry::Rot90,
        Symmetry::Rot180,
        Symmetry::Rot270,
        Symmetry::FlipH,
        Symmetry::FlipV,
        Symmetry::Transpose,
        Symmetry::AntiTranspose,
    ];

    #[must_use]
    pub const fn inverse(self) -> Self {
        match self {
            Symmetry::Rot90 => Symmetry::Rot270,
            Symmetry::Rot270 => Symmetry::Rot90,
            other => other,
        }
    }

    #[must_use]
    pub fn map_cell(self, cell: Cell) -> Cell {
        let (r, c) = (cell.row(), cell.col());
        let (row, col) = match self {
            Symmetry::Identity => (r, c),
            Symmetry::Rot90 => (c, MAX - r),
            Symmetry::Rot180 => (MAX - r, MAX - c),
            Symmetry::Rot270 => (MAX - c, r),
            Symmetry::FlipH => (r, MAX - c),
            Symmetry::FlipV => (MAX - r, c),
            Symmetry::Transpose => (c, r),
            Symmetry::AntiTranspose => (MAX - c, MAX - r),
        };
        // D4 maps the board onto itself.
        Cell::new(row, col).unwrap_or(cell)
    }

    /// Linear part of the cell map, applied to a `(dr, dc)` step.
    #[must_use]
    pub const fn map_direction(self, (dr, dc): (i8, i8)) -> (i8, i8) {
        match self {
            Symmetry::Identity => (dr, dc),
            Symmetry::Rot90 => (dc, -dr),
            Symmetry::Rot180 => (-dr, -dc),
            Symmetry::Rot270 => (-dc, dr),
            Symmetry::FlipH => (dr, -dc),
            Symmetry::FlipV => (-dr, dc),
            Symmetry::Transpose => (dc, dr),
            Symmetry::AntiTranspose => (-dc, -dr),
        }
    }

    #[must_use]
    pub fn map_line(self, line: Line) -> Line {
        let (dr, dc) = self.map_direction(line.direction());
        // A linear map of D4 sends unit steps to unit steps.
        Line::from_direction(dr, dc).unwrap_or(line)
    }

    #[must_use]
    pub fn map_graduation(self, graduation: Graduation) -> Graduation {
        match graduation {
            Graduation::Single(cell) => Graduation::Single(self.map_cell(cell)),
            Graduation::Triple(triple) => {
                Graduation::triple(self.map_line(triple.line()), self.map_cell(triple.centre()))
                    .unwrap_or(graduation)
            }
        }
    }

    #[must_use]
    pub fn map_move(self, mv: Move) -> Move {
        match mv {
            Move::Place { rank, cell } => Move::Place {
                rank,
                cell: self.map_cell(cell),
            },
            Move::Graduate(graduation) => Move::Graduate(self.map_graduation(graduation)),
        }
    }

    /// Spatially transform every plane. Broadcast planes are unchanged.
    #[must_use]
    pub fn apply(self, board: &BoardTensor) -> BoardTensor {
        if self == Symmetry::Identity {
            return board.clone();
        }
        board.map_cells(|cell| self.map_cell(cell))
    }

    /// Permute a policy so that `out[map(i)] == pi[i]`.
    pub fn permute_policy(self, pi: &[f32]) -> Result<Vec<f32>> {
        if pi.len() != ACTION_SPACE_SIZE {
            return Err(BoopError::malformed(format!(
                "policy has {} entries, expected {}",
                pi.len(),
                ACTION_SPACE_SIZE
            )));
        }
        let mut out = vec![0.0; ACTION_SPACE_SIZE];
        for (i, &p) in pi.iter().enumerate() {
            let mv = Move::from_index(i as i64)?;
            out[self.map_move(mv).to_index()] = p;
        }
        Ok(out)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::nn::tensor::plane;

    fn cell(r: usize, c: usize) -> Cell {
        Cell::new(r, c).unwrap()
    }

    #[test]
    fn test_identity_first() {
        assert_eq!(Symmetry::ALL[0], Symmetry::Identity);
        assert_eq!(Symmetry::ALL.len(), 8);
    }

    #[test]
    fn test_cell_maps_are_permutations() {
        for sym in Symmetry::ALL {
            let mut seen = [false; 36];
            for c in Cell::all() {
                let mapped = sym.map_cell(c);
                assert!(mapped.row() < 6 && mapped.col() < 6);
                assert!(!seen[mapped.index()], "{:?} maps two cells to {}", sym, mapped);
                seen[mapped.index()] = true;
            }
        }
    }

    #[test]
    fn test_inverse_restores_cells() {
        for sym in Symmetry::ALL {
            for c in Cell::all() {
                assert_eq!(sym.inverse().map_cell(sym.map_cell(c)), c);
            }
        }
    }

    #[test]
    fn test_quarter_turn_corners() {
        assert_eq!(Symmetry::Rot90.map_cell(cell(0, 0)), cell(0, 5));
        assert_eq!(Symmetry::Rot90.map_cell(cell(0, 5)), cell(5, 5));
        assert_eq!(Symmetry::Rot270.map_cell(cell(0, 0)), cell(5, 0));
        assert_eq!(Symmetry::AntiTranspose.map_cell(cell(0, 0)), cell(5, 5));
    }

    #[test]
    fn test_line_relabelling() {
        assert_eq!(Symmetry::Rot90.map_line(Line::Horizontal), Line::Vertical);
        assert_eq!(Symmetry::Rot90.map_line(Line::DiagonalDown), Line::DiagonalUp);
        assert_eq!(Symmetry::FlipH.map_line(Line::DiagonalDown), Line::DiagonalUp);
        assert_eq!(Symmetry::Transpose.map_line(Line::DiagonalDown), Line::DiagonalDown);
        assert_eq!(Symmetry::Transpose.map_line(Line::Horizontal), Line::Vertical);
        assert_eq!(Symmetry::Rot180.map_line(Line::DiagonalUp), Line::DiagonalUp);
    }

    #[test]
    fn test_mapped_triple_covers_mapped_cells() {
        for sym in Symmetry::ALL {
            for i in 108..ACTION_SPACE_SIZE {
                let Move::Graduate(g) = Move::from_index(i as i64).unwrap() else {
                    panic!("index {} is not a graduation", i);
                };
                let mut expected: Vec<Cell> = g.cells().iter().map(|&c| sym.map_cell(c)).collect();
                let mut actual: Vec<Cell> = sym.map_graduation(g).cells().to_vec();
                expected.sort();
                actual.sort();
                assert_eq!(actual, expected, "{:?} on {:?}", sym, g);
            }
        }
    }

    #[test]
    fn test_permute_policy_is_bijection() {
        let pi: Vec<f32> = (0..ACTION_SPACE_SIZE).map(|i| i as f32).collect();
        for sym in Symmetry::ALL {
            let out = sym.permute_policy(&pi).unwrap();
            let mut sorted = out.clone();
            sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
            assert_eq!(sorted, pi);

            let back = sym.inverse().permute_policy(&out).unwrap();
            assert_eq!(back, pi);
        }
    }

    #[test]
    fn test_permute_policy_rejects_wrong_length() {
        assert!(matches!(
            Symmetry::Rot90.permute_policy(&[0.0; 10]),
            Err(BoopError::MalformedTensor { .. })
        ));
    }

    #[test]
    fn test_apply_keeps_broadcast_planes() {
        let mut board = BoardTensor::zeros();
        board.fill_plane(plane::A_KITTEN_INVENTORY, 5.0);
        board.set(plane::B_CAT, cell(0, 1), 1.0);

        let rotated = Symmetry::Rot90.apply(&board);
        assert_eq!(rotated.get(plane::B_CAT, cell(1, 5)), 1.0);
        assert_eq!(rotated.get(plane::B_CAT, cell(0, 1)), 0.0);
        assert!(rotated.plane(plane::A_KITTEN_INVENTORY).iter().all(|&v| v == 5.0));
    }
}
