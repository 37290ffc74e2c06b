//! Evaluation weights for Othello positions
//!
//! The positional table and the term coefficients are tunable constants.
//! Only their structural ordering is enforced:
//! corner > edge > interior > X-square, with X-squares strictly negative.

use serde::{Deserialize, Serialize};

use crate::board::{Pos, BOARD_SIZE};
use crate::error::{OthelloError, Result};

/// 8x8 table of per-cell weights
pub type PositionalTable = [[i32; BOARD_SIZE]; BOARD_SIZE];

/// Score multiplier for a finished game's material difference.
///
/// Must dominate every non-terminal evaluation so that a guaranteed win
/// is never valued below a heuristic position.
pub const TERMINAL_SCALE: i32 = 10_000;

/// Default positional weights.
///
/// Corners 100, C-squares -20, X-squares -50, edges 10/5,
/// inner ring -2, interior 0.
pub const POSITIONAL_WEIGHTS: PositionalTable = [
    [100, -20, 10, 5, 5, 10, -20, 100],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [10, -2, 0, 0, 0, 0, -2, 10],
    [5, -2, 0, 0, 0, 0, -2, 5],
    [5, -2, 0, 0, 0, 0, -2, 5],
    [10, -2, 0, 0, 0, 0, -2, 10],
    [-20, -50, -2, -2, -2, -2, -50, -20],
    [100, -20, 10, 5, 5, 10, -20, 100],
];

/// Region of a cell for the structural weight checks
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Region {
    Corner,
    /// Edge cell orthogonally adjacent to a corner
    CSquare,
    Edge,
    /// Cell diagonally adjacent to a corner
    XSquare,
    Interior,
}

fn region(pos: Pos) -> Region {
    let last = BOARD_SIZE as u8 - 1;
    let on_row_edge = pos.row == 0 || pos.row == last;
    let on_col_edge = pos.col == 0 || pos.col == last;
    let near_row = pos.row <= 1 || pos.row + 1 >= last;
    let near_col = pos.col <= 1 || pos.col + 1 >= last;

    if on_row_edge && on_col_edge {
        Region::Corner
    } else if (on_row_edge || on_col_edge) && near_row && near_col {
        Region::CSquare
    } else if on_row_edge || on_col_edge {
        Region::Edge
    } else if (pos.row == 1 || pos.row + 1 == last) && (pos.col == 1 || pos.col + 1 == last) {
        Region::XSquare
    } else {
        Region::Interior
    }
}

/// Weights of the three evaluation terms
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct EvalWeights {
    /// Per-piece material difference weight
    pub material: i32,
    /// Per-move mobility difference weight
    pub mobility: i32,
    /// Per-cell positional weights
    pub positional: PositionalTable,
}

impl Default for EvalWeights {
    fn default() -> Self {
        Self {
            material: 1,
            mobility: 2,
            positional: POSITIONAL_WEIGHTS,
        }
    }
}

impl EvalWeights {
    /// Weight of the cell at `pos`
    #[inline]
    pub fn at(&self, pos: Pos) -> i32 {
        self.positional[pos.row as usize][pos.col as usize]
    }

    /// Check the structural ordering of the table and that no heuristic
    /// position can outweigh a finished game.
    ///
    /// # Errors
    ///
    /// `InvalidConfig` naming the first violated constraint.
    pub fn validate(&self) -> Result<()> {
        let mut min_corner = i32::MAX;
        let mut max_c = i32::MIN;
        let mut max_edge = i32::MIN;
        let mut min_edge = i32::MAX;
        let mut max_interior = i32::MIN;
        let mut min_interior = i32::MAX;
        let mut max_x = i32::MIN;

        for idx in 0..BOARD_SIZE * BOARD_SIZE {
            let pos = Pos::from_index(idx);
            let w = self.at(pos);
            match region(pos) {
                Region::Corner => min_corner = min_corner.min(w),
                Region::Edge => {
                    max_edge = max_edge.max(w);
                    min_edge = min_edge.min(w);
                }
                Region::Interior => {
                    max_interior = max_interior.max(w);
                    min_interior = min_interior.min(w);
                }
                Region::XSquare => max_x = max_x.max(w),
                Region::CSquare => max_c = max_c.max(w),
            }
        }

        if min_corner <= max_edge {
            return Err(invalid("corner weights must exceed every edge weight"));
        }
        if min_corner <= max_c {
            return Err(invalid("corner weights must exceed every C-square weight"));
        }
        if min_edge <= max_interior {
            return Err(invalid("edge weights must exceed every interior weight"));
        }
        if min_interior <= max_x {
            return Err(invalid("interior weights must exceed every X-square weight"));
        }
        if max_x >= 0 {
            return Err(invalid("X-square weights must be negative"));
        }
        if self.material < 0 || self.mobility < 0 {
            return Err(invalid("material and mobility weights must be non-negative"));
        }
        if self.heuristic_bound() >= i64::from(TERMINAL_SCALE) {
            return Err(invalid("heuristic terms can outweigh a won game"));
        }
        Ok(())
    }

    /// Upper bound on the magnitude of any non-terminal evaluation
    fn heuristic_bound(&self) -> i64 {
        let positional: i64 = self
            .positional
            .iter()
            .flatten()
            .map(|&w| i64::from(w).abs())
            .sum();
        let cells = (BOARD_SIZE * BOARD_SIZE) as i64;
        positional + cells * i64::from(self.material) + cells * i64::from(self.mobility)
    }
}

fn invalid(msg: &str) -> OthelloError {
    OthelloError::InvalidConfig(msg.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_weights_valid() {
        assert!(EvalWeights::default().validate().is_ok());
    }

    #[test]
    fn test_table_is_symmetric() {
        for r in 0..BOARD_SIZE {
            for c in 0..BOARD_SIZE {
                let w = POSITIONAL_WEIGHTS[r][c];
                assert_eq!(w, POSITIONAL_WEIGHTS[c][r]);
                assert_eq!(w, POSITIONAL_WEIGHTS[BOARD_SIZE - 1 - r][c]);
                assert_eq!(w, POSITIONAL_WEIGHTS[r][BOARD_SIZE - 1 - c]);
            }
        }
    }

    #[test]
    fn test_regions() {
        assert_eq!(region(Pos::new(0, 0)), Region::Corner);
        assert_eq!(region(Pos::new(7, 7)), Region::Corner);
        assert_eq!(region(Pos::new(0, 1)), Region::CSquare);
        assert_eq!(region(Pos::new(6, 7)), Region::CSquare);
        assert_eq!(region(Pos::new(1, 1)), Region::XSquare);
        assert_eq!(region(Pos::new(6, 1)), Region::XSquare);
        assert_eq!(region(Pos::new(0, 3)), Region::Edge);
        assert_eq!(region(Pos::new(1, 3)), Region::Interior);
        assert_eq!(region(Pos::new(4, 4)), Region::Interior);
    }

    #[test]
    fn test_positive_x_square_rejected() {
        let mut weights = EvalWeights::default();
        weights.positional[1][1] = 1;
        weights.positional[1][6] = -1;
        assert!(weights.validate().is_err());
    }

    #[test]
    fn test_weak_corner_rejected() {
        let mut weights = EvalWeights::default();
        weights.positional[7][0] = 10;
        let err = weights.validate().unwrap_err();
        assert!(matches!(err, OthelloError::InvalidConfig(_)));
    }

    #[test]
    fn test_interior_below_x_square_rejected() {
        let mut weights = EvalWeights::default();
        weights.positional[2][2] = -60;
        assert_eq!(
            weights.validate(),
            Err(invalid("interior weights must exceed every X-square weight"))
        );
    }

    #[test]
    fn test_c_square_above_corner_rejected() {
        let mut weights = EvalWeights::default();
        weights.positional[0][1] = 500;
        assert_eq!(
            weights.validate(),
            Err(invalid("corner weights must exceed every C-square weight"))
        );
    }

    #[test]
    fn test_overweight_heuristic_rejected() {
        let weights = EvalWeights {
            mobility: 200,
            ..EvalWeights::default()
        };
        assert!(weights.validate().is_err());
    }
}
