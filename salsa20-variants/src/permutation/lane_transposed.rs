//! Lane-vectorized rounds over diagonal-aligned rows, re-aligned in memory
//! after every round.

use super::{DOUBLE_ROUNDS, Permutation, lane_quarter_round};
use crate::Matrix;

/// Runs each round as one vectorized quarter-round.
///
/// Every column quarter-round reads its `a`, `b`, `c`, `d` words from
/// diagonals 0, 1, 2, 3 of the matrix, so after
/// [aligning the diagonals](Matrix::align_diagonals) the four quarter-rounds
/// of a round are four lanes of the same vector operation. Between rounds
/// the matrix is written back and passed through
/// [`Matrix::realign_transposed`], turning the next row round into a column
/// round of the same shape.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LaneTransposed;

impl Permutation for LaneTransposed {
    fn mix(&self, state: &mut Matrix) {
        let mut aligned = state.align_diagonals();

        for _ in 0..2 * DOUBLE_ROUNDS {
            let [mut a, mut b, mut c, mut d] = aligned.lane_rows();
            lane_quarter_round(&mut a, &mut b, &mut c, &mut d);
            aligned = Matrix::from_lane_rows([a, b, c, d]).realign_transposed();
        }

        *state = aligned.unalign_diagonals();
    }
}
