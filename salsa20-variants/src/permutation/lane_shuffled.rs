//! Lane-vectorized rounds that never leave the registers.

use super::{DOUBLE_ROUNDS, Permutation, lane_quarter_round};
use crate::Matrix;

/// Keeps the four aligned diagonals in vector registers for all 20 rounds.
///
/// After a column round, rotating the lanes of diagonals 1, 2 and 3 by
/// 3, 2 and 1 positions lines every row up across the lanes: lane `k` then
/// holds `(k, k)`, `(k, k+1)`, `(k, k+2)`, `(k, k+3)` in diagonals 0, 3, 2, 1.
/// The row round is the same vector quarter-round with `b` and `d` swapped,
/// and the inverse rotation restores the column view.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct LaneShuffled;

impl Permutation for LaneShuffled {
    #[inline]
    fn mix(&self, state: &mut Matrix) {
        let [mut x0, mut x1, mut x2, mut x3] = state.align_diagonals().lane_rows();

        for _ in 0..DOUBLE_ROUNDS {
            // column round
            lane_quarter_round(&mut x0, &mut x1, &mut x2, &mut x3);

            // rows across lanes
            x1 = x1.rotate_lanes::<3>();
            x2 = x2.rotate_lanes::<2>();
            x3 = x3.rotate_lanes::<1>();

            // row round
            lane_quarter_round(&mut x0, &mut x3, &mut x2, &mut x1);

            // back to columns
            x1 = x1.rotate_lanes::<1>();
            x2 = x2.rotate_lanes::<2>();
            x3 = x3.rotate_lanes::<3>();
        }

        *state = Matrix::from_lane_rows([x0, x1, x2, x3]).unalign_diagonals();
    }
}
