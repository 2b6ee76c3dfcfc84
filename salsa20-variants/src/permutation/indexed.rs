//! Index-rotated quarter-rounds: no data movement between rounds.

use super::{COLUMN_ROUND, DOUBLE_ROUNDS, Permutation, ROW_ROUND, quarter_round};
use crate::Matrix;

/// Alternates column rounds and row rounds in place.
///
/// Two consecutive transposes of [`Transposed`](super::Transposed) cancel,
/// so instead of moving the words the row round addresses the transposed
/// positions directly through [`ROW_ROUND`]. This is the reference
/// formulation of Salsa20.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Indexed;

impl Permutation for Indexed {
    #[inline]
    fn mix(&self, state: &mut Matrix) {
        for _ in 0..DOUBLE_ROUNDS {
            // column rounds
            for indices in COLUMN_ROUND {
                quarter_round(indices, state);
            }
            // row rounds
            for indices in ROW_ROUND {
                quarter_round(indices, state);
            }
        }
    }
}
