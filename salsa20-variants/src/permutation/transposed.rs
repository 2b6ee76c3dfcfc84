//! Fixed-position column rounds with a full transpose after each round.

use super::{COLUMN_ROUND, DOUBLE_ROUNDS, Permutation, quarter_round};
use crate::Matrix;

/// Applies the same four column quarter-rounds 20 times, transposing the
/// whole matrix after each, so that every other round acts on rows.
///
/// The simplest strategy and the slowest: it moves all 16 words per round.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Transposed;

impl Permutation for Transposed {
    fn mix(&self, state: &mut Matrix) {
        // An even number of transposes leaves the orientation unchanged.
        for _ in 0..2 * DOUBLE_ROUNDS {
            for indices in COLUMN_ROUND {
                quarter_round(indices, state);
            }
            state.transpose();
        }
    }
}
