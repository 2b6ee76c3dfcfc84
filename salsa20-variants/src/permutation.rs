//! The Salsa20/20 core function and the strategies that compute it.
//!
//! Every strategy runs ten double rounds (a column round followed by a row
//! round, four quarter-rounds each) and then adds the input back in. They
//! differ only in how the rounds are sequenced and where the words are
//! stored while they run:
//!
//! | strategy            | rounds                | layout                          |
//! |---------------------|-----------------------|---------------------------------|
//! | [`Transposed`]      | 20 × column round     | transposed after every round    |
//! | [`Indexed`]         | 10 × (column + row)   | fixed, rotated index tables     |
//! | [`LaneTransposed`]  | 20 × vector round     | diagonals aligned, re-aligned   |
//! | [`LaneShuffled`]    | 10 × (vector + vector)| diagonals aligned, lanes rotate |
//!
//! All of them produce bit-identical output for every input.

mod indexed;
mod lane_shuffled;
mod lane_transposed;
mod transposed;

pub use indexed::Indexed;
pub use lane_shuffled::LaneShuffled;
pub use lane_transposed::LaneTransposed;
pub use transposed::Transposed;

use crate::{Matrix, lanes::U32x4};

/// Number of double rounds in Salsa20/20.
pub(crate) const DOUBLE_ROUNDS: usize = 10;

/// Column quarter-round `k` starts at `(k, k)` and walks down column `k`,
/// wrapping at the bottom.
pub(crate) const COLUMN_ROUND: [[usize; 4]; 4] =
    [[0, 4, 8, 12], [5, 9, 13, 1], [10, 14, 2, 6], [15, 3, 7, 11]];

/// Row quarter-round `k` starts at `(k, k)` and walks right along row `k`,
/// wrapping at the end. Each entry is the transpose of the matching
/// [`COLUMN_ROUND`] entry.
pub(crate) const ROW_ROUND: [[usize; 4]; 4] =
    [[0, 1, 2, 3], [5, 6, 7, 4], [10, 11, 8, 9], [15, 12, 13, 14]];

/// A strategy for computing the Salsa20/20 core function.
pub trait Permutation {
    /// Run the 20 rounds over `state` in place, without the final feedback
    /// addition.
    fn mix(&self, state: &mut Matrix);

    /// The core function: the mixed input added word-wise to the input.
    #[inline]
    fn permute(&self, input: &Matrix) -> Matrix {
        let mut state = *input;
        self.mix(&mut state);
        state.wrapping_add(input)
    }
}

impl<P: Permutation + ?Sized> Permutation for &P {
    #[inline]
    fn mix(&self, state: &mut Matrix) {
        (**self).mix(state);
    }
}

/// Runtime choice of strategy.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Variant {
    /// See [`Transposed`].
    Transposed,
    /// See [`Indexed`].
    Indexed,
    /// See [`LaneTransposed`].
    LaneTransposed,
    /// See [`LaneShuffled`].
    #[default]
    LaneShuffled,
}

impl Variant {
    /// Every strategy, in the order they were introduced.
    pub const ALL: [Variant; 4] = [
        Variant::Transposed,
        Variant::Indexed,
        Variant::LaneTransposed,
        Variant::LaneShuffled,
    ];
}

impl Permutation for Variant {
    #[inline]
    fn mix(&self, state: &mut Matrix) {
        match self {
            Variant::Transposed => Transposed.mix(state),
            Variant::Indexed => Indexed.mix(state),
            Variant::LaneTransposed => LaneTransposed.mix(state),
            Variant::LaneShuffled => LaneShuffled.mix(state),
        }
    }
}

#[inline(always)]
#[allow(clippy::many_single_char_names)]
pub(crate) fn quarter_round([a, b, c, d]: [usize; 4], state: &mut Matrix) {
    state[b] ^= state[a].wrapping_add(state[d]).rotate_left(7);
    state[c] ^= state[b].wrapping_add(state[a]).rotate_left(9);
    state[d] ^= state[c].wrapping_add(state[b]).rotate_left(13);
    state[a] ^= state[d].wrapping_add(state[c]).rotate_left(18);
}

/// Four quarter-rounds at once, one per lane.
#[inline(always)]
pub(crate) fn lane_quarter_round(a: &mut U32x4, b: &mut U32x4, c: &mut U32x4, d: &mut U32x4) {
    *b ^= a.wrapping_add(*d).rotate_left(7);
    *c ^= b.wrapping_add(*a).rotate_left(9);
    *d ^= c.wrapping_add(*b).rotate_left(13);
    *a ^= d.wrapping_add(*c).rotate_left(18);
}
