//! The 4×4 word matrix the Salsa20 core operates on.

use crate::{BLOCK_SIZE, STATE_WORDS, lanes::U32x4};
use core::ops::{Index, IndexMut};

/// Gather table of the diagonal alignment: aligned position `i` takes the
/// word at original position `ALIGN[i]`, so aligned row `k` is diagonal `k`.
const ALIGN: [usize; STATE_WORDS] = [0, 5, 10, 15, 4, 9, 14, 3, 8, 13, 2, 7, 12, 1, 6, 11];

/// Gather table undoing [`ALIGN`].
const UNALIGN: [usize; STATE_WORDS] = [0, 13, 10, 7, 4, 1, 14, 11, 8, 5, 2, 15, 12, 9, 6, 3];

/// `ALIGN ∘ transpose ∘ UNALIGN` fused into one gather.
const REALIGN_TRANSPOSED: [usize; STATE_WORDS] =
    [0, 1, 2, 3, 13, 14, 15, 12, 10, 11, 8, 9, 7, 4, 5, 6];

/// A 4×4 matrix of 32-bit words stored row-major: element `(row, col)`
/// lives at index `row * 4 + col`.
///
/// Diagonal `k` is the wrapping diagonal starting at `(k, 0)`, i.e. the
/// elements `((k + i) % 4, i)`; diagonal 0 is the main diagonal, which holds
/// the Salsa20 constants.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct Matrix([u32; STATE_WORDS]);

impl Matrix {
    /// Create a matrix from 16 row-major words.
    #[must_use]
    pub const fn from_words(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }

    /// Row-major words of the matrix.
    #[must_use]
    pub const fn words(&self) -> &[u32; STATE_WORDS] {
        &self.0
    }

    /// Flat index of element `(row, col)`.
    #[must_use]
    pub const fn position(row: usize, col: usize) -> usize {
        (row % 4) * 4 + col % 4
    }

    /// Element at `(row, col)`.
    #[must_use]
    pub fn get(&self, row: usize, col: usize) -> u32 {
        self.0[Self::position(row, col)]
    }

    /// Row `r`, left to right.
    #[must_use]
    pub fn row(&self, r: usize) -> [u32; 4] {
        core::array::from_fn(|i| self.get(r, i))
    }

    /// Column `c`, top to bottom.
    #[must_use]
    pub fn column(&self, c: usize) -> [u32; 4] {
        core::array::from_fn(|i| self.get(i, c))
    }

    /// Diagonal `k`, i.e. elements `((k + i) % 4, i)` for `i` in `0..4`.
    #[must_use]
    pub fn diagonal(&self, k: usize) -> [u32; 4] {
        core::array::from_fn(|i| self.get(k + i, i))
    }

    /// Swap every element `(r, c)` with `(c, r)`.
    pub fn transpose(&mut self) {
        for r in 0..4 {
            for c in (r + 1)..4 {
                self.0.swap(Self::position(r, c), Self::position(c, r));
            }
        }
    }

    /// Move each diagonal into the row of the same number, so that the four
    /// words a quarter-round touches together sit in one lane position.
    #[must_use]
    pub fn align_diagonals(&self) -> Self {
        self.gather(&ALIGN)
    }

    /// Inverse of [`Matrix::align_diagonals`].
    #[must_use]
    pub fn unalign_diagonals(&self) -> Self {
        self.gather(&UNALIGN)
    }

    /// Transpose a diagonal-aligned matrix in its original orientation and
    /// re-align it, in one pass.
    #[must_use]
    pub(crate) fn realign_transposed(&self) -> Self {
        self.gather(&REALIGN_TRANSPOSED)
    }

    /// Word-wise sum modulo 2^32.
    #[must_use]
    pub fn wrapping_add(&self, rhs: &Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i].wrapping_add(rhs.0[i])))
    }

    /// Serialize every word least-significant byte first.
    #[must_use]
    pub fn to_le_bytes(&self) -> [u8; BLOCK_SIZE] {
        let mut bytes = [0u8; BLOCK_SIZE];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.0.iter()) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    /// Index of the first word where `self` and `other` differ.
    #[must_use]
    pub fn first_difference(&self, other: &Self) -> Option<usize> {
        self.0.iter().zip(other.0.iter()).position(|(a, b)| a != b)
    }

    #[inline(always)]
    pub(crate) fn lane_rows(&self) -> [U32x4; 4] {
        core::array::from_fn(|r| U32x4::from_array(self.row(r)))
    }

    #[inline(always)]
    pub(crate) fn from_lane_rows(rows: [U32x4; 4]) -> Self {
        let mut words = [0u32; STATE_WORDS];
        for (chunk, row) in words.chunks_exact_mut(4).zip(rows) {
            chunk.copy_from_slice(&row.to_array());
        }
        Self(words)
    }

    fn gather(&self, table: &[usize; STATE_WORDS]) -> Self {
        Self(table.map(|i| self.0[i]))
    }
}

impl From<[u32; STATE_WORDS]> for Matrix {
    fn from(words: [u32; STATE_WORDS]) -> Self {
        Self(words)
    }
}

impl From<Matrix> for [u32; STATE_WORDS] {
    fn from(matrix: Matrix) -> Self {
        matrix.0
    }
}

impl Index<usize> for Matrix {
    type Output = u32;

    #[inline(always)]
    fn index(&self, i: usize) -> &u32 {
        &self.0[i]
    }
}

impl IndexMut<usize> for Matrix {
    #[inline(always)]
    fn index_mut(&mut self, i: usize) -> &mut u32 {
        &mut self.0[i]
    }
}
