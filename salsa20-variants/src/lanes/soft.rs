//! Portable implementation which does not rely on architecture-specific
//! intrinsics.

use core::ops::{BitXor, BitXorAssign};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct U32x4([u32; 4]);

impl U32x4 {
    #[inline(always)]
    pub(crate) fn from_array(words: [u32; 4]) -> Self {
        Self(words)
    }

    #[inline(always)]
    pub(crate) fn to_array(self) -> [u32; 4] {
        self.0
    }

    #[inline(always)]
    pub(crate) fn from_le_bytes(bytes: &[u8; 16]) -> Self {
        let (words, _) = bytes.as_chunks::<4>();
        Self(core::array::from_fn(|i| u32::from_le_bytes(words[i])))
    }

    #[inline(always)]
    pub(crate) fn to_le_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        for (chunk, word) in bytes.chunks_exact_mut(4).zip(self.0) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        bytes
    }

    #[inline(always)]
    pub(crate) fn wrapping_add(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i].wrapping_add(rhs.0[i])))
    }

    #[inline(always)]
    pub(crate) fn rotate_left(self, amount: u32) -> Self {
        Self(self.0.map(|w| w.rotate_left(amount)))
    }

    /// Lane `i` of the result is lane `(i + N) % 4` of `self`.
    #[inline(always)]
    pub(crate) fn rotate_lanes<const N: usize>(self) -> Self {
        Self(core::array::from_fn(|i| self.0[(i + N) % 4]))
    }
}

impl BitXor for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        Self(core::array::from_fn(|i| self.0[i] ^ rhs.0[i]))
    }
}

impl BitXorAssign for U32x4 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}
