//! SSE2 backend for the lane type.

#[cfg(target_arch = "x86")]
use core::arch::x86::*;
#[cfg(target_arch = "x86_64")]
use core::arch::x86_64::*;
use core::ops::{BitXor, BitXorAssign};

#[derive(Clone, Copy, Debug)]
pub(crate) struct U32x4(__m128i);

// SAFETY (all blocks below): this module is only compiled when `sse2` is
// statically enabled for the target, and every load/store is unaligned
// (`loadu`/`storeu`) on a buffer of exactly 16 bytes.
impl U32x4 {
    #[inline(always)]
    pub(crate) fn from_array(words: [u32; 4]) -> Self {
        // SAFETY: see module comment
        Self(unsafe { _mm_loadu_si128(words.as_ptr().cast()) })
    }

    #[inline(always)]
    pub(crate) fn to_array(self) -> [u32; 4] {
        let mut words = [0u32; 4];
        // SAFETY: see module comment
        unsafe { _mm_storeu_si128(words.as_mut_ptr().cast(), self.0) };
        words
    }

    #[inline(always)]
    pub(crate) fn from_le_bytes(bytes: &[u8; 16]) -> Self {
        // SAFETY: see module comment
        Self(unsafe { _mm_loadu_si128(bytes.as_ptr().cast()) })
    }

    #[inline(always)]
    pub(crate) fn to_le_bytes(self) -> [u8; 16] {
        let mut bytes = [0u8; 16];
        // SAFETY: see module comment
        unsafe { _mm_storeu_si128(bytes.as_mut_ptr().cast(), self.0) };
        bytes
    }

    #[inline(always)]
    pub(crate) fn wrapping_add(self, rhs: Self) -> Self {
        // SAFETY: see module comment
        Self(unsafe { _mm_add_epi32(self.0, rhs.0) })
    }

    #[inline(always)]
    pub(crate) fn rotate_left(self, amount: u32) -> Self {
        let amount = amount % 32;
        // SAFETY: see module comment
        unsafe {
            let left = _mm_cvtsi32_si128(amount as i32);
            let right = _mm_cvtsi32_si128((32 - amount) as i32);
            Self(_mm_or_si128(
                _mm_sll_epi32(self.0, left),
                _mm_srl_epi32(self.0, right),
            ))
        }
    }

    /// Lane `i` of the result is lane `(i + N) % 4` of `self`.
    #[inline(always)]
    pub(crate) fn rotate_lanes<const N: usize>(self) -> Self {
        // SAFETY: see module comment
        unsafe {
            match N % 4 {
                1 => Self(_mm_shuffle_epi32(self.0, 0b00_11_10_01)),
                2 => Self(_mm_shuffle_epi32(self.0, 0b01_00_11_10)),
                3 => Self(_mm_shuffle_epi32(self.0, 0b10_01_00_11)),
                _ => self,
            }
        }
    }
}

impl BitXor for U32x4 {
    type Output = Self;

    #[inline(always)]
    fn bitxor(self, rhs: Self) -> Self {
        // SAFETY: see module comment
        Self(unsafe { _mm_xor_si128(self.0, rhs.0) })
    }
}

impl BitXorAssign for U32x4 {
    #[inline(always)]
    fn bitxor_assign(&mut self, rhs: Self) {
        *self = *self ^ rhs;
    }
}
