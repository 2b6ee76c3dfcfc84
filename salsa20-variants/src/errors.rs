//! Error types.

use core::fmt;

/// Input and output buffers passed to a two-buffer `crypt` call have
/// different lengths. Nothing is written when this is returned.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct LengthMismatch {
    /// Length of the input buffer.
    pub input: usize,
    /// Length of the output buffer.
    pub output: usize,
}

impl fmt::Display for LengthMismatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "input is {} bytes but output is {} bytes",
            self.input, self.output
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for LengthMismatch {}

/// A permutation disagreed with the published Salsa20 test vector.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Divergence {
    /// Row-major index of the first differing word.
    pub index: usize,
    /// Word the test vector expects at `index`.
    pub expected: u32,
    /// Word the permutation produced at `index`.
    pub actual: u32,
}

impl fmt::Display for Divergence {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "word {} is {:#010x}, expected {:#010x}",
            self.index, self.actual, self.expected
        )
    }
}

#[cfg(feature = "std")]
impl std::error::Error for Divergence {}
