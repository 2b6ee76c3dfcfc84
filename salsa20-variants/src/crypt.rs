//! Keystream generation and the XOR layer.

use crate::{
    BLOCK_SIZE, Key, KeyWords, LengthMismatch, Matrix, Nonce, Permutation, Variant,
    block::{build_matrix, key_words, nonce_value},
    lanes::U32x4,
};
use core::fmt;

#[cfg(feature = "zeroize")]
use cipher::zeroize::{Zeroize, ZeroizeOnDrop};

/// Bytes combined per step by [`XorStrategy::Grouped`].
const GROUP_SIZE: usize = 16;

/// How keystream bytes are combined with message bytes.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum XorStrategy {
    /// One byte at a time.
    #[default]
    Bytewise,
    /// 16 bytes at a time in a vector register while at least 16 remain,
    /// then single bytes.
    Grouped,
}

impl XorStrategy {
    /// XOR `keystream` into `data`; both have the same length.
    #[inline]
    fn apply(self, keystream: &[u8], data: &mut [u8]) {
        debug_assert_eq!(keystream.len(), data.len());
        match self {
            XorStrategy::Bytewise => xor_bytes(keystream, data),
            XorStrategy::Grouped => {
                let (ks_groups, ks_tail) = keystream.as_chunks::<GROUP_SIZE>();
                let (data_groups, data_tail) = data.as_chunks_mut::<GROUP_SIZE>();
                for (group, ks) in data_groups.iter_mut().zip(ks_groups) {
                    *group = (U32x4::from_le_bytes(group) ^ U32x4::from_le_bytes(ks)).to_le_bytes();
                }
                xor_bytes(ks_tail, data_tail);
            }
        }
    }
}

#[inline(always)]
fn xor_bytes(keystream: &[u8], data: &mut [u8]) {
    for (byte, ks) in data.iter_mut().zip(keystream) {
        *byte ^= ks;
    }
}

/// The Salsa20/20 keystream of one key and nonce, computed with one
/// [`Permutation`] strategy.
///
/// A `Stream` has no position of its own: every call names the byte offset
/// it starts at, and block `n` of the keystream depends only on the key, the
/// nonce and `n`. A shared `&Stream` can therefore process disjoint regions
/// of a buffer from several threads at once.
///
/// The same key and nonce must never be used for two different messages.
#[derive(Clone)]
pub struct Stream<P: Permutation = Variant> {
    key: KeyWords,
    nonce: u64,
    permutation: P,
    xor: XorStrategy,
}

impl<P: Permutation> Stream<P> {
    /// Create a stream from key words and a nonce, combining bytewise.
    pub fn new(key: KeyWords, nonce: u64, permutation: P) -> Self {
        Self {
            key,
            nonce,
            permutation,
            xor: XorStrategy::Bytewise,
        }
    }

    /// Create a stream from a 32-byte key and an 8-byte nonce, both read
    /// little-endian.
    pub fn from_bytes(key: &Key, nonce: &Nonce, permutation: P) -> Self {
        Self::new(key_words(key), nonce_value(nonce), permutation)
    }

    /// Use `xor` to combine keystream and message bytes.
    #[must_use]
    pub fn with_xor(mut self, xor: XorStrategy) -> Self {
        self.xor = xor;
        self
    }

    /// The strategy computing the core function.
    pub fn permutation(&self) -> &P {
        &self.permutation
    }

    /// Core output for block number `counter`.
    pub fn block(&self, counter: u64) -> Matrix {
        let input = build_matrix(&self.key, self.nonce, counter);
        self.permutation.permute(&input)
    }

    /// Keystream bytes of block number `counter`.
    pub fn keystream_block(&self, counter: u64) -> [u8; BLOCK_SIZE] {
        self.block(counter).to_le_bytes()
    }

    /// XOR the keystream starting at byte `offset` into `data`.
    ///
    /// The first block used is `offset / 64`, entered `offset % 64` bytes in.
    pub fn apply_keystream(&self, offset: u64, data: &mut [u8]) {
        let mut counter = offset / BLOCK_SIZE as u64;
        let skip = (offset % BLOCK_SIZE as u64) as usize;

        let head_len = data.len().min(BLOCK_SIZE - skip);
        let (head, body) = data.split_at_mut(head_len);
        if !head.is_empty() {
            let keystream = self.keystream_block(counter);
            self.xor.apply(&keystream[skip..skip + head_len], head);
            counter = counter.wrapping_add(1);
        }

        for chunk in body.chunks_mut(BLOCK_SIZE) {
            let keystream = self.keystream_block(counter);
            self.xor.apply(&keystream[..chunk.len()], chunk);
            counter = counter.wrapping_add(1);
        }
    }

    /// Encrypt or decrypt `input` into `output`, with the keystream starting
    /// at byte `offset`.
    ///
    /// # Errors
    /// [`LengthMismatch`] if the buffers differ in length.
    pub fn crypt_at(&self, offset: u64, input: &[u8], output: &mut [u8]) -> Result<(), LengthMismatch> {
        if input.len() != output.len() {
            return Err(LengthMismatch {
                input: input.len(),
                output: output.len(),
            });
        }
        output.copy_from_slice(input);
        self.apply_keystream(offset, output);
        Ok(())
    }

    /// Encrypt or decrypt `input` into `output` from the start of the stream.
    ///
    /// # Errors
    /// [`LengthMismatch`] if the buffers differ in length.
    pub fn crypt(&self, input: &[u8], output: &mut [u8]) -> Result<(), LengthMismatch> {
        self.crypt_at(0, input, output)
    }
}

impl<P: Permutation + fmt::Debug> fmt::Debug for Stream<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stream")
            .field("permutation", &self.permutation)
            .field("xor", &self.xor)
            .finish_non_exhaustive()
    }
}

#[cfg(feature = "zeroize")]
impl<P: Permutation> Drop for Stream<P> {
    fn drop(&mut self) {
        self.key.zeroize();
        self.nonce.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl<P: Permutation> ZeroizeOnDrop for Stream<P> {}

/// Encrypt or decrypt `input` into `output` with a bytewise XOR, starting at
/// block 0. Encryption and decryption are the same operation.
///
/// # Errors
/// [`LengthMismatch`] if the buffers differ in length.
pub fn crypt<P: Permutation + ?Sized>(
    input: &[u8],
    output: &mut [u8],
    key: &KeyWords,
    nonce: u64,
    permutation: &P,
) -> Result<(), LengthMismatch> {
    Stream::new(*key, nonce, permutation).crypt(input, output)
}
