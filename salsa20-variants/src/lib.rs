//! Implementation of the [Salsa20] stream cipher (Salsa20/20) with
//! interchangeable strategies for computing its core function.
//!
//! The core function maps a 4×4 matrix of 32-bit words to another through
//! ten double rounds and a feedback addition. This crate computes it four
//! ways, all bit-identical, selected through the [`Permutation`] trait:
//!
//! - [`Transposed`]: twenty column rounds with a matrix transpose after each.
//! - [`Indexed`]: column and row rounds addressed through index tables.
//! - [`LaneTransposed`]: diagonals aligned into vector lanes, transposed
//!   between rounds.
//! - [`LaneShuffled`]: diagonals aligned into vector lanes, with the lanes
//!   rotated between the column and row halves of each double round.
//!
//! The keystream layer ([`Stream`], [`crypt`]) combines any of them with a
//! bytewise or 16-byte grouped XOR. [`Salsa20`] exposes the same cipher
//! through the traits of the re-exported [`cipher`] crate.
//!
//! # ⚠️ Security Warning: Hazmat!
//!
//! This crate does not ensure ciphertexts are authentic! Thus ciphertext integrity
//! is not verified, which can lead to serious vulnerabilities!
//!
//! USE AT YOUR OWN RISK!
//!
//! # Diagram
//!
//! This diagram illustrates the Salsa quarter round function.
//! Each round consists of four quarter-rounds:
//!
//! <img src="https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/img/stream-ciphers/salsa20.png" width="300px">
//!
//! Legend:
//!
//! - ⊞ add
//! - ‹‹‹ rotate
//! - ⊕ xor
//!
//! # Example
//! ```
//! use salsa20_variants::Salsa20;
//! // Import relevant traits
//! use salsa20_variants::cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
//! use hex_literal::hex;
//!
//! let key = [0x42; 32];
//! let nonce = [0x24; 8];
//! let plaintext = hex!("00010203 04050607 08090A0B 0C0D0E0F");
//! let ciphertext = hex!("85843cc5 d58cce7b 5dd3dd04 fa005ded");
//!
//! // Key and IV must be references to the `Array` type.
//! // Here we use the `Into` trait to convert arrays into it.
//! let mut cipher = Salsa20::new(&key.into(), &nonce.into());
//!
//! let mut buffer = plaintext.clone();
//!
//! // apply keystream (encrypt)
//! cipher.apply_keystream(&mut buffer);
//! assert_eq!(buffer, ciphertext);
//!
//! let ciphertext = buffer.clone();
//!
//! // Salsa ciphers support seeking
//! cipher.seek(0u32);
//!
//! // decrypt ciphertext by applying keystream again
//! cipher.apply_keystream(&mut buffer);
//! assert_eq!(buffer, plaintext);
//!
//! // stream ciphers can be used with streaming messages
//! cipher.seek(0u32);
//! for chunk in buffer.chunks_mut(3) {
//!     cipher.apply_keystream(chunk);
//! }
//! assert_eq!(buffer, ciphertext);
//! ```
//!
//! Choosing a strategy explicitly:
//! ```
//! use salsa20_variants::{Stream, Variant, XorStrategy};
//! use hex_literal::hex;
//!
//! let message = b"This is an example text that will be encrypted.";
//! let mut ciphertext = [0u8; 47];
//!
//! for variant in Variant::ALL {
//!     let stream = Stream::new([0; 8], 0, variant).with_xor(XorStrategy::Grouped);
//!     stream.crypt(message, &mut ciphertext).unwrap();
//!     assert_eq!(ciphertext[..8], hex!("ceff9f28bb25013b"));
//! }
//! ```
//!
//! On x86(-64) targets with SSE2 enabled the lane strategies run on SSE2
//! registers; elsewhere, or with `--cfg salsa20_force_soft`, they use a
//! portable four-word array.
//!
//! [Salsa20]: https://en.wikipedia.org/wiki/Salsa20

#![no_std]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]
#![doc(
    html_logo_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg",
    html_favicon_url = "https://raw.githubusercontent.com/RustCrypto/media/8f1a9894/logo.svg"
)]
#![warn(missing_docs, rust_2018_idioms, trivial_casts, unused_qualifications)]

#[cfg(feature = "std")]
extern crate std;

pub use cipher;

use cipher::{
    BlockSizeUser, IvSizeUser, KeyIvInit, KeySizeUser, StreamCipherClosure, StreamCipherCore,
    StreamCipherCoreWrapper, StreamCipherSeekCore,
    array::Array,
    consts::{U8, U32, U64},
};
use core::fmt;

#[cfg(feature = "zeroize")]
use cipher::zeroize::{Zeroize, ZeroizeOnDrop};

mod backend;
mod block;
mod conformance;
mod crypt;
mod errors;
mod lanes;
mod matrix;
mod permutation;

pub use block::{build_matrix, key_words, nonce_value};
pub use conformance::{CONFORMANCE_INPUT, CONFORMANCE_OUTPUT, verify};
pub use crypt::{Stream, XorStrategy, crypt};
pub use errors::{Divergence, LengthMismatch};
pub use matrix::Matrix;
pub use permutation::{Indexed, LaneShuffled, LaneTransposed, Permutation, Transposed, Variant};

/// Salsa20/20 stream cipher computed with [`Indexed`] rounds.
pub type Salsa20 = StreamCipherCoreWrapper<SalsaCore<Indexed>>;

/// Salsa20/20 stream cipher computed with the strategy `P`.
pub type Salsa20With<P> = StreamCipherCoreWrapper<SalsaCore<P>>;

/// Key type: 32 bytes, read as eight little-endian words.
pub type Key = Array<u8, U32>;

/// Nonce type: 8 bytes, read as a little-endian `u64`.
pub type Nonce = Array<u8, U8>;

/// A decoded key.
pub type KeyWords = [u32; KEY_WORDS];

/// Number of 32-bit words in the Salsa20 state
pub const STATE_WORDS: usize = 16;

/// Number of 32-bit words in a key
pub const KEY_WORDS: usize = 8;

/// Size of one keystream block in bytes
pub const BLOCK_SIZE: usize = 64;

/// State initialization constant ("expand 32-byte k")
pub const CONSTANTS: [u32; 4] = [0x6170_7865, 0x3320_646e, 0x7962_2d32, 0x6b20_6574];

/// The Salsa20 core function behind [`Salsa20`] and [`Salsa20With`].
pub struct SalsaCore<P: Permutation = Indexed> {
    stream: Stream<P>,
    /// Number of the next keystream block
    counter: u64,
}

impl<P: Permutation> SalsaCore<P> {
    /// Create a core that computes its blocks with `permutation`.
    pub fn with_permutation(key: &Key, iv: &Nonce, permutation: P) -> Self {
        Self {
            stream: Stream::from_bytes(key, iv, permutation),
            counter: 0,
        }
    }

    /// The underlying positionless keystream.
    pub fn stream(&self) -> &Stream<P> {
        &self.stream
    }
}

impl<P: Permutation> KeySizeUser for SalsaCore<P> {
    type KeySize = U32;
}

impl<P: Permutation> IvSizeUser for SalsaCore<P> {
    type IvSize = U8;
}

impl<P: Permutation> BlockSizeUser for SalsaCore<P> {
    type BlockSize = U64;
}

impl<P: Permutation + Default> KeyIvInit for SalsaCore<P> {
    fn new(key: &Key, iv: &Nonce) -> Self {
        Self::with_permutation(key, iv, P::default())
    }
}

impl<P: Permutation> StreamCipherCore for SalsaCore<P> {
    #[inline(always)]
    fn remaining_blocks(&self) -> Option<usize> {
        let rem = u64::MAX - self.get_block_pos();
        rem.try_into().ok()
    }
    fn process_with_backend(&mut self, f: impl StreamCipherClosure<BlockSize = Self::BlockSize>) {
        f.call(&mut backend::Backend(self));
    }
}

impl<P: Permutation> StreamCipherSeekCore for SalsaCore<P> {
    type Counter = u64;

    #[inline(always)]
    fn get_block_pos(&self) -> u64 {
        self.counter
    }

    #[inline(always)]
    fn set_block_pos(&mut self, pos: u64) {
        self.counter = pos;
    }
}

impl<P: Permutation> fmt::Debug for SalsaCore<P> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("SalsaCore { ... }")
    }
}

#[cfg(feature = "zeroize")]
impl<P: Permutation> Drop for SalsaCore<P> {
    fn drop(&mut self) {
        self.counter.zeroize();
    }
}

#[cfg(feature = "zeroize")]
impl<P: Permutation> ZeroizeOnDrop for SalsaCore<P> {}
