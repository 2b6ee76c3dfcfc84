//! Salsa20 input block construction.

use crate::{CONSTANTS, KEY_WORDS, Key, KeyWords, Matrix, Nonce};

/// Assemble the input matrix for block number `counter`.
///
/// ```text
/// [const0, key0,   key1,   key2  ]
/// [key3,   const1, nonce0, nonce1]
/// [ctr0,   ctr1,   const2, key4  ]
/// [key5,   key6,   key7,   const3]
/// ```
///
/// `nonce0`/`ctr0` are the low 32 bits of the nonce and counter.
#[must_use]
pub fn build_matrix(key: &KeyWords, nonce: u64, counter: u64) -> Matrix {
    Matrix::from_words([
        CONSTANTS[0],
        key[0],
        key[1],
        key[2],
        key[3],
        CONSTANTS[1],
        (nonce & 0xffff_ffff) as u32,
        ((nonce >> 32) & 0xffff_ffff) as u32,
        (counter & 0xffff_ffff) as u32,
        ((counter >> 32) & 0xffff_ffff) as u32,
        CONSTANTS[2],
        key[4],
        key[5],
        key[6],
        key[7],
        CONSTANTS[3],
    ])
}

/// Decode a 32-byte key into little-endian words.
#[must_use]
pub fn key_words(key: &Key) -> KeyWords {
    let (chunks, _) = key.as_slice().as_chunks::<4>();
    let mut words = [0u32; KEY_WORDS];
    for (word, chunk) in words.iter_mut().zip(chunks) {
        *word = u32::from_le_bytes(*chunk);
    }
    words
}

/// Decode an 8-byte nonce as a little-endian `u64`.
#[must_use]
pub fn nonce_value(nonce: &Nonce) -> u64 {
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(nonce);
    u64::from_le_bytes(bytes)
}
