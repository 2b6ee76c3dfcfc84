//! The published Salsa20 core test vector.

use crate::{Divergence, Matrix, Permutation};

/// Input matrix of the Salsa20 core example in "The Salsa20 family of
/// stream ciphers", section 4.1: constants interleaved with the bytes
/// `1..=32` as key, `03 01 04 01 05 09 02 06` as nonce and block 7.
#[rustfmt::skip]
pub const CONFORMANCE_INPUT: Matrix = Matrix::from_words([
    0x6170_7865, 0x0403_0201, 0x0807_0605, 0x0c0b_0a09,
    0x100f_0e0d, 0x3320_646e, 0x0104_0103, 0x0602_0905,
    0x0000_0007, 0x0000_0000, 0x7962_2d32, 0x1413_1211,
    0x1817_1615, 0x1c1b_1a19, 0x201f_1e1d, 0x6b20_6574,
]);

/// Expected core output for [`CONFORMANCE_INPUT`].
#[rustfmt::skip]
pub const CONFORMANCE_OUTPUT: Matrix = Matrix::from_words([
    0xb9a2_05a3, 0x0695_e150, 0xaa94_881a, 0xadb7_b12c,
    0x7989_42d4, 0x2610_7016, 0x64ed_b1a4, 0x2d27_173f,
    0xb1c7_f1fa, 0x6206_6edc, 0xe035_fa23, 0xc449_6f04,
    0x2131_e6b3, 0x810b_de28, 0xf62c_b407, 0x6bde_de3d,
]);

/// Check `permutation` against the published test vector.
///
/// # Errors
/// Returns the first word where the output differs from
/// [`CONFORMANCE_OUTPUT`].
pub fn verify<P: Permutation + ?Sized>(permutation: &P) -> Result<(), Divergence> {
    let actual = permutation.permute(&CONFORMANCE_INPUT);
    match CONFORMANCE_OUTPUT.first_difference(&actual) {
        None => Ok(()),
        Some(index) => Err(Divergence {
            index,
            expected: CONFORMANCE_OUTPUT[index],
            actual: actual[index],
        }),
    }
}
