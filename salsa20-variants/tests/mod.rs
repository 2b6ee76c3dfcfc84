//! Salsa20 known-answer tests

use cipher::{KeyIvInit, StreamCipher, StreamCipherSeek};
use hex_literal::hex;
use salsa20_variants::{
    Indexed, LaneShuffled, LaneTransposed, Salsa20, Salsa20With, Stream, Transposed, Variant,
    XorStrategy,
};

cipher::stream_cipher_seek_test!(salsa20_seek, Salsa20);
cipher::stream_cipher_seek_test!(salsa20_transposed_seek, Salsa20With<Transposed>);
cipher::stream_cipher_seek_test!(salsa20_lane_transposed_seek, Salsa20With<LaneTransposed>);
cipher::stream_cipher_seek_test!(salsa20_lane_shuffled_seek, Salsa20With<LaneShuffled>);

const KEY_BYTES: usize = 32;

const IV_BYTES: usize = 8;

const KEY0: [u8; KEY_BYTES] = [0; KEY_BYTES];

const KEY1: [u8; KEY_BYTES] = hex!(
    "80000000000000000000000000000000"
    "00000000000000000000000000000000"
);

const KEY_LONG: [u8; KEY_BYTES] = hex!(
    "0102030405060708090A0B0C0D0E0F10"
    "1112131415161718191A1B1C1D1E1F20"
);

const IV0: [u8; IV_BYTES] = [0; IV_BYTES];

const IV1: [u8; IV_BYTES] = hex!("8000000000000000");

const IVHI: [u8; IV_BYTES] = hex!("0000000000000001");

const IV_LONG: [u8; IV_BYTES] = hex!("0301040105090206");

const EXPECTED_KEY1_IV0: [u8; 64] = hex!(
    "e3be8fdd8beca2e3ea8ef9475b29a6e7"
    "003951e1097a5c38d23b7a5fad9f6844"
    "b22c97559e2723c7cbbd3fe4fc8d9a07"
    "44652a83e72a9c461876af4d7ef1a117"
);

const EXPECTED_KEY0_IV1: [u8; 64] = hex!(
    "2aba3dc45b4947007b14c851cd694456"
    "b303ad59a465662803006705673d6c3e"
    "29f1d3510dfc0405463c03414e0e07e3"
    "59f1f1816c68b2434a19d3eee0464873"
);

const EXPECTED_KEY0_IVHI: [u8; 64] = hex!(
    "b47f96aa96786135297a3c4ec56a613d"
    "0b80095324ff43239d684c57ffe42e1c"
    "44f3cc011613db6cdc880999a1e65aed"
    "1287fcb11c839c37120765afa73e5075"
);

const EXPECTED_LONG: [u8; 256] = hex!(
    "6ebcbdbf76fccc64ab05542bee8a67cb"
    "c28fa2e141fbefbb3a2f9b221909c8d7"
    "d4295258cb539770dd24d7ac3443769f"
    "fa27a50e60644264dc8b6b612683372e"
    "085d0a12bf240b189ce2b78289862b56"
    "fdc9fcffc33bef9325a2e81b98fb3fb9"
    "aa04cf434615ceffeb985c1cb08d8440"
    "e90b1d56ddeaea16d9e15affff1f698c"
    "483c7a466af1fe062574adfd2b06a62b"
    "4d98440719ea776385c470349a7ed696"
    "9583463ed5d26b8fefccb205da0f5bfa"
    "98c77812fe756b09eacc282aa42f4baf"
    "a79633189046e2b20f35b3e0e54aa3b9"
    "29e23c0f47dc7bcd4f928b2a9764be7d"
    "4b8a50f980a50b35ad8087375e0c556e"
    "cbe6a7161e8653ce9391e1e6710ed4f1"
);

macro_rules! kat_test {
    ($name:ident, $key:expr, $iv:expr, $expected:expr) => {
        #[test]
        fn $name() {
            let mut cipher = Salsa20::new(&$key.into(), &$iv.into());
            let mut buf = [0; $expected.len()];
            cipher.apply_keystream(&mut buf);
            assert_eq!(buf, $expected);

            for variant in Variant::ALL {
                for xor in [XorStrategy::Bytewise, XorStrategy::Grouped] {
                    let stream = Stream::from_bytes(&$key.into(), &$iv.into(), variant).with_xor(xor);
                    let mut buf = [0; $expected.len()];
                    stream.apply_keystream(0, &mut buf);
                    assert_eq!(buf, $expected, "{variant:?} {xor:?}");
                }
            }
        }
    };
}

kat_test!(salsa20_key1_iv0, KEY1, IV0, EXPECTED_KEY1_IV0);
kat_test!(salsa20_key0_iv1, KEY0, IV1, EXPECTED_KEY0_IV1);
kat_test!(salsa20_key0_ivhi, KEY0, IVHI, EXPECTED_KEY0_IVHI);
kat_test!(salsa20_long, KEY_LONG, IV_LONG, EXPECTED_LONG);

#[test]
fn salsa20_with_every_permutation() {
    fn keystream<
        C: KeyIvInit<KeySize = cipher::consts::U32, IvSize = cipher::consts::U8> + StreamCipher,
    >() -> [u8; 256] {
        let mut cipher = C::new(&KEY_LONG.into(), &IV_LONG.into());
        let mut buf = [0; 256];
        cipher.apply_keystream(&mut buf);
        buf
    }

    assert_eq!(keystream::<Salsa20With<Transposed>>(), EXPECTED_LONG);
    assert_eq!(keystream::<Salsa20With<Indexed>>(), EXPECTED_LONG);
    assert_eq!(keystream::<Salsa20With<LaneTransposed>>(), EXPECTED_LONG);
    assert_eq!(keystream::<Salsa20With<LaneShuffled>>(), EXPECTED_LONG);
    assert_eq!(keystream::<Salsa20With<Variant>>(), EXPECTED_LONG);
}

#[test]
fn salsa20_split_offsets() {
    for idx in (0..256).step_by(7) {
        for middle in (idx..256).step_by(5) {
            let mut cipher = Salsa20::new(&KEY_LONG.into(), &IV_LONG.into());
            let mut buf = [0; 256];

            cipher.seek(idx as u64);
            cipher.apply_keystream(&mut buf[idx..middle]);
            cipher.apply_keystream(&mut buf[middle..]);

            assert_eq!(buf[idx..], EXPECTED_LONG[idx..]);
        }
    }
}

#[test]
#[ignore]
fn salsa20_offsets() {
    for idx in 0..256 {
        for middle in idx..256 {
            for last in middle..256 {
                let mut cipher = Salsa20::new(&KEY_LONG.into(), &IV_LONG.into());
                let mut buf = [0; 256];

                cipher.seek(idx as u64);
                cipher.apply_keystream(&mut buf[idx..middle]);
                cipher.apply_keystream(&mut buf[middle..last]);

                for k in idx..last {
                    assert_eq!(buf[k], EXPECTED_LONG[k])
                }
            }
        }
    }
}

#[test]
fn stream_offsets_match_seek() {
    let stream = Stream::from_bytes(&KEY_LONG.into(), &IV_LONG.into(), Variant::LaneShuffled)
        .with_xor(XorStrategy::Grouped);

    for offset in 0..256 {
        let mut buf = [0; 256];
        stream.apply_keystream(offset as u64, &mut buf[offset..]);
        assert_eq!(buf[offset..], EXPECTED_LONG[offset..], "offset {offset}");
    }
}
