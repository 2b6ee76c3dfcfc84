//! Four 32-bit lanes in one 128-bit register.
//!
//! The lane-vectorized permutations are written against [`U32x4`]; which
//! implementation backs it is decided at compile time.

use cfg_if::cfg_if;

cfg_if! {
    if #[cfg(all(
        any(target_arch = "x86", target_arch = "x86_64"),
        target_feature = "sse2",
        not(salsa20_force_soft),
    ))] {
        mod sse2;
        #[cfg(test)]
        mod soft;
        pub(crate) use sse2::U32x4;
    } else {
        mod soft;
        pub(crate) use soft::U32x4;
    }
}
