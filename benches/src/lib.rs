use criterion::Criterion;
use salsa20_variants::{Variant, XorStrategy};

#[cfg(any(target_arch = "x86_64", target_arch = "x86", all(target_arch = "aarch64", target_os = "linux")))]
pub type Benchmarker = Criterion<criterion_cycles_per_byte::CyclesPerByte>;
#[cfg(not(any(target_arch = "x86_64", target_arch = "x86", all(target_arch = "aarch64", target_os = "linux"))))]
pub type Benchmarker = Criterion;

/// Named (permutation, XOR) pairs measured by the keystream benchmarks.
pub const CONFIGURATIONS: [(&str, Variant, XorStrategy); 8] = [
    ("transposed/bytewise", Variant::Transposed, XorStrategy::Bytewise),
    ("indexed/bytewise", Variant::Indexed, XorStrategy::Bytewise),
    ("lane-transposed/bytewise", Variant::LaneTransposed, XorStrategy::Bytewise),
    ("lane-shuffled/bytewise", Variant::LaneShuffled, XorStrategy::Bytewise),
    ("transposed/grouped", Variant::Transposed, XorStrategy::Grouped),
    ("indexed/grouped", Variant::Indexed, XorStrategy::Grouped),
    ("lane-transposed/grouped", Variant::LaneTransposed, XorStrategy::Grouped),
    ("lane-shuffled/grouped", Variant::LaneShuffled, XorStrategy::Grouped),
];

#[macro_export]
macro_rules! criterion_group_bench {
    ($Name:ident, $($Target:ident),+ $(,)?) => {
        #[cfg(any(target_arch = "x86_64", target_arch = "x86", all(target_arch = "aarch64", target_os = "linux")))]
        criterion_group!(
            name = $Name;
            config = Criterion::default().with_measurement(criterion_cycles_per_byte::CyclesPerByte);
            targets = $($Target),+
        );
        #[cfg(not(any(target_arch = "x86_64", target_arch = "x86", all(target_arch = "aarch64", target_os = "linux"))))]
        criterion_group!(
            name = $Name;
            config = Criterion::default();
            targets = $($Target),+
        );
    }
}
