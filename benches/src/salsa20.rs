//! Salsa20 benchmark
use benches::{Benchmarker, CONFIGURATIONS, criterion_group_bench};
use criterion::{BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main};

use salsa20_variants::{
    CONFORMANCE_INPUT, Permutation, Salsa20, Stream, Variant,
    cipher::{KeyIvInit, StreamCipher},
};

const KB: usize = 1024;

fn bench_core(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("salsa20-core");
    group.throughput(Throughput::Bytes(64));

    for variant in Variant::ALL {
        group.bench_function(BenchmarkId::new("permute", format!("{variant:?}")), |b| {
            let mut input = CONFORMANCE_INPUT;
            b.iter(|| {
                input = variant.permute(black_box(&input));
            });
        });
    }

    group.finish();
}

fn bench_crypt(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("salsa20-crypt");

    for size in &[KB, 4 * KB, 16 * KB] {
        let input = vec![0u8; *size];
        let mut output = vec![0u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        for (name, variant, xor) in CONFIGURATIONS {
            group.bench_function(BenchmarkId::new(name, size), |b| {
                let stream = Stream::new([0x42; 8], 0x24, variant).with_xor(xor);
                b.iter(|| stream.crypt(&input, &mut output));
            });
        }
    }

    group.finish();
}

fn bench_salsa20(c: &mut Benchmarker) {
    let mut group = c.benchmark_group("salsa20-stream-cipher");

    for size in &[KB, 2 * KB, 4 * KB, 8 * KB, 16 * KB] {
        let mut buf = vec![0u8; *size];

        group.throughput(Throughput::Bytes(*size as u64));

        group.bench_function(BenchmarkId::new("apply_keystream", size), |b| {
            let key = Default::default();
            let nonce = Default::default();
            let mut cipher = Salsa20::new(&key, &nonce);
            b.iter(|| cipher.apply_keystream(&mut buf));
        });
    }

    group.finish();
}

criterion_group_bench!(benches_salsa20, bench_core, bench_crypt, bench_salsa20);

criterion_main!(benches_salsa20);
