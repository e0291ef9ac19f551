//! Benchmarks for the sponge engine.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use seshat_core::keccak::{permute, sha3_256, shake256_xof, STATE_SIZE};

fn permutation_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("keccak-f1600");
    group.throughput(Throughput::Bytes(STATE_SIZE as u64));

    group.bench_function("permute", |b| {
        let mut state = [0x5au8; STATE_SIZE];
        b.iter(|| permute(black_box(&mut state)))
    });

    group.finish();
}

fn sha3_256_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("SHA3-256");

    for size in [32, 256, 1024, 4096, 16384].iter() {
        let input = vec![0u8; *size];
        group.throughput(Throughput::Bytes(*size as u64));
        group.bench_with_input(BenchmarkId::from_parameter(size), size, |b, _| {
            b.iter(|| sha3_256(black_box(&input)))
        });
    }

    group.finish();
}

fn shake256_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("SHAKE256");

    let input = vec![0u8; 1024];
    for output_size in [32, 136, 512, 2048].iter() {
        group.throughput(Throughput::Bytes(*output_size as u64));
        group.bench_with_input(
            BenchmarkId::new("squeeze", output_size),
            output_size,
            |b, &size| b.iter(|| shake256_xof(black_box(&input), size)),
        );
    }

    group.finish();
}

criterion_group!(
    benches,
    permutation_benchmark,
    sha3_256_benchmark,
    shake256_benchmark
);
criterion_main!(benches);
