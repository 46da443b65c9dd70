//! Function decorator benchmarks.
//!
//! Measures the overhead of a cache hit in `memoize` and `once` against a
//! direct call of the wrapped function (baseline).

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;
use toolbelt::function::{memoize, once};

fn checksum(text: String) -> u64 {
    text.bytes().fold(0_u64, |hash, byte| {
        hash.wrapping_mul(31).wrapping_add(u64::from(byte))
    })
}

fn benchmark_memoize(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("memoize");
    let input = "the quick brown fox jumps over the lazy dog".repeat(8);

    group.bench_function("direct", |bencher| {
        bencher.iter(|| black_box(checksum(black_box(input.clone()))));
    });

    let cached = memoize(checksum);
    cached.call(input.clone());
    group.bench_function("cache_hit", |bencher| {
        bencher.iter(|| black_box(cached.call(black_box(input.clone()))));
    });

    group.bench_function("cache_miss", |bencher| {
        bencher.iter_batched(
            || memoize(checksum),
            |fresh| black_box(fresh.call(black_box(input.clone()))),
            criterion::BatchSize::SmallInput,
        );
    });

    group.finish();
}

fn benchmark_once(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("once");

    let initialized = once(|seed: u64| seed.wrapping_mul(6_364_136_223_846_793_005));
    initialized.call(1);
    group.bench_function("after_first_call", |bencher| {
        bencher.iter(|| black_box(initialized.call(black_box(2))));
    });

    group.finish();
}

criterion_group!(benches, benchmark_memoize, benchmark_once);

criterion_main!(benches);
