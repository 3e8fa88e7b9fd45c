use criterion::{BatchSize, Criterion, criterion_group, criterion_main};
use msdsort::prelude::*;
use rand::Rng;
use std::hint::black_box;

fn bench_random_u32(c: &mut Criterion) {
    let mut group = c.benchmark_group("Random u32 Sort");
    group.sample_size(10);

    // Dataset generation
    let mut rng = rand::rng();
    let count = 100_000;

    let random_keys: Vec<u32> = (0..count).map(|_| rng.random()).collect();

    // Msdsort
    group.bench_function("msd_sort (in-place)", |b| {
        b.iter_batched(
            || random_keys.clone(),
            |mut data| msd_sort_mut(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    // Std Sort (Stable)
    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || random_keys.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    // Std Sort Unstable
    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || random_keys.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

fn bench_clustered_prefixes(c: &mut Criterion) {
    let mut group = c.benchmark_group("Clustered Prefixes");
    group.sample_size(10);

    // Keys confined to a narrow range share their high bytes, so the sorter
    // spends its time in the deeper recursion levels.
    let mut rng = rand::rng();
    let count = 100_000;

    let input: Vec<u32> = (0..count).map(|_| rng.random_range(0..65_536)).collect();

    group.bench_function("msd_sort (in-place)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| msd_sort_mut(black_box(&mut data)),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort (stable)", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort(),
            BatchSize::SmallInput,
        )
    });

    group.bench_function("slice::sort_unstable", |b| {
        b.iter_batched(
            || input.clone(),
            |mut data| data.sort_unstable(),
            BatchSize::SmallInput,
        )
    });

    group.finish();
}

criterion_group!(benches, bench_random_u32, bench_clustered_prefixes);
criterion_main!(benches);
