//! Grow array benchmarks using Criterion.
//!
//! Benchmarks cover:
//! - Amortized append from small and pre-sized buffers
//! - Buffer reuse across iterations (reset + refill)
//! - Shifting insertion and removal near the head
//! - Sorting random data

use criterion::{BenchmarkId, Criterion, Throughput, criterion_group, criterion_main};
use modelkit::prelude::*;
use rand::prelude::*;
use std::hint::black_box;

// ============================================================================
// Data Generation with Reproducible RNG
// ============================================================================

/// Generate uniformly distributed values in `[0, 1)`.
fn generate_values(size: usize, seed: u64) -> Vec<f64> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..size).map(|_| rng.random::<f64>()).collect()
}

// ============================================================================
// Benchmarks
// ============================================================================

fn bench_push(c: &mut Criterion) {
    let mut group = c.benchmark_group("push");

    for size in [1_000, 10_000, 100_000] {
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("grow_from_default", size), &size, |b, &n| {
            b.iter(|| {
                let mut array = GrowArrayI32::new();
                for i in 0..n {
                    array.push(black_box(i as i32));
                }
                array
            })
        });

        group.bench_with_input(BenchmarkId::new("reuse_buffer", size), &size, |b, &n| {
            let mut array = GrowArrayI32::with_capacity(n);
            b.iter(|| {
                array.reset();
                for i in 0..n {
                    array.push(black_box(i as i32));
                }
                array.len()
            })
        });
    }

    group.finish();
}

fn bench_shift(c: &mut Criterion) {
    let mut group = c.benchmark_group("shift");

    for size in [1_000, 10_000] {
        let base = GrowArrayI32::from_iter(0..size as i32);

        group.bench_with_input(BenchmarkId::new("insert_remove_head", size), &base, |b, base| {
            let mut array = base.copy();
            b.iter(|| {
                array.insert(0, black_box(-1)).ok();
                array.remove(0).ok()
            })
        });
    }

    group.finish();
}

fn bench_sort(c: &mut Criterion) {
    let mut group = c.benchmark_group("sort");

    for size in [1_000, 100_000] {
        let values = GrowArrayF64::from(generate_values(size, 42));
        group.throughput(Throughput::Elements(size as u64));

        group.bench_with_input(BenchmarkId::new("f64_random", size), &values, |b, values| {
            let mut scratch = GrowArrayF64::with_capacity(values.len());
            b.iter(|| {
                scratch.set_to(values);
                scratch.sort();
                scratch.get_fraction(0.5).ok()
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_push, bench_shift, bench_sort);
criterion_main!(benches);
