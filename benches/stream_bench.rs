//! Benchmark for lazy streams against the eager slice helpers.
//!
//! Measures pipeline draining with an exact size hint (map only) and with
//! the hint lost to a filter stage.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use pho::slice;
use pho::stream::{self, Source};
use std::hint::black_box;

// =============================================================================
// Map Benchmarks
// =============================================================================

fn benchmark_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("map");

    for size in [100, 1_000, 10_000] {
        let data: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("stream", size), &data, |bencher, data| {
            bencher.iter(|| black_box(stream::slice(data).map(|n| n * 2).collect()));
        });

        group.bench_with_input(BenchmarkId::new("eager", size), &data, |bencher, data| {
            bencher.iter(|| black_box(slice::map(data, |n| n * 2)));
        });
    }

    group.finish();
}

// =============================================================================
// Filter + Map Benchmarks
// =============================================================================

fn benchmark_filter_map(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("filter_map");

    for size in [100, 1_000, 10_000] {
        let data: Vec<i64> = (0..size).collect();

        group.bench_with_input(BenchmarkId::new("stream", size), &data, |bencher, data| {
            bencher.iter(|| {
                black_box(
                    stream::slice(data)
                        .filter(|n| n % 3 == 0)
                        .map(|n| n.to_string())
                        .collect(),
                )
            });
        });

        // Builds the intermediate vector the stream avoids.
        group.bench_with_input(BenchmarkId::new("eager", size), &data, |bencher, data| {
            bencher.iter(|| {
                let filtered = slice::filter(data, |n| n % 3 == 0);
                black_box(slice::map(&filtered, |n| n.to_string()))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, benchmark_map, benchmark_filter_map);
criterion_main!(benches);
