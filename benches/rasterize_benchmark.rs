#![allow(clippy::expect_used, clippy::unwrap_used, missing_docs)]
//! Benchmark for line rasterization.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use line_raster::prelude::*;

fn rasterize_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("rasterize");

    for length in [10, 100, 1_000, 10_000, 100_000] {
        let start = Point::new(0, 0);
        let end = Point::new(length, length / 3);

        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
            b.iter(|| rasterize(black_box(start), black_box(end)));
        });
    }

    group.finish();
}

fn octant_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("octants");

    // Forward and reversed walks per octant; reversed ones run the back cursor.
    let deltas = [(1000, 370), (370, 1000), (-370, 1000), (-1000, 370)];
    for (dx, dy) in deltas {
        let a = Point::new(0, 0);
        let b = Point::new(dx, dy);
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("forward_{dx}_{dy}")),
            &(a, b),
            |bench, &(a, b)| bench.iter(|| rasterize(black_box(a), black_box(b))),
        );
        group.bench_with_input(
            BenchmarkId::from_parameter(format!("reversed_{dx}_{dy}")),
            &(b, a),
            |bench, &(a, b)| bench.iter(|| rasterize(black_box(a), black_box(b))),
        );
    }

    group.finish();
}

fn lazy_iter_benchmark(c: &mut Criterion) {
    let mut group = c.benchmark_group("line_iter");

    for length in [1_000, 100_000] {
        let start = Point::new(-length, 7);
        let end = Point::new(length, -length / 5);

        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, _| {
            b.iter(|| {
                LineIter::new(black_box(start), black_box(end))
                    .fold(0i64, |acc, p| acc + i64::from(p.x ^ p.y))
            });
        });
    }

    group.finish();
}

criterion_group!(benches, rasterize_benchmark, octant_benchmark, lazy_iter_benchmark);
criterion_main!(benches);
