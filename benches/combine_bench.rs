//! Benchmark for the combining operations.
//!
//! Compares `sequence`, `traverse`, `zip` and `coalesce` with the standard
//! library equivalents to measure abstraction overhead.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use optionals::combinator::Chain;
use optionals::combine::{coalesce, sequence, traverse, zip3, zip10};
use std::hint::black_box;

// =============================================================================
// 1. sequence vs collect
// =============================================================================

fn benchmark_sequence_vs_collect(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("sequence_vs_collect");

    for size in [10, 100, 1000] {
        let options: Vec<Option<i32>> = (0..size).map(Some).collect();

        group.bench_with_input(BenchmarkId::new("sequence", size), &options, |bencher, options| {
            bencher.iter(|| black_box(sequence(options.iter().copied())));
        });

        group.bench_with_input(BenchmarkId::new("collect", size), &options, |bencher, options| {
            bencher.iter(|| black_box(options.iter().copied().collect::<Option<Vec<i32>>>()));
        });
    }

    group.finish();
}

// =============================================================================
// 2. traverse with early exit
// =============================================================================

fn benchmark_traverse_early_exit(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("traverse_early_exit");

    let size = 1000;
    for absent_at in [0, 500, 999] {
        let values: Vec<i32> = (0..size).collect();

        group.bench_with_input(
            BenchmarkId::new("traverse", absent_at),
            &absent_at,
            |bencher, &absent_at| {
                bencher.iter(|| {
                    black_box(traverse(values.iter(), |value| {
                        (*value != absent_at).then_some(value * 2)
                    }))
                });
            },
        );
    }

    group.finish();
}

// =============================================================================
// 3. zip
// =============================================================================

fn benchmark_zip(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("zip");

    group.bench_function("zip3", |bencher| {
        bencher.iter(|| black_box(zip3(black_box(Some(1)), black_box(Some(2)), black_box(Some(3)))));
    });

    group.bench_function("nested_std_zip3", |bencher| {
        bencher.iter(|| {
            black_box(
                black_box(Some(1))
                    .zip(black_box(Some(2)))
                    .zip(black_box(Some(3)))
                    .map(|((a, b), c)| (a, b, c)),
            )
        });
    });

    group.bench_function("zip10", |bencher| {
        bencher.iter(|| {
            black_box(zip10(
                black_box(Some(1)),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                Some(6),
                Some(7),
                Some(8),
                Some(9),
                black_box(Some(10)),
            ))
        });
    });

    group.finish();
}

// =============================================================================
// 4. coalesce and fallible chaining
// =============================================================================

fn benchmark_coalesce_and_chain(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("coalesce_and_chain");

    for length in [3, 10] {
        let mut options: Vec<Option<i32>> = vec![None; length];
        options[length - 1] = Some(42);

        group.bench_with_input(BenchmarkId::new("coalesce", length), &options, |bencher, options| {
            bencher.iter(|| black_box(coalesce(options.iter().copied())));
        });
    }

    group.bench_function("and_then_try", |bencher| {
        bencher.iter(|| black_box(black_box(Some("1234")).and_then_try(str::parse::<i32>)));
    });

    group.bench_function("and_then_ok", |bencher| {
        bencher.iter(|| black_box(black_box(Some("1234")).and_then(|text| text.parse::<i32>().ok())));
    });

    group.finish();
}

criterion_group!(
    benches,
    benchmark_sequence_vs_collect,
    benchmark_traverse_early_exit,
    benchmark_zip,
    benchmark_coalesce_and_chain
);

criterion_main!(benches);
