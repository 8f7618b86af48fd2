//! Benchmark for JSON encoding and decoding of optional values.
//!
//! Compares the swallowing and propagating forms with direct `serde_json`
//! calls.

use criterion::{BenchmarkId, Criterion, criterion_group, criterion_main};
use optionals::structure::{Decode, Encode};
use std::hint::black_box;

fn benchmark_encode(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("codec_encode");

    for size in [10, 100, 1000] {
        let value: Option<Vec<i32>> = Some((0..size).collect());

        group.bench_with_input(BenchmarkId::new("encode", size), &value, |bencher, value| {
            bencher.iter(|| black_box(value.encode()));
        });

        group.bench_with_input(BenchmarkId::new("serde_json", size), &value, |bencher, value| {
            bencher.iter(|| black_box(value.as_ref().map(|inner| serde_json::to_vec(inner).ok())));
        });
    }

    group.finish();
}

fn benchmark_decode(criterion: &mut Criterion) {
    let mut group = criterion.benchmark_group("codec_decode");

    for size in [10, 100, 1000] {
        let values: Vec<i32> = (0..size).collect();
        let bytes = serde_json::to_vec(&values).unwrap();

        group.bench_with_input(BenchmarkId::new("decode", size), &bytes, |bencher, bytes| {
            bencher.iter(|| black_box(Some(bytes.as_slice()).decode::<Vec<i32>>()));
        });

        group.bench_with_input(BenchmarkId::new("decode_or_throw", size), &bytes, |bencher, bytes| {
            bencher.iter(|| black_box(Some(bytes.as_slice()).decode_or_throw::<Vec<i32>>().ok()));
        });
    }

    group.bench_function("decode_invalid", |bencher| {
        bencher.iter(|| black_box(Some(black_box(&b"[1,2,"[..])).decode::<Vec<i32>>()));
    });

    group.finish();
}

criterion_group!(benches, benchmark_encode, benchmark_decode);

criterion_main!(benches);
