//! Criterion micro-benchmarks for construct, copy, move, and swap.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use valbuf::buffer::ValueBuffer;
use valbuf_bench::{profile_buffer, PROFILE_LENGTHS};

/// Benchmark: construct from a slice (allocate + copy in).
fn bench_construct(c: &mut Criterion) {
    let mut group = c.benchmark_group("construct");
    for &len in &PROFILE_LENGTHS {
        let values: Vec<f32> = profile_buffer(len).as_slice().to_vec();
        group.throughput(Throughput::Bytes((len * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &values, |b, values| {
            b.iter(|| ValueBuffer::from_slice(black_box(values)));
        });
    }
    group.finish();
}

/// Benchmark: deep copy via `clone`.
fn bench_clone(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone");
    for &len in &PROFILE_LENGTHS {
        let source = profile_buffer(len);
        group.throughput(Throughput::Bytes((len * 4) as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &source, |b, source| {
            b.iter(|| black_box(source).clone());
        });
    }
    group.finish();
}

/// Benchmark: copy-assign via `clone_from` (copy-and-swap).
fn bench_clone_from(c: &mut Criterion) {
    let mut group = c.benchmark_group("clone_from");
    for &len in &PROFILE_LENGTHS {
        let source = profile_buffer(len);
        let mut target = profile_buffer(len);
        group.throughput(Throughput::Bytes((len * 4) as u64));
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| target.clone_from(black_box(&source)));
        });
    }
    group.finish();
}

/// Benchmark: move out and back. Should be flat across lengths.
fn bench_take(c: &mut Criterion) {
    let mut group = c.benchmark_group("take");
    for &len in &PROFILE_LENGTHS {
        let mut buffer = profile_buffer(len);
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| {
                let moved = black_box(&mut buffer).take();
                buffer = black_box(moved);
            });
        });
    }
    group.finish();
}

/// Benchmark: swap two buffers. Should be flat across lengths.
fn bench_swap(c: &mut Criterion) {
    let mut group = c.benchmark_group("swap");
    for &len in &PROFILE_LENGTHS {
        let mut a = profile_buffer(len);
        let mut b_buf = profile_buffer(len / 2);
        group.bench_function(BenchmarkId::from_parameter(len), |b| {
            b.iter(|| black_box(&mut a).swap(black_box(&mut b_buf)));
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_construct,
    bench_clone,
    bench_clone_from,
    bench_take,
    bench_swap
);
criterion_main!(benches);
