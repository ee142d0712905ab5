//! Converter benchmarks - encode/decode throughput.
//!
//! These benchmarks measure record encode and decode throughput for the
//! byte and text converters, and compare the staged emission path against
//! direct in-place writes.

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};

use strata_codec::{
    BinaryConverter, BufferPool, RawBytesConverter, Staging, Utf8Converter, RECORD_HEADER_SIZE,
};
use strata_core::{DestView, SrcView};

const SIZES: [usize; 5] = [64, 1024, 10_240, 102_400, 1_048_576];

fn bench_bytes_encode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes_encode");
    let converter = RawBytesConverter;

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let value = vec![0xABu8; size];
        let mut region = vec![0u8; RECORD_HEADER_SIZE + size];

        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| {
                let written = converter
                    .write_to(black_box(value), &mut DestView::new(&mut region), None)
                    .unwrap();
                black_box(written)
            });
        });
    }
    group.finish();
}

fn bench_bytes_decode(c: &mut Criterion) {
    let mut group = c.benchmark_group("bytes_decode");
    let converter = RawBytesConverter;

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let value = vec![0xABu8; size];
        let mut region = vec![0u8; RECORD_HEADER_SIZE + size];
        converter
            .write_to(&value, &mut DestView::new(&mut region), None)
            .unwrap();

        group.bench_with_input(BenchmarkId::from_parameter(size), &region, |b, region| {
            b.iter(|| {
                let decoded = converter.read_from(&mut SrcView::new(black_box(region))).unwrap();
                black_box(decoded)
            });
        });
    }
    group.finish();
}

fn bench_text_direct(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_direct");
    let converter = Utf8Converter;

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let value = "x".repeat(size);
        let mut region = vec![0u8; RECORD_HEADER_SIZE + size];

        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| {
                let written = converter
                    .write_to(black_box(value), &mut DestView::new(&mut region), None)
                    .unwrap();
                black_box(written)
            });
        });
    }
    group.finish();
}

fn bench_text_staged(c: &mut Criterion) {
    let mut group = c.benchmark_group("text_staged");
    let converter = Utf8Converter;
    let pool = BufferPool::new();

    for size in SIZES {
        group.throughput(Throughput::Bytes(size as u64));
        let value = "x".repeat(size);
        let mut region = vec![0u8; RECORD_HEADER_SIZE + size];

        group.bench_with_input(BenchmarkId::from_parameter(size), &value, |b, value| {
            b.iter(|| {
                let mut staging = Staging::new(&pool);
                let size = converter
                    .size_of(black_box(value), Some(&mut staging))
                    .unwrap();
                let written = converter
                    .write_to(value, &mut DestView::new(&mut region), Some(&staging))
                    .unwrap();
                black_box((size, written))
            });
        });
    }
    group.finish();
}

criterion_group!(
    benches,
    bench_bytes_encode,
    bench_bytes_decode,
    bench_text_direct,
    bench_text_staged
);
criterion_main!(benches);
