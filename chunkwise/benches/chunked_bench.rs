// Copyright 2025 Umberto Gotti <umberto.gotti@umbertogotti.dev>
// Licensed under the Apache License, Version 2.0
// http://www.apache.org/licenses/LICENSE-2.0

use chunkwise::{chunked, chunked_strict};
use criterion::{BenchmarkId, Criterion, Throughput};
use std::hint::black_box;

fn make_payload(size: usize, payload_size: usize) -> Vec<Vec<u8>> {
    (0..size).map(|i| vec![i as u8; payload_size]).collect()
}

pub fn bench_chunked(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunked");
    let sizes = [100usize, 1000usize, 10000];
    let chunk_sizes = [1usize, 8usize, 64usize];

    for &size in &sizes {
        for &chunk_size in &chunk_sizes {
            let id = BenchmarkId::from_parameter(format!("m{size}_n{chunk_size}"));
            group.throughput(Throughput::Elements(size as u64));
            group.bench_with_input(id, &(size, chunk_size), |bencher, &(size, chunk_size)| {
                bencher.iter_with_setup(
                    || make_payload(size, 16),
                    |items| {
                        if let Ok(chunks) = chunked(items, Some(chunk_size)) {
                            for chunk in chunks {
                                black_box(chunk);
                            }
                        }
                    },
                );
            });
        }
    }

    group.finish();
}

pub fn bench_chunked_strict(c: &mut Criterion) {
    let mut group = c.benchmark_group("chunked_strict");
    let sizes = [96usize, 960usize, 9600];
    let chunk_size = 8usize;

    for &size in &sizes {
        let id = BenchmarkId::from_parameter(format!("m{size}_n{chunk_size}"));
        group.throughput(Throughput::Elements(size as u64));
        group.bench_with_input(id, &size, |bencher, &size| {
            bencher.iter_with_setup(
                || make_payload(size, 16),
                |items| {
                    if let Ok(chunks) = chunked_strict(items, Some(chunk_size)) {
                        for chunk in chunks {
                            let _ = black_box(chunk);
                        }
                    }
                },
            );
        });
    }

    group.finish();
}
