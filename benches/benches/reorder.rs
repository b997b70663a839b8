// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{
    BatchSize, BenchmarkId, Criterion, Throughput, black_box, criterion_group, criterion_main,
};
use understory_reorder::{ContainerRegistry, HoverTarget, ReorderCoordinator, resolve};

/// Two columns splitting `len` items evenly.
fn columns(len: u32) -> [(u8, Vec<u32>); 2] {
    let half = len / 2;
    [(0, (0..half).collect()), (1, (half..len).collect())]
}

fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/resolve");

    // Resolution runs on every pointer move; it should stay linear in the item count.
    for len in [64_u32, 512, 4_096] {
        let registry = ContainerRegistry::from_containers(columns(len)).unwrap();
        let active = 0;
        let hover = HoverTarget::Item(len - 1);
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("worst_case_item", len), &registry, |b, r| {
            b.iter(|| black_box(resolve(r, &active, &hover)));
        });
    }

    group.finish();
}

fn bench_drag_session(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/session");

    // A full gesture: start, sweep the pointer across the other column, release.
    for len in [64_u32, 512, 4_096] {
        let registry = ContainerRegistry::from_containers(columns(len)).unwrap();
        let half = len / 2;
        let sweep: Vec<HoverTarget<u8, u32>> = (half..len).map(HoverTarget::Item).collect();
        group.throughput(Throughput::Elements(sweep.len() as u64));

        group.bench_with_input(BenchmarkId::new("cross_sweep", len), &sweep, |b, sweep| {
            b.iter_batched(
                || ReorderCoordinator::new(registry.clone()),
                |mut board| {
                    board.start(0).unwrap();
                    for hover in sweep {
                        black_box(board.drag_over(hover.clone()));
                    }
                    black_box(board.end(HoverTarget::Container(1)));
                    board
                },
                BatchSize::LargeInput,
            );
        });
    }

    group.finish();
}

fn bench_construction(c: &mut Criterion) {
    let mut group = c.benchmark_group("reorder/from_containers");

    // Hypothesis: scanning validation is O(n^2), hashed validation is O(n).
    for len in [128_u32, 1_024, 8_192] {
        group.throughput(Throughput::Elements(u64::from(len)));

        group.bench_with_input(BenchmarkId::new("scanning", len), &len, |b, &len| {
            b.iter(|| black_box(ContainerRegistry::from_containers(columns(len))));
        });

        group.bench_with_input(BenchmarkId::new("hashed", len), &len, |b, &len| {
            b.iter(|| black_box(ContainerRegistry::from_containers_hashed(columns(len))));
        });
    }

    group.finish();
}

criterion_group!(
    benches,
    bench_resolve,
    bench_drag_session,
    bench_construction
);
criterion_main!(benches);
