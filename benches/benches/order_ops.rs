// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use std::cmp::Reverse;
use std::collections::BinaryHeap;

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vicinity_order::{KeyedPriorityQueue, OrderedMultiset, PriorityQueue};

#[derive(Clone)]
struct Rng(u64);

impl Rng {
    fn new(seed: u64) -> Self {
        Self(seed)
    }
    fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }
}

fn gen_keys(count: usize, modulo: u64, seed: u64) -> Vec<u64> {
    let mut rng = Rng::new(seed);
    (0..count).map(|_| rng.next_u64() % modulo).collect()
}

fn bench_multiset(c: &mut Criterion) {
    let mut group = c.benchmark_group("multiset");
    for &n in &[1_000usize, 10_000, 100_000] {
        let keys = gen_keys(n, n as u64 / 4 + 1, 0xCAFE_F00D_DEAD_BEEF);
        group.throughput(Throughput::Elements(n as u64));
        group.bench_function(format!("insert_n{}", n), |b| {
            b.iter_batched(
                || keys.clone(),
                |keys| black_box(keys.into_iter().collect::<OrderedMultiset<_>>().height()),
                BatchSize::LargeInput,
            )
        });
        let set: OrderedMultiset<u64> = keys.iter().copied().collect();
        group.bench_function(format!("rank_n{}", n), |b| {
            b.iter(|| {
                let mut acc = 0;
                for k in &keys {
                    acc += set.rank(k);
                }
                black_box(acc)
            })
        });
        group.bench_function(format!("delete_all_n{}", n), |b| {
            b.iter_batched(
                || set_clone(&keys),
                |mut set| {
                    for k in &keys {
                        set.delete(k);
                    }
                    black_box(set.is_empty())
                },
                BatchSize::LargeInput,
            )
        });
    }
    group.finish();
}

fn set_clone(keys: &[u64]) -> OrderedMultiset<u64> {
    keys.iter().copied().collect()
}

fn bench_queues(c: &mut Criterion) {
    let mut group = c.benchmark_group("queue_drain");
    let keys = gen_keys(20_000, 1 << 20, 0xBADC_F00D_1234_5678);
    group.throughput(Throughput::Elements(keys.len() as u64));
    group.bench_function("priority_queue", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut q: PriorityQueue<u64> = keys.into_iter().collect();
                while let Some(k) = q.deq() {
                    black_box(k);
                }
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("std_binary_heap", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                let mut q: BinaryHeap<Reverse<u64>> = keys.into_iter().map(Reverse).collect();
                while let Some(Reverse(k)) = q.pop() {
                    black_box(k);
                }
            },
            BatchSize::LargeInput,
        )
    });
    group.bench_function("keyed_with_updates", |b| {
        b.iter_batched(
            || keys.clone(),
            |keys| {
                // Value is an id; its key is looked up in `keys`.
                let mut q = KeyedPriorityQueue::new(|id: &usize| keys[*id]);
                for id in 0..keys.len() {
                    q.enq(id);
                }
                for id in (0..keys.len()).step_by(7) {
                    q.update(id);
                }
                while let Some(id) = q.deq() {
                    black_box(id);
                }
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

criterion_group!(benches, bench_multiset, bench_queues);
criterion_main!(benches);
