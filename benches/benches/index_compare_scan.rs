// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vicinity_geom::Pt;
use vicinity_index::{Bound, BoundingBoxIndex, BuildOptions, PivotRule, Point, PointIndex};

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
    fn next_f64(&mut self) -> f64 {
        let v = self.next_u64() >> 11;
        (v as f64) / ((1u64 << 53) as f64)
    }
}

fn gen_random_points(count: usize, extent: f64, seed: u64) -> Vec<Pt> {
    let mut rng = Rng::new(seed);
    (0..count)
        .map(|_| Pt::new(rng.next_f64() * extent, rng.next_f64() * extent))
        .collect()
}

fn gen_clustered_points(n_clusters: usize, per_cluster: usize, spread: f64) -> Vec<Pt> {
    let mut out = Vec::with_capacity(n_clusters * per_cluster);
    let mut rng = Rng::new(0xC1A5_7E55_9999_ABCD);
    let mut centers = Vec::with_capacity(n_clusters);
    for _ in 0..n_clusters {
        centers.push((rng.next_f64() * 2000.0, rng.next_f64() * 2000.0));
    }
    for (cx, cy) in centers {
        for _ in 0..per_cluster {
            let dx = (rng.next_f64() - 0.5) * spread;
            let dy = (rng.next_f64() - 0.5) * spread;
            out.push(Pt::new(cx + dx, cy + dy));
        }
    }
    out
}

fn gen_grid_cells(n: usize, cell: f64) -> Vec<(Bound, u32)> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            let x0 = x as f64 * cell;
            let y0 = y as f64 * cell;
            // Shrink a little so neighbours never share an edge.
            let b = Bound::new(x0, y0, x0 + cell * 0.95, y0 + cell * 0.95);
            out.push((b, (y * n + x) as u32));
        }
    }
    out
}

fn brute_nearest<'a>(points: &'a [Pt], q: &Pt) -> Option<&'a Pt> {
    let mut best = None;
    let mut best_d = f64::INFINITY;
    for p in points {
        let d = q.distance(p).unwrap_or(f64::INFINITY);
        if d < best_d {
            best_d = d;
            best = Some(p);
        }
    }
    best
}

fn bench_nearest(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest");
    for &n in &[1_000usize, 10_000, 100_000] {
        let points = gen_random_points(n, 10_000.0, 0xCAFE_F00D_DEAD_BEEF);
        let queries = gen_random_points(256, 10_000.0, 0xFACE_FEED_CAFE_BABE);
        let index = PointIndex::build(points.iter().copied()).unwrap();
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("index_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(index.nearest(q).unwrap());
                }
            })
        });
        if n <= 10_000 {
            group.bench_function(format!("scan_n{}", n), |b| {
                b.iter(|| {
                    for q in &queries {
                        black_box(brute_nearest(&points, q));
                    }
                })
            });
        }
    }
    let points = gen_clustered_points(64, 256, 40.0);
    let queries = gen_random_points(256, 2_000.0, 0x1234_5678_9ABC_DEF0);
    let index = PointIndex::build(points.iter().copied()).unwrap();
    group.bench_function("index_clustered", |b| {
        b.iter(|| {
            for q in &queries {
                black_box(index.nearest(q).unwrap());
            }
        })
    });
    group.finish();
}

fn bench_point_build(c: &mut Criterion) {
    let mut group = c.benchmark_group("point_build");
    // Sorted input is the quadratic case for the last-element pivot.
    group.sample_size(10);
    let random = gen_random_points(10_000, 10_000.0, 0xBADC_F00D_1234_5678);
    let mut sorted = random.clone();
    sorted.sort_by(|a, b| a.x().total_cmp(&b.x()));
    group.throughput(Throughput::Elements(random.len() as u64));
    for (name, input) in [("random", &random), ("sorted_x", &sorted)] {
        for pivot in [PivotRule::Last, PivotRule::MedianOfThree] {
            group.bench_function(format!("bulk_{name}_{pivot:?}"), |b| {
                b.iter_batched(
                    || input.clone(),
                    |pts| {
                        let index = PointIndex::build_with(pts, BuildOptions { pivot }).unwrap();
                        black_box(index.height());
                    },
                    BatchSize::LargeInput,
                )
            });
        }
    }
    group.bench_function("insert_random", |b| {
        b.iter_batched(
            || random.clone(),
            |pts| {
                let mut index = PointIndex::new();
                index.insert_all(pts);
                black_box(index.height());
            },
            BatchSize::LargeInput,
        )
    });
    group.finish();
}

fn bench_find_shape(c: &mut Criterion) {
    let mut group = c.benchmark_group("find_shape");
    for &n in &[32usize, 64, 128] {
        let cells = gen_grid_cells(n, 10.0);
        let extent = n as f64 * 10.0;
        let queries = gen_random_points(256, extent, 0xDEAD_BEEF_0BAD_F00D);
        let index = BoundingBoxIndex::build(cells.iter().copied()).unwrap();
        group.throughput(Throughput::Elements(queries.len() as u64));
        group.bench_function(format!("index_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(index.find_shape(q));
                }
            })
        });
        group.bench_function(format!("scan_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(cells.iter().find(|(bound, _)| bound.contains(q)).map(|(_, v)| v));
                }
            })
        });
        group.bench_function(format!("build_n{}", n), |b| {
            b.iter_batched(
                || cells.clone(),
                |cells| black_box(BoundingBoxIndex::build(cells).unwrap().height()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest, bench_point_build, bench_find_shape);
criterion_main!(benches);
