// Copyright 2025 the Vicinity Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

#![cfg(feature = "compare_rstar")]

use criterion::{BatchSize, Criterion, Throughput, black_box, criterion_group, criterion_main};
use vicinity_geom::Pt;
use vicinity_index::{Point, PointIndex};

use rstar::RTree;

fn gen_grid_points(n: usize, cell: f64) -> Vec<Pt> {
    let mut out = Vec::with_capacity(n * n);
    for y in 0..n {
        for x in 0..n {
            // Offset odd rows so no two points tie on both axes.
            let jitter = if y % 2 == 0 { 0.0 } else { cell * 0.5 };
            out.push(Pt::new(x as f64 * cell + jitter, y as f64 * cell));
        }
    }
    out
}

fn to_rstar_points(v: &[Pt]) -> Vec<[f64; 2]> {
    v.iter().map(|p| [p.x(), p.y()]).collect()
}

fn bench_nearest_external_compare(c: &mut Criterion) {
    let mut group = c.benchmark_group("nearest_external_compare");
    for &n in &[64usize, 128, 256] {
        let points = gen_grid_points(n, 10.0);
        let queries: Vec<Pt> = (0..256)
            .map(|i| Pt::new((i * 37 % (n * 10)) as f64 + 3.3, (i * 91 % (n * 10)) as f64 + 1.7))
            .collect();
        group.throughput(Throughput::Elements(queries.len() as u64));

        let index = PointIndex::build(points.iter().copied()).unwrap();
        group.bench_function(format!("vicinity_query_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(index.nearest(q).unwrap());
                }
            })
        });

        let tree = RTree::bulk_load(to_rstar_points(&points));
        group.bench_function(format!("rstar_query_n{}", n), |b| {
            b.iter(|| {
                for q in &queries {
                    black_box(tree.nearest_neighbor(&[q.x(), q.y()]));
                }
            })
        });

        group.bench_function(format!("vicinity_build_n{}", n), |b| {
            b.iter_batched(
                || points.clone(),
                |pts| black_box(PointIndex::build(pts).unwrap().height()),
                BatchSize::SmallInput,
            )
        });

        group.bench_function(format!("rstar_build_n{}", n), |b| {
            b.iter_batched(
                || to_rstar_points(&points),
                |pts| black_box(RTree::bulk_load(pts).size()),
                BatchSize::SmallInput,
            )
        });
    }
    group.finish();
}

criterion_group!(benches, bench_nearest_external_compare);
criterion_main!(benches);
