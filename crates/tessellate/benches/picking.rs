mod common;

use std::hint::black_box;

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion};
use glam::Vec2;
use tessellate::tiling::{GridConfig, TessellationGrid, TilingKind};

const POINTS_PER_AXIS: usize = 64;
const EXTENT: f32 = 2048.0;

/// Regular sweep of pointer positions across a square window centered on the origin.
fn sweep() -> Vec<Vec2> {
    let step = EXTENT / POINTS_PER_AXIS as f32;
    let half = EXTENT * 0.5;
    (0..POINTS_PER_AXIS)
        .flat_map(|j| {
            (0..POINTS_PER_AXIS).map(move |i| {
                Vec2::new(
                    -half + (i as f32 + 0.37) * step,
                    -half + (j as f32 + 0.61) * step,
                )
            })
        })
        .collect()
}

fn picking_benches(c: &mut Criterion) {
    let points = sweep();
    let mut group = c.benchmark_group("picking/pixel_to_logical");
    group.throughput(common::elements_throughput(points.len()));

    for kind in TilingKind::ALL {
        let grid = TessellationGrid::new(GridConfig::for_kind(kind));
        group.bench_with_input(BenchmarkId::from_parameter(kind), &grid, |b, grid| {
            b.iter(|| {
                for &p in &points {
                    black_box(grid.pixel_to_logical(black_box(p)));
                }
            });
        });
    }

    group.finish();
}

fn drawing_benches(c: &mut Criterion) {
    let mut group = c.benchmark_group("picking/logical_to_pixel");
    let n = POINTS_PER_AXIS as i32;
    group.throughput(common::elements_throughput((n * n) as usize));

    for kind in TilingKind::ALL {
        let grid = TessellationGrid::new(GridConfig::for_kind(kind));
        group.bench_with_input(BenchmarkId::from_parameter(kind), &grid, |b, grid| {
            b.iter(|| {
                for r in -n / 2..n / 2 {
                    for q in -n / 2..n / 2 {
                        black_box(grid.logical_to_pixel(q, r));
                    }
                }
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = common::default_criterion();
    targets = picking_benches, drawing_benches
}
criterion_main!(benches);
