use criterion::{criterion_group, criterion_main, Criterion};
use grid_wavefront::{GridModel, Point, WaveSearchEngine};
use rand::{rngs::StdRng, Rng, SeedableRng};
use std::hint::black_box;

fn open_grid(n: usize) -> GridModel {
    GridModel::from_parts(
        n,
        n,
        &[],
        Point::new(0, 0),
        Point::new(n as i32 - 1, n as i32 - 1),
    )
    .unwrap()
}

fn scattered_grid(n: usize, seed: u64) -> GridModel {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut obstacles = Vec::new();
    for y in 0..n as i32 {
        for x in 0..n as i32 {
            if rng.gen_bool(0.25) {
                obstacles.push(Point::new(x, y));
            }
        }
    }
    GridModel::from_parts(
        n,
        n,
        &obstacles,
        Point::new(0, 0),
        Point::new(n as i32 - 1, n as i32 - 1),
    )
    .unwrap()
}

fn wavefront_bench(c: &mut Criterion) {
    let mut engine = WaveSearchEngine::new();
    for n in [16usize, 64, 128] {
        let grid = open_grid(n);
        c.bench_function(format!("open {n}x{n}").as_str(), |b| {
            b.iter(|| black_box(engine.shortest_path(&grid).unwrap()))
        });
    }
    for n in [64usize, 128] {
        let grid = scattered_grid(n, 0);
        c.bench_function(format!("scattered {n}x{n}").as_str(), |b| {
            b.iter(|| black_box(engine.shortest_path(&grid).unwrap()))
        });
    }
}

criterion_group!(benches, wavefront_bench);
criterion_main!(benches);
