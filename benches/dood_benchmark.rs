/*
 * Dood Simulation Benchmark
 *
 * Measures the per-tick cost of moving every dood and of recording the
 * draw commands, for a range of swarm sizes.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use std::time::Duration;

use doods::{CommandRecorder, Game, SimulationParams, Viewport};

fn game_with(beasts: usize, viewport: Viewport) -> Game {
    let params = SimulationParams {
        queen_count: 20,
        beast_count: beasts,
        seed: Some(1),
        ..Default::default()
    };
    let mut game = Game::new(params).expect("valid benchmark parameters");
    game.init(viewport);
    game
}

// Benchmark the movement rule over the whole swarm
fn bench_iterate(c: &mut Criterion) {
    let mut group = c.benchmark_group("iterate");
    let viewport = Viewport::new(1000.0, 800.0);

    for num_beasts in [500, 1500, 1900, 5000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_beasts), num_beasts, |b, &n| {
            let mut game = game_with(n, viewport);
            b.iter(|| game.iterate(black_box(viewport)));
        });
    }

    group.finish();
}

// Benchmark recording a frame's draw commands
fn bench_draw(c: &mut Criterion) {
    let mut group = c.benchmark_group("draw");
    let viewport = Viewport::new(1000.0, 800.0);

    for num_beasts in [500, 1500, 1900, 5000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_beasts), num_beasts, |b, &n| {
            let game = game_with(n, viewport);
            let mut surface = CommandRecorder::new();
            b.iter(|| {
                surface.clear();
                black_box(game.draw(viewport, &mut surface))
            });
        });
    }

    group.finish();
}

criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_iterate, bench_draw
}
criterion_main!(benches);
