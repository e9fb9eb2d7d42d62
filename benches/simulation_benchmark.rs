/*
 * Simulation Benchmark
 *
 * Measures the two costs that grow with the population: the brute-force
 * pairwise collision scan and a complete tick (collisions plus integration).
 */

use analog_root::collision::detect_collisions;
use analog_root::{Simulation, SimulationParams};
use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

const CANVAS_WIDTH: f32 = 1280.0;
const CANVAS_HEIGHT: f32 = 720.0;

fn simulation_with(num_particles: usize) -> (Simulation, SimulationParams) {
    let params = SimulationParams {
        num_particles,
        ..Default::default()
    };
    let simulation = Simulation::new(&params, CANVAS_WIDTH, CANVAS_HEIGHT, StdRng::seed_from_u64(1))
        .expect("default parameters are valid");
    (simulation, params)
}

// Benchmark the pairwise collision scan on its own
fn bench_collision_scan(c: &mut Criterion) {
    let mut group = c.benchmark_group("collision_scan");

    for num_particles in [50, 150, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_particles), num_particles, |b, &n| {
            let (simulation, params) = simulation_with(n);
            b.iter(|| detect_collisions(black_box(simulation.particles()), params.collision_radius));
        });
    }

    group.finish();
}

// Benchmark a full tick with the pointer in the middle of the canvas
fn bench_tick(c: &mut Criterion) {
    let mut group = c.benchmark_group("tick");
    let pointer = Some(pt2(CANVAS_WIDTH / 2.0, CANVAS_HEIGHT / 2.0));

    for num_particles in [50, 150, 500, 1000].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(num_particles), num_particles, |b, &n| {
            let (mut simulation, params) = simulation_with(n);
            b.iter(|| black_box(simulation.tick(&params, pointer)));
        });
    }

    group.finish();
}

// Configure the benchmarks
criterion_group! {
    name = benches;
    config = Criterion::default()
        .sample_size(10)
        .measurement_time(Duration::from_secs(5))
        .warm_up_time(Duration::from_secs(1));
    targets = bench_collision_scan, bench_tick
}

criterion_main!(benches);
