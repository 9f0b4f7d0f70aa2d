/*
 * Particle Field Benchmark
 *
 * Measures the per-frame cost of the field. The edge pass is quadratic
 * in the particle count, so the step is measured at the default count
 * and a few larger ones to show how quickly it grows.
 */

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use nannou::prelude::*;
use particle_field::{DrawList, FieldParams, ParticleField, SurfaceSize};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

fn field_with(count: usize) -> ParticleField {
    let mut rng = StdRng::seed_from_u64(count as u64);
    let params = FieldParams {
        particle_count: count,
        ..FieldParams::default()
    };
    let mut field = ParticleField::seed(SurfaceSize::new(1920.0, 1080.0), params, &mut rng);
    field.pointer_moved(vec2(960.0, 540.0));
    field
}

// Benchmark the edge pass alone
fn bench_edge_pass(c: &mut Criterion) {
    let mut group = c.benchmark_group("edge_pass");

    for count in [80, 160, 320].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let field = field_with(n);
            let mut list = DrawList::new();

            b.iter(|| {
                list.reset();
                black_box(field.edge_pass(&mut list));
            });
        });
    }

    group.finish();
}

// Benchmark a full frame: clear, edges, particles
fn bench_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("step");

    for count in [80, 160, 320].iter() {
        group.bench_with_input(BenchmarkId::from_parameter(count), count, |b, &n| {
            let mut field = field_with(n);
            let mut list = DrawList::new();

            b.iter(|| black_box(field.step(&mut list)));
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
    targets = bench_edge_pass, bench_step
}

criterion_main!(benches);
