//! Criterion benchmarks for the evoswarm engines.
//!
//! Uses synthetic oracles (OneMax for the GA, the negated sphere function
//! for PSO) to measure pure engine overhead independent of any domain.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use evoswarm::ga::{CrossoverScheme, GaConfig, GaEngine};
use evoswarm::pso::{PsoConfig, PsoEngine, Topology};

fn bench_ga_generation(c: &mut Criterion) {
    let mut group = c.benchmark_group("ga_next_generation");
    for &length in &[32usize, 128, 512] {
        group.bench_with_input(BenchmarkId::from_parameter(length), &length, |b, &length| {
            let config = GaConfig::new(length)
                .with_population_size(100)
                .with_seed(42);
            let mut engine =
                GaEngine::new(config, Box::new(|g| g.count_ones() as f64 + 1.0)).unwrap();
            b.iter(|| black_box(engine.next_generation().unwrap()));
        });
    }
    group.finish();
}

fn bench_ga_alternating_locus(c: &mut Criterion) {
    c.bench_function("ga_alternating_locus_generation", |b| {
        let config = GaConfig::new(64)
            .with_population_size(50)
            .with_crossover(CrossoverScheme::AlternatingLocus)
            .with_seed(42);
        let mut engine =
            GaEngine::new(config, Box::new(|g| g.count_ones() as f64 + 1.0)).unwrap();
        b.iter(|| black_box(engine.next_generation().unwrap()));
    });
}

fn bench_pso_step(c: &mut Criterion) {
    let mut group = c.benchmark_group("pso_step");
    for &dim in &[2usize, 10, 50] {
        group.bench_with_input(BenchmarkId::from_parameter(dim), &dim, |b, &dim| {
            let config = PsoConfig::new(vec![(-5.0, 5.0); dim])
                .with_num_particles(50)
                .with_v_max(2.0)
                .with_seed(7);
            let mut engine = PsoEngine::new(
                config,
                Box::new(|x| -x.iter().map(|v| v * v).sum::<f64>()),
            )
            .unwrap();
            b.iter(|| black_box(engine.step()));
        });
    }
    group.finish();
}

fn bench_pso_ring_topology(c: &mut Criterion) {
    c.bench_function("pso_ring_step", |b| {
        let config = PsoConfig::new(vec![(-5.0, 5.0); 10])
            .with_num_particles(50)
            .with_v_max(2.0)
            .with_topology(Topology::Ring { radius: 2 })
            .with_seed(7);
        let mut engine = PsoEngine::new(
            config,
            Box::new(|x| -x.iter().map(|v| v * v).sum::<f64>()),
        )
        .unwrap();
        b.iter(|| black_box(engine.step()));
    });
}

criterion_group!(
    benches,
    bench_ga_generation,
    bench_ga_alternating_locus,
    bench_pso_step,
    bench_pso_ring_topology
);
criterion_main!(benches);
