//! Sphere minimization with the PSO engine, recast as maximization of
//! -||x||^2 over [-5, 5]^2.
//!
//! Run with `cargo run --example sphere`.

use evoswarm::pso::{PsoConfig, PsoEngine};

fn main() {
    let config = PsoConfig::new(vec![(-5.0, 5.0), (-5.0, 5.0)])
        .with_num_particles(20)
        .with_v_max(2.0)
        .with_inertia(0.5)
        .with_cognitive(1.5)
        .with_social(1.5)
        .with_seed(7);
    let mut engine = PsoEngine::new(
        config,
        Box::new(|x| -x.iter().map(|v| v * v).sum::<f64>()),
    )
    .expect("valid configuration");

    for iteration in 0..100 {
        let best = engine.step();
        if iteration % 10 == 0 {
            let mean = engine.mean_position();
            println!(
                "iter {iteration:>3}: best={best:>12.6} mean_pos=({:+.3}, {:+.3})",
                mean[0], mean[1]
            );
        }
    }

    let pos = engine.best_position();
    println!(
        "best fitness {:.6} at ({:+.6}, {:+.6})",
        engine.best_fitness(),
        pos[0],
        pos[1]
    );
}
