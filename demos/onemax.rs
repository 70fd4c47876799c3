//! OneMax with the GA engine: maximize the number of set bits.
//!
//! Run with `cargo run --example onemax`.

use evoswarm::ga::{GaConfig, GaEngine};

fn main() {
    let config = GaConfig::new(32)
        .with_population_size(50)
        .with_crossover_rate(0.7)
        .with_mutation_rate(0.01)
        .with_seed(42);
    let mut engine = GaEngine::new(config, Box::new(|g| g.count_ones() as f64))
        .expect("valid configuration");

    for generation in 0..200 {
        let stats = engine.next_generation().expect("one-max is non-degenerate");
        if generation % 10 == 0 {
            println!(
                "gen {generation:>3}: best={:>4.1} mean={:>6.3} worst={:>4.1}",
                stats.best, stats.mean, stats.worst
            );
        }
        if stats.best as usize == engine.genome_length() {
            println!("solved at generation {generation}: all {} bits set", stats.best_ones);
            return;
        }
    }
    println!("not solved within 200 generations");
}
