//! Genetic Algorithm engine over fixed-length bit-vector genomes.
//!
//! The engine maintains a population of [`Genome`]s and, each generation,
//! evaluates fitness, derives fitness-proportionate selection probabilities,
//! samples parent pairs, applies crossover and mutation, and replaces the
//! population wholesale.
//!
//! # Key Types
//!
//! - [`GaConfig`]: parameters (genome length, population size, rates, seed)
//! - [`CrossoverScheme`]: single-point crossover, or the alternating-locus
//!   variant that recombines even loci and resolves odd loci by local search
//! - [`GaEngine`]: owns the population and the random stream; drives the
//!   generational loop one [`next_generation`](GaEngine::next_generation)
//!   at a time
//! - [`GenerationStats`]: best/worst/mean fitness of a generation
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*

mod config;
mod engine;
mod genome;
mod types;
mod variation;

pub use config::GaConfig;
pub use engine::GaEngine;
pub use genome::Genome;
pub use types::{FitnessFn, GaError, GenerationStats};
pub use variation::CrossoverScheme;
