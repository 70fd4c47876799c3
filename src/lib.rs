//! Population-based stochastic optimizers over black-box fitness oracles.
//!
//! Provides two independent maximization engines:
//!
//! - **Genetic Algorithm ([`ga`])**: fixed-length bit-vector genomes evolved
//!   by fitness-proportionate selection, single-point crossover (with an
//!   alternating-locus variant layering a stochastic local search on top),
//!   and per-locus mutation.
//! - **Particle Swarm Optimization ([`pso`])**: continuous vectors in a
//!   bounded real space, moved by inertia, a cognitive pull toward each
//!   particle's personal best, and a social pull toward a global or
//!   ring-neighborhood attractor.
//!
//! Both engines treat the caller-supplied fitness function as an opaque
//! oracle and are fully deterministic given a seed: each engine owns its own
//! pseudorandom stream, and the order of draws is fixed, so two engines
//! constructed with the same seed, parameters, and a deterministic oracle
//! produce bit-identical state sequences.
//!
//! Neither engine self-terminates; the caller drives the generation or
//! iteration loop and decides when to stop.
//!
//! # Architecture
//!
//! The two engines are parallel instantiations of the same abstract pattern
//! (population → evaluate → select/attract → vary → replace) but share no
//! code: each module carries its own configuration, error type, and
//! fitness-callback alias.
//!
//! # Features
//!
//! - `parallel`: evaluate fitness across the population/swarm with rayon.
//!   Only the pure fitness map is parallelized; every phase that consumes
//!   random draws stays sequential, so reproducibility is unaffected.
//! - `serde`: `Serialize`/`Deserialize` on configurations, genomes,
//!   particles, and statistics.
//!
//! # References
//!
//! - Holland (1975), *Adaptation in Natural and Artificial Systems*
//! - Goldberg (1989), *Genetic Algorithms in Search, Optimization, and Machine Learning*
//! - Kennedy & Eberhart (1995), *Particle Swarm Optimization*
//! - Shi & Eberhart (1998), *A Modified Particle Swarm Optimizer*

pub mod ga;
pub mod pso;
