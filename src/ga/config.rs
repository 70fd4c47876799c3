//! GA configuration.
//!
//! [`GaConfig`] holds all parameters of the generational loop.

use super::types::GaError;
use super::variation::CrossoverScheme;

/// Configuration for the genetic algorithm.
///
/// # Defaults
///
/// ```
/// use evoswarm::ga::GaConfig;
///
/// let config = GaConfig::new(32);
/// assert_eq!(config.population_size, 100);
/// assert_eq!(config.local_search_trials, 20);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evoswarm::ga::{CrossoverScheme, GaConfig};
///
/// let config = GaConfig::new(8)
///     .with_population_size(10)
///     .with_crossover(CrossoverScheme::AlternatingLocus)
///     .with_crossover_rate(0.7)
///     .with_mutation_rate(0.01)
///     .with_seed(42);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GaConfig {
    /// Number of loci per genome. Fixed for the engine's lifetime.
    pub genome_length: usize,

    /// Number of genomes in the population.
    ///
    /// Must be even: offspring are produced in pairs and the population is
    /// replaced wholesale, so an odd size could not be preserved.
    pub population_size: usize,

    /// Probability of applying crossover to a selected parent pair (0.0–1.0).
    ///
    /// When crossover is not applied, both parents are copied verbatim
    /// (before mutation).
    pub crossover_rate: f64,

    /// Per-locus mutation probability (0.0–1.0).
    pub mutation_rate: f64,

    /// Crossover scheme, fixed at construction and never mixed within a run.
    pub crossover: CrossoverScheme,

    /// Local-search budget for [`CrossoverScheme::AlternatingLocus`]:
    /// number of random completions of the odd loci tried per offspring.
    ///
    /// Ignored under [`CrossoverScheme::SinglePoint`]. Zero keeps the
    /// offspring's odd loci as produced by crossover/copy.
    pub local_search_trials: usize,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl GaConfig {
    /// Creates a configuration for genomes of `genome_length` loci with
    /// default parameters (population 100, pc 0.7, pm 0.01, single-point
    /// crossover, 20 local-search trials, random seed).
    pub fn new(genome_length: usize) -> Self {
        Self {
            genome_length,
            population_size: 100,
            crossover_rate: 0.7,
            mutation_rate: 0.01,
            crossover: CrossoverScheme::default(),
            local_search_trials: 20,
            seed: None,
        }
    }

    /// Sets the population size.
    pub fn with_population_size(mut self, n: usize) -> Self {
        self.population_size = n;
        self
    }

    /// Sets the crossover rate.
    pub fn with_crossover_rate(mut self, rate: f64) -> Self {
        self.crossover_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the per-locus mutation rate.
    pub fn with_mutation_rate(mut self, rate: f64) -> Self {
        self.mutation_rate = rate.clamp(0.0, 1.0);
        self
    }

    /// Sets the crossover scheme.
    pub fn with_crossover(mut self, scheme: CrossoverScheme) -> Self {
        self.crossover = scheme;
        self
    }

    /// Sets the local-search budget for the alternating-locus scheme.
    pub fn with_local_search_trials(mut self, trials: usize) -> Self {
        self.local_search_trials = trials;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by [`GaEngine::new`](super::GaEngine::new); engines fail fast
    /// rather than construct in a partially-initialized state.
    pub fn validate(&self) -> Result<(), GaError> {
        if self.genome_length < 2 {
            return Err(GaError::InvalidConfig(
                "genome_length must be at least 2".into(),
            ));
        }
        if self.population_size < 2 {
            return Err(GaError::InvalidConfig(
                "population_size must be at least 2".into(),
            ));
        }
        if self.population_size % 2 != 0 {
            return Err(GaError::InvalidConfig(
                "population_size must be even (offspring are produced in pairs)".into(),
            ));
        }
        if self.crossover == CrossoverScheme::AlternatingLocus {
            if self.genome_length % 2 != 0 {
                return Err(GaError::InvalidConfig(
                    "alternating-locus crossover requires an even genome_length".into(),
                ));
            }
            if self.genome_length < 4 {
                return Err(GaError::InvalidConfig(
                    "alternating-locus crossover requires genome_length >= 4".into(),
                ));
            }
        }
        Ok(())
    }
}
