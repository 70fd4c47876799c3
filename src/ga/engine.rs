//! The generational GA loop.

use super::config::GaConfig;
use super::genome::Genome;
use super::types::{FitnessFn, GaError, GenerationStats};
use super::variation::{local_search, CrossoverScheme};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Genetic-algorithm engine over a population of bit-vector genomes.
///
/// The engine owns its population, its fitness/selection arrays, and its
/// random stream; two engines never share random state. One call to
/// [`next_generation`](Self::next_generation) advances the loop by a single
/// generation; the engine never terminates on its own.
///
/// # Usage
///
/// ```
/// use evoswarm::ga::{GaConfig, GaEngine};
///
/// let config = GaConfig::new(8).with_population_size(10).with_seed(42);
/// let mut engine = GaEngine::new(
///     config,
///     Box::new(|g| g.count_ones() as f64),
/// ).unwrap();
///
/// for _ in 0..50 {
///     let stats = engine.next_generation().unwrap();
///     if stats.best as usize == 8 {
///         break;
///     }
/// }
/// ```
pub struct GaEngine {
    config: GaConfig,
    population: Vec<Genome>,
    fitness: Vec<f64>,
    norm_fitness: Vec<f64>,
    cum_fitness: Vec<f64>,
    evaluated: bool,
    fitness_fn: FitnessFn,
    rng: StdRng,
}

impl GaEngine {
    /// Creates an engine with a freshly sampled random population.
    ///
    /// Each genome's bits are drawn uniformly at random from the engine's
    /// seeded stream, so construction is deterministic given the seed.
    ///
    /// # Errors
    /// Returns [`GaError::InvalidConfig`] if the configuration fails
    /// [`GaConfig::validate`].
    pub fn new(config: GaConfig, fitness_fn: FitnessFn) -> Result<Self, GaError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let population: Vec<Genome> = (0..config.population_size)
            .map(|_| Genome::random(config.genome_length, &mut rng))
            .collect();

        let n = config.population_size;
        Ok(Self {
            config,
            population,
            fitness: vec![0.0; n],
            norm_fitness: vec![0.0; n],
            cum_fitness: vec![0.0; n],
            evaluated: false,
            fitness_fn,
            rng,
        })
    }

    /// Replaces the population with a freshly sampled random one.
    ///
    /// Draws from the engine's existing stream; any prior evaluation state
    /// is discarded.
    pub fn respawn(&mut self) {
        self.population = (0..self.config.population_size)
            .map(|_| Genome::random(self.config.genome_length, &mut self.rng))
            .collect();
        self.evaluated = false;
    }

    /// Evaluates the current population and rebuilds the selection arrays.
    ///
    /// Computes absolute fitness per genome, normalized fitness (value
    /// divided by the population total), and cumulative fitness (prefix sum
    /// of normalized values; non-decreasing, final entry 1.0 up to floating
    /// rounding). Consumes no random draws.
    ///
    /// # Errors
    /// Returns [`GaError::DegenerateFitness`] when the population total is
    /// not strictly positive (zero, negative, or NaN): normalization would
    /// divide by zero and roulette selection would be undefined.
    pub fn evaluate(&mut self) -> Result<GenerationStats, GaError> {
        #[cfg(feature = "parallel")]
        let fitness: Vec<f64> = {
            use rayon::prelude::*;
            self.population
                .par_iter()
                .map(|g| (self.fitness_fn)(g))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let fitness: Vec<f64> = self.population.iter().map(|g| (self.fitness_fn)(g)).collect();

        let total: f64 = fitness.iter().sum();
        if !(total > 0.0) {
            return Err(GaError::DegenerateFitness);
        }

        let mut best = f64::NEG_INFINITY;
        let mut worst = f64::INFINITY;
        let mut best_idx = 0;
        for (i, &f) in fitness.iter().enumerate() {
            if f > best {
                best = f;
                best_idx = i;
            }
            if f < worst {
                worst = f;
            }
        }

        self.norm_fitness.clear();
        self.cum_fitness.clear();
        let mut running = 0.0;
        for &f in &fitness {
            let norm = f / total;
            running += norm;
            self.norm_fitness.push(norm);
            self.cum_fitness.push(running);
        }
        self.fitness = fitness;
        self.evaluated = true;

        Ok(GenerationStats {
            best,
            worst,
            mean: total / self.config.population_size as f64,
            best_ones: self.population[best_idx].count_ones(),
        })
    }

    /// Roulette-wheel selection: index of the first genome whose cumulative
    /// fitness is `>= u`, for a uniform draw `u` in `[0, 1)`.
    ///
    /// Never returns an index whose cumulative fitness is below `u`; the
    /// clamp to the last index only fires when rounding leaves the final
    /// cumulative entry fractionally short of 1.0.
    ///
    /// # Panics
    /// Panics if [`evaluate`](Self::evaluate) has not run since the
    /// population last changed.
    pub fn select(&self, u: f64) -> usize {
        assert!(
            self.evaluated,
            "evaluate() must run before select() on the current population"
        );
        let idx = self.cum_fitness.partition_point(|&c| c < u);
        idx.min(self.config.population_size - 1) // floating-point fallback
    }

    /// Advances the engine by one generation.
    ///
    /// Evaluates the current population, then builds `population_size / 2`
    /// offspring pairs: two uniform draws pick parents via [`select`]
    /// (fitness-proportionate), one more draw against the crossover rate
    /// decides between crossover and verbatim copies, and the scheme's
    /// mutation (plus local search under
    /// [`CrossoverScheme::AlternatingLocus`]) completes each pair. The
    /// population is then replaced wholesale.
    ///
    /// The returned statistics describe the population *before* the
    /// replacement.
    ///
    /// # Errors
    /// Propagates [`GaError::DegenerateFitness`] from the evaluation pass;
    /// the population is left unchanged in that case.
    pub fn next_generation(&mut self) -> Result<GenerationStats, GaError> {
        let stats = self.evaluate()?;

        let n = self.config.population_size;
        let mut next = Vec::with_capacity(n);
        for _ in 0..n / 2 {
            let u_a = self.rng.random_range(0.0..1.0);
            let u_b = self.rng.random_range(0.0..1.0);
            let idx_a = self.select(u_a);
            let idx_b = self.select(u_b);

            let (mut child_a, mut child_b) =
                if self.rng.random_range(0.0..1.0) < self.config.crossover_rate {
                    self.config.crossover.crossover(
                        &self.population[idx_a],
                        &self.population[idx_b],
                        &mut self.rng,
                    )
                } else {
                    (
                        self.population[idx_a].clone(),
                        self.population[idx_b].clone(),
                    )
                };

            self.config.crossover.mutate_pair(
                &mut child_a,
                &mut child_b,
                self.config.mutation_rate,
                &mut self.rng,
            );
            if self.config.crossover == CrossoverScheme::AlternatingLocus {
                child_a = local_search(
                    &child_a,
                    self.config.local_search_trials,
                    &self.fitness_fn,
                    &mut self.rng,
                );
                child_b = local_search(
                    &child_b,
                    self.config.local_search_trials,
                    &self.fitness_fn,
                    &mut self.rng,
                );
            }

            next.push(child_a);
            next.push(child_b);
        }

        self.population = next;
        self.evaluated = false;

        log::debug!(
            "generation replaced: best={:.4} worst={:.4} mean={:.4} best_ones={}",
            stats.best,
            stats.worst,
            stats.mean,
            stats.best_ones
        );
        Ok(stats)
    }

    /// Replaces the fitness oracle.
    ///
    /// Existing state is not re-evaluated; the next [`evaluate`] or
    /// [`next_generation`] call uses the new oracle.
    pub fn set_fitness_fn(&mut self, fitness_fn: FitnessFn) {
        self.fitness_fn = fitness_fn;
        self.evaluated = false;
    }

    /// The current population.
    pub fn population(&self) -> &[Genome] {
        &self.population
    }

    /// Genome length (loci per genome).
    pub fn genome_length(&self) -> usize {
        self.config.genome_length
    }

    /// Population size.
    pub fn population_size(&self) -> usize {
        self.config.population_size
    }

    /// Absolute fitness per genome from the last [`evaluate`](Self::evaluate).
    pub fn fitness(&self) -> &[f64] {
        &self.fitness
    }

    /// Normalized fitness (fraction of the population total) per genome
    /// from the last [`evaluate`](Self::evaluate).
    pub fn norm_fitness(&self) -> &[f64] {
        &self.norm_fitness
    }

    /// Cumulative fitness per genome from the last [`evaluate`](Self::evaluate).
    pub fn cum_fitness(&self) -> &[f64] {
        &self.cum_fitness
    }
}
