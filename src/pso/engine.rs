//! The PSO iteration loop.

use super::config::PsoConfig;
use super::topology::{ring_window, Topology};
use super::types::{FitnessFn, Particle, PsoError};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Fixed per-iteration shrink factor applied to the cognitive coefficient
/// when [`PsoConfig::decay_cognitive`] is enabled.
const COGNITIVE_DECAY: f64 = 0.95;

/// Particle-swarm engine over a bounded continuous space.
///
/// The engine owns its swarm and its random stream; two engines never share
/// random state. The constructor runs one evaluation pass to seed personal
/// and global bests; afterwards each iteration is
/// [`update_velocity`](Self::update_velocity) →
/// [`update_position`](Self::update_position) →
/// [`evaluate`](Self::evaluate), or one [`step`](Self::step) call. The
/// engine never terminates on its own.
///
/// Bounds constrain initial positions only: velocity updates may carry
/// positions outside them and no clamping is applied.
///
/// # Usage
///
/// ```
/// use evoswarm::pso::{PsoConfig, PsoEngine};
///
/// let config = PsoConfig::new(vec![(-5.0, 5.0), (-5.0, 5.0)])
///     .with_num_particles(20)
///     .with_v_max(2.0)
///     .with_seed(7);
/// // Sphere minimization recast as maximization of -||x||^2.
/// let mut engine = PsoEngine::new(
///     config,
///     Box::new(|x| -x.iter().map(|v| v * v).sum::<f64>()),
/// ).unwrap();
///
/// for _ in 0..100 {
///     engine.step();
/// }
/// assert!(engine.best_fitness() <= 0.0);
/// ```
pub struct PsoEngine {
    config: PsoConfig,
    dim: usize,
    swarm: Vec<Particle>,
    /// Live cognitive coefficient; shrinks under `decay_cognitive`.
    cognitive: f64,
    /// Live inertia weight; settable for external annealing schedules.
    inertia: f64,
    best_fitness: f64,
    best_position: Vec<f64>,
    best_index: usize,
    /// Per-particle index of the best ring neighbor (ring topology only).
    local_best: Vec<usize>,
    fitness_fn: FitnessFn,
    rng: StdRng,
}

impl PsoEngine {
    /// Creates an engine with a freshly sampled swarm and seeds the bests
    /// with one evaluation pass.
    ///
    /// Positions are drawn uniformly within the per-dimension bounds;
    /// velocities uniformly in `[0, 1)` per dimension, uncorrelated with
    /// bounds or `v_max` (preserved from the reference formulation). Draws
    /// run particle by particle, position dimensions then velocity
    /// dimensions, so construction is deterministic given the seed.
    ///
    /// # Errors
    /// Returns [`PsoError::InvalidConfig`] if the configuration fails
    /// [`PsoConfig::validate`].
    pub fn new(config: PsoConfig, fitness_fn: FitnessFn) -> Result<Self, PsoError> {
        config.validate()?;

        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::seed_from_u64(rand::random()),
        };
        let dim = config.bounds.len();
        let swarm: Vec<Particle> = (0..config.num_particles)
            .map(|_| {
                let position: Vec<f64> = config
                    .bounds
                    .iter()
                    .map(|&(min, max)| rng.random_range(min..max))
                    .collect();
                let velocity: Vec<f64> = (0..dim).map(|_| rng.random_range(0.0..1.0)).collect();
                Particle {
                    best_position: position.clone(),
                    position,
                    velocity,
                    fitness: f64::NEG_INFINITY,
                    best_fitness: f64::NEG_INFINITY,
                }
            })
            .collect();

        let local_best = match config.topology {
            Topology::Ring { .. } => (0..config.num_particles).collect(),
            Topology::Global => Vec::new(),
        };

        let mut engine = Self {
            dim,
            swarm,
            cognitive: config.cognitive,
            inertia: config.inertia,
            best_fitness: f64::NEG_INFINITY,
            best_position: vec![0.0; dim],
            best_index: 0,
            local_best,
            fitness_fn,
            rng,
            config,
        };
        engine.evaluate();
        Ok(engine)
    }

    /// Evaluates every particle's current position and updates the bests.
    ///
    /// Per particle: a strictly greater current fitness overwrites the
    /// personal best (position and fitness), then the global best
    /// (position, fitness, and owning index). Under ring topology the
    /// local-best indices are recomputed afterwards from *current*
    /// fitness. Consumes no random draws.
    pub fn evaluate(&mut self) {
        #[cfg(feature = "parallel")]
        let fitness: Vec<f64> = {
            use rayon::prelude::*;
            self.swarm
                .par_iter()
                .map(|p| (self.fitness_fn)(&p.position))
                .collect()
        };
        #[cfg(not(feature = "parallel"))]
        let fitness: Vec<f64> = self
            .swarm
            .iter()
            .map(|p| (self.fitness_fn)(&p.position))
            .collect();

        for (i, f) in fitness.into_iter().enumerate() {
            let particle = &mut self.swarm[i];
            particle.fitness = f;
            if f > particle.best_fitness {
                particle.best_fitness = f;
                particle.best_position.copy_from_slice(&particle.position);
            }
            if f > self.best_fitness {
                self.best_fitness = f;
                self.best_position.copy_from_slice(&particle.position);
                self.best_index = i;
            }
        }
        if matches!(self.config.topology, Topology::Ring { .. }) {
            self.set_local_best();
        }
    }

    /// Recomputes each particle's local-best neighbor index (ring topology).
    ///
    /// For particle `i`, scans the circular window `i-radius ..= i+radius`
    /// and keeps the index with the greatest *current* fitness, overwriting
    /// the stored index only on strict improvement. Live fitness — not
    /// personal best — drives this comparison, unlike the global variant.
    ///
    /// No-op under [`Topology::Global`].
    pub fn set_local_best(&mut self) {
        let Topology::Ring { radius } = self.config.topology else {
            return;
        };
        let n = self.swarm.len();
        for i in 0..n {
            for j in ring_window(i, radius, n) {
                if self.swarm[j].fitness > self.swarm[self.local_best[i]].fitness {
                    self.local_best[i] = j;
                }
            }
        }
    }

    /// Updates every particle's velocity.
    ///
    /// Per particle, two scalar uniform draws `r1` and `r2` are taken (once
    /// per particle, not per dimension), then per dimension:
    ///
    /// ```text
    /// v = inertia·v + cognitive·r1·(pbest − x) + social·r2·(attractor − x)
    /// ```
    ///
    /// The attractor is the global-best position under [`Topology::Global`]
    /// or the local-best neighbor's *current* position under
    /// [`Topology::Ring`]. A new velocity whose Euclidean magnitude exceeds
    /// `v_max` is rescaled to magnitude exactly `v_max`.
    pub fn update_velocity(&mut self) {
        for i in 0..self.swarm.len() {
            let r1 = self.rng.random_range(0.0..1.0);
            let r2 = self.rng.random_range(0.0..1.0);
            let attractor = match self.config.topology {
                Topology::Global => self.best_position.clone(),
                Topology::Ring { .. } => self.swarm[self.local_best[i]].position.clone(),
            };

            let particle = &mut self.swarm[i];
            for d in 0..self.dim {
                particle.velocity[d] = self.inertia * particle.velocity[d]
                    + self.cognitive * r1 * (particle.best_position[d] - particle.position[d])
                    + self.config.social * r2 * (attractor[d] - particle.position[d]);
            }

            let magnitude = particle
                .velocity
                .iter()
                .map(|v| v * v)
                .sum::<f64>()
                .sqrt();
            if magnitude > self.config.v_max {
                let scale = self.config.v_max / magnitude;
                for v in &mut particle.velocity {
                    *v *= scale;
                }
            }
        }
    }

    /// Moves every particle by its velocity, elementwise, without bound
    /// clamping. Applies the cognitive-coefficient decay if configured.
    pub fn update_position(&mut self) {
        for particle in &mut self.swarm {
            for d in 0..self.dim {
                particle.position[d] += particle.velocity[d];
            }
        }
        if self.config.decay_cognitive {
            self.cognitive *= COGNITIVE_DECAY;
        }
    }

    /// One full iteration: velocity update, position update, evaluation.
    ///
    /// Returns the global-best fitness after the evaluation pass.
    pub fn step(&mut self) -> f64 {
        self.update_velocity();
        self.update_position();
        self.evaluate();
        log::debug!(
            "iteration complete: best_fitness={:.6} best_index={}",
            self.best_fitness,
            self.best_index
        );
        self.best_fitness
    }

    /// Best fitness found by any particle so far.
    pub fn best_fitness(&self) -> f64 {
        self.best_fitness
    }

    /// Position at which [`best_fitness`](Self::best_fitness) was found.
    pub fn best_position(&self) -> &[f64] {
        &self.best_position
    }

    /// Index of the particle that owns the global best.
    pub fn best_index(&self) -> usize {
        self.best_index
    }

    /// Componentwise mean position across the swarm.
    pub fn mean_position(&self) -> Vec<f64> {
        let mut mean = vec![0.0; self.dim];
        for particle in &self.swarm {
            for d in 0..self.dim {
                mean[d] += particle.position[d];
            }
        }
        let n = self.swarm.len() as f64;
        for m in &mut mean {
            *m /= n;
        }
        mean
    }

    /// Current inertia weight.
    pub fn inertia(&self) -> f64 {
        self.inertia
    }

    /// Sets the inertia weight, allowing external annealing schedules.
    pub fn set_inertia(&mut self, inertia: f64) {
        self.inertia = inertia;
    }

    /// Current (possibly decayed) cognitive coefficient.
    pub fn cognitive(&self) -> f64 {
        self.cognitive
    }

    /// The swarm; exposed for inspection and visualization collaborators.
    pub fn particles(&self) -> &[Particle] {
        &self.swarm
    }

    /// Per-dimension initialization bounds.
    pub fn bounds(&self) -> &[(f64, f64)] {
        &self.config.bounds
    }

    /// Per-particle local-best indices (empty under global topology).
    pub fn local_best(&self) -> &[usize] {
        &self.local_best
    }

    /// Dimensionality of the search space.
    pub fn dimension(&self) -> usize {
        self.dim
    }
}
