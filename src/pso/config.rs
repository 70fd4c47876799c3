//! PSO configuration.
//!
//! [`PsoConfig`] holds all parameters of the iteration loop.

use super::topology::Topology;
use super::types::PsoError;

/// Configuration for the particle swarm optimizer.
///
/// # Defaults
///
/// ```
/// use evoswarm::pso::{PsoConfig, Topology};
///
/// let config = PsoConfig::new(vec![(-5.0, 5.0), (-5.0, 5.0)]);
/// assert_eq!(config.num_particles, 30);
/// assert_eq!(config.topology, Topology::Global);
/// ```
///
/// # Builder Pattern
///
/// ```
/// use evoswarm::pso::{PsoConfig, Topology};
///
/// let config = PsoConfig::new(vec![(-5.0, 5.0), (-5.0, 5.0)])
///     .with_num_particles(20)
///     .with_v_max(2.0)
///     .with_inertia(0.5)
///     .with_cognitive(1.5)
///     .with_social(1.5)
///     .with_topology(Topology::Ring { radius: 1 })
///     .with_seed(7);
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PsoConfig {
    /// Per-dimension `(min, max)` initialization bounds, fixed for the
    /// swarm's lifetime. The dimensionality of the search space is
    /// `bounds.len()`.
    ///
    /// Bounds constrain initial positions only; velocity updates may carry
    /// positions outside them and no clamping is applied afterwards.
    pub bounds: Vec<(f64, f64)>,

    /// Number of particles in the swarm.
    pub num_particles: usize,

    /// Speed limit: when a velocity update produces a vector whose
    /// Euclidean magnitude exceeds `v_max`, the whole vector is rescaled
    /// to magnitude exactly `v_max` (direction preserved).
    pub v_max: f64,

    /// Inertia weight: the particle's tendency to continue its trajectory.
    pub inertia: f64,

    /// Cognitive coefficient: pull toward the particle's personal best.
    pub cognitive: f64,

    /// Social coefficient: pull toward the swarm/neighborhood attractor.
    pub social: f64,

    /// Attraction topology.
    pub topology: Topology,

    /// Whether the live cognitive coefficient is multiplied by the fixed
    /// factor 0.95 after every position update, monotonically shrinking
    /// the exploration pull over time.
    pub decay_cognitive: bool,

    /// Random seed for reproducibility.
    ///
    /// `None` uses a random seed.
    pub seed: Option<u64>,
}

impl PsoConfig {
    /// Creates a configuration for the given bounds with default parameters
    /// (30 particles, v_max 1.0, inertia 0.7, cognitive/social 1.5, global
    /// topology, no decay, random seed).
    pub fn new(bounds: Vec<(f64, f64)>) -> Self {
        Self {
            bounds,
            num_particles: 30,
            v_max: 1.0,
            inertia: 0.7,
            cognitive: 1.5,
            social: 1.5,
            topology: Topology::default(),
            decay_cognitive: false,
            seed: None,
        }
    }

    /// Sets the swarm size.
    pub fn with_num_particles(mut self, n: usize) -> Self {
        self.num_particles = n;
        self
    }

    /// Sets the speed limit.
    pub fn with_v_max(mut self, v_max: f64) -> Self {
        self.v_max = v_max;
        self
    }

    /// Sets the inertia weight.
    pub fn with_inertia(mut self, inertia: f64) -> Self {
        self.inertia = inertia;
        self
    }

    /// Sets the cognitive coefficient.
    pub fn with_cognitive(mut self, cognitive: f64) -> Self {
        self.cognitive = cognitive;
        self
    }

    /// Sets the social coefficient.
    pub fn with_social(mut self, social: f64) -> Self {
        self.social = social;
        self
    }

    /// Sets the attraction topology.
    pub fn with_topology(mut self, topology: Topology) -> Self {
        self.topology = topology;
        self
    }

    /// Enables or disables cognitive-coefficient decay.
    pub fn with_decay_cognitive(mut self, decay: bool) -> Self {
        self.decay_cognitive = decay;
        self
    }

    /// Sets the random seed for reproducibility.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Validates the configuration.
    ///
    /// Called by [`PsoEngine::new`](super::PsoEngine::new); engines fail
    /// fast rather than construct in a partially-initialized state.
    pub fn validate(&self) -> Result<(), PsoError> {
        if self.bounds.is_empty() {
            return Err(PsoError::InvalidConfig("bounds must be non-empty".into()));
        }
        for (d, &(min, max)) in self.bounds.iter().enumerate() {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(PsoError::InvalidConfig(format!(
                    "bounds[{d}] must satisfy finite min < max, got ({min}, {max})"
                )));
            }
        }
        if self.num_particles == 0 {
            return Err(PsoError::InvalidConfig(
                "num_particles must be at least 1".into(),
            ));
        }
        if !(self.v_max > 0.0) {
            return Err(PsoError::InvalidConfig(
                "v_max must be strictly positive".into(),
            ));
        }
        for (name, value) in [
            ("inertia", self.inertia),
            ("cognitive", self.cognitive),
            ("social", self.social),
        ] {
            if !value.is_finite() || value < 0.0 {
                return Err(PsoError::InvalidConfig(format!(
                    "{name} must be finite and non-negative, got {value}"
                )));
            }
        }
        if let Topology::Ring { radius } = self.topology {
            if radius >= self.num_particles {
                return Err(PsoError::InvalidConfig(format!(
                    "ring radius {radius} must be smaller than the swarm size {}",
                    self.num_particles
                )));
            }
        }
        Ok(())
    }
}
