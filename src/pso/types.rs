//! Core types for the PSO engine.

use thiserror::Error;

/// Caller-supplied fitness oracle over position vectors.
///
/// Must be total over R^d for the configured dimensionality (positions may
/// drift outside the initialization bounds). Higher is better. Panics
/// raised by the callback propagate to the engine's caller unmodified.
pub type FitnessFn = Box<dyn Fn(&[f64]) -> f64 + Send + Sync>;

/// Errors produced by the PSO engine.
#[derive(Debug, Error)]
pub enum PsoError {
    /// The configuration failed validation at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// One member of the swarm.
///
/// Position and velocity mutate in place each iteration; `best_fitness` is
/// seeded by the construction-time evaluation pass and never decreases
/// afterwards (a strictly better current fitness overwrites it together
/// with `best_position`).
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Particle {
    /// Current position in R^d.
    pub position: Vec<f64>,

    /// Current velocity in R^d.
    pub velocity: Vec<f64>,

    /// Fitness of the current position, from the last evaluation pass.
    pub fitness: f64,

    /// Best position this particle has ever occupied.
    pub best_position: Vec<f64>,

    /// Fitness at `best_position`. Non-decreasing once evaluated.
    pub best_fitness: f64,
}
