//! Core types for the GA engine.

use super::genome::Genome;
use thiserror::Error;

/// Caller-supplied fitness oracle.
///
/// Must be total over every genome of the configured length and should
/// return non-negative values: fitness-proportionate selection normalizes
/// by the population total, which is undefined for non-positive totals
/// (see [`GaError::DegenerateFitness`]). Higher is better. Panics raised
/// by the callback propagate to the engine's caller unmodified.
pub type FitnessFn = Box<dyn Fn(&Genome) -> f64 + Send + Sync>;

/// Errors produced by the GA engine.
#[derive(Debug, Error)]
pub enum GaError {
    /// The configuration failed validation at construction.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Total population fitness is not strictly positive, so normalized
    /// selection probabilities are undefined.
    #[error("total population fitness is not strictly positive; selection probabilities are undefined")]
    DegenerateFitness,
}

/// Absolute-fitness statistics of one generation.
///
/// Returned by [`GaEngine::evaluate`](super::GaEngine::evaluate) and
/// [`GaEngine::next_generation`](super::GaEngine::next_generation); in the
/// latter case the statistics describe the population *before* it was
/// replaced by the offspring.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GenerationStats {
    /// Maximum absolute fitness in the population.
    pub best: f64,

    /// Minimum absolute fitness in the population.
    pub worst: f64,

    /// Mean absolute fitness across the population.
    pub mean: f64,

    /// Set-bit count of the best-fitness genome.
    pub best_ones: usize,
}
