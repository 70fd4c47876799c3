//! Particle Swarm Optimization engine over bounded continuous spaces.
//!
//! The engine maintains a swarm of [`Particle`]s; each iteration evaluates
//! fitness, updates personal and global (or ring-local) bests, and moves
//! every particle under inertia, a cognitive pull toward its own best-known
//! position, and a social pull toward the swarm's attractor.
//!
//! # Key Types
//!
//! - [`PsoConfig`]: bounds, swarm size, speed limit, coefficients, topology
//! - [`Topology`]: global-best or ring local-best attraction
//! - [`PsoEngine`]: owns the swarm and the random stream; one
//!   [`step`](PsoEngine::step) per iteration
//!
//! # References
//!
//! - Kennedy & Eberhart (1995), *Particle Swarm Optimization*
//! - Shi & Eberhart (1998), *A Modified Particle Swarm Optimizer*

mod config;
mod engine;
mod topology;
mod types;

pub use config::PsoConfig;
pub use engine::PsoEngine;
pub use topology::{ring_window, Topology};
pub use types::{FitnessFn, Particle, PsoError};
