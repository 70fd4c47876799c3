//! Attraction topologies and the circular-window helper.

/// Which attractor pulls each particle's social term.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Topology {
    /// Every particle is attracted to the single best position found by
    /// the whole swarm (historical personal best of the best particle).
    #[default]
    Global,

    /// Each particle is attracted to the best particle within a fixed-radius
    /// window of swarm indices, wrapped modulo the swarm size.
    ///
    /// Local-best bookkeeping compares *current* fitness, not personal
    /// best — a deliberate asymmetry versus the global variant.
    Ring {
        /// Neighborhood radius; the window around particle `i` is
        /// `i-radius ..= i+radius`. Radius 0 degenerates to self-attraction.
        radius: usize,
    },
}

/// Indices of the closed circular window `idx-radius ..= idx+radius`,
/// wrapped modulo `len`, in window order.
///
/// Shared by local-best bookkeeping and by anything else that needs ring
/// neighborhoods; callers guarantee `radius < len` (enforced by
/// [`PsoConfig::validate`](super::PsoConfig::validate)).
pub fn ring_window(idx: usize, radius: usize, len: usize) -> Vec<usize> {
    let mut window = Vec::with_capacity(2 * radius + 1);
    for offset in -(radius as isize)..=(radius as isize) {
        let j = (idx as isize + offset).rem_euclid(len as isize) as usize;
        window.push(j);
    }
    window
}
