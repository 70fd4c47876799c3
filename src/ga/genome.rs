//! Fixed-length bit-vector genomes.

use rand::Rng;

/// A fixed-length bit-vector candidate solution.
///
/// The length is set at construction and never changes. Variation operators
/// produce new genomes rather than mutating shared ones; the engine only
/// mutates genomes it exclusively owns.
///
/// # Examples
///
/// ```
/// use evoswarm::ga::Genome;
///
/// let mut g = Genome::zeros(8);
/// g.set(3, true);
/// g.flip(7);
/// assert_eq!(g.count_ones(), 2);
/// assert!(g.get(3) && g.get(7));
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Genome {
    bits: Vec<bool>,
}

impl Genome {
    /// Creates an all-zero genome of the given length.
    pub fn zeros(len: usize) -> Self {
        Self {
            bits: vec![false; len],
        }
    }

    /// Creates a genome from an explicit bit vector.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Self { bits }
    }

    /// Samples a genome of the given length with each bit uniform at random.
    pub fn random<R: Rng>(len: usize, rng: &mut R) -> Self {
        Self {
            bits: (0..len).map(|_| rng.random_bool(0.5)).collect(),
        }
    }

    /// Number of loci.
    pub fn len(&self) -> usize {
        self.bits.len()
    }

    /// Whether the genome has zero loci.
    pub fn is_empty(&self) -> bool {
        self.bits.is_empty()
    }

    /// Reads the bit at `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= len()`.
    pub fn get(&self, idx: usize) -> bool {
        self.bits[idx]
    }

    /// Writes the bit at `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= len()`.
    pub fn set(&mut self, idx: usize, value: bool) {
        self.bits[idx] = value;
    }

    /// Inverts the bit at `idx`.
    ///
    /// # Panics
    /// Panics if `idx >= len()`.
    pub fn flip(&mut self, idx: usize) {
        self.bits[idx] = !self.bits[idx];
    }

    /// Number of set bits.
    pub fn count_ones(&self) -> usize {
        self.bits.iter().filter(|&&b| b).count()
    }

    /// The raw bit slice, index 0 first.
    pub fn bits(&self) -> &[bool] {
        &self.bits
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_zeros() {
        let g = Genome::zeros(16);
        assert_eq!(g.len(), 16);
        assert_eq!(g.count_ones(), 0);
        assert!(!g.is_empty());
    }

    #[test]
    fn test_set_flip_get() {
        let mut g = Genome::zeros(4);
        g.set(1, true);
        assert!(g.get(1));
        g.flip(1);
        assert!(!g.get(1));
        g.flip(0);
        assert_eq!(g.bits(), &[true, false, false, false]);
    }

    #[test]
    fn test_random_has_requested_length() {
        let mut rng = StdRng::seed_from_u64(42);
        for len in [1, 8, 63, 200] {
            let g = Genome::random(len, &mut rng);
            assert_eq!(g.len(), len);
        }
    }

    #[test]
    fn test_random_is_seed_deterministic() {
        let mut a = StdRng::seed_from_u64(7);
        let mut b = StdRng::seed_from_u64(7);
        assert_eq!(Genome::random(64, &mut a), Genome::random(64, &mut b));
    }

    #[test]
    fn test_random_is_roughly_balanced() {
        let mut rng = StdRng::seed_from_u64(42);
        let g = Genome::random(10_000, &mut rng);
        let ones = g.count_ones();
        assert!(
            (4_000..6_000).contains(&ones),
            "expected roughly half set bits, got {ones}/10000"
        );
    }

    proptest! {
        #[test]
        fn prop_count_ones_matches_bits(bits in proptest::collection::vec(any::<bool>(), 0..256)) {
            let expected = bits.iter().filter(|&&b| b).count();
            let g = Genome::from_bits(bits);
            prop_assert_eq!(g.count_ones(), expected);
        }

        #[test]
        fn prop_flip_is_involution(bits in proptest::collection::vec(any::<bool>(), 1..256), idx in any::<proptest::sample::Index>()) {
            let mut g = Genome::from_bits(bits);
            let i = idx.index(g.len());
            let before = g.clone();
            g.flip(i);
            prop_assert_ne!(g.get(i), before.get(i));
            g.flip(i);
            prop_assert_eq!(g, before);
        }
    }
}
