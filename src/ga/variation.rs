//! Variation operators: crossover schemes, mutation, and local search.
//!
//! The scheme is selected once at construction and never mixed within a
//! run. [`CrossoverScheme::SinglePoint`] is the textbook operator;
//! [`CrossoverScheme::AlternatingLocus`] recombines only the even-indexed
//! loci and resolves the odd-indexed loci with a fixed-budget stochastic
//! local search — a Lamarckian learning step layered on top of the
//! evolutionary search.

use super::genome::Genome;
use super::types::FitnessFn;
use rand::Rng;

/// Crossover/mutation scheme, selected once at engine construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum CrossoverScheme {
    /// Single-point crossover over the whole genome.
    ///
    /// A point `c` is drawn uniformly from `[1, L-1]`; the children swap
    /// suffixes at `c`. Mutation flips every locus independently with
    /// probability `pm`.
    #[default]
    SinglePoint,

    /// Single-point crossover over the even-indexed loci only.
    ///
    /// The even loci (indices 0, 2, 4, …) of each parent form a sub-genome
    /// of length `L/2`; standard single-point crossover is applied to these
    /// sub-genomes and the results are interleaved back into the even
    /// positions of two zeroed children. Odd loci are left unset here and
    /// are resolved afterwards by [`local_search`]. Mutation flips even
    /// loci only.
    ///
    /// Requires an even genome length of at least 4.
    AlternatingLocus,
}

impl CrossoverScheme {
    /// Recombines two parents into two children.
    ///
    /// Consumes exactly one random draw (the crossover point).
    ///
    /// # Panics
    /// Panics if the parents are shorter than 2 loci, or — for
    /// [`AlternatingLocus`](Self::AlternatingLocus) — shorter than 4.
    /// [`GaConfig::validate`](super::GaConfig::validate) rules these out.
    pub fn crossover<R: Rng>(&self, a: &Genome, b: &Genome, rng: &mut R) -> (Genome, Genome) {
        let len = a.len();
        match self {
            CrossoverScheme::SinglePoint => {
                let point = rng.random_range(1..len);
                let mut child_a = a.clone();
                let mut child_b = b.clone();
                for i in point..len {
                    child_a.set(i, b.get(i));
                    child_b.set(i, a.get(i));
                }
                (child_a, child_b)
            }
            CrossoverScheme::AlternatingLocus => {
                let half = len / 2;
                let point = rng.random_range(1..half);
                // Odd loci stay unset; local_search fills them in.
                let mut child_a = Genome::zeros(len);
                let mut child_b = Genome::zeros(len);
                for k in 0..half {
                    let locus = 2 * k;
                    if k < point {
                        child_a.set(locus, a.get(locus));
                        child_b.set(locus, b.get(locus));
                    } else {
                        child_a.set(locus, b.get(locus));
                        child_b.set(locus, a.get(locus));
                    }
                }
                (child_a, child_b)
            }
        }
    }

    /// Applies per-locus Bernoulli(`pm`) mutation to a pair of offspring.
    ///
    /// Draws are locus-major and interleaved (`a` then `b` at each locus),
    /// which fixes the draw order reproducibility depends on. Under
    /// [`AlternatingLocus`](Self::AlternatingLocus) only even loci are
    /// subject to direct flips; odd loci belong to [`local_search`].
    pub fn mutate_pair<R: Rng>(&self, a: &mut Genome, b: &mut Genome, pm: f64, rng: &mut R) {
        let stride = match self {
            CrossoverScheme::SinglePoint => 1,
            CrossoverScheme::AlternatingLocus => 2,
        };
        for locus in (0..a.len()).step_by(stride) {
            if rng.random_range(0.0..1.0) < pm {
                a.flip(locus);
            }
            if rng.random_range(0.0..1.0) < pm {
                b.flip(locus);
            }
        }
    }
}

/// Fixed-budget stochastic hill-climb over the odd-indexed loci.
///
/// Trial zero scores `genome` as-is. Each of the `trials` further trials
/// redraws *all* odd loci uniformly at random, scores the completed genome
/// with the fitness oracle, and the best-scoring genome seen is retained
/// (strict improvement replaces). The even loci are never touched.
pub fn local_search<R: Rng>(
    genome: &Genome,
    trials: usize,
    fitness: &FitnessFn,
    rng: &mut R,
) -> Genome {
    let mut best = genome.clone();
    let mut best_score = fitness(&best);
    let mut current = genome.clone();
    for _ in 0..trials {
        for locus in (1..genome.len()).step_by(2) {
            current.set(locus, rng.random_bool(0.5));
        }
        let score = fitness(&current);
        if score > best_score {
            best = current.clone();
            best_score = score;
        }
    }
    best
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn genome_of(bits: &[u8]) -> Genome {
        Genome::from_bits(bits.iter().map(|&b| b != 0).collect())
    }

    #[test]
    fn test_single_point_splices_at_drawn_point() {
        let a = genome_of(&[1, 1, 1, 1, 1, 1, 1, 1]);
        let b = genome_of(&[0, 0, 0, 0, 0, 0, 0, 0]);

        // Replay the same stream to learn which point was drawn.
        let mut rng = StdRng::seed_from_u64(5);
        let (child_a, child_b) = CrossoverScheme::SinglePoint.crossover(&a, &b, &mut rng);
        let mut replay = StdRng::seed_from_u64(5);
        let point = replay.random_range(1..8);

        for i in 0..8 {
            assert_eq!(child_a.get(i), if i < point { a.get(i) } else { b.get(i) });
            assert_eq!(child_b.get(i), if i < point { b.get(i) } else { a.get(i) });
        }
    }

    #[test]
    fn test_single_point_point_is_interior() {
        // Children must never be verbatim copies of one parent.
        let a = genome_of(&[1, 1, 1, 1]);
        let b = genome_of(&[0, 0, 0, 0]);
        let mut rng = StdRng::seed_from_u64(42);
        for _ in 0..200 {
            let (child_a, _) = CrossoverScheme::SinglePoint.crossover(&a, &b, &mut rng);
            assert_ne!(child_a, a);
            assert_ne!(child_a, b);
        }
    }

    #[test]
    fn test_alternating_crosses_even_loci_and_clears_odd() {
        let a = genome_of(&[1, 1, 1, 1, 1, 1, 1, 1]);
        let b = genome_of(&[0, 1, 0, 1, 0, 1, 0, 1]);

        let mut rng = StdRng::seed_from_u64(9);
        let (child_a, child_b) = CrossoverScheme::AlternatingLocus.crossover(&a, &b, &mut rng);
        let mut replay = StdRng::seed_from_u64(9);
        let point = replay.random_range(1..4);

        for k in 0..4 {
            let locus = 2 * k;
            let (exp_a, exp_b) = if k < point {
                (a.get(locus), b.get(locus))
            } else {
                (b.get(locus), a.get(locus))
            };
            assert_eq!(child_a.get(locus), exp_a);
            assert_eq!(child_b.get(locus), exp_b);
        }
        for locus in [1, 3, 5, 7] {
            assert!(!child_a.get(locus), "odd locus {locus} must be left unset");
            assert!(!child_b.get(locus), "odd locus {locus} must be left unset");
        }
    }

    #[test]
    fn test_mutate_pair_zero_rate_is_noop() {
        let mut a = genome_of(&[1, 0, 1, 0]);
        let mut b = genome_of(&[0, 1, 0, 1]);
        let (orig_a, orig_b) = (a.clone(), b.clone());
        let mut rng = StdRng::seed_from_u64(1);
        CrossoverScheme::SinglePoint.mutate_pair(&mut a, &mut b, 0.0, &mut rng);
        assert_eq!(a, orig_a);
        assert_eq!(b, orig_b);
    }

    #[test]
    fn test_mutate_pair_certain_rate_flips_everything() {
        let mut a = genome_of(&[1, 0, 1, 0]);
        let mut b = genome_of(&[0, 1, 0, 1]);
        let mut rng = StdRng::seed_from_u64(1);
        CrossoverScheme::SinglePoint.mutate_pair(&mut a, &mut b, 1.0, &mut rng);
        assert_eq!(a, genome_of(&[0, 1, 0, 1]));
        assert_eq!(b, genome_of(&[1, 0, 1, 0]));
    }

    #[test]
    fn test_alternating_mutation_leaves_odd_loci_alone() {
        let mut a = genome_of(&[0, 1, 0, 1, 0, 1]);
        let mut b = genome_of(&[0, 0, 0, 0, 0, 0]);
        let mut rng = StdRng::seed_from_u64(1);
        CrossoverScheme::AlternatingLocus.mutate_pair(&mut a, &mut b, 1.0, &mut rng);
        // Even loci all flipped, odd loci untouched.
        assert_eq!(a, genome_of(&[1, 1, 1, 1, 1, 1]));
        assert_eq!(b, genome_of(&[1, 0, 1, 0, 1, 0]));
    }

    #[test]
    fn test_local_search_never_worse_than_start() {
        let fitness: FitnessFn = Box::new(|g: &Genome| g.count_ones() as f64);
        let mut rng = StdRng::seed_from_u64(3);
        let start = genome_of(&[1, 0, 1, 0, 1, 0, 1, 0]);
        let result = local_search(&start, 20, &fitness, &mut rng);
        assert!(fitness(&result) >= fitness(&start));
    }

    #[test]
    fn test_local_search_preserves_even_loci() {
        let fitness: FitnessFn = Box::new(|g: &Genome| g.count_ones() as f64);
        let mut rng = StdRng::seed_from_u64(3);
        let start = genome_of(&[1, 0, 0, 0, 1, 0, 0, 0]);
        let result = local_search(&start, 50, &fitness, &mut rng);
        for locus in (0..8).step_by(2) {
            assert_eq!(result.get(locus), start.get(locus));
        }
    }

    #[test]
    fn test_local_search_finds_all_ones_completion() {
        // With one-max fitness and a generous budget, the best completion
        // of the odd loci is all-ones; 50 trials over 4 odd loci (16
        // assignments) find it with overwhelming probability.
        let fitness: FitnessFn = Box::new(|g: &Genome| g.count_ones() as f64);
        let mut rng = StdRng::seed_from_u64(3);
        let start = genome_of(&[1, 0, 1, 0, 1, 0, 1, 0]);
        let result = local_search(&start, 50, &fitness, &mut rng);
        assert_eq!(result.count_ones(), 8);
    }

    #[test]
    fn test_local_search_zero_trials_returns_start() {
        let fitness: FitnessFn = Box::new(|g: &Genome| g.count_ones() as f64);
        let mut rng = StdRng::seed_from_u64(3);
        let start = genome_of(&[1, 0, 1, 0]);
        assert_eq!(local_search(&start, 0, &fitness, &mut rng), start);
    }

    #[test]
    fn test_local_search_matches_best_of_replayed_trials() {
        // Replay the identical stream and recompute the best-of-N by hand.
        let fitness: FitnessFn = Box::new(|g: &Genome| {
            // Weight later loci more so completions are distinguishable.
            g.bits()
                .iter()
                .enumerate()
                .map(|(i, &b)| if b { (i + 1) as f64 } else { 0.0 })
                .sum()
        });
        let start = genome_of(&[1, 0, 0, 1, 1, 0, 0, 0]);
        let trials = 20;

        let mut rng = StdRng::seed_from_u64(11);
        let result = local_search(&start, trials, &fitness, &mut rng);

        let mut replay = StdRng::seed_from_u64(11);
        let mut expected = start.clone();
        let mut expected_score = fitness(&expected);
        let mut current = start.clone();
        for _ in 0..trials {
            for locus in (1..start.len()).step_by(2) {
                current.set(locus, replay.random_bool(0.5));
            }
            let score = fitness(&current);
            if score > expected_score {
                expected = current.clone();
                expected_score = score;
            }
        }
        assert_eq!(result, expected);
    }
}
