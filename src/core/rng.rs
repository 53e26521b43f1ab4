//! Deterministic random number generation for session shuffles.
//!
//! ## Key Features
//!
//! - **Deterministic**: Same seed produces identical shuffles
//! - **Forkable**: Each session draws from its own independent branch
//!
//! ```
//! use animal_quiz::core::QuizRng;
//!
//! let mut rng = QuizRng::new(42);
//! let mut first = rng.fork();
//! let mut second = rng.fork();
//!
//! let mut a: Vec<u32> = (0..20).collect();
//! let mut b = a.clone();
//! first.shuffle(&mut a);
//! second.shuffle(&mut b);
//! assert_ne!(a, b);
//! ```

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Deterministic RNG with forking, one branch per quiz session.
///
/// Uses ChaCha8 for speed while keeping statistically uniform output,
/// which the Fisher-Yates shuffle relies on for unbiased permutations.
#[derive(Clone, Debug)]
pub struct QuizRng {
    inner: ChaCha8Rng,
    seed: u64,
    fork_counter: u64,
}

impl QuizRng {
    /// Create a new RNG with the given seed.
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            fork_counter: 0,
        }
    }

    /// Create a new RNG seeded from the operating system's entropy source.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    /// The seed this RNG was created with.
    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Fork this RNG to create an independent branch.
    ///
    /// Each fork produces a different but deterministic sequence.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.fork_counter += 1;
        let fork_seed = self.seed.wrapping_add(self.fork_counter.wrapping_mul(0x9E3779B97F4A7C15));
        Self {
            inner: ChaCha8Rng::seed_from_u64(fork_seed),
            seed: fork_seed,
            fork_counter: 0,
        }
    }

    /// Shuffle a slice in place (Fisher-Yates, every permutation equally likely).
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        use rand::seq::SliceRandom;
        slice.shuffle(&mut self.inner);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn shuffled(rng: &mut QuizRng) -> Vec<u32> {
        let mut data: Vec<u32> = (0..20).collect();
        rng.shuffle(&mut data);
        data
    }

    #[test]
    fn test_determinism() {
        let mut rng1 = QuizRng::new(42);
        let mut rng2 = QuizRng::new(42);

        for _ in 0..10 {
            assert_eq!(shuffled(&mut rng1), shuffled(&mut rng2));
        }
    }

    #[test]
    fn test_different_seeds() {
        let mut rng1 = QuizRng::new(1);
        let mut rng2 = QuizRng::new(2);

        assert_ne!(shuffled(&mut rng1), shuffled(&mut rng2));
    }

    #[test]
    fn test_fork_is_deterministic() {
        let mut rng1 = QuizRng::new(42);
        let mut rng2 = QuizRng::new(42);

        let mut forked1 = rng1.fork();
        let mut forked2 = rng2.fork();

        assert_eq!(forked1.seed(), forked2.seed());
        assert_eq!(shuffled(&mut forked1), shuffled(&mut forked2));
        assert_ne!(rng1.fork().seed(), forked1.seed());
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let mut rng = QuizRng::new(42);
        let mut data = vec![1, 2, 3, 4, 5, 6, 7, 8, 9, 10];
        let original = data.clone();

        rng.shuffle(&mut data);

        // Same elements, different order (very likely)
        assert_ne!(data, original);
        data.sort();
        assert_eq!(data, original);
    }

    #[test]
    fn test_shuffle_covers_all_permutations() {
        use std::collections::HashSet;

        let mut rng = QuizRng::new(7);
        let mut seen = HashSet::new();
        for _ in 0..2000 {
            let mut data = [0, 1, 2];
            rng.shuffle(&mut data);
            seen.insert(data);
        }
        assert_eq!(seen.len(), 6);
    }
}
