//! Randomness used by easy difficulty
//!
//! The engine never reaches for a global generator. Callers pass a
//! [`RandomSource`] into each search so the substitution can be driven by a
//! seeded [`SeededSource`] in production and by a scripted source in tests.

use rand::{Rng, SeedableRng, rngs::StdRng};

/// Source of the two random decisions easy difficulty makes
pub trait RandomSource {
    /// Return `true` with the given probability
    fn chance(&mut self, probability: f64) -> bool;

    /// Uniformly pick an index in `0..len`. `len` is never zero; the engine
    /// clamps larger answers to the last index.
    fn pick(&mut self, len: usize) -> usize;
}

/// [`RandomSource`] backed by a `StdRng`
#[derive(Debug, Clone)]
pub struct SeededSource {
    rng: StdRng,
}

impl SeededSource {
    /// Seeded when `seed` is given, otherwise seeded from the OS
    pub fn new(seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_rng(&mut rand::rng()),
        };
        Self { rng }
    }

    pub fn from_seed(seed: u64) -> Self {
        Self::new(Some(seed))
    }
}

impl RandomSource for SeededSource {
    fn chance(&mut self, probability: f64) -> bool {
        self.rng.random::<f64>() < probability
    }

    fn pick(&mut self, len: usize) -> usize {
        self.rng.random_range(0..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_sequence() {
        let mut a = SeededSource::from_seed(7);
        let mut b = SeededSource::from_seed(7);
        for _ in 0..32 {
            assert_eq!(a.chance(0.3), b.chance(0.3));
            assert_eq!(a.pick(9), b.pick(9));
        }
    }

    #[test]
    fn test_probability_extremes() {
        let mut source = SeededSource::from_seed(1);
        for _ in 0..100 {
            assert!(!source.chance(0.0));
            assert!(source.chance(1.0));
        }
    }

    #[test]
    fn test_pick_stays_in_range() {
        let mut source = SeededSource::new(None);
        for len in 1..10 {
            assert!(source.pick(len) < len);
        }
    }
}
