//! Tie-breaking among equally loaded staff.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// Picks one staff member out of a tied, least-loaded group.
///
/// Implementations receive the size of the tied group (always at least one)
/// and return an index into it.
pub trait TieBreaker {
    /// Returns an index in `0..tied`.
    fn choose(&mut self, tied: usize) -> usize;
}

/// Uniform random tie-break over any [`Rng`].
///
/// Wrap a borrowed generator with `RandomTieBreaker::new(&mut rng)` to keep
/// using it afterwards.
#[derive(Debug, Clone)]
pub struct RandomTieBreaker<R> {
    rng: R,
}

impl<R: Rng> RandomTieBreaker<R> {
    /// Wraps a generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Releases the generator.
    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl RandomTieBreaker<StdRng> {
    /// Reproducible tie-break from a seed.
    pub fn seeded(seed: u64) -> Self {
        Self::new(StdRng::seed_from_u64(seed))
    }

    /// Tie-break seeded from the thread RNG.
    pub fn from_entropy() -> Self {
        Self::new(StdRng::from_rng(&mut rand::rng()))
    }
}

impl<R: Rng> TieBreaker for RandomTieBreaker<R> {
    fn choose(&mut self, tied: usize) -> usize {
        if tied <= 1 {
            0
        } else {
            self.rng.random_range(0..tied)
        }
    }
}

/// Always picks the first tied staff member in roster order.
///
/// Makes allocation fully deterministic; useful in tests and previews.
#[derive(Debug, Clone, Copy, Default)]
pub struct FirstTied;

impl TieBreaker for FirstTied {
    fn choose(&mut self, _tied: usize) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::SmallRng;

    #[test]
    fn test_random_in_range() {
        let mut tb = RandomTieBreaker::seeded(42);
        for tied in 1..20 {
            for _ in 0..50 {
                assert!(tb.choose(tied) < tied);
            }
        }
    }

    #[test]
    fn test_single_candidate() {
        let mut tb = RandomTieBreaker::seeded(1);
        assert_eq!(tb.choose(1), 0);
    }

    #[test]
    fn test_seeded_reproducible() {
        let mut a = RandomTieBreaker::seeded(7);
        let mut b = RandomTieBreaker::seeded(7);
        let xs: Vec<usize> = (0..32).map(|_| a.choose(5)).collect();
        let ys: Vec<usize> = (0..32).map(|_| b.choose(5)).collect();
        assert_eq!(xs, ys);
    }

    #[test]
    fn test_borrowed_rng() {
        let mut rng = SmallRng::seed_from_u64(3);
        {
            let mut tb = RandomTieBreaker::new(&mut rng);
            assert!(tb.choose(4) < 4);
        }
        let _still_usable: u32 = rng.random();
    }

    #[test]
    fn test_first_tied() {
        let mut tb = FirstTied;
        assert_eq!(tb.choose(1), 0);
        assert_eq!(tb.choose(9), 0);
    }

    #[test]
    fn test_random_covers_all_candidates() {
        let mut tb = RandomTieBreaker::seeded(11);
        let mut seen = [false; 3];
        for _ in 0..200 {
            seen[tb.choose(3)] = true;
        }
        assert!(seen.iter().all(|&s| s));
    }
}
