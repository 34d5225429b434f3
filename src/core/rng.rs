//! Seeded randomness for playouts.
//!
//! A `GameRng` is owned by exactly one playout. Batches of games derive one
//! stream per game with [`GameRng::fork`], so game `n` of a batch replays
//! identically no matter how many games run beside it.
//!
//! ```
//! use boop_zero::core::GameRng;
//!
//! let mask = [0u8, 1, 0, 1, 1];
//! let mut rng = GameRng::new(42);
//! let pick = rng.choose_legal(&mask).unwrap();
//! assert_eq!(mask[pick], 1);
//!
//! let mut again = GameRng::new(42);
//! assert_eq!(again.choose_legal(&mask), Some(pick));
//! ```

use rand::seq::IteratorRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;

/// Golden-ratio increment that spreads fork seeds across the `u64` range.
const FORK_STRIDE: u64 = 0x9E37_79B9_7F4A_7C15;

/// ChaCha8 stream plus the bookkeeping needed to fork it.
#[derive(Clone, Debug)]
pub struct GameRng {
    inner: ChaCha8Rng,
    seed: u64,
    forks: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            inner: ChaCha8Rng::seed_from_u64(seed),
            seed,
            forks: 0,
        }
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Derive the next independent stream. The `n`th fork of a given seed
    /// is always the same stream.
    #[must_use]
    pub fn fork(&mut self) -> Self {
        self.forks += 1;
        Self::new(self.seed.wrapping_add(self.forks.wrapping_mul(FORK_STRIDE)))
    }

    /// Uniformly pick one index whose mask entry is `1`.
    ///
    /// `None` when nothing is legal.
    pub fn choose_legal(&mut self, mask: &[u8]) -> Option<usize> {
        mask.iter()
            .enumerate()
            .filter(|(_, &legal)| legal == 1)
            .map(|(i, _)| i)
            .choose(&mut self.inner)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_same_seed_same_choices() {
        let mask = vec![1u8; 188];
        let mut rng1 = GameRng::new(42);
        let mut rng2 = GameRng::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.choose_legal(&mask), rng2.choose_legal(&mask));
        }
    }

    #[test]
    fn test_only_legal_indices_chosen() {
        let mut mask = vec![0u8; 188];
        mask[3] = 1;
        mask[108] = 1;
        mask[187] = 1;

        let mut rng = GameRng::new(9);
        for _ in 0..200 {
            let pick = rng.choose_legal(&mask).unwrap();
            assert!([3, 108, 187].contains(&pick));
        }
    }

    #[test]
    fn test_empty_mask() {
        let mut rng = GameRng::new(7);
        assert_eq!(rng.choose_legal(&[0u8; 188]), None);
        assert_eq!(rng.choose_legal(&[]), None);
    }

    #[test]
    fn test_forks_are_distinct_and_reproducible() {
        let mut root1 = GameRng::new(42);
        let mut root2 = GameRng::new(42);

        let first = root1.fork();
        let second = root1.fork();
        assert_ne!(first.seed(), second.seed());
        assert_ne!(first.seed(), root1.seed());

        assert_eq!(root2.fork().seed(), first.seed());
        assert_eq!(root2.fork().seed(), second.seed());
    }

    #[test]
    fn test_fork_streams_differ() {
        let mask = vec![1u8; 188];
        let mut root = GameRng::new(1);
        let mut a = root.fork();
        let mut b = root.fork();

        let seq_a: Vec<_> = (0..10).map(|_| a.choose_legal(&mask)).collect();
        let seq_b: Vec<_> = (0..10).map(|_| b.choose_legal(&mask)).collect();
        assert_ne!(seq_a, seq_b);
    }
}
