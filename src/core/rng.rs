//! Seeded randomness for the `dynamic-random` row orders.
//!
//! A session owns one `GameRng` and draws every reshuffle from it, so a
//! fixed seed replays the same sequence of row orders. The stream
//! position can be saved and restored without replaying past draws.
//!
//! ```
//! use qwixx_scorecard::core::GameRng;
//!
//! let mut a = GameRng::new(42);
//! let mut b = GameRng::new(42);
//!
//! let mut xs = [2, 3, 4, 5, 6];
//! let mut ys = [2, 3, 4, 5, 6];
//! a.shuffle(&mut xs);
//! b.shuffle(&mut ys);
//! assert_eq!(xs, ys);
//! ```

use rand::seq::SliceRandom;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use serde::{Deserialize, Serialize};

/// Source of row shuffles.
#[derive(Clone, Debug)]
pub struct GameRng {
    stream: ChaCha8Rng,
    seed: u64,
}

impl GameRng {
    #[must_use]
    pub fn new(seed: u64) -> Self {
        Self {
            stream: ChaCha8Rng::seed_from_u64(seed),
            seed,
        }
    }

    /// Seed from the operating system, remembering the drawn seed.
    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(rand::random())
    }

    #[must_use]
    pub fn seed(&self) -> u64 {
        self.seed
    }

    /// Permute `values` uniformly at random (Fisher-Yates).
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.stream);
    }

    /// Snapshot of the seed and stream position.
    #[must_use]
    pub fn state(&self) -> GameRngState {
        GameRngState {
            seed: self.seed,
            word_pos: self.stream.get_word_pos(),
        }
    }

    /// Resume from a snapshot taken with [`state`](Self::state).
    #[must_use]
    pub fn from_state(saved: &GameRngState) -> Self {
        let mut rng = Self::new(saved.seed);
        rng.stream.set_word_pos(saved.word_pos);
        rng
    }
}

/// Where a `GameRng` stands: its seed and ChaCha8 word position.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameRngState {
    pub seed: u64,
    pub word_pos: u128,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn row_order(rng: &mut GameRng) -> Vec<u8> {
        let mut row: Vec<u8> = (2..=12).collect();
        rng.shuffle(&mut row);
        row
    }

    #[test]
    fn test_same_seed_same_rows() {
        let mut a = GameRng::new(42);
        let mut b = GameRng::new(42);

        for _ in 0..20 {
            assert_eq!(row_order(&mut a), row_order(&mut b));
        }
    }

    #[test]
    fn test_seeds_diverge() {
        let mut a = GameRng::new(1);
        let mut b = GameRng::new(2);

        let rows_a: Vec<_> = (0..4).map(|_| row_order(&mut a)).collect();
        let rows_b: Vec<_> = (0..4).map(|_| row_order(&mut b)).collect();

        assert_ne!(rows_a, rows_b);
    }

    #[test]
    fn test_shuffle_is_a_permutation() {
        let mut rng = GameRng::new(42);
        let sorted: Vec<u8> = (2..=12).collect();

        let mut row = row_order(&mut rng);
        assert_ne!(row, sorted);

        row.sort_unstable();
        assert_eq!(row, sorted);
    }

    #[test]
    fn test_end_value_is_roughly_uniform() {
        // Each of the 11 values should close the row about 1/11 of the time.
        let mut rng = GameRng::new(7);
        let mut end_counts = [0u32; 13];
        let trials = 22_000;

        for _ in 0..trials {
            let row = row_order(&mut rng);
            end_counts[usize::from(row[10])] += 1;
        }

        let expected = trials / 11;
        for count in &end_counts[2..] {
            assert!(
                count.abs_diff(expected) < expected / 5,
                "count {count} too far from {expected}"
            );
        }
    }

    #[test]
    fn test_entropy_seed_replays() {
        let mut live = GameRng::from_entropy();
        let mut replay = GameRng::new(live.seed());

        assert_eq!(row_order(&mut live), row_order(&mut replay));
    }

    #[test]
    fn test_resume_from_snapshot() {
        let mut rng = GameRng::new(42);
        for _ in 0..5 {
            row_order(&mut rng);
        }

        let saved = rng.state();
        let upcoming: Vec<_> = (0..3).map(|_| row_order(&mut rng)).collect();

        let mut resumed = GameRng::from_state(&saved);
        let replayed: Vec<_> = (0..3).map(|_| row_order(&mut resumed)).collect();

        assert_eq!(upcoming, replayed);
    }

    #[test]
    fn test_snapshot_json() {
        let saved = GameRng::new(9).state();

        let json = serde_json::to_string(&saved).unwrap();
        assert_eq!(json, r#"{"seed":9,"word_pos":0}"#);
        assert_eq!(serde_json::from_str::<GameRngState>(&json).unwrap(), saved);
    }
}
