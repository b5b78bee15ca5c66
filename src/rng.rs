//! # RandomNumberGenerator
//!
//! The `RandomNumberGenerator` struct is the single source of randomness for a run.
//! Every operator draws from the generator it is handed, so seeding it with
//! [`RandomNumberGenerator::from_seed`] makes a whole evolution reproducible.
//!
//! ## Example
//!
//! ```rust
//! use tourga::rng::RandomNumberGenerator;
//!
//! let mut first = RandomNumberGenerator::from_seed(7);
//! let mut second = RandomNumberGenerator::from_seed(7);
//!
//! assert_eq!(first.gen_index(100), second.gen_index(100));
//! assert_eq!(first.sample_indices(10, 3), second.sample_indices(10, 3));
//! ```

use rand::{
    rngs::StdRng,
    seq::{index, SliceRandom},
    Rng, SeedableRng,
};

/// A wrapper around the `rand` crate's `StdRng` exposing the draws the
/// genetic operators need.
#[derive(Clone, Debug)]
pub struct RandomNumberGenerator {
    pub rng: StdRng,
}

impl RandomNumberGenerator {
    /// Creates a new `RandomNumberGenerator` instance seeded from the system entropy.
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Creates a new `RandomNumberGenerator` instance with a specific seed.
    ///
    /// This is useful for reproducible runs, tests and benchmarks.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Returns a uniformly distributed index in `0..upper`.
    ///
    /// `upper` must be greater than zero.
    pub fn gen_index(&mut self, upper: usize) -> usize {
        self.rng.gen_range(0..upper)
    }

    /// Returns a uniformly distributed value in `low..=high`.
    pub fn gen_inclusive(&mut self, low: usize, high: usize) -> usize {
        self.rng.gen_range(low..=high)
    }

    /// Returns `true` with the given probability.
    ///
    /// A probability of `0.0` never fires and `1.0` always does.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.rng.gen::<f64>() < probability
    }

    /// Draws `amount` distinct indices from `0..length`, in random order.
    ///
    /// `amount` must not exceed `length`.
    pub fn sample_indices(&mut self, length: usize, amount: usize) -> Vec<usize> {
        index::sample(&mut self.rng, length, amount).into_vec()
    }

    /// Shuffles the slice in place.
    pub fn shuffle<T>(&mut self, values: &mut [T]) {
        values.shuffle(&mut self.rng);
    }
}

impl Default for RandomNumberGenerator {
    fn default() -> Self {
        Self::new()
    }
}
