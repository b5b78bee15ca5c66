//! # Mutation Operators
//!
//! Both operators rearrange values that are already in the chromosome, so a
//! permutation stays a permutation.
//!
//! - [`MutationOperator::Swap`]: exchange the values at two distinct positions.
//! - [`MutationOperator::Scramble`]: shuffle a contiguous window whose length is
//!   drawn from `min_len..=max_len`, capped by the chromosome length.
//!
//! Chromosomes shorter than two genes have nothing to rearrange and are left
//! untouched.

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Default shortest scramble window.
pub const DEFAULT_SCRAMBLE_MIN: usize = 2;
/// Default longest scramble window.
pub const DEFAULT_SCRAMBLE_MAX: usize = 6;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MutationOperator {
    #[default]
    Swap,
    Scramble { min_len: usize, max_len: usize },
}

impl MutationOperator {
    /// Scramble mutation with the default `2..=6` window.
    pub fn scramble() -> Self {
        Self::Scramble {
            min_len: DEFAULT_SCRAMBLE_MIN,
            max_len: DEFAULT_SCRAMBLE_MAX,
        }
    }

    /// Checks the operator's parameters.
    pub fn validate(&self) -> Result<()> {
        if let Self::Scramble { min_len, max_len } = *self {
            if min_len < 2 {
                return Err(GeneticError::InvalidConfig(format!(
                    "Scramble window must span at least 2 genes, got {}",
                    min_len
                )));
            }
            if min_len > max_len {
                return Err(GeneticError::InvalidConfig(format!(
                    "Scramble window minimum {} exceeds maximum {}",
                    min_len, max_len
                )));
            }
        }
        Ok(())
    }

    /// Rearranges `chromosome` in place.
    pub fn apply(&self, chromosome: &mut [usize], rng: &mut RandomNumberGenerator) {
        let n = chromosome.len();
        if n < 2 {
            return;
        }

        match *self {
            Self::Swap => {
                let picked = rng.sample_indices(n, 2);
                chromosome.swap(picked[0], picked[1]);
            }
            Self::Scramble { min_len, max_len } => {
                let longest = max_len.min(n).max(2);
                let shortest = min_len.clamp(2, longest);
                let len = rng.gen_inclusive(shortest, longest);
                let start = rng.gen_inclusive(0, n - len);
                rng.shuffle(&mut chromosome[start..start + len]);
            }
        }
    }
}
