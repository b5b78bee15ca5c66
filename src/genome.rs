//! # Genome
//!
//! A `Genome` is a candidate tour: a chromosome (an ordered permutation of
//! location indices) together with its cached cost. Lower cost is better.
//!
//! The cost is derived from the chromosome and is never set on its own. Any
//! change to the chromosome goes through a method that drops the cached value,
//! so the next [`Genome::evaluate`] recomputes it.
//!
//! ## Example
//!
//! ```rust
//! use tourga::distance::EuclideanDistance;
//! use tourga::evolution::TourChallenge;
//! use tourga::genome::Genome;
//!
//! let model = EuclideanDistance::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
//! let challenge = TourChallenge::new(model, true).unwrap();
//!
//! let mut genome = Genome::new(vec![1, 2, 3]);
//! assert_eq!(genome.cost(), None);
//! assert_eq!(genome.evaluate(&challenge).unwrap(), 4.0);
//! assert_eq!(genome.cost(), Some(4.0));
//! ```

use std::cmp::Ordering;
use std::collections::HashSet;

use crate::error::{GeneticError, Result};
use crate::evolution::Challenge;
use crate::mutation::MutationOperator;
use crate::rng::RandomNumberGenerator;

#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Genome {
    chromosome: Vec<usize>,
    cost: Option<f64>,
}

impl Genome {
    /// Creates an unevaluated genome.
    pub fn new(chromosome: Vec<usize>) -> Self {
        Self {
            chromosome,
            cost: None,
        }
    }

    pub fn chromosome(&self) -> &[usize] {
        &self.chromosome
    }

    pub fn into_chromosome(self) -> Vec<usize> {
        self.chromosome
    }

    /// The cached cost, or `None` if the chromosome has not been scored since
    /// it last changed.
    pub fn cost(&self) -> Option<f64> {
        self.cost
    }

    pub fn is_evaluated(&self) -> bool {
        self.cost.is_some()
    }

    /// Scores the chromosome against `challenge` unless a cost is already cached.
    ///
    /// # Errors
    ///
    /// Propagates errors from the challenge and returns
    /// [`GeneticError::FitnessCalculation`] for a non-finite cost.
    pub fn evaluate<C: Challenge + ?Sized>(&mut self, challenge: &C) -> Result<f64> {
        if let Some(cost) = self.cost {
            return Ok(cost);
        }

        let cost = challenge.score(&self.chromosome)?;
        if !cost.is_finite() {
            return Err(GeneticError::FitnessCalculation(format!(
                "Non-finite tour cost encountered: {}",
                cost
            )));
        }

        self.cost = Some(cost);
        Ok(cost)
    }

    /// Applies a mutation and invalidates the cached cost.
    pub fn mutate(&mut self, operator: &MutationOperator, rng: &mut RandomNumberGenerator) {
        operator.apply(&mut self.chromosome, rng);
        self.cost = None;
    }

    /// Cost ordering with unevaluated genomes sorted last.
    pub fn cmp_cost(&self, other: &Self) -> Ordering {
        match (self.cost, other.cost) {
            (Some(a), Some(b)) => a.total_cmp(&b),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => Ordering::Equal,
        }
    }

    /// Returns the cost, failing if the genome was never evaluated.
    pub(crate) fn evaluated_cost(&self) -> Result<f64> {
        self.cost.ok_or_else(|| {
            GeneticError::InvariantViolation(format!(
                "genome {:?} was used before it was evaluated",
                self.chromosome
            ))
        })
    }
}

/// Checks that `chromosome` contains every gene of `genes` exactly once and nothing else.
pub fn is_permutation_of(chromosome: &[usize], genes: &[usize]) -> bool {
    if chromosome.len() != genes.len() {
        return false;
    }
    let expected: HashSet<usize> = genes.iter().copied().collect();
    let mut seen = HashSet::with_capacity(chromosome.len());
    chromosome
        .iter()
        .all(|gene| expected.contains(gene) && seen.insert(*gene))
}
