//! # BreedStrategy
//!
//! The `BreedStrategy` trait defines the interface for strategies responsible for breeding
//! offspring from the current population and the evolution options.
pub mod ordered;

use std::fmt::Debug;

use crate::{
    error::Result, evolution::options::EvolutionOptions, genome::Genome,
    rng::RandomNumberGenerator,
};

/// # BreedStrategy
///
/// The `BreedStrategy` trait defines the interface for strategies responsible for breeding
/// new genomes from a set of evaluated parents.
pub trait BreedStrategy
where
    Self: Debug + Clone + Send + Sync,
{
    /// Breeds `evol_options.offspring_count()` new genomes from `parents`.
    ///
    /// ## Parameters
    ///
    /// - `parents`: The current, evaluated population.
    /// - `evol_options`: A reference to the evolution options specifying algorithm parameters.
    /// - `rng`: A mutable reference to the random number generator used for every
    ///   random draw during breeding.
    ///
    /// ## Returns
    ///
    /// A Result containing the unevaluated offspring, or a GeneticError if breeding fails.
    ///
    /// ## Errors
    ///
    /// This method can fail if:
    /// - The parents slice is empty
    /// - A parent has not been evaluated
    /// - Recombination violates the permutation invariant
    fn breed(
        &self,
        parents: &[Genome],
        evol_options: &EvolutionOptions,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>>;
}

pub use ordered::OrderedBreedStrategy;
