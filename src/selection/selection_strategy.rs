use std::fmt::Debug;

use crate::error::Result;
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

/// Trait for selection strategies in genetic algorithms.
///
/// Selection strategies choose genomes from a population based on their cached
/// costs. Lower cost is always better; every genome handed to a strategy must
/// already be evaluated.
///
/// # Examples
///
/// ```
/// use tourga::error::Result;
/// use tourga::evolution::TourChallenge;
/// use tourga::distance::EuclideanDistance;
/// use tourga::genome::Genome;
/// use tourga::rng::RandomNumberGenerator;
/// use tourga::selection::{ElitistSelection, SelectionStrategy};
///
/// fn main() -> Result<()> {
///     let model = EuclideanDistance::from_pairs(&[(0.0, 0.0), (0.0, 1.0), (1.0, 1.0), (1.0, 0.0)]);
///     let challenge = TourChallenge::new(model, true)?;
///
///     let mut population = vec![Genome::new(vec![1, 3, 2]), Genome::new(vec![1, 2, 3])];
///     for genome in &mut population {
///         genome.evaluate(&challenge)?;
///     }
///
///     let mut rng = RandomNumberGenerator::new();
///     let selected = ElitistSelection::new().select(&population, 1, &mut rng)?;
///
///     assert_eq!(selected[0].chromosome(), &[1, 2, 3]);
///     Ok(())
/// }
/// ```
pub trait SelectionStrategy: Debug + Send + Sync {
    /// Selects `num_to_select` genomes from the population.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The population is empty
    /// - The strategy's parameters do not fit the population
    /// - A genome has not been evaluated
    fn select(
        &self,
        population: &[Genome],
        num_to_select: usize,
        rng: &mut RandomNumberGenerator,
    ) -> Result<Vec<Genome>>;
}
