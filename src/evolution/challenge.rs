use crate::distance::DistanceModel;
use crate::error::Result;
use crate::population::tour_genes;

/// The problem being optimized: which genes a chromosome permutes and what a
/// chromosome costs. Lower cost is better.
pub trait Challenge {
    /// The gene set every chromosome is a permutation of.
    fn genes(&self) -> &[usize];

    /// Cost of a chromosome.
    fn score(&self, chromosome: &[usize]) -> Result<f64>;
}

/// Scores chromosomes as closed tours over a [`DistanceModel`].
///
/// With a fixed depot, location `0` is left out of the chromosome and every
/// tour starts and ends there. Without one, the last location connects back
/// to the first.
///
/// # Examples
///
/// ```rust
/// use tourga::distance::DistanceMatrix;
/// use tourga::evolution::{Challenge, TourChallenge};
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 1.0, 4.0],
///     vec![1.0, 0.0, 2.0],
///     vec![4.0, 2.0, 0.0],
/// ])
/// .unwrap();
///
/// let cycle = TourChallenge::new(&matrix, false).unwrap();
/// assert_eq!(cycle.genes(), &[0, 1, 2]);
/// assert_eq!(cycle.score(&[0, 1, 2]).unwrap(), 7.0);
///
/// let depot = TourChallenge::new(&matrix, true).unwrap();
/// assert_eq!(depot.genes(), &[1, 2]);
/// assert_eq!(depot.closed_tour(&[2, 1]), vec![0, 2, 1, 0]);
/// ```
#[derive(Debug, Clone)]
pub struct TourChallenge<D: DistanceModel> {
    model: D,
    fixed_depot: bool,
    genes: Vec<usize>,
}

impl<D: DistanceModel> TourChallenge<D> {
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidConfig`](crate::error::GeneticError::InvalidConfig)
    /// if the model knows fewer than two locations.
    pub fn new(model: D, fixed_depot: bool) -> Result<Self> {
        let genes = tour_genes(model.location_count(), fixed_depot)?;
        Ok(Self {
            model,
            fixed_depot,
            genes,
        })
    }

    pub fn model(&self) -> &D {
        &self.model
    }

    pub fn has_fixed_depot(&self) -> bool {
        self.fixed_depot
    }

    /// Expands a chromosome into the explicit closed route it encodes.
    pub fn closed_tour(&self, chromosome: &[usize]) -> Vec<usize> {
        let mut tour = Vec::with_capacity(chromosome.len() + 2);
        if self.fixed_depot {
            tour.push(0);
            tour.extend_from_slice(chromosome);
            tour.push(0);
        } else {
            tour.extend_from_slice(chromosome);
            tour.extend(chromosome.first().copied());
        }
        tour
    }
}

impl<D: DistanceModel> Challenge for TourChallenge<D> {
    fn genes(&self) -> &[usize] {
        &self.genes
    }

    fn score(&self, chromosome: &[usize]) -> Result<f64> {
        let (Some(&first), Some(&last)) = (chromosome.first(), chromosome.last()) else {
            return Ok(0.0);
        };

        let mut total = 0.0;
        for leg in chromosome.windows(2) {
            total += self.model.cost(leg[0], leg[1])?;
        }

        if self.fixed_depot {
            total += self.model.cost(0, first)?;
            total += self.model.cost(last, 0)?;
        } else {
            total += self.model.cost(last, first)?;
        }

        Ok(total)
    }
}
