//! # Population Initialization
//!
//! A population is an ordered list of genomes. The initial population is made
//! of uniformly random permutations of the gene set; duplicates across genomes
//! are allowed.
//!
//! With a fixed depot, location `0` is the implicit start and end of every
//! tour, so only locations `1..n` are permuted. Without one, all of `0..n` are.
//!
//! ## Example
//!
//! ```rust
//! use tourga::population::{initialize, tour_genes};
//! use tourga::rng::RandomNumberGenerator;
//!
//! assert_eq!(tour_genes(4, true).unwrap(), vec![1, 2, 3]);
//!
//! let mut rng = RandomNumberGenerator::from_seed(1);
//! let population = initialize(10, 4, true, &mut rng).unwrap();
//! assert_eq!(population.len(), 10);
//! assert!(population.iter().all(|genome| genome.chromosome().len() == 3));
//! ```

use crate::error::{GeneticError, Result};
use crate::genome::Genome;
use crate::rng::RandomNumberGenerator;

pub type Population = Vec<Genome>;

/// The genes a tour over `location_count` locations permutes.
///
/// # Errors
///
/// Returns [`GeneticError::InvalidConfig`] for fewer than two locations.
pub fn tour_genes(location_count: usize, fixed_depot: bool) -> Result<Vec<usize>> {
    if location_count < 2 {
        return Err(GeneticError::InvalidConfig(format!(
            "A tour needs at least 2 locations, got {}",
            location_count
        )));
    }

    let first = usize::from(fixed_depot);
    Ok((first..location_count).collect())
}

/// Creates `size` random, unevaluated tours over `location_count` locations.
pub fn initialize(
    size: usize,
    location_count: usize,
    fixed_depot: bool,
    rng: &mut RandomNumberGenerator,
) -> Result<Population> {
    let genes = tour_genes(location_count, fixed_depot)?;
    initialize_with_genes(size, &genes, rng)
}

/// Creates `size` random, unevaluated permutations of `genes`.
pub fn initialize_with_genes(
    size: usize,
    genes: &[usize],
    rng: &mut RandomNumberGenerator,
) -> Result<Population> {
    if size == 0 {
        return Err(GeneticError::InvalidConfig(
            "Population size cannot be zero".to_string(),
        ));
    }
    if genes.is_empty() {
        return Err(GeneticError::InvalidConfig(
            "Cannot build a population over an empty gene set".to_string(),
        ));
    }

    Ok((0..size)
        .map(|_| {
            let mut chromosome = genes.to_vec();
            rng.shuffle(&mut chromosome);
            Genome::new(chromosome)
        })
        .collect())
}
