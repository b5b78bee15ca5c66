//! # tourga
//!
//! A genetic algorithm engine for permutation problems, built around the
//! traveling salesman problem. Candidate tours are permutations of location
//! indices, scored by a [`distance::DistanceModel`] and evolved with
//! tournament selection, ordered crossover, and swap or scramble mutation.
//!
//! ```rust
//! use tourga::distance::EuclideanDistance;
//! use tourga::evolution::{solve, EvolutionOptions};
//! use tourga::rng::RandomNumberGenerator;
//!
//! let cities = EuclideanDistance::from_pairs(&[(0.0, 0.0), (4.0, 0.0), (4.0, 3.0), (0.0, 3.0)]);
//! let options = EvolutionOptions::builder()
//!     .population_size(16)
//!     .num_generations(20)
//!     .tournament_size(3)
//!     .build();
//!
//! let result = solve(cities, &options, &mut RandomNumberGenerator::from_seed(3)).unwrap();
//! assert_eq!(result.chromosome.len(), 4);
//! assert_eq!(result.cost_history.len(), 21);
//! ```

pub mod crossover;
pub mod distance;
pub mod error;
pub mod evolution;
pub mod genome;
pub mod mutation;
pub mod population;
pub mod rng;
pub mod selection;
pub mod strategy;

// Re-export commonly used types for convenience
pub use error::{GeneticError, OptionExt, Result};
pub use evolution::{solve, EvolutionOptions, EvolutionResult};
pub use genome::Genome;
