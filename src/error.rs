//! # Error Types
//!
//! This module defines the error type shared by every part of the library.
//! Configuration problems are detected before a run starts, distance lookups
//! report out-of-range locations, and the evolution loop reports a population
//! that has been pruned away entirely.
//!
//! ## Examples
//!
//! Using the `Result` type:
//!
//! ```rust
//! use tourga::error::{GeneticError, Result};
//!
//! fn check_size(size: usize) -> Result<usize> {
//!     if size == 0 {
//!         return Err(GeneticError::InvalidConfig(
//!             "Population size cannot be zero".to_string(),
//!         ));
//!     }
//!     Ok(size)
//! }
//!
//! assert!(check_size(0).is_err());
//! assert_eq!(check_size(3).unwrap(), 3);
//! ```
//!
//! Using the `OptionExt` trait to convert `Option` to `Result`:
//!
//! ```rust
//! use tourga::error::{GeneticError, OptionExt};
//!
//! fn cheapest(costs: &[f64]) -> tourga::error::Result<f64> {
//!     costs
//!         .iter()
//!         .copied()
//!         .min_by(f64::total_cmp)
//!         .ok_or_else_genetic(|| GeneticError::EmptyPopulation)
//! }
//!
//! assert_eq!(cheapest(&[3.0, 1.5]).unwrap(), 1.5);
//! assert!(cheapest(&[]).is_err());
//! ```

use thiserror::Error;

/// Represents errors that can occur while building or running a genetic algorithm.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GeneticError {
    /// Error that occurs when an invalid configuration is provided.
    #[error("Configuration error: {0}")]
    InvalidConfig(String),

    /// Error that occurs when a location index is outside the known location set.
    #[error("Index error: location {index} is out of bounds for {len} locations")]
    IndexOutOfBounds { index: usize, len: usize },

    /// Error that occurs when a distance matrix is rejected at construction.
    #[error("Invalid distance matrix: {0}")]
    InvalidDistanceMatrix(String),

    /// Error that occurs when weakness pruning removes every genome.
    #[error(
        "Population exhausted: every genome exceeded the weakness threshold {threshold} in generation {generation}"
    )]
    PopulationExhausted { generation: usize, threshold: f64 },

    /// Error that occurs when an empty population is encountered.
    #[error("Empty population error: Cannot operate on an empty population")]
    EmptyPopulation,

    /// Error that occurs when a fitness calculation yields an unusable value.
    #[error("Fitness calculation error: {0}")]
    FitnessCalculation(String),

    /// Error that occurs when an internal invariant does not hold.
    #[error("Internal invariant violated: {0}")]
    InvariantViolation(String),
}

/// A specialized Result type for genetic algorithm operations.
pub type Result<T> = std::result::Result<T, GeneticError>;

/// Extension trait for Option to convert to Result with a custom error.
///
/// ## Examples
///
/// ```rust
/// use tourga::error::{GeneticError, OptionExt};
///
/// let missing: Option<u8> = None;
/// let result = missing.ok_or_else_genetic(|| GeneticError::EmptyPopulation);
/// assert_eq!(result, Err(GeneticError::EmptyPopulation));
/// ```
pub trait OptionExt<T> {
    /// Converts an Option to a Result, generating the error lazily.
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError;
}

impl<T> OptionExt<T> for Option<T> {
    fn ok_or_else_genetic<F>(self, err_fn: F) -> Result<T>
    where
        F: FnOnce() -> GeneticError,
    {
        self.ok_or_else(err_fn)
    }
}
