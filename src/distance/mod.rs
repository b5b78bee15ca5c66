//! # Distance Models
//!
//! A [`DistanceModel`] answers one question: what does it cost to travel from
//! one location to another? Two implementations are provided:
//!
//! - [`DistanceMatrix`]: a validated, precomputed symmetric matrix.
//! - [`EuclideanDistance`]: straight-line distance between 2D coordinates,
//!   rounded to two decimal places.
//!
//! ## Example
//!
//! ```rust
//! use tourga::distance::{DistanceMatrix, DistanceModel, EuclideanDistance};
//!
//! let points = EuclideanDistance::from_pairs(&[(0.0, 0.0), (3.0, 4.0)]);
//! assert_eq!(points.cost(0, 1).unwrap(), 5.0);
//!
//! let matrix = DistanceMatrix::from_model(&points).unwrap();
//! assert_eq!(matrix.cost(1, 0).unwrap(), 5.0);
//! ```

pub mod euclidean;
pub mod matrix;

pub use euclidean::{Coordinate, EuclideanDistance};
pub use matrix::DistanceMatrix;

use crate::error::Result;

/// Pairwise travel cost between locations identified by index.
///
/// Implementations must be symmetric, return zero on the diagonal, and fail
/// with [`GeneticError::IndexOutOfBounds`](crate::error::GeneticError::IndexOutOfBounds)
/// for an index outside `0..location_count()`.
pub trait DistanceModel {
    /// Number of locations known to the model.
    fn location_count(&self) -> usize;

    /// Cost of travelling from `from` to `to`.
    fn cost(&self, from: usize, to: usize) -> Result<f64>;
}

impl<D: DistanceModel + ?Sized> DistanceModel for &D {
    fn location_count(&self) -> usize {
        (**self).location_count()
    }

    fn cost(&self, from: usize, to: usize) -> Result<f64> {
        (**self).cost(from, to)
    }
}

pub(crate) fn check_index(index: usize, len: usize) -> Result<()> {
    if index >= len {
        return Err(crate::error::GeneticError::IndexOutOfBounds { index, len });
    }
    Ok(())
}
