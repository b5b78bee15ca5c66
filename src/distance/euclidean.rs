use super::{check_index, DistanceModel};
use crate::error::Result;

/// A location on the plane.
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Coordinate {
    pub x: f64,
    pub y: f64,
}

impl Coordinate {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Straight-line distance to `other`, rounded to two decimal places with
    /// ties going to the even digit.
    pub fn distance_to(&self, other: &Coordinate) -> f64 {
        let raw = (self.x - other.x).hypot(self.y - other.y);
        (raw * 100.0).round_ties_even() / 100.0
    }
}

impl From<(f64, f64)> for Coordinate {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// A distance model backed by raw coordinates.
///
/// Costs are computed on demand and rounded to two decimals, so tours built
/// from the same coordinates always score identically.
#[derive(Debug, Clone, PartialEq)]
pub struct EuclideanDistance {
    points: Vec<Coordinate>,
}

impl EuclideanDistance {
    pub fn new(points: Vec<Coordinate>) -> Self {
        Self { points }
    }

    pub fn from_pairs(pairs: &[(f64, f64)]) -> Self {
        Self::new(pairs.iter().copied().map(Coordinate::from).collect())
    }

    pub fn points(&self) -> &[Coordinate] {
        &self.points
    }

    /// Returns the coordinate of a location.
    pub fn point(&self, index: usize) -> Result<Coordinate> {
        check_index(index, self.points.len())?;
        Ok(self.points[index])
    }
}

impl DistanceModel for EuclideanDistance {
    fn location_count(&self) -> usize {
        self.points.len()
    }

    fn cost(&self, from: usize, to: usize) -> Result<f64> {
        let a = self.point(from)?;
        let b = self.point(to)?;
        Ok(a.distance_to(&b))
    }
}
