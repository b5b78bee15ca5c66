use super::{check_index, DistanceModel};
use crate::error::{GeneticError, Result};

/// A square, symmetric matrix of travel costs with a zero diagonal.
///
/// The matrix is validated once at construction and is read-only afterwards.
/// Rows are stored in a single row-major buffer.
///
/// # Examples
///
/// ```rust
/// use tourga::distance::{DistanceMatrix, DistanceModel};
///
/// let matrix = DistanceMatrix::new(vec![
///     vec![0.0, 2.0, 9.0],
///     vec![2.0, 0.0, 6.0],
///     vec![9.0, 6.0, 0.0],
/// ])
/// .unwrap();
///
/// assert_eq!(matrix.location_count(), 3);
/// assert_eq!(matrix.cost(2, 1).unwrap(), 6.0);
/// assert!(matrix.cost(3, 0).is_err());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct DistanceMatrix {
    size: usize,
    values: Vec<f64>,
}

impl DistanceMatrix {
    /// Builds a matrix from complete rows.
    ///
    /// # Errors
    ///
    /// Returns [`GeneticError::InvalidDistanceMatrix`] if the matrix is empty or
    /// not square, if any entry is negative or not finite, if the diagonal is not
    /// zero, or if `rows[i][j] != rows[j][i]` for some pair.
    pub fn new(rows: Vec<Vec<f64>>) -> Result<Self> {
        let size = rows.len();
        if size == 0 {
            return Err(GeneticError::InvalidDistanceMatrix(
                "Matrix is empty".to_string(),
            ));
        }

        let mut values = Vec::with_capacity(size * size);
        for (i, row) in rows.into_iter().enumerate() {
            if row.len() != size {
                return Err(GeneticError::InvalidDistanceMatrix(format!(
                    "Matrix is incomplete: row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size
                )));
            }
            values.extend(row);
        }

        let matrix = Self { size, values };
        matrix.validate()?;
        Ok(matrix)
    }

    /// Builds a matrix from the strict upper triangle, mirroring it below the
    /// diagonal.
    ///
    /// Row `i` of `upper` holds the costs from location `i` to locations
    /// `i + 1..n`, so the last row is empty.
    pub fn from_upper_triangle(upper: &[Vec<f64>]) -> Result<Self> {
        let size = upper.len();
        let mut rows = vec![vec![0.0; size]; size];
        for (i, row) in upper.iter().enumerate() {
            if row.len() != size - i - 1 {
                return Err(GeneticError::InvalidDistanceMatrix(format!(
                    "Matrix is incomplete: upper row {} has {} entries, expected {}",
                    i,
                    row.len(),
                    size - i - 1
                )));
            }
            for (offset, &value) in row.iter().enumerate() {
                let j = i + 1 + offset;
                rows[i][j] = value;
                rows[j][i] = value;
            }
        }
        Self::new(rows)
    }

    /// Precomputes every pairwise cost of another model.
    pub fn from_model<D: DistanceModel>(model: &D) -> Result<Self> {
        let size = model.location_count();
        let rows = (0..size)
            .map(|i| (0..size).map(|j| model.cost(i, j)).collect::<Result<Vec<_>>>())
            .collect::<Result<Vec<_>>>()?;
        Self::new(rows)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    /// Returns the matrix as nested rows.
    pub fn rows(&self) -> Vec<Vec<f64>> {
        self.values
            .chunks(self.size)
            .map(<[f64]>::to_vec)
            .collect()
    }

    fn validate(&self) -> Result<()> {
        for i in 0..self.size {
            for j in 0..self.size {
                let value = self.values[i * self.size + j];
                if !value.is_finite() || value < 0.0 {
                    return Err(GeneticError::InvalidDistanceMatrix(format!(
                        "Entry ({}, {}) must be a non-negative number, got {}",
                        i, j, value
                    )));
                }
                if i == j && value != 0.0 {
                    return Err(GeneticError::InvalidDistanceMatrix(format!(
                        "Diagonal entry ({}, {}) must be zero, got {}",
                        i, j, value
                    )));
                }
                if j > i && value != self.values[j * self.size + i] {
                    return Err(GeneticError::InvalidDistanceMatrix(format!(
                        "Matrix is not symmetric at ({}, {})",
                        i, j
                    )));
                }
            }
        }
        Ok(())
    }
}

impl DistanceModel for DistanceMatrix {
    fn location_count(&self) -> usize {
        self.size
    }

    fn cost(&self, from: usize, to: usize) -> Result<f64> {
        check_index(from, self.size)?;
        check_index(to, self.size)?;
        Ok(self.values[from * self.size + to])
    }
}
