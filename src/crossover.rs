//! # Ordered Crossover
//!
//! Ordered crossover (OX) copies a contiguous segment from the first parent
//! into the child at the same positions, then fills the remaining positions
//! from left to right with the second parent's genes that are not in the
//! segment, in the order they appear in the second parent.
//!
//! The donor genes are collected and counted before the child is assembled,
//! so the fill covers every open position exactly once. Parents that do not
//! permute the same gene set are reported as an invariant violation instead of
//! producing a partial child.
//!
//! ## Example
//!
//! ```rust
//! use tourga::crossover::ordered_crossover_between;
//!
//! let child = ordered_crossover_between(&[1, 2, 3, 4, 5], &[5, 4, 3, 2, 1], 1, 3).unwrap();
//! assert_eq!(child, vec![5, 2, 3, 4, 1]);
//! ```

use std::collections::HashSet;

use crate::error::{GeneticError, Result};
use crate::rng::RandomNumberGenerator;

/// Ordered crossover with randomly drawn cut points.
///
/// Two distinct cut points are drawn from `0..n`; the segment between them
/// (start inclusive, end exclusive) comes from `parent_a`.
pub fn ordered_crossover(
    parent_a: &[usize],
    parent_b: &[usize],
    rng: &mut RandomNumberGenerator,
) -> Result<Vec<usize>> {
    check_parents(parent_a, parent_b)?;

    let n = parent_a.len();
    if n < 2 {
        return Ok(parent_a.to_vec());
    }

    let cuts = rng.sample_indices(n, 2);
    let (start, end) = (cuts[0].min(cuts[1]), cuts[0].max(cuts[1]));
    ordered_crossover_between(parent_a, parent_b, start, end)
}

/// Ordered crossover with explicit cut points: `parent_a[start..end]` is kept in place.
///
/// # Errors
///
/// Returns [`GeneticError::InvariantViolation`] if the parents differ in length,
/// the cut points are out of order or out of range, or the parents do not
/// permute the same genes.
pub fn ordered_crossover_between(
    parent_a: &[usize],
    parent_b: &[usize],
    start: usize,
    end: usize,
) -> Result<Vec<usize>> {
    check_parents(parent_a, parent_b)?;

    let n = parent_a.len();
    if start > end || end > n {
        return Err(GeneticError::InvariantViolation(format!(
            "Cut points ({}, {}) are invalid for chromosomes of length {}",
            start, end, n
        )));
    }

    let genes: HashSet<usize> = parent_a.iter().copied().collect();
    if genes.len() != n {
        return Err(GeneticError::InvariantViolation(format!(
            "First parent {:?} repeats a gene",
            parent_a
        )));
    }

    let segment: HashSet<usize> = parent_a[start..end].iter().copied().collect();
    let mut donors = Vec::with_capacity(n - (end - start));
    let mut used = HashSet::with_capacity(n);
    for &gene in parent_b {
        if segment.contains(&gene) {
            continue;
        }
        if !genes.contains(&gene) || !used.insert(gene) {
            return Err(GeneticError::InvariantViolation(format!(
                "Gene {} of the second parent {:?} does not match the first parent {:?}",
                gene, parent_b, parent_a
            )));
        }
        donors.push(gene);
    }

    let open = n - (end - start);
    if donors.len() != open {
        return Err(GeneticError::InvariantViolation(format!(
            "Second parent supplies {} genes for {} open positions",
            donors.len(),
            open
        )));
    }

    let mut child = parent_a.to_vec();
    for (position, gene) in (0..start).chain(end..n).zip(donors) {
        child[position] = gene;
    }

    Ok(child)
}

fn check_parents(parent_a: &[usize], parent_b: &[usize]) -> Result<()> {
    if parent_a.len() != parent_b.len() {
        return Err(GeneticError::InvariantViolation(format!(
            "Parents must have equal length, got {} and {}",
            parent_a.len(),
            parent_b.len()
        )));
    }
    Ok(())
}
