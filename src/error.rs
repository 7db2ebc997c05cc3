//! Instance validation errors.

use thiserror::Error;

/// Reasons an instance is rejected at construction.
///
/// An instance that fails validation never reaches the search driver.
/// Unsolvable-but-valid instances (N-Queens with `n` of 2 or 3, a TSP
/// matrix without a Hamiltonian cycle) are *not* errors; they are reported
/// as outcomes by the solvers.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InstanceError {
    /// Board dimension or city count is zero.
    #[error("instance size must be at least 1")]
    EmptyInstance,

    /// A matrix row has the wrong length.
    #[error("cost matrix is not square: row {row} has {found} entries, expected {expected}")]
    NotSquare {
        row: usize,
        expected: usize,
        found: usize,
    },

    /// The declared city count does not match the matrix side.
    #[error("declared {declared} cities but the cost matrix has {found} rows")]
    CityCountMismatch { declared: usize, found: usize },

    /// A cost entry is negative.
    #[error("negative cost {value} at ({row}, {col})")]
    NegativeCost { row: usize, col: usize, value: i64 },

    /// An edge cost so large that a tour total could overflow `u64`.
    #[error("cost {value} at ({row}, {col}) exceeds {max}, the limit for {n} cities")]
    CostTooLarge {
        row: usize,
        col: usize,
        value: i64,
        n: usize,
        max: u64,
    },

    /// More cities than the exact solver accepts.
    #[error("{n} cities exceeds the supported maximum of {max}")]
    TooManyCities { n: usize, max: usize },
}
