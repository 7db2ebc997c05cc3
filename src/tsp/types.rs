//! TSP instance and outcome types.

use std::fmt;

use rand::Rng;

use super::matrix::CostMatrix;
use crate::error::InstanceError;
use crate::search::SearchStats;

/// Largest city count accepted by the exact solver.
pub const MAX_CITIES: usize = 16;

/// A validated TSP instance.
///
/// # Examples
///
/// ```
/// use u_search::tsp::TspInstance;
///
/// let instance = TspInstance::new(vec![
///     vec![0, 10, 15, 20],
///     vec![10, 0, 35, 25],
///     vec![15, 35, 0, 30],
///     vec![20, 25, 30, 0],
/// ])
/// .unwrap();
/// assert_eq!(instance.len(), 4);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TspInstance {
    matrix: CostMatrix,
}

impl TspInstance {
    /// Builds an instance from matrix rows. Zero off the diagonal means "no edge".
    pub fn new(rows: Vec<Vec<i64>>) -> Result<Self, InstanceError> {
        let matrix = CostMatrix::from_rows(&rows)?;
        Self::from_matrix(matrix)
    }

    /// Builds an instance, checking the rows against a declared city count.
    pub fn with_city_count(n: usize, rows: Vec<Vec<i64>>) -> Result<Self, InstanceError> {
        if n == 0 {
            return Err(InstanceError::EmptyInstance);
        }
        if rows.len() != n {
            return Err(InstanceError::CityCountMismatch {
                declared: n,
                found: rows.len(),
            });
        }
        Self::new(rows)
    }

    /// Wraps an existing matrix.
    pub fn from_matrix(matrix: CostMatrix) -> Result<Self, InstanceError> {
        let n = matrix.len();
        if n == 0 {
            return Err(InstanceError::EmptyInstance);
        }
        if n > MAX_CITIES {
            return Err(InstanceError::TooManyCities { n, max: MAX_CITIES });
        }
        Ok(Self { matrix })
    }

    /// A complete instance with costs in `1..=max_cost`.
    pub fn random<R: Rng>(
        n: usize,
        max_cost: u64,
        symmetric: bool,
        rng: &mut R,
    ) -> Result<Self, InstanceError> {
        Self::from_matrix(CostMatrix::random(n, max_cost, symmetric, rng))
    }

    pub fn matrix(&self) -> &CostMatrix {
        &self.matrix
    }

    pub fn len(&self) -> usize {
        self.matrix.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matrix.is_empty()
    }
}

/// A closed tour starting and ending at city 0.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tour {
    /// Total cost of all edges, including the closing one.
    pub cost: u64,
    /// Cities in visiting order; the first city is repeated at the end.
    pub path: Vec<usize>,
}

impl fmt::Display for Tour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, city) in self.path.iter().enumerate() {
            if i > 0 {
                f.write_str(" -> ")?;
            }
            write!(f, "{city}")?;
        }
        Ok(())
    }
}

/// Optimal tour plus run statistics.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspSolution {
    /// Cheapest closed tour.
    pub tour: Tour,
    /// Root lower bound, ⌈Σ(first_min + second_min) / 2⌉.
    pub root_bound: u64,
    /// Incumbent cost after each improvement (strictly decreasing).
    pub cost_history: Vec<u64>,
    /// Driver counters for the run.
    pub stats: SearchStats,
}

/// Result of a TSP run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TspOutcome {
    Solved(TspSolution),
    /// Some city cannot be entered and left, or no Hamiltonian cycle exists.
    NoFeasibleTour,
}

impl TspOutcome {
    pub fn tour(&self) -> Option<&Tour> {
        match self {
            TspOutcome::Solved(s) => Some(&s.tour),
            TspOutcome::NoFeasibleTour => None,
        }
    }

    pub fn cost(&self) -> Option<u64> {
        self.tour().map(|t| t.cost)
    }
}
