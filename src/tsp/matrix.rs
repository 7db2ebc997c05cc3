//! Owned square cost matrix.

use std::fmt;

use rand::Rng;

use crate::error::InstanceError;

/// Square matrix of non-negative edge costs.
///
/// An off-diagonal zero means "no direct edge". The diagonal is ignored.
/// Costs may be asymmetric. Every entry is at most
/// [`max_edge_cost`](Self::max_edge_cost), so tour totals and doubled
/// bounds stay exact in `u64`.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct CostMatrix {
    n: usize,
    costs: Vec<u64>,
}

impl CostMatrix {
    /// Largest edge cost accepted for an `n`-city matrix.
    ///
    /// A tour has `n` edges and the doubled bound sums two minima per city,
    /// so `2 * n * max_edge_cost(n)` must fit in `u64`.
    pub fn max_edge_cost(n: usize) -> u64 {
        u64::MAX / (2 * n.max(1) as u64)
    }

    /// Builds a matrix from rows, checking shape, signs and magnitude.
    pub fn from_rows(rows: &[Vec<i64>]) -> Result<Self, InstanceError> {
        let n = rows.len();
        if n == 0 {
            return Err(InstanceError::EmptyInstance);
        }
        let max = Self::max_edge_cost(n);
        let mut costs = Vec::with_capacity(n * n);
        for (i, row) in rows.iter().enumerate() {
            if row.len() != n {
                return Err(InstanceError::NotSquare {
                    row: i,
                    expected: n,
                    found: row.len(),
                });
            }
            for (j, &value) in row.iter().enumerate() {
                if value < 0 {
                    return Err(InstanceError::NegativeCost {
                        row: i,
                        col: j,
                        value,
                    });
                }
                if i == j {
                    costs.push(0);
                    continue;
                }
                let cost = value as u64;
                if cost > max {
                    return Err(InstanceError::CostTooLarge {
                        row: i,
                        col: j,
                        value,
                        n,
                        max,
                    });
                }
                costs.push(cost);
            }
        }
        Ok(Self { n, costs })
    }

    /// A complete graph with costs drawn uniformly from `1..=max_cost`.
    ///
    /// `max_cost` is clamped to `1..=`[`max_edge_cost(n)`](Self::max_edge_cost).
    pub fn random<R: Rng>(n: usize, max_cost: u64, symmetric: bool, rng: &mut R) -> Self {
        let max_cost = max_cost.clamp(1, Self::max_edge_cost(n));
        let mut costs = vec![0; n * n];
        for i in 0..n {
            for j in 0..n {
                if i == j || (symmetric && j < i) {
                    continue;
                }
                let c = rng.random_range(1..=max_cost);
                costs[i * n + j] = c;
                if symmetric {
                    costs[j * n + i] = c;
                }
            }
        }
        Self { n, costs }
    }

    pub fn len(&self) -> usize {
        self.n
    }

    pub fn is_empty(&self) -> bool {
        self.n == 0
    }

    /// Raw entry; 0 on the diagonal and for missing edges.
    pub fn cost(&self, from: usize, to: usize) -> u64 {
        self.costs[from * self.n + to]
    }

    /// Cost of the directed edge `from → to`, if it exists.
    pub fn edge(&self, from: usize, to: usize) -> Option<u64> {
        match self.cost(from, to) {
            0 => None,
            c if from != to => Some(c),
            _ => None,
        }
    }

    pub fn is_symmetric(&self) -> bool {
        (0..self.n).all(|i| (i + 1..self.n).all(|j| self.cost(i, j) == self.cost(j, i)))
    }

    /// Total cost of the closed tour visiting `path` in order, if every
    /// edge exists. `path` must not repeat its first city at the end.
    pub fn tour_cost(&self, path: &[usize]) -> Option<u64> {
        match path {
            [] => None,
            [_] => Some(0),
            _ => path
                .iter()
                .zip(path.iter().cycle().skip(1))
                .try_fold(0u64, |acc, (&a, &b)| Some(acc + self.edge(a, b)?)),
        }
    }
}

/// Table with city indices on both axes, one row per line.
impl fmt::Display for CostMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let digits = |v: u64| v.to_string().len();
        let width = self
            .costs
            .iter()
            .map(|&c| digits(c))
            .chain([digits(self.n as u64)])
            .max()
            .unwrap_or(1)
            .max(3)
            + 1;
        let label = digits(self.n.saturating_sub(1) as u64).max(2);

        write!(f, "{:label$}  ", "")?;
        for j in 0..self.n {
            write!(f, "{j:>width$}")?;
        }
        for i in 0..self.n {
            write!(f, "\n{i:>label$}: ")?;
            for j in 0..self.n {
                write!(f, "{:>width$}", self.cost(i, j))?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn sample() -> CostMatrix {
        CostMatrix::from_rows(&[
            vec![0, 10, 15, 20],
            vec![10, 0, 35, 25],
            vec![15, 35, 0, 30],
            vec![20, 25, 30, 0],
        ])
        .unwrap()
    }

    #[test]
    fn test_edges_and_diagonal() {
        let m = CostMatrix::from_rows(&[vec![7, 3], vec![0, 9]]).unwrap();
        assert_eq!(m.edge(0, 1), Some(3));
        assert_eq!(m.edge(1, 0), None);
        assert_eq!(m.edge(0, 0), None);
        assert_eq!(m.cost(0, 0), 0);
    }

    #[test]
    fn test_rejects_ragged_rows() {
        let err = CostMatrix::from_rows(&[vec![0, 1], vec![1]]).unwrap_err();
        assert_eq!(
            err,
            InstanceError::NotSquare {
                row: 1,
                expected: 2,
                found: 1
            }
        );
    }

    #[test]
    fn test_rejects_negative_cost() {
        let err = CostMatrix::from_rows(&[vec![0, -1], vec![1, 0]]).unwrap_err();
        assert!(matches!(err, InstanceError::NegativeCost { row: 0, col: 1, value: -1 }));
    }

    #[test]
    fn test_negative_diagonal_is_still_rejected() {
        assert!(CostMatrix::from_rows(&[vec![-3]]).is_err());
    }

    #[test]
    fn test_tour_cost() {
        let m = sample();
        assert_eq!(m.tour_cost(&[0, 1, 3, 2]), Some(80));
        assert_eq!(m.tour_cost(&[0, 2, 3, 1]), Some(80));
        assert_eq!(m.tour_cost(&[0, 1, 2, 3]), Some(95));
        assert_eq!(m.tour_cost(&[0]), Some(0));
    }

    #[test]
    fn test_tour_cost_missing_edge() {
        let m = CostMatrix::from_rows(&[vec![0, 1, 0], vec![1, 0, 1], vec![1, 1, 0]]).unwrap();
        assert_eq!(m.tour_cost(&[0, 1, 2]), Some(3));
        assert_eq!(m.tour_cost(&[0, 2, 1]), None);
    }

    #[test]
    fn test_rejects_costs_that_could_overflow_a_tour() {
        let big = i64::MAX;
        let err = CostMatrix::from_rows(&[
            vec![0, big, big, big],
            vec![big, 0, big, big - 1000],
            vec![big, big, 0, big],
            vec![big, big - 1000, big, 0],
        ])
        .unwrap_err();
        assert_eq!(
            err,
            InstanceError::CostTooLarge {
                row: 0,
                col: 1,
                value: big,
                n: 4,
                max: u64::MAX / 8,
            }
        );
    }

    #[test]
    fn test_largest_cost_keeps_totals_exact() {
        let max = CostMatrix::max_edge_cost(3);
        let c = max as i64;
        let m = CostMatrix::from_rows(&[vec![0, c, c], vec![c, 0, c], vec![c, c, 0]]).unwrap();
        assert_eq!(m.tour_cost(&[0, 1, 2]), Some(3 * max));
        assert!(CostMatrix::from_rows(&[vec![0, c + 1, c], vec![c, 0, c], vec![c, c, 0]]).is_err());
        // the diagonal is ignored, whatever its size
        assert!(CostMatrix::from_rows(&[vec![i64::MAX]]).is_ok());
    }

    #[test]
    fn test_display_table() {
        let m = CostMatrix::from_rows(&[vec![0, 3], vec![5, 0]]).unwrap();
        assert_eq!(m.to_string(), "       0   1\n 0:    0   3\n 1:    5   0");
        let wide = sample().to_string();
        assert_eq!(wide.lines().count(), 5);
        assert_eq!(wide.lines().nth(2), Some(" 1:   10   0  35  25"));
    }

    #[test]
    fn test_random_symmetric_is_complete() {
        let mut rng = StdRng::seed_from_u64(7);
        let m = CostMatrix::random(6, 50, true, &mut rng);
        assert!(m.is_symmetric());
        for i in 0..6 {
            for j in 0..6 {
                if i != j {
                    let c = m.edge(i, j).unwrap();
                    assert!((1..=50).contains(&c));
                }
            }
        }
    }
}
