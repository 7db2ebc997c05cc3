//! Reduced-cost lower bound for branch-and-bound TSP.
//!
//! Every city in a tour touches two tour edges leading to two distinct
//! neighbours, and every edge touches two cities. Charging each city the two
//! cheapest edge weights to distinct neighbours and halving the total gives
//! a lower bound on any tour.
//!
//! The bound is carried in doubled units (the raw sum of charges) so the
//! halving never truncates; [`ceil_half`] converts it back to tour units.
//!
//! # Incremental update
//!
//! Along a path prefix `p0 → … → pk` the remaining charge is:
//!
//! | city                 | charge                        |
//! |----------------------|-------------------------------|
//! | root `p0`            | `first_min` (closing edge)    |
//! | head `pk`            | `first_min` (leaving edge)    |
//! | interior `p1..pk-1`  | nothing, both edges are paid  |
//! | unvisited            | `first_min + second_min`      |
//!
//! so stepping `u → v` removes `edge_selector(u) + second_min(v)` from the
//! doubled bound, where `edge_selector(u)` is `second_min(u)` when `u` is
//! the root and `first_min(u)` otherwise.

use super::matrix::CostMatrix;

/// Smallest and second-smallest neighbour weights per city.
///
/// The weight to neighbour `j` is the cheaper existing direction of
/// `i → j` and `j → i`; on symmetric matrices that is simply `cost[i][j]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReducedCostBound {
    first: Vec<u64>,
    second: Vec<u64>,
    root: u64,
}

impl ReducedCostBound {
    /// Computes per-city minima and the root bound.
    ///
    /// Returns `None` when some city has fewer than two reachable
    /// neighbours on an instance of three or more cities: no Hamiltonian
    /// cycle can exist then. Instances of one or two cities get a zero
    /// bound.
    pub fn new(matrix: &CostMatrix) -> Option<Self> {
        let n = matrix.len();
        if n <= 2 {
            return Some(Self {
                first: vec![0; n],
                second: vec![0; n],
                root: 0,
            });
        }

        let mut first = Vec::with_capacity(n);
        let mut second = Vec::with_capacity(n);
        for i in 0..n {
            let (f, s) = two_smallest((0..n).filter_map(|j| neighbour_weight(matrix, i, j)))?;
            first.push(f);
            second.push(s);
        }
        let root = first.iter().zip(&second).map(|(&f, &s)| f + s).sum();
        Some(Self {
            first,
            second,
            root,
        })
    }

    pub fn first_min(&self, city: usize) -> u64 {
        self.first[city]
    }

    pub fn second_min(&self, city: usize) -> u64 {
        self.second[city]
    }

    /// Root bound in doubled units.
    pub fn root_doubled(&self) -> u64 {
        self.root
    }

    /// Root bound in tour units: ⌈Σ(first_min + second_min) / 2⌉.
    pub fn root_bound(&self) -> u64 {
        ceil_half(self.root)
    }

    /// Charge released at `u` when the path leaves it.
    ///
    /// `depth` is the path length before the step, so `depth == 1` means
    /// `u` is the root.
    pub fn edge_selector(&self, u: usize, depth: usize) -> u64 {
        if depth == 1 {
            self.second[u]
        } else {
            self.first[u]
        }
    }

    /// Doubled bound after extending a path of length `depth` from `u` to `v`.
    pub fn step(&self, doubled: u64, u: usize, v: usize, depth: usize) -> u64 {
        doubled.saturating_sub(self.edge_selector(u, depth).saturating_add(self.second[v]))
    }
}

/// ⌈x / 2⌉
pub fn ceil_half(doubled: u64) -> u64 {
    doubled / 2 + doubled % 2
}

fn neighbour_weight(matrix: &CostMatrix, i: usize, j: usize) -> Option<u64> {
    match (matrix.edge(i, j), matrix.edge(j, i)) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, b) => a.or(b),
    }
}

/// Two smallest values, ties allowed (`[5, 5, 7]` gives `(5, 5)`).
fn two_smallest(values: impl Iterator<Item = u64>) -> Option<(u64, u64)> {
    let mut first = None;
    let mut second = None;
    for v in values {
        match first {
            Some(f) if v >= f => {
                if second.map_or(true, |s| v < s) {
                    second = Some(v);
                }
            }
            _ => {
                second = first;
                first = Some(v);
            }
        }
    }
    Some((first?, second?))
}
