//! Exact Traveling Salesman by branch-and-bound.
//!
//! Tours start and end at city 0. The search extends a path prefix one
//! city at a time and discards any prefix whose running weight plus a
//! reduced-cost lower bound cannot beat the best tour found so far.
//!
//! # Key Components
//!
//! - **Instance**: [`TspInstance`] over a [`CostMatrix`] (zero = no edge)
//! - **Bound**: [`ReducedCostBound`] — two cheapest neighbour weights per city
//! - **Solver**: [`TspSolver`] and [`solve_batch`]
//!
//! Instance size is capped at [`MAX_CITIES`]: the search is exponential in
//! the worst case.

mod bound;
mod config;
mod matrix;
mod runner;
mod types;

pub use bound::{ceil_half, ReducedCostBound};
pub use config::TspConfig;
pub use matrix::CostMatrix;
pub use runner::{solve_batch, TspSolver};
pub use types::{Tour, TspInstance, TspOutcome, TspSolution, MAX_CITIES};
