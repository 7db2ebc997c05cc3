//! Exact bounded depth-first search.
//!
//! Provides one generic search driver and two problems built on it:
//!
//! - **Search**: Depth-first driver parameterised by a strategy that prunes
//!   candidate extensions and decides what to do with complete assignments.
//!   Backtracking is scoped, so every extension is undone on every exit
//!   path.
//! - **N-Queens**: Backtracking enumeration of every non-attacking
//!   placement, with pure feasibility pruning.
//! - **TSP**: Branch-and-bound over path prefixes with an admissible
//!   reduced-cost lower bound, keeping the cheapest closed tour.
//!
//! # Architecture
//!
//! Instances are validated once at construction ([`InstanceError`]).
//! Solvers report typed outcomes: an unsolvable instance is a result
//! (`NoSolution`, `NoFeasibleTour`), never an error. Each search is
//! single-threaded and owns its partial assignment and incumbent.

pub mod error;
pub mod queens;
pub mod search;
pub mod tsp;

pub use error::InstanceError;
