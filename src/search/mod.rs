//! Generic bounded depth-first search.
//!
//! A single driver explores a tree of decisions one depth at a time. At
//! every frame it asks a [`BoundedSearch`] strategy whether a candidate
//! extension may be explored (feasibility check or numeric bound), and it
//! hands every complete assignment to the strategy, which decides whether
//! the search continues.
//!
//! # Key Components
//!
//! - **Strategy**: [`BoundedSearch`] — `prune` and `on_complete` hooks
//! - **State**: [`PartialAssignment`] — decision prefix with scoped undo
//! - **Incumbents**: [`Incumbent`] (keep best) and [`SolutionLog`] (keep all)
//! - **Driver**: [`SearchRunner`] — recursive or explicit-stack traversal
//!
//! # Design
//!
//! Exhaustive enumeration and single-best optimisation share the same
//! driver; they differ only in the termination policy the strategy applies
//! in `on_complete` and the pruning it applies in `prune`.
//!
//! # References
//!
//! Land, A. H. & Doig, A. G. (1960), "An Automatic Method of Solving
//! Discrete Programming Problems", *Econometrica* 28(3), 497-520.

mod assignment;
mod config;
mod incumbent;
mod runner;
mod types;

pub use assignment::{Extension, PartialAssignment};
pub use config::{SearchConfig, Traversal};
pub use incumbent::{Incumbent, SolutionLog};
pub use runner::{SearchReport, SearchRunner, SearchStats};
pub use types::{BoundedSearch, Control, Verdict};
