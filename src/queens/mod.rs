//! N-Queens enumeration by backtracking.
//!
//! Places one queen per row, left to right, rejecting any column that
//! shares a column or diagonal with an earlier queen. Every complete board
//! is a solution; the search enumerates all of them. Mirror and rotated
//! boards count as distinct solutions.
//!
//! # References
//!
//! Wirth, N. (1976). *Algorithms + Data Structures = Programs*, §3.5.

mod config;
mod runner;
mod types;

pub use config::QueensConfig;
pub use runner::{is_safe, QueensSolver};
pub use types::{render_board, QueensInstance, QueensOutcome, QueensSolutions};
