//! N-Queens instance and outcome types.

use crate::error::InstanceError;
use crate::search::SearchStats;

/// A validated N-Queens board dimension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct QueensInstance {
    n: usize,
}

impl QueensInstance {
    /// Creates an instance for an `n × n` board.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_search::queens::QueensInstance;
    ///
    /// assert!(QueensInstance::new(8).is_ok());
    /// assert!(QueensInstance::new(0).is_err());
    /// assert!(QueensInstance::new(3).unwrap().is_unsolvable());
    /// ```
    pub fn new(n: usize) -> Result<Self, InstanceError> {
        if n == 0 {
            return Err(InstanceError::EmptyInstance);
        }
        Ok(Self { n })
    }

    pub fn n(&self) -> usize {
        self.n
    }

    /// Boards of size 2 and 3 admit no placement.
    pub fn is_unsolvable(&self) -> bool {
        matches!(self.n, 2 | 3)
    }
}

/// Every board found by an N-Queens run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueensSolutions {
    /// Number of solutions found.
    pub count: u64,
    /// Boards in discovery order (empty unless recording was enabled).
    ///
    /// `board[row]` is the queen's column in that row.
    pub boards: Vec<Vec<usize>>,
    /// Whether the run stopped at the configured solution limit.
    pub truncated: bool,
    /// Driver counters for the run.
    pub stats: SearchStats,
}

/// Result of an N-Queens run.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum QueensOutcome {
    Solved(QueensSolutions),
    NoSolution,
}

impl QueensOutcome {
    pub fn is_solved(&self) -> bool {
        matches!(self, QueensOutcome::Solved(_))
    }

    /// Number of solutions; zero for `NoSolution`.
    pub fn count(&self) -> u64 {
        match self {
            QueensOutcome::Solved(s) => s.count,
            QueensOutcome::NoSolution => 0,
        }
    }

    pub fn boards(&self) -> &[Vec<usize>] {
        match self {
            QueensOutcome::Solved(s) => &s.boards,
            QueensOutcome::NoSolution => &[],
        }
    }
}

/// Renders a board as a grid of `Q` and `.` framed by dashed rules.
///
/// # Examples
///
/// ```
/// use u_search::queens::render_board;
///
/// let grid = render_board(&[1, 3, 0, 2]);
/// assert_eq!(grid.lines().nth(1), Some(". Q . ."));
/// ```
pub fn render_board(board: &[usize]) -> String {
    let n = board.len();
    let rule = "-".repeat(n * 2 + 1);
    let mut out = String::with_capacity((n * 2 + 2) * (n + 2));
    out.push_str(&rule);
    out.push('\n');
    for &col in board {
        let row: Vec<&str> = (0..n).map(|c| if c == col { "Q" } else { "." }).collect();
        out.push_str(&row.join(" "));
        out.push('\n');
    }
    out.push_str(&rule);
    out
}
