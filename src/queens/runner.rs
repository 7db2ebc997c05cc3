//! N-Queens solver built on the bounded search driver.

use super::config::QueensConfig;
use super::types::{QueensInstance, QueensOutcome, QueensSolutions};
use crate::search::{BoundedSearch, Control, PartialAssignment, SearchRunner, SolutionLog, Verdict};

/// Whether a queen at (`row`, `col`) is attacked by the queens in
/// `board[..row]`.
///
/// `board[r]` is the column of the queen in row `r`. Only rows before
/// `row` are inspected, so `board` may be a partial placement; rows past
/// the end of `board` are treated as empty.
///
/// # Examples
///
/// ```
/// use u_search::queens::is_safe;
///
/// let board = [1, 3];
/// assert!(is_safe(&board, 2, 0));
/// assert!(!is_safe(&board, 2, 2)); // diagonal with row 1
/// assert!(!is_safe(&board, 2, 1)); // column of row 0
/// ```
pub fn is_safe(board: &[usize], row: usize, col: usize) -> bool {
    board
        .iter()
        .take(row)
        .enumerate()
        .all(|(r, &c)| c != col && c.abs_diff(col) != row - r)
}

/// Strategy: feasibility-only pruning, every completion is logged.
struct QueensSearch<F> {
    n: usize,
    log: SolutionLog,
    limit: Option<u64>,
    on_board: F,
}

impl<F: FnMut(&[usize])> BoundedSearch for QueensSearch<F> {
    type State = ();

    fn size(&self) -> usize {
        self.n
    }

    fn width(&self) -> usize {
        self.n
    }

    fn root_state(&self) {}

    fn prune(&self, assignment: &PartialAssignment, _state: &(), col: usize) -> Verdict<()> {
        if is_safe(assignment.decisions(), assignment.depth(), col) {
            Verdict::Allow(())
        } else {
            Verdict::Deny
        }
    }

    fn on_complete(&mut self, assignment: &PartialAssignment, _state: &()) -> Control {
        let board = assignment.decisions();
        let count = self.log.record(board);
        (self.on_board)(board);
        match self.limit {
            Some(k) if count >= k => Control::Stop,
            _ => Control::Continue,
        }
    }
}

/// N-Queens solver.
pub struct QueensSolver;

impl QueensSolver {
    /// Enumerates the solutions of `instance`.
    ///
    /// # Panics
    ///
    /// Panics if `config` fails validation.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_search::queens::{QueensConfig, QueensInstance, QueensSolver};
    ///
    /// let instance = QueensInstance::new(4).unwrap();
    /// let config = QueensConfig::default().with_record_boards(true);
    /// let outcome = QueensSolver::solve(&instance, &config);
    /// assert_eq!(outcome.count(), 2);
    /// assert_eq!(outcome.boards(), &[vec![1, 3, 0, 2], vec![2, 0, 3, 1]]);
    /// ```
    pub fn solve(instance: &QueensInstance, config: &QueensConfig) -> QueensOutcome {
        Self::solve_with(instance, config, |_| {})
    }

    /// Like [`solve`](Self::solve), calling `on_board` synchronously with
    /// each board as soon as it is found.
    pub fn solve_with<F>(
        instance: &QueensInstance,
        config: &QueensConfig,
        on_board: F,
    ) -> QueensOutcome
    where
        F: FnMut(&[usize]),
    {
        config.validate().expect("invalid QueensConfig");

        if instance.is_unsolvable() {
            log::debug!("{}-queens has no solution; search skipped", instance.n());
            return QueensOutcome::NoSolution;
        }

        let mut problem = QueensSearch {
            n: instance.n(),
            log: SolutionLog::new(config.record_boards),
            limit: config.max_solutions,
            on_board,
        };
        let report = SearchRunner::run(&mut problem, &config.search);

        let count = problem.log.count();
        if count == 0 {
            return QueensOutcome::NoSolution;
        }
        QueensOutcome::Solved(QueensSolutions {
            count,
            boards: problem.log.into_entries(),
            truncated: report.stopped,
            stats: report.stats,
        })
    }
}
