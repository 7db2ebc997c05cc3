//! Bounded depth-first search execution engine.
//!
//! # Algorithm
//!
//! 1. Place the strategy's anchor decision, if any
//! 2. At each frame of depth `d`:
//!    a. If `d == size`, hand the assignment to `on_complete`
//!    b. Otherwise, for each unused candidate in ascending order, ask
//!    `prune`; on `Allow`, extend, descend, and retract
//! 3. Stop when every frame is exhausted or `on_complete` returns `Stop`
//!
//! Both traversals visit frames in the same order and make the same
//! strategy calls, so their results are identical.

use std::ops::Deref;

use super::assignment::PartialAssignment;
use super::config::{SearchConfig, Traversal};
use super::types::{BoundedSearch, Control, Verdict};

/// Counters collected during one search.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchStats {
    /// Frames entered, including the root.
    pub nodes: u64,
    /// Candidates rejected by `prune`.
    pub pruned: u64,
    /// Frames that reached full depth and were handed to `on_complete`.
    pub completions: u64,
}

/// Result of a search run.
///
/// The findings themselves live in the strategy's incumbent tracker.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchReport {
    /// Node, prune and completion counters.
    pub stats: SearchStats,
    /// Traversal that was actually used.
    pub traversal: Traversal,
    /// Whether `on_complete` ended the search early.
    pub stopped: bool,
}

struct Frame<S> {
    state: S,
    next: usize,
}

/// Bounded depth-first search runner.
pub struct SearchRunner;

impl SearchRunner {
    /// Runs the search on a fresh assignment.
    ///
    /// # Examples
    ///
    /// ```
    /// use u_search::search::{
    ///     BoundedSearch, Control, PartialAssignment, SearchConfig, SearchRunner, Verdict,
    /// };
    ///
    /// struct Subsets { n: usize, count: u32 }
    ///
    /// impl BoundedSearch for Subsets {
    ///     type State = ();
    ///     fn size(&self) -> usize { 2 }
    ///     fn width(&self) -> usize { self.n }
    ///     fn root_state(&self) {}
    ///     fn prune(&self, a: &PartialAssignment, _: &(), c: usize) -> Verdict<()> {
    ///         // increasing sequences only
    ///         match a.last() {
    ///             Some(prev) if c < prev => Verdict::Deny,
    ///             _ => Verdict::Allow(()),
    ///         }
    ///     }
    ///     fn on_complete(&mut self, _: &PartialAssignment, _: &()) -> Control {
    ///         self.count += 1;
    ///         Control::Continue
    ///     }
    /// }
    ///
    /// let mut problem = Subsets { n: 4, count: 0 };
    /// let report = SearchRunner::run(&mut problem, &SearchConfig::default());
    /// assert_eq!(problem.count, 6); // C(4, 2)
    /// assert!(!report.stopped);
    /// ```
    pub fn run<P: BoundedSearch>(problem: &mut P, config: &SearchConfig) -> SearchReport {
        let mut assignment = PartialAssignment::new(problem.size(), problem.width());
        Self::run_in(problem, config, &mut assignment)
    }

    /// Runs the search on a caller-owned assignment.
    ///
    /// The assignment is returned to the state it was passed in, whether
    /// the search is exhausted or stopped early.
    pub fn run_in<P: BoundedSearch>(
        problem: &mut P,
        config: &SearchConfig,
        assignment: &mut PartialAssignment,
    ) -> SearchReport {
        let traversal = config.effective_traversal(problem.size());
        let mut stats = SearchStats::default();

        log::debug!(
            "bounded search started: size={}, width={}, traversal={:?}",
            problem.size(),
            problem.width(),
            traversal
        );

        let control = match problem.anchor() {
            Some(anchor) => {
                let mut scope = assignment.extend_scoped(anchor);
                Self::explore(problem, &mut scope, traversal, &mut stats)
            }
            None => Self::explore(problem, assignment, traversal, &mut stats),
        };

        log::debug!(
            "bounded search finished: nodes={}, pruned={}, completions={}, stopped={}",
            stats.nodes,
            stats.pruned,
            stats.completions,
            control == Control::Stop
        );

        SearchReport {
            stats,
            traversal,
            stopped: control == Control::Stop,
        }
    }

    fn explore<P: BoundedSearch>(
        problem: &mut P,
        assignment: &mut PartialAssignment,
        traversal: Traversal,
        stats: &mut SearchStats,
    ) -> Control {
        let root = problem.root_state();
        match traversal {
            Traversal::Recursive => descend(problem, assignment, &root, stats),
            Traversal::ExplicitStack => walk(problem, assignment, root, stats),
        }
    }
}

/// Recursive traversal; the scope guard retracts on every exit.
fn descend<P: BoundedSearch>(
    problem: &mut P,
    assignment: &mut PartialAssignment,
    state: &P::State,
    stats: &mut SearchStats,
) -> Control {
    stats.nodes += 1;
    if assignment.is_complete() {
        stats.completions += 1;
        return problem.on_complete(assignment, state);
    }

    for candidate in 0..problem.width() {
        if assignment.is_used(candidate) {
            continue;
        }
        let child = match problem.prune(assignment, state, candidate) {
            Verdict::Allow(child) => child,
            Verdict::Deny => {
                stats.pruned += 1;
                continue;
            }
        };

        let mut scope = assignment.extend_scoped(candidate);
        if descend(problem, &mut scope, &child, stats) == Control::Stop {
            return Control::Stop;
        }
    }
    Control::Continue
}

/// Extensions made by the explicit-stack walk.
///
/// Dropping the trail retracts every extension it still owns, including
/// while a panic unwinds.
struct Trail<'a> {
    assignment: &'a mut PartialAssignment,
    owned: usize,
}

impl<'a> Trail<'a> {
    fn new(assignment: &'a mut PartialAssignment) -> Self {
        Self {
            assignment,
            owned: 0,
        }
    }

    fn extend(&mut self, decision: usize) {
        self.assignment.extend(decision);
        self.owned += 1;
    }

    /// Retracts the newest owned extension; no-op when none is owned.
    fn retract(&mut self) {
        if self.owned > 0 {
            self.assignment.retract();
            self.owned -= 1;
        }
    }
}

impl Deref for Trail<'_> {
    type Target = PartialAssignment;

    fn deref(&self) -> &PartialAssignment {
        self.assignment
    }
}

impl Drop for Trail<'_> {
    fn drop(&mut self) {
        while self.owned > 0 {
            self.retract();
        }
    }
}

/// Explicit-stack traversal.
///
/// Every frame above the bottom one owns exactly one extension in the
/// trail, which is retracted when the frame is popped.
fn walk<P: BoundedSearch>(
    problem: &mut P,
    assignment: &mut PartialAssignment,
    root: P::State,
    stats: &mut SearchStats,
) -> Control {
    let mut stack: Vec<Frame<P::State>> = Vec::with_capacity(problem.size() + 1);
    let mut trail = Trail::new(assignment);

    let mut control = enter(problem, &trail, root, &mut stack, stats);

    while control == Control::Continue {
        let next = match stack.last_mut() {
            Some(frame) => next_child(problem, &trail, frame, stats),
            None => break,
        };

        match next {
            Some((candidate, child)) => {
                trail.extend(candidate);
                let depth = stack.len();
                control = enter(problem, &trail, child, &mut stack, stats);
                if stack.len() == depth {
                    // leaf: no frame was pushed to own the extension
                    trail.retract();
                }
            }
            None => {
                // the bottom frame owns nothing, so this is a no-op there
                stack.pop();
                trail.retract();
            }
        }
    }

    // An early stop leaves extensions owned by live frames; the trail
    // retracts them when dropped.
    control
}

/// Enters a frame: leaves go straight to `on_complete`, inner frames are pushed.
fn enter<P: BoundedSearch>(
    problem: &mut P,
    assignment: &PartialAssignment,
    state: P::State,
    stack: &mut Vec<Frame<P::State>>,
    stats: &mut SearchStats,
) -> Control {
    stats.nodes += 1;
    if assignment.is_complete() {
        stats.completions += 1;
        return problem.on_complete(assignment, &state);
    }
    stack.push(Frame { state, next: 0 });
    Control::Continue
}

/// Advances `frame` to its next admissible candidate.
fn next_child<P: BoundedSearch>(
    problem: &P,
    assignment: &PartialAssignment,
    frame: &mut Frame<P::State>,
    stats: &mut SearchStats,
) -> Option<(usize, P::State)> {
    while frame.next < problem.width() {
        let candidate = frame.next;
        frame.next += 1;
        if assignment.is_used(candidate) {
            continue;
        }
        match problem.prune(assignment, &frame.state, candidate) {
            Verdict::Allow(child) => return Some((candidate, child)),
            Verdict::Deny => stats.pruned += 1,
        }
    }
    None
}
