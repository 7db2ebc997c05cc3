//! Core trait for bounded depth-first search problems.

use super::assignment::PartialAssignment;

/// Outcome of evaluating one candidate extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict<S> {
    /// Explore the candidate; carries the child frame's state.
    Allow(S),
    /// Skip the candidate without touching the assignment.
    Deny,
}

/// Whether the driver keeps searching after a completion.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Control {
    Continue,
    Stop,
}

/// Defines a problem for the bounded search driver.
///
/// Decisions are candidate indices in `0..width()`. The driver never offers
/// a candidate that is already used in the current assignment, so `prune`
/// only has to judge problem-specific feasibility.
///
/// Per-frame bookkeeping (running cost, running bound) lives in
/// [`State`](Self::State). It is passed by value into the child frame, so
/// backtracking restores the parent's state without any undo logic.
///
/// # Examples
///
/// ```
/// use u_search::search::{BoundedSearch, Control, PartialAssignment, Verdict};
///
/// /// Enumerates all permutations of `0..n`.
/// struct Permutations { n: usize, found: usize }
///
/// impl BoundedSearch for Permutations {
///     type State = ();
///     fn size(&self) -> usize { self.n }
///     fn width(&self) -> usize { self.n }
///     fn root_state(&self) {}
///     fn prune(&self, _a: &PartialAssignment, _s: &(), _c: usize) -> Verdict<()> {
///         Verdict::Allow(())
///     }
///     fn on_complete(&mut self, _a: &PartialAssignment, _s: &()) -> Control {
///         self.found += 1;
///         Control::Continue
///     }
/// }
/// ```
pub trait BoundedSearch {
    /// Bookkeeping carried from a frame to its children.
    type State: Clone;

    /// Depth at which an assignment is complete.
    fn size(&self) -> usize;

    /// Number of candidate decisions tried at every frame.
    fn width(&self) -> usize;

    /// A decision fixed before the search starts (e.g. a tour's root city).
    ///
    /// The driver extends it before exploring and retracts it afterwards.
    fn anchor(&self) -> Option<usize> {
        None
    }

    /// State of the root frame (after the anchor, if any, is placed).
    fn root_state(&self) -> Self::State;

    /// Judges `candidate` as the next decision after `assignment`.
    fn prune(
        &self,
        assignment: &PartialAssignment,
        state: &Self::State,
        candidate: usize,
    ) -> Verdict<Self::State>;

    /// Called once for every complete assignment reached.
    fn on_complete(&mut self, assignment: &PartialAssignment, state: &Self::State) -> Control;
}
