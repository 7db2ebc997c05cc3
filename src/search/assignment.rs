//! Partial assignment with paired extend/retract.

use std::ops::{Deref, DerefMut};

/// An in-progress decision sequence plus a used-marker set.
///
/// Slot `d` holds the decision taken at depth `d`. The used markers give
/// O(1) membership checks for candidates in `0..width`.
///
/// # Examples
///
/// ```
/// use u_search::search::PartialAssignment;
///
/// let mut assignment = PartialAssignment::new(3, 3);
/// {
///     let scope = assignment.extend_scoped(2);
///     assert_eq!(scope.decisions(), &[2]);
///     assert!(scope.is_used(2));
/// }
/// assert!(assignment.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartialAssignment {
    size: usize,
    decisions: Vec<usize>,
    used: Vec<bool>,
}

impl PartialAssignment {
    /// Creates an empty assignment of `size` decisions over `0..width`.
    pub fn new(size: usize, width: usize) -> Self {
        Self {
            size,
            decisions: Vec::with_capacity(size),
            used: vec![false; width],
        }
    }

    /// Appends `decision` and marks it used.
    ///
    /// # Panics
    ///
    /// Panics if `decision` is out of range. Extending with a decision that
    /// is already used is a caller bug and trips a debug assertion.
    pub fn extend(&mut self, decision: usize) {
        debug_assert!(!self.used[decision], "decision {decision} already used");
        self.used[decision] = true;
        self.decisions.push(decision);
    }

    /// Removes the most recent decision and clears its marker.
    pub fn retract(&mut self) -> Option<usize> {
        let decision = self.decisions.pop()?;
        self.used[decision] = false;
        Some(decision)
    }

    /// Extends with `decision`; the returned guard retracts it on drop.
    pub fn extend_scoped(&mut self, decision: usize) -> Extension<'_> {
        self.extend(decision);
        Extension { assignment: self }
    }

    pub fn is_complete(&self) -> bool {
        self.decisions.len() == self.size
    }

    pub fn is_empty(&self) -> bool {
        self.decisions.is_empty()
    }

    pub fn is_used(&self, decision: usize) -> bool {
        self.used.get(decision).copied().unwrap_or(false)
    }

    /// Current search depth.
    pub fn depth(&self) -> usize {
        self.decisions.len()
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn last(&self) -> Option<usize> {
        self.decisions.last().copied()
    }

    pub fn decisions(&self) -> &[usize] {
        &self.decisions
    }
}

/// Scope guard returned by [`PartialAssignment::extend_scoped`].
///
/// Dereferences to the underlying assignment. Dropping it retracts exactly
/// the decision it placed, on every exit path including unwinding.
#[derive(Debug)]
pub struct Extension<'a> {
    assignment: &'a mut PartialAssignment,
}

impl Deref for Extension<'_> {
    type Target = PartialAssignment;

    fn deref(&self) -> &PartialAssignment {
        self.assignment
    }
}

impl DerefMut for Extension<'_> {
    fn deref_mut(&mut self) -> &mut PartialAssignment {
        self.assignment
    }
}

impl Drop for Extension<'_> {
    fn drop(&mut self) {
        self.assignment.retract();
    }
}
