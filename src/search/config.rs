//! Search driver configuration.

/// How the driver walks the decision tree.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Traversal {
    /// One call-stack frame per depth.
    Recursive,
    /// Heap-allocated frame stack holding (state, next candidate).
    ExplicitStack,
}

/// Configuration for [`SearchRunner`](super::SearchRunner).
///
/// # Examples
///
/// ```
/// use u_search::search::{SearchConfig, Traversal};
///
/// let config = SearchConfig::default()
///     .with_traversal(Traversal::ExplicitStack)
///     .with_max_recursion_depth(64);
/// assert_eq!(config.traversal, Traversal::ExplicitStack);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SearchConfig {
    /// Preferred traversal.
    pub traversal: Traversal,
    /// Deepest instance run recursively; deeper ones use the explicit stack.
    pub max_recursion_depth: usize,
}

impl Default for SearchConfig {
    fn default() -> Self {
        Self {
            traversal: Traversal::Recursive,
            max_recursion_depth: 512,
        }
    }
}

impl SearchConfig {
    /// Sets the preferred traversal.
    pub fn with_traversal(mut self, traversal: Traversal) -> Self {
        self.traversal = traversal;
        self
    }

    /// Sets the deepest instance run recursively.
    pub fn with_max_recursion_depth(mut self, depth: usize) -> Self {
        self.max_recursion_depth = depth;
        self
    }

    /// Traversal actually used for an instance of the given depth.
    pub fn effective_traversal(&self, depth: usize) -> Traversal {
        match self.traversal {
            Traversal::Recursive if depth > self.max_recursion_depth => Traversal::ExplicitStack,
            other => other,
        }
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_recursion_depth == 0 {
            return Err("max_recursion_depth must be at least 1".into());
        }
        Ok(())
    }
}
