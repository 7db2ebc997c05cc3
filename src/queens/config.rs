//! N-Queens configuration.

use crate::search::SearchConfig;

/// Configuration parameters for an N-Queens run.
///
/// # Examples
///
/// ```
/// use u_search::queens::QueensConfig;
///
/// let config = QueensConfig::default()
///     .with_record_boards(true)
///     .with_max_solutions(10);
/// assert!(config.record_boards);
/// assert_eq!(config.max_solutions, Some(10));
/// ```
#[derive(Debug, Clone, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QueensConfig {
    /// Driver settings.
    pub search: SearchConfig,
    /// Keep every board in the outcome, not just the count.
    pub record_boards: bool,
    /// Stop after this many solutions (None for exhaustive enumeration).
    pub max_solutions: Option<u64>,
}

impl QueensConfig {
    /// Sets the driver settings.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Sets whether every board is kept in the outcome.
    pub fn with_record_boards(mut self, record: bool) -> Self {
        self.record_boards = record;
        self
    }

    /// Stops enumeration after `k` solutions.
    pub fn with_max_solutions(mut self, k: u64) -> Self {
        self.max_solutions = Some(k);
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        if self.max_solutions == Some(0) {
            return Err("max_solutions must be at least 1 or None".into());
        }
        self.search.validate()
    }
}
