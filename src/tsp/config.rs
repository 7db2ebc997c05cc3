//! TSP solver configuration.

use crate::search::SearchConfig;

/// Configuration parameters for a TSP run.
///
/// # Examples
///
/// ```
/// use u_search::search::{SearchConfig, Traversal};
/// use u_search::tsp::TspConfig;
///
/// let config = TspConfig::default()
///     .with_search(SearchConfig::default().with_traversal(Traversal::ExplicitStack))
///     .with_track_history(false);
/// assert!(!config.track_history);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TspConfig {
    /// Driver settings.
    pub search: SearchConfig,
    /// Report the incumbent cost after every improvement.
    pub track_history: bool,
}

impl Default for TspConfig {
    fn default() -> Self {
        Self {
            search: SearchConfig::default(),
            track_history: true,
        }
    }
}

impl TspConfig {
    /// Sets the driver settings.
    pub fn with_search(mut self, search: SearchConfig) -> Self {
        self.search = search;
        self
    }

    /// Sets whether the outcome carries the incumbent cost history.
    pub fn with_track_history(mut self, track: bool) -> Self {
        self.track_history = track;
        self
    }

    /// Validates the configuration.
    pub fn validate(&self) -> Result<(), String> {
        self.search.validate()
    }
}
