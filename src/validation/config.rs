//! Validation parameters.

use serde::{Deserialize, Serialize};

/// Validation parameters.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ValidationConfig {
    /// Allowed deviation of a chance node's probability sum from 1.0
    /// (default: 1e-3).
    pub probability_tolerance: f64,

    /// Minimum actions at a decision-maker node (default: 2).
    pub min_choices: usize,

    /// Root player names treated as "nobody assigned", compared
    /// case-insensitively (default: `["Unknown"]`).
    pub placeholder_names: Vec<String>,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            probability_tolerance: 1e-3,
            min_choices: 2,
            placeholder_names: vec!["Unknown".to_string()],
        }
    }
}

impl ValidationConfig {
    /// Create a new config with custom probability tolerance.
    pub fn with_tolerance(mut self, tolerance: f64) -> Self {
        self.probability_tolerance = tolerance;
        self
    }

    /// Create a new config with custom minimum choice count.
    pub fn with_min_choices(mut self, min: usize) -> Self {
        self.min_choices = min;
        self
    }

    /// Add a placeholder root player name.
    pub fn with_placeholder(mut self, name: impl Into<String>) -> Self {
        self.placeholder_names.push(name.into());
        self
    }

    /// True if `name` does not identify a real player.
    #[must_use]
    pub fn is_placeholder(&self, name: &str) -> bool {
        let name = name.trim();
        name.is_empty() || self.placeholder_names.iter().any(|p| p.eq_ignore_ascii_case(name))
    }
}
