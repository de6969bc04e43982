//! Terminal payoffs.

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Player name -> cardinal utility, in the order the model produced them.
pub type Utilities = IndexMap<String, f64>;

/// Utility vector of a terminal outcome.
///
/// Values are unbounded here; the modeling step is asked to keep them in
/// `[-100, 100]`.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Payoff {
    pub outcome_summary: String,
    #[serde(default)]
    pub utilities: Utilities,
}

impl Payoff {
    pub fn new(outcome_summary: impl Into<String>) -> Self {
        Self {
            outcome_summary: outcome_summary.into(),
            utilities: Utilities::new(),
        }
    }

    /// Add (or replace) a player's utility. Insertion order is kept.
    #[must_use]
    pub fn with_utility(mut self, player: impl Into<String>, value: f64) -> Self {
        self.utilities.insert(player.into(), value);
        self
    }

    #[must_use]
    pub fn utility(&self, player: &str) -> Option<f64> {
        self.utilities.get(player).copied()
    }
}
