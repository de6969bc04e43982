//! Structural validation of game trees.
//!
//! ## Overview
//!
//! Validation is advisory. It walks the tree once, depth-first from the
//! root, and returns every rule breach it finds as a [`Violation`]. The
//! caller decides whether to reject the tree or render it anyway.
//!
//! | Rule | Checked at |
//! |------|-----------|
//! | `RootPlayer` | root: player present and not a placeholder |
//! | `TerminalPayoff` | terminal without payoff, or payoff on internal node |
//! | `TerminalActions` | terminal node that still lists actions |
//! | `DanglingNode` | internal node without actions |
//! | `ChoiceCardinality` | decision maker with fewer than two actions |
//! | `NatureProbability` | chance probabilities not summing to 1.0 |
//! | `SharedReference` | node reached from more than one parent |
//!
//! Nothing is repaired here; see [`collapse_forced_moves`](crate::model::collapse_forced_moves).
//!
//! ## Usage
//!
//! ```rust
//! use gametree::model::{GameTree, NestedNode, Payoff, Roster};
//! use gametree::validation::{validate, RuleId};
//!
//! let nested = NestedNode::internal("root", "Nature")
//!     .with_chance("Rain", 0.3, NestedNode::terminal("wet", Payoff::new("Wet")))
//!     .with_chance("Sun", 0.6, NestedNode::terminal("dry", Payoff::new("Dry")));
//! let tree = GameTree::from_nested(&nested);
//!
//! let violations = validate(&tree, &Roster::empty()).unwrap();
//! assert_eq!(violations.len(), 1);
//! assert_eq!(violations[0].rule, RuleId::NatureProbability);
//! ```

pub mod config;
pub mod rule;
pub mod validator;

pub use config::ValidationConfig;
pub use rule::{RuleId, Violation};
pub use validator::Validator;

use crate::error::TreeError;
use crate::model::{GameTree, Roster};

/// Validate `tree` with the default configuration.
pub fn validate(tree: &GameTree, roster: &Roster) -> Result<Vec<Violation>, TreeError> {
    Validator::new(roster).validate(tree)
}
