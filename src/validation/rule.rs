//! Rule identifiers and violation records.

use serde::{Deserialize, Serialize};

/// Structural rule a node can break.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RuleId {
    /// The root names a concrete player.
    RootPlayer,
    /// A decision maker has a real choice.
    ChoiceCardinality,
    /// Chance branches form a probability distribution.
    NatureProbability,
    /// Terminal nodes and payoffs come together.
    TerminalPayoff,
    /// Internal nodes lead somewhere.
    DanglingNode,
    /// Terminal nodes list no actions.
    TerminalActions,
    /// Each node has a single parent.
    SharedReference,
}

impl RuleId {
    /// All rules, in the order they are checked at a node.
    pub const ALL: [RuleId; 7] = [
        RuleId::RootPlayer,
        RuleId::TerminalPayoff,
        RuleId::TerminalActions,
        RuleId::DanglingNode,
        RuleId::ChoiceCardinality,
        RuleId::NatureProbability,
        RuleId::SharedReference,
    ];

    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            RuleId::RootPlayer => "RootPlayer",
            RuleId::ChoiceCardinality => "ChoiceCardinality",
            RuleId::NatureProbability => "NatureProbability",
            RuleId::TerminalPayoff => "TerminalPayoff",
            RuleId::DanglingNode => "DanglingNode",
            RuleId::TerminalActions => "TerminalActions",
            RuleId::SharedReference => "SharedReference",
        }
    }
}

impl std::fmt::Display for RuleId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// A recorded rule breach. Data, not an error.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Violation {
    /// `id` field of the offending node.
    pub node_id: String,
    pub rule: RuleId,
    pub message: String,
}

impl Violation {
    pub fn new(node_id: impl Into<String>, rule: RuleId, message: impl Into<String>) -> Self {
        Self {
            node_id: node_id.into(),
            rule,
            message: message.into(),
        }
    }
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "[{}] node '{}': {}", self.rule, self.node_id, self.message)
    }
}
