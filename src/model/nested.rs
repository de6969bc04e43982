//! Owned, recursive form of a game tree.
//!
//! This is the shape the modeling step emits: every action owns the node it
//! leads to by value. Field names follow the analysis JSON document.
//! [`GameTree::from_nested`](super::GameTree::from_nested) turns it into the
//! arena form used by validation and rendering.

use serde::{Deserialize, Serialize};

use super::payoff::Payoff;

/// A node owning its subtree.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct NestedNode {
    pub id: String,
    #[serde(default)]
    pub current_player_name: Option<String>,
    #[serde(default)]
    pub is_terminal: bool,
    #[serde(default)]
    pub actions: Option<Vec<NestedAction>>,
    #[serde(default)]
    pub payoff: Option<Payoff>,
}

/// An action owning the node it leads to.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct NestedAction {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub probability: Option<f64>,
    pub next_node: Box<NestedNode>,
}

impl NestedNode {
    pub fn internal(id: impl Into<String>, player: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            current_player_name: Some(player.into()),
            ..Self::default()
        }
    }

    pub fn terminal(id: impl Into<String>, payoff: Payoff) -> Self {
        Self {
            id: id.into(),
            is_terminal: true,
            payoff: Some(payoff),
            ..Self::default()
        }
    }

    /// Append an action leading to `next`.
    #[must_use]
    pub fn with_action(self, name: impl Into<String>, next: NestedNode) -> Self {
        self.push(NestedAction {
            name: name.into(),
            description: String::new(),
            probability: None,
            next_node: Box::new(next),
        })
    }

    /// Append a chance branch leading to `next`.
    #[must_use]
    pub fn with_chance(self, name: impl Into<String>, probability: f64, next: NestedNode) -> Self {
        self.push(NestedAction {
            name: name.into(),
            description: String::new(),
            probability: Some(probability),
            next_node: Box::new(next),
        })
    }

    fn push(mut self, action: NestedAction) -> Self {
        self.actions.get_or_insert_with(Vec::new).push(action);
        self
    }

    /// Number of nodes in this subtree.
    #[must_use]
    pub fn size(&self) -> usize {
        let mut count = 0;
        let mut stack = vec![self];
        while let Some(node) = stack.pop() {
            count += 1;
            stack.extend(node.actions.iter().flatten().map(|a| &*a.next_node));
        }
        count
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_deserialize_minimal_node() {
        let node: NestedNode = serde_json::from_str(r#"{"id":"leaf"}"#).unwrap();
        assert_eq!(node.id, "leaf");
        assert!(node.current_player_name.is_none());
        assert!(!node.is_terminal);
        assert!(node.actions.is_none());
        assert!(node.payoff.is_none());
    }

    #[test]
    fn test_deserialize_recursive() {
        let json = r#"{
            "id": "root",
            "current_player_name": "Nature",
            "actions": [
                {"name": "Rain", "description": "", "probability": 0.4,
                 "next_node": {"id": "wet", "is_terminal": true,
                               "payoff": {"outcome_summary": "Wet", "utilities": {"A": -1}}}},
                {"name": "Sun", "probability": 0.6,
                 "next_node": {"id": "dry", "is_terminal": true,
                               "payoff": {"outcome_summary": "Dry", "utilities": {"A": 1}}}}
            ]
        }"#;
        let node: NestedNode = serde_json::from_str(json).unwrap();

        let actions = node.actions.as_ref().unwrap();
        assert_eq!(actions.len(), 2);
        assert_eq!(actions[1].probability, Some(0.6));
        assert_eq!(actions[1].next_node.id, "dry");
        assert_eq!(node.size(), 3);
    }

    #[test]
    fn test_builder_helpers() {
        let node = NestedNode::internal("root", "A")
            .with_action("x", NestedNode::terminal("t1", Payoff::new("one")))
            .with_chance("y", 0.5, NestedNode::terminal("t2", Payoff::new("two")));

        let actions = node.actions.unwrap();
        assert_eq!(actions[0].probability, None);
        assert_eq!(actions[1].probability, Some(0.5));
    }
}
