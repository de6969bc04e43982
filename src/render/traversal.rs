//! Depth-first render pass.
//!
//! ## Algorithm
//!
//! Pre-order from the root. Each node is keyed by its arena handle, given a
//! label and a role-dependent shape and style, and then each action in
//! authored order renders its target before the connecting edge is
//! emitted. Terminal nodes and internal nodes without actions end a
//! branch. The walk is iterative, so depth is limited only by memory.
//!
//! Missing optional fields fall back to defined text; only a missing root
//! or a malformed reference aborts.

use super::config::RenderConfig;
use super::graph::{GraphDescription, GraphEdge, GraphNode, NodeShape};
use super::wrap::{format_value, wrap};
use crate::error::TreeError;
use crate::model::walk::{Step, Walk};
use crate::model::{Action, GameNode, GameTree, NodeId};

/// Render pass over one tree.
pub struct Renderer<'c> {
    config: &'c RenderConfig,
}

impl<'c> Renderer<'c> {
    pub fn new(config: &'c RenderConfig) -> Self {
        Self { config }
    }

    /// Render `tree` into a graph description.
    pub fn render(&self, tree: &GameTree) -> Result<GraphDescription, TreeError> {
        let mut graph = GraphDescription::default();

        for step in Walk::new(tree)? {
            match step? {
                Step::Enter { id, node, .. } => graph.nodes.push(self.graph_node(id, node)),
                Step::Edge { from, action, .. } => graph.edges.push(GraphEdge {
                    from: GraphNode::key(from),
                    to: GraphNode::key(action.next_node),
                    label: self.edge_label(action),
                }),
            }
        }
        Ok(graph)
    }

    fn graph_node(&self, id: NodeId, node: &GameNode) -> GraphNode {
        let (shape, style) = if node.is_terminal {
            (NodeShape::Box, &self.config.terminal_style)
        } else if node.is_nature() {
            (NodeShape::Diamond, &self.config.chance_style)
        } else {
            (NodeShape::Ellipse, &self.config.decision_style)
        };
        GraphNode {
            id: GraphNode::key(id),
            source_id: node.id.clone(),
            label: self.node_label(node),
            shape,
            style: style.clone(),
        }
    }

    /// Label text for a node.
    #[must_use]
    pub fn node_label(&self, node: &GameNode) -> String {
        if node.is_terminal {
            let (outcome, payoffs) = match &node.payoff {
                Some(payoff) => (
                    wrap(&payoff.outcome_summary, self.config.outcome_width),
                    payoff
                        .utilities
                        .iter()
                        .map(|(player, value)| format!("{}: {}", player, format_value(*value)))
                        .collect::<Vec<_>>()
                        .join("\n"),
                ),
                None => (String::new(), String::new()),
            };
            format!("Outcome:\n{}\n\nPayoffs:\n{}", outcome, payoffs)
        } else {
            let player = node.player().unwrap_or(self.config.fallback_player.as_str());
            format!("{}\n{}", wrap(player, self.config.player_width), self.config.moves_marker)
        }
    }

    /// Label text for an edge.
    #[must_use]
    pub fn edge_label(&self, action: &Action) -> String {
        let text = match action.probability {
            Some(p) => format!("{} (p={})", action.name, format_value(p)),
            None => action.name.clone(),
        };
        wrap(&text, self.config.edge_width)
    }
}
