//! Directed-graph description produced by the render pass.
//!
//! The description is backend-neutral: plain records of node ids, labels
//! and style attributes plus labeled edges. [`to_dot`](GraphDescription::to_dot)
//! and [`to_digraph`](GraphDescription::to_digraph) adapt it to Graphviz and
//! `petgraph` respectively.

use petgraph::graph::{DiGraph, NodeIndex};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::model::NodeId;

/// Node outline.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NodeShape {
    /// Decision nodes.
    Ellipse,
    /// Chance nodes.
    Diamond,
    /// Terminal nodes.
    Box,
}

impl NodeShape {
    /// Graphviz shape name.
    #[must_use]
    pub const fn dot_name(self) -> &'static str {
        match self {
            NodeShape::Ellipse => "oval",
            NodeShape::Diamond => "diamond",
            NodeShape::Box => "box",
        }
    }
}

/// Fill and font of a node.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NodeStyle {
    pub fill_color: String,
    pub font_name: String,
    pub font_size: u32,
}

impl NodeStyle {
    pub fn new(fill_color: impl Into<String>, font_size: u32) -> Self {
        Self {
            fill_color: fill_color.into(),
            font_name: "Arial".to_string(),
            font_size,
        }
    }
}

/// A drawable node.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct GraphNode {
    /// Key derived from the arena handle; unique within one description.
    pub id: String,
    /// The game node's own `id` field, kept for cross-referencing violations.
    pub source_id: String,
    pub label: String,
    pub shape: NodeShape,
    pub style: NodeStyle,
}

impl GraphNode {
    /// Graph key for an arena handle.
    #[must_use]
    pub fn key(id: NodeId) -> String {
        format!("n{}", id.raw())
    }
}

/// A directed, labeled edge.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphEdge {
    pub from: String,
    pub to: String,
    pub label: String,
}

/// Nodes in pre-order plus the edges between them.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GraphDescription {
    pub nodes: Vec<GraphNode>,
    pub edges: Vec<GraphEdge>,
}

impl GraphDescription {
    #[must_use]
    pub fn node(&self, id: &str) -> Option<&GraphNode> {
        self.nodes.iter().find(|n| n.id == id)
    }

    /// Outgoing edges of `id`, in emission order.
    pub fn edges_from<'a>(&'a self, id: &'a str) -> impl Iterator<Item = &'a GraphEdge> + 'a {
        self.edges.iter().filter(move |e| e.from == id)
    }

    /// Build a `petgraph` graph with the same nodes and edges.
    ///
    /// Node indices follow the order of `nodes`.
    #[must_use]
    pub fn to_digraph(&self) -> DiGraph<GraphNode, String> {
        let mut graph = DiGraph::with_capacity(self.nodes.len(), self.edges.len());
        let mut index: FxHashMap<&str, NodeIndex> = FxHashMap::default();
        for node in &self.nodes {
            index.insert(node.id.as_str(), graph.add_node(node.clone()));
        }
        for edge in &self.edges {
            if let (Some(&from), Some(&to)) = (index.get(edge.from.as_str()), index.get(edge.to.as_str())) {
                graph.add_edge(from, to, edge.label.clone());
            }
        }
        graph
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> GraphDescription {
        let node = |id: &str, shape| GraphNode {
            id: id.to_string(),
            source_id: id.to_uppercase(),
            label: id.to_string(),
            shape,
            style: NodeStyle::new("white", 11),
        };
        GraphDescription {
            nodes: vec![node("n0", NodeShape::Ellipse), node("n1", NodeShape::Box), node("n2", NodeShape::Box)],
            edges: vec![
                GraphEdge { from: "n0".into(), to: "n1".into(), label: "a".into() },
                GraphEdge { from: "n0".into(), to: "n2".into(), label: "b".into() },
            ],
        }
    }

    #[test]
    fn test_key() {
        assert_eq!(GraphNode::key(NodeId::new(12)), "n12");
    }

    #[test]
    fn test_lookup() {
        let graph = sample();
        assert_eq!(graph.node("n1").unwrap().source_id, "N1");
        assert!(graph.node("n9").is_none());
        assert_eq!(graph.edges_from("n0").count(), 2);
        assert_eq!(graph.edges_from("n1").count(), 0);
    }

    #[test]
    fn test_to_digraph() {
        let graph = sample().to_digraph();
        assert_eq!(graph.node_count(), 3);
        assert_eq!(graph.edge_count(), 2);

        assert_eq!(graph.neighbors(NodeIndex::new(0)).count(), 2);
        let mut labels: Vec<_> = graph.edge_weights().cloned().collect();
        labels.sort();
        assert_eq!(labels, vec!["a".to_string(), "b".to_string()]);
    }

    #[test]
    fn test_shape_dot_names() {
        assert_eq!(NodeShape::Ellipse.dot_name(), "oval");
        assert_eq!(NodeShape::Diamond.dot_name(), "diamond");
        assert_eq!(NodeShape::Box.dot_name(), "box");
    }
}
