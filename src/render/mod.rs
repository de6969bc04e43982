//! Rendering of game trees into directed-graph descriptions.
//!
//! ## Overview
//!
//! [`render`] walks a tree once and returns a [`GraphDescription`]: styled
//! nodes and labeled edges, with no drawing library involved. Rendering is
//! total over malformed-but-finite trees, so model output can be drawn even
//! when validation reports violations.
//!
//! | Node | Shape | Fill |
//! |------|-------|------|
//! | terminal | box | `#f0f2f6` |
//! | internal, player `nature` | diamond | `lightgrey` |
//! | other internal | ellipse | `white` |
//!
//! ## Usage
//!
//! ```rust
//! use gametree::model::{GameTree, NestedNode, Payoff};
//! use gametree::render::{render, GraphAttributes};
//!
//! let nested = NestedNode::internal("root", "Company A")
//!     .with_action("Raise Price", NestedNode::terminal("up", Payoff::new("A profits")))
//!     .with_action("Lower Price", NestedNode::terminal("down", Payoff::new("B profits")));
//! let graph = render(&GameTree::from_nested(&nested)).unwrap();
//!
//! assert_eq!(graph.nodes.len(), 3);
//! assert_eq!(graph.edges.len(), 2);
//! let dot = graph.to_dot(&GraphAttributes::default());
//! assert!(dot.starts_with("digraph {"));
//! ```

pub mod config;
pub mod dot;
pub mod graph;
pub mod traversal;
pub mod wrap;

pub use config::RenderConfig;
pub use dot::GraphAttributes;
pub use graph::{GraphDescription, GraphEdge, GraphNode, NodeShape, NodeStyle};
pub use traversal::Renderer;
pub use wrap::{format_value, wrap};

use crate::error::TreeError;
use crate::model::GameTree;

/// Render `tree` with the default configuration.
pub fn render(tree: &GameTree) -> Result<GraphDescription, TreeError> {
    render_with(tree, &RenderConfig::default())
}

/// Render `tree` with `config`.
pub fn render_with(tree: &GameTree, config: &RenderConfig) -> Result<GraphDescription, TreeError> {
    Renderer::new(config).render(tree)
}
