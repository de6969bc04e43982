//! # gametree
//!
//! Extensive-form game trees: data model, structural validation and
//! rendering into a directed-graph description.
//!
//! ## Design Principles
//!
//! 1. **Arena, not pointers**: a tree is a flat `Vec<GameNode>` indexed by
//!    `NodeId`, built once from the owned nested form. Handles are the node
//!    identity the renderer keys on.
//!
//! 2. **Two independent passes**: validation collects violations,
//!    rendering draws best-effort. Neither repairs; repair is an explicit
//!    separate step.
//!
//! 3. **Read-only, no I/O**: the core never mutates its input, never logs,
//!    and keeps no state between calls.
//!
//! ## Modules
//!
//! - `model`: players, payoffs, actions, nodes, the arena and repair
//! - `validation`: structural rules and violation records
//! - `render`: graph description, labels, wrapping, DOT and petgraph export
//! - `analysis`: the analysis document and the language-model boundary
//! - `error`: errors that abort a call

pub mod analysis;
pub mod error;
pub mod model;
pub mod render;
pub mod validation;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::error::{AnalysisError, ReferenceKind, TreeError};

pub use crate::model::{
    Action, GameNode, GameTree, NestedAction, NestedNode, NodeId,
    Payoff, Player, PlayerRole, Roster, TreeBuilder, Utilities,
};

pub use crate::validation::{validate, RuleId, ValidationConfig, Validator, Violation};

pub use crate::render::{
    render, render_with, GraphAttributes, GraphDescription, GraphEdge, GraphNode,
    NodeShape, NodeStyle, RenderConfig,
};

pub use crate::analysis::{
    analyze_text, AnalysisOutcome, AnalysisReport, GameTheoryAnalysis, GameType,
    Modeler, Screener, ScreenerOutput,
};
