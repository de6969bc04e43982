//! Error types.
//!
//! Structural problems in a tree are *not* errors: they are collected as
//! [`Violation`](crate::validation::Violation) values. The errors here abort
//! the current call because there is no tree to walk, or because walking it
//! would never end.

use thiserror::Error;

use crate::model::NodeId;

/// How a reference from an action to its target node is broken.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ReferenceKind {
    /// The target is the parent itself or one of its ancestors.
    Cycle,
    /// The target handle does not exist in the arena.
    Dangling,
}

impl std::fmt::Display for ReferenceKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReferenceKind::Cycle => write!(f, "cycle back to an ancestor"),
            ReferenceKind::Dangling => write!(f, "no such node"),
        }
    }
}

/// Fatal errors for a single validate/render call.
#[derive(Clone, Debug, PartialEq, Error)]
pub enum TreeError {
    /// No root node was supplied.
    #[error("nothing to render: the game tree has no root node")]
    MissingRoot,

    /// An action points at a node that cannot be its child.
    #[error("malformed reference from {} to {target}: {kind}", .parent.as_deref().unwrap_or("<root>"))]
    MalformedReference {
        /// `id` field of the node owning the action (`None` for the root slot).
        parent: Option<String>,
        /// Arena handle the action points at.
        target: NodeId,
        kind: ReferenceKind,
    },
}

/// Errors at the analysis boundary.
#[derive(Debug, Error)]
pub enum AnalysisError {
    #[error(transparent)]
    Tree(#[from] TreeError),

    #[error("invalid analysis document: {0}")]
    Json(#[from] serde_json::Error),

    #[error("confidence score {0} is outside 0..=100")]
    ConfidenceOutOfRange(u32),

    /// A screening or modeling collaborator failed.
    #[error("{stage} failed: {message}")]
    Collaborator { stage: &'static str, message: String },
}

impl AnalysisError {
    /// Wrap a collaborator failure.
    pub fn collaborator(stage: &'static str, message: impl Into<String>) -> Self {
        Self::Collaborator {
            stage,
            message: message.into(),
        }
    }
}
