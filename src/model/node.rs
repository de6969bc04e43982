//! Game nodes and the actions connecting them.
//!
//! Nodes live in the [`GameTree`](super::GameTree) arena and are referenced
//! by `NodeId` indices. An action stores the handle of the node it leads to.

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::payoff::Payoff;
use super::player::is_nature_name;

/// Index into the `GameTree` node arena.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct NodeId(pub u32);

impl NodeId {
    /// Create a new node ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw index value.
    #[inline]
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }

    #[inline]
    pub(crate) const fn index(self) -> usize {
        self.0 as usize
    }
}

impl std::fmt::Display for NodeId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "NodeId({})", self.0)
    }
}

/// A move from a decision or chance node to its consequence.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Action {
    pub name: String,
    pub description: String,

    /// Branch probability. Only meaningful when Nature moves at the owning node.
    pub probability: Option<f64>,

    /// Node this action leads to.
    pub next_node: NodeId,
}

impl Action {
    /// Create an action without probability.
    pub fn new(name: impl Into<String>, next_node: NodeId) -> Self {
        Self {
            name: name.into(),
            description: String::new(),
            probability: None,
            next_node,
        }
    }

    /// Create a chance branch.
    pub fn chance(name: impl Into<String>, probability: f64, next_node: NodeId) -> Self {
        Self {
            probability: Some(probability),
            ..Self::new(name, next_node)
        }
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

/// A node of the game tree.
///
/// The well-formed states are "internal with actions" and "terminal with a
/// payoff". Other combinations are representable on purpose so that model
/// output can be validated and drawn best-effort.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameNode {
    /// Identifier given by the producer. May collide or be empty.
    pub id: String,

    /// Who moves here. `None` when the producer assigned nobody.
    pub current_player_name: Option<String>,

    pub is_terminal: bool,

    /// Outgoing actions, in authored order.
    /// SmallVec optimizes for the usual two or three branches.
    pub actions: SmallVec<[Action; 4]>,

    pub payoff: Option<Payoff>,
}

impl GameNode {
    /// Create an internal node for `player`.
    pub fn internal(id: impl Into<String>, player: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            current_player_name: Some(player.into()),
            ..Self::default()
        }
    }

    /// Create a terminal node.
    pub fn terminal(id: impl Into<String>, payoff: Payoff) -> Self {
        Self {
            id: id.into(),
            is_terminal: true,
            payoff: Some(payoff),
            ..Self::default()
        }
    }

    /// Name of the player moving here, if any.
    #[must_use]
    pub fn player(&self) -> Option<&str> {
        self.current_player_name.as_deref()
    }

    /// True when the node's player is literally named `nature`.
    #[must_use]
    pub fn is_nature(&self) -> bool {
        self.player().is_some_and(is_nature_name)
    }

    #[must_use]
    pub fn has_actions(&self) -> bool {
        !self.actions.is_empty()
    }

    /// Handles of the nodes this node's actions lead to, in order.
    pub fn children(&self) -> impl Iterator<Item = NodeId> + '_ {
        self.actions.iter().map(|a| a.next_node)
    }
}
