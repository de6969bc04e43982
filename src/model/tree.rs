//! Arena-based game tree.
//!
//! Uses a flat `Vec<GameNode>` with index-based references. Handles are
//! assigned once, when the tree is built, and double as the stable identity
//! the renderer keys graph nodes on.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

use super::nested::{NestedAction, NestedNode};
use super::node::{Action, GameNode, NodeId};
use super::payoff::Payoff;
use super::walk::{Step, Walk};
use crate::error::{ReferenceKind, TreeError};

/// Arena-based game tree.
///
/// Read-only once built. The arena may contain nodes that are unreachable
/// from the root; the passes only ever look at what the root reaches.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct GameTree {
    nodes: Vec<GameNode>,
    root: Option<NodeId>,
}

impl GameTree {
    /// Canonicalize an owned tree into an arena, in pre-order.
    ///
    /// The root gets `NodeId(0)`; a parent always gets a lower handle than
    /// its children.
    pub fn from_nested(root: &NestedNode) -> Self {
        let mut tree = Self {
            nodes: Vec::with_capacity(root.size()),
            root: None,
        };
        let handle = tree.canonicalize(root);
        tree.root = Some(handle);
        tree
    }

    fn canonicalize(&mut self, root: &NestedNode) -> NodeId {
        let handle = self.alloc(Self::shell(root));
        let mut stack = vec![(root, handle, 0usize)];

        while let Some(frame) = stack.last_mut() {
            let (nested, parent, next) = *frame;
            let Some(action) = nested.actions.as_deref().unwrap_or(&[]).get(next) else {
                stack.pop();
                continue;
            };
            frame.2 += 1;

            let child = self.alloc(Self::shell(&action.next_node));
            self.nodes[parent.index()].actions.push(Action {
                name: action.name.clone(),
                description: action.description.clone(),
                probability: action.probability,
                next_node: child,
            });
            stack.push((&*action.next_node, child, 0));
        }
        handle
    }

    /// Arena node for `nested`, without its actions.
    fn shell(nested: &NestedNode) -> GameNode {
        GameNode {
            id: nested.id.clone(),
            current_player_name: nested.current_player_name.clone(),
            is_terminal: nested.is_terminal,
            actions: SmallVec::new(),
            payoff: nested.payoff.clone(),
        }
    }

    fn alloc(&mut self, node: GameNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Rebuild the owned form from the root.
    ///
    /// A node reachable from several parents is copied under each of them.
    pub fn to_nested(&self) -> Result<NestedNode, TreeError> {
        let root = self.root.ok_or(TreeError::MissingRoot)?;
        let node = self.try_get(root).ok_or(TreeError::MalformedReference {
            parent: None,
            target: root,
            kind: ReferenceKind::Dangling,
        })?;
        let mut path = FxHashSet::default();
        path.insert(root);
        let mut stack = vec![NestFrame::new(root, node, None)];

        while let Some(frame) = stack.last_mut() {
            let parent = frame.node;
            if let Some(action) = parent.actions.get(frame.next) {
                frame.next += 1;
                let malformed = |kind| TreeError::MalformedReference {
                    parent: Some(parent.id.clone()),
                    target: action.next_node,
                    kind,
                };
                let child = self
                    .try_get(action.next_node)
                    .ok_or_else(|| malformed(ReferenceKind::Dangling))?;
                if !path.insert(action.next_node) {
                    return Err(malformed(ReferenceKind::Cycle));
                }
                stack.push(NestFrame::new(action.next_node, child, Some(action)));
                continue;
            }

            let Some(done) = stack.pop() else { break };
            path.remove(&done.id);
            let (via, nested) = done.finish();
            match (via, stack.last_mut()) {
                (Some(action), Some(parent)) => parent.actions.push(NestedAction {
                    name: action.name.clone(),
                    description: action.description.clone(),
                    probability: action.probability,
                    next_node: Box::new(nested),
                }),
                _ => return Ok(nested),
            }
        }
        Err(TreeError::MissingRoot)
    }

    /// Get the root node ID, if a root was supplied.
    #[inline]
    #[must_use]
    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    /// Get a node by ID.
    ///
    /// Panics if the handle is not in the arena; use [`try_get`](Self::try_get)
    /// for handles taken from untrusted actions.
    #[inline]
    #[must_use]
    pub fn get(&self, id: NodeId) -> &GameNode {
        &self.nodes[id.index()]
    }

    #[inline]
    #[must_use]
    pub fn try_get(&self, id: NodeId) -> Option<&GameNode> {
        self.nodes.get(id.index())
    }

    /// Number of nodes in the arena.
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Iterate over all nodes in handle order.
    pub fn iter(&self) -> impl Iterator<Item = (NodeId, &GameNode)> {
        self.nodes
            .iter()
            .enumerate()
            .map(|(i, n)| (NodeId::new(i as u32), n))
    }

    /// Get statistics about the arena.
    ///
    /// Counts cover the whole arena. `max_depth` is measured over what the
    /// root reaches; a malformed reference ends the measurement where it is
    /// found.
    #[must_use]
    pub fn stats(&self) -> TreeStats {
        let max_depth = Walk::new(self)
            .into_iter()
            .flatten()
            .map_while(Result::ok)
            .filter_map(|step| match step {
                Step::Enter { depth, .. } => Some(depth),
                Step::Edge { .. } => None,
            })
            .max()
            .unwrap_or(0);

        TreeStats {
            node_count: self.nodes.len(),
            max_depth,
            terminal_count: self.nodes.iter().filter(|n| n.is_terminal).count(),
            chance_count: self.nodes.iter().filter(|n| !n.is_terminal && n.is_nature()).count(),
            total_edges: self.nodes.iter().map(|n| n.actions.len()).sum(),
        }
    }
}

/// A node being rebuilt by [`GameTree::to_nested`].
struct NestFrame<'t> {
    id: NodeId,
    node: &'t GameNode,
    via: Option<&'t Action>,
    next: usize,
    actions: Vec<NestedAction>,
}

impl<'t> NestFrame<'t> {
    fn new(id: NodeId, node: &'t GameNode, via: Option<&'t Action>) -> Self {
        Self {
            id,
            node,
            via,
            next: 0,
            actions: Vec::with_capacity(node.actions.len()),
        }
    }

    fn finish(self) -> (Option<&'t Action>, NestedNode) {
        let node = NestedNode {
            id: self.node.id.clone(),
            current_player_name: self.node.current_player_name.clone(),
            is_terminal: self.node.is_terminal,
            actions: (!self.actions.is_empty()).then_some(self.actions),
            payoff: self.node.payoff.clone(),
        };
        (self.via, node)
    }
}

/// Statistics about a game tree arena.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TreeStats {
    /// Total number of nodes.
    pub node_count: usize,

    /// Depth of the deepest node reachable from the root (root = 0).
    pub max_depth: usize,

    /// Number of nodes marked terminal.
    pub terminal_count: usize,

    /// Number of internal nodes where Nature moves.
    pub chance_count: usize,

    /// Total number of actions.
    pub total_edges: usize,
}

impl TreeStats {
    /// Average actions per internal node.
    #[must_use]
    pub fn branching_factor(&self) -> f64 {
        let internal = self.node_count - self.terminal_count;
        if internal == 0 {
            0.0
        } else {
            self.total_edges as f64 / internal as f64
        }
    }
}

/// Builder wiring nodes together by handle.
///
/// Unlike [`GameTree::from_nested`] the builder does not check that the
/// result is tree-shaped: it can express shared children, cycles and
/// dangling handles, which the passes then reject or report.
///
/// ```
/// use gametree::model::{Payoff, TreeBuilder};
///
/// let mut builder = TreeBuilder::new();
/// let win = builder.terminal("win", Payoff::new("A wins").with_utility("A", 1.0));
/// let lose = builder.terminal("lose", Payoff::new("A loses").with_utility("A", -1.0));
/// let root = builder.decision("root", "A");
/// builder.action(root, "Attack", win).action(root, "Retreat", lose);
///
/// let tree = builder.build(root);
/// assert_eq!(tree.len(), 3);
/// ```
#[derive(Debug, Default)]
pub struct TreeBuilder {
    nodes: Vec<GameNode>,
}

impl TreeBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an arbitrary node.
    pub fn node(&mut self, node: GameNode) -> NodeId {
        let id = NodeId::new(self.nodes.len() as u32);
        self.nodes.push(node);
        id
    }

    /// Add an internal node for `player`.
    pub fn decision(&mut self, id: impl Into<String>, player: impl Into<String>) -> NodeId {
        self.node(GameNode::internal(id, player))
    }

    /// Add a terminal node.
    pub fn terminal(&mut self, id: impl Into<String>, payoff: Payoff) -> NodeId {
        self.node(GameNode::terminal(id, payoff))
    }

    /// Append an action from `parent` to `target`.
    pub fn action(&mut self, parent: NodeId, name: impl Into<String>, target: NodeId) -> &mut Self {
        self.push(parent, Action::new(name, target))
    }

    /// Append a chance branch from `parent` to `target`.
    pub fn chance(
        &mut self,
        parent: NodeId,
        name: impl Into<String>,
        probability: f64,
        target: NodeId,
    ) -> &mut Self {
        self.push(parent, Action::chance(name, probability, target))
    }

    /// Append a prepared action.
    ///
    /// # Panics
    ///
    /// Panics if `parent` was not returned by this builder. `action` may
    /// point anywhere.
    pub fn push(&mut self, parent: NodeId, action: Action) -> &mut Self {
        self.nodes[parent.index()].actions.push(action);
        self
    }

    /// Mutable access for shaping malformed nodes.
    ///
    /// # Panics
    ///
    /// Panics if `id` was not returned by this builder.
    pub fn node_mut(&mut self, id: NodeId) -> &mut GameNode {
        &mut self.nodes[id.index()]
    }

    /// Finish with `root` as the root handle.
    #[must_use]
    pub fn build(self, root: NodeId) -> GameTree {
        GameTree {
            nodes: self.nodes,
            root: Some(root),
        }
    }

    /// Finish without a root. Both passes reject the result.
    #[must_use]
    pub fn build_rootless(self) -> GameTree {
        GameTree {
            nodes: self.nodes,
            root: None,
        }
    }
}
