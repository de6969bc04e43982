//! Depth-first walk shared by the validation and render passes.
//!
//! The walk keeps its own frame stack, so tree depth is bounded by memory
//! rather than by the thread's stack. It tracks the current root-to-node
//! path and every node entered so far: each node is entered once, and the
//! walk stops at the first reference back into its own ancestry.
//! Actions of terminal nodes are never followed.

use rustc_hash::FxHashSet;

use super::node::{Action, GameNode, NodeId};
use super::tree::GameTree;
use crate::error::{ReferenceKind, TreeError};

/// One event of the walk.
pub(crate) enum Step<'t> {
    /// A node reached for the first time, in pre-order. The root has depth 0.
    Enter {
        id: NodeId,
        node: &'t GameNode,
        depth: usize,
    },
    /// An action whose target has been fully walked.
    ///
    /// Emitted after the target's subtree, or straight away when the target
    /// was already entered from another parent (`shared`).
    Edge {
        from: NodeId,
        parent: &'t GameNode,
        action: &'t Action,
        target: &'t GameNode,
        shared: bool,
    },
}

struct Frame<'t> {
    id: NodeId,
    node: &'t GameNode,
    /// Action leading here from the parent frame.
    via: Option<&'t Action>,
    next: usize,
}

/// Actions the walk follows out of `node`.
fn followed(node: &GameNode) -> &[Action] {
    if node.is_terminal {
        &[]
    } else {
        &node.actions
    }
}

pub(crate) struct Walk<'t> {
    tree: &'t GameTree,
    start: Option<(NodeId, &'t GameNode)>,
    stack: Vec<Frame<'t>>,
    path: FxHashSet<NodeId>,
    seen: FxHashSet<NodeId>,
}

impl<'t> Walk<'t> {
    /// Start a walk at the tree's root, failing if there is none.
    pub(crate) fn new(tree: &'t GameTree) -> Result<Self, TreeError> {
        let root = tree.root().ok_or(TreeError::MissingRoot)?;
        let node = tree.try_get(root).ok_or(TreeError::MalformedReference {
            parent: None,
            target: root,
            kind: ReferenceKind::Dangling,
        })?;
        Ok(Self {
            tree,
            start: Some((root, node)),
            stack: Vec::new(),
            path: FxHashSet::default(),
            seen: FxHashSet::default(),
        })
    }

    fn enter(&mut self, id: NodeId, node: &'t GameNode, via: Option<&'t Action>) -> Step<'t> {
        self.seen.insert(id);
        self.path.insert(id);
        let depth = self.stack.len();
        self.stack.push(Frame { id, node, via, next: 0 });
        Step::Enter { id, node, depth }
    }

    fn fail(&mut self, parent: &GameNode, target: NodeId, kind: ReferenceKind) -> TreeError {
        self.stack.clear();
        TreeError::MalformedReference {
            parent: Some(parent.id.clone()),
            target,
            kind,
        }
    }
}

impl<'t> Iterator for Walk<'t> {
    type Item = Result<Step<'t>, TreeError>;

    fn next(&mut self) -> Option<Self::Item> {
        if let Some((root, node)) = self.start.take() {
            return Some(Ok(self.enter(root, node, None)));
        }

        let top = self.stack.last_mut()?;
        let (from, parent) = (top.id, top.node);
        let Some(action) = followed(parent).get(top.next) else {
            let done = self.stack.pop()?;
            self.path.remove(&done.id);
            let action = done.via?;
            let up = self.stack.last()?;
            return Some(Ok(Step::Edge {
                from: up.id,
                parent: up.node,
                action,
                target: done.node,
                shared: false,
            }));
        };
        top.next += 1;

        let target = action.next_node;
        let Some(child) = self.tree.try_get(target) else {
            return Some(Err(self.fail(parent, target, ReferenceKind::Dangling)));
        };
        if self.path.contains(&target) {
            return Some(Err(self.fail(parent, target, ReferenceKind::Cycle)));
        }
        if self.seen.contains(&target) {
            return Some(Ok(Step::Edge {
                from,
                parent,
                action,
                target: child,
                shared: true,
            }));
        }
        Some(Ok(self.enter(target, child, Some(action))))
    }
}
