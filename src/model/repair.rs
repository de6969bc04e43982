//! Explicit post-processing of model output.
//!
//! Nothing here runs implicitly: validation reports forced moves and
//! rendering draws them. A caller that wants them gone asks for it.

use rustc_hash::{FxHashMap, FxHashSet};
use smallvec::SmallVec;

use super::node::{Action, GameNode, NodeId};
use super::player::{PlayerRole, Roster};
use super::tree::{GameTree, TreeBuilder};
use crate::error::{ReferenceKind, TreeError};

/// Splice out decision nodes that offer a single action.
///
/// A decision maker with one option is not making a choice. Each such node
/// is replaced by the node its only action leads to, repeatedly, so chains
/// of forced moves collapse to their end. Nature nodes are kept even with a
/// single branch. The result is a fresh arena in pre-order. A node shared
/// by several parents is copied once and stays shared.
pub fn collapse_forced_moves(tree: &GameTree, roster: &Roster) -> Result<GameTree, TreeError> {
    let root = tree.root().ok_or(TreeError::MissingRoot)?;
    let mut repair = Repair {
        tree,
        roster,
        builder: TreeBuilder::new(),
        path: FxHashSet::default(),
        copied: FxHashMap::default(),
        stack: Vec::new(),
    };
    let (id, node, skipped) = repair.resolve(root, None)?;
    let new_root = repair.open(id, node, skipped);
    repair.run()?;
    Ok(repair.builder.build(new_root))
}

/// A kept node whose actions are being copied.
struct Frame<'t> {
    id: NodeId,
    source: &'t GameNode,
    handle: NodeId,
    /// Forced nodes spliced out on the way here; on the path until popped.
    skipped: Vec<NodeId>,
    next: usize,
}

struct Repair<'t> {
    tree: &'t GameTree,
    roster: &'t Roster,
    builder: TreeBuilder,
    path: FxHashSet<NodeId>,
    /// Source handle to copied handle.
    copied: FxHashMap<NodeId, NodeId>,
    stack: Vec<Frame<'t>>,
}

impl<'t> Repair<'t> {
    fn is_forced(&self, node: &GameNode) -> bool {
        !node.is_terminal
            && node.actions.len() == 1
            && self.roster.role_of(node.player()) == PlayerRole::DecisionMaker
    }

    fn lookup(&self, id: NodeId, parent: Option<&GameNode>) -> Result<&'t GameNode, TreeError> {
        let malformed = |kind| TreeError::MalformedReference {
            parent: parent.map(|p| p.id.clone()),
            target: id,
            kind,
        };
        let node = self.tree.try_get(id).ok_or_else(|| malformed(ReferenceKind::Dangling))?;
        if self.path.contains(&id) {
            return Err(malformed(ReferenceKind::Cycle));
        }
        Ok(node)
    }

    /// Follow forced moves from `id` to the first node that is kept.
    fn resolve(
        &mut self,
        mut id: NodeId,
        parent: Option<&GameNode>,
    ) -> Result<(NodeId, &'t GameNode, Vec<NodeId>), TreeError> {
        let mut skipped = Vec::new();
        let mut node = self.lookup(id, parent)?;
        while self.is_forced(node) {
            self.path.insert(id);
            skipped.push(id);
            let next = node.actions[0].next_node;
            node = self.lookup(next, Some(node))?;
            id = next;
        }
        Ok((id, node, skipped))
    }

    fn open(&mut self, id: NodeId, source: &'t GameNode, skipped: Vec<NodeId>) -> NodeId {
        let handle = self.builder.node(GameNode {
            actions: SmallVec::new(),
            ..source.clone()
        });
        self.path.insert(id);
        self.copied.insert(id, handle);
        self.stack.push(Frame {
            id,
            source,
            handle,
            skipped,
            next: 0,
        });
        handle
    }

    fn run(&mut self) -> Result<(), TreeError> {
        while let Some(frame) = self.stack.last_mut() {
            let (source, handle) = (frame.source, frame.handle);
            let Some(action) = source.actions.get(frame.next) else {
                if let Some(done) = self.stack.pop() {
                    self.path.remove(&done.id);
                    for id in done.skipped {
                        self.path.remove(&id);
                    }
                }
                continue;
            };
            frame.next += 1;

            let (id, node, skipped) = self.resolve(action.next_node, Some(source))?;
            let next_node = match self.copied.get(&id) {
                Some(&copy) => {
                    for id in &skipped {
                        self.path.remove(id);
                    }
                    copy
                }
                None => self.open(id, node, skipped),
            };
            self.builder.push(
                handle,
                Action {
                    next_node,
                    ..action.clone()
                },
            );
        }
        Ok(())
    }
}
