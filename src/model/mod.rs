//! Game-tree data model: players, payoffs, actions, nodes and the arena.
//!
//! ## Two forms
//!
//! - [`NestedNode`]: owned recursive form, as emitted by the modeling step.
//!   Every action owns its child, so it is always tree-shaped.
//! - [`GameTree`]: flat arena indexed by [`NodeId`], produced from a
//!   `NestedNode` in one canonicalization pass (or wired by hand with
//!   [`TreeBuilder`]). Validation and rendering both work on this form.
//!
//! Nothing in this module performs I/O, and a tree is never mutated after
//! it has been built.

pub mod nested;
pub mod node;
pub mod payoff;
pub mod player;
pub mod repair;
pub mod tree;
pub(crate) mod walk;

pub use nested::{NestedAction, NestedNode};
pub use node::{Action, GameNode, NodeId};
pub use payoff::{Payoff, Utilities};
pub use player::{is_nature_name, Player, PlayerRole, Roster, NATURE};
pub use repair::collapse_forced_moves;
pub use tree::{GameTree, TreeBuilder, TreeStats};
