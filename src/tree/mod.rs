//! Red-black tree of integer keys.
//!
//! Nodes live in an arena owned by [`RbTree`] and refer to each other through
//! [`NodeId`] handles. Child links express ownership; the parent link is a plain
//! back-reference used by the fixup passes to walk upward. There is no sentinel
//! node: a missing child is `None` and counts as black (see `color_of`).
//!
//! Submodules:
//! - `rotate`: rotation primitives and child relinking
//! - `search`: exact-key lookup and attach-point lookup
//! - `insert`: leaf attachment and insert fixup
//! - `delete`: transplant-based removal and delete fixup
//! - `inspect`: read-only node views, iteration and snapshots
//! - `validate`: invariant checker

mod delete;
mod inspect;
mod insert;
mod node;
mod rotate;
mod search;
mod validate;


pub use inspect::{Iter, NodeRef, NodeView};
pub use node::{Color, Key, NodeId};
pub use validate::InvariantViolation;

use tracing::error;

use crate::config::TreeConfig;
use crate::error::{Result, TreeError};
use node::{Node, Slot};

/// Red-black tree of unique `i64` keys.
///
/// Single-threaded: every operation runs to completion through `&mut self`.
/// Callers needing shared access wrap the whole tree in a lock.
#[derive(Debug, Default)]
pub struct RbTree {
    slots: Vec<Slot>,
    free_head: Option<usize>,
    root: Option<NodeId>,
    len: usize,
    max_nodes: Option<usize>,
    verify_invariants: bool,
}

impl RbTree {
    /// Create an empty tree with no node limit.
    pub const fn new() -> Self {
        Self {
            slots: Vec::new(),
            free_head: None,
            root: None,
            len: 0,
            max_nodes: None,
            verify_invariants: false,
        }
    }

    /// Create an empty tree with the given arena capacity, node limit and
    /// verification mode.
    pub fn with_config(config: &TreeConfig) -> Result<Self> {
        let mut slots = Vec::new();
        slots.try_reserve_exact(config.initial_capacity)?;
        Ok(Self {
            slots,
            max_nodes: config.max_nodes,
            verify_invariants: config.verify_invariants,
            ..Self::new()
        })
    }

    /// Number of keys stored.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    /// Configured node limit, if any.
    pub fn max_nodes(&self) -> Option<usize> {
        self.max_nodes
    }

    /// Destroy every node. The arena keeps its capacity.
    pub fn clear(&mut self) {
        let dropped = self.len;
        self.slots.clear();
        self.free_head = None;
        self.root = None;
        self.len = 0;
        tracing::debug!(dropped, "cleared tree");
    }

    // ------------------------------------------------------------------
    // Node store
    // ------------------------------------------------------------------

    pub(crate) fn node(&self, id: NodeId) -> &Node {
        match self.slots.get(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => internal_fault("dangling node handle"),
        }
    }

    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node {
        match self.slots.get_mut(id.0) {
            Some(Slot::Occupied(node)) => node,
            _ => internal_fault("dangling node handle"),
        }
    }

    /// Store `node`, reusing a vacant slot when one exists.
    ///
    /// Leaves the tree untouched on failure.
    pub(crate) fn alloc(&mut self, node: Node) -> Result<NodeId> {
        if let Some(limit) = self.max_nodes {
            if self.len >= limit {
                return Err(TreeError::NodeLimitReached { limit });
            }
        }

        let index = match self.free_head {
            Some(index) => {
                let next_free = match self.slots[index] {
                    Slot::Vacant { next_free } => next_free,
                    Slot::Occupied(_) => internal_fault("free list points at a live node"),
                };
                self.slots[index] = Slot::Occupied(node);
                self.free_head = next_free;
                index
            }
            None => {
                self.slots.try_reserve(1)?;
                self.slots.push(Slot::Occupied(node));
                self.slots.len() - 1
            }
        };

        self.len += 1;
        Ok(NodeId(index))
    }

    /// Return a detached node's slot to the free list.
    pub(crate) fn release(&mut self, id: NodeId) -> Node {
        let slot = std::mem::replace(
            &mut self.slots[id.0],
            Slot::Vacant {
                next_free: self.free_head,
            },
        );
        match slot {
            Slot::Occupied(node) => {
                self.free_head = Some(id.0);
                self.len -= 1;
                node
            }
            Slot::Vacant { .. } => internal_fault("released a vacant slot"),
        }
    }

    /// Color of an optional node. A missing child is black.
    pub(crate) fn color_of(&self, id: Option<NodeId>) -> Color {
        match id {
            Some(id) => self.node(id).color,
            None => Color::Black,
        }
    }

    pub(crate) fn set_color(&mut self, id: NodeId, color: Color) {
        self.node_mut(id).color = color;
    }

    /// Parent of a node that must have one at this point of a fixup.
    pub(crate) fn parent_of(&self, id: NodeId) -> NodeId {
        match self.node(id).parent {
            Some(parent) => parent,
            None => internal_fault("expected a parent link"),
        }
    }

    /// Run the full validator after a mutation when verification is enabled.
    pub(crate) fn verify_after(&self, operation: &'static str) {
        if !self.verify_invariants {
            return;
        }
        if let Err(violation) = self.validate() {
            error!(operation, %violation, "invariant check failed after mutation");
            panic!("red-black invariant violated after {operation}: {violation}");
        }
    }
}

/// Report a broken structural assumption. These indicate a defect in the
/// rebalancing code, not bad input, so they are not recoverable.
#[cold]
#[track_caller]
pub(crate) fn internal_fault(what: &str) -> ! {
    error!(fault = what, "red-black tree internal consistency fault");
    panic!("red-black tree internal consistency fault: {what}");
}
