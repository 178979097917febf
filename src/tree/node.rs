//! Node store types.

use serde::Serialize;

/// Key type stored in the tree.
pub type Key = i64;

/// Red-black node color.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Red,
    Black,
}

/// Handle to a node slot in a tree's arena.
///
/// A handle is only meaningful for the tree that issued it and goes stale once
/// its node is deleted.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct NodeId(pub(crate) usize);

impl NodeId {
    /// Arena slot index.
    pub fn index(self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone)]
pub(crate) struct Node {
    pub(crate) key: Key,
    pub(crate) color: Color,
    pub(crate) left: Option<NodeId>,
    pub(crate) right: Option<NodeId>,
    /// Upward navigation only. The node is owned through its parent's child
    /// link, never through this one.
    pub(crate) parent: Option<NodeId>,
}

impl Node {
    /// Fresh leaf, red as every node is at birth.
    pub(crate) fn leaf(key: Key, parent: Option<NodeId>) -> Self {
        Self {
            key,
            color: Color::Red,
            left: None,
            right: None,
            parent,
        }
    }
}

/// Arena slot. Vacant slots form an intrusive free list.
#[derive(Debug)]
pub(crate) enum Slot {
    Occupied(Node),
    Vacant { next_free: Option<usize> },
}
