//! Read-only inspection: node views, in-order iteration and snapshots.
//!
//! Nothing here takes part in balancing. It exists for display and
//! diagnostic collaborators.

use std::fmt;

use serde::Serialize;

use super::{Color, Key, NodeId, RbTree};

/// Borrowed view of one node.
#[derive(Clone, Copy)]
pub struct NodeRef<'a> {
    tree: &'a RbTree,
    id: NodeId,
}

impl<'a> NodeRef<'a> {
    pub(crate) fn new(tree: &'a RbTree, id: NodeId) -> Self {
        Self { tree, id }
    }

    fn view(&self, id: Option<NodeId>) -> Option<NodeRef<'a>> {
        id.map(|id| NodeRef::new(self.tree, id))
    }

    pub fn id(&self) -> NodeId {
        self.id
    }

    pub fn key(&self) -> Key {
        self.tree.node(self.id).key
    }

    pub fn color(&self) -> Color {
        self.tree.node(self.id).color
    }

    pub fn is_red(&self) -> bool {
        self.color() == Color::Red
    }

    pub fn is_black(&self) -> bool {
        self.color() == Color::Black
    }

    pub fn left(&self) -> Option<NodeRef<'a>> {
        self.view(self.tree.node(self.id).left)
    }

    pub fn right(&self) -> Option<NodeRef<'a>> {
        self.view(self.tree.node(self.id).right)
    }

    pub fn parent(&self) -> Option<NodeRef<'a>> {
        self.view(self.tree.node(self.id).parent)
    }

    /// Node with the next larger key.
    pub fn successor(&self) -> Option<NodeRef<'a>> {
        if let Some(right) = self.tree.node(self.id).right {
            return self.view(Some(self.tree.subtree_minimum(right)));
        }

        let mut child = self.id;
        let mut parent = self.tree.node(child).parent;
        while let Some(p) = parent {
            if self.tree.node(p).right != Some(child) {
                break;
            }
            child = p;
            parent = self.tree.node(p).parent;
        }
        self.view(parent)
    }

    /// Node with the next smaller key.
    pub fn predecessor(&self) -> Option<NodeRef<'a>> {
        if let Some(left) = self.tree.node(self.id).left {
            return self.view(Some(self.tree.subtree_maximum(left)));
        }

        let mut child = self.id;
        let mut parent = self.tree.node(child).parent;
        while let Some(p) = parent {
            if self.tree.node(p).left != Some(child) {
                break;
            }
            child = p;
            parent = self.tree.node(p).parent;
        }
        self.view(parent)
    }

    /// Keyed record of this node and its neighbours.
    pub fn to_view(&self) -> NodeView {
        NodeView {
            key: self.key(),
            color: self.color(),
            left: self.left().map(|n| n.key()),
            right: self.right().map(|n| n.key()),
            parent: self.parent().map(|n| n.key()),
        }
    }
}

impl fmt::Debug for NodeRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("NodeRef")
            .field("id", &self.id)
            .field("key", &self.key())
            .field("color", &self.color())
            .finish()
    }
}

/// Owned per-node record: key, color, and the keys of its links.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NodeView {
    pub key: Key,
    pub color: Color,
    pub left: Option<Key>,
    pub right: Option<Key>,
    pub parent: Option<Key>,
}

/// In-order key iterator.
pub struct Iter<'a> {
    next: Option<NodeRef<'a>>,
    remaining: usize,
}

impl Iterator for Iter<'_> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        let current = self.next?;
        self.next = current.successor();
        self.remaining -= 1;
        Some(current.key())
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

impl<'a> IntoIterator for &'a RbTree {
    type Item = Key;
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

impl RbTree {
    /// Root node, if any.
    pub fn root(&self) -> Option<NodeRef<'_>> {
        self.root.map(|id| NodeRef::new(self, id))
    }

    /// Node with the smallest key.
    pub fn minimum(&self) -> Option<NodeRef<'_>> {
        self.root
            .map(|root| NodeRef::new(self, self.subtree_minimum(root)))
    }

    /// Node with the largest key.
    pub fn maximum(&self) -> Option<NodeRef<'_>> {
        self.root
            .map(|root| NodeRef::new(self, self.subtree_maximum(root)))
    }

    /// Keys in increasing order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            next: self.minimum(),
            remaining: self.len,
        }
    }

    /// Number of nodes on the longest root-to-leaf path. Zero when empty.
    pub fn height(&self) -> usize {
        let mut deepest = 0;
        let mut stack: Vec<(NodeId, usize)> = self.root.map(|root| (root, 1)).into_iter().collect();
        while let Some((id, depth)) = stack.pop() {
            deepest = deepest.max(depth);
            let node = self.node(id);
            stack.extend(node.left.map(|left| (left, depth + 1)));
            stack.extend(node.right.map(|right| (right, depth + 1)));
        }
        deepest
    }

    /// Pre-order list of every node with its color and neighbour keys.
    pub fn snapshot(&self) -> Vec<NodeView> {
        let mut views = Vec::with_capacity(self.len);
        let mut stack: Vec<NodeId> = self.root.into_iter().collect();
        while let Some(id) = stack.pop() {
            views.push(NodeRef::new(self, id).to_view());
            let node = self.node(id);
            stack.extend(node.right);
            stack.extend(node.left);
        }
        views
    }
}
