//! Exact-key lookup.

use std::cmp::Ordering;

use super::{Key, NodeId, NodeRef, RbTree};

impl RbTree {
    /// Find the node holding `key`.
    pub fn search(&self, key: Key) -> Option<NodeRef<'_>> {
        self.find(key).map(|id| NodeRef::new(self, id))
    }

    /// Same descent as [`search`](Self::search), also reporting the last node
    /// visited. That node is the match when `found` is true and the attach
    /// point for `key` otherwise; it is `None` only for an empty tree.
    pub fn search_with_parent(&self, key: Key) -> (bool, Option<NodeRef<'_>>) {
        let (found, last_visited) = self.locate(key);
        (found, last_visited.map(|id| NodeRef::new(self, id)))
    }

    /// True if `key` is stored.
    pub fn contains(&self, key: Key) -> bool {
        self.find(key).is_some()
    }

    pub(crate) fn find(&self, key: Key) -> Option<NodeId> {
        match self.locate(key) {
            (true, last_visited) => last_visited,
            (false, _) => None,
        }
    }

    pub(crate) fn locate(&self, key: Key) -> (bool, Option<NodeId>) {
        let mut last_visited = None;
        let mut current = self.root;

        while let Some(id) = current {
            last_visited = Some(id);
            let node = self.node(id);
            current = match key.cmp(&node.key) {
                Ordering::Less => node.left,
                Ordering::Greater => node.right,
                Ordering::Equal => return (true, last_visited),
            };
        }

        (false, last_visited)
    }

    /// Leftmost node of the subtree rooted at `id`.
    pub(crate) fn subtree_minimum(&self, mut id: NodeId) -> NodeId {
        while let Some(left) = self.node(id).left {
            id = left;
        }
        id
    }

    /// Rightmost node of the subtree rooted at `id`.
    pub(crate) fn subtree_maximum(&self, mut id: NodeId) -> NodeId {
        while let Some(right) = self.node(id).right {
            id = right;
        }
        id
    }
}
