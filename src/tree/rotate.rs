//! Rotation primitives.
//!
//! Both rotations are O(1), never allocate, and preserve the in-order key
//! sequence. They rewire at most three parent links and update the root when
//! the rotated node was topmost.

use super::{internal_fault, NodeId, RbTree};

impl RbTree {
    /// Promote `n.right` into `n`'s position, making `n` its left child.
    ///
    /// ```text
    ///     n                r
    ///    / \              / \
    ///   a   r     =>     n   c
    ///      / \          / \
    ///     b   c        a   b
    /// ```
    pub(crate) fn rotate_left(&mut self, n: NodeId) {
        let Some(promoted) = self.node(n).right else {
            internal_fault("rotate_left requires a right child");
        };

        let inner = self.node(promoted).left;
        self.node_mut(n).right = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(n);
        }

        let parent = self.node(n).parent;
        self.node_mut(promoted).parent = parent;
        self.replace_child(parent, n, Some(promoted));

        self.node_mut(promoted).left = Some(n);
        self.node_mut(n).parent = Some(promoted);
    }

    /// Mirror of [`rotate_left`](Self::rotate_left) around `n.left`.
    pub(crate) fn rotate_right(&mut self, n: NodeId) {
        let Some(promoted) = self.node(n).left else {
            internal_fault("rotate_right requires a left child");
        };

        let inner = self.node(promoted).right;
        self.node_mut(n).left = inner;
        if let Some(inner) = inner {
            self.node_mut(inner).parent = Some(n);
        }

        let parent = self.node(n).parent;
        self.node_mut(promoted).parent = parent;
        self.replace_child(parent, n, Some(promoted));

        self.node_mut(promoted).right = Some(n);
        self.node_mut(n).parent = Some(promoted);
    }

    /// Point whichever link of `parent` held `old` at `new` instead. With no
    /// parent, `old` was the root.
    ///
    /// Does not touch `new`'s parent link.
    pub(crate) fn replace_child(&mut self, parent: Option<NodeId>, old: NodeId, new: Option<NodeId>) {
        match parent {
            None => self.root = new,
            Some(parent) => {
                let node = self.node_mut(parent);
                if node.left == Some(old) {
                    node.left = new;
                } else {
                    node.right = new;
                }
            }
        }
    }
}
