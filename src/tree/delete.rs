//! Deletion and delete fixup.

use tracing::{debug, trace};

use super::{internal_fault, Color, Key, NodeId, RbTree};

impl RbTree {
    /// Remove `key`. Returns `false` without touching the tree when absent.
    ///
    /// Deletion never allocates.
    pub fn delete(&mut self, key: Key) -> bool {
        let Some(n) = self.find(key) else {
            trace!(key, "delete skipped, key not present");
            return false;
        };

        let (left, right) = (self.node(n).left, self.node(n).right);

        // The position left deficient if a black node went away, as the node
        // now occupying it (possibly none) plus that position's parent.
        let (removed_color, fix_node, fix_parent) = match (left, right) {
            (None, _) => {
                let parent = self.node(n).parent;
                self.transplant(n, right);
                (self.node(n).color, right, parent)
            }
            (Some(_), None) => {
                let parent = self.node(n).parent;
                self.transplant(n, left);
                (self.node(n).color, left, parent)
            }
            (Some(left), Some(right)) => {
                let successor = self.subtree_minimum(right);
                let successor_color = self.node(successor).color;
                let fix_node = self.node(successor).right;

                let fix_parent = if successor == right {
                    successor
                } else {
                    let successor_parent = self.parent_of(successor);
                    self.transplant(successor, fix_node);
                    self.node_mut(successor).right = Some(right);
                    self.node_mut(right).parent = Some(successor);
                    successor_parent
                };

                self.transplant(n, Some(successor));
                self.node_mut(successor).left = Some(left);
                self.node_mut(left).parent = Some(successor);
                let removed_node_color = self.node(n).color;
                self.set_color(successor, removed_node_color);

                (successor_color, fix_node, Some(fix_parent))
            }
        };

        self.release(n);

        if removed_color == Color::Black {
            self.delete_fixup(fix_node, fix_parent);
        }

        debug!(key, len = self.len, "deleted key");
        self.verify_after("delete");
        true
    }

    /// Put `replacement` where `n` hangs, fixing the replacement's parent
    /// link. `n`'s own links are left as they were.
    fn transplant(&mut self, n: NodeId, replacement: Option<NodeId>) {
        let parent = self.node(n).parent;
        self.replace_child(parent, n, replacement);
        if let Some(replacement) = replacement {
            self.node_mut(replacement).parent = parent;
        }
    }

    /// Discharge one unit of extra blackness sitting at the position `pe`.
    ///
    /// `pe` may be an empty child position, in which case `parent` is the
    /// only handle on where it is. A missing `pe` counts as black.
    fn delete_fixup(&mut self, mut pe: Option<NodeId>, mut parent: Option<NodeId>) {
        while pe != self.root && self.color_of(pe) == Color::Black {
            let Some(p) = parent else {
                internal_fault("non-root position without a parent");
            };

            let pe_is_left = self.node(p).left == pe;
            let side = if pe_is_left { "left" } else { "right" };
            let mut sibling = self.sibling(p, pe_is_left);

            // Case 1: red sibling. Rotate it above the parent so the new
            // sibling is black, then continue with cases 2 to 4.
            if self.color_of(Some(sibling)) == Color::Red {
                trace!(side, "delete fixup: red sibling");
                self.set_color(sibling, Color::Black);
                self.set_color(p, Color::Red);
                if pe_is_left {
                    self.rotate_left(p);
                } else {
                    self.rotate_right(p);
                }
                sibling = self.sibling(p, pe_is_left);
            }

            let (near, far) = self.nephews(sibling, pe_is_left);

            // Case 2: black sibling with black children. Move the extra
            // blackness up to the parent.
            if self.color_of(near) == Color::Black && self.color_of(far) == Color::Black {
                trace!(side, "delete fixup: black nephews");
                self.set_color(sibling, Color::Red);
                pe = Some(p);
                parent = self.node(p).parent;
                continue;
            }

            // Case 3: near nephew red, far nephew black. Rotate the near
            // nephew into the sibling's place, then fall through to case 4.
            if self.color_of(far) == Color::Black {
                trace!(side, "delete fixup: red near nephew");
                let Some(near) = near else {
                    internal_fault("red near nephew is missing");
                };
                self.set_color(near, Color::Black);
                self.set_color(sibling, Color::Red);
                if pe_is_left {
                    self.rotate_right(sibling);
                } else {
                    self.rotate_left(sibling);
                }
                sibling = self.sibling(p, pe_is_left);
            }

            // Case 4: far nephew red. One rotation at the parent absorbs the
            // extra blackness.
            trace!(side, "delete fixup: red far nephew");
            let (_, far) = self.nephews(sibling, pe_is_left);
            let Some(far) = far else {
                internal_fault("red far nephew is missing");
            };
            let parent_color = self.node(p).color;
            self.set_color(sibling, parent_color);
            self.set_color(p, Color::Black);
            self.set_color(far, Color::Black);
            if pe_is_left {
                self.rotate_left(p);
            } else {
                self.rotate_right(p);
            }
            pe = self.root;
            parent = None;
        }

        if let Some(pe) = pe {
            self.set_color(pe, Color::Black);
        }
    }

    /// The other child of `parent`. After deleting a black node it always
    /// exists, or black-heights were already unequal.
    fn sibling(&self, parent: NodeId, pe_is_left: bool) -> NodeId {
        let node = self.node(parent);
        let sibling = if pe_is_left { node.right } else { node.left };
        match sibling {
            Some(sibling) => sibling,
            None => internal_fault("deficient position has no sibling"),
        }
    }

    /// Sibling's children as (near, far) relative to `pe`'s side.
    fn nephews(&self, sibling: NodeId, pe_is_left: bool) -> (Option<NodeId>, Option<NodeId>) {
        let node = self.node(sibling);
        if pe_is_left {
            (node.left, node.right)
        } else {
            (node.right, node.left)
        }
    }
}
