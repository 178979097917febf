//! Insertion and insert fixup.

use tracing::{debug, trace};

use super::node::Node;
use super::{Color, Key, NodeId, RbTree};
use crate::error::Result;

impl RbTree {
    /// Insert `key`.
    ///
    /// Returns `Ok(false)` without touching the tree when `key` is already
    /// present. Allocation failure is reported before any link changes, so an
    /// `Err` also leaves the tree as it was.
    pub fn insert(&mut self, key: Key) -> Result<bool> {
        let (found, parent) = self.locate(key);
        if found {
            trace!(key, "insert skipped, key already present");
            return Ok(false);
        }

        let id = self.alloc(Node::leaf(key, parent))?;
        match parent {
            None => self.root = Some(id),
            Some(parent) if key < self.node(parent).key => self.node_mut(parent).left = Some(id),
            Some(parent) => self.node_mut(parent).right = Some(id),
        }

        self.insert_fixup(id);

        debug!(key, len = self.len, "inserted key");
        self.verify_after("insert");
        Ok(true)
    }

    /// Restore the red-black properties after attaching the red node `pe`.
    ///
    /// On entry to every iteration the only possible violation is a red `pe`
    /// under a red parent.
    fn insert_fixup(&mut self, mut pe: NodeId) {
        loop {
            let Some(parent) = self.node(pe).parent else {
                break;
            };
            if self.color_of(Some(parent)) == Color::Black {
                break;
            }
            let Some(grandparent) = self.node(parent).parent else {
                break;
            };

            let parent_is_left = self.node(grandparent).left == Some(parent);
            let side = if parent_is_left { "left" } else { "right" };
            let uncle = if parent_is_left {
                self.node(grandparent).right
            } else {
                self.node(grandparent).left
            };

            // Case A: red uncle. Push the red up two levels and go again.
            if let (Some(uncle), Color::Red) = (uncle, self.color_of(uncle)) {
                trace!(side, key = self.node(pe).key, "insert fixup: red uncle");
                self.set_color(parent, Color::Black);
                self.set_color(uncle, Color::Black);
                self.set_color(grandparent, Color::Red);
                pe = grandparent;
                continue;
            }

            // Case B: inner grandchild. Rotate it to the outside, then fall
            // through to case C with the old parent as `pe`.
            let pe_is_left = self.node(parent).left == Some(pe);
            if pe_is_left != parent_is_left {
                trace!(side, key = self.node(pe).key, "insert fixup: inner grandchild");
                if parent_is_left {
                    self.rotate_left(parent);
                } else {
                    self.rotate_right(parent);
                }
                pe = parent;
            }

            // Case C: outer grandchild. One rotation at the grandparent ends it.
            trace!(side, key = self.node(pe).key, "insert fixup: outer grandchild");
            let parent = self.parent_of(pe);
            self.set_color(parent, Color::Black);
            self.set_color(grandparent, Color::Red);
            if parent_is_left {
                self.rotate_right(grandparent);
            } else {
                self.rotate_left(grandparent);
            }
            break;
        }

        if let Some(root) = self.root {
            self.set_color(root, Color::Black);
        }
    }
}
