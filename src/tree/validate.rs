//! Invariant checker.

use super::{Color, Key, NodeId, RbTree};

/// First broken property found by [`RbTree::validate`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InvariantViolation {
    #[error("root {key} is red")]
    RedRoot { key: Key },

    #[error("root {key} has a parent link")]
    RootHasParent { key: Key },

    #[error("red node {parent} has red child {child}")]
    RedRedEdge { parent: Key, child: Key },

    #[error("black-height differs under {key}: left {left}, right {right}")]
    BlackHeightMismatch { key: Key, left: usize, right: usize },

    #[error("key {key} breaks search order (allowed range {lower:?}..{upper:?})")]
    OrderViolation {
        key: Key,
        lower: Option<Key>,
        upper: Option<Key>,
    },

    #[error("node {key} has a parent link that disagrees with its position")]
    ParentLinkMismatch { key: Key },

    #[error("tree reports {reported} nodes but {reachable} are reachable")]
    LengthMismatch { reported: usize, reachable: usize },
}

struct SubtreeSummary {
    black_height: usize,
    count: usize,
}

impl RbTree {
    /// Check every structural invariant.
    ///
    /// On success returns the tree's black-height: the number of black nodes
    /// on any path from the root down to a missing child, root included. An
    /// empty tree has black-height 0.
    pub fn validate(&self) -> Result<usize, InvariantViolation> {
        let Some(root) = self.root else {
            return match self.len {
                0 => Ok(0),
                reported => Err(InvariantViolation::LengthMismatch {
                    reported,
                    reachable: 0,
                }),
            };
        };

        let node = self.node(root);
        if node.color == Color::Red {
            return Err(InvariantViolation::RedRoot { key: node.key });
        }
        if node.parent.is_some() {
            return Err(InvariantViolation::RootHasParent { key: node.key });
        }

        let summary = self.check_subtree(root, None, None)?;
        if summary.count != self.len {
            return Err(InvariantViolation::LengthMismatch {
                reported: self.len,
                reachable: summary.count,
            });
        }
        Ok(summary.black_height)
    }

    fn check_subtree(
        &self,
        id: NodeId,
        lower: Option<Key>,
        upper: Option<Key>,
    ) -> Result<SubtreeSummary, InvariantViolation> {
        let node = self.node(id);

        let above_lower = lower.map_or(true, |lower| node.key > lower);
        let below_upper = upper.map_or(true, |upper| node.key < upper);
        if !above_lower || !below_upper {
            return Err(InvariantViolation::OrderViolation {
                key: node.key,
                lower,
                upper,
            });
        }

        let mut heights = [0usize; 2];
        let mut count = 1;
        for (slot, child) in [node.left, node.right].into_iter().enumerate() {
            let Some(child) = child else {
                continue;
            };
            let child_node = self.node(child);
            if child_node.parent != Some(id) {
                return Err(InvariantViolation::ParentLinkMismatch {
                    key: child_node.key,
                });
            }
            if node.color == Color::Red && child_node.color == Color::Red {
                return Err(InvariantViolation::RedRedEdge {
                    parent: node.key,
                    child: child_node.key,
                });
            }

            let (child_lower, child_upper) = if slot == 0 {
                (lower, Some(node.key))
            } else {
                (Some(node.key), upper)
            };
            let summary = self.check_subtree(child, child_lower, child_upper)?;
            heights[slot] = summary.black_height;
            count += summary.count;
        }

        let [left, right] = heights;
        if left != right {
            return Err(InvariantViolation::BlackHeightMismatch {
                key: node.key,
                left,
                right,
            });
        }

        let own = usize::from(node.color == Color::Black);
        Ok(SubtreeSummary {
            black_height: left + own,
            count,
        })
    }
}
