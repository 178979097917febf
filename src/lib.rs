//! Redblack - red-black tree of integer keys
//!
//! A self-balancing binary search tree with parent back-links and no sentinel
//! node. Insertion and deletion restore the red-black properties with explicit
//! fixup passes built from rotations and recoloring.
//!
//! ```
//! use redblack::{Color, RbTree};
//!
//! let mut tree = RbTree::new();
//! for key in [10, 20, 30] {
//!     assert!(tree.insert(key).unwrap());
//! }
//!
//! let root = tree.root().unwrap();
//! assert_eq!(root.key(), 20);
//! assert_eq!(root.color(), Color::Black);
//! assert_eq!(tree.iter().collect::<Vec<_>>(), vec![10, 20, 30]);
//!
//! assert!(tree.delete(20));
//! assert!(!tree.delete(20));
//! assert!(tree.validate().is_ok());
//! ```

pub mod config;
pub mod error;
pub mod tree;
pub mod utils;

#[cfg(any(test, feature = "test-utils"))]
pub mod test_utils;

pub use error::{Result, TreeError};
pub use tree::{Color, InvariantViolation, Iter, Key, NodeId, NodeRef, NodeView, RbTree};
