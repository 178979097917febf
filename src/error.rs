//! Error types for tree operations.
//!
//! Only resource exhaustion is reported through `Result`. A duplicate insert or
//! a delete of an absent key is an ordinary `false` outcome, and a broken
//! invariant found while rebalancing is a defect that panics instead.

use std::collections::TryReserveError;

/// Result type for tree operations.
pub type Result<T> = std::result::Result<T, TreeError>;

/// Errors that can occur while mutating a tree.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TreeError {
    #[error("Out of memory: node arena could not grow: {0}")]
    OutOfMemory(#[from] TryReserveError),

    #[error("Out of memory: node limit of {limit} reached")]
    NodeLimitReached { limit: usize },
}

impl TreeError {
    /// True for every allocation-failure condition, whatever its source.
    pub fn is_out_of_memory(&self) -> bool {
        matches!(
            self,
            TreeError::OutOfMemory(_) | TreeError::NodeLimitReached { .. }
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_node_limit_message() {
        let err = TreeError::NodeLimitReached { limit: 8 };
        assert_eq!(err.to_string(), "Out of memory: node limit of 8 reached");
        assert!(err.is_out_of_memory());
    }

    #[test]
    fn test_reserve_failure_converts() {
        let mut v: Vec<u64> = Vec::new();
        let reserve_err = v.try_reserve(usize::MAX).unwrap_err();
        let err: TreeError = reserve_err.into();
        assert!(err.is_out_of_memory());
        assert!(err.to_string().starts_with("Out of memory"));
    }
}
