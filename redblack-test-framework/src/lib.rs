//! Test framework for the red-black tree
//!
//! Gherkin scenarios live in `features/` and are driven by
//! `tests/tree_tests.rs`. This library holds the step helpers.

pub mod helpers;
