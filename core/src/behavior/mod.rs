#![deny(missing_docs)]

//! # Behavior Notes
//!
//! Harvests human-readable expectations from a Python test suite and merges
//! them into the documentation draft.
//!
//! - **extractor**: Static inspection of the test file (tree-sitter, never executed).
//! - **summary**: Markdown rendering of the notes and the merge into the draft.

pub mod extractor;
pub mod summary;

pub use extractor::{extract_behaviors, extract_behaviors_from_source};
pub use summary::{merge_behaviors, summarize_behaviors};

/// Placeholder description for test functions without a docstring.
pub const NO_TEST_DESCRIPTION: &str = "No description provided.";

/// Placeholder outcome for test functions without assertions or prints.
pub const NO_EXPECTED_OUTPUT: &str = "No explicit output provided.";

/// Expectations harvested from a single test function.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BehaviorNote {
    /// Name of the test function (e.g. `test_add_pet`).
    pub function_name: String,
    /// Cleaned docstring, or [`NO_TEST_DESCRIPTION`].
    pub description: String,
    /// Assertions and printed output, in source order.
    /// Holds the single [`NO_EXPECTED_OUTPUT`] entry when none were found.
    pub expected_outcomes: Vec<String>,
}
