//! # Test Summary Rendering

use crate::behavior::BehaviorNote;
use std::fmt::Write;

/// Heading placed above the rendered notes.
pub const SUMMARY_HEADING: &str = "### Unit Test Summary:";

/// Renders notes as a Markdown list under [`SUMMARY_HEADING`].
///
/// ```text
/// ### Unit Test Summary:
///
/// - **test_add_pet**: Test the addition of a new pet.
///   - Expected output: assert response.status_code == 200, print("ok")
/// ```
pub fn summarize_behaviors(notes: &[BehaviorNote]) -> String {
    let mut out = format!("{}\n\n", SUMMARY_HEADING);
    for note in notes {
        let _ = writeln!(out, "- **{}**: {}", note.function_name, note.description);
        let _ = write!(
            out,
            "  - Expected output: {}\n\n",
            note.expected_outcomes.join(", ")
        );
    }
    out.trim().to_string()
}

/// Appends the test summary to the draft, separated by a blank line.
pub fn merge_behaviors(draft: &str, notes: &[BehaviorNote]) -> String {
    format!("{}\n\n{}", draft, summarize_behaviors(notes))
}
