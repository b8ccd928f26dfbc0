#![deny(missing_docs)]

//! # Summarize Tests Command
//!
//! Prints the "Unit Test Summary" block harvested from a Python test file.

use apidoc_core::config::DEFAULT_TESTS_PATH;
use apidoc_core::{extract_behaviors, summarize_behaviors, AppResult};
use std::path::PathBuf;

/// Arguments for the summarize-tests command.
#[derive(clap::Args, Debug, Clone)]
pub struct SummarizeArgs {
    /// Python test suite to inspect. It is parsed, never executed.
    #[clap(long, env = "APIDOC_TESTS", default_value = DEFAULT_TESTS_PATH)]
    pub tests: PathBuf,
}

/// Executes the summarize-tests command.
pub fn execute(args: &SummarizeArgs) -> AppResult<()> {
    println!("{}", summary(args)?);
    Ok(())
}

fn summary(args: &SummarizeArgs) -> AppResult<String> {
    let notes = extract_behaviors(&args.tests)?;
    tracing::debug!(tests = notes.len(), path = %args.tests.display(), "Behaviors extracted");
    Ok(summarize_behaviors(&notes))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_summary_lists_each_test() {
        let dir = tempdir().unwrap();
        let tests = dir.path().join("test_api.py");
        fs::write(
            &tests,
            "def test_a():\n    \"\"\"First.\"\"\"\n    print('a')\n\ndef test_b():\n    pass\n",
        )
        .unwrap();

        let text = summary(&SummarizeArgs { tests }).unwrap();
        assert_eq!(
            text,
            "### Unit Test Summary:\n\n\
             - **test_a**: First.\n  - Expected output: print('a')\n\n\
             - **test_b**: No description provided.\n  - Expected output: No explicit output provided."
        );
    }

    #[test]
    fn test_syntax_error_is_reported() {
        let dir = tempdir().unwrap();
        let tests = dir.path().join("broken.py");
        fs::write(&tests, "def test_(:\n").unwrap();
        assert!(summary(&SummarizeArgs { tests }).is_err());
    }
}
