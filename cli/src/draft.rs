#![deny(missing_docs)]

//! # Draft Command
//!
//! Parses the specification and renders the Markdown draft without test
//! summaries or enhancement.

use apidoc_core::config::DEFAULT_SPEC_PATH;
use apidoc_core::{parse_spec_file, AppResult, DocumentAssembler};
use std::path::PathBuf;

/// Arguments for the draft command.
#[derive(clap::Args, Debug, Clone)]
pub struct DraftArgs {
    /// Swagger / OpenAPI document (JSON or YAML).
    #[clap(long, env = "APIDOC_SPEC", default_value = DEFAULT_SPEC_PATH)]
    pub spec: PathBuf,

    /// Where to write the draft.
    /// If not provided, prints to stdout.
    #[clap(long, short)]
    pub output: Option<PathBuf>,
}

/// Executes the draft command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &DraftArgs) -> AppResult<()> {
    let draft = render(args)?;
    if args.output.is_none() {
        print!("{}", draft);
    }
    Ok(())
}

fn render(args: &DraftArgs) -> AppResult<String> {
    let spec = parse_spec_file(&args.spec)?;
    let assembler = match &args.output {
        Some(path) => DocumentAssembler::new(path),
        None => DocumentAssembler::in_memory(),
    };
    assembler.assemble(&spec)
}
