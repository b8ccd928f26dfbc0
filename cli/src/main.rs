#![deny(missing_docs)]

//! # apidoc CLI
//!
//! Command Line Interface for the documentation generator.
//!
//! Supported Commands:
//! - `generate`: Spec + tests -> draft -> enhanced Markdown.
//! - `draft`: Renders the Markdown draft from a spec only.
//! - `summarize-tests`: Prints the behavior summary of a Python test file.

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use crate::error::{CliError, CliResult};

mod draft;
mod error;
mod generate;
mod summarize;

#[derive(Parser, Debug)]
#[clap(author, version, about = "API documentation generator")]
struct Cli {
    /// Log at debug level (overridden by RUST_LOG).
    #[clap(long, short, global = true)]
    verbose: bool,

    #[clap(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Runs the full pipeline and exports the final document.
    Generate(generate::GenerateArgs),
    /// Parses the spec and writes the unenhanced draft.
    Draft(draft::DraftArgs),
    /// Prints the unit test summary for a Python test file.
    SummarizeTests(summarize::SummarizeArgs),
}

fn init_tracing(verbose: bool) -> CliResult<()> {
    let default_level = if verbose { "debug" } else { "info" };
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_level));

    // stdout carries command output; diagnostics go to stderr.
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
        .map_err(|e| CliError::General(format!("Failed to initialise logging: {}", e)))
}

fn main() -> CliResult<()> {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose)?;

    match &cli.command {
        Commands::Generate(args) => generate::execute(args)?,
        Commands::Draft(args) => draft::execute(args)?,
        Commands::SummarizeTests(args) => summarize::execute(args)?,
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn verify_cli_structure() {
        use clap::CommandFactory;
        Cli::command().debug_assert();
    }

    #[test]
    fn test_verbose_is_global() {
        let cli = Cli::try_parse_from(["apidoc", "summarize-tests", "--verbose"]).unwrap();
        assert!(cli.verbose);
        assert!(matches!(cli.command, Commands::SummarizeTests(_)));
    }
}
