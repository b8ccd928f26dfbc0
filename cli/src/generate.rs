#![deny(missing_docs)]

//! # Generate Command
//!
//! Runs the whole documentation pipeline:
//! spec -> draft (checkpoint) -> test summary -> enhancement -> export.

use apidoc_core::config::{
    DEFAULT_BACKEND, DEFAULT_INTERMEDIATE_PATH, DEFAULT_OUTPUT_PATH, DEFAULT_SPEC_PATH,
    DEFAULT_TESTS_PATH,
};
use apidoc_core::{run_pipeline, AppResult, BackendSettings, Credentials, PipelineConfig};
use std::path::PathBuf;

/// Arguments for the generate command.
#[derive(clap::Args, Debug, Clone)]
pub struct GenerateArgs {
    /// Swagger / OpenAPI document (JSON or YAML).
    #[clap(long, env = "APIDOC_SPEC", default_value = DEFAULT_SPEC_PATH)]
    pub spec: PathBuf,

    /// Python test suite to summarize.
    #[clap(long, env = "APIDOC_TESTS", default_value = DEFAULT_TESTS_PATH)]
    pub tests: PathBuf,

    /// Checkpoint for the unenhanced draft.
    #[clap(long, env = "APIDOC_INTERMEDIATE", default_value = DEFAULT_INTERMEDIATE_PATH)]
    pub intermediate: PathBuf,

    /// Final document.
    #[clap(long, short, env = "APIDOC_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    pub output: PathBuf,

    /// Enhancement backend: openai, gemini or fynd.
    #[clap(long, env = "APIDOC_BACKEND", default_value = DEFAULT_BACKEND)]
    pub backend: String,

    /// Model override for the selected backend.
    #[clap(long, env = "APIDOC_MODEL")]
    pub model: Option<String>,

    /// Endpoint override for the selected backend.
    #[clap(long, env = "APIDOC_ENDPOINT")]
    pub endpoint: Option<String>,
}

impl GenerateArgs {
    /// Builds the pipeline configuration with the given credentials.
    pub fn to_config(&self, credentials: Credentials) -> PipelineConfig {
        PipelineConfig {
            spec_path: self.spec.clone(),
            tests_path: self.tests.clone(),
            intermediate_path: self.intermediate.clone(),
            output_path: self.output.clone(),
            backend: self.backend.clone(),
            backend_settings: BackendSettings {
                credentials,
                model: self.model.clone(),
                endpoint: self.endpoint.clone(),
            },
        }
    }
}

/// Executes the generate command.
///
/// # Arguments
///
/// * `args` - Command arguments.
pub fn execute(args: &GenerateArgs) -> AppResult<()> {
    run_with(args, Credentials::from_env())
}

fn run_with(args: &GenerateArgs, credentials: Credentials) -> AppResult<()> {
    let config = args.to_config(credentials);
    tracing::debug!(?config, "Starting documentation run");

    let report = run_pipeline(&config)?;
    println!(
        "Documented {} paths and {} tests into {}",
        report.spec.paths.len(),
        report.behaviors.len(),
        config.output_path.display()
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use apidoc_core::AppError;
    use std::fs;
    use tempfile::tempdir;

    fn args_in(dir: &std::path::Path) -> GenerateArgs {
        GenerateArgs {
            spec: dir.join("swagger.yaml"),
            tests: dir.join("test_api.py"),
            intermediate: dir.join("intermediate.md"),
            output: dir.join("docs/documentation.md"),
            backend: "unsupported".into(),
            model: None,
            endpoint: None,
        }
    }

    #[test]
    fn test_generate_writes_both_artifacts() {
        let dir = tempdir().unwrap();
        let args = args_in(dir.path());
        fs::write(
            &args.spec,
            "info:\n  title: Store\n  version: '2'\npaths:\n  /ping:\n    get:\n      responses:\n        200:\n          description: pong\n",
        )
        .unwrap();
        fs::write(
            &args.tests,
            "def test_ping():\n    \"\"\"Ping answers.\"\"\"\n    assert ping() == 'pong'\n",
        )
        .unwrap();

        run_with(&args, Credentials::default()).unwrap();

        let draft = fs::read_to_string(&args.intermediate).unwrap();
        assert!(draft.starts_with("# Store (v2)"));
        let final_doc = fs::read_to_string(&args.output).unwrap();
        assert!(final_doc.starts_with(&draft));
        assert!(final_doc.contains("- **test_ping**: Ping answers."));
        assert!(final_doc.contains("  - Expected output: assert ping() == 'pong'"));
    }

    #[test]
    fn test_missing_spec_is_an_error() {
        let dir = tempdir().unwrap();
        let args = args_in(dir.path());
        let err = run_with(&args, Credentials::default()).unwrap_err();
        assert!(matches!(err, AppError::Parse(_)));
        assert!(!args.output.exists());
    }

    #[test]
    fn test_to_config_carries_overrides() {
        let dir = tempdir().unwrap();
        let mut args = args_in(dir.path());
        args.backend = "openai".into();
        args.model = Some("gpt-4o-mini".into());
        let config = args.to_config(Credentials {
            openai_api_key: Some("sk-test".into()),
            ..Default::default()
        });
        assert_eq!(config.backend, "openai");
        assert_eq!(config.backend_settings.model.as_deref(), Some("gpt-4o-mini"));
        assert_eq!(
            config.backend_settings.credentials.openai_api_key.as_deref(),
            Some("sk-test")
        );
    }
}
