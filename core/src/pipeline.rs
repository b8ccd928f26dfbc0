#![deny(missing_docs)]

//! # Documentation Pipeline
//!
//! Runs the stages in order:
//!
//! 1. Parse the specification document.
//! 2. Assemble the draft and checkpoint it.
//! 3. Extract behavior notes from the test suite and merge them.
//! 4. Enhance through the configured backend (fail-open).
//! 5. Export the final document.

use crate::behavior::{extract_behaviors, merge_behaviors, BehaviorNote};
use crate::config::PipelineConfig;
use crate::docs::DocumentAssembler;
use crate::enhance::{enhance_with, select_backend, EnhancementBackend};
use crate::error::AppResult;
use crate::export::write_document;
use crate::oas::{parse_spec_file, SpecDocument};

/// Everything produced by a run.
#[derive(Debug, Clone)]
pub struct PipelineReport {
    /// The parsed specification.
    pub spec: SpecDocument,
    /// Draft as checkpointed to the intermediate artifact.
    pub draft: String,
    /// Notes harvested from the test suite.
    pub behaviors: Vec<BehaviorNote>,
    /// Draft plus the test summary; the fallback when enhancement fails.
    pub merged: String,
    /// The exported final document.
    pub final_document: String,
}

/// Runs the pipeline with the backend named in `config`.
pub fn run_pipeline(config: &PipelineConfig) -> AppResult<PipelineReport> {
    let backend = select_backend(&config.backend, &config.backend_settings);
    run_pipeline_with(config, backend.as_deref())
}

/// Runs the pipeline with an explicit backend. `None` skips enhancement.
pub fn run_pipeline_with(
    config: &PipelineConfig,
    backend: Option<&dyn EnhancementBackend>,
) -> AppResult<PipelineReport> {
    let spec = parse_spec_file(&config.spec_path)?;
    tracing::info!(
        path = %config.spec_path.display(),
        paths = spec.paths.len(),
        "Specification parsed"
    );

    let draft = DocumentAssembler::new(&config.intermediate_path).assemble(&spec)?;
    tracing::info!("Base documentation generated");

    let behaviors = extract_behaviors(&config.tests_path)?;
    let merged = merge_behaviors(&draft, &behaviors);
    tracing::info!(tests = behaviors.len(), "Updated documentation with test summaries");

    let final_document = match backend {
        Some(backend) => enhance_with(backend, &merged),
        None => merged.clone(),
    };
    tracing::info!("Enhancement stage finished");

    write_document(&config.output_path, &final_document)?;
    tracing::info!(path = %config.output_path.display(), "Documentation exported");

    Ok(PipelineReport {
        spec,
        draft,
        behaviors,
        merged,
        final_document,
    })
}
