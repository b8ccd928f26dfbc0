#![deny(missing_docs)]

//! # apidoc Core
//!
//! Core library turning Swagger / OpenAPI documents into Markdown documentation,
//! enriched with behavior notes from a Python test suite and polished by a
//! text-generation backend.

/// Shared error types.
pub mod error;

/// Run configuration and credentials.
pub mod config;

/// OpenAPI (OAS) parsing utilities.
pub mod oas;

/// Markdown rendering.
pub mod docs;

/// Test-suite inspection.
pub mod behavior;

/// Backend enhancement (fail-open).
pub mod enhance;

/// Artifact writing.
pub mod export;

/// End-to-end orchestration.
pub mod pipeline;

pub use behavior::{
    extract_behaviors, extract_behaviors_from_source, merge_behaviors, summarize_behaviors,
    BehaviorNote,
};
pub use config::{BackendSettings, Credentials, PipelineConfig};
pub use docs::{render_documentation, DocumentAssembler};
pub use enhance::{
    compose_prompt, enhance_documentation, enhance_with, select_backend, BackendError,
    BackendKind, EnhancementBackend,
};
pub use error::{AppError, AppResult};
pub use export::write_document;
pub use oas::{
    extract_parameters, parse_metadata, parse_spec_document, parse_spec_file, resolve_ref,
    Metadata, Node, Operation, ParamLocation, Parameter, PathItem, SpecDocument,
};
pub use pipeline::{run_pipeline, run_pipeline_with, PipelineReport};
