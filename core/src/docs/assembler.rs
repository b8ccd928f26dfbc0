#![deny(missing_docs)]

//! # Document Assembly
//!
//! Renders a [`SpecDocument`] into the Markdown draft.
//!
//! Rendering is a pure fold over the model; [`DocumentAssembler`] adds the
//! checkpoint write that makes the draft recoverable if later stages fail.

use crate::error::AppResult;
use crate::export::write_document;
use crate::oas::models::{Parameter, SpecDocument, NOT_APPLICABLE, NO_DESCRIPTION};
use crate::oas::node::Node;
use std::fmt::Write;
use std::path::{Path, PathBuf};

/// Renders the Markdown draft for a parsed document.
pub fn render_documentation(doc: &SpecDocument) -> String {
    let mut out = String::new();
    let meta = &doc.metadata;

    // Writing into a String cannot fail.
    let _ = write!(out, "# {} (v{})\n\n", meta.title, meta.version);
    let _ = write!(out, "{}\n\n", meta.description);

    for (path, methods) in &doc.paths {
        let _ = writeln!(out, "## Path: {}", path);
        for (method, op) in methods {
            let _ = writeln!(out, "### Method: {}", method.to_uppercase());
            let _ = writeln!(out, "Description: {}", op.description);

            out.push_str("Parameters:\n");
            for param in &op.parameters {
                let _ = writeln!(out, "{}", render_parameter(param));
            }

            out.push_str("Responses:\n");
            for (status, response) in &op.responses {
                let _ = writeln!(out, "- {}: {}", status, response_description(response));
            }
            out.push('\n');
        }
    }

    out
}

fn render_parameter(param: &Parameter) -> String {
    format!(
        "- {} ({}): {} (Required: {}, Type: {}, Format: {})",
        param.name.as_deref().unwrap_or(NOT_APPLICABLE),
        param
            .location
            .as_ref()
            .map(|l| l.as_str())
            .unwrap_or(NOT_APPLICABLE),
        param.description,
        param.required,
        param.ty,
        param.format
    )
}

fn response_description(response: &Node) -> String {
    response.str_or("description", NO_DESCRIPTION)
}

/// Renders drafts and checkpoints them to disk.
#[derive(Debug, Clone)]
pub struct DocumentAssembler {
    checkpoint: Option<PathBuf>,
}

impl DocumentAssembler {
    /// An assembler that writes each draft to `checkpoint`.
    pub fn new(checkpoint: impl Into<PathBuf>) -> Self {
        Self {
            checkpoint: Some(checkpoint.into()),
        }
    }

    /// An assembler that only renders.
    pub fn in_memory() -> Self {
        Self { checkpoint: None }
    }

    /// The checkpoint destination, if any.
    pub fn checkpoint(&self) -> Option<&Path> {
        self.checkpoint.as_deref()
    }

    /// Renders the draft and, when configured, writes the checkpoint artifact.
    pub fn assemble(&self, doc: &SpecDocument) -> AppResult<String> {
        let draft = render_documentation(doc);
        if let Some(path) = &self.checkpoint {
            write_document(path, &draft)?;
            tracing::info!(path = %path.display(), "Intermediate documentation checkpointed");
        }
        Ok(draft)
    }
}
