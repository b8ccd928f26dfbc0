//! # Documentation Rendering
//!
//! Turns the normalized model into the Markdown draft.

pub mod assembler;

pub use assembler::{render_documentation, DocumentAssembler};
