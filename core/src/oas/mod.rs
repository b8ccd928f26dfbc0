#![deny(missing_docs)]

//! # OpenAPI Parsing Module
//!
//! - **node**: Typed, order-preserving tree for raw documents.
//! - **ref_utils**: Intra-document `$ref` resolution.
//! - **params**: Parameter normalization.
//! - **models**: The normalized document model.
//! - **document**: Parsing logic for metadata and paths.

pub mod document;
pub mod models;
pub mod node;
pub mod params;
pub mod ref_utils;

// Re-export public API
pub use document::{parse_metadata, parse_spec_document, parse_spec_file, parse_spec_node};
pub use models::{Metadata, Operation, ParamLocation, Parameter, PathItem, SpecDocument};
pub use node::{Node, Scalar};
pub use params::extract_parameters;
pub use ref_utils::resolve_ref;
