#![deny(missing_docs)]

//! # Parameter Extraction
//!
//! Normalizes raw parameter objects into [`Parameter`] values.
//! Handles inline Swagger 2.0 parameters (`type`/`format` on the parameter),
//! OpenAPI 3.x parameters (`schema.type`/`schema.format`) and `$ref` parameters.

use crate::oas::models::{ParamLocation, Parameter, NOT_APPLICABLE, NO_DESCRIPTION};
use crate::oas::node::Node;
use crate::oas::ref_utils::resolve_ref;

/// Extracts parameters in declaration order, resolving references against `document`.
///
/// References are resolved exactly once. A reference whose target is itself a
/// reference is not followed, which keeps cyclic documents finite.
pub fn extract_parameters(raw: &[Node], document: &Node) -> Vec<Parameter> {
    raw.iter()
        .map(|node| match node.reference() {
            Some(reference) => {
                let resolved = resolve_ref(reference, document);
                if resolved.is_reference() {
                    tracing::debug!(reference, "Parameter reference points at another reference");
                }
                extract_parameter(&resolved)
            }
            None => extract_parameter(node),
        })
        .collect()
}

/// Normalizes a single (already resolved) parameter object.
pub fn extract_parameter(node: &Node) -> Parameter {
    let schema = node.get_or_default("schema");

    Parameter {
        name: node.get("name").and_then(Node::as_text),
        location: node
            .get("in")
            .and_then(Node::as_str)
            .map(ParamLocation::parse),
        description: node.str_or("description", NO_DESCRIPTION),
        required: node.bool_or("required", false),
        ty: first_text(node, schema, "type"),
        format: first_text(node, schema, "format"),
    }
}

fn first_text(node: &Node, schema: &Node, key: &str) -> String {
    node.get(key)
        .and_then(Node::as_text)
        .or_else(|| schema.get(key).and_then(Node::as_text))
        .unwrap_or_else(|| NOT_APPLICABLE.to_string())
}
