#![deny(missing_docs)]

//! # OpenAPI Document Parsing
//!
//! Walks a raw Swagger / OpenAPI document (JSON or YAML) into a [`SpecDocument`].
//!
//! Only the top level is strict: it must be a keyed container. Everything below
//! it degrades to documented defaults.

use crate::error::{AppError, AppResult};
use crate::oas::models::{
    Metadata, Operation, PathItem, SpecDocument, NO_CONTACT, NO_DESCRIPTION, NO_DOC_DESCRIPTION,
    NO_LICENSE, NO_TERMS, NO_TITLE, NO_VERSION,
};
use crate::oas::node::Node;
use crate::oas::params::extract_parameters;
use indexmap::IndexMap;
use std::fs;
use std::path::Path;

/// HTTP methods recognised as operations within a path item.
pub const HTTP_METHODS: [&str; 8] = [
    "get", "put", "post", "delete", "options", "head", "patch", "trace",
];

/// Parses raw document text (JSON, falling back to YAML) into a [`Node`] tree.
///
/// Fails when the text is neither JSON nor YAML, or when its root is not a keyed container.
pub fn parse_raw_document(content: &str) -> AppResult<Node> {
    let node = match serde_json::from_str::<serde_json::Value>(content) {
        Ok(value) => Node::from(value),
        Err(json_err) => {
            let value: serde_yaml::Value = serde_yaml::from_str(content).map_err(|yaml_err| {
                AppError::Parse(format!(
                    "Failed to parse specification as JSON ({}) or YAML ({})",
                    json_err, yaml_err
                ))
            })?;
            Node::from(value)
        }
    };

    if !node.is_container() {
        return Err(AppError::Parse(
            "Specification root must be a keyed object".into(),
        ));
    }
    Ok(node)
}

/// Parses a specification document from its text.
pub fn parse_spec_document(content: &str) -> AppResult<SpecDocument> {
    let raw = parse_raw_document(content)?;
    Ok(parse_spec_node(&raw))
}

/// Reads and parses a specification document from disk.
pub fn parse_spec_file(path: &Path) -> AppResult<SpecDocument> {
    let content = fs::read_to_string(path).map_err(|e| {
        AppError::Parse(format!(
            "Failed to read specification {}: {}",
            path.display(),
            e
        ))
    })?;
    parse_spec_document(&content)
}

/// Builds the normalized model from an already parsed root node.
pub fn parse_spec_node(root: &Node) -> SpecDocument {
    SpecDocument {
        metadata: parse_metadata(root),
        paths: parse_paths(root),
    }
}

/// Extracts the six `info` fields, each defaulted independently.
pub fn parse_metadata(root: &Node) -> Metadata {
    let info = root.get_or_default("info");
    Metadata {
        title: info.str_or("title", NO_TITLE),
        version: info.str_or("version", NO_VERSION),
        description: info.str_or("description", NO_DOC_DESCRIPTION),
        terms_of_service: info.str_or("termsOfService", NO_TERMS),
        contact: info
            .get("contact")
            .and_then(describe_contact)
            .unwrap_or_else(|| NO_CONTACT.to_string()),
        license: info
            .get("license")
            .and_then(describe_license)
            .unwrap_or_else(|| NO_LICENSE.to_string()),
    }
}

fn parse_paths(root: &Node) -> IndexMap<String, PathItem> {
    let Some(paths) = root.get("paths").and_then(Node::as_container) else {
        return IndexMap::new();
    };

    paths
        .iter()
        .filter(|(path, _)| !path.starts_with("x-"))
        .map(|(path, item)| (path.clone(), parse_path_item(item, root)))
        .collect()
}

fn parse_path_item(item: &Node, root: &Node) -> PathItem {
    let Some(entries) = item.as_container() else {
        return PathItem::new();
    };

    entries
        .iter()
        .filter_map(|(method, details)| {
            let method = method.to_ascii_lowercase();
            HTTP_METHODS
                .contains(&method.as_str())
                .then(|| (method, parse_operation(details, root)))
        })
        .collect()
}

fn parse_operation(details: &Node, root: &Node) -> Operation {
    let parameters = details
        .get("parameters")
        .and_then(Node::as_list)
        .map(|raw| extract_parameters(raw, root))
        .unwrap_or_default();

    let responses = details
        .get("responses")
        .and_then(Node::as_container)
        .cloned()
        .unwrap_or_default();

    Operation {
        description: details.str_or("description", NO_DESCRIPTION),
        parameters,
        responses,
    }
}

/// `name <email> (url)` with absent parts omitted.
fn describe_contact(contact: &Node) -> Option<String> {
    if let Some(text) = contact.as_str() {
        return non_blank(text);
    }
    let mut parts = Vec::new();
    if let Some(name) = contact.get("name").and_then(Node::as_str) {
        parts.push(name.to_string());
    }
    if let Some(email) = contact.get("email").and_then(Node::as_str) {
        parts.push(format!("<{}>", email));
    }
    if let Some(url) = contact.get("url").and_then(Node::as_str) {
        parts.push(format!("({})", url));
    }
    non_blank(&parts.join(" "))
}

/// `name (url)` with absent parts omitted.
fn describe_license(license: &Node) -> Option<String> {
    if let Some(text) = license.as_str() {
        return non_blank(text);
    }
    let mut parts = Vec::new();
    if let Some(name) = license
        .get("name")
        .or_else(|| license.get("identifier"))
        .and_then(Node::as_str)
    {
        parts.push(name.to_string());
    }
    if let Some(url) = license.get("url").and_then(Node::as_str) {
        parts.push(format!("({})", url));
    }
    non_blank(&parts.join(" "))
}

fn non_blank(text: &str) -> Option<String> {
    let trimmed = text.trim();
    (!trimmed.is_empty()).then(|| trimmed.to_string())
}
