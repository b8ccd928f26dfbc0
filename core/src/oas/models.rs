#![deny(missing_docs)]

//! # OpenAPI Models
//!
//! The normalized in-memory model built from a raw specification document.
//!
//! Every field carries its documented default, so rendering never has to deal
//! with missing data.

use crate::oas::node::Node;
use indexmap::IndexMap;
use std::fmt;

/// Placeholder used when `info.title` is missing.
pub const NO_TITLE: &str = "No title provided";
/// Placeholder used when `info.version` is missing.
pub const NO_VERSION: &str = "No version provided";
/// Placeholder used when `info.description` is missing.
pub const NO_DOC_DESCRIPTION: &str = "No description provided";
/// Placeholder used when `info.termsOfService` is missing.
pub const NO_TERMS: &str = "No terms provided";
/// Placeholder used when `info.contact` is missing.
pub const NO_CONTACT: &str = "No contact provided";
/// Placeholder used when `info.license` is missing.
pub const NO_LICENSE: &str = "No license provided";
/// Placeholder for operation, parameter and response descriptions.
pub const NO_DESCRIPTION: &str = "No description";
/// Placeholder for parameter `type` and `format`.
pub const NOT_APPLICABLE: &str = "N/A";

/// The fully parsed specification.
#[derive(Debug, Clone, PartialEq)]
pub struct SpecDocument {
    /// Document-level metadata from `info`.
    pub metadata: Metadata,
    /// Paths in source order.
    pub paths: IndexMap<String, PathItem>,
}

/// Document metadata. Each field is defaulted independently.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metadata {
    /// API title.
    pub title: String,
    /// API version.
    pub version: String,
    /// Long-form description.
    pub description: String,
    /// Terms of service.
    pub terms_of_service: String,
    /// Contact details, flattened into one line.
    pub contact: String,
    /// License details, flattened into one line.
    pub license: String,
}

impl Default for Metadata {
    fn default() -> Self {
        Self {
            title: NO_TITLE.to_string(),
            version: NO_VERSION.to_string(),
            description: NO_DOC_DESCRIPTION.to_string(),
            terms_of_service: NO_TERMS.to_string(),
            contact: NO_CONTACT.to_string(),
            license: NO_LICENSE.to_string(),
        }
    }
}

/// Operations of one path, keyed by lowercase HTTP method.
pub type PathItem = IndexMap<String, Operation>;

/// A single HTTP operation.
#[derive(Debug, Clone, PartialEq)]
pub struct Operation {
    /// Operation description.
    pub description: String,
    /// Parameters in declaration order.
    pub parameters: Vec<Parameter>,
    /// Raw response descriptors keyed by status code.
    pub responses: IndexMap<String, Node>,
}

impl Default for Operation {
    fn default() -> Self {
        Self {
            description: NO_DESCRIPTION.to_string(),
            parameters: Vec::new(),
            responses: IndexMap::new(),
        }
    }
}

/// A normalized parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Parameter {
    /// Parameter name, absent when the source (or its reference target) has none.
    pub name: Option<String>,
    /// Parameter location (`in`).
    pub location: Option<ParamLocation>,
    /// Description.
    pub description: String,
    /// Whether the parameter is required.
    pub required: bool,
    /// Primitive type.
    pub ty: String,
    /// Format modifier.
    pub format: String,
}

impl Default for Parameter {
    fn default() -> Self {
        Self {
            name: None,
            location: None,
            description: NO_DESCRIPTION.to_string(),
            required: false,
            ty: NOT_APPLICABLE.to_string(),
            format: NOT_APPLICABLE.to_string(),
        }
    }
}

/// The location of a parameter (`in`).
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ParamLocation {
    /// `?key=value`
    Query,
    /// HTTP header.
    Header,
    /// Templated path segment.
    Path,
    /// Cookie value.
    Cookie,
    /// Swagger 2.0 form field.
    FormData,
    /// Swagger 2.0 request body.
    Body,
    /// Any other value, kept verbatim.
    Other(String),
}

impl ParamLocation {
    /// Maps the raw `in` value. Known locations match case-insensitively.
    pub fn parse(raw: &str) -> Self {
        match raw.to_ascii_lowercase().as_str() {
            "query" => Self::Query,
            "header" => Self::Header,
            "path" => Self::Path,
            "cookie" => Self::Cookie,
            "formdata" => Self::FormData,
            "body" => Self::Body,
            _ => Self::Other(raw.to_string()),
        }
    }

    /// The canonical spelling used in documents.
    pub fn as_str(&self) -> &str {
        match self {
            Self::Query => "query",
            Self::Header => "header",
            Self::Path => "path",
            Self::Cookie => "cookie",
            Self::FormData => "formData",
            Self::Body => "body",
            Self::Other(raw) => raw,
        }
    }
}

impl fmt::Display for ParamLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_param_location_round_trip_spelling() {
        assert_eq!(ParamLocation::parse("formData"), ParamLocation::FormData);
        assert_eq!(ParamLocation::parse("QUERY"), ParamLocation::Query);
        assert_eq!(ParamLocation::FormData.to_string(), "formData");
        assert_eq!(
            ParamLocation::parse("querystring"),
            ParamLocation::Other("querystring".into())
        );
    }

    #[test]
    fn test_parameter_defaults() {
        let p = Parameter::default();
        assert!(p.name.is_none());
        assert!(p.location.is_none());
        assert_eq!(p.description, "No description");
        assert!(!p.required);
        assert_eq!(p.ty, "N/A");
        assert_eq!(p.format, "N/A");
    }
}
