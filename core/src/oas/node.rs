#![deny(missing_docs)]

//! # Document Nodes
//!
//! A typed, order-preserving tree for raw specification documents.
//!
//! Every accessor is total: looking up a key on a scalar, or a missing key on a
//! container, yields `None` (or the shared empty container via
//! [`Node::get_or_default`]) instead of panicking.

use indexmap::IndexMap;
use serde_json::Value as JsonValue;
use serde_yaml::Value as YamlValue;
use std::fmt;
use std::sync::LazyLock;

/// Key used by Swagger / OpenAPI documents to mark a reference object.
pub const REF_KEY: &str = "$ref";

static EMPTY_CONTAINER: LazyLock<Node> = LazyLock::new(Node::empty);

/// A leaf value of the document tree.
#[derive(Debug, Clone, PartialEq)]
pub enum Scalar {
    /// `null` / `~`.
    Null,
    /// `true` / `false`.
    Bool(bool),
    /// Any numeric literal, kept in its JSON representation.
    Number(serde_json::Number),
    /// A string literal.
    String(String),
}

/// A node of a raw specification document.
#[derive(Debug, Clone, PartialEq)]
pub enum Node {
    /// A keyed container (JSON object / YAML mapping), in source key order.
    Container(IndexMap<String, Node>),
    /// An ordered sequence.
    List(Vec<Node>),
    /// A leaf value.
    Scalar(Scalar),
}

impl Default for Node {
    fn default() -> Self {
        Self::empty()
    }
}

impl Node {
    /// Creates an empty keyed container.
    pub fn empty() -> Self {
        Node::Container(IndexMap::new())
    }

    /// Returns the child stored under `key`, if this node is a container holding it.
    pub fn get(&self, key: &str) -> Option<&Node> {
        match self {
            Node::Container(map) => map.get(key),
            _ => None,
        }
    }

    /// Returns the child stored under `key`, or a shared empty container.
    pub fn get_or_default(&self, key: &str) -> &Node {
        self.get(key).unwrap_or(&EMPTY_CONTAINER)
    }

    /// Returns the text of a child, or `default` when absent, null or not a scalar.
    pub fn str_or(&self, key: &str, default: &str) -> String {
        self.get(key)
            .and_then(Node::as_text)
            .unwrap_or_else(|| default.to_string())
    }

    /// Returns the boolean value of a child, or `default` when absent or not a boolean.
    pub fn bool_or(&self, key: &str, default: bool) -> bool {
        self.get(key).and_then(Node::as_bool).unwrap_or(default)
    }

    /// Returns the entries if this node is a keyed container.
    pub fn as_container(&self) -> Option<&IndexMap<String, Node>> {
        match self {
            Node::Container(map) => Some(map),
            _ => None,
        }
    }

    /// Returns the items if this node is a list.
    pub fn as_list(&self) -> Option<&[Node]> {
        match self {
            Node::List(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the string if this node is a string scalar.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Node::Scalar(Scalar::String(s)) => Some(s),
            _ => None,
        }
    }

    /// Renders string, number and boolean scalars as text.
    ///
    /// `version: 1.0` in YAML arrives as a number and still reads as `"1.0"`.
    pub fn as_text(&self) -> Option<String> {
        match self {
            Node::Scalar(Scalar::Null) => None,
            Node::Scalar(scalar) => Some(scalar.to_string()),
            _ => None,
        }
    }

    /// Returns the boolean if this node is a boolean scalar.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Node::Scalar(Scalar::Bool(b)) => Some(*b),
            _ => None,
        }
    }

    /// True for keyed containers.
    pub fn is_container(&self) -> bool {
        matches!(self, Node::Container(_))
    }

    /// True for containers with no entries.
    pub fn is_empty_container(&self) -> bool {
        matches!(self, Node::Container(map) if map.is_empty())
    }

    /// Returns the `$ref` target if this node is a reference object.
    pub fn reference(&self) -> Option<&str> {
        self.get(REF_KEY).and_then(Node::as_str)
    }

    /// True if this node is a reference object (`{"$ref": "..."}`).
    pub fn is_reference(&self) -> bool {
        self.reference().is_some()
    }
}

impl fmt::Display for Scalar {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Scalar::Null => write!(f, "null"),
            Scalar::Bool(b) => write!(f, "{}", b),
            Scalar::Number(n) => write!(f, "{}", n),
            Scalar::String(s) => write!(f, "{}", s),
        }
    }
}

impl From<JsonValue> for Node {
    fn from(value: JsonValue) -> Self {
        match value {
            JsonValue::Null => Node::Scalar(Scalar::Null),
            JsonValue::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            JsonValue::Number(n) => Node::Scalar(Scalar::Number(n)),
            JsonValue::String(s) => Node::Scalar(Scalar::String(s)),
            JsonValue::Array(items) => Node::List(items.into_iter().map(Node::from).collect()),
            JsonValue::Object(map) => {
                Node::Container(map.into_iter().map(|(k, v)| (k, Node::from(v))).collect())
            }
        }
    }
}

impl From<YamlValue> for Node {
    fn from(value: YamlValue) -> Self {
        match value {
            YamlValue::Null => Node::Scalar(Scalar::Null),
            YamlValue::Bool(b) => Node::Scalar(Scalar::Bool(b)),
            YamlValue::Number(n) => Node::Scalar(yaml_number(&n)),
            YamlValue::String(s) => Node::Scalar(Scalar::String(s)),
            YamlValue::Sequence(items) => Node::List(items.into_iter().map(Node::from).collect()),
            YamlValue::Mapping(map) => Node::Container(
                map.into_iter()
                    .filter_map(|(k, v)| yaml_key(k).map(|key| (key, Node::from(v))))
                    .collect(),
            ),
            YamlValue::Tagged(tagged) => Node::from(tagged.value),
        }
    }
}

fn yaml_number(n: &serde_yaml::Number) -> Scalar {
    let number = if let Some(i) = n.as_i64() {
        Some(serde_json::Number::from(i))
    } else if let Some(u) = n.as_u64() {
        Some(serde_json::Number::from(u))
    } else {
        n.as_f64().and_then(serde_json::Number::from_f64)
    };
    // NaN / infinity have no JSON number form.
    number
        .map(Scalar::Number)
        .unwrap_or_else(|| Scalar::String(n.to_string()))
}

/// Stringifies YAML keys. Unquoted status codes (`200:`) arrive as numbers.
fn yaml_key(key: YamlValue) -> Option<String> {
    match key {
        YamlValue::String(s) => Some(s),
        YamlValue::Number(n) => Some(n.to_string()),
        YamlValue::Bool(b) => Some(b.to_string()),
        YamlValue::Null => Some("null".to_string()),
        YamlValue::Tagged(tagged) => yaml_key(tagged.value),
        YamlValue::Sequence(_) | YamlValue::Mapping(_) => None,
    }
}
