#![deny(missing_docs)]

//! # Reference Utilities
//!
//! Resolves `$ref` targets against the document they appear in.
//!
//! Resolution is a single, stateless lookup: it never fetches external documents
//! and never follows a `$ref` found at the target. Callers that walk a graph of
//! references decide themselves whether (and how often) to resolve again.

use crate::oas::node::Node;
use percent_encoding::percent_decode_str;

/// Prefix of references that point into the current document.
pub const LOCAL_REF_PREFIX: &str = "#/";

/// Resolves an intra-document reference (e.g. `#/definitions/Pet`) against `document`.
///
/// Returns an empty container when the reference is not local, when a segment is
/// missing, or when the walk reaches a non-container before the last segment.
pub fn resolve_ref(reference: &str, document: &Node) -> Node {
    let Some(pointer) = reference.strip_prefix(LOCAL_REF_PREFIX) else {
        tracing::debug!(reference, "Unsupported non-local reference");
        return Node::empty();
    };

    let mut current = document;
    for segment in pointer.split('/') {
        let key = unescape_segment(segment);
        match current.get(&key) {
            Some(next) => current = next,
            None => {
                tracing::debug!(reference, segment = %key, "Reference target not found");
                return Node::empty();
            }
        }
    }
    current.clone()
}

/// Turns one segment of a `#/...` fragment back into a container key.
///
/// The fragment is URI-encoded first and pointer-escaped second, so percent
/// escapes are undone before `~1` and `~0` (in that order, so `~01` stays `~1`).
fn unescape_segment(segment: &str) -> String {
    percent_decode_str(segment)
        .decode_utf8_lossy()
        .replace("~1", "/")
        .replace("~0", "~")
}
