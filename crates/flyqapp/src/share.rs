//! # Sharing: serialization, culling, locators
//!
//! A filter tree travels in two forms: the JSON text stored by the named
//! filter backend, and the percent-encoded *locator* embedded in a URL query
//! parameter. Both are produced here, and both reconstruct the exact tree.
//!
//! Before a tree is shared it is *culled*: sub-groups that are empty after
//! their own descendants are culled contribute nothing to the query and are
//! dropped. The root is never dropped, only emptied.
//!
//! Decoding is all-or-nothing. Text that is not JSON fails with
//! [`MalformedFilter`](crate::error::FilterError::MalformedFilter); JSON that
//! does not match the group/rule shape (a group without an array-typed
//! `children`, a top-level rule, an unknown `kind`) fails with
//! [`SchemaMismatch`](crate::error::FilterError::SchemaMismatch). Callers
//! substitute an empty tree on failure; a filter is never half-applied.

use crate::error::{FilterError, Result};
use crate::model::{Group, Node};

/// Encodes a tree as deterministic JSON: `kind` first, then the variant's
/// fields in declaration order.
pub fn serialize(root: &Group) -> Result<String> {
    Ok(serde_json::to_string(&Node::Group(root.clone()))?)
}

/// Reconstructs a tree from [`serialize`] output.
pub fn deserialize(text: &str) -> Result<Group> {
    let value: serde_json::Value =
        serde_json::from_str(text).map_err(|err| FilterError::MalformedFilter(err.to_string()))?;
    let node: Node = serde_json::from_value(value)
        .map_err(|err| FilterError::SchemaMismatch(err.to_string()))?;
    match node {
        Node::Group(group) => Ok(group),
        Node::Rule(_) => Err(FilterError::SchemaMismatch(
            "top-level filter must be a group".to_string(),
        )),
    }
}

/// Structural copy with every vacuous sub-group removed.
///
/// A group counts as vacuous when its children — after culling each child
/// group recursively — are empty. Idempotent; the root always survives.
pub fn cull(root: &Group) -> Group {
    let mut next = root.clone();
    cull_children(&mut next);
    next
}

fn cull_children(group: &mut Group) {
    group.children.retain_mut(|child| match child {
        Node::Rule(_) => true,
        Node::Group(inner) => {
            cull_children(inner);
            !inner.children.is_empty()
        }
    });
}

/// The shareable locator: the culled tree, serialized and percent-encoded
/// for embedding in a URL query parameter.
pub fn to_locator(root: &Group) -> Result<String> {
    let text = serialize(&cull(root))?;
    Ok(urlencoding::encode(&text).into_owned())
}

/// Reconstructs a tree from a locator token. Any failure yields
/// `MalformedFilter`/`SchemaMismatch`; the caller falls back to an empty
/// tree.
pub fn from_locator(token: &str) -> Result<Group> {
    let text = urlencoding::decode(token)
        .map_err(|err| FilterError::MalformedFilter(err.to_string()))?;
    deserialize(&text)
}
