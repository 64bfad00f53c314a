//! # Domain Model: the Filter Tree
//!
//! A query filter is a nested boolean expression over flight records:
//! AND/OR [`Group`] nodes whose children are further groups or leaf [`Rule`]
//! predicates. This module defines the tree itself; everything else in the
//! crate (path resolution, editing, validation, sharing) operates on these
//! types.
//!
//! ## Value semantics
//!
//! The tree is a plain value. Edit operations never mutate a caller's tree in
//! place; they return a structurally new root and the caller rebinds (see
//! [`crate::commands`]). This makes "current filter" handling trivially safe:
//! there is no aliased root for a stale view to observe.
//!
//! ## Wire shape
//!
//! Nodes serialize as JSON objects tagged by a `kind` field, `kind` first:
//!
//! ```text
//! {"kind":"group","operator":"and","children":[
//!   {"kind":"rule","inputs":["Flight ID","=","1042"]}
//! ]}
//! ```
//!
//! A [`Rule`]'s `inputs` are positional: `inputs[0]` is the selected rule
//! name (empty/absent = nothing selected yet), `inputs[1..]` hold one value
//! per condition slot of the selected rule, in schema order. Slots are
//! populated lazily (see [`crate::commands::fill`]) and never grow past the
//! schema-declared count.

use serde::{Deserialize, Serialize};

/// Boolean connective of a [`Group`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GroupOp {
    And,
    Or,
}

impl Default for GroupOp {
    fn default() -> Self {
        Self::And
    }
}

impl std::fmt::Display for GroupOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            GroupOp::And => write!(f, "AND"),
            GroupOp::Or => write!(f, "OR"),
        }
    }
}

/// A node of the filter tree, tagged by `kind` on the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "lowercase")]
pub enum Node {
    Group(Group),
    Rule(Rule),
}

impl Node {
    pub fn as_group(&self) -> Option<&Group> {
        match self {
            Node::Group(group) => Some(group),
            Node::Rule(_) => None,
        }
    }

    pub fn as_rule(&self) -> Option<&Rule> {
        match self {
            Node::Rule(rule) => Some(rule),
            Node::Group(_) => None,
        }
    }

    pub fn is_group(&self) -> bool {
        matches!(self, Node::Group(_))
    }
}

fn is_false(value: &bool) -> bool {
    !*value
}

/// An AND/OR node holding an ordered sequence of children.
///
/// A group with no children is *vacuous*: it denotes nothing, is invalid
/// (see [`crate::validate`]) and is removed by [`crate::share::cull`] before
/// sharing. The root group is the one exception — it is never removed, only
/// emptied.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub operator: GroupOp,
    pub children: Vec<Node>,
    /// Marks a group injected by the host application (e.g. wrapping a
    /// pre-applied filter) rather than built by the user. Round-trips through
    /// serialization; no other component reads it.
    #[serde(default, skip_serializing_if = "is_false")]
    pub preset: bool,
}

impl Default for Group {
    fn default() -> Self {
        Self::new(GroupOp::And)
    }
}

impl Group {
    pub fn new(operator: GroupOp) -> Self {
        Self {
            operator,
            children: Vec::new(),
            preset: false,
        }
    }

    /// A group with no children denotes nothing.
    pub fn is_vacuous(&self) -> bool {
        self.children.is_empty()
    }
}

/// A leaf predicate: a selected rule name plus its condition values.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Rule {
    pub inputs: Vec<String>,
}

impl Rule {
    /// The selected rule name, or `None` while nothing has been picked.
    pub fn selection(&self) -> Option<&str> {
        self.inputs
            .first()
            .map(String::as_str)
            .filter(|name| !name.is_empty())
    }

    /// The stored value for a 0-based condition slot, if present.
    pub fn value(&self, slot: usize) -> Option<&str> {
        self.inputs.get(slot + 1).map(String::as_str)
    }
}
