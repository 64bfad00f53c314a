//! # Validation
//!
//! Decides whether a filter tree denotes a satisfiable, fully-specified
//! query against a given schema. The core contract is the boolean
//! [`is_valid`]; [`first_violation`] additionally names the offending node
//! and cause so UIs can point at it.
//!
//! The check is pre-order and short-circuits: a node is examined before its
//! children, children in sequence, and the first violation wins.

use crate::index::TreeIndex;
use crate::model::{Group, Node, Rule};
use crate::schema::{ConditionKind, RuleSchema};

/// Why a tree is not a valid query.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Violation {
    /// A group (possibly the root) has no children.
    EmptyGroup { index: TreeIndex },
    /// A rule has no predicate selected yet.
    NoSelection { index: TreeIndex },
    /// A rule's selection does not exist in the schema.
    UnknownRule { index: TreeIndex, name: String },
    /// A number/time/date/datetime condition has no stored value.
    MissingValue { index: TreeIndex, condition: String },
    /// A select condition declares no options, so no legal value exists.
    NoOptions { index: TreeIndex, condition: String },
}

impl std::fmt::Display for Violation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Violation::EmptyGroup { index } => {
                write!(f, "group at {} has no conditions", index)
            }
            Violation::NoSelection { index } => {
                write!(f, "rule at {} has no predicate selected", index)
            }
            Violation::UnknownRule { index, name } => {
                write!(f, "rule at {} names unknown predicate '{}'", index, name)
            }
            Violation::MissingValue { index, condition } => {
                write!(f, "rule at {} is missing a value for '{}'", index, condition)
            }
            Violation::NoOptions { index, condition } => {
                write!(
                    f,
                    "rule at {} has no selectable options for '{}'",
                    index, condition
                )
            }
        }
    }
}

/// `true` iff every group is non-empty and every rule is fully specified
/// per the schema.
pub fn is_valid(root: &Group, schema: &RuleSchema) -> bool {
    first_violation(root, schema).is_none()
}

/// The first violation in pre-order, or `None` for a valid tree.
pub fn first_violation(root: &Group, schema: &RuleSchema) -> Option<Violation> {
    check_group(root, TreeIndex::root(), schema)
}

fn check_group(group: &Group, index: TreeIndex, schema: &RuleSchema) -> Option<Violation> {
    if group.children.is_empty() {
        return Some(Violation::EmptyGroup { index });
    }
    for (position, child) in group.children.iter().enumerate() {
        let child_index = index.child(position);
        let violation = match child {
            Node::Group(inner) => check_group(inner, child_index, schema),
            Node::Rule(rule) => check_rule(rule, child_index, schema),
        };
        if violation.is_some() {
            return violation;
        }
    }
    None
}

fn check_rule(rule: &Rule, index: TreeIndex, schema: &RuleSchema) -> Option<Violation> {
    let Some(name) = rule.selection() else {
        return Some(Violation::NoSelection { index });
    };
    let Some(spec) = schema.get(name) else {
        return Some(Violation::UnknownRule {
            index,
            name: name.to_string(),
        });
    };
    for (slot, condition) in spec.conditions.iter().enumerate() {
        match condition.kind {
            // A select with nothing to choose from can never be satisfied,
            // whatever value happens to be stored.
            ConditionKind::Select => {
                if condition.options.is_empty() {
                    return Some(Violation::NoOptions {
                        index,
                        condition: condition.name.clone(),
                    });
                }
            }
            ConditionKind::Number
            | ConditionKind::Time
            | ConditionKind::Date
            | ConditionKind::DateTime => {
                let filled = rule.value(slot).is_some_and(|value| !value.is_empty());
                if !filled {
                    return Some(Violation::MissingValue {
                        index,
                        condition: condition.name.clone(),
                    });
                }
            }
        }
    }
    None
}
