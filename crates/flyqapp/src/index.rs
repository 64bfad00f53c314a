//! # Tree Indexes: addressing nodes in the filter tree
//!
//! Every node in a filter tree is addressed by a [`TreeIndex`]: the sequence
//! of child positions walked from the root group. The root itself is the
//! empty sequence.
//!
//! ## The textual form
//!
//! UIs and URLs carry indexes as comma-joined strings rooted at the sentinel
//! `root`: `"root"` for the root group, `"root,2,0,1"` for child 1 of child 0
//! of child 2 of the root. When parsing, the **first segment is discarded** —
//! it names the synthetic top level that the root group already represents —
//! and every remaining segment must be a base-10 child position. [`Display`]
//! writes the same form back, so indexes round-trip through text.
//!
//! Internally the index is a plain `Vec<usize>`, which keeps resolution free
//! of string handling and makes "parent of" a `split_last`.
//!
//! ## Resolution
//!
//! [`resolve`] walks the index through a tree and returns a reference to the
//! node it denotes. Resolution fails with
//! [`IndexOutOfRange`](crate::error::FilterError::IndexOutOfRange) when a
//! step is past the end of a group's children, and with
//! [`NotAGroup`](crate::error::FilterError::NotAGroup) when a non-terminal
//! step lands on a rule (rules have no children). Resolution never mutates
//! the tree.

use crate::error::{FilterError, Result};
use crate::model::{Group, Node, Rule};
use std::str::FromStr;

/// A path locating a node within a filter tree. Empty = the root group.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub struct TreeIndex(Vec<usize>);

impl TreeIndex {
    /// The index of the root group.
    pub fn root() -> Self {
        Self(Vec::new())
    }

    pub fn new(steps: Vec<usize>) -> Self {
        Self(steps)
    }

    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    pub fn steps(&self) -> &[usize] {
        &self.0
    }

    /// The index of this node's child at `position`.
    pub fn child(&self, position: usize) -> Self {
        let mut steps = self.0.clone();
        steps.push(position);
        Self(steps)
    }

    /// Splits into (parent index, position under that parent).
    /// `None` for the root, which has no parent.
    pub fn split_last(&self) -> Option<(TreeIndex, usize)> {
        let (&position, parent) = self.0.split_last()?;
        Some((TreeIndex(parent.to_vec()), position))
    }
}

impl std::fmt::Display for TreeIndex {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "root")?;
        for step in &self.0 {
            write!(f, ",{}", step)?;
        }
        Ok(())
    }
}

impl FromStr for TreeIndex {
    type Err = FilterError;

    fn from_str(s: &str) -> Result<Self> {
        if s.is_empty() {
            return Err(FilterError::InvalidIndex(s.to_string()));
        }
        let mut segments = s.split(',');
        // The leading segment is the synthetic top level (conventionally
        // "root"); the root group already stands for it.
        segments.next();
        let steps = segments
            .map(|segment| {
                segment
                    .parse::<usize>()
                    .map_err(|_| FilterError::InvalidIndex(s.to_string()))
            })
            .collect::<Result<Vec<usize>>>()?;
        Ok(TreeIndex(steps))
    }
}

/// A resolved node: either the root group itself or an inner node.
#[derive(Debug, PartialEq, Eq)]
pub enum NodeRef<'a> {
    Group(&'a Group),
    Rule(&'a Rule),
}

pub(crate) enum NodeMut<'a> {
    Group(&'a mut Group),
    Rule(&'a mut Rule),
}

/// Resolves `index` against `root` and returns the node it denotes.
pub fn resolve<'a>(root: &'a Group, index: &TreeIndex) -> Result<NodeRef<'a>> {
    resolve_steps(root, index.steps())
}

fn resolve_steps<'a>(group: &'a Group, steps: &[usize]) -> Result<NodeRef<'a>> {
    let Some((&step, rest)) = steps.split_first() else {
        return Ok(NodeRef::Group(group));
    };
    let len = group.children.len();
    let child = group
        .children
        .get(step)
        .ok_or(FilterError::IndexOutOfRange { step, len })?;
    match child {
        Node::Group(inner) => resolve_steps(inner, rest),
        Node::Rule(rule) if rest.is_empty() => Ok(NodeRef::Rule(rule)),
        Node::Rule(_) => Err(FilterError::NotAGroup { step }),
    }
}

pub(crate) fn resolve_mut<'a>(root: &'a mut Group, index: &TreeIndex) -> Result<NodeMut<'a>> {
    resolve_mut_steps(root, index.steps())
}

fn resolve_mut_steps<'a>(group: &'a mut Group, steps: &[usize]) -> Result<NodeMut<'a>> {
    let Some((&step, rest)) = steps.split_first() else {
        return Ok(NodeMut::Group(group));
    };
    let len = group.children.len();
    let child = group
        .children
        .get_mut(step)
        .ok_or(FilterError::IndexOutOfRange { step, len })?;
    match child {
        Node::Group(inner) => resolve_mut_steps(inner, rest),
        Node::Rule(rule) if rest.is_empty() => Ok(NodeMut::Rule(rule)),
        Node::Rule(_) => Err(FilterError::NotAGroup { step }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::GroupOp;

    fn sample_tree() -> Group {
        // root
        // ├── 0: rule
        // └── 1: group (OR)
        //     └── 0: rule
        let mut inner = Group::new(GroupOp::Or);
        inner.children.push(Node::Rule(Rule::default()));
        let mut root = Group::default();
        root.children.push(Node::Rule(Rule {
            inputs: vec!["Flight ID".into()],
        }));
        root.children.push(Node::Group(inner));
        root
    }

    #[test]
    fn test_parse_root_sentinel() {
        let index: TreeIndex = "root".parse().unwrap();
        assert!(index.is_root());
        assert_eq!(index, TreeIndex::root());
    }

    #[test]
    fn test_parse_discards_leading_segment() {
        let index: TreeIndex = "root,2,0,1".parse().unwrap();
        assert_eq!(index.steps(), &[2, 0, 1]);
    }

    #[test]
    fn test_parse_rejects_junk() {
        assert!("".parse::<TreeIndex>().is_err());
        assert!("root,x".parse::<TreeIndex>().is_err());
        assert!("root,1,".parse::<TreeIndex>().is_err());
        assert!("root,-1".parse::<TreeIndex>().is_err());
    }

    #[test]
    fn test_display_round_trip() {
        for text in ["root", "root,0", "root,2,0,1"] {
            let index: TreeIndex = text.parse().unwrap();
            assert_eq!(index.to_string(), text);
        }
    }

    #[test]
    fn test_split_last() {
        let index: TreeIndex = "root,1,0".parse().unwrap();
        let (parent, position) = index.split_last().unwrap();
        assert_eq!(parent.steps(), &[1]);
        assert_eq!(position, 0);
        assert!(TreeIndex::root().split_last().is_none());
    }

    #[test]
    fn test_resolve_root_returns_root_group() {
        let tree = sample_tree();
        match resolve(&tree, &TreeIndex::root()).unwrap() {
            NodeRef::Group(group) => assert_eq!(group.children.len(), 2),
            NodeRef::Rule(_) => panic!("root must resolve to a group"),
        }
    }

    #[test]
    fn test_resolve_rule_leaf() {
        let tree = sample_tree();
        let index: TreeIndex = "root,0".parse().unwrap();
        match resolve(&tree, &index).unwrap() {
            NodeRef::Rule(rule) => assert_eq!(rule.selection(), Some("Flight ID")),
            NodeRef::Group(_) => panic!("expected a rule"),
        }
    }

    #[test]
    fn test_resolve_nested_group_then_rule() {
        let tree = sample_tree();
        let index: TreeIndex = "root,1,0".parse().unwrap();
        assert!(matches!(
            resolve(&tree, &index).unwrap(),
            NodeRef::Rule(_)
        ));
    }

    #[test]
    fn test_resolve_out_of_range() {
        let tree = sample_tree();
        let index: TreeIndex = "root,5".parse().unwrap();
        assert!(matches!(
            resolve(&tree, &index),
            Err(FilterError::IndexOutOfRange { step: 5, len: 2 })
        ));
    }

    #[test]
    fn test_resolve_through_rule_fails() {
        let tree = sample_tree();
        let index: TreeIndex = "root,0,0".parse().unwrap();
        assert!(matches!(
            resolve(&tree, &index),
            Err(FilterError::NotAGroup { step: 0 })
        ));
    }

    #[test]
    fn test_construction_paths_resolve_back() {
        // Record each node's index while building, then resolve it back.
        let tree = sample_tree();
        let inner_index = TreeIndex::root().child(1);
        match resolve(&tree, &inner_index).unwrap() {
            NodeRef::Group(group) => assert_eq!(group.operator, GroupOp::Or),
            NodeRef::Rule(_) => panic!("expected the nested group"),
        }
        let leaf_index = inner_index.child(0);
        assert!(matches!(
            resolve(&tree, &leaf_index).unwrap(),
            NodeRef::Rule(_)
        ));
    }
}
