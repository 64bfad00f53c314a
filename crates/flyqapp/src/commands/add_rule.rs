use super::last_step;
use crate::error::{FilterError, Result};
use crate::index::{resolve_mut, NodeMut, TreeIndex};
use crate::model::{Group, Node, Rule};

/// Appends a fresh, unselected rule to the group at `index`.
pub fn run(root: &Group, index: &TreeIndex) -> Result<Group> {
    let mut next = root.clone();
    match resolve_mut(&mut next, index)? {
        NodeMut::Group(group) => group.children.push(Node::Rule(Rule::default())),
        NodeMut::Rule(_) => {
            return Err(FilterError::NotAGroup {
                step: last_step(index),
            })
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_appends_unselected_rule_to_root() {
        let root = Group::default();
        let next = run(&root, &TreeIndex::root()).unwrap();
        assert_eq!(next.children.len(), 1);
        let rule = next.children[0].as_rule().unwrap();
        assert!(rule.inputs.is_empty());
        assert!(root.children.is_empty());
    }

    #[test]
    fn test_appends_in_order() {
        let root = Group::default();
        let next = run(&root, &TreeIndex::root()).unwrap();
        let next = run(&next, &TreeIndex::root()).unwrap();
        assert_eq!(next.children.len(), 2);
    }

    #[test]
    fn test_rule_target_is_rejected() {
        let root = run(&Group::default(), &TreeIndex::root()).unwrap();
        let index: TreeIndex = "root,0".parse().unwrap();
        assert!(matches!(
            run(&root, &index),
            Err(FilterError::NotAGroup { step: 0 })
        ));
    }
}
