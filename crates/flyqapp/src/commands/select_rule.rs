use super::last_step;
use crate::error::{FilterError, Result};
use crate::index::{resolve_mut, NodeMut, TreeIndex};
use crate::model::Group;

/// Selects the predicate of the rule at `index`.
///
/// The rule's inputs collapse to the selection alone: condition slots are
/// rule-specific, so values entered under the previous selection are
/// meaningless for the new one and must not linger.
pub fn run(root: &Group, index: &TreeIndex, name: &str) -> Result<Group> {
    let mut next = root.clone();
    match resolve_mut(&mut next, index)? {
        NodeMut::Rule(rule) => {
            rule.inputs.clear();
            rule.inputs.push(name.to_string());
        }
        NodeMut::Group(_) => {
            return Err(FilterError::NotARule {
                step: last_step(index),
            })
        }
    }
    Ok(next)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::{add_rule, set_condition};

    #[test]
    fn test_selects_rule_name() {
        let root = add_rule::run(&Group::default(), &TreeIndex::root()).unwrap();
        let index: TreeIndex = "root,0".parse().unwrap();
        let next = run(&root, &index, "Flight ID").unwrap();
        let rule = next.children[0].as_rule().unwrap();
        assert_eq!(rule.selection(), Some("Flight ID"));
        assert_eq!(rule.inputs.len(), 1);
    }

    #[test]
    fn test_reselection_discards_stale_condition_values() {
        let root = add_rule::run(&Group::default(), &TreeIndex::root()).unwrap();
        let index: TreeIndex = "root,0".parse().unwrap();
        let root = run(&root, &index, "Flight ID").unwrap();
        let root = set_condition::run(&root, &index, 0, "=").unwrap();
        let root = set_condition::run(&root, &index, 1, "1042").unwrap();

        let next = run(&root, &index, "Duration").unwrap();
        let rule = next.children[0].as_rule().unwrap();
        assert_eq!(rule.inputs, vec!["Duration".to_string()]);
    }

    #[test]
    fn test_group_target_is_rejected() {
        let root = Group::default();
        assert!(matches!(
            run(&root, &TreeIndex::root(), "Flight ID"),
            Err(FilterError::NotARule { .. })
        ));
    }
}
