use super::last_step;
use crate::error::{FilterError, Result};
use crate::index::{resolve_mut, NodeMut, TreeIndex};
use crate::model::Group;

/// Stores `value` in the 0-based condition `slot` of the rule at `index`.
///
/// Slots are positional after the selection, so this writes `inputs[slot+1]`,
/// padding any skipped slots with empty strings. Callers derive `slot` from
/// the selected rule's schema; the operation itself does not consult it.
pub fn run(root: &Group, index: &TreeIndex, slot: usize, value: &str) -> Result<Group> {
    let mut next = root.clone();
    match resolve_mut(&mut next, index)? {
        NodeMut::Rule(rule) => {
            let target = slot + 1;
            if rule.inputs.len() <= target {
                rule.inputs.resize(target + 1, String::new());
            }
            rule.inputs[target] = value.to_string();
        }
        NodeMut::Group(_) => {
            return Err(FilterError::NotARule {
                step: last_step(index),
            })
        }
    }
    Ok(next)
}
