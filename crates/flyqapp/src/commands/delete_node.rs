use super::last_step;
use crate::error::{FilterError, Result};
use crate::index::{resolve_mut, NodeMut, TreeIndex};
use crate::model::Group;

/// Removes the node at `index` from its parent.
///
/// Deleting the root is "Clear All": the result is always a fresh empty AND
/// group, regardless of what the tree held before — never a no-op.
pub fn run(root: &Group, index: &TreeIndex) -> Result<Group> {
    let Some((parent_index, position)) = index.split_last() else {
        return Ok(Group::default());
    };
    let mut next = root.clone();
    match resolve_mut(&mut next, &parent_index)? {
        NodeMut::Group(parent) => {
            if position >= parent.children.len() {
                return Err(FilterError::IndexOutOfRange {
                    step: position,
                    len: parent.children.len(),
                });
            }
            parent.children.remove(position);
        }
        NodeMut::Rule(_) => {
            return Err(FilterError::NotAGroup {
                step: last_step(&parent_index),
            })
        }
    }
    Ok(next)
}
