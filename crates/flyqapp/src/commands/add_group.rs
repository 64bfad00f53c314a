use super::last_step;
use crate::error::{FilterError, Result};
use crate::index::{resolve_mut, NodeMut, TreeIndex};
use crate::model::{Group, Node};

/// Appends an empty AND sub-group to the group at `index`.
pub fn run(root: &Group, index: &TreeIndex) -> Result<Group> {
    let mut next = root.clone();
    match resolve_mut(&mut next, index)? {
        NodeMut::Group(group) => group.children.push(Node::Group(Group::default())),
        NodeMut::Rule(_) => {
            return Err(FilterError::NotAGroup {
                step: last_step(index),
            })
        }
    }
    Ok(next)
}
