use crate::error::Result;
use crate::index::{resolve_mut, NodeMut, TreeIndex};
use crate::model::{Group, GroupOp};

/// Sets the AND/OR operator of the group at `index`.
///
/// A rule target is a silent no-op: the toggle has no meaning on a leaf, and
/// the UI affordance that triggers it can race a concurrent restructure.
pub fn run(root: &Group, index: &TreeIndex, operator: GroupOp) -> Result<Group> {
    let mut next = root.clone();
    if let NodeMut::Group(group) = resolve_mut(&mut next, index)? {
        group.operator = operator;
    }
    Ok(next)
}
