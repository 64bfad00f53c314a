//! Shared fixtures for tests.

use crate::commands::{add_rule, select_rule, set_condition};
use crate::index::TreeIndex;
use crate::model::Group;
use crate::schema::{ReferenceData, RuleSchema};

/// The flight-data catalog over the default reference data.
pub fn sample_schema() -> RuleSchema {
    RuleSchema::for_flight_data(&ReferenceData::default())
}

/// Appends a fully-specified "Flight ID = {id}" rule to `root`.
pub fn with_flight_id_rule(root: &Group, id: &str) -> Group {
    let root = add_rule::run(root, &TreeIndex::root()).unwrap();
    let index = TreeIndex::root().child(root.children.len() - 1);
    let root = select_rule::run(&root, &index, "Flight ID").unwrap();
    let root = set_condition::run(&root, &index, 0, "=").unwrap();
    set_condition::run(&root, &index, 1, id).unwrap()
}
