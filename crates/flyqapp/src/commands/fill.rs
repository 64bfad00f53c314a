use crate::model::{Group, Node, Rule};
use crate::schema::{ConditionKind, RuleSchema};

/// Lazy slot population, run when a tree is about to be displayed or
/// evaluated.
///
/// For every rule whose selection is known to the schema, condition slots the
/// user has not touched yet are filled in schema order: a select takes its
/// first declared option, every other kind an empty string. The timezone
/// select of date/time-bearing rules is the exception — it takes the label
/// matching the caller's local UTC offset (see
/// [`crate::schema::local_timezone_label`]).
///
/// Filling is idempotent: once every slot exists, reruns change nothing.
pub fn run(root: &Group, schema: &RuleSchema) -> Group {
    let mut next = root.clone();
    fill_group(&mut next, schema);
    next
}

fn fill_group(group: &mut Group, schema: &RuleSchema) {
    for child in &mut group.children {
        match child {
            Node::Group(inner) => fill_group(inner, schema),
            Node::Rule(rule) => fill_rule(rule, schema),
        }
    }
}

fn fill_rule(rule: &mut Rule, schema: &RuleSchema) {
    let Some(spec) = rule.selection().and_then(|name| schema.get(name)) else {
        return;
    };
    for (slot, condition) in spec.conditions.iter().enumerate() {
        if rule.inputs.len() > slot + 1 {
            continue;
        }
        let value = match condition.kind {
            ConditionKind::Select if condition.is_timezone() => {
                crate::schema::local_timezone_label().to_string()
            }
            ConditionKind::Select => condition.options.first().cloned().unwrap_or_default(),
            ConditionKind::Number
            | ConditionKind::Time
            | ConditionKind::Date
            | ConditionKind::DateTime => String::new(),
        };
        rule.inputs.push(value);
    }
}
