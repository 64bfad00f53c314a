//! Output formatting: the tree view, the rule catalog, saved-filter tables
//! and message lines. Layout math (column widths) stays Unicode-aware via
//! `unicode-width`; styling goes through [`super::styles`].

use super::styles;
use chrono::Utc;
use flyqapp::commands::{CmdMessage, MessageLevel};
use flyqapp::index::TreeIndex;
use flyqapp::model::{Group, Node};
use flyqapp::schema::{ConditionKind, RuleSchema};
use flyqapp::store::SavedFilter;
use unicode_width::UnicodeWidthStr;

/// Renders the filter tree, one node per line, with its address up front:
///
/// ```text
/// root       ALL of:
///   root,0   Flight ID = 1042
///   root,1   ANY of:
/// ```
pub fn tree(root: &Group) -> String {
    let mut lines = Vec::new();
    render_group(root, &TreeIndex::root(), 0, &mut lines);
    if root.children.is_empty() {
        lines.push(format!(
            "  {}",
            styles::MUTED.apply_to("(empty filter — add a rule with `flyq add-rule root`)")
        ));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn render_group(group: &Group, index: &TreeIndex, depth: usize, lines: &mut Vec<String>) {
    let connective = match group.operator {
        flyqapp::model::GroupOp::And => "ALL of:",
        flyqapp::model::GroupOp::Or => "ANY of:",
    };
    lines.push(format!(
        "{}{}  {}",
        "  ".repeat(depth),
        styles::INDEX.apply_to(index.to_string()),
        styles::OPERATOR.apply_to(connective)
    ));
    for (position, child) in group.children.iter().enumerate() {
        let child_index = index.child(position);
        match child {
            Node::Group(inner) => render_group(inner, &child_index, depth + 1, lines),
            Node::Rule(rule) => {
                let description = match rule.selection() {
                    Some(name) => {
                        let values = rule.inputs[1..].join(" ");
                        if values.is_empty() {
                            styles::RULE_NAME.apply_to(name).to_string()
                        } else {
                            format!("{} {}", styles::RULE_NAME.apply_to(name), values)
                        }
                    }
                    None => styles::MUTED.apply_to("(no rule selected)").to_string(),
                };
                lines.push(format!(
                    "{}{}  {}",
                    "  ".repeat(depth + 1),
                    styles::INDEX.apply_to(child_index.to_string()),
                    description
                ));
            }
        }
    }
}

/// Renders the rule catalog: one line per rule, slots in schema order.
pub fn rules(schema: &RuleSchema) -> String {
    let mut lines = Vec::new();
    for spec in schema.rules() {
        let slots: Vec<String> = spec
            .conditions
            .iter()
            .enumerate()
            .map(|(slot, condition)| {
                format!("{}: {} [{}]", slot, condition.name, kind_label(condition.kind))
            })
            .collect();
        lines.push(format!(
            "{}  {}",
            styles::RULE_NAME.apply_to(&spec.name),
            styles::MUTED.apply_to(slots.join(", "))
        ));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

fn kind_label(kind: ConditionKind) -> &'static str {
    match kind {
        ConditionKind::Select => "select",
        ConditionKind::Number => "number",
        ConditionKind::Time => "time",
        ConditionKind::Date => "date",
        ConditionKind::DateTime => "datetime",
    }
}

/// Renders saved filters as an aligned table: name, color, last update.
pub fn filters(filters: &[SavedFilter]) -> String {
    let name_width = filters
        .iter()
        .map(|entry| entry.name.width())
        .max()
        .unwrap_or(0);
    let formatter = timeago::Formatter::new();
    let mut lines = Vec::new();
    for entry in filters {
        let padding = " ".repeat(name_width - entry.name.width());
        let age = (Utc::now() - entry.updated_at).to_std().unwrap_or_default();
        lines.push(format!(
            "{}{}  {}  {}",
            styles::RULE_NAME.apply_to(&entry.name),
            padding,
            entry.color,
            styles::MUTED.apply_to(format!("updated {}", formatter.convert(age)))
        ));
    }
    let mut out = lines.join("\n");
    out.push('\n');
    out
}

/// Prints structured messages with level-appropriate styling.
pub fn messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => {
                println!("{}", styles::SUCCESS.apply_to(&message.content))
            }
            MessageLevel::Warning => {
                eprintln!("{}", styles::WARNING.apply_to(&message.content))
            }
            MessageLevel::Error => eprintln!("{}", styles::ERROR.apply_to(&message.content)),
        }
    }
}

/// One-line validity status under the tree view.
pub fn status(check: &flyqapp::commands::CmdResult) -> String {
    if check.has_errors() {
        let detail = check
            .messages
            .iter()
            .map(|message| message.content.as_str())
            .collect::<Vec<_>>()
            .join("; ");
        styles::WARNING.apply_to(detail).to_string()
    } else {
        styles::SUCCESS.apply_to("Filter is valid").to_string()
    }
}
