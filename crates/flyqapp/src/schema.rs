//! # Rule Schema Registry
//!
//! The registry is the catalog of predicates a filter rule can select:
//! each [`RuleSpec`] names a rule and declares its ordered condition slots,
//! and each [`Condition`] declares the slot's kind and, for selects, its
//! legal options.
//!
//! The registry is an explicit value, constructed once per session from
//! host-supplied [`ReferenceData`] (live airframe names, tail numbers, tag
//! names) and passed by reference into the validator and the fill pass.
//! Nothing in this crate reads schema state from globals.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// The closed set of condition input kinds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ConditionKind {
    /// Picks one of a declared option list.
    Select,
    Number,
    Time,
    Date,
    DateTime,
}

/// One typed input slot declared by a rule.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Condition {
    pub name: String,
    pub kind: ConditionKind,
    /// Legal values; meaningful for [`ConditionKind::Select`] only.
    pub options: Vec<String>,
}

impl Condition {
    pub fn select(name: &str, options: Vec<String>) -> Self {
        Self {
            name: name.to_string(),
            kind: ConditionKind::Select,
            options,
        }
    }

    pub fn number(name: &str) -> Self {
        Self::plain(name, ConditionKind::Number)
    }

    pub fn time(name: &str) -> Self {
        Self::plain(name, ConditionKind::Time)
    }

    pub fn date(name: &str) -> Self {
        Self::plain(name, ConditionKind::Date)
    }

    pub fn datetime(name: &str) -> Self {
        Self::plain(name, ConditionKind::DateTime)
    }

    fn plain(name: &str, kind: ConditionKind) -> Self {
        Self {
            name: name.to_string(),
            kind,
            options: Vec::new(),
        }
    }

    /// Whether this slot is the timezone picker of a date/time-bearing rule.
    /// Those slots get the local-offset default instead of the first option
    /// during lazy fill.
    pub fn is_timezone(&self) -> bool {
        self.kind == ConditionKind::Select && self.name == TIMEZONE_CONDITION
    }
}

/// A selectable rule and its ordered condition slots.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RuleSpec {
    pub name: String,
    pub conditions: Vec<Condition>,
}

impl RuleSpec {
    pub fn new(name: &str, conditions: Vec<Condition>) -> Self {
        Self {
            name: name.to_string(),
            conditions,
        }
    }
}

/// The ordered rule catalog for one session.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct RuleSchema {
    rules: Vec<RuleSpec>,
}

impl RuleSchema {
    pub fn new(rules: Vec<RuleSpec>) -> Self {
        Self { rules }
    }

    pub fn rules(&self) -> &[RuleSpec] {
        &self.rules
    }

    /// Looks a rule up by its exact name.
    pub fn get(&self, name: &str) -> Option<&RuleSpec> {
        self.rules.iter().find(|rule| rule.name == name)
    }

    /// Builds the flight-data catalog from the host's live reference data.
    pub fn for_flight_data(reference: &ReferenceData) -> Self {
        let ops = comparison_options();
        let eq = vec!["=".to_string(), "!=".to_string()];
        let tz = timezone_options();

        Self::new(vec![
            RuleSpec::new(
                "Flight ID",
                vec![
                    Condition::select("Comparison", ops.clone()),
                    Condition::number("Value"),
                ],
            ),
            RuleSpec::new(
                "Airframe",
                vec![
                    Condition::select("Comparison", eq.clone()),
                    Condition::select("Airframe", reference.airframes.clone()),
                ],
            ),
            RuleSpec::new(
                "Tail Number",
                vec![
                    Condition::select("Comparison", eq.clone()),
                    Condition::select("Tail Number", reference.tail_numbers.clone()),
                ],
            ),
            RuleSpec::new(
                "Tag",
                vec![
                    Condition::select(
                        "Membership",
                        vec!["includes".to_string(), "excludes".to_string()],
                    ),
                    Condition::select("Tag", reference.tags.clone()),
                ],
            ),
            RuleSpec::new(
                "Flight Date",
                vec![
                    Condition::select("Comparison", ops.clone()),
                    Condition::date("Date"),
                    Condition::select(TIMEZONE_CONDITION, tz.clone()),
                ],
            ),
            RuleSpec::new(
                "Takeoff Time",
                vec![
                    Condition::select("Comparison", ops.clone()),
                    Condition::time("Time"),
                    Condition::select(TIMEZONE_CONDITION, tz.clone()),
                ],
            ),
            RuleSpec::new(
                "Landing Time",
                vec![
                    Condition::select("Comparison", ops.clone()),
                    Condition::time("Time"),
                    Condition::select(TIMEZONE_CONDITION, tz.clone()),
                ],
            ),
            RuleSpec::new(
                "Recording Start",
                vec![
                    Condition::select("Comparison", ops.clone()),
                    Condition::datetime("Date/Time"),
                    Condition::select(TIMEZONE_CONDITION, tz),
                ],
            ),
            RuleSpec::new(
                "Duration",
                vec![
                    Condition::select("Comparison", ops.clone()),
                    Condition::number("Minutes"),
                ],
            ),
            RuleSpec::new(
                "Max Altitude",
                vec![Condition::select("Comparison", ops), Condition::number("Feet")],
            ),
        ])
    }
}

/// Live option sources supplied by the host at session start.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReferenceData {
    pub airframes: Vec<String>,
    pub tail_numbers: Vec<String>,
    pub tags: Vec<String>,
}

impl Default for ReferenceData {
    fn default() -> Self {
        Self {
            airframes: to_strings(&["C172S", "C182T", "PA-28-181", "SR20", "DA40"]),
            tail_numbers: to_strings(&["N12345", "N54321", "N20714"]),
            tags: to_strings(&["Training", "Cross-Country", "Checkride", "Maintenance"]),
        }
    }
}

fn to_strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn comparison_options() -> Vec<String> {
    to_strings(&["=", "!=", "<", "<=", ">", ">="])
}

/// Condition name of the timezone picker on date/time-bearing rules.
pub const TIMEZONE_CONDITION: &str = "Timezone";

pub struct TimezoneEntry {
    pub label: &'static str,
    pub offset_minutes: i32,
    /// Preferred on offset ties (several zones share an offset).
    pub us: bool,
}

/// The fixed timezone table. The first entry is the fallback when the local
/// offset matches nothing.
pub const TIMEZONES: &[TimezoneEntry] = &[
    TimezoneEntry { label: "UTC", offset_minutes: 0, us: false },
    TimezoneEntry { label: "US/Hawaii", offset_minutes: -600, us: true },
    TimezoneEntry { label: "US/Alaska", offset_minutes: -540, us: true },
    TimezoneEntry { label: "US/Pacific", offset_minutes: -480, us: true },
    TimezoneEntry { label: "US/Mountain", offset_minutes: -420, us: true },
    TimezoneEntry { label: "US/Central", offset_minutes: -360, us: true },
    TimezoneEntry { label: "US/Eastern", offset_minutes: -300, us: true },
    TimezoneEntry { label: "Canada/Atlantic", offset_minutes: -240, us: false },
    TimezoneEntry { label: "Europe/London", offset_minutes: 0, us: false },
    TimezoneEntry { label: "Europe/Paris", offset_minutes: 60, us: false },
    TimezoneEntry { label: "Europe/Helsinki", offset_minutes: 120, us: false },
    TimezoneEntry { label: "Asia/Dubai", offset_minutes: 240, us: false },
    TimezoneEntry { label: "Asia/Kolkata", offset_minutes: 330, us: false },
    TimezoneEntry { label: "Asia/Shanghai", offset_minutes: 480, us: false },
    TimezoneEntry { label: "Asia/Tokyo", offset_minutes: 540, us: false },
    TimezoneEntry { label: "Australia/Sydney", offset_minutes: 600, us: false },
    TimezoneEntry { label: "Pacific/Auckland", offset_minutes: 720, us: false },
];

static TIMEZONE_OPTIONS: Lazy<Vec<String>> =
    Lazy::new(|| TIMEZONES.iter().map(|tz| tz.label.to_string()).collect());

/// The timezone option list, in table order.
pub fn timezone_options() -> Vec<String> {
    TIMEZONE_OPTIONS.clone()
}

/// The table label matching a UTC offset, preferring `US/…` entries on ties.
/// Falls back to the table's first entry when nothing matches.
pub fn timezone_label_for_offset(offset_minutes: i32) -> &'static str {
    let mut first_match = None;
    for tz in TIMEZONES {
        if tz.offset_minutes == offset_minutes {
            if tz.us {
                return tz.label;
            }
            first_match.get_or_insert(tz.label);
        }
    }
    first_match.unwrap_or(TIMEZONES[0].label)
}

/// The table label matching the caller's current local UTC offset.
pub fn local_timezone_label() -> &'static str {
    let offset_minutes = chrono::Local::now().offset().local_minus_utc() / 60;
    timezone_label_for_offset(offset_minutes)
}
