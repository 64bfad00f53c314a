//! # Edit Operations
//!
//! The structural editor for filter trees. Each operation lives in its own
//! submodule and exposes a pure `run` function: it takes the current root by
//! reference plus a [`TreeIndex`](crate::index::TreeIndex), and returns a
//! structurally new root. The input tree is never mutated — callers rebind
//! their "current tree" to the returned value, so there is no shared root for
//! a stale view to alias.
//!
//! Operations resolve their target before touching anything; a resolution
//! failure therefore leaves no partial edit behind.
//!
//! ## Operation modules
//!
//! - [`set_operator`]: AND/OR toggle on a group
//! - [`add_rule`]: append an unselected rule to a group
//! - [`add_group`]: append an empty AND sub-group to a group
//! - [`delete_node`]: remove a node; deleting the root clears the filter
//! - [`select_rule`]: pick a rule's predicate, discarding stale inputs
//! - [`set_condition`]: store one condition value on a rule
//! - [`fill`]: read-time lazy population of missing condition slots

use serde::Serialize;

use crate::index::TreeIndex;
use crate::store::SavedFilter;

pub mod add_group;
pub mod add_rule;
pub mod delete_node;
pub mod fill;
pub mod select_rule;
pub mod set_condition;
pub mod set_operator;

/// The last path step, for error reporting on terminal targets.
pub(crate) fn last_step(index: &TreeIndex) -> usize {
    index.steps().last().copied().unwrap_or(0)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone, Serialize)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

/// Structured outcome of a session operation, for any UI to render.
#[derive(Debug, Default)]
pub struct CmdResult {
    pub messages: Vec<CmdMessage>,
    /// Saved filters to display (list/save operations).
    pub filters: Vec<SavedFilter>,
    /// Shareable locator token (share operation).
    pub locator: Option<String>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_filters(mut self, filters: Vec<SavedFilter>) -> Self {
        self.filters = filters;
        self
    }

    pub fn with_locator(mut self, locator: String) -> Self {
        self.locator = Some(locator);
        self
    }

    /// Whether any message carries the error level.
    pub fn has_errors(&self) -> bool {
        self.messages
            .iter()
            .any(|message| message.level == MessageLevel::Error)
    }
}
