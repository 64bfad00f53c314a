//! # Session Facade
//!
//! [`FilterSession`] is the single entry point UIs talk to. It owns the
//! current filter tree, the rule schema for this session, and a handle to
//! the [`FilterStore`] backend, and it dispatches every operation to the
//! pure engine functions underneath.
//!
//! The facade:
//! - **Parses** textual tree indexes into [`TreeIndex`] values
//! - **Rebinds** the current tree to each edit's returned root and persists
//!   it, so the next invocation resumes where the last one left off
//! - **Returns structured results** ([`CmdResult`]) — no printing, no
//!   process exits, no terminal assumptions
//!
//! Business rules live in the engine modules; storage behavior lives behind
//! the trait. The facade only wires them together.

use crate::commands::{self, CmdMessage, CmdResult};
use crate::error::Result;
use crate::index::TreeIndex;
use crate::model::{Group, GroupOp};
use crate::schema::RuleSchema;
use crate::share;
use crate::store::{FilterChange, FilterStore};
use crate::validate;

/// One editing session: current tree + schema + store.
pub struct FilterSession<S: FilterStore> {
    store: S,
    schema: RuleSchema,
    root: Group,
}

impl<S: FilterStore> FilterSession<S> {
    /// Opens a session, resuming the persisted working tree when one exists
    /// and is readable. An unreadable session tree self-heals to empty
    /// rather than wedging the client.
    pub fn open(store: S, schema: RuleSchema) -> Self {
        let root = store.load_session().ok().flatten().unwrap_or_default();
        Self {
            store,
            schema,
            root,
        }
    }

    pub fn schema(&self) -> &RuleSchema {
        &self.schema
    }

    /// The current tree, exactly as edited.
    pub fn tree(&self) -> &Group {
        &self.root
    }

    /// The current tree prepared for display/evaluation: missing condition
    /// slots lazily filled per the schema.
    pub fn view(&self) -> Group {
        commands::fill::run(&self.root, &self.schema)
    }

    fn commit(&mut self, next: Group) -> Result<()> {
        self.store.save_session(&next)?;
        self.root = next;
        Ok(())
    }

    pub fn set_operator(&mut self, index: &str, operator: GroupOp) -> Result<CmdResult> {
        let index: TreeIndex = index.parse()?;
        let next = commands::set_operator::run(&self.root, &index, operator)?;
        self.commit(next)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Group at {} now matches {}",
            index,
            match operator {
                GroupOp::And => "ALL of its conditions",
                GroupOp::Or => "ANY of its conditions",
            }
        )));
        Ok(result)
    }

    pub fn add_rule(&mut self, index: &str) -> Result<CmdResult> {
        let index: TreeIndex = index.parse()?;
        let next = commands::add_rule::run(&self.root, &index)?;
        let position = match crate::index::resolve(&next, &index)? {
            crate::index::NodeRef::Group(group) => group.children.len() - 1,
            crate::index::NodeRef::Rule(_) => 0,
        };
        self.commit(next)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Added rule at {}",
            index.child(position)
        )));
        Ok(result)
    }

    pub fn add_group(&mut self, index: &str) -> Result<CmdResult> {
        let index: TreeIndex = index.parse()?;
        let next = commands::add_group::run(&self.root, &index)?;
        let position = match crate::index::resolve(&next, &index)? {
            crate::index::NodeRef::Group(group) => group.children.len() - 1,
            crate::index::NodeRef::Rule(_) => 0,
        };
        self.commit(next)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Added group at {}",
            index.child(position)
        )));
        Ok(result)
    }

    pub fn delete(&mut self, index: &str) -> Result<CmdResult> {
        let index: TreeIndex = index.parse()?;
        let cleared = index.is_root();
        let next = commands::delete_node::run(&self.root, &index)?;
        self.commit(next)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(if cleared {
            "Cleared the filter".to_string()
        } else {
            format!("Removed node at {}", index)
        }));
        Ok(result)
    }

    pub fn select_rule(&mut self, index: &str, name: &str) -> Result<CmdResult> {
        let index: TreeIndex = index.parse()?;
        let next = commands::select_rule::run(&self.root, &index, name)?;
        self.commit(next)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Rule at {} now filters on '{}'",
            index, name
        )));
        if self.schema.get(name).is_none() {
            result.add_message(CmdMessage::warning(format!(
                "'{}' is not a known rule; the filter will not validate",
                name
            )));
        }
        Ok(result)
    }

    pub fn set_value(&mut self, index: &str, slot: usize, value: &str) -> Result<CmdResult> {
        let index: TreeIndex = index.parse()?;
        let next = commands::set_condition::run(&self.root, &index, slot, value)?;
        self.commit(next)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!(
            "Set condition {} of rule at {}",
            slot, index
        )));
        Ok(result)
    }

    /// Validates the current tree; the message carries the first violation
    /// when there is one.
    pub fn validate(&self) -> CmdResult {
        let mut result = CmdResult::default();
        match validate::first_violation(&self.view(), &self.schema) {
            None => result.add_message(CmdMessage::success("Filter is valid")),
            Some(violation) => {
                result.add_message(CmdMessage::error(format!("Filter is not valid: {violation}")))
            }
        }
        result
    }

    /// Produces the shareable locator for the current tree.
    pub fn share(&self) -> Result<CmdResult> {
        let locator = share::to_locator(&self.root)?;
        let mut result = CmdResult::default().with_locator(locator);
        if !validate::is_valid(&share::cull(&self.root), &self.schema) {
            result.add_message(CmdMessage::warning(
                "The shared filter is incomplete; recipients will start with an empty filter",
            ));
        }
        Ok(result)
    }

    /// Replaces the current tree from a shareable locator.
    ///
    /// The filter is applied only when it decodes *and* validates; on any
    /// failure the session falls back to an empty tree — never a
    /// half-applied filter. The failure is reported as a warning message.
    pub fn load_locator(&mut self, token: &str) -> Result<CmdResult> {
        let mut result = CmdResult::default();
        match share::from_locator(token) {
            Ok(root) => {
                let filled = commands::fill::run(&root, &self.schema);
                if let Some(violation) = validate::first_violation(&filled, &self.schema) {
                    self.commit(Group::default())?;
                    result.add_message(CmdMessage::warning(format!(
                        "Ignoring shared filter ({}); starting with an empty filter",
                        violation
                    )));
                } else {
                    self.commit(root)?;
                    result.add_message(CmdMessage::success("Shared filter applied"));
                }
            }
            Err(err) => {
                self.commit(Group::default())?;
                result.add_message(CmdMessage::warning(format!(
                    "Ignoring shared filter ({}); starting with an empty filter",
                    err
                )));
            }
        }
        Ok(result)
    }

    /// Saves the current tree under a name.
    pub fn save_named(&mut self, name: &str, color: &str) -> Result<CmdResult> {
        let text = share::serialize(&self.root)?;
        let entry = self.store.create(name, &text, color)?;
        let mut result = CmdResult::default().with_filters(vec![entry]);
        result.add_message(CmdMessage::success(format!("Saved filter '{}'", name)));
        Ok(result)
    }

    pub fn list_named(&self) -> Result<CmdResult> {
        let filters = self.store.list()?;
        let mut result = CmdResult::default();
        if filters.is_empty() {
            result.add_message(CmdMessage::info("No saved filters"));
        }
        Ok(result.with_filters(filters))
    }

    /// Loads a saved filter as the current tree.
    pub fn use_named(&mut self, name: &str) -> Result<CmdResult> {
        let entry = self.store.get(name)?;
        let root = share::deserialize(&entry.filter)?;
        self.commit(root)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("Loaded filter '{}'", name)));
        Ok(result)
    }

    pub fn update_named(&mut self, name: &str, change: FilterChange) -> Result<CmdResult> {
        let entry = self.store.update(name, change)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("Updated filter '{}'", entry.name)));
        Ok(result.with_filters(vec![entry]))
    }

    pub fn delete_named(&mut self, name: &str) -> Result<CmdResult> {
        self.store.delete(name)?;
        let mut result = CmdResult::default();
        result.add_message(CmdMessage::success(format!("Deleted filter '{}'", name)));
        Ok(result)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::schema::ReferenceData;
    use crate::store::memory::InMemoryStore;

    fn new_session() -> FilterSession<InMemoryStore> {
        FilterSession::open(
            InMemoryStore::new(),
            RuleSchema::for_flight_data(&ReferenceData::default()),
        )
    }

    fn build_valid(session: &mut FilterSession<InMemoryStore>) {
        session.add_rule("root").unwrap();
        session.select_rule("root,0", "Flight ID").unwrap();
        session.set_value("root,0", 0, "=").unwrap();
        session.set_value("root,0", 1, "1042").unwrap();
    }

    #[test]
    fn test_edits_accumulate_and_persist_to_the_store() {
        let mut session = new_session();
        build_valid(&mut session);
        assert_eq!(session.tree().children.len(), 1);
        assert!(!session.validate().has_errors());
    }

    #[test]
    fn test_empty_session_is_invalid() {
        let session = new_session();
        assert!(session.validate().has_errors());
    }

    #[test]
    fn test_index_text_errors_surface() {
        let mut session = new_session();
        assert!(session.add_rule("root,x").is_err());
        assert!(session.delete("root,9").is_err());
    }

    #[test]
    fn test_share_then_load_round_trips() {
        let mut session = new_session();
        build_valid(&mut session);
        session.add_group("root").unwrap(); // vacuous, culled on share
        let shared = session.share().unwrap();
        let token = shared.locator.unwrap();

        let mut other = new_session();
        let result = other.load_locator(&token).unwrap();
        assert!(!result.has_errors());
        assert_eq!(other.tree().children.len(), 1);
        assert!(!other.validate().has_errors());
    }

    #[test]
    fn test_bad_locator_falls_back_to_empty_tree() {
        let mut session = new_session();
        build_valid(&mut session);
        let result = session.load_locator("%7Bnotjson").unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
        assert!(session.tree().children.is_empty());
    }

    #[test]
    fn test_incomplete_shared_filter_is_not_applied() {
        let mut session = new_session();
        session.add_rule("root").unwrap(); // unselected rule: invalid
        let token = session.share().unwrap().locator.unwrap();

        let mut other = new_session();
        other.load_locator(&token).unwrap();
        assert!(other.tree().children.is_empty());
    }

    #[test]
    fn test_named_save_use_cycle() {
        let mut session = new_session();
        build_valid(&mut session);
        session.save_named("daily", "#ff0000").unwrap();
        session.delete("root").unwrap();
        assert!(session.tree().children.is_empty());

        session.use_named("daily").unwrap();
        assert_eq!(session.tree().children.len(), 1);
        assert!(!session.validate().has_errors());
    }

    #[test]
    fn test_duplicate_named_save_is_rejected() {
        let mut session = new_session();
        build_valid(&mut session);
        session.save_named("daily", "#ff0000").unwrap();
        assert!(session.save_named("daily", "#00ff00").is_err());
    }
}
