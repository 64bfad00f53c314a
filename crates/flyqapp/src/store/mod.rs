//! # Storage Layer
//!
//! Persistence boundary for filters. Two things cross it, both as plain
//! serialized text produced by [`crate::share`]:
//!
//! 1. **Named filters** — user-saved snapshots with a display color,
//!    addressed by their unique name.
//! 2. **The session tree** — the working filter a client (e.g. the CLI)
//!    keeps between invocations.
//!
//! The engine itself never touches storage; only the session facade
//! ([`crate::api`]) calls through the [`FilterStore`] trait.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: JSON files under a data directory, written
//!   atomically (tmp file + rename).
//! - [`memory::InMemoryStore`]: for testing logic without filesystem I/O.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::error::Result;
use crate::model::Group;

pub mod fs;
pub mod memory;

/// A filter snapshot saved under a user-chosen name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SavedFilter {
    pub id: Uuid,
    pub name: String,
    /// Serialized tree text ([`crate::share::serialize`] output).
    pub filter: String,
    /// Display color for UI chips/swatches.
    pub color: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl SavedFilter {
    pub fn new(name: &str, filter: &str, color: &str) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.to_string(),
            filter: filter.to_string(),
            color: color.to_string(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// A partial update to a saved filter; unset fields keep their value.
#[derive(Debug, Clone, Default)]
pub struct FilterChange {
    pub name: Option<String>,
    pub filter: Option<String>,
    pub color: Option<String>,
}

impl FilterChange {
    pub fn rename(name: &str) -> Self {
        Self {
            name: Some(name.to_string()),
            ..Default::default()
        }
    }

    pub fn with_filter(mut self, filter: &str) -> Self {
        self.filter = Some(filter.to_string());
        self
    }

    pub fn with_color(mut self, color: &str) -> Self {
        self.color = Some(color.to_string());
        self
    }
}

/// Abstract interface for filter persistence.
pub trait FilterStore {
    /// Save a new named filter. Rejects duplicate names.
    fn create(&mut self, name: &str, filter: &str, color: &str) -> Result<SavedFilter>;

    /// Fetch a named filter.
    fn get(&self, name: &str) -> Result<SavedFilter>;

    /// All named filters, in creation order.
    fn list(&self) -> Result<Vec<SavedFilter>>;

    /// Apply a partial update (rename/text/color). Renaming onto an existing
    /// name is rejected.
    fn update(&mut self, name: &str, change: FilterChange) -> Result<SavedFilter>;

    /// Remove a named filter.
    fn delete(&mut self, name: &str) -> Result<()>;

    /// The working tree persisted between client invocations, if any.
    fn load_session(&self) -> Result<Option<Group>>;

    /// Persist the working tree.
    fn save_session(&mut self, root: &Group) -> Result<()>;
}
