//! # Flyq Architecture
//!
//! Flyq is a **UI-agnostic filter engine** for flight-data review queries.
//! This is not a CLI application that happens to have some library code —
//! it's a library that happens to have a CLI client.
//!
//! ## The Layering
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Client (the flyq CLI crate, or any other UI)               │
//! │  - Parses arguments, renders trees, handles terminal I/O    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Session Facade (api.rs)                                    │
//! │  - Holds the current tree, schema, and store handle         │
//! │  - Parses textual indexes, returns structured CmdResults    │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Engine (model, index, commands/*, validate, share)         │
//! │  - Pure functions over the filter tree                      │
//! │  - Edits return a new root; nothing is mutated in place     │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage (store/)                                           │
//! │  - FilterStore trait                                        │
//! │  - FileStore (production), InMemoryStore (testing)          │
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Key Principle: Pure Edits
//!
//! Every structural edit takes the current root by reference and returns a
//! structurally new root. There is no shared mutable tree, so "whoever holds
//! the old value keeps seeing the old value" — stale-view aliasing bugs are
//! ruled out by construction, and the single-writer question disappears.
//!
//! ## The Index System
//!
//! Nodes are addressed by [`index::TreeIndex`] paths, carried as
//! `"root,2,0,1"` strings at UI boundaries and as integer sequences inside.
//! See `index.rs` for the resolution rules.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code takes regular Rust values, returns regular
//! Rust types, never writes to stdout/stderr, and never assumes a terminal.
//! Only `store/fs.rs` touches the filesystem.

pub mod api;
pub mod commands;
pub mod config;
pub mod error;
pub mod index;
pub mod model;
pub mod schema;
pub mod share;
pub mod store;
pub mod validate;

#[cfg(any(test, feature = "test_utils"))]
pub mod test_utils;
