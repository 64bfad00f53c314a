//! # CLI Behavior
//!
//! This is **one possible UI client** for the flyq filter engine — not the
//! application itself. The CLI is the only place that knows about terminal
//! I/O, exit codes, and output formatting.
//!
//! The working filter persists between invocations (in the data directory's
//! session file), so a filter is built up command by command:
//!
//! ```text
//! flyq add-rule root
//! flyq select root,0 "Flight ID"
//! flyq set root,0 0 "="
//! flyq set root,0 1 1042
//! flyq check
//! flyq share
//! ```
//!
//! Naked `flyq` shows the current tree — reading is the path of least
//! resistance.
//!
//! ## Module Structure
//!
//! - `commands`: dispatch to the session facade, one handler per subcommand
//! - `render`: output formatting (tree view, filter tables, messages)
//! - `setup`: argument parsing via clap
//! - `styles`: terminal styling constants

mod commands;
mod render;
pub mod setup;
mod styles;

pub use commands::run;
