use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "flyq",
    bin_name = "flyq",
    version,
    disable_help_subcommand = true
)]
#[command(
    about = "Build, validate, share and save flight-data query filters",
    long_about = None
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show the current filter tree
    #[command(alias = "ls", display_order = 1)]
    Show,

    /// List the available rules and their condition slots
    #[command(display_order = 2)]
    Rules,

    /// Append a new rule to the group at PATH
    #[command(name = "add-rule", alias = "ar", display_order = 3)]
    AddRule {
        /// Target group path (e.g. root or root,1)
        path: String,
    },

    /// Append a new sub-group to the group at PATH
    #[command(name = "add-group", alias = "ag", display_order = 4)]
    AddGroup {
        /// Target group path
        path: String,
    },

    /// Require ALL conditions of the group at PATH
    #[command(display_order = 5)]
    And {
        /// Target group path
        path: String,
    },

    /// Require ANY condition of the group at PATH
    #[command(display_order = 6)]
    Or {
        /// Target group path
        path: String,
    },

    /// Pick the predicate of the rule at PATH
    #[command(display_order = 7)]
    Select {
        /// Target rule path (e.g. root,0)
        path: String,
        /// Rule name from `flyq rules`
        rule: String,
    },

    /// Set a condition value on the rule at PATH
    #[command(display_order = 8)]
    Set {
        /// Target rule path
        path: String,
        /// 0-based condition slot
        slot: usize,
        /// Value to store
        value: String,
    },

    /// Remove the node at PATH (the root path clears everything)
    #[command(display_order = 9)]
    Rm {
        /// Target node path
        path: String,
    },

    /// Clear the whole filter
    #[command(display_order = 10)]
    Clear,

    /// Validate the current filter against the rule catalog
    #[command(display_order = 11)]
    Check,

    /// Print the shareable locator for the current filter
    #[command(display_order = 12)]
    Share,

    /// Replace the current filter from a shareable locator
    #[command(display_order = 13)]
    Load {
        /// Locator token (the value of the share URL's query parameter)
        token: String,
    },

    /// Save the current filter under a name
    #[command(display_order = 14)]
    Save {
        name: String,
        /// Display color, e.g. "#cc3366"
        #[arg(long)]
        color: Option<String>,
    },

    /// List saved filters
    #[command(display_order = 15)]
    Filters,

    /// Load a saved filter as the current filter
    #[command(display_order = 16)]
    Use { name: String },

    /// Rename a saved filter
    #[command(display_order = 17)]
    Rename { name: String, new_name: String },

    /// Change a saved filter's display color
    #[command(display_order = 18)]
    Recolor { name: String, color: String },

    /// Delete a saved filter
    #[command(display_order = 19)]
    Drop { name: String },
}
