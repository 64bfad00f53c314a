//! The flyq binary is intentionally thin: the CLI lives in `src/cli/`, while
//! this file only invokes `cli::run()` and turns its outcome into a process
//! exit code. Everything from the library's `api.rs` inward is UI-agnostic;
//! the CLI layer owns argument parsing, rendering, and terminal concerns.

mod cli;

fn main() {
    std::process::exit(cli::run());
}
