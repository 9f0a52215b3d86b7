//! Argument parsing and command dispatch for `bosk`.
//!
//! One subcommand exists today: `run`, which turns a graph description
//! file into a printed minimum spanning tree.

mod commands;

pub use commands::{Cli, CliError, Command, ExecutionSummary, RunCommand, render_summary, run_cli};
