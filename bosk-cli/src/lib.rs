//! Library half of the `bosk` binary.
//!
//! The command pipeline lives here rather than in `main.rs` so doctests
//! and integration tests can call it in-process.

pub mod cli;
pub mod graph_file;
pub mod logging;
