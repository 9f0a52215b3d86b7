//! Support library for the Criterion benchmarks.
//!
//! The harness under `benches/` draws seeded graph generation from
//! [`source`] and setup error handling from [`error`].

pub mod error;
pub mod source;
