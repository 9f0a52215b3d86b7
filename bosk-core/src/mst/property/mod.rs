//! Property suite for the merge driver.
//!
//! Random graphs of several shapes are fed to the driver; each outcome is
//! checked against a reference Kruskal sweep, for structural soundness,
//! and for stability across reruns.

mod agreement;
mod fixtures;
mod invariants;
mod oracle;
mod union_find;
