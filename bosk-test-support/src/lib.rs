//! Shared test plumbing for the bosk workspace.

pub mod capture;
pub mod ci;
