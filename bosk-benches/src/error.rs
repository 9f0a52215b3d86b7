//! Error handling for benchmark setup.
//!
//! Setup builds a graph and then solves it once as a pre-flight check.
//! Either step can fail; both failure types funnel into one enum so the
//! setup path stays on `?` rather than panicking mid-preparation.

use crate::source::GeneratorError;
use bosk_core::MstError;

/// Failure raised while preparing a benchmark input.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// The graph generator rejected its configuration.
    #[error(transparent)]
    Generator(#[from] GeneratorError),
    /// The pre-flight solve failed, usually because the generated graph
    /// was not connected.
    #[error("pre-flight solve failed: {0}")]
    Mst(#[from] MstError),
}
