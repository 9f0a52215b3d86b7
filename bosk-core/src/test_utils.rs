//! Test-only helpers shared across the `bosk-core` suites.

use bosk_test_support::ci::property_test_profile::PropertyRunProfile;
use proptest::test_runner::Config as ProptestConfig;

use crate::graph::{Graph, VertexId};

/// Proptest configuration scaled by the workspace-wide CI profile, so one
/// pair of environment variables drives every property suite.
#[must_use]
pub(crate) fn suite_proptest_config(default_cases: u32) -> ProptestConfig {
    let profile = PropertyRunProfile::load(default_cases, false);
    let mut config = ProptestConfig::with_cases(profile.cases());
    config.fork = profile.fork();
    config
}

/// Builds a graph with `vertex_count` vertices named `v0`, `v1`, ... and
/// one undirected edge per `(source, target, weight)` triple.
///
/// # Panics
/// Panics when the description is invalid, which test inputs never are.
#[must_use]
pub(crate) fn graph_from_edges(vertex_count: usize, edges: &[(usize, usize, f32)]) -> Graph {
    let mut builder = Graph::builder();
    for index in 0..vertex_count {
        builder.add_vertex(format!("v{index}"));
    }
    for &(source, target, weight) in edges {
        builder.add_edge(VertexId::new(source), VertexId::new(target), weight);
    }
    builder
        .build()
        .expect("test graph description must be valid")
}
