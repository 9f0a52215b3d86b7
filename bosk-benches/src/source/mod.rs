//! Seeded random graph generation for benchmarks.
//!
//! Builds connected weighted graphs of a requested size: a shuffled
//! spanning backbone guarantees connectivity, and extra random edges
//! thicken the graph so the merge loop has cycle-closing arcs to discard.

use bosk_core::{Graph, GraphError, VertexId};
use rand::rngs::SmallRng;
use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};

/// Configuration for [`generate_connected_graph`].
#[derive(Clone, Debug)]
pub struct RandomGraphConfig {
    /// Number of vertices in the generated graph.
    pub vertex_count: usize,
    /// Extra edges added per vertex beyond the spanning backbone.
    pub extra_edges_per_vertex: usize,
    /// Seed for the deterministic generator.
    pub seed: u64,
}

/// Errors that may occur while generating benchmark graphs.
#[derive(Debug, thiserror::Error)]
pub enum GeneratorError {
    /// The requested vertex count was zero.
    #[error("vertex count must be greater than zero")]
    ZeroVertices,
    /// The generated description failed graph validation.
    #[error("generated graph failed validation: {0}")]
    Graph(#[from] GraphError),
}

/// Generates a connected weighted graph from `config`.
///
/// Vertices are named `v0`, `v1`, and so on; weights are drawn uniformly
/// from `0.1..100.0`. The same configuration always yields the same graph.
///
/// # Errors
/// Returns [`GeneratorError::ZeroVertices`] when the configured vertex
/// count is zero.
pub fn generate_connected_graph(config: &RandomGraphConfig) -> Result<Graph, GeneratorError> {
    if config.vertex_count == 0 {
        return Err(GeneratorError::ZeroVertices);
    }

    let mut rng = SmallRng::seed_from_u64(config.seed);
    let mut builder = Graph::builder();
    for index in 0..config.vertex_count {
        builder.add_vertex(format!("v{index}"));
    }

    let mut order: Vec<VertexId> = (0..config.vertex_count).map(VertexId::new).collect();
    order.shuffle(&mut rng);
    for pair in order.windows(2) {
        if let [from, to] = pair {
            builder.add_edge(*from, *to, random_weight(&mut rng));
        }
    }

    let extras = config
        .vertex_count
        .saturating_mul(config.extra_edges_per_vertex);
    for _ in 0..extras {
        let source = VertexId::new(rng.gen_range(0..config.vertex_count));
        let target = VertexId::new(rng.gen_range(0..config.vertex_count));
        if source == target {
            continue;
        }
        builder.add_edge(source, target, random_weight(&mut rng));
    }

    Ok(builder.build()?)
}

fn random_weight(rng: &mut SmallRng) -> f32 {
    rng.gen_range(0.1_f32..100.0)
}
