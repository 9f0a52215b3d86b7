//! Bosk core library: minimum spanning trees by partial-tree merging.

mod graph;
mod mst;
mod partial_tree;
mod queue;
mod registry;
#[cfg(test)]
mod test_utils;

pub use crate::{
    graph::{Graph, GraphBuilder, GraphError, GraphErrorCode, Neighbour, VertexId},
    mst::{MstError, MstErrorCode, RootTable, SpanningTree, minimum_spanning_tree},
    partial_tree::PartialTree,
    queue::{ArcQueue, CandidateArc, EmptyQueue},
    registry::{RegistryError, TreeRegistry},
};
