//! Partial trees: spanning-tree components under construction.

use crate::graph::{Graph, VertexId};
use crate::queue::{ArcQueue, CandidateArc};

/// A component of the spanning forest being assembled: its root vertex and
/// the queue of candidate arcs leaving its vertices.
///
/// The stored root is the component's identity in the registry; merging
/// redirects root pointers in the driver's root table, never here.
///
/// # Examples
/// ```
/// use bosk_core::{Graph, PartialTree};
///
/// let mut builder = Graph::builder();
/// let a = builder.add_vertex("A");
/// let b = builder.add_vertex("B");
/// builder.add_edge(a, b, 1.0);
/// let graph = builder.build().expect("valid description");
///
/// let tree = PartialTree::seeded(&graph, a);
/// assert_eq!(tree.root(), a);
/// assert_eq!(tree.arcs().len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct PartialTree {
    root: VertexId,
    arcs: ArcQueue,
}

impl PartialTree {
    /// Creates a partial tree with an empty arc queue.
    #[must_use]
    pub const fn new(root: VertexId) -> Self {
        Self {
            root,
            arcs: ArcQueue::new(),
        }
    }

    /// Creates a singleton component for `vertex`, seeding one candidate
    /// arc per incident edge.
    #[must_use]
    pub fn seeded(graph: &Graph, vertex: VertexId) -> Self {
        let mut arcs = ArcQueue::new();
        for neighbour in graph.neighbours(vertex) {
            arcs.insert(CandidateArc::new(vertex, neighbour.target, neighbour.weight));
        }
        Self { root: vertex, arcs }
    }

    /// Representative vertex identifying this component.
    #[rustfmt::skip]
    #[must_use] pub const fn root(&self) -> VertexId { self.root }

    /// Candidate arcs leaving this component.
    #[rustfmt::skip]
    #[must_use] pub const fn arcs(&self) -> &ArcQueue { &self.arcs }

    /// Mutable access to the candidate arcs, used by the merge loop.
    pub const fn arcs_mut(&mut self) -> &mut ArcQueue {
        &mut self.arcs
    }

    /// Merge hook: drains the other component's queue into this one.
    ///
    /// The absorbed tree is consumed; its root lives on only through the
    /// driver's root table.
    pub fn absorb(&mut self, other: Self) {
        self.arcs.merge(other.arcs);
    }
}
