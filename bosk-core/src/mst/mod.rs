//! Minimum spanning tree construction by partial-tree merging.
//!
//! The algorithm is a Borůvka/Kruskal hybrid: every vertex starts as a
//! singleton [`PartialTree`] whose queue holds its incident arcs, and the
//! driver repeatedly takes the front component off the [`TreeRegistry`],
//! mines its queue for the cheapest arc that leaves the component, and
//! merges the component on the far side into it. Arcs that land inside
//! the component close cycles and are discarded during the mining step.
//!
//! Component membership lives in a [`RootTable`]. Merging repoints the
//! absorbed component's root one hop at the surviving root; resolution
//! chases pointers without compressing. The stored root of every live
//! registry entry is therefore always a current root, which is what lets
//! the registry match components by direct equality.

mod root_table;

use tracing::{debug, info, instrument};

use crate::graph::Graph;
use crate::partial_tree::PartialTree;
use crate::queue::CandidateArc;
use crate::registry::TreeRegistry;

pub use self::root_table::RootTable;

/// Errors returned while computing a minimum spanning tree.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum MstError {
    /// The caller requested a spanning tree for a graph with no vertices.
    #[error("cannot compute a spanning tree for an empty graph")]
    EmptyGraph,
    /// A component exhausted its candidate arcs while other components
    /// remained, so no tree spans the graph. This is the only failure a
    /// well-formed input can produce.
    #[error("graph is disconnected: {components} components remain with no arcs between them")]
    DisconnectedGraph {
        /// Number of components still live when the arcs ran out.
        components: usize,
    },
    /// Internal bookkeeping failed; indicates a defect, not bad input.
    #[error("internal invariant violated: {invariant}")]
    InvariantViolation {
        /// Description of the broken invariant.
        invariant: &'static str,
    },
}

impl MstError {
    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> MstErrorCode {
        match self {
            Self::EmptyGraph => MstErrorCode::EmptyGraph,
            Self::DisconnectedGraph { .. } => MstErrorCode::DisconnectedGraph,
            Self::InvariantViolation { .. } => MstErrorCode::InvariantViolation,
        }
    }
}

/// Machine-readable codes for [`MstError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MstErrorCode {
    /// Corresponds to [`MstError::EmptyGraph`].
    EmptyGraph,
    /// Corresponds to [`MstError::DisconnectedGraph`].
    DisconnectedGraph,
    /// Corresponds to [`MstError::InvariantViolation`].
    InvariantViolation,
}

impl MstErrorCode {
    /// Returns the stable string form used in logs and tooling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::EmptyGraph => "EMPTY_GRAPH",
            Self::DisconnectedGraph => "DISCONNECTED_GRAPH",
            Self::InvariantViolation => "INVARIANT_VIOLATION",
        }
    }
}

impl std::fmt::Display for MstErrorCode {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Spanning tree produced by [`minimum_spanning_tree`].
///
/// The arcs are unordered; a connected graph with `V` vertices yields
/// exactly `V - 1` of them.
///
/// # Examples
/// ```
/// use bosk_core::{Graph, minimum_spanning_tree};
///
/// let mut builder = Graph::builder();
/// let a = builder.add_vertex("A");
/// let b = builder.add_vertex("B");
/// let c = builder.add_vertex("C");
/// let d = builder.add_vertex("D");
/// builder.add_edge(a, b, 1.0);
/// builder.add_edge(b, c, 2.0);
/// builder.add_edge(c, d, 3.0);
/// builder.add_edge(a, d, 10.0);
/// builder.add_edge(a, c, 4.0);
/// let graph = builder.build().expect("valid description");
///
/// let tree = minimum_spanning_tree(&graph).expect("graph is connected");
/// assert_eq!(tree.len(), 3);
/// assert_eq!(tree.total_weight(), 6.0);
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct SpanningTree {
    arcs: Vec<CandidateArc>,
}

impl SpanningTree {
    /// Accepted arcs, in no particular order.
    #[rustfmt::skip]
    #[must_use] pub fn arcs(&self) -> &[CandidateArc] { &self.arcs }

    /// Number of accepted arcs.
    #[rustfmt::skip]
    #[must_use] pub fn len(&self) -> usize { self.arcs.len() }

    /// Whether the tree holds no arcs (single-vertex input).
    #[rustfmt::skip]
    #[must_use] pub fn is_empty(&self) -> bool { self.arcs.is_empty() }

    /// Sum of the accepted arc weights, accumulated in `f64`.
    #[must_use]
    pub fn total_weight(&self) -> f64 {
        self.arcs.iter().map(|arc| f64::from(arc.weight())).sum()
    }
}

/// Computes a minimum spanning tree of `graph`.
///
/// Runs the partial-tree merge loop until a single component remains: the
/// front component leaves the registry, surrenders the cheapest arc that
/// departs it, and absorbs the component that arc reaches. A single-vertex
/// graph yields an empty tree.
///
/// # Errors
/// Returns [`MstError::EmptyGraph`] for a graph with no vertices,
/// [`MstError::DisconnectedGraph`] when a component runs out of candidate
/// arcs while others remain, and [`MstError::InvariantViolation`] if the
/// driver's bookkeeping is ever caught out (a defect, not an input error).
#[instrument(
    name = "mst.run",
    err,
    skip(graph),
    fields(vertices = graph.vertex_count(), edges = graph.edge_count()),
)]
pub fn minimum_spanning_tree(graph: &Graph) -> Result<SpanningTree, MstError> {
    if graph.is_empty() {
        return Err(MstError::EmptyGraph);
    }

    let (mut registry, mut roots) = seed_components(graph);
    debug!(components = registry.len(), "seeded singleton components");

    let mut arcs = Vec::with_capacity(graph.vertex_count().saturating_sub(1));
    while registry.len() > 1 {
        let mut tree = registry.remove_front().map_err(|_| MstError::InvariantViolation {
            invariant: "a registry holding multiple components has a front",
        })?;

        let arc = next_departing_arc(&mut tree, &roots, registry.len())?;
        arcs.push(arc);

        let target_root = roots.resolve(arc.target());
        let other = registry
            .remove_tree_containing(target_root)
            .map_err(|_| MstError::InvariantViolation {
                invariant: "a departing arc's resolved root identifies a live component",
            })?;

        roots.repoint(other.root(), tree.root());
        tree.absorb(other);
        registry.append(tree);
    }

    let result = SpanningTree { arcs };
    info!(
        arcs = result.len(),
        total_weight = result.total_weight(),
        "minimum spanning tree complete"
    );
    Ok(result)
}

fn seed_components(graph: &Graph) -> (TreeRegistry, RootTable) {
    let mut registry = TreeRegistry::new();
    for vertex in graph.vertex_ids() {
        registry.append(PartialTree::seeded(graph, vertex));
    }
    (registry, RootTable::identity(graph.vertex_count()))
}

/// Mines `tree`'s queue for the cheapest arc that leaves the component,
/// discarding arcs whose target resolves back into it.
///
/// Queue exhaustion here is the sole disconnection signal: a connected
/// graph always holds a departing arc for every component boundary.
fn next_departing_arc(
    tree: &mut PartialTree,
    roots: &RootTable,
    other_components: usize,
) -> Result<CandidateArc, MstError> {
    loop {
        let arc = tree
            .arcs_mut()
            .delete_min()
            .map_err(|_| MstError::DisconnectedGraph {
                components: other_components + 1,
            })?;
        if roots.resolve(arc.target()) != tree.root() {
            return Ok(arc);
        }
    }
}

#[cfg(test)]
mod property;
