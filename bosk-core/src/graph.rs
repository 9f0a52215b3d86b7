//! Immutable adjacency-list graph model.
//!
//! A [`Graph`] is assembled through [`GraphBuilder`], validated once at
//! [`GraphBuilder::build`], and never mutated afterwards. Vertices are
//! identified by dense [`VertexId`] indices into the vertex table; every
//! undirected edge appears as a [`Neighbour`] entry on both endpoints.

use std::collections::HashSet;
use std::fmt;

/// Dense index of a vertex within a [`Graph`].
///
/// Identifiers are handed out by [`GraphBuilder::add_vertex`] in insertion
/// order and remain valid for the built graph.
///
/// # Examples
/// ```
/// use bosk_core::VertexId;
///
/// let id = VertexId::new(3);
/// assert_eq!(id.index(), 3);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct VertexId(usize);

impl VertexId {
    /// Wraps a raw vertex index.
    #[must_use]
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Returns the raw index into the graph's vertex table.
    #[must_use]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Adjacency entry: the far endpoint of an edge and its weight.
///
/// # Examples
/// ```
/// use bosk_core::{Neighbour, VertexId};
///
/// let neighbour = Neighbour { target: VertexId::new(1), weight: 0.5 };
/// assert_eq!(neighbour.target.index(), 1);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Neighbour {
    /// Vertex on the far side of the edge.
    pub target: VertexId,
    /// Edge weight; finite by construction.
    pub weight: f32,
}

/// Error raised when [`GraphBuilder::build`] rejects its input.
///
/// `Display` and `Error` are implemented by hand because the
/// `NonFiniteWeight` variant's `source` field would otherwise be inferred
/// by a derive as an error-source and must stay a plain index.
#[derive(Debug, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum GraphError {
    /// The same vertex name was registered more than once.
    DuplicateVertexName {
        /// Name that appeared twice.
        name: String,
    },
    /// An edge endpoint does not identify a registered vertex.
    UnknownVertex {
        /// Raw index of the offending endpoint.
        vertex: usize,
        /// Number of vertices the builder holds.
        vertex_count: usize,
    },
    /// An edge weight was NaN or infinite.
    NonFiniteWeight {
        /// Raw index of the edge source.
        source: usize,
        /// Raw index of the edge target.
        target: usize,
    },
}

impl fmt::Display for GraphError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DuplicateVertexName { name } => {
                write!(f, "vertex name `{name}` is registered more than once")
            }
            Self::UnknownVertex {
                vertex,
                vertex_count,
            } => {
                write!(
                    f,
                    "edge endpoint {vertex} is out of bounds for {vertex_count} vertices"
                )
            }
            Self::NonFiniteWeight { source, target } => {
                write!(f, "edge {source} -- {target} carries a non-finite weight")
            }
        }
    }
}

impl std::error::Error for GraphError {}

impl GraphError {
    /// Returns the stable machine-readable code for this error.
    #[must_use]
    pub const fn code(&self) -> GraphErrorCode {
        match self {
            Self::DuplicateVertexName { .. } => GraphErrorCode::DuplicateVertexName,
            Self::UnknownVertex { .. } => GraphErrorCode::UnknownVertex,
            Self::NonFiniteWeight { .. } => GraphErrorCode::NonFiniteWeight,
        }
    }
}

/// Machine-readable codes for [`GraphError`] variants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum GraphErrorCode {
    /// Corresponds to [`GraphError::DuplicateVertexName`].
    DuplicateVertexName,
    /// Corresponds to [`GraphError::UnknownVertex`].
    UnknownVertex,
    /// Corresponds to [`GraphError::NonFiniteWeight`].
    NonFiniteWeight,
}

impl GraphErrorCode {
    /// Returns the stable string form used in logs and tooling.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::DuplicateVertexName => "DUPLICATE_VERTEX_NAME",
            Self::UnknownVertex => "UNKNOWN_VERTEX",
            Self::NonFiniteWeight => "NON_FINITE_WEIGHT",
        }
    }
}

impl fmt::Display for GraphErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy)]
struct PendingEdge {
    source: usize,
    target: usize,
    weight: f32,
}

/// Incremental builder for [`Graph`].
///
/// Vertices and edges are recorded without validation; [`Self::build`]
/// checks the whole description at once so callers see the first rejection
/// with full context.
///
/// # Examples
/// ```
/// use bosk_core::Graph;
///
/// let mut builder = Graph::builder();
/// let a = builder.add_vertex("A");
/// let b = builder.add_vertex("B");
/// builder.add_edge(a, b, 1.0);
/// let graph = builder.build().expect("two vertices and one edge are valid");
/// assert_eq!(graph.vertex_count(), 2);
/// assert_eq!(graph.edge_count(), 1);
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphBuilder {
    names: Vec<String>,
    edges: Vec<PendingEdge>,
}

impl GraphBuilder {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a vertex and returns its dense identifier.
    pub fn add_vertex(&mut self, name: impl Into<String>) -> VertexId {
        let id = VertexId::new(self.names.len());
        self.names.push(name.into());
        id
    }

    /// Records an undirected edge between `source` and `target`.
    ///
    /// Endpoints and weight are validated by [`Self::build`], not here.
    pub fn add_edge(&mut self, source: VertexId, target: VertexId, weight: f32) {
        self.edges.push(PendingEdge {
            source: source.index(),
            target: target.index(),
            weight,
        });
    }

    /// Looks up a previously registered vertex by name.
    #[must_use]
    pub fn vertex_id(&self, name: &str) -> Option<VertexId> {
        self.names
            .iter()
            .position(|candidate| candidate == name)
            .map(VertexId::new)
    }

    /// Number of vertices registered so far.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.names.len()
    }

    /// Validates the recorded description and freezes it into a [`Graph`].
    ///
    /// Self-loops and parallel edges are accepted; they contribute no
    /// useful candidate arcs and are discarded by the merge loop's cycle
    /// check.
    ///
    /// # Errors
    /// Returns [`GraphError::DuplicateVertexName`] when two vertices share
    /// a name, [`GraphError::UnknownVertex`] when an edge endpoint is out
    /// of bounds, and [`GraphError::NonFiniteWeight`] when an edge weight
    /// is NaN or infinite.
    pub fn build(self) -> Result<Graph, GraphError> {
        let vertex_count = self.names.len();
        let mut seen = HashSet::with_capacity(vertex_count);
        for name in &self.names {
            if !seen.insert(name.as_str()) {
                return Err(GraphError::DuplicateVertexName { name: name.clone() });
            }
        }

        let mut vertices: Vec<VertexRecord> = self
            .names
            .into_iter()
            .map(|name| VertexRecord {
                name,
                neighbours: Vec::new(),
            })
            .collect();

        for edge in &self.edges {
            for endpoint in [edge.source, edge.target] {
                if endpoint >= vertex_count {
                    return Err(GraphError::UnknownVertex {
                        vertex: endpoint,
                        vertex_count,
                    });
                }
            }
            if !edge.weight.is_finite() {
                return Err(GraphError::NonFiniteWeight {
                    source: edge.source,
                    target: edge.target,
                });
            }
            vertices[edge.source].neighbours.push(Neighbour {
                target: VertexId::new(edge.target),
                weight: edge.weight,
            });
            // A self-loop contributes a single adjacency entry.
            if edge.source != edge.target {
                vertices[edge.target].neighbours.push(Neighbour {
                    target: VertexId::new(edge.source),
                    weight: edge.weight,
                });
            }
        }

        Ok(Graph {
            vertices,
            edge_count: self.edges.len(),
        })
    }
}

#[derive(Debug, Clone)]
struct VertexRecord {
    name: String,
    neighbours: Vec<Neighbour>,
}

/// Weighted undirected graph, immutable once built.
///
/// # Examples
/// ```
/// use bosk_core::Graph;
///
/// let mut builder = Graph::builder();
/// let a = builder.add_vertex("A");
/// let b = builder.add_vertex("B");
/// builder.add_edge(a, b, 2.5);
/// let graph = builder.build().expect("valid description");
/// assert_eq!(graph.name(a), "A");
/// assert_eq!(graph.neighbours(b).len(), 1);
/// ```
#[derive(Debug, Clone)]
pub struct Graph {
    vertices: Vec<VertexRecord>,
    edge_count: usize,
}

impl Graph {
    /// Starts a new [`GraphBuilder`].
    #[must_use]
    pub fn builder() -> GraphBuilder {
        GraphBuilder::new()
    }

    /// Number of vertices in the graph.
    #[must_use]
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Number of edges recorded at build time, counting parallels.
    #[must_use]
    pub const fn edge_count(&self) -> usize {
        self.edge_count
    }

    /// Whether the graph has no vertices.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Display name of `vertex`.
    ///
    /// # Panics
    /// Panics when `vertex` does not belong to this graph.
    #[must_use]
    pub fn name(&self, vertex: VertexId) -> &str {
        &self.vertices[vertex.index()].name
    }

    /// Adjacency list of `vertex`.
    ///
    /// # Panics
    /// Panics when `vertex` does not belong to this graph.
    #[must_use]
    pub fn neighbours(&self, vertex: VertexId) -> &[Neighbour] {
        &self.vertices[vertex.index()].neighbours
    }

    /// Iterates over all vertex identifiers in index order.
    pub fn vertex_ids(&self) -> impl Iterator<Item = VertexId> {
        (0..self.vertices.len()).map(VertexId::new)
    }
}
