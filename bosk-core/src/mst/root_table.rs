//! Index-based table of component root pointers.

use crate::graph::VertexId;

/// Per-vertex root pointers, realised as a dense table.
///
/// Membership queries chase pointers to a self-pointing root without
/// compressing the chain; merging redirects one current root at another.
/// Those two operations are the entire write discipline: chains stay
/// acyclic and every walk terminates.
///
/// # Examples
/// ```
/// use bosk_core::{RootTable, VertexId};
///
/// let mut roots = RootTable::identity(3);
/// roots.repoint(VertexId::new(0), VertexId::new(1));
/// roots.repoint(VertexId::new(1), VertexId::new(2));
/// assert_eq!(roots.resolve(VertexId::new(0)), VertexId::new(2));
/// ```
#[derive(Debug, Clone)]
pub struct RootTable {
    root: Vec<usize>,
}

impl RootTable {
    /// Creates a table where every vertex is its own root.
    #[must_use]
    pub fn identity(vertex_count: usize) -> Self {
        Self {
            root: (0..vertex_count).collect(),
        }
    }

    /// Resolves `vertex` to the root of its component.
    ///
    /// Read-only: the chain is not compressed on the way up.
    ///
    /// # Panics
    /// Panics when `vertex` is outside the table.
    #[must_use]
    pub fn resolve(&self, vertex: VertexId) -> VertexId {
        let mut current = vertex.index();
        while self.root[current] != current {
            current = self.root[current];
        }
        VertexId::new(current)
    }

    /// Redirects `old_root` to point at `new_root`.
    ///
    /// Both arguments must be current roots; the table is never edited
    /// mid-chain.
    ///
    /// # Panics
    /// Panics when either vertex is outside the table.
    pub fn repoint(&mut self, old_root: VertexId, new_root: VertexId) {
        debug_assert_eq!(
            self.root[old_root.index()],
            old_root.index(),
            "repoint source must be a current root",
        );
        debug_assert_eq!(
            self.root[new_root.index()],
            new_root.index(),
            "repoint target must be a current root",
        );
        self.root[old_root.index()] = new_root.index();
    }
}
