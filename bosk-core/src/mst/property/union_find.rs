//! Union-find used by the property checks.

/// Disjoint vertex sets with path-halving finds.
pub(super) struct DisjointSets {
    parent: Vec<usize>,
    components: usize,
}

impl DisjointSets {
    pub(super) fn new(size: usize) -> Self {
        Self {
            parent: (0..size).collect(),
            components: size,
        }
    }

    /// Joins the sets holding `a` and `b`; false when already joined.
    /// A self-loop never joins anything.
    pub(super) fn unite(&mut self, a: usize, b: usize) -> bool {
        let root_a = self.find(a);
        let root_b = self.find(b);
        if root_a == root_b {
            return false;
        }
        self.parent[root_b] = root_a;
        self.components -= 1;
        true
    }

    /// Number of sets remaining.
    pub(super) fn components(&self) -> usize {
        self.components
    }

    fn find(&mut self, mut node: usize) -> usize {
        while self.parent[node] != node {
            self.parent[node] = self.parent[self.parent[node]];
            node = self.parent[node];
        }
        node
    }
}
