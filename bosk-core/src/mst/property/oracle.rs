//! Reference Kruskal sweep the driver is checked against.

use super::union_find::DisjointSets;

/// What the reference sweep accepted.
#[derive(Clone, Debug)]
pub(super) struct ReferenceForest {
    /// Forest weight, summed in `f64`.
    pub total_weight: f64,
    /// Accepted arc count.
    pub arc_count: usize,
    /// Components left once the sweep finishes.
    pub components: usize,
}

/// Kruskal over raw edge triples: visit edges in weight order, accept
/// each one that joins two sets. Self-loops never join and parallel
/// edges lose to their cheaper twin, so neither needs special casing.
///
/// The visit order between equal weights is unspecified, which cannot
/// change the totals the properties compare: every minimum spanning tree
/// of a graph carries the same multiset of weights.
pub(super) fn reference_forest(
    vertex_count: usize,
    edges: &[(usize, usize, f32)],
) -> ReferenceForest {
    let mut order: Vec<usize> = (0..edges.len()).collect();
    order.sort_unstable_by(|&a, &b| edges[a].2.total_cmp(&edges[b].2));

    let mut sets = DisjointSets::new(vertex_count);
    let mut total_weight = 0.0_f64;
    let mut arc_count = 0_usize;
    for index in order {
        let (source, target, weight) = edges[index];
        if sets.unite(source, target) {
            total_weight += f64::from(weight);
            arc_count += 1;
        }
    }

    ReferenceForest {
        total_weight,
        arc_count,
        components: sets.components(),
    }
}
