//! Graph generators for the merge-driver property suite.
//!
//! Each [`GraphShape`] realises a seed into a concrete fixture. The
//! connected shapes attach every vertex to an earlier one before adding
//! extras, so they are connected by construction; only [`GraphShape::Split`]
//! produces inputs the driver must reject.

use std::fmt::Display;

use proptest::prelude::*;
use proptest::test_runner::TestCaseError;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::graph::Graph;
use crate::test_utils::graph_from_edges;

use super::union_find::DisjointSets;

type Edge = (usize, usize, f32);

/// Topology family a generated fixture belongs to.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum GraphShape {
    /// Distinct continuous weights at moderate density.
    Uniform,
    /// A palette of two to four weights shared by many edges, exercising
    /// the weight-only heap order under heavy ties.
    TiedWeights,
    /// Weights bunched into narrow bands around a few random centres.
    Banded,
    /// Barely more than a tree: the attachment backbone plus a few extras.
    Thread,
    /// Small vertex set at high density.
    Thicket,
    /// A connected base polluted with self-loops and duplicated edges.
    Noisy,
    /// Two or more clusters with no edges between them.
    Split,
}

impl GraphShape {
    /// Realises the shape into a concrete fixture from one RNG seed.
    pub(super) fn realise(self, seed: u64) -> MergeFixture {
        let mut rng = SmallRng::seed_from_u64(seed);
        match self {
            Self::Uniform => uniform(&mut rng),
            Self::TiedWeights => tied_weights(&mut rng),
            Self::Banded => banded(&mut rng),
            Self::Thread => thread(&mut rng),
            Self::Thicket => thicket(&mut rng),
            Self::Noisy => noisy(&mut rng),
            Self::Split => split(&mut rng),
        }
    }
}

/// One generated input graph plus what the generator promises about it.
#[derive(Clone, Debug)]
pub(super) struct MergeFixture {
    /// Shape the generator was asked for.
    pub shape: GraphShape,
    /// Number of vertices.
    pub vertex_count: usize,
    /// Unordered `(source, target, weight)` triples.
    pub edges: Vec<Edge>,
    /// Components the generator planted: one for the connected shapes,
    /// the cluster count for [`GraphShape::Split`].
    pub planted_components: usize,
}

impl MergeFixture {
    /// Builds the [`Graph`] the driver runs on.
    pub(super) fn graph(&self) -> Graph {
        graph_from_edges(self.vertex_count, &self.edges)
    }

    /// Components actually present in the generated edges.
    pub(super) fn input_components(&self) -> usize {
        let mut sets = DisjointSets::new(self.vertex_count);
        for &(source, target, _) in &self.edges {
            sets.unite(source, target);
        }
        sets.components()
    }

    /// Wraps a property failure with the fixture's parameters.
    pub(super) fn failure(&self, message: impl Display) -> TestCaseError {
        TestCaseError::fail(format!(
            "{message} [{:?}: {} vertices, {} edges, {} planted component(s)]",
            self.shape,
            self.vertex_count,
            self.edges.len(),
            self.planted_components,
        ))
    }
}

/// Strategy over every shape, weighted towards tie-heavy and split inputs
/// since those stress the heap order and the failure path hardest.
pub(super) fn any_fixture() -> impl Strategy<Value = MergeFixture> {
    (shape_strategy(), any::<u64>()).prop_map(|(shape, seed)| shape.realise(seed))
}

fn shape_strategy() -> impl Strategy<Value = GraphShape> {
    prop_oneof![
        2 => Just(GraphShape::Uniform),
        3 => Just(GraphShape::TiedWeights),
        1 => Just(GraphShape::Banded),
        1 => Just(GraphShape::Thread),
        1 => Just(GraphShape::Thicket),
        2 => Just(GraphShape::Noisy),
        2 => Just(GraphShape::Split),
    ]
}

// ── Shape generators ────────────────────────────────────────────────────

fn uniform(rng: &mut SmallRng) -> MergeFixture {
    let vertex_count = rng.gen_range(6..=48);
    let density = rng.gen_range(0.25..0.5);
    let mut edges = Vec::new();
    attach_range(rng, 0, vertex_count, &mut edges, spread_weight);
    fill_pairs(rng, 0, vertex_count, density, &mut edges, spread_weight);
    connected_fixture(GraphShape::Uniform, vertex_count, edges)
}

fn tied_weights(rng: &mut SmallRng) -> MergeFixture {
    let palette: Vec<f32> = (0..rng.gen_range(2..=4))
        .map(|_| f32::from(rng.gen_range(1_u8..=8)))
        .collect();
    let mut weigh = |r: &mut SmallRng| palette[r.gen_range(0..palette.len())];

    let vertex_count = rng.gen_range(6..=48);
    let density = rng.gen_range(0.4..0.8);
    let mut edges = Vec::new();
    attach_range(rng, 0, vertex_count, &mut edges, &mut weigh);
    fill_pairs(rng, 0, vertex_count, density, &mut edges, &mut weigh);
    connected_fixture(GraphShape::TiedWeights, vertex_count, edges)
}

/// Clustered weights: every edge sits within a quarter unit of one of a
/// handful of centres, producing near-ties without exact equality.
fn banded(rng: &mut SmallRng) -> MergeFixture {
    let centres: Vec<f32> = (0..rng.gen_range(2..=3))
        .map(|_| rng.gen_range(0.5_f32..60.0))
        .collect();
    let mut weigh =
        |r: &mut SmallRng| centres[r.gen_range(0..centres.len())] + r.gen_range(0.0_f32..0.25);

    let vertex_count = rng.gen_range(6..=48);
    let density = rng.gen_range(0.3..0.6);
    let mut edges = Vec::new();
    attach_range(rng, 0, vertex_count, &mut edges, &mut weigh);
    fill_pairs(rng, 0, vertex_count, density, &mut edges, &mut weigh);
    connected_fixture(GraphShape::Banded, vertex_count, edges)
}

fn thread(rng: &mut SmallRng) -> MergeFixture {
    let vertex_count = rng.gen_range(6..=48);
    let mut edges = Vec::new();
    attach_range(rng, 0, vertex_count, &mut edges, spread_weight);
    for _ in 0..rng.gen_range(1..=vertex_count / 3) {
        let a = rng.gen_range(0..vertex_count - 1);
        let b = rng.gen_range(a + 1..vertex_count);
        edges.push((a, b, spread_weight(rng)));
    }
    connected_fixture(GraphShape::Thread, vertex_count, edges)
}

fn thicket(rng: &mut SmallRng) -> MergeFixture {
    let vertex_count = rng.gen_range(6..=20);
    let density = rng.gen_range(0.75..0.9);
    let mut edges = Vec::new();
    attach_range(rng, 0, vertex_count, &mut edges, spread_weight);
    fill_pairs(rng, 0, vertex_count, density, &mut edges, spread_weight);
    connected_fixture(GraphShape::Thicket, vertex_count, edges)
}

/// Connected base, then self-loops and duplicates. The driver must skip
/// the loops and treat repeated pairs as parallel edges.
fn noisy(rng: &mut SmallRng) -> MergeFixture {
    let vertex_count = rng.gen_range(6..=24);
    let density = rng.gen_range(0.2..0.45);
    let mut edges = Vec::new();
    attach_range(rng, 0, vertex_count, &mut edges, spread_weight);
    fill_pairs(rng, 0, vertex_count, density, &mut edges, spread_weight);

    for _ in 0..rng.gen_range(1..=4) {
        let vertex = rng.gen_range(0..vertex_count);
        edges.push((vertex, vertex, spread_weight(rng)));
    }
    for _ in 0..rng.gen_range(2..=6) {
        let (source, target, weight) = edges[rng.gen_range(0..edges.len())];
        if source == target {
            continue;
        }
        // Half the duplicates keep their weight, half get a fresh one.
        let repeated = if rng.gen_bool(0.5) {
            weight
        } else {
            spread_weight(rng)
        };
        edges.push((source, target, repeated));
    }
    connected_fixture(GraphShape::Noisy, vertex_count, edges)
}

fn split(rng: &mut SmallRng) -> MergeFixture {
    let cluster_count = rng.gen_range(2..=4);
    let mut edges = Vec::new();
    let mut offset = 0;
    for _ in 0..cluster_count {
        let size = rng.gen_range(2..=10);
        let density = rng.gen_range(0.2..0.7);
        attach_range(rng, offset, offset + size, &mut edges, spread_weight);
        fill_pairs(rng, offset, offset + size, density, &mut edges, spread_weight);
        offset += size;
    }
    MergeFixture {
        shape: GraphShape::Split,
        vertex_count: offset,
        edges,
        planted_components: cluster_count,
    }
}

// ── Building blocks ─────────────────────────────────────────────────────

/// Continuous weights; every value is an `f32` below 64, so `f64` totals
/// over any spanning tree stay exact.
fn spread_weight(rng: &mut SmallRng) -> f32 {
    rng.gen_range(0.5_f32..64.0)
}

/// Connects `lo..hi` into one component: each vertex after the first
/// attaches to a uniformly chosen earlier one.
fn attach_range(
    rng: &mut SmallRng,
    lo: usize,
    hi: usize,
    edges: &mut Vec<Edge>,
    mut weigh: impl FnMut(&mut SmallRng) -> f32,
) {
    for vertex in lo + 1..hi {
        let anchor = rng.gen_range(lo..vertex);
        edges.push((anchor, vertex, weigh(rng)));
    }
}

/// Adds each vertex pair inside `lo..hi` with probability `density`.
fn fill_pairs(
    rng: &mut SmallRng,
    lo: usize,
    hi: usize,
    density: f64,
    edges: &mut Vec<Edge>,
    mut weigh: impl FnMut(&mut SmallRng) -> f32,
) {
    for a in lo..hi {
        for b in a + 1..hi {
            if rng.gen_bool(density) {
                edges.push((a, b, weigh(rng)));
            }
        }
    }
}

fn connected_fixture(shape: GraphShape, vertex_count: usize, edges: Vec<Edge>) -> MergeFixture {
    MergeFixture {
        shape,
        vertex_count,
        edges,
        planted_components: 1,
    }
}
