//! Structural checks on driver output.
//!
//! A connected fixture must come back as an acyclic spanning set of arcs
//! drawn from the input multiset; a split fixture must be rejected with a
//! plausible component count.

use std::collections::HashMap;

use proptest::test_runner::TestCaseResult;

use crate::mst::{MstError, minimum_spanning_tree};
use crate::queue::CandidateArc;

use super::fixtures::MergeFixture;
use super::union_find::DisjointSets;

pub(super) fn check_tree_structure(fixture: &MergeFixture) -> TestCaseResult {
    match minimum_spanning_tree(&fixture.graph()) {
        Ok(tree) => verify_spanning_arcs(fixture, tree.arcs()),
        Err(MstError::DisconnectedGraph { components }) => verify_split_report(fixture, components),
        Err(error) => Err(fixture.failure(format!("unexpected error: {error}"))),
    }
}

/// Walks the accepted arcs once, checking each against the input pool and
/// uniting its endpoints. Every arc must unite two sets, so finishing on a
/// single set forces exactly `V - 1` arcs that together span the graph.
fn verify_spanning_arcs(fixture: &MergeFixture, arcs: &[CandidateArc]) -> TestCaseResult {
    if fixture.planted_components > 1 {
        return Err(fixture.failure("split input produced a tree"));
    }

    let mut pool = edge_pool(&fixture.edges);
    let mut sets = DisjointSets::new(fixture.vertex_count);
    for arc in arcs {
        let (source, target) = (arc.source().index(), arc.target().index());
        if source == target {
            return Err(fixture.failure(format!("self-loop accepted on vertex {source}")));
        }
        match pool.get_mut(&pool_key(source, target, arc.weight())) {
            Some(count) if *count > 0 => *count -= 1,
            _ => {
                return Err(fixture.failure(format!(
                    "arc {source}-{target} ({}) is not an input edge",
                    arc.weight(),
                )));
            }
        }
        if !sets.unite(source, target) {
            return Err(fixture.failure(format!("arc {source}-{target} closes a cycle")));
        }
    }

    if sets.components() != 1 {
        return Err(fixture.failure(format!(
            "{} components remain after acceptance",
            sets.components(),
        )));
    }
    Ok(())
}

/// The merge loop may stop before discovering every remaining component,
/// so the reported count can overshoot the planted count but never
/// undershoot it.
fn verify_split_report(fixture: &MergeFixture, reported: usize) -> TestCaseResult {
    if fixture.planted_components < 2 {
        return Err(fixture.failure(format!(
            "connected input rejected as {reported} components",
        )));
    }
    if reported < fixture.planted_components {
        return Err(fixture.failure(format!(
            "report names {reported} components, generator planted {}",
            fixture.planted_components,
        )));
    }
    Ok(())
}

type PoolKey = (usize, usize, u32);

/// Input edges as a multiset keyed on unordered endpoints and weight bits.
fn edge_pool(edges: &[(usize, usize, f32)]) -> HashMap<PoolKey, usize> {
    let mut pool = HashMap::new();
    for &(source, target, weight) in edges {
        *pool.entry(pool_key(source, target, weight)).or_insert(0) += 1;
    }
    pool
}

fn pool_key(a: usize, b: usize, weight: f32) -> PoolKey {
    let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
    (lo, hi, weight.to_bits())
}
