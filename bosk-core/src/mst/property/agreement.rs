//! Agreement between the driver and the reference sweep.

use proptest::test_runner::TestCaseResult;

use crate::mst::{MstError, minimum_spanning_tree};

use super::fixtures::MergeFixture;
use super::oracle::reference_forest;

/// On a connected input the driver must match the reference arc count and
/// total weight; on a split input both must reject.
///
/// Totals are compared exactly: the generators only emit `f32` weights
/// below 64 and a tree holds fewer than 64 arcs, so both sums are exact
/// in `f64` whatever order the arcs were accepted in.
pub(super) fn check_reference_agreement(fixture: &MergeFixture) -> TestCaseResult {
    let reference = reference_forest(fixture.vertex_count, &fixture.edges);
    match minimum_spanning_tree(&fixture.graph()) {
        Ok(tree) => {
            if reference.components != 1 {
                return Err(fixture.failure(format!(
                    "driver spanned what the reference splits into {} pieces",
                    reference.components,
                )));
            }
            if tree.len() != reference.arc_count {
                return Err(fixture.failure(format!(
                    "driver accepted {} arcs, reference accepted {}",
                    tree.len(),
                    reference.arc_count,
                )));
            }
            if tree.total_weight() != reference.total_weight {
                return Err(fixture.failure(format!(
                    "driver weight {} differs from reference weight {}",
                    tree.total_weight(),
                    reference.total_weight,
                )));
            }
            Ok(())
        }
        Err(MstError::DisconnectedGraph { .. }) if reference.components > 1 => Ok(()),
        Err(error) => Err(fixture.failure(format!(
            "driver failed with `{error}` on an input the reference leaves in {} piece(s)",
            reference.components,
        ))),
    }
}
