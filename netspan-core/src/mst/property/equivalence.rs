//! Property: the planner agrees with the exhaustive oracle.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::min_cost;

use super::oracle::exhaustive_min_cost;
use super::types::NetworkFixture;

/// Checks that the planned total equals the brute-force optimum.
pub(super) fn run_oracle_equivalence_property(fixture: &NetworkFixture) -> TestCaseResult {
    let planned = min_cost(fixture.device_count, &fixture.modules, &fixture.connections)
        .map_err(|err| TestCaseError::fail(format!("planner failed: {err} ({})", fixture.describe())))?;
    let expected = exhaustive_min_cost(fixture.device_count, &fixture.modules, &fixture.connections);

    if planned != expected {
        return Err(TestCaseError::fail(format!(
            "total mismatch: planner={planned}, oracle={expected} (modules={:?}, connections={:?})",
            fixture.modules, fixture.connections,
        )));
    }
    Ok(())
}
