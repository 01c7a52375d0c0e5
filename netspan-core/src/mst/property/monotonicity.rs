//! Property: raising a single cost never lowers the total.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::min_cost;
use crate::network::Connection;

use super::types::{CostBump, NetworkFixture};

/// Raises one module or link cost by `delta` and compares totals.
///
/// The bump index is reduced modulo the number of candidates; a link bump on
/// a network without links falls back to a module bump.
pub(super) fn run_monotonicity_property(
    fixture: &NetworkFixture,
    bump: CostBump,
    delta: u64,
) -> TestCaseResult {
    let mut modules = fixture.modules.clone();
    let mut connections = fixture.connections.clone();
    match bump {
        CostBump::Link(index) if !connections.is_empty() => {
            let position = index % connections.len();
            let link = connections[position];
            connections[position] = Connection::new(link.a(), link.b(), link.cost() + delta);
        }
        CostBump::Link(index) | CostBump::Module(index) => {
            let position = index % modules.len();
            modules[position] += delta;
        }
    }

    let before = total(fixture, &fixture.modules, &fixture.connections)?;
    let after = total(fixture, &modules, &connections)?;
    if after < before {
        return Err(TestCaseError::fail(format!(
            "raising {bump:?} by {delta} lowered the total from {before} to {after} ({})",
            fixture.describe()
        )));
    }
    if after > before + delta {
        return Err(TestCaseError::fail(format!(
            "raising {bump:?} by {delta} raised the total from {before} to {after} ({})",
            fixture.describe()
        )));
    }
    Ok(())
}

fn total(
    fixture: &NetworkFixture,
    modules: &[u64],
    connections: &[Connection],
) -> Result<u64, TestCaseError> {
    min_cost(fixture.device_count, modules, connections)
        .map_err(|err| TestCaseError::fail(format!("planner failed: {err} ({})", fixture.describe())))
}
