//! Property: every plan is a spanning tree within the module-only bound.
//!
//! For any well-formed network the plan must
//! - contain exactly one edge per device,
//! - connect every device and the backbone without cycles,
//! - report a total equal to the sum of its edges,
//! - cost no more than installing every module,
//! - install at least one module, and
//! - be identical when recomputed.

use proptest::test_runner::{TestCaseError, TestCaseResult};

use crate::mst::{BACKBONE, ConnectionPlan, plan_network};

use super::oracle::find_root;
use super::types::NetworkFixture;

/// Runs every structural check against the fixture's plan.
pub(super) fn run_structural_invariants_property(fixture: &NetworkFixture) -> TestCaseResult {
    let plan = plan_fixture(fixture)?;
    check_edge_count(fixture, &plan)?;
    check_spanning(fixture, &plan)?;
    check_cost_bounds(fixture, &plan)?;

    if plan.installed_modules().next().is_none() {
        return Err(fail(fixture, "plan installs no module"));
    }
    if plan_fixture(fixture)? != plan {
        return Err(fail(fixture, "recomputed plan differs"));
    }
    Ok(())
}

fn plan_fixture(fixture: &NetworkFixture) -> Result<ConnectionPlan, TestCaseError> {
    plan_network(fixture.device_count, &fixture.modules, &fixture.connections)
        .map_err(|err| fail(fixture, &format!("planner failed: {err}")))
}

fn check_edge_count(fixture: &NetworkFixture, plan: &ConnectionPlan) -> TestCaseResult {
    if plan.edges().len() != fixture.device_count {
        return Err(fail(
            fixture,
            &format!("expected {} edges, got {}", fixture.device_count, plan.edges().len()),
        ));
    }
    Ok(())
}

fn check_spanning(fixture: &NetworkFixture, plan: &ConnectionPlan) -> TestCaseResult {
    let mut parent: Vec<usize> = (0..=fixture.device_count).collect();
    for edge in plan.edges() {
        let source = find_root(&mut parent, edge.source());
        let target = find_root(&mut parent, edge.target());
        if source == target {
            return Err(fail(fixture, &format!("edge {edge:?} closes a cycle")));
        }
        parent[source] = target;
    }
    let backbone = find_root(&mut parent, BACKBONE);
    if (1..=fixture.device_count).any(|node| find_root(&mut parent, node) != backbone) {
        return Err(fail(fixture, "plan leaves a device disconnected"));
    }
    Ok(())
}

fn check_cost_bounds(fixture: &NetworkFixture, plan: &ConnectionPlan) -> TestCaseResult {
    let edge_sum: u64 = plan.edges().iter().map(|edge| edge.cost()).sum();
    if edge_sum != plan.total_cost() {
        return Err(fail(
            fixture,
            &format!("edge sum {edge_sum} != reported total {}", plan.total_cost()),
        ));
    }
    let module_sum: u64 = fixture.modules.iter().sum();
    if plan.total_cost() > module_sum {
        return Err(fail(
            fixture,
            &format!("total {} exceeds module-only cost {module_sum}", plan.total_cost()),
        ));
    }
    Ok(())
}

fn fail(fixture: &NetworkFixture, reason: &str) -> TestCaseError {
    TestCaseError::fail(format!("{reason} ({})", fixture.describe()))
}
