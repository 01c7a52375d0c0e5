//! Fixture types for planner property tests.

use crate::network::Connection;

/// Cost profile used when generating a network.
///
/// Each shape pushes the optimum towards a different mix of module
/// installations and links.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(super) enum NetworkShape {
    /// Links are much cheaper than modules, so a single module usually wins.
    CheapLinks,
    /// Modules are cheaper than links, so most devices stand alone.
    CheapModules,
    /// All costs come from a tiny pool, producing many ties.
    ManyTies,
    /// A handful of links over a large device set.
    Sparse,
    /// Nearly every pair of devices is linked.
    Dense,
    /// No links at all.
    Isolated,
}

/// A generated network together with the shape it was drawn from.
#[derive(Clone, Debug)]
pub(super) struct NetworkFixture {
    /// Number of devices.
    pub device_count: usize,
    /// One module cost per device.
    pub modules: Vec<u64>,
    /// Zero-based links.
    pub connections: Vec<Connection>,
    /// Shape used during generation, reported on failure.
    pub shape: NetworkShape,
}

impl NetworkFixture {
    /// Describes the fixture for failure messages.
    pub(super) fn describe(&self) -> String {
        format!(
            "shape={:?}, devices={}, connections={}",
            self.shape,
            self.device_count,
            self.connections.len()
        )
    }
}

/// Which single cost a monotonicity check raises.
#[derive(Clone, Copy, Debug)]
pub(super) enum CostBump {
    /// Raise the module cost of the device at this position (modulo count).
    Module(usize),
    /// Raise the cost of the link at this position (modulo count).
    Link(usize),
}
