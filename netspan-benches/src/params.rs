//! Benchmark parameter types.

use std::fmt;

/// Parameters for a single-network planning benchmark run.
#[derive(Clone, Debug)]
pub struct PlanBenchParams {
    /// Number of devices in the network.
    pub device_count: usize,
    /// Random links generated per device.
    pub links_per_device: usize,
}

impl fmt::Display for PlanBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "n={},k={}", self.device_count, self.links_per_device)
    }
}

/// Parameters for a batch evaluation benchmark run.
#[derive(Clone, Debug)]
pub struct BatchBenchParams {
    /// Number of independent networks in the batch.
    pub networks: usize,
    /// Number of devices in each network.
    pub device_count: usize,
}

impl fmt::Display for BatchBenchParams {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "batch={},n={}", self.networks, self.device_count)
    }
}
