//! Configurable entry point for planning networks.
//!
//! [`NetworkPlanner`] carries the settings that change how a
//! [`NetworkSpec`] is read. It holds no state between calls, so one planner
//! can be shared freely across threads.

#[cfg(feature = "cpu")]
use rayon::prelude::*;

use crate::error::Result;
use crate::mst::{ConnectionPlan, plan_with_indexing};
use crate::network::{DeviceIndexing, NetworkSpec};

/// Plans minimum-cost networks under a chosen device numbering.
///
/// # Examples
/// ```
/// use netspan_core::{Connection, DeviceIndexing, NetworkPlanner, NetworkSpec};
///
/// // Connection endpoints numbered from one.
/// let spec = NetworkSpec::new(
///     3,
///     vec![1, 2, 2],
///     vec![Connection::new(1, 2, 1), Connection::new(2, 3, 1)],
/// );
/// let planner = NetworkPlanner::new().with_indexing(DeviceIndexing::OneBased);
/// assert_eq!(planner.min_cost(&spec)?, 3);
/// # Ok::<(), netspan_core::NetworkError>(())
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq)]
pub struct NetworkPlanner {
    indexing: DeviceIndexing,
}

impl NetworkPlanner {
    /// Creates a planner that reads connection endpoints as zero-based.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Overrides how connection endpoints are numbered.
    #[must_use]
    pub const fn with_indexing(mut self, indexing: DeviceIndexing) -> Self {
        self.indexing = indexing;
        self
    }

    /// Returns the configured numbering convention.
    #[must_use]
    pub const fn indexing(&self) -> DeviceIndexing {
        self.indexing
    }

    /// Computes the cheapest connection plan for `spec`.
    ///
    /// # Errors
    /// Returns [`crate::NetworkError`] when the description is malformed:
    /// no devices, a module list of the wrong length, or an endpoint that
    /// names no device under the configured numbering.
    pub fn plan(&self, spec: &NetworkSpec) -> Result<ConnectionPlan> {
        plan_with_indexing(
            spec.device_count(),
            spec.modules(),
            spec.connections(),
            self.indexing,
        )
    }

    /// Computes the minimum total cost for `spec`.
    ///
    /// # Errors
    /// Returns the same errors as [`Self::plan`].
    pub fn min_cost(&self, spec: &NetworkSpec) -> Result<u64> {
        self.plan(spec).map(|plan| plan.total_cost())
    }

    /// Computes the minimum cost of many independent networks in parallel.
    ///
    /// Results are returned in input order; one malformed network does not
    /// affect the others.
    ///
    /// # Examples
    /// ```
    /// use netspan_core::{Connection, NetworkPlanner, NetworkSpec};
    ///
    /// let networks = vec![
    ///     NetworkSpec::from_modules(vec![5], vec![]),
    ///     NetworkSpec::from_modules(vec![10, 10], vec![Connection::new(0, 1, 3)]),
    ///     NetworkSpec::new(0, vec![], vec![]),
    /// ];
    /// let costs = NetworkPlanner::new().min_cost_batch(&networks);
    /// assert_eq!(costs[0], Ok(5));
    /// assert_eq!(costs[1], Ok(13));
    /// assert!(costs[2].is_err());
    /// ```
    #[cfg(feature = "cpu")]
    #[cfg_attr(docsrs, doc(cfg(feature = "cpu")))]
    #[must_use]
    #[tracing::instrument(name = "core.min_cost_batch", skip_all, fields(networks = networks.len()))]
    pub fn min_cost_batch(&self, networks: &[NetworkSpec]) -> Vec<Result<u64>> {
        networks
            .par_iter()
            .map(|spec| self.min_cost(spec))
            .collect()
    }
}

/// Computes the minimum cost of many zero-based networks in parallel.
///
/// Shorthand for [`NetworkPlanner::min_cost_batch`] on a default planner.
#[cfg(feature = "cpu")]
#[cfg_attr(docsrs, doc(cfg(feature = "cpu")))]
#[must_use]
pub fn min_cost_batch(networks: &[NetworkSpec]) -> Vec<Result<u64>> {
    NetworkPlanner::new().min_cost_batch(networks)
}
