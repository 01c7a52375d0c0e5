//! Minimum-cost network connection via Kruskal's algorithm.
//!
//! Every device may either install its own communication module or be wired
//! to another device. Both choices become edges of one graph: node `0` is a
//! backbone hub, device `d` is node `d + 1`, installing a module on `d` is
//! the edge `(0, d + 1)` and a direct link between `a` and `b` is the edge
//! `(a + 1, b + 1)`. A minimum spanning tree over those `n + 1` nodes is then
//! exactly the cheapest way to connect every device, and it always has `n`
//! edges.

mod union_find;

use std::cmp::Ordering;

use tracing::{Span, debug, field, instrument};

use crate::error::{NetworkError, Result};
use crate::network::{Connection, DeviceIndexing};

pub use self::union_find::DisjointSet;

/// Forest node standing in for the backbone reached by installing a module.
pub const BACKBONE: usize = 0;

/// What an edge of the planning graph represents.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub enum EdgeKind {
    /// Installing the communication module on a device.
    Module {
        /// Zero-based device index.
        device: usize,
    },
    /// Wiring two devices directly.
    Link {
        /// Zero-based index of the first device.
        left: usize,
        /// Zero-based index of the second device.
        right: usize,
    },
}

/// An edge of the planning graph.
///
/// Edges order by cost and then by the position they were generated in:
/// module edges in device order, followed by links in input order.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Edge {
    source: usize,
    target: usize,
    cost: u64,
    kind: EdgeKind,
    sequence: usize,
}

impl Edge {
    fn module(device: usize, cost: u64, sequence: usize) -> Self {
        Self {
            source: BACKBONE,
            target: device + 1,
            cost,
            kind: EdgeKind::Module { device },
            sequence,
        }
    }

    fn link(left: usize, right: usize, cost: u64, sequence: usize) -> Self {
        Self {
            source: left + 1,
            target: right + 1,
            cost,
            kind: EdgeKind::Link { left, right },
            sequence,
        }
    }

    /// Returns the first forest node id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn source(&self) -> usize { self.source }

    /// Returns the second forest node id.
    #[must_use]
    #[rustfmt::skip]
    pub const fn target(&self) -> usize { self.target }

    /// Returns the edge cost.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> u64 { self.cost }

    /// Returns what the edge represents.
    #[must_use]
    #[rustfmt::skip]
    pub const fn kind(&self) -> EdgeKind { self.kind }

    /// Returns the deterministic tie-break position of the edge.
    #[must_use]
    #[rustfmt::skip]
    pub const fn sequence(&self) -> usize { self.sequence }
}

impl Ord for Edge {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl PartialOrd for Edge {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// The cheapest set of module installations and links connecting a network.
///
/// # Examples
/// ```
/// use netspan_core::{Connection, plan_network};
///
/// let plan = plan_network(
///     3,
///     &[1, 2, 2],
///     &[Connection::new(0, 1, 1), Connection::new(1, 2, 1)],
/// )?;
/// assert_eq!(plan.total_cost(), 3);
/// assert_eq!(plan.installed_modules().collect::<Vec<_>>(), vec![0]);
/// assert_eq!(plan.links().count(), 2);
/// # Ok::<(), netspan_core::NetworkError>(())
/// ```
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ConnectionPlan {
    edges: Vec<Edge>,
    total_cost: u64,
    edges_considered: usize,
}

impl ConnectionPlan {
    /// Returns the minimum total cost.
    #[must_use]
    #[rustfmt::skip]
    pub const fn total_cost(&self) -> u64 { self.total_cost }

    /// Returns the accepted edges in acceptance order.
    #[must_use]
    #[rustfmt::skip]
    pub fn edges(&self) -> &[Edge] { &self.edges }

    /// Returns how many sorted edges were examined before the tree closed.
    #[must_use]
    #[rustfmt::skip]
    pub const fn edges_considered(&self) -> usize { self.edges_considered }

    /// Returns the zero-based devices that install a module.
    pub fn installed_modules(&self) -> impl Iterator<Item = usize> + '_ {
        self.edges.iter().filter_map(|edge| match edge.kind {
            EdgeKind::Module { device } => Some(device),
            EdgeKind::Link { .. } => None,
        })
    }

    /// Returns the chosen links as zero-based `(left, right, cost)` triples.
    pub fn links(&self) -> impl Iterator<Item = (usize, usize, u64)> + '_ {
        self.edges.iter().filter_map(|edge| match edge.kind {
            EdgeKind::Link { left, right } => Some((left, right, edge.cost)),
            EdgeKind::Module { .. } => None,
        })
    }
}

/// Computes the minimum cost to connect `device_count` devices.
///
/// `modules[d]` is the cost of installing a module on device `d`, and each
/// connection names two zero-based devices and the cost of linking them.
///
/// # Errors
/// Returns [`NetworkError`] when `device_count` is zero, when `modules` does
/// not hold exactly one cost per device, when a connection names a device
/// outside `0..device_count`, or when the total overflows `u64`.
///
/// # Examples
/// ```
/// use netspan_core::{Connection, min_cost};
///
/// assert_eq!(min_cost(2, &[10, 10], &[Connection::new(0, 1, 3)])?, 13);
/// assert_eq!(min_cost(1, &[5], &[])?, 5);
/// # Ok::<(), netspan_core::NetworkError>(())
/// ```
pub fn min_cost(device_count: usize, modules: &[u64], connections: &[Connection]) -> Result<u64> {
    plan_network(device_count, modules, connections).map(|plan| plan.total_cost())
}

/// Computes the cheapest connection plan for `device_count` devices.
///
/// See [`min_cost`] for the input contract.
///
/// # Errors
/// Returns the same errors as [`min_cost`].
pub fn plan_network(
    device_count: usize,
    modules: &[u64],
    connections: &[Connection],
) -> Result<ConnectionPlan> {
    plan_with_indexing(device_count, modules, connections, DeviceIndexing::ZeroBased)
}

#[instrument(
    name = "core.plan",
    err,
    skip_all,
    fields(
        devices = device_count,
        connections = connections.len(),
        indexing = indexing.as_str(),
        total_cost = field::Empty,
    ),
)]
pub(crate) fn plan_with_indexing(
    device_count: usize,
    modules: &[u64],
    connections: &[Connection],
    indexing: DeviceIndexing,
) -> Result<ConnectionPlan> {
    validate_shape(device_count, modules)?;
    let mut edges = build_edges(device_count, modules, connections, indexing)?;
    edges.sort_unstable();

    let plan = span_devices(device_count, edges)?;
    Span::current().record("total_cost", plan.total_cost);
    debug!(
        total_cost = plan.total_cost,
        edges_considered = plan.edges_considered,
        modules_installed = plan.installed_modules().count(),
        "spanning tree complete"
    );
    #[cfg(feature = "metrics")]
    record_metrics(&plan);
    Ok(plan)
}

fn validate_shape(device_count: usize, modules: &[u64]) -> Result<()> {
    if device_count == 0 {
        return Err(NetworkError::EmptyNetwork);
    }
    if modules.len() != device_count {
        return Err(NetworkError::ModuleCountMismatch {
            expected: device_count,
            got: modules.len(),
        });
    }
    Ok(())
}

fn device_index(
    device: usize,
    connection: usize,
    device_count: usize,
    indexing: DeviceIndexing,
) -> Result<usize> {
    indexing
        .to_index(device)
        .filter(|&index| index < device_count)
        .ok_or(NetworkError::InvalidDevice {
            connection,
            device,
            device_count,
        })
}

/// Builds the unsorted edge list: one module edge per device followed by one
/// link per connection. Every endpoint is validated before the list is
/// returned.
fn build_edges(
    device_count: usize,
    modules: &[u64],
    connections: &[Connection],
    indexing: DeviceIndexing,
) -> Result<Vec<Edge>> {
    let mut edges = Vec::with_capacity(modules.len() + connections.len());
    edges.extend(
        modules
            .iter()
            .enumerate()
            .map(|(device, &cost)| Edge::module(device, cost, device)),
    );

    for (position, connection) in connections.iter().enumerate() {
        let left = device_index(connection.a(), position, device_count, indexing)?;
        let right = device_index(connection.b(), position, device_count, indexing)?;
        edges.push(Edge::link(left, right, connection.cost(), edges.len()));
    }
    Ok(edges)
}

/// Greedily accepts sorted edges that join two components until all
/// `device_count + 1` nodes share one tree.
fn span_devices(device_count: usize, sorted: Vec<Edge>) -> Result<ConnectionPlan> {
    let mut forest = DisjointSet::new(device_count + 1);
    let mut accepted = Vec::with_capacity(device_count);
    let mut total_cost = 0_u64;

    for (position, edge) in sorted.into_iter().enumerate() {
        if forest.find(edge.source) == forest.find(edge.target) {
            continue;
        }
        forest.union(edge.source, edge.target);
        total_cost = total_cost
            .checked_add(edge.cost)
            .ok_or(NetworkError::CostOverflow)?;
        accepted.push(edge);

        if accepted.len() == device_count {
            return Ok(ConnectionPlan {
                edges: accepted,
                total_cost,
                edges_considered: position + 1,
            });
        }
    }

    Err(NetworkError::IncompleteSpanningTree {
        accepted: accepted.len(),
        required: device_count,
    })
}

#[cfg(feature = "metrics")]
fn record_metrics(plan: &ConnectionPlan) {
    metrics::counter!("network_plans_total").increment(1);
    metrics::histogram!("network_plan_edges_considered").record(plan.edges_considered as f64);
}
