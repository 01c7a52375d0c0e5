//! netspan core library.
//!
//! Plans the cheapest way to connect a set of devices when each device can
//! either install its own communication module or be wired directly to
//! another device. The problem reduces to a minimum spanning tree over the
//! devices plus one synthetic backbone node, solved with Kruskal's algorithm
//! on a [`DisjointSet`].
//!
//! # Instrumentation
//!
//! Every plan runs inside a `core.plan` span carrying `devices`,
//! `connections`, `indexing` and, on success, `total_cost`. A `debug` event
//! reports how many sorted edges were examined.
//!
//! When the `metrics` feature is enabled each successful plan also emits:
//!
//! - `network_plans_total` (counter)
//! - `network_plan_edges_considered` (histogram)
#![cfg_attr(docsrs, feature(doc_cfg))]

mod error;
mod mst;
mod network;
mod planner;

#[cfg(test)]
pub(crate) mod test_utils;

#[cfg(feature = "cpu")]
pub use crate::planner::min_cost_batch;
pub use crate::{
    error::{NetworkError, NetworkErrorCode, Result},
    mst::{BACKBONE, ConnectionPlan, DisjointSet, Edge, EdgeKind, min_cost, plan_network},
    network::{Connection, DeviceIndexing, NetworkSpec},
    planner::NetworkPlanner,
};
