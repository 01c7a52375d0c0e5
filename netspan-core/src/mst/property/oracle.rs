//! Exhaustive reference solver for small networks.
//!
//! The oracle never builds the backbone graph. It tries every subset of
//! module installations and every subset of links, keeps the assignments in
//! which each device can reach some installed module, and returns the
//! cheapest. Agreement with the planner therefore checks the backbone
//! modelling as well as the spanning tree loop.

use crate::network::Connection;

/// Returns the minimum total cost by brute force.
///
/// Runs in `O(2^(n + links) * (n + links))`; callers keep both counts small.
pub(super) fn exhaustive_min_cost(
    device_count: usize,
    modules: &[u64],
    connections: &[Connection],
) -> u64 {
    let mut best = u64::MAX;
    for module_mask in 0_u32..(1 << device_count) {
        for link_mask in 0_u32..(1 << connections.len()) {
            if !every_device_reaches_a_module(device_count, connections, module_mask, link_mask) {
                continue;
            }
            let module_cost: u64 = selected(modules.iter().copied(), module_mask).sum();
            let link_cost: u64 = selected(connections.iter().map(Connection::cost), link_mask).sum();
            best = best.min(module_cost + link_cost);
        }
    }
    best
}

fn selected<I: Iterator<Item = u64>>(costs: I, mask: u32) -> impl Iterator<Item = u64> {
    costs
        .enumerate()
        .filter(move |(position, _)| mask & (1 << position) != 0)
        .map(|(_, cost)| cost)
}

fn every_device_reaches_a_module(
    device_count: usize,
    connections: &[Connection],
    module_mask: u32,
    link_mask: u32,
) -> bool {
    let mut parent: Vec<usize> = (0..device_count).collect();
    for (position, link) in connections.iter().enumerate() {
        if link_mask & (1 << position) != 0 {
            let left = find_root(&mut parent, link.a());
            let right = find_root(&mut parent, link.b());
            parent[left] = right;
        }
    }

    let mut served = vec![false; device_count];
    for device in 0..device_count {
        if module_mask & (1 << device) != 0 {
            let root = find_root(&mut parent, device);
            served[root] = true;
        }
    }
    (0..device_count).all(|device| served[find_root(&mut parent, device)])
}

/// Path-halving find over a plain parent array.
pub(super) fn find_root(parent: &mut [usize], mut node: usize) -> usize {
    while parent[node] != node {
        parent[node] = parent[parent[node]];
        node = parent[node];
    }
    node
}
