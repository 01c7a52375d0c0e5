//! Network generators for planner property tests.
//!
//! Large fixtures are drawn from a seeded `SmallRng` so rstest cases can pin
//! a shape and seed. Small fixtures for the exhaustive oracle use proptest
//! strategies directly so failures shrink to minimal networks.

use std::ops::RangeInclusive;

use proptest::collection::vec;
use proptest::prelude::*;
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};

use crate::network::Connection;

use super::types::{CostBump, NetworkFixture, NetworkShape};

/// Largest device count for generated networks.
const MAX_DEVICES: usize = 48;
/// Largest device count for dense networks, which grow quadratically.
const DENSE_MAX_DEVICES: usize = 24;
/// Largest device count the exhaustive oracle can afford.
pub(super) const ORACLE_MAX_DEVICES: usize = 5;
/// Largest link count the exhaustive oracle can afford.
pub(super) const ORACLE_MAX_LINKS: usize = 7;

/// Generates fixtures across every [`NetworkShape`], biased towards ties.
pub(super) fn network_fixture_strategy() -> impl Strategy<Value = NetworkFixture> {
    (shape_strategy(), any::<u64>()).prop_map(|(shape, seed)| {
        let mut rng = SmallRng::seed_from_u64(seed);
        generate_fixture(shape, &mut rng)
    })
}

fn shape_strategy() -> impl Strategy<Value = NetworkShape> {
    prop_oneof![
        2 => Just(NetworkShape::CheapLinks),
        2 => Just(NetworkShape::CheapModules),
        3 => Just(NetworkShape::ManyTies),
        2 => Just(NetworkShape::Sparse),
        2 => Just(NetworkShape::Dense),
        1 => Just(NetworkShape::Isolated),
    ]
}

/// Generates networks small enough for [`super::oracle::exhaustive_min_cost`].
pub(super) fn small_network_strategy() -> impl Strategy<Value = NetworkFixture> {
    (1..=ORACLE_MAX_DEVICES).prop_flat_map(|device_count| {
        let link = (0..device_count, 0..device_count, 0_u64..=20)
            .prop_map(|(a, b, cost)| Connection::new(a, b, cost));
        (
            vec(0_u64..=20, device_count),
            vec(link, 0..=ORACLE_MAX_LINKS),
        )
            .prop_map(move |(modules, connections)| NetworkFixture {
                device_count,
                modules,
                connections,
                shape: NetworkShape::Sparse,
            })
    })
}

/// Generates a fixture together with a single cost to raise and the amount.
pub(super) fn cost_bump_strategy() -> impl Strategy<Value = (NetworkFixture, CostBump, u64)> {
    let bump = prop_oneof![
        any::<usize>().prop_map(CostBump::Module),
        any::<usize>().prop_map(CostBump::Link),
    ];
    (network_fixture_strategy(), bump, 1_u64..=50)
}

/// Generates a fixture for a specific shape.
pub(super) fn generate_fixture(shape: NetworkShape, rng: &mut SmallRng) -> NetworkFixture {
    match shape {
        NetworkShape::CheapLinks => random_graph(rng, shape, 1..=MAX_DEVICES, 50..=100, 1..=10),
        NetworkShape::CheapModules => random_graph(rng, shape, 1..=MAX_DEVICES, 1..=10, 20..=60),
        NetworkShape::ManyTies => generate_ties(rng),
        NetworkShape::Sparse => generate_sparse(rng),
        NetworkShape::Dense => random_graph(rng, shape, 2..=DENSE_MAX_DEVICES, 1..=100, 1..=100),
        NetworkShape::Isolated => {
            let device_count = rng.gen_range(1..=MAX_DEVICES);
            NetworkFixture {
                device_count,
                modules: (0..device_count).map(|_| rng.gen_range(0..=100)).collect(),
                connections: Vec::new(),
                shape,
            }
        }
    }
}

/// Links each unordered pair of devices with a shape-dependent probability.
fn random_graph(
    rng: &mut SmallRng,
    shape: NetworkShape,
    devices: RangeInclusive<usize>,
    module_costs: RangeInclusive<u64>,
    link_costs: RangeInclusive<u64>,
) -> NetworkFixture {
    let device_count = rng.gen_range(devices);
    let probability = match shape {
        NetworkShape::Dense => rng.gen_range(0.7..=0.95),
        _ => rng.gen_range(0.2..=0.5),
    };
    let modules = (0..device_count)
        .map(|_| rng.gen_range(module_costs.clone()))
        .collect();
    let mut connections = Vec::new();
    for a in 0..device_count {
        for b in (a + 1)..device_count {
            if rng.gen_bool(probability) {
                connections.push(Connection::new(a, b, rng.gen_range(link_costs.clone())));
            }
        }
    }
    NetworkFixture {
        device_count,
        modules,
        connections,
        shape,
    }
}

/// Draws every cost from a pool of at most three values.
fn generate_ties(rng: &mut SmallRng) -> NetworkFixture {
    let pool_size = rng.gen_range(1..=3);
    let pool: Vec<u64> = (0..pool_size).map(|_| rng.gen_range(1..=5)).collect();
    let device_count = rng.gen_range(1..=MAX_DEVICES);
    let modules = (0..device_count)
        .map(|_| pool[rng.gen_range(0..pool.len())])
        .collect();
    let mut connections = Vec::new();
    for a in 0..device_count {
        for b in (a + 1)..device_count {
            if rng.gen_bool(0.4) {
                connections.push(Connection::new(a, b, pool[rng.gen_range(0..pool.len())]));
            }
        }
    }
    NetworkFixture {
        device_count,
        modules,
        connections,
        shape: NetworkShape::ManyTies,
    }
}

/// Adds a quarter to a half as many random links as there are devices,
/// including the occasional self-loop and duplicate pair.
fn generate_sparse(rng: &mut SmallRng) -> NetworkFixture {
    let device_count = rng.gen_range(16..=MAX_DEVICES);
    let modules = (0..device_count).map(|_| rng.gen_range(1..=100)).collect();
    let link_count = rng.gen_range(device_count / 4..=device_count / 2);
    let connections = (0..link_count)
        .map(|_| {
            Connection::new(
                rng.gen_range(0..device_count),
                rng.gen_range(0..device_count),
                rng.gen_range(1..=100),
            )
        })
        .collect();
    NetworkFixture {
        device_count,
        modules,
        connections,
        shape: NetworkShape::Sparse,
    }
}
