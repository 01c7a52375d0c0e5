//! Synthetic networks for benchmarking.
//!
//! Provides [`SyntheticNetwork`], a seeded generator of [`NetworkSpec`]
//! values with uniformly random module and link costs. Every device gets a
//! fixed number of outgoing links to uniformly chosen peers, so the edge
//! count grows linearly with the device count.

use netspan_core::{Connection, NetworkSpec};
use rand::{Rng, SeedableRng, rngs::SmallRng};

/// Errors that may occur during synthetic network generation.
#[derive(Clone, Debug, thiserror::Error, PartialEq, Eq)]
pub enum SyntheticError {
    /// The requested device count was zero.
    #[error("device count must be greater than zero")]
    ZeroDevices,
    /// The requested maximum cost was zero.
    #[error("maximum cost must be greater than zero")]
    ZeroMaxCost,
}

/// Configuration for synthetic network generation.
#[derive(Clone, Debug)]
pub struct SyntheticConfig {
    /// Number of devices to generate.
    pub device_count: usize,
    /// Links generated per device.
    pub links_per_device: usize,
    /// Largest module or link cost; costs are drawn from `1..=max_cost`.
    pub max_cost: u64,
    /// RNG seed for reproducibility.
    pub seed: u64,
}

/// A seeded random network.
///
/// # Examples
///
/// ```
/// use netspan_benches::source::{SyntheticConfig, SyntheticNetwork};
///
/// let config = SyntheticConfig { device_count: 10, links_per_device: 2, max_cost: 50, seed: 42 };
/// let network = SyntheticNetwork::generate(&config).expect("valid config");
/// assert_eq!(network.spec().device_count(), 10);
/// assert_eq!(network.spec().connections().len(), 20);
/// ```
#[derive(Clone, Debug)]
pub struct SyntheticNetwork {
    spec: NetworkSpec,
}

impl SyntheticNetwork {
    /// Generates a network eagerly from the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`SyntheticError::ZeroDevices`] if `device_count` is zero,
    /// or [`SyntheticError::ZeroMaxCost`] if `max_cost` is zero.
    pub fn generate(config: &SyntheticConfig) -> Result<Self, SyntheticError> {
        if config.device_count == 0 {
            return Err(SyntheticError::ZeroDevices);
        }
        if config.max_cost == 0 {
            return Err(SyntheticError::ZeroMaxCost);
        }

        let mut rng = SmallRng::seed_from_u64(config.seed);
        let modules: Vec<u64> = (0..config.device_count)
            .map(|_| rng.gen_range(1..=config.max_cost))
            .collect();
        let link_count = config.device_count.saturating_mul(config.links_per_device);
        let connections: Vec<Connection> = (0..link_count)
            .map(|position| {
                let device = position
                    .checked_div(config.links_per_device)
                    .unwrap_or_default();
                let peer = rng.gen_range(0..config.device_count);
                Connection::new(device, peer, rng.gen_range(1..=config.max_cost))
            })
            .collect();

        Ok(Self {
            spec: NetworkSpec::from_modules(modules, connections),
        })
    }

    /// Generates `count` networks with consecutive seeds starting at
    /// `config.seed`.
    ///
    /// # Errors
    ///
    /// Returns the same errors as [`Self::generate`].
    pub fn generate_batch(
        config: &SyntheticConfig,
        count: usize,
    ) -> Result<Vec<NetworkSpec>, SyntheticError> {
        (0..count)
            .map(|offset| {
                let seeded = SyntheticConfig {
                    seed: config.seed.wrapping_add(offset as u64),
                    ..config.clone()
                };
                Self::generate(&seeded).map(Self::into_spec)
            })
            .collect()
    }

    /// Returns the generated network description.
    #[must_use]
    pub const fn spec(&self) -> &NetworkSpec {
        &self.spec
    }

    /// Consumes the generator output and returns the network description.
    #[must_use]
    pub fn into_spec(self) -> NetworkSpec {
        self.spec
    }
}
