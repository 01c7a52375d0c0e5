//! Input model for a device network.
//!
//! A network is a count of devices, one module installation cost per device,
//! and any number of direct connections between pairs of devices.

/// How connection endpoints number their devices.
///
/// Module costs are always positional (the first entry belongs to the first
/// device); only connection endpoints are affected by the convention.
///
/// # Examples
/// ```
/// use netspan_core::DeviceIndexing;
///
/// assert_eq!(DeviceIndexing::default(), DeviceIndexing::ZeroBased);
/// assert_eq!(DeviceIndexing::OneBased.to_index(3), Some(2));
/// assert_eq!(DeviceIndexing::OneBased.to_index(0), None);
/// assert_eq!(DeviceIndexing::OneBased.to_external(2), 3);
/// ```
#[derive(Clone, Copy, Debug, Default, Eq, Hash, PartialEq)]
pub enum DeviceIndexing {
    /// Devices are numbered `0..n`.
    #[default]
    ZeroBased,
    /// Devices are numbered `1..=n`.
    OneBased,
}

impl DeviceIndexing {
    /// Converts an external device id into a zero-based position.
    ///
    /// Returns `None` when the id cannot name any device under this
    /// convention (only `0` in one-based numbering). The result is not
    /// range-checked against a device count.
    #[must_use]
    pub const fn to_index(self, device: usize) -> Option<usize> {
        match self {
            Self::ZeroBased => Some(device),
            Self::OneBased => device.checked_sub(1),
        }
    }

    /// Converts a zero-based position back into an external device id.
    #[must_use]
    pub const fn to_external(self, index: usize) -> usize {
        match self {
            Self::ZeroBased => index,
            Self::OneBased => index.saturating_add(1),
        }
    }

    /// Returns the lowercase label used in logs and on the command line.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::ZeroBased => "zero",
            Self::OneBased => "one",
        }
    }
}

/// A direct link between two devices and the cost of wiring it.
///
/// # Examples
/// ```
/// use netspan_core::Connection;
///
/// let link = Connection::from((0, 1, 7));
/// assert_eq!((link.a(), link.b(), link.cost()), (0, 1, 7));
/// assert!(!link.is_self_loop());
/// ```
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
pub struct Connection {
    a: usize,
    b: usize,
    cost: u64,
}

impl Connection {
    /// Creates a connection between devices `a` and `b`.
    #[must_use]
    pub const fn new(a: usize, b: usize, cost: u64) -> Self {
        Self { a, b, cost }
    }

    /// Returns the first endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn a(&self) -> usize { self.a }

    /// Returns the second endpoint as supplied.
    #[must_use]
    #[rustfmt::skip]
    pub const fn b(&self) -> usize { self.b }

    /// Returns the wiring cost.
    #[must_use]
    #[rustfmt::skip]
    pub const fn cost(&self) -> u64 { self.cost }

    /// Returns `true` when both endpoints name the same device.
    #[must_use]
    pub const fn is_self_loop(&self) -> bool {
        self.a == self.b
    }
}

impl From<(usize, usize, u64)> for Connection {
    fn from((a, b, cost): (usize, usize, u64)) -> Self {
        Self::new(a, b, cost)
    }
}

/// An owned network description.
///
/// The constructor does not validate anything; consistency between the
/// device count, the module list and the connection endpoints is checked when
/// the network is planned.
///
/// # Examples
/// ```
/// use netspan_core::{Connection, NetworkSpec};
///
/// let spec = NetworkSpec::new(2, vec![10, 10], vec![Connection::new(0, 1, 3)]);
/// assert_eq!(spec.device_count(), 2);
/// assert_eq!(spec.module_cost_sum(), Some(20));
/// ```
#[derive(Clone, Debug, Default, Eq, PartialEq)]
pub struct NetworkSpec {
    device_count: usize,
    modules: Vec<u64>,
    connections: Vec<Connection>,
}

impl NetworkSpec {
    /// Creates a network description.
    #[must_use]
    pub const fn new(device_count: usize, modules: Vec<u64>, connections: Vec<Connection>) -> Self {
        Self {
            device_count,
            modules,
            connections,
        }
    }

    /// Creates a description whose device count is taken from `modules`.
    #[must_use]
    pub fn from_modules(modules: Vec<u64>, connections: Vec<Connection>) -> Self {
        Self::new(modules.len(), modules, connections)
    }

    /// Returns the declared number of devices.
    #[must_use]
    #[rustfmt::skip]
    pub const fn device_count(&self) -> usize { self.device_count }

    /// Returns the per-device module installation costs.
    #[must_use]
    #[rustfmt::skip]
    pub fn modules(&self) -> &[u64] { &self.modules }

    /// Returns the direct connections.
    #[must_use]
    #[rustfmt::skip]
    pub fn connections(&self) -> &[Connection] { &self.connections }

    /// Returns the cost of installing a module on every device, or `None`
    /// when the sum overflows. This is always an upper bound on the planned
    /// cost.
    #[must_use]
    pub fn module_cost_sum(&self) -> Option<u64> {
        self.modules
            .iter()
            .try_fold(0_u64, |total, &cost| total.checked_add(cost))
    }
}
