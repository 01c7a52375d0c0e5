//! Error types for the netspan core library.
//!
//! Every error carries a stable machine-readable code so the CLI and log
//! pipelines can match on failures without parsing messages.

use std::fmt;

use thiserror::Error;

/// Generates a code enum for an error type along with `as_str`, `Display`,
/// and a `code()` accessor on the error.
macro_rules! define_error_codes {
    (
        $(#[$enum_meta:meta])*
        enum $CodeTy:ident for $ErrTy:ident {
            $(
                $(#[$variant_meta:meta])*
                $CodeVariant:ident => $ErrVariant:ident $( { $($pattern:tt)* } )? => $code:expr
            ),+ $(,)?
        }
    ) => {
        $(#[$enum_meta])*
        #[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
        #[non_exhaustive]
        pub enum $CodeTy {
            $(
                $(#[$variant_meta])*
                $CodeVariant,
            )+
        }

        impl $CodeTy {
            /// Return the stable machine-readable representation of this code.
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$CodeVariant => $code,)+
                }
            }
        }

        impl fmt::Display for $CodeTy {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl $ErrTy {
            #[doc = concat!(
                "Retrieve the stable [`",
                stringify!($CodeTy),
                "`] for this error."
            )]
            #[must_use]
            pub const fn code(&self) -> $CodeTy {
                match self {
                    $(Self::$ErrVariant $( { $($pattern)* } )? => $CodeTy::$CodeVariant,)+
                }
            }
        }
    };
}

/// Error returned when a network description cannot be planned.
///
/// All variants except [`NetworkError::IncompleteSpanningTree`] are caller
/// mistakes detected before any edge is examined. The incomplete tree variant
/// signals a logic defect and should never surface for validated input.
#[non_exhaustive]
#[derive(Clone, Debug, Eq, Error, PartialEq)]
pub enum NetworkError {
    /// The network has no devices.
    #[error("a network needs at least one device")]
    EmptyNetwork,
    /// The module cost list does not provide one entry per device.
    #[error("expected {expected} module costs (one per device) but got {got}")]
    ModuleCountMismatch {
        /// Number of devices in the network.
        expected: usize,
        /// Number of module costs supplied.
        got: usize,
    },
    /// A connection referenced a device outside the network.
    #[error(
        "connection {connection} references device {device}, which is outside a network of {device_count} devices"
    )]
    InvalidDevice {
        /// Position of the offending connection in the input list.
        connection: usize,
        /// Device id as supplied by the caller.
        device: usize,
        /// Number of devices in the network.
        device_count: usize,
    },
    /// The total cost does not fit in a `u64`.
    #[error("total network cost overflows u64")]
    CostOverflow,
    /// The edge list ran out before every device joined the tree.
    #[error("spanning tree incomplete: accepted {accepted} of {required} edges")]
    IncompleteSpanningTree {
        /// Edges accepted before the list was exhausted.
        accepted: usize,
        /// Edges required to span every device and the backbone.
        required: usize,
    },
}

define_error_codes! {
    /// Stable codes describing [`NetworkError`] variants.
    enum NetworkErrorCode for NetworkError {
        /// The network has no devices.
        EmptyNetwork => EmptyNetwork => "NETWORK_EMPTY",
        /// The module cost list does not provide one entry per device.
        ModuleCountMismatch => ModuleCountMismatch { .. } => "NETWORK_MODULE_COUNT_MISMATCH",
        /// A connection referenced a device outside the network.
        InvalidDevice => InvalidDevice { .. } => "NETWORK_INVALID_DEVICE",
        /// The total cost does not fit in a `u64`.
        CostOverflow => CostOverflow => "NETWORK_COST_OVERFLOW",
        /// The edge list ran out before every device joined the tree.
        IncompleteSpanningTree => IncompleteSpanningTree { .. } => "NETWORK_INCOMPLETE_SPANNING_TREE",
    }
}

impl NetworkError {
    /// Returns `true` when the error reports a caller-side input problem
    /// rather than an internal defect.
    #[must_use]
    pub const fn is_invalid_input(&self) -> bool {
        !matches!(self, Self::IncompleteSpanningTree { .. })
    }
}

/// Convenient alias for results returned by the core API.
pub type Result<T> = core::result::Result<T, NetworkError>;
