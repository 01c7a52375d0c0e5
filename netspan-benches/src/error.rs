//! Benchmark setup error type.
//!
//! Aggregates the errors that may arise while preparing benchmark networks so
//! that setup functions can propagate failures with `?` instead of using
//! `.expect()`.

use crate::source::SyntheticError;
use netspan_core::NetworkError;

/// Errors that may occur during benchmark setup.
#[derive(Debug, thiserror::Error)]
pub enum BenchSetupError {
    /// Synthetic network generation failed.
    #[error("synthetic network generation failed: {0}")]
    Synthetic(#[from] SyntheticError),
    /// Planning a generated network failed.
    #[error("network planning failed: {0}")]
    Network(#[from] NetworkError),
}
