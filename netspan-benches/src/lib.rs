//! Benchmark support crate for netspan.
//!
//! Provides seeded synthetic networks and parameter types used by the
//! Criterion benchmarks for single-network planning and batch evaluation.

pub mod error;
pub mod params;
pub mod source;
