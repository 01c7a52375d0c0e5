//! Support library for the netspan CLI binary.
//!
//! Re-exports the CLI module, the network file parser and logging setup so
//! doctests and integration tests can exercise the command pipeline without
//! forking a subprocess.

pub mod cli;
pub mod logging;
pub mod network_file;
