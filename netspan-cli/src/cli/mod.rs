//! Command-line interface orchestration for netspan.
//!
//! `solve` reads a network description from disk and prints the cheapest
//! way to connect it; `example` solves the built-in three-device network.

mod commands;

pub use commands::{
    Cli, CliError, Command, ExampleCommand, ExecutionSummary, IndexingArg, SolveCommand,
    example_network, render_summary, run_cli,
};

#[cfg(test)]
mod test_helpers;
