//! Small helpers shared across CLI tests.
//!
//! The CLI unit tests build temporary network files and assert error
//! handling behaviour. These helpers keep the test cases concise.

use std::fs::File;
use std::io::{self, Write};
use std::path::PathBuf;

use tempfile::TempDir;

use super::{Cli, CliError, Command, IndexingArg, SolveCommand, run_cli};

pub(super) fn temp_dir() -> TempDir {
    match TempDir::new() {
        Ok(dir) => dir,
        Err(err) => panic!("failed to create temp dir: {err}"),
    }
}

pub(super) fn create_network_file(
    dir: &TempDir,
    name: &str,
    contents: &str,
) -> io::Result<PathBuf> {
    let path = dir.path().join(name);
    let mut file = File::create(&path)?;
    file.write_all(contents.as_bytes())?;
    Ok(path)
}

pub(super) fn solve_cli(path: PathBuf, indexing: IndexingArg, plan: bool) -> Cli {
    Cli {
        command: Command::Solve(SolveCommand {
            path,
            indexing,
            plan,
        }),
    }
}

pub(super) fn run_cli_expecting_error(cli: Cli, panic_msg: &str) -> CliError {
    match run_cli(cli) {
        Ok(_) => panic!("{panic_msg}"),
        Err(err) => err,
    }
}
