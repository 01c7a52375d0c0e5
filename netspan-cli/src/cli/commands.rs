//! Command implementations and argument parsing for the netspan CLI.

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};

use clap::{Args, Parser, Subcommand, ValueEnum};
use netspan_core::{
    Connection, ConnectionPlan, DeviceIndexing, EdgeKind, NetworkError, NetworkPlanner,
    NetworkSpec,
};
use thiserror::Error;
use tracing::{Span, field, info, instrument};

use crate::network_file::{NetworkFileError, parse_network};

const EXAMPLE_NAME: &str = "example";

/// Top-level CLI options parsed by [`clap`].
#[derive(Debug, Parser, Clone)]
#[command(
    name = "netspan",
    about = "Plan the cheapest way to connect a network of devices."
)]
pub struct Cli {
    /// Command to execute.
    #[command(subcommand)]
    pub command: Command,
}

/// Supported CLI commands.
#[derive(Debug, Subcommand, Clone)]
pub enum Command {
    /// Solve a network described in a text file.
    Solve(SolveCommand),
    /// Solve the built-in three-device example network.
    Example(ExampleCommand),
}

/// Options accepted by the `solve` command.
#[derive(Debug, Args, Clone)]
pub struct SolveCommand {
    /// Path to the network description.
    pub path: PathBuf,

    /// How link endpoints in the file number their devices.
    #[arg(long, value_enum, default_value_t = IndexingArg::Zero)]
    pub indexing: IndexingArg,

    /// Print every module installation and link in the chosen plan.
    #[arg(long)]
    pub plan: bool,
}

/// Options accepted by the `example` command.
#[derive(Debug, Args, Clone)]
pub struct ExampleCommand {
    /// Print every module installation and link in the chosen plan.
    #[arg(long)]
    pub plan: bool,
}

/// Device numbering accepted on the command line.
#[derive(Debug, Clone, Copy, Eq, PartialEq, ValueEnum)]
pub enum IndexingArg {
    /// Devices are numbered from zero.
    Zero,
    /// Devices are numbered from one.
    One,
}

impl From<IndexingArg> for DeviceIndexing {
    fn from(value: IndexingArg) -> Self {
        match value {
            IndexingArg::Zero => Self::ZeroBased,
            IndexingArg::One => Self::OneBased,
        }
    }
}

/// Errors surfaced while executing CLI commands.
///
/// Matches outside this crate need a wildcard arm:
///
/// ```compile_fail
/// use netspan_cli::cli::CliError;
///
/// fn label(err: &CliError) -> &'static str {
///     match err {
///         CliError::Io { .. } => "io",
///         CliError::NetworkFile { .. } => "file",
///         CliError::Core(_) => "core",
///     }
/// }
/// ```
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum CliError {
    /// The network file could not be opened.
    #[error("failed to open `{path}`: {source}")]
    Io {
        /// Path that triggered the failure.
        path: PathBuf,
        /// Underlying operating system error.
        #[source]
        source: io::Error,
    },
    /// The network file was malformed.
    #[error("failed to parse `{path}`: {source}")]
    NetworkFile {
        /// Path of the malformed file.
        path: PathBuf,
        /// Underlying parse failure.
        #[source]
        source: NetworkFileError,
    },
    /// Planning failed.
    #[error(transparent)]
    Core(#[from] NetworkError),
}

impl CliError {
    /// Returns the stable code of the underlying parse or planning error.
    #[must_use]
    pub const fn code(&self) -> Option<&'static str> {
        match self {
            Self::Io { .. } => None,
            Self::NetworkFile { source, .. } => Some(source.code().as_str()),
            Self::Core(core) => Some(core.code().as_str()),
        }
    }
}

/// Summarises the outcome of executing a CLI command.
#[derive(Debug, Clone)]
pub struct ExecutionSummary {
    /// Name of the solved network.
    pub network: String,
    /// Numbering used to report devices.
    pub indexing: DeviceIndexing,
    /// Number of devices in the network.
    pub device_count: usize,
    /// Cheapest connection plan.
    pub plan: ConnectionPlan,
    /// Whether [`render_summary`] lists the individual plan edges.
    pub show_plan: bool,
}

/// Executes the CLI command represented by `cli`.
///
/// # Errors
/// Returns [`CliError`] when reading, parsing or planning fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use netspan_cli::cli::{Cli, Command, IndexingArg, SolveCommand, run_cli};
/// # use tempfile::NamedTempFile;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let file = NamedTempFile::new()?;
/// std::fs::write(file.path(), "modules 10 10\nlink 0 1 3\n")?;
/// let cli = Cli {
///     command: Command::Solve(SolveCommand {
///         path: file.path().to_path_buf(),
///         indexing: IndexingArg::Zero,
///         plan: false,
///     }),
/// };
/// let summary = run_cli(cli)?;
/// assert_eq!(summary.plan.total_cost(), 13);
/// # Ok(())
/// # }
/// ```
#[instrument(
    name = "cli.run",
    err,
    skip(cli),
    fields(command = field::Empty),
)]
pub fn run_cli(cli: Cli) -> Result<ExecutionSummary, CliError> {
    let summary = match cli.command {
        Command::Solve(solve) => {
            Span::current().record("command", field::display("solve"));
            run_solve(solve)?
        }
        Command::Example(example) => {
            Span::current().record("command", field::display("example"));
            run_example(&example)?
        }
    };
    info!(
        network = summary.network.as_str(),
        total_cost = summary.plan.total_cost(),
        "command completed"
    );
    Ok(summary)
}

#[instrument(
    name = "cli.solve",
    err,
    skip(command),
    fields(path = field::Empty, indexing = field::Empty, devices = field::Empty),
)]
pub(super) fn run_solve(command: SolveCommand) -> Result<ExecutionSummary, CliError> {
    let SolveCommand {
        path,
        indexing,
        plan: show_plan,
    } = command;
    let indexing = DeviceIndexing::from(indexing);
    let span = Span::current();
    span.record("path", field::display(path.display()));
    span.record("indexing", indexing.as_str());

    let reader = open_network_file(&path)?;
    let spec = parse_network(reader).map_err(|source| CliError::NetworkFile {
        path: path.clone(),
        source,
    })?;
    span.record("devices", spec.device_count());

    let plan = NetworkPlanner::new().with_indexing(indexing).plan(&spec)?;
    Ok(ExecutionSummary {
        network: derive_network_name(&path),
        indexing,
        device_count: spec.device_count(),
        plan,
        show_plan,
    })
}

#[instrument(name = "cli.example", err, skip(command))]
pub(super) fn run_example(command: &ExampleCommand) -> Result<ExecutionSummary, CliError> {
    let (spec, indexing) = example_network();
    let plan = NetworkPlanner::new().with_indexing(indexing).plan(&spec)?;
    Ok(ExecutionSummary {
        network: EXAMPLE_NAME.to_owned(),
        indexing,
        device_count: spec.device_count(),
        plan,
        show_plan: command.plan,
    })
}

/// Returns the built-in example network and the numbering of its links.
///
/// Three devices with module costs `1, 2, 2`, linked in a row at cost `1`
/// per link; the cheapest plan costs `3`.
#[must_use]
pub fn example_network() -> (NetworkSpec, DeviceIndexing) {
    let spec = NetworkSpec::new(
        3,
        vec![1, 2, 2],
        vec![Connection::new(1, 2, 1), Connection::new(2, 3, 1)],
    );
    (spec, DeviceIndexing::OneBased)
}

#[instrument(name = "cli.open_network_file", err, fields(path = field::Empty))]
pub(super) fn open_network_file(path: &Path) -> Result<BufReader<File>, CliError> {
    Span::current().record("path", field::display(path.display()));
    let file = File::open(path).map_err(|source| CliError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(BufReader::new(file))
}

pub(super) fn derive_network_name(path: &Path) -> String {
    path.file_stem()
        .and_then(|value| value.to_str())
        .map(ToOwned::to_owned)
        .unwrap_or_else(|| "network".to_owned())
}

/// Renders `summary` to `writer` in a human-readable text format.
///
/// With `show_plan` set, each accepted edge follows on its own line as
/// `module<TAB>device<TAB>cost` or `link<TAB>a<TAB>b<TAB>cost`, with devices
/// numbered the way the input numbered them.
///
/// # Errors
/// Returns [`io::Error`] if writing to the supplied writer fails.
///
/// # Examples
/// ```
/// # use std::error::Error;
/// # use std::io::Cursor;
/// # use netspan_cli::cli::{ExecutionSummary, example_network, render_summary};
/// # use netspan_core::NetworkPlanner;
/// #
/// # fn main() -> Result<(), Box<dyn Error>> {
/// let (spec, indexing) = example_network();
/// let plan = NetworkPlanner::new().with_indexing(indexing).plan(&spec)?;
/// let summary = ExecutionSummary {
///     network: "demo".into(),
///     indexing,
///     device_count: spec.device_count(),
///     plan,
///     show_plan: false,
/// };
/// let mut buffer = Cursor::new(Vec::new());
/// render_summary(&summary, &mut buffer)?;
/// assert_eq!(
///     String::from_utf8(buffer.into_inner())?,
///     "network: demo\ndevices: 3\ntotal cost: 3\n"
/// );
/// # Ok(())
/// # }
/// ```
pub fn render_summary(summary: &ExecutionSummary, mut writer: impl Write) -> io::Result<()> {
    writeln!(writer, "network: {}", summary.network)?;
    writeln!(writer, "devices: {}", summary.device_count)?;
    writeln!(writer, "total cost: {}", summary.plan.total_cost())?;
    if !summary.show_plan {
        return Ok(());
    }
    let external = |index| summary.indexing.to_external(index);
    for edge in summary.plan.edges() {
        match edge.kind() {
            EdgeKind::Module { device } => {
                writeln!(writer, "module\t{}\t{}", external(device), edge.cost())?;
            }
            EdgeKind::Link { left, right } => {
                writeln!(
                    writer,
                    "link\t{}\t{}\t{}",
                    external(left),
                    external(right),
                    edge.cost()
                )?;
            }
        }
    }
    Ok(())
}
