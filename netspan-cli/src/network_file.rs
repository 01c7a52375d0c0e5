//! Parser for the plain-text network descriptions read by `netspan solve`.
//!
//! A file lists the module cost of every device on one `modules` line and
//! any number of direct links on `link` lines:
//!
//! ```text
//! # three devices in a row
//! modules 1 2 2
//! link 0 1 1
//! link 1 2 1
//! ```
//!
//! Blank lines are skipped and `#` starts a comment that runs to the end of
//! the line. Link endpoints are kept exactly as written; the planner decides
//! whether they are zero- or one-based.

use std::fmt;
use std::io::{self, BufRead};
use std::num::ParseIntError;

use netspan_core::{Connection, NetworkSpec};
use thiserror::Error;

const MODULES: &str = "modules";
const LINK: &str = "link";

/// Errors raised while reading a network description.
///
/// Every variant that refers to file content carries the 1-based line
/// number it was found on.
#[non_exhaustive]
#[derive(Debug, Error)]
pub enum NetworkFileError {
    /// The underlying reader failed.
    #[error("failed to read line {line}: {source}")]
    Read {
        /// Line being read when the failure occurred.
        line: usize,
        /// Underlying I/O error.
        #[source]
        source: io::Error,
    },
    /// A line started with something other than `modules` or `link`.
    #[error("line {line}: unknown directive `{directive}`; expected `modules` or `link`")]
    UnknownDirective {
        /// Offending line.
        line: usize,
        /// The unrecognised first token.
        directive: String,
    },
    /// A `link` line ended before all of its fields were given.
    #[error("line {line}: `link` is missing its {field}")]
    MissingField {
        /// Offending line.
        line: usize,
        /// Name of the absent field.
        field: &'static str,
    },
    /// A `link` line carried more than three values.
    #[error("line {line}: unexpected `{token}` after link cost")]
    TrailingToken {
        /// Offending line.
        line: usize,
        /// The first unexpected token.
        token: String,
    },
    /// A value was not a non-negative integer.
    #[error("line {line}: invalid {field} `{token}`: {source}")]
    InvalidNumber {
        /// Offending line.
        line: usize,
        /// Name of the field being parsed.
        field: &'static str,
        /// Raw token.
        token: String,
        /// Underlying parse failure.
        #[source]
        source: ParseIntError,
    },
    /// A second `modules` line was found.
    #[error("line {line}: `modules` already given on line {first}")]
    DuplicateModules {
        /// Offending line.
        line: usize,
        /// Line holding the first `modules` directive.
        first: usize,
    },
    /// The file never listed module costs.
    #[error("no `modules` line found")]
    MissingModules,
}

/// Stable codes describing [`NetworkFileError`] variants.
#[derive(Clone, Copy, Debug, Eq, Hash, PartialEq)]
#[non_exhaustive]
pub enum NetworkFileErrorCode {
    /// The underlying reader failed.
    Read,
    /// A line started with an unknown directive.
    UnknownDirective,
    /// A `link` line was incomplete.
    MissingField,
    /// A `link` line carried extra values.
    TrailingToken,
    /// A value was not a non-negative integer.
    InvalidNumber,
    /// `modules` appeared more than once.
    DuplicateModules,
    /// `modules` never appeared.
    MissingModules,
}

impl NetworkFileErrorCode {
    /// Return the stable machine-readable representation of this code.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Read => "NETWORK_FILE_READ",
            Self::UnknownDirective => "NETWORK_FILE_UNKNOWN_DIRECTIVE",
            Self::MissingField => "NETWORK_FILE_MISSING_FIELD",
            Self::TrailingToken => "NETWORK_FILE_TRAILING_TOKEN",
            Self::InvalidNumber => "NETWORK_FILE_INVALID_NUMBER",
            Self::DuplicateModules => "NETWORK_FILE_DUPLICATE_MODULES",
            Self::MissingModules => "NETWORK_FILE_MISSING_MODULES",
        }
    }
}

impl fmt::Display for NetworkFileErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl NetworkFileError {
    /// Retrieve the stable [`NetworkFileErrorCode`] for this error.
    #[must_use]
    pub const fn code(&self) -> NetworkFileErrorCode {
        match self {
            Self::Read { .. } => NetworkFileErrorCode::Read,
            Self::UnknownDirective { .. } => NetworkFileErrorCode::UnknownDirective,
            Self::MissingField { .. } => NetworkFileErrorCode::MissingField,
            Self::TrailingToken { .. } => NetworkFileErrorCode::TrailingToken,
            Self::InvalidNumber { .. } => NetworkFileErrorCode::InvalidNumber,
            Self::DuplicateModules { .. } => NetworkFileErrorCode::DuplicateModules,
            Self::MissingModules => NetworkFileErrorCode::MissingModules,
        }
    }

    /// Returns the 1-based line the error refers to, if any.
    #[must_use]
    pub const fn line(&self) -> Option<usize> {
        match self {
            Self::Read { line, .. }
            | Self::UnknownDirective { line, .. }
            | Self::MissingField { line, .. }
            | Self::TrailingToken { line, .. }
            | Self::InvalidNumber { line, .. }
            | Self::DuplicateModules { line, .. } => Some(*line),
            Self::MissingModules => None,
        }
    }
}

/// Reads a network description from `reader`.
///
/// The device count is the number of values on the `modules` line. An empty
/// `modules` line yields a network with no devices, which the planner
/// rejects.
///
/// # Errors
/// Returns [`NetworkFileError`] when the reader fails or the text does not
/// follow the format described in the module documentation.
///
/// # Examples
/// ```
/// use netspan_cli::network_file::parse_network;
///
/// let text = "modules 10 10\nlink 0 1 3 # cheap cable\n";
/// let spec = parse_network(text.as_bytes())?;
/// assert_eq!(spec.device_count(), 2);
/// assert_eq!(spec.modules(), &[10, 10]);
/// assert_eq!(spec.connections()[0].cost(), 3);
/// # Ok::<(), netspan_cli::network_file::NetworkFileError>(())
/// ```
pub fn parse_network<R: BufRead>(reader: R) -> Result<NetworkSpec, NetworkFileError> {
    let mut modules: Option<(usize, Vec<u64>)> = None;
    let mut connections = Vec::new();

    for (index, text) in reader.lines().enumerate() {
        let line = index + 1;
        let text = text.map_err(|source| NetworkFileError::Read { line, source })?;
        let content = text.split_once('#').map_or(text.as_str(), |(head, _)| head);
        let mut tokens = content.split_whitespace();
        let Some(directive) = tokens.next() else {
            continue;
        };

        match directive {
            MODULES => {
                if let Some((first, _)) = modules {
                    return Err(NetworkFileError::DuplicateModules { line, first });
                }
                let costs = tokens
                    .map(|token| parse_number(token, line, "module cost"))
                    .collect::<Result<Vec<u64>, _>>()?;
                modules = Some((line, costs));
            }
            LINK => connections.push(parse_link(tokens, line)?),
            other => {
                return Err(NetworkFileError::UnknownDirective {
                    line,
                    directive: other.to_owned(),
                });
            }
        }
    }

    let (_, modules) = modules.ok_or(NetworkFileError::MissingModules)?;
    Ok(NetworkSpec::from_modules(modules, connections))
}

fn parse_link<'a>(
    mut tokens: impl Iterator<Item = &'a str>,
    line: usize,
) -> Result<Connection, NetworkFileError> {
    let mut next = |field: &'static str| {
        tokens
            .next()
            .ok_or(NetworkFileError::MissingField { line, field })
    };
    let a = parse_number(next("first device")?, line, "first device")?;
    let b = parse_number(next("second device")?, line, "second device")?;
    let cost = parse_number(next("cost")?, line, "link cost")?;
    if let Some(token) = tokens.next() {
        return Err(NetworkFileError::TrailingToken {
            line,
            token: token.to_owned(),
        });
    }
    Ok(Connection::new(a, b, cost))
}

fn parse_number<T>(token: &str, line: usize, field: &'static str) -> Result<T, NetworkFileError>
where
    T: std::str::FromStr<Err = ParseIntError>,
{
    token
        .parse()
        .map_err(|source| NetworkFileError::InvalidNumber {
            line,
            field,
            token: token.to_owned(),
            source,
        })
}
