//! Test-runner output parsing and selection formatting.
//!
//! Each supported runner format knows how to extract candidate test
//! identifiers from the runner's raw output, and how to serialize a
//! selection back into something the runner accepts. The formatter is the
//! inverse of the parser. The set of formats is closed; adding one means
//! adding a variant, not registering at runtime.

pub mod error;
mod gotest;
mod jest;

pub use error::{Error, Result};

use std::io::{BufRead, Write};
use std::path::PathBuf;
use std::str::FromStr;

/// Options shared by all parsers.
#[derive(Debug, Clone, Default)]
pub struct ParserOptions {
    /// Directory test file paths are relativized against
    pub work_dir: PathBuf,
}

/// Supported runner formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunnerKind {
    /// `go test` line-oriented test names
    GoTest,
    /// Jest absolute test file paths
    Jest,
}

impl FromStr for RunnerKind {
    type Err = Error;

    fn from_str(name: &str) -> Result<Self> {
        match name {
            "go-test" => Ok(Self::GoTest),
            "jest" => Ok(Self::Jest),
            _ => Err(Error::UnknownFormat {
                name: name.to_string(),
            }),
        }
    }
}

impl RunnerKind {
    /// Extract candidate test identifiers from raw runner output.
    pub fn parse(self, input: impl BufRead, options: &ParserOptions) -> Result<Vec<String>> {
        match self {
            Self::GoTest => gotest::parse(input),
            Self::Jest => jest::parse(input, options),
        }
    }

    /// Serialize a test selection in this runner's format.
    pub fn format(self, tests: &[String], out: impl Write) -> Result<()> {
        match self {
            Self::GoTest => gotest::format(tests, out),
            Self::Jest => jest::format(tests, out),
        }
    }
}
