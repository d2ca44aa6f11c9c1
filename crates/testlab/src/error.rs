//! Error types for the command-line frontend

use miette::Diagnostic;
use thiserror::Error;

/// Error type for the CLI
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A required environment variable is missing or empty
    #[error("env var {key} is required")]
    #[diagnostic(code(testlab::cli::missing_env))]
    MissingEnv {
        /// Name of the missing variable
        key: String,
    },

    /// The `--started` value is not a recognized timestamp
    #[error("failed to parse start time {value:?}")]
    #[diagnostic(
        code(testlab::cli::invalid_started),
        help("Pass an RFC 3339 timestamp, e.g. 2024-01-02T15:04:05Z")
    )]
    InvalidStarted {
        /// The raw value
        value: String,
    },

    /// The whole pipeline exceeded its deadline
    #[error("{operation} timed out after {seconds}s")]
    #[diagnostic(code(testlab::cli::deadline))]
    Deadline {
        /// Pipeline that timed out (e.g. "upload")
        operation: String,
        /// Configured deadline
        seconds: u64,
    },

    /// Reading candidate tests from stdin failed
    #[error("failed to read test candidates from stdin")]
    #[diagnostic(code(testlab::cli::stdin))]
    Stdin {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Run collection or bundling failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Collect(#[from] testlab_collect::Error),

    /// Git signal extraction failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Git(#[from] testlab_git::Error),

    /// Runner output parsing or formatting failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Runner(#[from] testlab_runner::Error),

    /// An API call failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Client(#[from] testlab_client::Error),
}

impl Error {
    /// Create a missing-env error
    #[must_use]
    pub fn missing_env(key: impl Into<String>) -> Self {
        Self::MissingEnv { key: key.into() }
    }

    /// Create a deadline error
    #[must_use]
    pub fn deadline(operation: impl Into<String>, seconds: u64) -> Self {
        Self::Deadline {
            operation: operation.into(),
            seconds,
        }
    }
}

/// Result type for CLI operations
pub type Result<T> = std::result::Result<T, Error>;
