//! Error types for run collection and bundling

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

/// Error type for the collector
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// A required environment variable is missing or empty
    #[error("env var {key} is required")]
    #[diagnostic(code(testlab::collect::missing_env))]
    MissingEnv {
        /// Name of the missing variable
        key: String,
    },

    /// An environment variable holds an unparseable value
    #[error("failed to parse {key}: {value:?}")]
    #[diagnostic(code(testlab::collect::invalid_env))]
    InvalidEnv {
        /// Name of the offending variable
        key: String,
        /// The raw value
        value: String,
    },

    /// The environment does not match any supported CI provider
    #[error("unknown CI provider")]
    #[diagnostic(
        code(testlab::collect::unknown_provider),
        help("Only GitHub Actions is supported; GITHUB_ACTIONS is not set")
    )]
    UnknownProvider,

    /// The reports directory holds more files than allowed
    #[error("too many files ({found} > {limit}) found")]
    #[diagnostic(
        code(testlab::collect::too_many_reports),
        help("Point --reports at the JUnit output directory, not the repository root")
    )]
    TooManyReports {
        /// Number of files encountered
        found: usize,
        /// Configured maximum
        limit: usize,
    },

    /// Filesystem access failed
    #[error("I/O {operation} failed: {}", path.display())]
    #[diagnostic(code(testlab::collect::io))]
    Io {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Path that caused the error
        path: Box<Path>,
        /// Operation that failed (e.g. "read", "walk")
        operation: String,
    },

    /// Serializing the git summary failed
    #[error("failed to serialize git summary")]
    #[diagnostic(code(testlab::collect::serialize))]
    Serialize {
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },

    /// Git signal extraction failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Git(#[from] testlab_git::Error),

    /// Packaging or compression failed
    #[error(transparent)]
    #[diagnostic(transparent)]
    Archive(#[from] testlab_archive::Error),
}

impl Error {
    /// Create a missing-env error
    #[must_use]
    pub fn missing_env(key: impl Into<String>) -> Self {
        Self::MissingEnv { key: key.into() }
    }

    /// Create an invalid-env error
    #[must_use]
    pub fn invalid_env(key: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidEnv {
            key: key.into(),
            value: value.into(),
        }
    }

    /// Create an I/O error with path context
    #[must_use]
    pub fn io(
        source: std::io::Error,
        path: impl AsRef<Path>,
        operation: impl Into<String>,
    ) -> Self {
        Self::Io {
            source,
            path: path.as_ref().into(),
            operation: operation.into(),
        }
    }
}

/// Result type for collector operations
pub type Result<T> = std::result::Result<T, Error>;
