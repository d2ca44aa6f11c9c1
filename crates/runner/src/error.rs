//! Error types for runner format handling

use miette::Diagnostic;
use std::path::Path;
use thiserror::Error;

/// Error type for parsing and formatting runner output
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The requested runner format does not exist
    #[error("unknown runner format: {name:?}")]
    #[diagnostic(
        code(testlab::runner::unknown_format),
        help("Supported formats: go-test, jest")
    )]
    UnknownFormat {
        /// The requested format name
        name: String,
    },

    /// Reading the input stream failed
    #[error("failed to read runner output")]
    #[diagnostic(code(testlab::runner::read))]
    Read {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Writing the formatted selection failed
    #[error("failed to write test selection")]
    #[diagnostic(code(testlab::runner::write))]
    Write {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// A reported test file path could not be resolved
    #[error("failed to resolve test file {}", file.display())]
    #[diagnostic(code(testlab::runner::resolve))]
    Resolve {
        /// The path as reported by the runner
        file: Box<Path>,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Serializing the selection failed
    #[error("failed to serialize test selection")]
    #[diagnostic(code(testlab::runner::serialize))]
    Serialize {
        /// The underlying serde error
        #[source]
        source: serde_json::Error,
    },
}

/// Result type for runner operations
pub type Result<T> = std::result::Result<T, Error>;
