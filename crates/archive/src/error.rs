//! Error types for the archive codec

use miette::Diagnostic;
use thiserror::Error;

/// Error type for packaging and compression
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Tar packaging or extraction failed
    #[error("tar {operation} failed")]
    #[diagnostic(code(testlab::archive::tar))]
    Tar {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Operation that failed (e.g. "append", "extract")
        operation: String,
    },

    /// Zstd compression or decompression failed
    #[error("zstd {operation} failed")]
    #[diagnostic(code(testlab::archive::zstd))]
    Zstd {
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
        /// Operation that failed (e.g. "compress", "decompress")
        operation: String,
    },
}

impl Error {
    /// Create a tar error
    #[must_use]
    pub fn tar(source: std::io::Error, operation: impl Into<String>) -> Self {
        Self::Tar {
            source,
            operation: operation.into(),
        }
    }

    /// Create a zstd error
    #[must_use]
    pub fn zstd(source: std::io::Error, operation: impl Into<String>) -> Self {
        Self::Zstd {
            source,
            operation: operation.into(),
        }
    }
}

/// Result type for archive operations
pub type Result<T> = std::result::Result<T, Error>;
