//! Error types for the API client

use miette::Diagnostic;
use thiserror::Error;

/// Error type for transport and API operations
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// Client configuration is invalid
    #[error("client configuration error: {message}")]
    #[diagnostic(code(testlab::client::config))]
    Config {
        /// Description of the configuration issue
        message: String,
    },

    /// A network-level failure (DNS, connect, timeout)
    #[error("transport error: {message}")]
    #[diagnostic(code(testlab::client::transport))]
    Transport {
        /// Description of the underlying failure
        message: String,
    },

    /// Every retry attempt ended in a server error
    #[error("all retry attempts failed with 5xx status codes")]
    #[diagnostic(
        code(testlab::client::retry_exhausted),
        help("The TestLab service is unavailable; the request was retried with backoff")
    )]
    RetryExhausted {
        /// Number of attempts made
        attempts: u32,
    },

    /// The remote service answered with an unexpected status
    #[error("{operation} returned invalid status code: {status}")]
    #[diagnostic(code(testlab::client::status))]
    UnexpectedStatus {
        /// Operation that failed (e.g. "create run")
        operation: String,
        /// HTTP status code
        status: u16,
    },

    /// The response body could not be decoded
    #[error("failed to decode {operation} response: {message}")]
    #[diagnostic(code(testlab::client::decode))]
    Decode {
        /// Operation whose response was malformed
        operation: String,
        /// Description of the decode failure
        message: String,
    },
}

impl Error {
    /// Create a configuration error
    #[must_use]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create a transport error
    #[must_use]
    pub fn transport(message: impl Into<String>) -> Self {
        Self::Transport {
            message: message.into(),
        }
    }

    /// Create an unexpected-status error
    #[must_use]
    pub fn unexpected_status(operation: impl Into<String>, status: u16) -> Self {
        Self::UnexpectedStatus {
            operation: operation.into(),
            status,
        }
    }

    /// Create a decode error
    #[must_use]
    pub fn decode(operation: impl Into<String>, message: impl Into<String>) -> Self {
        Self::Decode {
            operation: operation.into(),
            message: message.into(),
        }
    }
}

/// Result type for client operations
pub type Result<T> = std::result::Result<T, Error>;
