//! Command-line frontend for the testlab recorder.
//!
//! Wires the collection, packaging, and client crates into two pipelines:
//! `upload`, which registers the CI run and ships the compressed report
//! bundle, and `predict`, which filters candidate tests against the remote
//! prediction service with a run-everything fallback.

pub mod cli;
pub mod config;
pub mod error;
pub mod predict;
pub mod request;
pub mod upload;

pub use cli::{Cli, Commands};
pub use config::Config;
pub use error::{Error, Result};

use std::time::Duration;

/// Deadline for one whole pipeline invocation.
pub const PIPELINE_DEADLINE: Duration = Duration::from_secs(30);
