//! CI run environment collection and report bundling for testlab.
//!
//! Normalizes CI provider variables into a canonical [`RunEnv`] descriptor
//! and assembles JUnit-style report files, the CODEOWNERS file, and the git
//! summary into a compressed bundle ready for upload.

pub mod codeowners;
pub mod collector;
pub mod env;
pub mod error;
pub mod reports;

pub use collector::{BundleOptions, Collector, DEFAULT_MAX_REPORTS, GIT_SUMMARY_FILE};
pub use env::{CiProvider, EnvMap, RunEnv, collect_run_env};
pub use error::{Error, Result};
