//! Command-line surface

use clap::{Parser, Subcommand};
use std::path::PathBuf;
use testlab_collect::DEFAULT_MAX_REPORTS;

/// Record CI test telemetry and predict relevant tests.
#[derive(Debug, Parser)]
#[command(name = "testlab", version, about)]
pub struct Cli {
    /// Repository working directory
    #[arg(long, global = true, default_value = ".")]
    pub repo: PathBuf,

    /// Enable debug logging
    #[arg(long, global = true, env = "TESTLAB_DEBUG")]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Upload the test reports of this CI run
    Upload {
        /// Directory holding JUnit-style report files
        #[arg(long, default_value = "junit-reports")]
        reports: PathBuf,

        /// Start time of the CI run (RFC 3339)
        #[arg(long)]
        started: Option<String>,

        /// Maximum number of report files per bundle
        #[arg(long, default_value_t = DEFAULT_MAX_REPORTS)]
        max_reports: usize,
    },

    /// Filter candidate tests read from stdin down to the relevant set
    Predict {
        /// Runner output format (go-test, jest)
        #[arg(long)]
        runner: String,
    },
}
