//! Report upload pipeline

use crate::config::Config;
use crate::error::Result;
use crate::request::run_request;
use chrono::{DateTime, Utc};
use std::path::PathBuf;
use testlab_client::{Api, Uploader};
use testlab_collect::{BundleOptions, Collector, EnvMap};
use tracing::info;

/// Inputs for one upload invocation.
#[derive(Debug, Clone)]
pub struct UploadOptions {
    /// Repository working directory
    pub repo: PathBuf,
    /// Directory holding JUnit-style report files
    pub reports: PathBuf,
    /// Maximum number of report files per bundle
    pub max_reports: usize,
    /// Start time of the run, when the caller knows it
    pub started: Option<DateTime<Utc>>,
}

/// Collect the run environment, register the run, and upload the bundle.
///
/// Whether this invocation is the initial run for its `(runId, group)` pair
/// is decided by the create-run response. An empty reports directory skips
/// the upload without failing the CI step.
pub async fn run(config: &Config, env: &EnvMap, options: UploadOptions) -> Result<()> {
    let collector = Collector::new(BundleOptions {
        repo: options.repo,
        reports: options.reports,
        max_reports: options.max_reports,
    });

    let run_env = collector.env(env)?;
    info!(
        repo = run_env.git_repo,
        run_id = run_env.run_id,
        group = run_env.group,
        "collected run environment"
    );

    let api = Api::new(&config.server, &config.api_key)?;
    let uploader = Uploader::new(api);

    let body = run_request(&run_env, options.started);
    let (run, created) = uploader.create_run(&body).await?;
    info!(run_id = run.id, created, "run record ready");

    let Some(bundle) = collector.bundle(created, &run_env.git_ref_name)? else {
        return Ok(());
    };

    uploader.upload_run_file(&run, bundle).await?;

    Ok(())
}
