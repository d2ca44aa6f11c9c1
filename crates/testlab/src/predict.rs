//! Test prediction pipeline with graceful fallback

use crate::config::Config;
use crate::error::Result;
use crate::request::run_request;
use std::io::{BufRead, Write};
use std::path::PathBuf;
use testlab_client::{Api, PredictRequest};
use testlab_collect::{EnvMap, collect_run_env};
use testlab_git::{GitSummary, Repo};
use testlab_runner::{ParserOptions, RunnerKind};
use tracing::{info, warn};

/// Filter the candidate tests read from `input` and write the selection in
/// the runner's format to `out`.
///
/// Prediction is best-effort: the remote call is skipped entirely when there
/// are no candidates, and any remote failure degrades to formatting the full
/// candidate list so the CI step still runs every test.
pub async fn run(
    config: &Config,
    env: &EnvMap,
    repo_dir: PathBuf,
    runner: RunnerKind,
    input: impl BufRead,
    out: impl Write,
) -> Result<()> {
    let options = ParserOptions {
        work_dir: repo_dir.clone(),
    };
    let candidates = runner.parse(input, &options)?;

    if candidates.is_empty() {
        warn!("no test candidates found on stdin");
        runner.format(&[], out)?;
        return Ok(());
    }

    info!(candidates = candidates.len(), "predicting relevant tests");

    let repo = Repo::new(&repo_dir);
    let run_env = collect_run_env(env, &repo)?;
    let diff_stat = repo.diff_stat("HEAD")?;

    let body = PredictRequest {
        ci_run: run_request(&run_env, None),
        git_summary: GitSummary {
            diff_stat: Some(diff_stat),
            commit_files: Vec::new(),
        },
        test_files: candidates.clone(),
    };

    let api = Api::new(&config.server, &config.api_key)?;
    let selected = match api.predict(&body).await {
        Ok(resp) => {
            info!(selected = resp.test_files.len(), "prediction succeeded");
            resp.test_files
        }
        Err(err) => {
            warn!(error = %err, "prediction failed, running all candidates");
            candidates
        }
    };

    runner.format(&selected, out)?;

    Ok(())
}
