//! Run environment collection from CI provider variables

use crate::error::{Error, Result};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use testlab_git::Repo;

/// Snapshot of the process environment, captured once by the entry point.
pub type EnvMap = BTreeMap<String, String>;

/// Required partition key for parallel jobs within one CI run.
pub const GROUP_VAR: &str = "TESTLAB_GROUP";

/// Supported CI providers. A closed set, extensible by adding a variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CiProvider {
    /// GitHub Actions
    Github,
}

impl CiProvider {
    /// The provider name as it appears on the wire.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Github => "github",
        }
    }
}

/// Canonical description of one CI run.
///
/// Constructed once per invocation from the environment snapshot plus git
/// queries; immutable thereafter and never persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RunEnv {
    /// User or system that triggered the run
    pub actor_name: String,
    /// CI provider identifier
    pub ci_provider_name: CiProvider,
    /// Full git ref (e.g. `refs/heads/feature-1`)
    pub git_ref: String,
    /// Short ref name (e.g. `feature-1`)
    pub git_ref_name: String,
    /// Repository identifier (e.g. `octocat/Hello-World`)
    pub git_repo: String,
    /// Commit SHA the run is for
    pub git_sha: String,
    /// Caller-supplied partition key
    pub group: String,
    /// Attempt number of this run
    pub run_attempt: u64,
    /// Provider run identifier
    pub run_id: u64,
    /// Provider run number
    pub run_number: u64,
    /// Provider-specific extras and git attributes
    pub ci_env: BTreeMap<String, serde_json::Value>,
}

/// GitHub variables copied verbatim into `ci_env` when present.
const GITHUB_EXTRA_VARS: [&str; 4] = [
    "GITHUB_BASE_REF",
    "GITHUB_HEAD_REF",
    "GITHUB_JOB",
    "GITHUB_REF_TYPE",
];

/// Build a [`RunEnv`] from the environment snapshot and the repository.
///
/// `TESTLAB_GROUP` must be present and non-empty; numeric provider fields
/// must parse; an environment matching no supported provider is fatal.
pub fn collect_run_env(env: &EnvMap, repo: &Repo) -> Result<RunEnv> {
    let group = env
        .get(GROUP_VAR)
        .filter(|v| !v.is_empty())
        .ok_or_else(|| Error::missing_env(GROUP_VAR))?;

    let tags = repo.tags_pointed_at("HEAD")?;
    let info = repo.commit_info("HEAD")?;

    if env.get("GITHUB_ACTIONS").is_some_and(|v| !v.is_empty()) {
        let mut ci_env = BTreeMap::new();

        for key in GITHUB_EXTRA_VARS {
            if let Some(val) = env.get(key).filter(|v| !v.is_empty()) {
                ci_env.insert(key.to_string(), val.clone().into());
            }
        }

        if !tags.is_empty() {
            ci_env.insert("GIT_TAGS_POINTED_AT".into(), tags.join(";").into());
        }

        if let Some(info) = info {
            ci_env.insert("GIT_COMMIT_AUTHOR_EMAIL".into(), info.author_email.into());
            ci_env.insert("GIT_COMMIT_SUBJECT".into(), info.subject.into());
        }

        return Ok(RunEnv {
            actor_name: get(env, "GITHUB_ACTOR"),
            ci_provider_name: CiProvider::Github,
            git_ref: get(env, "GITHUB_REF"),
            git_ref_name: get(env, "GITHUB_REF_NAME"),
            git_repo: get(env, "GITHUB_REPOSITORY"),
            git_sha: get(env, "GITHUB_SHA"),
            group: group.clone(),
            run_attempt: parse_int(env, "GITHUB_RUN_ATTEMPT")?,
            run_id: parse_int(env, "GITHUB_RUN_ID")?,
            run_number: parse_int(env, "GITHUB_RUN_NUMBER")?,
            ci_env,
        });
    }

    Err(Error::UnknownProvider)
}

fn get(env: &EnvMap, key: &str) -> String {
    env.get(key).cloned().unwrap_or_default()
}

/// Parse an integer variable; absence and malformed values are both fatal
/// and reported with the offending key.
fn parse_int(env: &EnvMap, key: &str) -> Result<u64> {
    let value = get(env, key);
    value
        .parse()
        .map_err(|_| Error::invalid_env(key, value.clone()))
}
