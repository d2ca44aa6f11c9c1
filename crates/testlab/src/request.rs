//! Conversion from the collected run environment to the wire request

use chrono::{DateTime, Utc};
use testlab_client::CiRunRequest;
use testlab_collect::RunEnv;

/// Build the run-creation request body from the collected environment.
#[must_use]
pub fn run_request(run: &RunEnv, started: Option<DateTime<Utc>>) -> CiRunRequest {
    CiRunRequest {
        actor_name: run.actor_name.clone(),
        ci_provider_name: run.ci_provider_name.as_str().to_string(),
        git_ref: run.git_ref.clone(),
        git_ref_name: run.git_ref_name.clone(),
        git_repo: run.git_repo.clone(),
        git_sha: run.git_sha.clone(),
        group: run.group.clone(),
        run_attempt: run.run_attempt,
        run_id: run.run_id,
        run_number: run.run_number,
        ci_env: run.ci_env.clone(),
        started,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use std::collections::BTreeMap;
    use testlab_collect::CiProvider;

    #[test]
    fn copies_all_run_fields() {
        let mut ci_env = BTreeMap::new();
        ci_env.insert("GITHUB_JOB".to_string(), "build".into());

        let run = RunEnv {
            actor_name: "smvv".into(),
            ci_provider_name: CiProvider::Github,
            git_ref: "refs/heads/feature-1".into(),
            git_ref_name: "feature-1".into(),
            git_repo: "octocat/Hello-World".into(),
            git_sha: "ffac537e".into(),
            group: "e2e".into(),
            run_attempt: 2,
            run_id: 42,
            run_number: 7,
            ci_env,
        };

        let started = Utc.with_ymd_and_hms(2024, 1, 2, 15, 4, 5).unwrap();
        let body = run_request(&run, Some(started));

        assert_eq!(body.ci_provider_name, "github");
        assert_eq!(body.group, "e2e");
        assert_eq!(body.run_attempt, 2);
        assert_eq!(body.ci_env["GITHUB_JOB"], "build");
        assert_eq!(body.started, Some(started));
    }
}
