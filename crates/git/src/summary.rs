//! Combined git summary artifact (`git.json`)

use crate::error::Result;
use crate::history::CommitFile;
use crate::repo::Repo;
use crate::stat::DiffStat;
use serde::{Deserialize, Serialize};

/// Persisted combination of a diff summary and optional commit history.
///
/// The commit-file history is only populated for runs on the repository's
/// main branch; feature branches carry the diff alone, which keeps the
/// payload size bounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GitSummary {
    /// Diff of the run's HEAD against the main branch
    pub diff_stat: Option<DiffStat>,
    /// Commit history within the lookback window (main branch runs only)
    pub commit_files: Vec<CommitFile>,
}

impl Repo {
    /// Build the summary for a run whose ref name is `ref_name`.
    pub fn summary(&self, ref_name: &str) -> Result<GitSummary> {
        let diff_stat = self.diff_stat("HEAD")?;

        let main = self.main_branch()?;
        let commit_files = if main.strip_prefix("origin/") == Some(ref_name) {
            self.commit_files()?
        } else {
            Vec::new()
        };

        Ok(GitSummary {
            diff_stat: Some(diff_stat),
            commit_files,
        })
    }
}
