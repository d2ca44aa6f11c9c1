//! Bundle assembly

use crate::codeowners::find_codeowners;
use crate::env::{EnvMap, RunEnv, collect_run_env};
use crate::error::{Error, Result};
use crate::reports::read_reports;
use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;
use testlab_git::Repo;
use tracing::{debug, info, warn};

/// Name of the git summary artifact inside a bundle.
pub const GIT_SUMMARY_FILE: &str = "git.json";

/// Default cap on the number of report files per bundle.
pub const DEFAULT_MAX_REPORTS: usize = 100;

/// Inputs for one collection run.
#[derive(Debug, Clone)]
pub struct BundleOptions {
    /// Repository working directory
    pub repo: PathBuf,
    /// Directory holding JUnit-style report files
    pub reports: PathBuf,
    /// Maximum number of report files allowed in one bundle
    pub max_reports: usize,
}

impl BundleOptions {
    /// Options for `repo` with the reports directory `reports` and the
    /// default report cap.
    #[must_use]
    pub fn new(repo: impl Into<PathBuf>, reports: impl Into<PathBuf>) -> Self {
        Self {
            repo: repo.into(),
            reports: reports.into(),
            max_reports: DEFAULT_MAX_REPORTS,
        }
    }
}

/// Gathers run metadata and assembles the compressed report bundle.
pub struct Collector {
    options: BundleOptions,
    repo: Repo,
}

impl Collector {
    /// Create a collector for the given options.
    #[must_use]
    pub fn new(options: BundleOptions) -> Self {
        let repo = Repo::new(&options.repo);
        Self { options, repo }
    }

    /// The underlying git repository handle.
    #[must_use]
    pub fn repo(&self) -> &Repo {
        &self.repo
    }

    /// Build the canonical run descriptor from the environment snapshot.
    pub fn env(&self, env: &EnvMap) -> Result<RunEnv> {
        collect_run_env(env, &self.repo)
    }

    /// Assemble and compress the bundle for one run.
    ///
    /// `initial_run` is decided by the remote create-run response, never
    /// locally: only the first upload for a `(runId, group)` pair carries
    /// CODEOWNERS and the git summary. Returns `Ok(None)` when the reports
    /// directory has no files; callers must skip the upload in that case.
    pub fn bundle(&self, initial_run: bool, ref_name: &str) -> Result<Option<Vec<u8>>> {
        let dir = &self.options.reports;
        debug!(dir = %dir.display(), max = self.options.max_reports, "read file reports");

        let mut files = read_reports(dir, self.options.max_reports)?;

        if files.is_empty() {
            warn!(reports = %dir.display(), "no file reports found for bundle");
            return Ok(None);
        }

        if initial_run {
            // The CODEOWNERS file and git summary only go into the initial
            // run, which avoids storing the same information in every bundle.
            self.add_codeowners(&mut files)?;
            self.add_git_summary(&mut files, ref_name)?;
        }

        for (name, content) in &files {
            debug!(name, size = content.len(), "add bundle file");
        }

        let mut raw = Vec::new();
        testlab_archive::pack(&files, &mut raw)?;

        info!(files = files.len(), raw_size = raw.len(), "bundle packed");

        let mut compressed = Vec::new();
        testlab_archive::compress(&raw, &mut compressed)?;

        Ok(Some(compressed))
    }

    /// Copy the repository's CODEOWNERS file into the bundle.
    ///
    /// A missing file is logged, not fatal.
    fn add_codeowners(&self, files: &mut BTreeMap<String, Vec<u8>>) -> Result<()> {
        let repo = &self.options.repo;

        let Some(file) = find_codeowners(repo) else {
            warn!(repo = %repo.display(), "missing CODEOWNERS");
            return Ok(());
        };

        info!(file = %file.display(), "found CODEOWNERS");

        let content = fs::read(&file).map_err(|e| Error::io(e, &file, "read"))?;
        files.insert("CODEOWNERS".to_string(), content);

        Ok(())
    }

    /// Compute and embed the `git.json` summary. Failures here are fatal.
    fn add_git_summary(&self, files: &mut BTreeMap<String, Vec<u8>>, ref_name: &str) -> Result<()> {
        let summary = self.repo.summary(ref_name)?;
        let content = serde_json::to_vec(&summary).map_err(|source| Error::Serialize { source })?;
        files.insert(GIT_SUMMARY_FILE.to_string(), content);
        Ok(())
    }
}
