//! Subprocess access to a local git repository

use crate::error::{Error, Result};
use std::path::{Path, PathBuf};
use std::process::Command;
use std::sync::OnceLock;
use tracing::debug;

/// Default lookback window for commit history, in days.
pub const DEFAULT_MAX_DAYS: u32 = 60;

/// Remote branches considered as the repository baseline, in priority order.
const MAIN_BRANCHES: [&str; 2] = ["origin/main", "origin/master"];

/// Handle to a local git working directory.
///
/// Every operation shells out to the `git` executable with `-C <dir>` and
/// parses its plain-text stdout. The detected main branch is cached on the
/// instance after the first successful lookup.
pub struct Repo {
    dir: PathBuf,
    max_days: u32,
    main_branch: OnceLock<String>,
}

impl Repo {
    /// Create a repository handle for `dir`.
    #[must_use]
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            max_days: DEFAULT_MAX_DAYS,
            main_branch: OnceLock::new(),
        }
    }

    /// Override the commit history lookback window.
    #[must_use]
    pub fn with_max_days(mut self, days: u32) -> Self {
        self.max_days = days;
        self
    }

    /// Directory this handle operates on.
    #[must_use]
    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Lookback window for [`Repo::commit_files`], in days.
    #[must_use]
    pub fn max_days(&self) -> u32 {
        self.max_days
    }

    /// Whether the directory exists.
    #[must_use]
    pub fn exists(&self) -> bool {
        self.dir.is_dir()
    }

    /// Run `git -C <dir> <args>` and return its stdout.
    ///
    /// A non-zero exit is an error carrying the literal arguments and the
    /// captured stderr.
    pub(crate) fn run(&self, args: &[&str]) -> Result<String> {
        let mut full: Vec<String> = vec!["-C".into(), self.dir.display().to_string()];
        full.extend(args.iter().map(|a| (*a).to_string()));

        debug!(args = ?full, "run git");

        let output = Command::new("git")
            .args(&full)
            .output()
            .map_err(|source| Error::Spawn {
                args: full.clone(),
                source,
            })?;

        if !output.status.success() {
            return Err(Error::Exec {
                args: full,
                stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
            });
        }

        String::from_utf8(output.stdout)
            .map_err(|_| Error::parse(format!("git {args:?} produced non-UTF-8 output")))
    }

    /// Detect the repository's main branch (`origin/main` or `origin/master`).
    ///
    /// The result is cached on the instance. Failing to find either branch is
    /// fatal because the diff and history algorithms need a baseline.
    pub fn main_branch(&self) -> Result<String> {
        if let Some(branch) = self.main_branch.get() {
            return Ok(branch.clone());
        }

        let out = self.run(&["branch", "-r"])?;
        let branch = select_main_branch(&out).ok_or_else(|| Error::NoMainBranch {
            output: out.clone(),
        })?;

        let _ = self.main_branch.set(branch.clone());
        Ok(branch)
    }

    /// Find the merge base between `git_ref` and `main`.
    pub fn merge_base(&self, git_ref: &str, main: &str) -> Result<String> {
        let out = self.run(&["merge-base", git_ref, main])?;
        Ok(out.trim().to_string())
    }
}

/// Pick the first known main branch present in `git branch -r` output.
pub(crate) fn select_main_branch(output: &str) -> Option<String> {
    MAIN_BRANCHES
        .iter()
        .find(|candidate| output.lines().any(|line| line.trim() == **candidate))
        .map(|branch| (*branch).to_string())
}
