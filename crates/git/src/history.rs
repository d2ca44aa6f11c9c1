//! Commit history parsing (`git log --name-only`)

use crate::error::{Error, Result};
use crate::repo::Repo;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// One historical commit and the file names it touched.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CommitFile {
    /// Full commit hash
    pub hash: String,
    /// Commit date (`%cs`)
    pub committed: Option<NaiveDate>,
    /// File names touched by the commit
    pub names: Vec<String>,
}

impl Repo {
    /// List the commits of the lookback window together with their file names.
    pub fn commit_files(&self) -> Result<Vec<CommitFile>> {
        let since = format!("--since={}days", self.max_days());
        let out = self.run(&[
            "log",
            &since,
            "--name-only",
            "--pretty=format:commit %H %cs",
        ])?;
        parse_commit_files(&out)
    }
}

/// Parse `git log --name-only` output into commit records.
///
/// A line starting with `commit ` begins a new record; any other non-blank
/// line is a file name belonging to the current record. The final record is
/// flushed at end of stream.
pub fn parse_commit_files(input: &str) -> Result<Vec<CommitFile>> {
    let mut result = Vec::new();
    let mut cur = CommitFile::default();
    let mut in_commit = false;

    for line in input.lines() {
        let line = line.trim();

        if let Some(header) = line.strip_prefix("commit ") {
            if in_commit {
                result.push(std::mem::take(&mut cur));
            }

            let mut fields = header.split_whitespace();
            cur.hash = fields
                .next()
                .ok_or_else(|| Error::parse(format!("invalid commit header: {line:?}")))?
                .to_string();

            let date = fields
                .next()
                .ok_or_else(|| Error::parse(format!("invalid commit header: {line:?}")))?;
            let committed = NaiveDate::parse_from_str(date, "%Y-%m-%d")
                .map_err(|_| Error::parse(format!("invalid date format: {date}")))?;
            cur.committed = Some(committed);
            in_commit = true;
        } else if !line.is_empty() {
            cur.names.push(line.to_string());
        }
    }

    if in_commit {
        result.push(cur);
    }

    Ok(result)
}
