//! Commit metadata lookups

use crate::error::Result;
use crate::repo::Repo;

/// Author email and subject of a single commit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CommitInfo {
    /// Author email (`%ae`)
    pub author_email: String,
    /// Subject line (`%s`)
    pub subject: String,
}

impl Repo {
    /// Return author email and subject of the most recent commit at `git_ref`.
    ///
    /// Uses a tab-delimited format string so subjects containing spaces parse
    /// unambiguously. Empty output yields `None`, not an error.
    pub fn commit_info(&self, git_ref: &str) -> Result<Option<CommitInfo>> {
        let out = self.run(&["log", "-1", "--format=%ae%x09%s", git_ref])?;
        let line = out.trim();
        if line.is_empty() {
            return Ok(None);
        }

        let (author_email, subject) = line.split_once('\t').unwrap_or((line, ""));

        Ok(Some(CommitInfo {
            author_email: author_email.to_string(),
            subject: subject.to_string(),
        }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn subject_with_tabs_splits_once() {
        let line = "user1@org\tfix: keep\tliteral tab";
        let (email, subject) = line.split_once('\t').unwrap();
        assert_eq!(email, "user1@org");
        assert_eq!(subject, "fix: keep\tliteral tab");
    }
}
