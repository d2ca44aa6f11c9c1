//! Tag lookups

use crate::error::Result;
use crate::repo::Repo;

impl Repo {
    /// Return the tags pointing at `git_ref`.
    ///
    /// Empty output means no tags, not an error.
    pub fn tags_pointed_at(&self, git_ref: &str) -> Result<Vec<String>> {
        let out = self.run(&["tag", "--points-at", git_ref])?;
        let trimmed = out.trim();
        if trimmed.is_empty() {
            return Ok(Vec::new());
        }
        Ok(trimmed.lines().map(|line| line.to_string()).collect())
    }
}
