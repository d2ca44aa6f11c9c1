//! Git change-signal extraction for testlab.
//!
//! Shells out to the `git` executable and parses its plain-text output into
//! structured facts: diff statistics, bounded commit history, tags, and
//! commit metadata. All parsing lives in pure functions so it can be tested
//! against captured fixtures without a git binary.

pub mod commit;
pub mod error;
pub mod history;
pub mod repo;
pub mod stat;
pub mod summary;
mod tag;

pub use commit::CommitInfo;
pub use error::{Error, Result};
pub use history::{CommitFile, parse_commit_files};
pub use repo::Repo;
pub use stat::{DiffStat, FileChange, parse_diff_stat};
pub use summary::GitSummary;
