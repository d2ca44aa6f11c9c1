//! Diff statistics parsing (`--numstat` / `--shortstat`)

use crate::error::{Error, Result};
use crate::repo::Repo;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Structured summary of a git diff for one ref.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DiffStat {
    /// Commit identifier, when the underlying command reports one
    pub commit: String,
    /// Per-file changes in output order
    pub changes: Vec<FileChange>,
    /// Aggregate changed file count
    pub files: u32,
    /// Aggregate insertion count
    pub insertions: u32,
    /// Aggregate deletion count
    pub deletions: u32,
}

/// Insertions and deletions of a single file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FileChange {
    /// Lines added
    pub insertions: u32,
    /// Lines removed
    pub deletions: u32,
    /// File path relative to the repository root
    pub name: String,
}

impl DiffStat {
    /// Whether the parse produced neither a commit id nor any file counts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commit.is_empty() && self.files == 0
    }
}

impl Repo {
    /// Compute a diff summary for `git_ref` against the main branch.
    ///
    /// Tries `git diff --merge-base <main>` first. Refs that are already part
    /// of the main branch (for example squash-merged tags) produce an empty
    /// diff there, so `git show` of the ref itself is used as a fallback.
    /// Exactly one of the two strategies must yield a non-empty result.
    pub fn diff_stat(&self, git_ref: &str) -> Result<DiffStat> {
        let main = self.main_branch()?;

        let diff = [
            "diff",
            "--merge-base",
            main.as_str(),
            "--numstat",
            "--shortstat",
            git_ref,
        ];
        let show = [
            "show",
            "--format=commit %H",
            "--numstat",
            "--shortstat",
            git_ref,
        ];

        for args in [&diff[..], &show[..]] {
            let out = self.run(args)?;
            let stat = parse_diff_stat(&out)?;

            if stat.is_empty() {
                debug!(?args, "diff stat is empty; trying next strategy");
                continue;
            }

            return Ok(stat);
        }

        Err(Error::EmptyDiff {
            git_ref: git_ref.to_string(),
        })
    }
}

/// Parse combined `--numstat` and `--shortstat` output.
pub fn parse_diff_stat(input: &str) -> Result<DiffStat> {
    let mut stat = DiffStat::default();

    for line in input.lines() {
        if let Some(commit) = line.strip_prefix("commit ") {
            stat.commit = commit.to_string();
        } else if line.contains('\t') {
            let parts: Vec<&str> = line.split('\t').collect();
            if parts.len() != 3 {
                return Err(Error::parse(format!("invalid --numstat line: {line}")));
            }

            let insertions = parse_change_number(parts[0])
                .ok_or_else(|| Error::parse(format!("invalid insertions number: {}", parts[0])))?;
            let deletions = parse_change_number(parts[1])
                .ok_or_else(|| Error::parse(format!("invalid deletions number: {}", parts[1])))?;

            stat.changes.push(FileChange {
                insertions,
                deletions,
                name: parts[2].to_string(),
            });
        } else if line.contains(" changed") {
            parse_shortstat(line, &mut stat)?;
        }
    }

    Ok(stat)
}

/// Extract aggregate counts from a `--shortstat` summary line.
///
/// The count for insertions/deletions is the token immediately preceding the
/// word containing "insert"/"delet".
fn parse_shortstat(line: &str, stat: &mut DiffStat) -> Result<()> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    if tokens.len() < 3 {
        return Err(Error::parse(format!("invalid --shortstat line: {line}")));
    }

    stat.files = tokens[0]
        .parse()
        .map_err(|_| Error::parse(format!("invalid file count: {}", tokens[0])))?;

    for (i, token) in tokens.iter().enumerate() {
        let count = |stat_name: &str| -> Result<u32> {
            tokens[i - 1]
                .parse()
                .map_err(|_| Error::parse(format!("invalid {stat_name} count: {}", tokens[i - 1])))
        };

        if token.contains("insert") {
            stat.insertions = count("insertion")?;
        }
        if token.contains("delet") {
            stat.deletions = count("deletion")?;
        }
    }

    Ok(())
}

/// Parse a single numstat field; `-` denotes a binary file and counts as zero.
fn parse_change_number(field: &str) -> Option<u32> {
    if field == "-" {
        return Some(0);
    }
    field.parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn change(insertions: u32, deletions: u32, name: &str) -> FileChange {
        FileChange {
            insertions,
            deletions,
            name: name.to_string(),
        }
    }

    #[test]
    fn empty_input() {
        let stat = parse_diff_stat("").unwrap();
        assert_eq!(stat, DiffStat::default());
        assert!(stat.is_empty());
    }

    #[test]
    fn changes_with_binary_file() {
        let input = "commit abcdef1234\n\
            1\t1\tfirst/foo.rs\n\
            6\t5\tsecond/bar.rs\n\
            -\t-\tthird/baz.bin\n\
            3 files changed, 7 insertions(+), 6 deletions(-)";

        let stat = parse_diff_stat(input).unwrap();
        assert_eq!(
            stat,
            DiffStat {
                commit: "abcdef1234".into(),
                changes: vec![
                    change(1, 1, "first/foo.rs"),
                    change(6, 5, "second/bar.rs"),
                    change(0, 0, "third/baz.bin"),
                ],
                files: 3,
                insertions: 7,
                deletions: 6,
            }
        );
    }

    #[test]
    fn insertions_only() {
        let input = "commit abcdef1234\n\
            1\t0\tfirst/foo.rs\n\
            -\t-\tthird/baz.bin\n\
            2 files changed, 1 insertions(+)";

        let stat = parse_diff_stat(input).unwrap();
        assert_eq!(stat.files, 2);
        assert_eq!(stat.insertions, 1);
        assert_eq!(stat.deletions, 0);
    }

    #[test]
    fn deletions_only() {
        let input = "commit abcdef1234\n\
            0\t5\tsecond/bar.rs\n\
            -\t-\tthird/baz.bin\n\
            2 files changed, 5 deletions(-)";

        let stat = parse_diff_stat(input).unwrap();
        assert_eq!(stat.files, 2);
        assert_eq!(stat.insertions, 0);
        assert_eq!(stat.deletions, 5);
    }

    #[test]
    fn one_file() {
        let input = "commit abcdef1234\n\
            0\t5\tsecond/bar.rs\n\
            1 file changed, 5 deletions(-)";

        let stat = parse_diff_stat(input).unwrap();
        assert_eq!(
            stat,
            DiffStat {
                commit: "abcdef1234".into(),
                changes: vec![change(0, 5, "second/bar.rs")],
                files: 1,
                insertions: 0,
                deletions: 5,
            }
        );
    }

    #[test]
    fn malformed_numstat_line_is_fatal() {
        let input = "1\tfirst/foo.rs\n";
        let err = parse_diff_stat(input).unwrap_err();
        assert!(err.to_string().contains("invalid --numstat line"));
    }

    #[test]
    fn diff_without_commit_header_is_not_empty() {
        // `git diff` output carries no commit line; file counts alone
        // mark the stat as usable.
        let input = "2\t0\tfoo.rs\n1 file changed, 2 insertions(+)";
        let stat = parse_diff_stat(input).unwrap();
        assert!(stat.commit.is_empty());
        assert!(!stat.is_empty());
    }

    #[test]
    fn serializes_camel_case() {
        let stat = DiffStat {
            commit: "abc".into(),
            changes: vec![change(1, 2, "a.rs")],
            files: 1,
            insertions: 1,
            deletions: 2,
        };
        let json = serde_json::to_value(&stat).unwrap();
        assert_eq!(json["changes"][0]["name"], "a.rs");
        assert_eq!(json["insertions"], 1);
    }
}
