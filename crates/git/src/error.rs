//! Error types for git operations

use miette::Diagnostic;
use thiserror::Error;

/// Error type for git signal extraction
#[derive(Error, Debug, Diagnostic)]
pub enum Error {
    /// The git subprocess exited with a non-zero status
    #[error("git {args:?} failed: {stderr}")]
    #[diagnostic(
        code(testlab::git::exec),
        help("Ensure the directory is a git repository and git is installed")
    )]
    Exec {
        /// Arguments passed to git
        args: Vec<String>,
        /// Captured stderr of the subprocess
        stderr: String,
    },

    /// The git subprocess could not be spawned
    #[error("failed to run git {args:?}")]
    #[diagnostic(code(testlab::git::spawn))]
    Spawn {
        /// Arguments passed to git
        args: Vec<String>,
        /// The underlying I/O error
        #[source]
        source: std::io::Error,
    },

    /// Git produced output that could not be parsed
    #[error("failed to parse git output: {message}")]
    #[diagnostic(code(testlab::git::parse))]
    Parse {
        /// Description of the malformed output
        message: String,
    },

    /// Neither origin/main nor origin/master exists
    #[error("cannot find main branch in git remote output: {output:?}")]
    #[diagnostic(
        code(testlab::git::main_branch),
        help("The repository needs an origin remote with a main or master branch")
    )]
    NoMainBranch {
        /// The raw `git branch -r` output
        output: String,
    },

    /// Both diff strategies produced an empty result
    #[error("cannot get any diff stat for ref {git_ref:?}")]
    #[diagnostic(code(testlab::git::empty_diff))]
    EmptyDiff {
        /// The ref that was diffed
        git_ref: String,
    },
}

impl Error {
    /// Create a parse error
    #[must_use]
    pub fn parse(message: impl Into<String>) -> Self {
        Self::Parse {
            message: message.into(),
        }
    }
}

/// Result type for git operations
pub type Result<T> = std::result::Result<T, Error>;
