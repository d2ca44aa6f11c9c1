//! CODEOWNERS lookup

use std::path::{Path, PathBuf};

/// Candidate locations, in priority order.
///
/// Mirrors where GitHub looks for the file:
/// <https://docs.github.com/en/repositories/managing-your-repositorys-settings-and-features/customizing-your-repository/about-code-owners#codeowners-file-location>
const CANDIDATES: [&str; 3] = [".github/CODEOWNERS", "CODEOWNERS", "docs/CODEOWNERS"];

/// Locate the repository's CODEOWNERS file, if any.
#[must_use]
pub fn find_codeowners(repo: &Path) -> Option<PathBuf> {
    CANDIDATES
        .iter()
        .map(|name| repo.join(name))
        .find(|path| path.is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn prefers_the_github_directory() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join(".github")).unwrap();
        fs::write(tmp.path().join(".github/CODEOWNERS"), "a\n").unwrap();
        fs::write(tmp.path().join("CODEOWNERS"), "b\n").unwrap();

        let found = find_codeowners(tmp.path()).unwrap();
        assert!(found.ends_with(".github/CODEOWNERS"));
    }

    #[test]
    fn falls_back_to_root_then_docs() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("docs")).unwrap();
        fs::write(tmp.path().join("docs/CODEOWNERS"), "c\n").unwrap();

        let found = find_codeowners(tmp.path()).unwrap();
        assert!(found.ends_with("docs/CODEOWNERS"));
    }

    #[test]
    fn missing_everywhere() {
        let tmp = TempDir::new().unwrap();
        assert_eq!(find_codeowners(tmp.path()), None);
    }

    #[test]
    fn directories_do_not_count() {
        let tmp = TempDir::new().unwrap();
        fs::create_dir_all(tmp.path().join("CODEOWNERS")).unwrap();
        assert_eq!(find_codeowners(tmp.path()), None);
    }
}
