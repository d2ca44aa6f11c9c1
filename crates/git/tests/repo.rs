//! End-to-end tests against real temporary git repositories.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;
use tempfile::TempDir;
use testlab_git::Repo;

fn git(dir: &Path, args: &[&str]) {
    let out = Command::new("git")
        .arg("-C")
        .arg(dir)
        .args(args)
        .output()
        .expect("run git");
    assert!(
        out.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&out.stderr)
    );
}

fn configure_user(dir: &Path) {
    git(dir, &["config", "user.email", "user1@org"]);
    git(dir, &["config", "user.name", "User One"]);
}

/// Create an upstream repository with one commit on main, then clone it so
/// the clone has `origin/main`. Returns the clone's path.
fn clone_with_origin(root: &Path) -> PathBuf {
    let upstream = root.join("upstream");
    fs::create_dir_all(upstream.join(".github")).unwrap();
    git(&upstream, &["init", "--initial-branch=main"]);
    configure_user(&upstream);

    fs::write(upstream.join(".github/CODEOWNERS"), "* @org/team\n").unwrap();
    git(&upstream, &["add", "-A"]);
    git(&upstream, &["commit", "-m", "add codeowners"]);

    git(root, &["clone", "upstream", "repo"]);
    let work = root.join("repo");
    configure_user(&work);
    work
}

#[test]
fn tags_pointed_at_head() {
    let tmp = TempDir::new().unwrap();
    let work = clone_with_origin(tmp.path());

    let repo = Repo::new(&work);
    assert_eq!(repo.tags_pointed_at("HEAD").unwrap(), Vec::<String>::new());

    git(&work, &["tag", "1.0.2"]);
    git(&work, &["tag", "2.my-feature.3"]);

    let mut tags = repo.tags_pointed_at("HEAD").unwrap();
    tags.sort();
    assert_eq!(tags, vec!["1.0.2".to_string(), "2.my-feature.3".to_string()]);
}

#[test]
fn commit_info_for_head() {
    let tmp = TempDir::new().unwrap();
    let work = clone_with_origin(tmp.path());

    let repo = Repo::new(&work);
    let info = repo.commit_info("HEAD").unwrap().expect("commit info");
    assert_eq!(info.author_email, "user1@org");
    assert_eq!(info.subject, "add codeowners");
}

#[test]
fn main_branch_is_cached_origin_main() {
    let tmp = TempDir::new().unwrap();
    let work = clone_with_origin(tmp.path());

    let repo = Repo::new(&work);
    assert_eq!(repo.main_branch().unwrap(), "origin/main");
    // Cached second lookup.
    assert_eq!(repo.main_branch().unwrap(), "origin/main");
}

#[test]
fn main_branch_missing_is_fatal() {
    let tmp = TempDir::new().unwrap();
    let dir = tmp.path().join("lonely");
    fs::create_dir_all(&dir).unwrap();
    git(&dir, &["init", "--initial-branch=trunk"]);

    let repo = Repo::new(&dir);
    let err = repo.main_branch().unwrap_err();
    assert!(err.to_string().contains("cannot find main branch"));
}

#[test]
fn diff_stat_on_feature_branch() {
    let tmp = TempDir::new().unwrap();
    let work = clone_with_origin(tmp.path());

    git(&work, &["checkout", "-b", "feature-1"]);
    fs::write(work.join("feature.rs"), "fn main() {}\n").unwrap();
    git(&work, &["add", "-A"]);
    git(&work, &["commit", "-m", "add feature"]);

    let repo = Repo::new(&work);
    let stat = repo.diff_stat("HEAD").unwrap();

    assert_eq!(stat.files, 1);
    assert_eq!(stat.changes.len(), 1);
    assert_eq!(stat.changes[0].name, "feature.rs");
    assert!(stat.insertions > 0);
}

#[test]
fn diff_stat_falls_back_to_show_for_merged_ref() {
    let tmp = TempDir::new().unwrap();
    let work = clone_with_origin(tmp.path());

    // HEAD equals origin/main, so the merge-base diff is empty and the
    // fallback to `git show` must return the commit's own changes.
    let repo = Repo::new(&work);
    let stat = repo.diff_stat("HEAD").unwrap();

    assert!(!stat.commit.is_empty());
    assert_eq!(stat.files, 1);
    assert_eq!(stat.changes[0].name, ".github/CODEOWNERS");
}

#[test]
fn commit_files_for_recent_history() {
    let tmp = TempDir::new().unwrap();
    let work = clone_with_origin(tmp.path());

    let repo = Repo::new(&work);
    let commits = repo.commit_files().unwrap();

    assert_eq!(commits.len(), 1);
    assert!(!commits[0].hash.is_empty());
    assert!(commits[0].committed.is_some());
    assert_eq!(commits[0].names, vec![".github/CODEOWNERS".to_string()]);
}

#[test]
fn summary_includes_history_on_main_only() {
    let tmp = TempDir::new().unwrap();
    let work = clone_with_origin(tmp.path());

    let repo = Repo::new(&work);

    let on_main = repo.summary("main").unwrap();
    assert!(on_main.diff_stat.is_some());
    assert_eq!(on_main.commit_files.len(), 1);

    let on_feature = repo.summary("feature-branch-1").unwrap();
    assert!(on_feature.diff_stat.is_some());
    assert!(on_feature.commit_files.is_empty());
}
