use std::path::Path;
use std::process::Command;

use tempfile::TempDir;

use crate::GuardError;

use super::*;

fn git(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

fn create_git_repo() -> TempDir {
    let dir = TempDir::new().unwrap();
    git(dir.path(), &["init"]);
    git(dir.path(), &["config", "user.email", "test@test.com"]);
    git(dir.path(), &["config", "user.name", "Test User"]);
    git(dir.path(), &["config", "commit.gpgsign", "false"]);
    dir
}

fn create_file(dir: &Path, name: &str, content: &str) {
    let path = dir.join(name);
    if let Some(parent) = path.parent() {
        std::fs::create_dir_all(parent).unwrap();
    }
    std::fs::write(path, content).unwrap();
}

fn commit_all(dir: &Path, message: &str) -> String {
    git(dir, &["add", "-A"]);
    git(dir, &["commit", "-m", message]);
    git(dir, &["rev-parse", "HEAD"])
}

const NULL_REV: &str = "0000000000000000000000000000000000000000";

#[test]
fn discover_fails_outside_a_repository() {
    let dir = TempDir::new().unwrap();
    let result = GitCommand::discover(dir.path());
    assert!(matches!(result, Err(GuardError::GitRepoNotFound(_))));
}

#[test]
fn changed_range_matches_gix_backend() {
    let dir = create_git_repo();
    create_file(dir.path(), "same.xml", "<a/>");
    create_file(dir.path(), "edit.yaml", "a: 1");
    create_file(dir.path(), "gone.py", "x = 1");
    let old = commit_all(dir.path(), "Initial commit");

    create_file(dir.path(), "edit.yaml", "a: 2");
    create_file(dir.path(), "src/new.xml", "<n/>");
    std::fs::remove_file(dir.path().join("gone.py")).unwrap();
    let new = commit_all(dir.path(), "Change things");

    let command = GitCommand::discover(dir.path()).unwrap();
    let gix = crate::git::GitDiff::discover(dir.path()).unwrap();

    let expected = vec![PathBuf::from("edit.yaml"), PathBuf::from("src/new.xml")];
    assert_eq!(command.get_changed_files_range(&old, &new).unwrap(), expected);
    assert_eq!(gix.get_changed_files_range(&old, &new).unwrap(), expected);
    assert_eq!(
        command.get_changed_files_range(NULL_REV, &new).unwrap(),
        gix.get_changed_files_range(NULL_REV, &new).unwrap()
    );
}

#[test]
fn changed_range_to_null_revision_is_empty() {
    let dir = create_git_repo();
    create_file(dir.path(), "a.xml", "<a/>");
    let old = commit_all(dir.path(), "Initial commit");

    let command = GitCommand::discover(dir.path()).unwrap();
    assert!(command.get_changed_files_range(&old, NULL_REV).unwrap().is_empty());
}

#[test]
fn changed_range_invalid_ref_returns_error() {
    let dir = create_git_repo();
    create_file(dir.path(), "main.py", "x = 1");
    commit_all(dir.path(), "Initial commit");

    let command = GitCommand::discover(dir.path()).unwrap();
    assert!(matches!(
        command.get_changed_files_range("nonexistent", "HEAD"),
        Err(GuardError::Git(_))
    ));
    assert!(command.revision_content("nonexistent").is_err());
}

#[test]
fn revision_content_reads_committed_blob() {
    let dir = create_git_repo();
    create_file(dir.path(), "conf/app.yaml", "version: 1\n");
    let first = commit_all(dir.path(), "Initial commit");
    create_file(dir.path(), "conf/app.yaml", "version: 2\n");
    commit_all(dir.path(), "Bump");

    let content = GitCommand::discover(dir.path())
        .unwrap()
        .revision_content(&first)
        .unwrap();
    assert_eq!(content.read(Path::new("conf/app.yaml")).unwrap(), b"version: 1\n");
    assert!(content.read(Path::new("missing.yaml")).is_err());
    assert!(content.disk_path(Path::new("conf/app.yaml")).is_none());
}

#[test]
fn ls_tree_keeps_only_content_blobs() {
    let listing = b"100644 blob aaaa\ta.xml\0\
100755 blob bbbb\tbin/run\0\
120000 blob cccc\tlink\0\
160000 commit dddd\tvendor/lib\0";
    assert_eq!(
        parse_ls_tree(listing),
        vec![PathBuf::from("a.xml"), PathBuf::from("bin/run")]
    );
}

#[test]
fn diff_tree_skips_deletions_and_mode_only_changes() {
    let listing = b":100644 100644 aaaa bbbb M\0edit.yaml\0\
:000000 100644 0000 cccc A\0dir with space/new.xml\0\
:100644 000000 dddd 0000 D\0gone.py\0\
:100644 100755 eeee eeee M\0chmod.sh\0\
:000000 160000 0000 ffff A\0vendor/lib\0";
    assert_eq!(
        parse_diff_tree(listing).unwrap(),
        vec![PathBuf::from("edit.yaml"), PathBuf::from("dir with space/new.xml")]
    );
}

#[test]
fn diff_tree_record_without_path_is_an_error() {
    assert!(matches!(
        parse_diff_tree(b":100644 100644 aaaa bbbb M\0"),
        Err(GuardError::Git(_))
    ));
}
