#![allow(dead_code)]

use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the commit-guard binary.
#[macro_export]
macro_rules! commit_guard {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("commit-guard"))
    };
}

pub const NULL_REV: &str = "0000000000000000000000000000000000000000";

/// Stand-in lint tool. `--errors-only` fails on files containing `SYNTAX_ERROR`;
/// the full report rates a file by its `# score: N` line (10 when absent).
pub const FAKE_LINT_SCRIPT: &str = r#"#!/bin/sh
mode="$1"
file="$2"
if [ "$mode" = "--errors-only" ]; then
  if grep -q SYNTAX_ERROR "$file"; then
    echo "E0001: syntax-error"
    exit 2
  fi
  exit 0
fi
score=$(sed -n 's/^# score: //p' "$file")
echo "Your code has been rated at ${score:-10.00}/10"
"#;

fn git_in(dir: &Path, args: &[&str]) -> String {
    let output = Command::new("git")
        .args(args)
        .current_dir(dir)
        .output()
        .expect("Failed to run git");
    assert!(
        output.status.success(),
        "git {args:?} failed: {}",
        String::from_utf8_lossy(&output.stderr)
    );
    String::from_utf8_lossy(&output.stdout).trim().to_string()
}

/// A temporary git repository with a configured identity.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new repository with an empty work tree.
    pub fn new() -> Self {
        let dir = TempDir::new().expect("Failed to create temp directory");
        git_in(dir.path(), &["init", "-q"]);
        git_in(dir.path(), &["config", "user.email", "test@test.com"]);
        git_in(dir.path(), &["config", "user.name", "Test User"]);
        git_in(dir.path(), &["config", "commit.gpgsign", "false"]);
        Self { dir }
    }

    /// Returns the path to the work tree.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates a file with the given content in the work tree.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Writes the hook configuration at the repository root.
    pub fn create_config(&self, content: &str) {
        self.create_file(".commit-guard.conf", content);
    }

    pub fn git(&self, args: &[&str]) -> String {
        git_in(self.path(), args)
    }

    pub fn stage_all(&self) {
        self.git(&["add", "-A"]);
    }

    /// Stages everything and commits; returns the new commit id.
    pub fn commit_all(&self, message: &str) -> String {
        self.stage_all();
        self.git(&["commit", "-q", "-m", message]);
        self.git(&["rev-parse", "HEAD"])
    }

    /// Installs the fake lint tool outside the work tree and returns its path.
    #[cfg(unix)]
    pub fn fake_lint_tool(&self) -> (TempDir, PathBuf) {
        use std::os::unix::fs::PermissionsExt;

        let tool_dir = TempDir::new().expect("Failed to create temp directory");
        let path = tool_dir.path().join("fake-lint");
        fs::write(&path, FAKE_LINT_SCRIPT).expect("Failed to write lint script");
        fs::set_permissions(&path, fs::Permissions::from_mode(0o755))
            .expect("Failed to mark lint script executable");
        (tool_dir, path)
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
