use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::Result;
use crate::candidate::ContentSource;

use super::command::GitCommand;
use super::diff::GitDiff;

/// Environment variables git sets when pushed objects live outside the
/// repository's own object directory.
pub const OBJECT_ENVIRONMENT: &[&str] = &[
    "GIT_QUARANTINE_PATH",
    "GIT_OBJECT_DIRECTORY",
    "GIT_ALTERNATE_OBJECT_DIRECTORIES",
];

/// Revision-level queries the pre-receive hook needs.
pub trait RevisionStore {
    /// Files added or modified between `old` and `new`, sorted by path.
    ///
    /// # Errors
    /// Returns an error if either revision cannot be resolved.
    fn changed_files(&self, old: &str, new: &str) -> Result<Vec<PathBuf>>;

    /// Content source for the blobs of `rev`.
    ///
    /// # Errors
    /// Returns an error if the revision cannot be resolved.
    fn content_at(&self, rev: &str) -> Result<Arc<dyn ContentSource>>;
}

impl RevisionStore for GitDiff {
    fn changed_files(&self, old: &str, new: &str) -> Result<Vec<PathBuf>> {
        self.get_changed_files_range(old, new)
    }

    fn content_at(&self, rev: &str) -> Result<Arc<dyn ContentSource>> {
        Ok(Arc::new(self.revision_content(rev)?))
    }
}

impl RevisionStore for GitCommand {
    fn changed_files(&self, old: &str, new: &str) -> Result<Vec<PathBuf>> {
        self.get_changed_files_range(old, new)
    }

    fn content_at(&self, rev: &str) -> Result<Arc<dyn ContentSource>> {
        Ok(Arc::new(self.revision_content(rev)?))
    }
}

/// True when any of [`OBJECT_ENVIRONMENT`] is set to a non-empty value.
pub fn uses_object_environment(get: impl Fn(&str) -> Option<OsString>) -> bool {
    OBJECT_ENVIRONMENT
        .iter()
        .any(|name| get(name).is_some_and(|value| !value.is_empty()))
}

/// Opens the repository at `dir`, going through the `git` executable when the
/// process environment redirects object storage (a quarantined push).
///
/// # Errors
/// Returns an error if no repository is found.
pub fn open_revision_store(dir: &Path) -> Result<Box<dyn RevisionStore>> {
    if uses_object_environment(|name| std::env::var_os(name)) {
        tracing::debug!("object environment set, reading revisions through git");
        Ok(Box::new(GitCommand::discover(dir)?))
    } else {
        Ok(Box::new(GitDiff::discover(dir)?))
    }
}

#[cfg(test)]
#[path = "store_tests.rs"]
mod tests;
