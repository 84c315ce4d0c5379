use std::ffi::OsStr;
use std::io::Error;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::candidate::ContentSource;
use crate::{GuardError, Result};

use super::diff::is_null_revision;

/// Tree entry modes that carry file content (regular and executable blobs).
const CONTENT_MODES: &[&str] = &["100644", "100755"];

/// Changed-file discovery through the `git` executable.
///
/// The child inherits the hook's environment, so objects that only exist in
/// a push quarantine (`GIT_QUARANTINE_PATH`, `GIT_OBJECT_DIRECTORY`,
/// `GIT_ALTERNATE_OBJECT_DIRECTORIES`) are visible.
#[derive(Debug, Clone)]
pub struct GitCommand {
    dir: PathBuf,
}

impl GitCommand {
    /// # Errors
    /// Returns `GitRepoNotFound` if `dir` is not inside a repository.
    pub fn discover(dir: &Path) -> Result<Self> {
        let git = Self {
            dir: dir.to_path_buf(),
        };
        git.output(["rev-parse", "--git-dir"])
            .map_err(|e| GuardError::GitRepoNotFound(format!("{}: {e}", dir.display())))?;
        Ok(git)
    }

    fn output<I, S>(&self, args: I) -> Result<Vec<u8>>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<OsStr>,
    {
        run_git(&self.dir, args).map_err(|e| GuardError::Git(e.to_string()))
    }

    /// Files added or modified between `old` and `new`, sorted by path.
    ///
    /// Same rules as [`super::GitDiff::get_changed_files_range`].
    ///
    /// # Errors
    /// Returns an error if either revision cannot be resolved.
    pub fn get_changed_files_range(&self, old: &str, new: &str) -> Result<Vec<PathBuf>> {
        if is_null_revision(new) {
            return Ok(Vec::new());
        }
        let mut paths = if is_null_revision(old) {
            let listing = self.output(["ls-tree", "-r", "-z", new])?;
            parse_ls_tree(&listing)
        } else {
            let listing = self.output(["diff-tree", "-r", "-z", "--no-renames", old, new])?;
            parse_diff_tree(&listing)?
        };
        paths.sort();
        Ok(paths)
    }

    /// Content source reading blobs from the tree of `rev`.
    ///
    /// # Errors
    /// Returns an error if the revision does not name a commit or tree.
    pub fn revision_content(&self, rev: &str) -> Result<CommandContent> {
        let spec = format!("{rev}^{{tree}}");
        let tree = self
            .output(["rev-parse", "--verify", "--quiet", spec.as_str()])
            .map_err(|_| GuardError::Git(format!("Failed to parse reference '{rev}'")))?;
        let tree = String::from_utf8_lossy(&tree).trim().to_string();
        Ok(CommandContent {
            dir: self.dir.clone(),
            tree,
        })
    }
}

/// Reads candidate bytes with `git cat-file` from one tree.
#[derive(Debug, Clone)]
pub struct CommandContent {
    dir: PathBuf,
    tree: String,
}

impl ContentSource for CommandContent {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        let name = path.to_string_lossy().replace('\\', "/");
        let spec = format!("{}:{name}", self.tree);
        run_git(&self.dir, ["cat-file", "blob", spec.as_str()])
    }
}

fn run_git<I, S>(dir: &Path, args: I) -> std::io::Result<Vec<u8>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let output = Command::new("git").current_dir(dir).args(args).output()?;
    if output.status.success() {
        Ok(output.stdout)
    } else {
        let stderr = String::from_utf8_lossy(&output.stderr);
        Err(Error::other(stderr.trim().to_string()))
    }
}

/// `<mode> <type> <id>\t<path>` records, NUL-terminated.
fn parse_ls_tree(listing: &[u8]) -> Vec<PathBuf> {
    listing
        .split(|&b| b == 0)
        .filter_map(|record| {
            let tab = record.iter().position(|&b| b == b'\t')?;
            let header = String::from_utf8_lossy(&record[..tab]);
            let mode = header.split(' ').next()?;
            CONTENT_MODES
                .contains(&mode)
                .then(|| PathBuf::from(String::from_utf8_lossy(&record[tab + 1..]).into_owned()))
        })
        .collect()
}

/// `:<old mode> <new mode> <old id> <new id> <status>` followed by the path,
/// each NUL-terminated.
fn parse_diff_tree(listing: &[u8]) -> Result<Vec<PathBuf>> {
    let mut fields = listing.split(|&b| b == 0).filter(|field| !field.is_empty());
    let mut paths = Vec::new();
    while let Some(header) = fields.next() {
        let header = String::from_utf8_lossy(header);
        let path = fields
            .next()
            .ok_or_else(|| GuardError::Git(format!("diff-tree record without a path: '{header}'")))?;
        let parts: Vec<&str> = header.trim_start_matches(':').split(' ').collect();
        let [_, new_mode, old_id, new_id, status] = parts.as_slice() else {
            return Err(GuardError::Git(format!("unexpected diff-tree record: '{header}'")));
        };
        // Mode-only changes keep the same blob and need no revalidation.
        if !status.starts_with('D') && old_id != new_id && CONTENT_MODES.contains(new_mode) {
            paths.push(PathBuf::from(String::from_utf8_lossy(path).into_owned()));
        }
    }
    Ok(paths)
}

#[cfg(test)]
#[path = "command_tests.rs"]
mod tests;
