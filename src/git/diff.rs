use std::collections::{BTreeMap, HashMap};
use std::path::{Path, PathBuf};

use crate::{GuardError, Result};

use super::content::RevisionContent;

/// Path to blob id for every file in a tree, sorted by path.
pub type TreeFiles = BTreeMap<PathBuf, gix::ObjectId>;

/// Changed-file discovery using gix.
pub struct GitDiff {
    repo_path: PathBuf,
    workdir: Option<PathBuf>,
}

impl GitDiff {
    /// Create a new `GitDiff` for the repository containing the given path.
    ///
    /// Bare repositories (the server side of a push) are accepted.
    ///
    /// # Errors
    /// Returns an error if no git repository is found.
    pub fn discover(path: &Path) -> Result<Self> {
        let repo = gix::discover(path).map_err(|e| {
            GuardError::GitRepoNotFound(format!("{}: {e}", path.display()))
        })?;
        Ok(Self {
            repo_path: repo.path().to_path_buf(),
            workdir: repo.workdir().map(Path::to_path_buf),
        })
    }

    /// Working tree root; `None` for bare repositories.
    #[must_use]
    pub fn workdir(&self) -> Option<&Path> {
        self.workdir.as_deref()
    }

    fn open_repo(&self) -> Result<gix::Repository> {
        gix::open(&self.repo_path)
            .map_err(|e| GuardError::Git(format!("Failed to open git repository: {e}")))
    }

    fn collect_tree_files(tree: &gix::Tree<'_>, prefix: &Path, files: &mut TreeFiles) -> Result<()> {
        for entry in tree.iter() {
            let entry =
                entry.map_err(|e| GuardError::Git(format!("Failed to read tree entry: {e}")))?;
            let name = std::str::from_utf8(entry.filename())
                .map_err(|e| GuardError::Git(format!("Invalid filename encoding: {e}")))?;
            let path = prefix.join(name);

            match entry.mode().kind() {
                gix::object::tree::EntryKind::Blob
                | gix::object::tree::EntryKind::BlobExecutable => {
                    files.insert(path, entry.oid().into());
                }
                gix::object::tree::EntryKind::Tree => {
                    let subtree = entry
                        .object()
                        .map_err(|e| GuardError::Git(format!("Failed to get subtree object: {e}")))?
                        .into_tree();
                    Self::collect_tree_files(&subtree, &path, files)?;
                }
                _ => {}
            }
        }
        Ok(())
    }

    fn tree_files_at(repo: &gix::Repository, rev: &str) -> Result<TreeFiles> {
        let commit = repo
            .rev_parse_single(rev)
            .map_err(|e| GuardError::Git(format!("Failed to parse reference '{rev}': {e}")))?
            .object()
            .map_err(|e| GuardError::Git(format!("Failed to get object for '{rev}': {e}")))?
            .peel_to_commit()
            .map_err(|e| GuardError::Git(format!("Failed to peel to commit '{rev}': {e}")))?;
        let tree = commit
            .tree()
            .map_err(|e| GuardError::Git(format!("Failed to get tree for '{rev}': {e}")))?;

        let mut files = TreeFiles::new();
        Self::collect_tree_files(&tree, Path::new(""), &mut files)?;
        Ok(files)
    }

    /// Index entries as (path, blob id), in index order.
    fn index_entries(repo: &gix::Repository) -> Result<Vec<(PathBuf, gix::ObjectId)>> {
        let index = repo
            .open_index()
            .map_err(|e| GuardError::Git(format!("Failed to open git index: {e}")))?;
        Ok(index
            .entries()
            .iter()
            .map(|entry| {
                let path = String::from_utf8_lossy(entry.path(&index)).into_owned();
                (PathBuf::from(path), entry.id)
            })
            .collect())
    }

    /// Files staged for commit (index differs from HEAD), repository-relative, in index order.
    ///
    /// # Errors
    /// Returns an error if the repository cannot be accessed.
    pub fn get_staged_files(&self) -> Result<Vec<PathBuf>> {
        let repo = self.open_repo()?;

        // New repos have no commits yet: everything in the index is staged.
        let head_files: HashMap<PathBuf, gix::ObjectId> = match repo.head_commit() {
            Ok(_) => Self::tree_files_at(&repo, "HEAD")?.into_iter().collect(),
            Err(_) => HashMap::new(),
        };

        Ok(Self::index_entries(&repo)?
            .into_iter()
            .filter(|(path, id)| head_files.get(path) != Some(id))
            .map(|(path, _)| path)
            .collect())
    }

    /// Every tracked file, repository-relative, in index order.
    ///
    /// # Errors
    /// Returns an error if the index cannot be read.
    pub fn get_tracked_files(&self) -> Result<Vec<PathBuf>> {
        let repo = self.open_repo()?;
        Ok(Self::index_entries(&repo)?
            .into_iter()
            .map(|(path, _)| path)
            .collect())
    }

    /// Files added or modified between `old` and `new`, sorted by path.
    ///
    /// An all-zero `old` (newly created ref) compares against the empty tree;
    /// an all-zero `new` (deleted ref) yields nothing. Deleted files are not
    /// returned since there is no content left to validate.
    ///
    /// # Errors
    /// Returns an error if either revision cannot be resolved.
    pub fn get_changed_files_range(&self, old: &str, new: &str) -> Result<Vec<PathBuf>> {
        if is_null_revision(new) {
            return Ok(Vec::new());
        }
        let repo = self.open_repo()?;
        let new_files = Self::tree_files_at(&repo, new)?;
        let old_files = if is_null_revision(old) {
            TreeFiles::new()
        } else {
            Self::tree_files_at(&repo, old)?
        };

        Ok(new_files
            .into_iter()
            .filter(|(path, id)| old_files.get(path) != Some(id))
            .map(|(path, _)| path)
            .collect())
    }

    /// Content source reading blobs from the tree of `rev`.
    ///
    /// # Errors
    /// Returns an error if the revision cannot be resolved.
    pub fn revision_content(&self, rev: &str) -> Result<RevisionContent> {
        let repo = self.open_repo()?;
        let files = Self::tree_files_at(&repo, rev)?;
        Ok(RevisionContent::new(repo.into_sync(), files))
    }
}

/// True for the all-zero id git sends for ref creation/deletion.
#[must_use]
pub fn is_null_revision(rev: &str) -> bool {
    !rev.is_empty() && rev.chars().all(|c| c == '0')
}

#[cfg(test)]
#[path = "diff_tests.rs"]
mod tests;
