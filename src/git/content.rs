use std::io::{Error, ErrorKind};
use std::path::Path;

use crate::candidate::ContentSource;

use super::diff::TreeFiles;

/// Reads candidate bytes from blobs of one revision (no working tree needed).
pub struct RevisionContent {
    repo: gix::ThreadSafeRepository,
    files: TreeFiles,
}

impl RevisionContent {
    pub(crate) const fn new(repo: gix::ThreadSafeRepository, files: TreeFiles) -> Self {
        Self { repo, files }
    }
}

impl ContentSource for RevisionContent {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        let id = self.files.get(path).ok_or_else(|| {
            Error::new(
                ErrorKind::NotFound,
                format!("{} not in revision", path.display()),
            )
        })?;
        let repo = self.repo.to_thread_local();
        let object = repo.find_object(*id).map_err(Error::other)?;
        Ok(object.detach().data)
    }
}
