//! Candidate files and the sources their bytes come from.
//!
//! A candidate is identified by its repository-relative path. Its payload is
//! fetched lazily from a [`ContentSource`] the first time a validator asks for
//! it, and cached for the remaining validators of the same file.

use std::fmt;
use std::fs::File;
use std::io::Read;
use std::path::{Path, PathBuf};
use std::sync::{Arc, OnceLock};

/// Longest first line inspected for an interpreter marker.
pub const FIRST_LINE_LIMIT: usize = 256;

/// Where candidate bytes are read from.
pub trait ContentSource: Send + Sync {
    /// Read the full content of `path` (repository-relative).
    ///
    /// # Errors
    /// Returns an error if the content cannot be located or read.
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>>;

    /// Read at most `limit` leading bytes of `path`.
    ///
    /// # Errors
    /// Returns an error if the content cannot be located or read.
    fn read_prefix(&self, path: &Path, limit: usize) -> std::io::Result<Vec<u8>> {
        let mut bytes = self.read(path)?;
        bytes.truncate(limit);
        Ok(bytes)
    }

    /// On-disk location of `path`, if this source is backed by a working tree.
    fn disk_path(&self, _path: &Path) -> Option<PathBuf> {
        None
    }
}

/// Reads candidates from a checked-out working tree.
#[derive(Debug, Clone)]
pub struct WorkingTree {
    root: PathBuf,
}

impl WorkingTree {
    #[must_use]
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }
}

impl ContentSource for WorkingTree {
    fn read(&self, path: &Path) -> std::io::Result<Vec<u8>> {
        std::fs::read(self.root.join(path))
    }

    fn read_prefix(&self, path: &Path, limit: usize) -> std::io::Result<Vec<u8>> {
        let file = File::open(self.root.join(path))?;
        let mut bytes = Vec::with_capacity(limit);
        file.take(limit as u64).read_to_end(&mut bytes)?;
        Ok(bytes)
    }

    fn disk_path(&self, path: &Path) -> Option<PathBuf> {
        Some(self.root.join(path))
    }
}

/// A file proposed for entry into history during this run.
pub struct CandidateFile {
    path: PathBuf,
    source: Arc<dyn ContentSource>,
    payload: OnceLock<Result<Vec<u8>, String>>,
}

impl CandidateFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>, source: Arc<dyn ContentSource>) -> Self {
        Self {
            path: path.into(),
            source,
            payload: OnceLock::new(),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Path with forward slashes, as it appears in git output.
    #[must_use]
    pub fn display_name(&self) -> String {
        self.path.to_string_lossy().replace('\\', "/")
    }

    /// The file's bytes, fetched on first access.
    ///
    /// # Errors
    /// Returns the read failure message if the source could not provide the content.
    pub fn payload(&self) -> Result<&[u8], &str> {
        self.payload
            .get_or_init(|| {
                tracing::trace!(path = %self.path.display(), "fetching payload");
                self.source.read(&self.path).map_err(|e| e.to_string())
            })
            .as_deref()
            .map_err(String::as_str)
    }

    /// First line of the content, if it is UTF-8, cut at [`FIRST_LINE_LIMIT`] bytes.
    ///
    /// Uses the cached payload when a validator already fetched it; otherwise
    /// only a bounded prefix is read and nothing is cached.
    #[must_use]
    pub fn first_line(&self) -> Option<String> {
        let prefix;
        let bytes = match self.payload.get() {
            Some(Ok(payload)) => &payload[..payload.len().min(FIRST_LINE_LIMIT)],
            Some(Err(_)) => return None,
            None => {
                prefix = self.source.read_prefix(&self.path, FIRST_LINE_LIMIT).ok()?;
                &prefix[..]
            }
        };
        let end = bytes
            .iter()
            .position(|&b| b == b'\n')
            .unwrap_or(bytes.len());
        let line = &bytes[..end];
        match std::str::from_utf8(line) {
            Ok(text) => Some(text.to_owned()),
            // A multi-byte character split by the prefix limit.
            Err(e) if end == bytes.len() && e.error_len().is_none() => {
                std::str::from_utf8(&line[..e.valid_up_to()]).ok().map(str::to_owned)
            }
            Err(_) => None,
        }
    }

    #[must_use]
    pub fn disk_path(&self) -> Option<PathBuf> {
        self.source.disk_path(&self.path)
    }
}

impl fmt::Debug for CandidateFile {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CandidateFile")
            .field("path", &self.path)
            .field("loaded", &self.payload.get().is_some())
            .finish_non_exhaustive()
    }
}


#[cfg(test)]
#[path = "candidate_tests.rs"]
mod tests;
