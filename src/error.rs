use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GuardError {
    #[error("Configuration error: {0}")]
    Config(String),

    /// Hook input on stdin did not follow the `<old> <new> <ref>` protocol.
    #[error("Malformed hook input: {0}")]
    HookInput(String),

    /// A parser this build requires was compiled out.
    #[error("Required dependency unavailable: {0}")]
    MissingDependency(&'static str),

    #[error("Failed to write file: {path}")]
    FileWrite {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON serialization error: {0}")]
    JsonSerialize(#[from] serde_json::Error),

    #[error("Git error: {0}")]
    Git(String),

    #[error("Not a git repository: {0}")]
    GitRepoNotFound(String),
}

impl GuardError {
    /// Short category label used as the heading of error output.
    #[must_use]
    pub const fn error_type(&self) -> &'static str {
        match self {
            Self::Config(_) => "Config",
            Self::HookInput(_) => "HookInput",
            Self::MissingDependency(_) => "Dependency",
            Self::FileWrite { .. } => "FileWrite",
            Self::Io(_) => "IO",
            Self::JsonSerialize(_) => "JSON",
            Self::Git(_) | Self::GitRepoNotFound(_) => "Git",
        }
    }

    /// The message part without the category prefix.
    #[must_use]
    pub fn message(&self) -> String {
        match self {
            Self::Config(msg)
            | Self::HookInput(msg)
            | Self::Git(msg)
            | Self::GitRepoNotFound(msg) => msg.clone(),
            Self::MissingDependency(name) => format!("{name} is not available in this build"),
            Self::FileWrite { path, .. } => path.display().to_string(),
            Self::Io(e) => e.to_string(),
            Self::JsonSerialize(e) => e.to_string(),
        }
    }

    /// Underlying cause, when the variant wraps one.
    #[must_use]
    pub fn detail(&self) -> Option<String> {
        match self {
            Self::FileWrite { source, .. } => Some(source.to_string()),
            _ => None,
        }
    }

    /// Actionable hint printed under the error, if one exists.
    #[must_use]
    pub fn suggestion(&self) -> Option<&'static str> {
        match self {
            Self::Config(_) => Some("check the config file format: one 'key: value' per line"),
            Self::HookInput(_) => {
                Some("pre-receive expects lines of '<old-rev> <new-rev> <ref-name>' on stdin")
            }
            Self::MissingDependency(_) => {
                Some("rebuild commit-guard with the default cargo features enabled")
            }
            Self::FileWrite { source, .. } | Self::Io(source) => match source.kind() {
                std::io::ErrorKind::NotFound => Some("check that the file path exists"),
                std::io::ErrorKind::PermissionDenied => Some("check the file permissions"),
                _ => None,
            },
            Self::JsonSerialize(_) => None,
            Self::Git(_) => Some("check that the repository is readable and not corrupted"),
            Self::GitRepoNotFound(_) => Some("run the hook from inside a git repository"),
        }
    }
}

pub type Result<T> = std::result::Result<T, GuardError>;

#[cfg(test)]
#[path = "error_tests.rs"]
mod tests;
