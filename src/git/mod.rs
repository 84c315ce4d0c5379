mod command;
mod content;
mod diff;
mod store;

pub use command::{CommandContent, GitCommand};
pub use content::RevisionContent;
pub use diff::{GitDiff, TreeFiles, is_null_revision};
pub use store::{OBJECT_ENVIRONMENT, RevisionStore, open_revision_store, uses_object_environment};
