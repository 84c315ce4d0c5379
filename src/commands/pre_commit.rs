use std::path::Path;
use std::sync::Arc;

use crate::candidate::{CandidateFile, ContentSource, WorkingTree};
use crate::cli::{Cli, PreCommitArgs};
use crate::git::GitDiff;
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_CONFIG_ERROR, GuardError, Result};

use super::context::{GuardContext, resolve_config_path};

#[must_use]
pub fn run_pre_commit(args: &PreCommitArgs, cli: &Cli) -> i32 {
    match run_pre_commit_impl(args, cli, Path::new(".")) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            ErrorOutput::new(ColorMode::from(cli.color)).print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates the staged files (or every tracked file with `--all`) of the
/// repository containing `start`, reading payloads from the work tree.
///
/// # Errors
/// Returns an error if startup fails or the repository cannot be read.
pub(crate) fn run_pre_commit_impl(args: &PreCommitArgs, cli: &Cli, start: &Path) -> Result<i32> {
    let git = GitDiff::discover(start)?;
    let workdir = git
        .workdir()
        .ok_or_else(|| {
            GuardError::Git("pre-commit needs a work tree, found a bare repository".to_string())
        })?
        .to_path_buf();

    let config_path = resolve_config_path(cli.config.as_deref(), &workdir);
    let ctx = GuardContext::from_cli(cli, &config_path)?;

    let paths = if args.all {
        git.get_tracked_files()?
    } else {
        git.get_staged_files()?
    };
    tracing::debug!(count = paths.len(), all = args.all, "collected candidate files");

    let source: Arc<dyn ContentSource> = Arc::new(WorkingTree::new(workdir));
    let files: Vec<CandidateFile> = paths
        .into_iter()
        .map(|path| CandidateFile::new(path, Arc::clone(&source)))
        .collect();

    Ok(ctx.run(files))
}
