use std::io::Read;
use std::path::Path;
use std::sync::Arc;

use crate::candidate::CandidateFile;
use crate::cli::Cli;
use crate::git::{is_null_revision, open_revision_store};
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_CONFIG_ERROR, GuardError, Result};

use super::context::{GuardContext, resolve_config_path};

/// One ref update announced to the hook: `<old> <new> <ref>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PushUpdate {
    pub old: String,
    pub new: String,
    pub ref_name: String,
}

/// Parses pre-receive stdin. Every line must hold exactly three whitespace-separated tokens.
///
/// # Errors
/// Returns `HookInput` for empty input or any line with a different token count.
pub fn parse_push_lines(input: &str) -> Result<Vec<PushUpdate>> {
    let mut updates = Vec::new();
    for (index, line) in input.lines().enumerate() {
        let tokens: Vec<&str> = line.split_whitespace().collect();
        let [old, new, ref_name] = tokens.as_slice() else {
            return Err(GuardError::HookInput(format!(
                "line {}: expected 3 fields, found {}: '{line}'",
                index + 1,
                tokens.len()
            )));
        };
        updates.push(PushUpdate {
            old: (*old).to_string(),
            new: (*new).to_string(),
            ref_name: (*ref_name).to_string(),
        });
    }
    if updates.is_empty() {
        return Err(GuardError::HookInput("no ref updates on stdin".to_string()));
    }
    Ok(updates)
}

#[must_use]
pub fn run_pre_receive(cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(ColorMode::from(cli.color));
    let mut input = String::new();
    if let Err(e) = std::io::stdin().read_to_string(&mut input) {
        errors.print_error(&GuardError::Io(e));
        return EXIT_CONFIG_ERROR;
    }
    match run_pre_receive_impl(cli, &input, Path::new(".")) {
        Ok(exit_code) => exit_code,
        Err(e) => {
            errors.print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Validates every file changed by the pushed updates, reading payloads from
/// the new revisions' blobs. Deleted refs have nothing to validate.
///
/// # Errors
/// Returns an error for malformed input, a startup failure, or unreadable revisions.
pub(crate) fn run_pre_receive_impl(cli: &Cli, input: &str, repo_dir: &Path) -> Result<i32> {
    let config_path = resolve_config_path(cli.config.as_deref(), repo_dir);
    let ctx = GuardContext::from_cli(cli, &config_path)?;
    let updates = parse_push_lines(input)?;
    let store = open_revision_store(repo_dir)?;

    let mut files = Vec::new();
    for update in &updates {
        if is_null_revision(&update.new) {
            tracing::debug!(ref_name = %update.ref_name, "ref deleted, nothing to validate");
            continue;
        }
        let paths = store.changed_files(&update.old, &update.new)?;
        tracing::debug!(ref_name = %update.ref_name, count = paths.len(), "collected changed files");

        let source = store.content_at(&update.new)?;
        files.extend(
            paths
                .into_iter()
                .map(|path| CandidateFile::new(path, Arc::clone(&source))),
        );
    }

    Ok(ctx.run(files))
}

#[cfg(test)]
#[path = "pre_receive_tests.rs"]
mod tests;
