use std::fmt::Write;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::capabilities::Capabilities;
use crate::cli::{Cli, ConfigAction, ConfigArgs, ConfigOutputFormat};
use crate::config::{ConfigResolver, Configuration, ResolveResult};
use crate::git::GitDiff;
use crate::output::{ColorMode, ErrorOutput};
use crate::{EXIT_CONFIG_ERROR, EXIT_SUCCESS, Result};

use super::context::resolve_config_path;

#[must_use]
pub fn run_config(args: &ConfigArgs, cli: &Cli) -> i32 {
    match &args.action {
        ConfigAction::Show { format } => run_config_show(*format, cli),
    }
}

fn run_config_show(format: ConfigOutputFormat, cli: &Cli) -> i32 {
    let errors = ErrorOutput::new(ColorMode::from(cli.color));
    match run_config_show_impl(format, cli, Path::new(".")) {
        Ok(output) => {
            print!("{output}");
            EXIT_SUCCESS
        }
        Err(e) => {
            errors.print_error(&e);
            EXIT_CONFIG_ERROR
        }
    }
}

/// Directory relative config paths are resolved against: the work tree when
/// `start` is inside a non-bare repository, `start` otherwise.
fn config_base(start: &Path) -> PathBuf {
    GitDiff::discover(start)
        .ok()
        .and_then(|git| git.workdir().map(Path::to_path_buf))
        .unwrap_or_else(|| start.to_path_buf())
}

#[derive(Serialize)]
struct ShowOutput<'a> {
    config: &'a Configuration,
    python_lint_active: bool,
    warnings: &'a [String],
}

/// Renders the resolved configuration. Resolution warnings are part of the output.
///
/// # Errors
/// Returns an error if JSON serialization fails.
pub(crate) fn run_config_show_impl(
    format: ConfigOutputFormat,
    cli: &Cli,
    start: &Path,
) -> Result<String> {
    let config_path = resolve_config_path(cli.config.as_deref(), &config_base(start));
    let resolved =
        ConfigResolver::new(Capabilities::detect()).resolve(&cli.explicit_options(), &config_path);

    match format {
        ConfigOutputFormat::Text => Ok(format_config_text(&resolved)),
        ConfigOutputFormat::Json => {
            let output = ShowOutput {
                config: &resolved.config,
                python_lint_active: resolved.config.python_lint_active(),
                warnings: &resolved.warnings,
            };
            let mut json = serde_json::to_string_pretty(&output)?;
            json.push('\n');
            Ok(json)
        }
    }
}

#[must_use]
pub(crate) fn format_config_text(resolved: &ResolveResult) -> String {
    let config = &resolved.config;
    let mut output = String::new();

    output.push_str("=== Effective Configuration ===\n\n");
    let _ = writeln!(output, "  config file = {}", config.config_path.display());
    let _ = writeln!(output, "  xml         = {}", config.enable_xml);
    let _ = writeln!(output, "  yaml        = {}", config.enable_yaml);
    let _ = writeln!(output, "  python      = {}", config.enable_python);
    let _ = writeln!(output, "  treshold    = {}", config.score_threshold);
    let _ = writeln!(output, "  reject      = {}", config.reject_on_failure);
    let _ = writeln!(output, "  verbose     = {}", config.verbose);
    let _ = writeln!(output, "  docbuilder  = {}", config.enable_docbuilder);
    let _ = writeln!(
        output,
        "\nPython lint {}",
        if config.python_lint_active() {
            "active"
        } else {
            "inactive"
        }
    );

    if !resolved.warnings.is_empty() {
        output.push_str("\nWarnings:\n");
        for warning in &resolved.warnings {
            let _ = writeln!(output, "  - {warning}");
        }
    }

    output
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod tests;
