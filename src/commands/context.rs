use std::path::{Path, PathBuf};

use crate::candidate::CandidateFile;
use crate::capabilities::Capabilities;
use crate::checker::{Engine, decide};
use crate::cli::Cli;
use crate::config::{ConfigResolver, Configuration, DEFAULT_CONFIG_NAME, ExplicitOptions};
use crate::output::{ColorMode, DiagnosticPrinter, ErrorOutput};
use crate::validator::{CommandLintRunner, LintRunner, ValidatorSet};
use crate::Result;

/// Configuration file location: `explicit` or the default name, relative paths taken from `base`.
#[must_use]
pub(crate) fn resolve_config_path(explicit: Option<&Path>, base: &Path) -> PathBuf {
    base.join(explicit.unwrap_or_else(|| Path::new(DEFAULT_CONFIG_NAME)))
}

/// Dependency check, then configuration resolution. Warnings go to stderr.
///
/// # Errors
/// Returns `MissingDependency` when the XML parser was compiled out.
pub(crate) fn load_configuration(
    explicit: &ExplicitOptions,
    config_path: &Path,
    capabilities: Capabilities,
    errors: &ErrorOutput,
) -> Result<Configuration> {
    capabilities.require_core()?;
    let resolved = ConfigResolver::new(capabilities).resolve(explicit, config_path);
    for warning in &resolved.warnings {
        errors.print_warning(warning);
    }
    Ok(resolved.config)
}

/// Everything a hook run needs once startup has succeeded.
pub(crate) struct GuardContext {
    pub config: Configuration,
    pub engine: Engine,
    pub color: ColorMode,
    pub quiet: bool,
}

impl GuardContext {
    /// # Errors
    /// Returns an error when a required parser is unavailable.
    pub fn from_cli(cli: &Cli, config_path: &Path) -> Result<Self> {
        let runner = CommandLintRunner::new(cli.lint_tool.clone());
        Self::with_runner(cli, config_path, Box::new(runner))
    }

    /// # Errors
    /// Returns an error when a required parser is unavailable.
    pub fn with_runner(cli: &Cli, config_path: &Path, runner: Box<dyn LintRunner>) -> Result<Self> {
        let color = ColorMode::from(cli.color);
        let config = load_configuration(
            &cli.explicit_options(),
            config_path,
            Capabilities::detect(),
            &ErrorOutput::new(color),
        )?;
        Ok(Self {
            config,
            engine: Engine::new(ValidatorSet::standard(runner)),
            color,
            quiet: cli.quiet,
        })
    }

    /// Validate `files`, print diagnostics and the summary, and return the exit code.
    pub fn run(&self, files: Vec<CandidateFile>) -> i32 {
        let mut printer = DiagnosticPrinter::stdout(self.color, self.config.verbose, self.quiet);
        let report = self.engine.run(files, &self.config, &mut printer);
        let signal = decide(report.verdict(), self.config.reject_on_failure);
        printer.summary(&report, signal);
        tracing::info!(
            files = report.files_checked(),
            verdict = ?report.verdict(),
            ?signal,
            "gate finished"
        );
        signal.exit_code()
    }
}

#[cfg(test)]
#[path = "context_tests.rs"]
mod tests;
