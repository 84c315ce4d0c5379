use std::path::{Path, PathBuf};
use std::process::Command;

use tempfile::TempDir;

use crate::candidate::CandidateFile;
use crate::config::Configuration;

use super::score::ScoreExtractor;
use super::{ValidationOutcome, Validator, ValidatorKind};

pub const DEFAULT_LINT_TOOL: &str = "pylint";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LintMode {
    /// Report errors only; the exit status decides pass/fail.
    ErrorsOnly,
    /// Full report including the `rated at` score line.
    FullReport,
}

/// Captured result of one lint tool invocation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LintRun {
    pub success: bool,
    pub exit_code: Option<i32>,
    pub output: String,
}

/// Runs the external lint tool.
pub trait LintRunner: Send + Sync {
    /// # Errors
    /// Returns an error if the tool cannot be started.
    fn run(&self, path: &Path, mode: LintMode) -> std::io::Result<LintRun>;

    /// Name shown in diagnostics.
    fn name(&self) -> &str;
}

/// Runs the lint tool as a blocking subprocess.
#[derive(Debug, Clone)]
pub struct CommandLintRunner {
    program: String,
}

impl CommandLintRunner {
    #[must_use]
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
        }
    }
}

impl Default for CommandLintRunner {
    fn default() -> Self {
        Self::new(DEFAULT_LINT_TOOL)
    }
}

impl LintRunner for CommandLintRunner {
    fn run(&self, path: &Path, mode: LintMode) -> std::io::Result<LintRun> {
        let flag = match mode {
            LintMode::ErrorsOnly => "--errors-only",
            LintMode::FullReport => "--reports=y",
        };
        tracing::debug!(program = %self.program, flag, path = %path.display(), "running lint tool");
        let output = Command::new(&self.program).arg(flag).arg(path).output()?;
        Ok(LintRun {
            success: output.status.success(),
            exit_code: output.status.code(),
            output: String::from_utf8_lossy(&output.stdout).into_owned(),
        })
    }

    fn name(&self) -> &str {
        &self.program
    }
}

/// Python quality gate: an errors-only pass plus an optional minimum score.
pub struct PythonLintValidator {
    runner: Box<dyn LintRunner>,
    extractor: ScoreExtractor,
}

impl PythonLintValidator {
    #[must_use]
    pub fn new(runner: Box<dyn LintRunner>) -> Self {
        Self {
            runner,
            extractor: ScoreExtractor::new(),
        }
    }

    fn errors_only_check(&self, path: &Path) -> Option<String> {
        match self.runner.run(path, LintMode::ErrorsOnly) {
            Ok(run) if run.success => None,
            Ok(run) => {
                let status = run
                    .exit_code
                    .map_or_else(|| "killed by signal".to_string(), |c| format!("exit {c}"));
                let first = run.output.lines().find(|l| !l.trim().is_empty() && !l.starts_with('*'));
                Some(first.map_or_else(
                    || format!("{} reported errors ({status})", self.runner.name()),
                    |line| format!("{} reported errors ({status}): {}", self.runner.name(), line.trim()),
                ))
            }
            Err(e) => Some(format!("cannot run {}: {e}", self.runner.name())),
        }
    }

    /// Returns the extracted score (if any) and the failure reason (if any).
    fn score_check(&self, path: &Path, threshold: f64) -> (Option<f64>, Option<String>) {
        let run = match self.runner.run(path, LintMode::FullReport) {
            Ok(run) => run,
            Err(e) => return (None, Some(format!("cannot run {}: {e}", self.runner.name()))),
        };
        match self.extractor.extract(&run.output) {
            Ok(score) if score < threshold => (
                Some(score),
                Some(format!("score {score:.2}/10 is below threshold {threshold:.2}")),
            ),
            Ok(score) => (Some(score), None),
            Err(e) => (None, Some(e.to_string())),
        }
    }
}

impl Validator for PythonLintValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::PythonLint
    }

    fn is_enabled(&self, config: &Configuration) -> bool {
        config.python_lint_active()
    }

    fn validate(&self, file: &CandidateFile, config: &Configuration) -> ValidationOutcome {
        let name = file.display_name();
        let target = match LintTarget::prepare(file) {
            Ok(target) => target,
            Err(e) => return ValidationOutcome::fail(name, self.kind(), e),
        };

        let mut problems = Vec::new();
        problems.extend(self.errors_only_check(&target.path));

        let mut score = None;
        if config.score_threshold > 0.0 {
            let (extracted, problem) = self.score_check(&target.path, config.score_threshold);
            score = extracted;
            problems.extend(problem);
        }

        let outcome = if problems.is_empty() {
            let outcome = ValidationOutcome::pass(name, self.kind());
            match score {
                Some(s) => outcome.with_message(format!("score {s:.2}/10")),
                None => outcome,
            }
        } else {
            ValidationOutcome::fail(name, self.kind(), problems.join("; "))
        };
        outcome.with_score(score)
    }
}

/// A path the lint tool can open.
///
/// Working-tree files are linted in place; other payloads (git blobs) are
/// written under a temporary directory with the same file name.
struct LintTarget {
    path: PathBuf,
    _dir: Option<TempDir>,
}

impl LintTarget {
    fn prepare(file: &CandidateFile) -> Result<Self, String> {
        if let Some(path) = file.disk_path().filter(|p| p.is_file()) {
            return Ok(Self { path, _dir: None });
        }

        let payload = file.payload().map_err(|e| format!("cannot read: {e}"))?;
        let dir = tempfile::tempdir().map_err(|e| format!("cannot create temp dir: {e}"))?;
        let file_name = file
            .path()
            .file_name()
            .map_or_else(|| PathBuf::from("candidate.py"), PathBuf::from);
        let path = dir.path().join(file_name);
        std::fs::write(&path, payload).map_err(|e| format!("cannot materialize: {e}"))?;
        Ok(Self {
            path,
            _dir: Some(dir),
        })
    }
}

#[cfg(test)]
#[path = "python_tests.rs"]
mod tests;
