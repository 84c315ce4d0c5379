use crate::candidate::CandidateFile;
use crate::classifier::Classifier;
use crate::config::Configuration;
use crate::validator::{ValidationOutcome, ValidatorSet};

use super::report::RunReport;

/// Receives each file's outcomes as soon as its validators finish.
pub trait OutcomeSink {
    fn file_checked(&mut self, file: &CandidateFile, outcomes: &[ValidationOutcome]);
}

/// Sink that drops everything, for callers that only need the report.
#[derive(Debug, Default, Clone, Copy)]
pub struct DiscardSink;

impl OutcomeSink for DiscardSink {
    fn file_checked(&mut self, _file: &CandidateFile, _outcomes: &[ValidationOutcome]) {}
}

/// Classifies candidates, runs the matching enabled validators, and collects outcomes.
pub struct Engine {
    classifier: Classifier,
    validators: ValidatorSet,
}

impl Engine {
    #[must_use]
    pub const fn new(validators: ValidatorSet) -> Self {
        Self {
            classifier: Classifier,
            validators,
        }
    }

    /// Outcomes of every enabled validator that applies to `file`.
    ///
    /// Depends only on `file` and `config`, so files may be checked independently.
    #[must_use]
    pub fn check_file(&self, file: &CandidateFile, config: &Configuration) -> Vec<ValidationOutcome> {
        self.classifier
            .classify(file, config.python_lint_active())
            .into_iter()
            .filter_map(|kind| self.validators.get(kind))
            .filter(|validator| validator.is_enabled(config))
            .map(|validator| {
                let outcome = validator.validate(file, config);
                tracing::debug!(
                    file = %outcome.filename,
                    kind = %outcome.kind,
                    status = ?outcome.status,
                    "validated"
                );
                outcome
            })
            .collect()
    }

    /// Check every file in order. Never stops early: each configured validator
    /// runs for each file so every problem gets reported.
    ///
    /// Files are consumed one at a time; a payload is dropped as soon as its
    /// file has been reported.
    pub fn run(
        &self,
        files: impl IntoIterator<Item = CandidateFile>,
        config: &Configuration,
        sink: &mut dyn OutcomeSink,
    ) -> RunReport {
        let mut report = RunReport::default();
        for file in files {
            let outcomes = self.check_file(&file, config);
            sink.file_checked(&file, &outcomes);
            report.record(outcomes);
        }
        tracing::debug!(
            files = report.files_checked(),
            outcomes = report.outcomes().len(),
            failures = report.failures().count(),
            "run complete"
        );
        report
    }
}

#[cfg(test)]
#[path = "engine_tests.rs"]
mod tests;
