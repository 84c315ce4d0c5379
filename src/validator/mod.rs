mod outcome;
mod python;
mod score;
mod xml;
mod yaml;

pub use outcome::{Status, ValidationOutcome, ValidatorKind};
pub use python::{
    CommandLintRunner, DEFAULT_LINT_TOOL, LintMode, LintRun, LintRunner, PythonLintValidator,
};
pub use score::{ScoreExtractor, ScoreParseError};
pub use xml::{XmlValidator, check_well_formed};
pub use yaml::{YamlValidator, load_documents};

use crate::candidate::CandidateFile;
use crate::config::Configuration;

/// A checker bound to one content kind.
pub trait Validator: Send + Sync {
    fn kind(&self) -> ValidatorKind;

    /// Whether the configuration turns this validator on.
    fn is_enabled(&self, config: &Configuration) -> bool;

    /// Validate one file. Failures of any kind are reported as a FAIL outcome, never as an error.
    fn validate(&self, file: &CandidateFile, config: &Configuration) -> ValidationOutcome;
}

/// The validators available to the engine, one per kind.
pub struct ValidatorSet {
    validators: Vec<Box<dyn Validator>>,
}

impl ValidatorSet {
    #[must_use]
    pub fn new(validators: Vec<Box<dyn Validator>>) -> Self {
        Self { validators }
    }

    /// XML, YAML and python lint, the latter through `lint_runner`.
    #[must_use]
    pub fn standard(lint_runner: Box<dyn LintRunner>) -> Self {
        Self::new(vec![
            Box::new(XmlValidator),
            Box::new(YamlValidator),
            Box::new(PythonLintValidator::new(lint_runner)),
        ])
    }

    #[must_use]
    pub fn get(&self, kind: ValidatorKind) -> Option<&dyn Validator> {
        self.validators
            .iter()
            .find(|v| v.kind() == kind)
            .map(|v| &**v)
    }
}
