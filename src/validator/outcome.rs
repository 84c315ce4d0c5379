use std::fmt;

use serde::Serialize;

/// Content kinds with a dedicated validator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidatorKind {
    Xml,
    Yaml,
    PythonLint,
}

impl ValidatorKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Xml => "xml",
            Self::Yaml => "yaml",
            Self::PythonLint => "python-lint",
        }
    }
}

impl fmt::Display for ValidatorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Pass,
    Fail,
}

/// Result of one validator on one file.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ValidationOutcome {
    pub filename: String,
    pub kind: ValidatorKind,
    pub status: Status,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Lint score, only set by the python lint validator.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub score: Option<f64>,
}

impl ValidationOutcome {
    #[must_use]
    pub fn pass(filename: impl Into<String>, kind: ValidatorKind) -> Self {
        Self {
            filename: filename.into(),
            kind,
            status: Status::Pass,
            message: None,
            score: None,
        }
    }

    #[must_use]
    pub fn fail(
        filename: impl Into<String>,
        kind: ValidatorKind,
        message: impl Into<String>,
    ) -> Self {
        Self {
            filename: filename.into(),
            kind,
            status: Status::Fail,
            message: Some(message.into()),
            score: None,
        }
    }

    #[must_use]
    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = Some(message.into());
        self
    }

    #[must_use]
    pub const fn with_score(mut self, score: Option<f64>) -> Self {
        self.score = score;
        self
    }

    #[must_use]
    pub fn is_failed(&self) -> bool {
        self.status == Status::Fail
    }
}
