use serde::Serialize;

use crate::validator::ValidationOutcome;

/// Aggregate result of a run: FAIL when any outcome anywhere failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RunVerdict {
    Pass,
    Fail,
}

impl RunVerdict {
    #[must_use]
    pub const fn is_fail(self) -> bool {
        matches!(self, Self::Fail)
    }
}

/// Outcomes of one run in file-discovery order.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct RunReport {
    outcomes: Vec<ValidationOutcome>,
    files_checked: usize,
}

impl RunReport {
    pub(crate) fn record(&mut self, outcomes: Vec<ValidationOutcome>) {
        self.files_checked += 1;
        self.outcomes.extend(outcomes);
    }

    #[must_use]
    pub fn outcomes(&self) -> &[ValidationOutcome] {
        &self.outcomes
    }

    #[must_use]
    pub const fn files_checked(&self) -> usize {
        self.files_checked
    }

    pub fn failures(&self) -> impl Iterator<Item = &ValidationOutcome> {
        self.outcomes.iter().filter(|o| o.is_failed())
    }

    #[must_use]
    pub fn verdict(&self) -> RunVerdict {
        if self.outcomes.iter().any(ValidationOutcome::is_failed) {
            RunVerdict::Fail
        } else {
            RunVerdict::Pass
        }
    }
}
