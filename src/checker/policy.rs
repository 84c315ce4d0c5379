use crate::{EXIT_REJECTED, EXIT_SUCCESS};

use super::report::RunVerdict;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExitSignal {
    Allow,
    Reject,
}

impl ExitSignal {
    #[must_use]
    pub const fn exit_code(self) -> i32 {
        match self {
            Self::Allow => EXIT_SUCCESS,
            Self::Reject => EXIT_REJECTED,
        }
    }
}

/// Reject only when something failed and reject mode is on.
///
/// With `reject_on_failure` off the gate is advisory: failures are reported
/// but the operation is allowed.
#[must_use]
pub const fn decide(verdict: RunVerdict, reject_on_failure: bool) -> ExitSignal {
    if verdict.is_fail() && reject_on_failure {
        ExitSignal::Reject
    } else {
        ExitSignal::Allow
    }
}
