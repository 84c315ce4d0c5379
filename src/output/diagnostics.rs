use std::io::Write;

use crate::candidate::CandidateFile;
use crate::checker::{ExitSignal, OutcomeSink, RunReport};
use crate::validator::{Status, ValidationOutcome};

use super::ColorMode;
use super::ansi;

/// Prints one line per validator outcome as each file finishes.
///
/// Failures are always printed. Passing outcomes only show up in verbose mode,
/// and `quiet` drops the closing summary line.
pub struct DiagnosticPrinter<W: Write> {
    writer: W,
    use_colors: bool,
    verbose: bool,
    quiet: bool,
}

impl DiagnosticPrinter<std::io::Stdout> {
    #[must_use]
    pub fn stdout(mode: ColorMode, verbose: bool, quiet: bool) -> Self {
        Self::new(std::io::stdout(), mode.for_stdout(), verbose, quiet)
    }
}

impl<W: Write> DiagnosticPrinter<W> {
    #[must_use]
    pub const fn new(writer: W, use_colors: bool, verbose: bool, quiet: bool) -> Self {
        Self {
            writer,
            use_colors,
            verbose,
            quiet,
        }
    }

    pub fn into_inner(self) -> W {
        self.writer
    }

    fn paint(&self, text: &str, color: &str) -> String {
        if self.use_colors {
            format!("{color}{text}{}", ansi::RESET)
        } else {
            text.to_string()
        }
    }

    fn write_outcome(&mut self, outcome: &ValidationOutcome) {
        let line = match outcome.status {
            Status::Fail => {
                let status = self.paint("FAILED", ansi::RED);
                let cause = outcome.message.as_deref().unwrap_or("validation failed");
                format!("✗ {status} [{}] {}: {cause}", outcome.kind, outcome.filename)
            }
            Status::Pass => {
                let status = self.paint("PASSED", ansi::GREEN);
                match &outcome.message {
                    Some(note) => {
                        format!("✓ {status} [{}] {} ({note})", outcome.kind, outcome.filename)
                    }
                    None => format!("✓ {status} [{}] {}", outcome.kind, outcome.filename),
                }
            }
        };
        writeln!(self.writer, "{line}").ok();
    }

    /// Closing line: files checked, failure count, and what the policy decided.
    pub fn summary(&mut self, report: &RunReport, signal: ExitSignal) {
        if self.quiet {
            return;
        }
        let failures = report.failures().count();
        let decision = match (failures, signal) {
            (0, _) => self.paint("passed", ansi::GREEN),
            (_, ExitSignal::Reject) => self.paint("rejected", ansi::RED),
            (_, ExitSignal::Allow) => self.paint("allowed (advisory mode)", ansi::YELLOW),
        };
        writeln!(
            self.writer,
            "commit-guard: {} file(s) checked, {failures} failure(s): {decision}",
            report.files_checked()
        )
        .ok();
        self.writer.flush().ok();
    }
}

impl<W: Write> OutcomeSink for DiagnosticPrinter<W> {
    fn file_checked(&mut self, _file: &CandidateFile, outcomes: &[ValidationOutcome]) {
        for outcome in outcomes {
            if outcome.is_failed() || (self.verbose && !self.quiet) {
                self.write_outcome(outcome);
            }
        }
        // Lines must reach the hook's output before the next file starts.
        self.writer.flush().ok();
    }
}

#[cfg(test)]
#[path = "diagnostics_tests.rs"]
mod tests;
