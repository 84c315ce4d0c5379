use regex::Regex;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("no 'rated at <score>/10' line in lint report")]
pub struct ScoreParseError;

/// Pulls the quality score out of a lint tool's full report.
pub struct ScoreExtractor {
    pattern: Regex,
}

impl Default for ScoreExtractor {
    fn default() -> Self {
        Self::new()
    }
}

impl ScoreExtractor {
    #[must_use]
    pub fn new() -> Self {
        Self {
            pattern: Regex::new(r"rated at (-?\d+(?:\.\d+)?)/10").expect("Invalid regex"),
        }
    }

    /// First `rated at <n>/10` figure in `output`; an empty report scores `0.0`.
    ///
    /// # Errors
    /// Returns `ScoreParseError` when non-empty output has no score line.
    pub fn extract(&self, output: &str) -> Result<f64, ScoreParseError> {
        if output.trim().is_empty() {
            return Ok(0.0);
        }
        self.pattern
            .captures(output)
            .and_then(|caps| caps[1].parse::<f64>().ok())
            .ok_or(ScoreParseError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn extract(output: &str) -> Result<f64, ScoreParseError> {
        ScoreExtractor::new().extract(output)
    }

    #[test]
    fn extracts_score_from_report() {
        let report = "************* Module app\napp.py:1:0: C0114: Missing module docstring\n\n\
                      ------------------------------------------------------------------\n\
                      Your code has been rated at 8.50/10 (previous run: 8.00/10, +0.50)\n";
        assert_eq!(extract(report), Ok(8.5));
    }

    #[test]
    fn negative_score() {
        assert_eq!(extract("Your code has been rated at -1.5/10"), Ok(-1.5));
    }

    #[test]
    fn integer_score() {
        assert_eq!(extract("rated at 10/10"), Ok(10.0));
    }

    #[test]
    fn first_match_wins() {
        assert_eq!(extract("rated at 3.00/10\nrated at 9.00/10\n"), Ok(3.0));
    }

    #[test]
    fn empty_output_scores_zero() {
        assert_eq!(extract(""), Ok(0.0));
        assert_eq!(extract("\n  \n"), Ok(0.0));
    }

    #[test]
    fn output_without_score_is_an_error() {
        assert_eq!(extract("No config file found, using default configuration"), Err(ScoreParseError));
    }
}
