use crate::candidate::CandidateFile;
use crate::validator::ValidatorKind;

/// Path suffixes (lowercase) that select a validator kind.
#[derive(Debug, Clone, Copy)]
struct SuffixRule {
    kind: ValidatorKind,
    suffixes: &'static [&'static str],
}

// `xml"` catches a trailing quote left on quoted paths by some diff output.
const SUFFIX_RULES: &[SuffixRule] = &[
    SuffixRule {
        kind: ValidatorKind::Xml,
        suffixes: &[".xml", "xml\""],
    },
    SuffixRule {
        kind: ValidatorKind::Yaml,
        suffixes: &[".yaml", "yml"],
    },
    SuffixRule {
        kind: ValidatorKind::PythonLint,
        suffixes: &[".py"],
    },
];

/// Maps candidate files to the validators that apply to them.
#[derive(Debug, Default, Clone, Copy)]
pub struct Classifier;

impl Classifier {
    /// Kinds that apply to `file`, in `Xml, Yaml, PythonLint` order, without duplicates.
    ///
    /// Suffix rules are applied first. The interpreter line is only sniffed
    /// when `sniff_interpreter` is set and no suffix already selected
    /// `PythonLint`; it reads a bounded prefix, never the full payload.
    ///
    /// Never fails: when the content is unreadable only the suffix rules apply.
    #[must_use]
    pub fn classify(&self, file: &CandidateFile, sniff_interpreter: bool) -> Vec<ValidatorKind> {
        let name = file.display_name().to_lowercase();
        let mut kinds: Vec<ValidatorKind> = SUFFIX_RULES
            .iter()
            .filter(|rule| rule.suffixes.iter().any(|s| name.ends_with(s)))
            .map(|rule| rule.kind)
            .collect();

        if sniff_interpreter
            && !kinds.contains(&ValidatorKind::PythonLint)
            && file
                .first_line()
                .is_some_and(|line| is_python_interpreter_line(&line))
        {
            kinds.push(ValidatorKind::PythonLint);
        }
        kinds
    }
}

/// True for a `#!` line whose interpreter names python (`#!/usr/bin/env python3`).
fn is_python_interpreter_line(line: &str) -> bool {
    line.starts_with("#!") && line.to_lowercase().contains("python")
}

#[cfg(test)]
#[path = "classifier_tests.rs"]
mod tests;
