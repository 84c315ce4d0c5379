use std::path::PathBuf;

use serde::Serialize;

/// Default configuration file name, looked up at the repository root.
pub const DEFAULT_CONFIG_NAME: &str = ".commit-guard.conf";

/// Keys recognized in the configuration file.
///
/// `treshold` keeps the historical spelling so existing hook configs keep working.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigKey {
    Docbuilder,
    Python,
    Reject,
    Threshold,
    Verbose,
    Xml,
    Yaml,
}

impl ConfigKey {
    pub const ALL: [Self; 7] = [
        Self::Docbuilder,
        Self::Python,
        Self::Reject,
        Self::Threshold,
        Self::Verbose,
        Self::Xml,
        Self::Yaml,
    ];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Docbuilder => "docbuilder",
            Self::Python => "python",
            Self::Reject => "reject",
            Self::Threshold => "treshold",
            Self::Verbose => "verbose",
            Self::Xml => "xml",
            Self::Yaml => "yaml",
        }
    }

    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|key| key.as_str() == name)
    }
}

/// Options supplied directly by the caller (command line).
///
/// `None` means "not given"; the configuration file or the default decides.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExplicitOptions {
    pub docbuilder: Option<bool>,
    pub python: Option<bool>,
    pub reject: Option<bool>,
    pub threshold: Option<f64>,
    pub verbose: Option<bool>,
    pub xml: Option<bool>,
    pub yaml: Option<bool>,
}

impl ExplicitOptions {
    #[must_use]
    pub const fn flag(&self, key: ConfigKey) -> Option<bool> {
        match key {
            ConfigKey::Docbuilder => self.docbuilder,
            ConfigKey::Python => self.python,
            ConfigKey::Reject => self.reject,
            ConfigKey::Verbose => self.verbose,
            ConfigKey::Xml => self.xml,
            ConfigKey::Yaml => self.yaml,
            ConfigKey::Threshold => None,
        }
    }
}

/// Resolved settings for one run.
///
/// Built once by the resolver and only ever handed out by reference.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Configuration {
    pub config_path: PathBuf,
    pub reject_on_failure: bool,
    pub enable_python: bool,
    pub enable_xml: bool,
    pub enable_yaml: bool,
    /// Recognized for compatibility with existing hook configs; no validator reads it.
    pub enable_docbuilder: bool,
    /// Minimum lint score; `0.0` disables the score check.
    pub score_threshold: f64,
    pub verbose: bool,
}

impl Configuration {
    /// The lint plugin runs when enabled explicitly or when a threshold is set.
    #[must_use]
    pub fn python_lint_active(&self) -> bool {
        self.enable_python || self.score_threshold != 0.0
    }
}

#[cfg(test)]
#[path = "model_tests.rs"]
mod tests;
