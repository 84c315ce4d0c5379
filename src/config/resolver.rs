use std::path::Path;

use crate::capabilities::Capabilities;

use super::filesystem::{FileSystem, RealFileSystem};
use super::model::{ConfigKey, Configuration, ExplicitOptions};
use super::parser::{KeyValueFile, is_enabled, parse_key_values};

/// Outcome of resolving the configuration.
///
/// Resolution never fails; problems that made it fall back to a default are
/// returned as `warnings` so the caller decides how to report them.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolveResult {
    pub config: Configuration,
    pub warnings: Vec<String>,
}

/// Merges explicit options, the configuration file, and defaults.
///
/// Precedence per key: explicit option, then file, then `false` / `0`.
pub struct ConfigResolver<F: FileSystem = RealFileSystem> {
    fs: F,
    capabilities: Capabilities,
}

impl ConfigResolver<RealFileSystem> {
    #[must_use]
    pub fn new(capabilities: Capabilities) -> Self {
        Self::with_fs(RealFileSystem, capabilities)
    }
}

impl<F: FileSystem> ConfigResolver<F> {
    pub const fn with_fs(fs: F, capabilities: Capabilities) -> Self {
        Self { fs, capabilities }
    }

    #[must_use]
    pub fn resolve(&self, explicit: &ExplicitOptions, config_path: &Path) -> ResolveResult {
        let mut warnings = Vec::new();
        let file = self.read_config_file(config_path, &mut warnings);

        for line in &file.malformed_lines {
            warnings.push(format!(
                "{}:{line}: expected 'key: value', line ignored",
                config_path.display()
            ));
        }
        for key in file.entries.keys() {
            if ConfigKey::from_name(key).is_none() {
                warnings.push(format!(
                    "{}: unknown key '{key}' ignored",
                    config_path.display()
                ));
            }
        }

        let flag = |key: ConfigKey| merge_flag(explicit.flag(key), file.get(key.as_str()));

        let score_threshold = match explicit.threshold {
            Some(value) => sanitize_threshold(value, "--threshold", &mut warnings),
            None => file.get(ConfigKey::Threshold.as_str()).map_or(0.0, |raw| {
                parse_threshold(raw, config_path, &mut warnings)
            }),
        };

        let mut enable_yaml = flag(ConfigKey::Yaml);
        if enable_yaml && !self.capabilities.yaml {
            warnings.push(
                "YAML support is not available in this build; YAML validation disabled"
                    .to_string(),
            );
            enable_yaml = false;
        }

        let config = Configuration {
            config_path: config_path.to_path_buf(),
            reject_on_failure: flag(ConfigKey::Reject),
            enable_python: flag(ConfigKey::Python),
            enable_xml: flag(ConfigKey::Xml),
            enable_yaml,
            enable_docbuilder: flag(ConfigKey::Docbuilder),
            score_threshold,
            verbose: flag(ConfigKey::Verbose),
        };
        tracing::debug!(?config, warnings = warnings.len(), "configuration resolved");

        ResolveResult { config, warnings }
    }

    fn read_config_file(&self, path: &Path, warnings: &mut Vec<String>) -> KeyValueFile {
        if !self.fs.exists(path) {
            warnings.push(format!(
                "configuration file {} not found; using defaults",
                path.display()
            ));
            return KeyValueFile::default();
        }
        match self.fs.read_to_string(path) {
            Ok(content) => parse_key_values(&content),
            Err(e) => {
                warnings.push(format!(
                    "configuration file {} is not readable ({e}); using defaults",
                    path.display()
                ));
                KeyValueFile::default()
            }
        }
    }
}

/// An explicit value always wins; otherwise a present file value is coerced; otherwise off.
#[must_use]
pub fn merge_flag(explicit: Option<bool>, file_value: Option<&str>) -> bool {
    explicit.unwrap_or_else(|| file_value.is_some_and(is_enabled))
}

fn parse_threshold(raw: &str, config_path: &Path, warnings: &mut Vec<String>) -> f64 {
    match raw.trim().parse::<f64>() {
        Ok(value) => sanitize_threshold(value, "treshold", warnings),
        Err(_) => {
            warnings.push(format!(
                "{}: treshold '{raw}' is not a number; score threshold disabled",
                config_path.display()
            ));
            0.0
        }
    }
}

fn sanitize_threshold(value: f64, origin: &str, warnings: &mut Vec<String>) -> f64 {
    if value.is_finite() && value >= 0.0 {
        value
    } else {
        warnings.push(format!(
            "{origin} must be a finite non-negative number, got {value}; score threshold disabled"
        ));
        0.0
    }
}

#[cfg(test)]
#[path = "resolver_tests.rs"]
mod tests;
