use crate::candidate::CandidateFile;
use crate::config::Configuration;

use super::{ValidationOutcome, Validator, ValidatorKind};

/// Loads each YAML document as plain data; tags never construct anything.
#[derive(Debug, Default, Clone, Copy)]
pub struct YamlValidator;

impl Validator for YamlValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Yaml
    }

    fn is_enabled(&self, config: &Configuration) -> bool {
        config.enable_yaml
    }

    fn validate(&self, file: &CandidateFile, _config: &Configuration) -> ValidationOutcome {
        let name = file.display_name();
        let payload = match file.payload() {
            Ok(payload) => payload,
            Err(e) => return ValidationOutcome::fail(name, self.kind(), format!("cannot open: {e}")),
        };

        // Unlike XML, an empty YAML payload is treated as a file that could not be opened.
        if payload.is_empty() {
            return ValidationOutcome::fail(name, self.kind(), "cannot open: file is empty");
        }

        match load_documents(payload) {
            Ok(()) => ValidationOutcome::pass(name, self.kind()),
            Err(message) => ValidationOutcome::fail(name, self.kind(), message),
        }
    }
}

/// # Errors
/// Returns the parser message of the first document that fails to load.
#[cfg(feature = "yaml")]
pub fn load_documents(payload: &[u8]) -> Result<(), String> {
    use serde::Deserialize;

    for document in serde_yaml::Deserializer::from_slice(payload) {
        serde_yaml::Value::deserialize(document).map_err(|e| e.to_string())?;
    }
    Ok(())
}

/// # Errors
/// Always fails; the resolver disables YAML validation in builds without it.
#[cfg(not(feature = "yaml"))]
pub fn load_documents(_payload: &[u8]) -> Result<(), String> {
    Err("YAML support (serde_yaml) is not available in this build".to_string())
}

#[cfg(all(test, feature = "yaml"))]
#[path = "yaml_tests.rs"]
mod tests;
