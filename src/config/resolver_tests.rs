use std::collections::HashMap;
use std::io::{Error, ErrorKind};
use std::path::{Path, PathBuf};

use super::*;

const CONFIG: &str = "/repo/.commit-guard.conf";

struct MockFileSystem {
    files: HashMap<PathBuf, String>,
    unreadable: Vec<PathBuf>,
}

impl MockFileSystem {
    fn new() -> Self {
        Self {
            files: HashMap::new(),
            unreadable: Vec::new(),
        }
    }

    fn with_file(mut self, path: &str, content: &str) -> Self {
        self.files.insert(PathBuf::from(path), content.to_string());
        self
    }

    fn with_unreadable(mut self, path: &str) -> Self {
        self.unreadable.push(PathBuf::from(path));
        self
    }
}

impl FileSystem for MockFileSystem {
    fn read_to_string(&self, path: &Path) -> std::io::Result<String> {
        if self.unreadable.iter().any(|p| p == path) {
            return Err(Error::new(ErrorKind::PermissionDenied, "permission denied"));
        }
        self.files
            .get(path)
            .cloned()
            .ok_or_else(|| Error::new(ErrorKind::NotFound, "file not found"))
    }

    fn exists(&self, path: &Path) -> bool {
        self.files.contains_key(path) || self.unreadable.iter().any(|p| p == path)
    }
}

const FULL: Capabilities = Capabilities {
    xml: true,
    yaml: true,
};

fn resolve_with(content: &str, explicit: &ExplicitOptions) -> ResolveResult {
    let fs = MockFileSystem::new().with_file(CONFIG, content);
    ConfigResolver::with_fs(fs, FULL).resolve(explicit, Path::new(CONFIG))
}

fn resolve(content: &str) -> ResolveResult {
    resolve_with(content, &ExplicitOptions::default())
}

#[test]
fn reads_every_recognized_key() {
    let result = resolve(
        "docbuilder: yes\npython: true\nreject: true\ntreshold: 7.5\nverbose: on\nxml: true\nyaml: true\n",
    );
    let config = result.config;
    assert!(config.enable_docbuilder);
    assert!(config.enable_python);
    assert!(config.reject_on_failure);
    assert!((config.score_threshold - 7.5).abs() < f64::EPSILON);
    assert!(config.verbose);
    assert!(config.enable_xml);
    assert!(config.enable_yaml);
    assert_eq!(config.config_path, PathBuf::from(CONFIG));
    assert!(result.warnings.is_empty());
}

#[test]
fn absent_keys_default_to_disabled() {
    let result = resolve("xml: true\n");
    let config = result.config;
    assert!(config.enable_xml);
    assert!(!config.enable_yaml);
    assert!(!config.enable_python);
    assert!(!config.reject_on_failure);
    assert!(!config.verbose);
    assert!(config.score_threshold.abs() < f64::EPSILON);
}

#[test]
fn literal_false_disables() {
    let config = resolve("xml: False\nreject: false\n").config;
    assert!(!config.enable_xml);
    assert!(!config.reject_on_failure);
}

#[test]
fn unparsable_threshold_coerces_to_zero_with_warning() {
    let result = resolve("treshold: abc\npython: false\n");
    assert!(result.config.score_threshold.abs() < f64::EPSILON);
    assert!(!result.config.python_lint_active());
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("abc"));
}

#[test]
fn negative_threshold_coerces_to_zero() {
    let result = resolve("treshold: -3\n");
    assert!(result.config.score_threshold.abs() < f64::EPSILON);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn non_finite_threshold_coerces_to_zero() {
    let result = resolve("treshold: inf\n");
    assert!(result.config.score_threshold.abs() < f64::EPSILON);
    assert_eq!(result.warnings.len(), 1);
}

#[test]
fn explicit_options_override_file_for_every_key() {
    let file = "docbuilder: true\npython: true\nreject: true\ntreshold: 9\nverbose: true\nxml: true\nyaml: true\n";
    let explicit = ExplicitOptions {
        docbuilder: Some(false),
        python: Some(false),
        reject: Some(false),
        threshold: Some(2.5),
        verbose: Some(false),
        xml: Some(false),
        yaml: Some(false),
    };
    let config = resolve_with(file, &explicit).config;

    assert!(!config.enable_docbuilder);
    assert!(!config.enable_python);
    assert!(!config.reject_on_failure);
    assert!((config.score_threshold - 2.5).abs() < f64::EPSILON);
    assert!(!config.verbose);
    assert!(!config.enable_xml);
    assert!(!config.enable_yaml);
}

#[test]
fn explicit_true_enables_key_absent_from_file() {
    let explicit = ExplicitOptions {
        xml: Some(true),
        reject: Some(true),
        ..ExplicitOptions::default()
    };
    let config = resolve_with("", &explicit).config;
    assert!(config.enable_xml);
    assert!(config.reject_on_failure);
}

#[test]
fn explicit_threshold_ignores_bad_file_value() {
    let explicit = ExplicitOptions {
        threshold: Some(6.0),
        ..ExplicitOptions::default()
    };
    let result = resolve_with("treshold: abc\n", &explicit);
    assert!((result.config.score_threshold - 6.0).abs() < f64::EPSILON);
    assert!(result.warnings.is_empty());
}

#[test]
fn missing_config_file_uses_defaults() {
    let resolver = ConfigResolver::with_fs(MockFileSystem::new(), FULL);
    let result = resolver.resolve(&ExplicitOptions::default(), Path::new(CONFIG));

    assert_eq!(
        result.config,
        Configuration {
            config_path: PathBuf::from(CONFIG),
            ..Configuration::default()
        }
    );
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("not found"));
}

#[test]
fn unreadable_config_file_uses_defaults() {
    let fs = MockFileSystem::new().with_unreadable(CONFIG);
    let explicit = ExplicitOptions {
        xml: Some(true),
        ..ExplicitOptions::default()
    };
    let result = ConfigResolver::with_fs(fs, FULL).resolve(&explicit, Path::new(CONFIG));

    assert!(result.config.enable_xml);
    assert!(!result.config.reject_on_failure);
    assert!(result.warnings[0].contains("not readable"));
}

#[test]
fn yaml_forced_off_without_yaml_support() {
    let fs = MockFileSystem::new().with_file(CONFIG, "yaml: true\nxml: true\n");
    let caps = Capabilities {
        xml: true,
        yaml: false,
    };
    let result = ConfigResolver::with_fs(fs, caps).resolve(&ExplicitOptions::default(), Path::new(CONFIG));

    assert!(!result.config.enable_yaml);
    assert!(result.config.enable_xml);
    assert_eq!(result.warnings.len(), 1);
    assert!(result.warnings[0].contains("YAML"));
}

#[test]
fn unknown_keys_and_malformed_lines_warn() {
    let result = resolve("xml: true\nmarkdown: true\ngarbage\n");
    assert!(result.config.enable_xml);
    assert_eq!(result.warnings.len(), 2);
    assert!(result.warnings.iter().any(|w| w.contains("markdown")));
    assert!(result.warnings.iter().any(|w| w.contains(":3:")));
}

#[test]
fn merge_flag_precedence() {
    assert!(merge_flag(Some(true), Some("false")));
    assert!(!merge_flag(Some(false), Some("true")));
    assert!(merge_flag(None, Some("yes")));
    assert!(!merge_flag(None, Some("false")));
    assert!(!merge_flag(None, None));
}
