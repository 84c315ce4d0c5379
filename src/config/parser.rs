//! Line-oriented `key: value` configuration format.
//!
//! ```text
//! # comment
//! xml: true
//! reject: false
//! treshold: 7.5
//! ```

use indexmap::IndexMap;

/// Raw entries of a configuration file, in file order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeyValueFile {
    /// Lowercased key to trimmed value. The first occurrence of a key wins.
    pub entries: IndexMap<String, String>,
    /// 1-based numbers of lines that are neither blank, a comment, nor `key: value`.
    pub malformed_lines: Vec<usize>,
}

impl KeyValueFile {
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }
}

#[must_use]
pub fn parse_key_values(content: &str) -> KeyValueFile {
    let mut parsed = KeyValueFile::default();

    for (idx, line) in content.lines().enumerate() {
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let Some((key, value)) = line.split_once(':') else {
            parsed.malformed_lines.push(idx + 1);
            continue;
        };
        let key = key.trim();
        if key.is_empty() || key.contains(char::is_whitespace) {
            parsed.malformed_lines.push(idx + 1);
            continue;
        }

        parsed
            .entries
            .entry(key.to_lowercase())
            .or_insert_with(|| value.trim().to_string());
    }

    parsed
}

/// Boolean coercion: only the literal `false` (any case) disables.
#[must_use]
pub fn is_enabled(value: &str) -> bool {
    !value.trim().eq_ignore_ascii_case("false")
}

#[cfg(test)]
#[path = "parser_tests.rs"]
mod tests;
