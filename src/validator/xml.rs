//! Well-formedness check for XML files.
//!
//! The reader never expands DTD-declared entities and never resolves external
//! ones, so entity-expansion and external-entity payloads cannot take effect:
//! a reference to anything but the predefined or numeric entities fails.

use crate::candidate::CandidateFile;
use crate::config::Configuration;

use super::{ValidationOutcome, Validator, ValidatorKind};

#[derive(Debug, Default, Clone, Copy)]
pub struct XmlValidator;

impl Validator for XmlValidator {
    fn kind(&self) -> ValidatorKind {
        ValidatorKind::Xml
    }

    fn is_enabled(&self, config: &Configuration) -> bool {
        config.enable_xml
    }

    fn validate(&self, file: &CandidateFile, _config: &Configuration) -> ValidationOutcome {
        let name = file.display_name();
        let payload = match file.payload() {
            Ok(payload) => payload,
            Err(e) => return ValidationOutcome::fail(name, self.kind(), format!("cannot read: {e}")),
        };

        if payload.is_empty() {
            return ValidationOutcome::pass(name, self.kind()).with_message("empty, skipped");
        }

        match check_well_formed(payload) {
            Ok(()) => ValidationOutcome::pass(name, self.kind()),
            Err(message) => ValidationOutcome::fail(name, self.kind(), message),
        }
    }
}

/// Streams through the document; returns the first well-formedness error.
///
/// # Errors
/// Returns a message with the byte offset of the first problem.
#[cfg(feature = "xml")]
pub fn check_well_formed(payload: &[u8]) -> Result<(), String> {
    use quick_xml::Reader;
    use quick_xml::events::Event;

    let mut reader = Reader::from_reader(payload);
    reader.config_mut().check_end_names = true;

    let mut buf = Vec::new();
    let mut depth = 0usize;
    let mut seen_root = false;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| format!("{e} (at byte {})", reader.error_position()))?;

        match event {
            Event::Start(ref start) | Event::Empty(ref start) => {
                if depth == 0 && seen_root {
                    return Err(format!(
                        "junk after document element (at byte {})",
                        reader.buffer_position()
                    ));
                }
                for attr in start.attributes() {
                    let attr = attr.map_err(|e| format!("malformed attribute: {e}"))?;
                    attr.unescape_value()
                        .map_err(|e| format!("malformed attribute value: {e}"))?;
                }
                seen_root = true;
                if matches!(event, Event::Start(_)) {
                    depth += 1;
                }
            }
            Event::End(_) => depth = depth.saturating_sub(1),
            Event::Text(ref text) => {
                text.unescape().map_err(|e| {
                    format!("{e} (at byte {})", reader.buffer_position())
                })?;
                if depth == 0 && !text.iter().all(u8::is_ascii_whitespace) {
                    return Err(format!(
                        "text outside the document element (at byte {})",
                        reader.buffer_position()
                    ));
                }
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if !seen_root {
        return Err("no element found".to_string());
    }
    if depth > 0 {
        return Err(format!("{depth} unclosed element(s) at end of document"));
    }
    Ok(())
}

/// Without XML support every non-empty document fails; startup aborts before this runs.
///
/// # Errors
/// Always returns an error naming the missing parser.
#[cfg(not(feature = "xml"))]
pub fn check_well_formed(_payload: &[u8]) -> Result<(), String> {
    Err("XML support (quick-xml) is not available in this build".to_string())
}

#[cfg(all(test, feature = "xml"))]
#[path = "xml_tests.rs"]
mod tests;
