use crate::candidate::memory::{candidate, missing};
use crate::validator::Status;

use super::*;

fn xml_config() -> Configuration {
    Configuration {
        enable_xml: true,
        ..Configuration::default()
    }
}

fn validate(content: &[u8]) -> ValidationOutcome {
    XmlValidator.validate(&candidate("a.xml", content), &xml_config())
}

#[test]
fn enabled_only_by_xml_flag() {
    assert!(XmlValidator.is_enabled(&xml_config()));
    assert!(!XmlValidator.is_enabled(&Configuration::default()));
}

#[test]
fn well_formed_document_passes() {
    let outcome = validate(b"<?xml version=\"1.0\"?>\n<project><name a=\"1\">x &amp; y</name><empty/></project>\n");
    assert_eq!(outcome.status, Status::Pass);
    assert_eq!(outcome.filename, "a.xml");
    assert_eq!(outcome.kind, ValidatorKind::Xml);
}

#[test]
fn empty_payload_is_skipped_as_pass() {
    let outcome = validate(b"");
    assert_eq!(outcome.status, Status::Pass);
    assert!(outcome.message.unwrap().contains("skipped"));
}

#[test]
fn mismatched_tags_fail() {
    let outcome = validate(b"<a><b></a>");
    assert_eq!(outcome.status, Status::Fail);
    assert!(outcome.message.is_some());
}

#[test]
fn unclosed_element_fails() {
    let outcome = validate(b"<a><b></b>");
    assert_eq!(outcome.status, Status::Fail);
    assert!(outcome.message.unwrap().contains("unclosed"));
}

#[test]
fn whitespace_only_document_fails() {
    let outcome = validate(b"  \n");
    assert_eq!(outcome.status, Status::Fail);
    assert_eq!(outcome.message.as_deref(), Some("no element found"));
}

#[test]
fn second_root_element_fails() {
    let outcome = validate(b"<a/><b/>");
    assert_eq!(outcome.status, Status::Fail);
}

#[test]
fn text_outside_root_fails() {
    let outcome = validate(b"<a/>trailing");
    assert_eq!(outcome.status, Status::Fail);
}

#[test]
fn undeclared_entity_is_not_expanded() {
    let outcome = validate(b"<a>&undefined;</a>");
    assert_eq!(outcome.status, Status::Fail);
}

#[test]
fn external_entity_is_never_resolved() {
    let doc = b"<?xml version=\"1.0\"?>\n<!DOCTYPE foo [<!ENTITY xxe SYSTEM \"file:///etc/passwd\">]>\n<foo>&xxe;</foo>";
    let outcome = validate(doc);
    assert_eq!(outcome.status, Status::Fail);
}

#[test]
fn numeric_character_references_pass() {
    assert_eq!(validate(b"<a>&#65;&#x42;</a>").status, Status::Pass);
}

#[test]
fn unreadable_payload_fails() {
    let outcome = XmlValidator.validate(&missing("gone.xml"), &xml_config());
    assert_eq!(outcome.status, Status::Fail);
    assert!(outcome.message.unwrap().contains("cannot read"));
}
