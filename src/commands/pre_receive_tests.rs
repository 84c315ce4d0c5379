use super::*;

#[test]
fn parses_single_update() {
    let updates = parse_push_lines("aaa bbb refs/heads/main\n").unwrap();
    assert_eq!(
        updates,
        vec![PushUpdate {
            old: "aaa".to_string(),
            new: "bbb".to_string(),
            ref_name: "refs/heads/main".to_string(),
        }]
    );
}

#[test]
fn parses_multiple_updates_with_extra_spacing() {
    let updates = parse_push_lines("a1  b1\trefs/heads/main\na2 b2 refs/tags/v1\n").unwrap();
    assert_eq!(updates.len(), 2);
    assert_eq!(updates[0].ref_name, "refs/heads/main");
    assert_eq!(updates[1].old, "a2");
}

#[test]
fn empty_input_is_rejected() {
    assert!(matches!(parse_push_lines(""), Err(GuardError::HookInput(_))));
}

#[test]
fn two_tokens_are_rejected() {
    let err = parse_push_lines("aaa bbb\n").unwrap_err();
    assert!(matches!(err, GuardError::HookInput(_)));
    assert!(err.message().contains("line 1: expected 3 fields, found 2"));
}

#[test]
fn four_tokens_are_rejected() {
    assert!(parse_push_lines("a b c d\n").is_err());
}

#[test]
fn malformed_later_line_is_rejected() {
    let err = parse_push_lines("a b refs/heads/main\n\n").unwrap_err();
    assert!(err.message().contains("line 2"));
}
