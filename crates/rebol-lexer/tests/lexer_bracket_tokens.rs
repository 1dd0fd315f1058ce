mod support;

use pretty_assertions::assert_eq;
use rebol_syntax::{ScanErrorKind, ScanOptions, Value};
use support::{scan, scan_with};

#[test]
fn scans_nested_block() {
    assert_eq!(
        scan("[1 [2 3] 4]"),
        vec![Value::Block(vec![
            Value::Integer(1),
            Value::Block(vec![Value::Integer(2), Value::Integer(3)]),
            Value::Integer(4),
        ])]
    );
}

#[test]
fn scans_paren_expression() {
    assert_eq!(scan("(1 + 2)"), vec![Value::Paren(vec![Value::Integer(1), Value::Word("+".into()), Value::Integer(2)])]);
}

#[test]
fn unclosed_block_is_a_missing_error() {
    let err = rebol_lexer::scan_source(b"[1 2", ScanOptions::new()).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::Missing);
}

#[test]
fn stray_close_bracket_is_a_missing_error() {
    let err = rebol_lexer::scan_source(b"1 2]", ScanOptions::new()).unwrap_err();
    assert_eq!(err.kind, ScanErrorKind::Missing);
}

#[test]
fn only_option_keeps_nested_block_as_raw_text() {
    let values = scan_with("[1 [2 3] 4]", ScanOptions::new().only(true));
    assert_eq!(values, vec![Value::String("[1 [2 3] 4]".into())]);
}

#[test]
fn next_option_stops_after_the_first_top_level_value() {
    let values = scan_with("[1 2] 3", ScanOptions::new().next(true));
    assert_eq!(values.len(), 1);
}

#[test]
fn scans_simple_path() {
    let values = scan("a/b/c");
    match &values[0] {
        Value::Path(segments) => {
            assert_eq!(segments, &vec![Value::Word("a".into()), Value::Word("b".into()), Value::Word("c".into())]);
        }
        other => panic!("expected a path, got {other:?}"),
    }
}

#[test]
fn elided_path_segment_becomes_none() {
    let values = scan("a//b");
    match &values[0] {
        Value::Path(segments) => {
            assert_eq!(segments, &vec![Value::Word("a".into()), Value::None, Value::Word("b".into())]);
        }
        other => panic!("expected a path, got {other:?}"),
    }
}

#[test]
fn path_over_a_block_segment_nests_the_block() {
    let values = scan("a/(1 + 2)");
    match &values[0] {
        Value::Path(segments) => {
            assert_eq!(segments[0], Value::Word("a".into()));
            assert_eq!(segments[1], Value::Paren(vec![Value::Integer(1), Value::Word("+".into()), Value::Integer(2)]));
        }
        other => panic!("expected a path, got {other:?}"),
    }
}
