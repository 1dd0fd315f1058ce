mod support;

use pretty_assertions::assert_eq;
use rebol_lexer::scan_header;
use rebol_syntax::{ScanOptions, Value};
use support::scan_with;

#[test]
fn finds_plain_header_offset() {
    assert_eq!(scan_header(b"REBOL [title: \"demo\"]"), Some(0));
}

#[test]
fn finds_header_after_leading_comment() {
    let src = b"; copyright notice\nREBOL [title: \"demo\"]";
    assert_eq!(scan_header(src), Some(19));
}

#[test]
fn reports_embedded_header_at_the_earlier_bracket() {
    let src = b"[ignored] REBOL [title: \"demo\"]";
    assert_eq!(scan_header(src), Some(0));
}

#[test]
fn no_header_returns_none() {
    assert_eq!(scan_header(b"print \"hi\""), None);
}

#[test]
fn relax_mode_embeds_ill_formed_lit_set_word_as_an_error_value() {
    let values = scan_with("'foo: 'bar", ScanOptions::new().relax(true));
    assert_eq!(values.len(), 2);
    assert!(matches!(values[0], Value::Error(_)));
    assert_eq!(values[1], Value::LitWord("bar".into()));
}

#[test]
fn relax_mode_preserves_one_value_per_top_level_lexeme() {
    let values = scan_with("1 'foo: 2 'bar: 3", ScanOptions::new().relax(true));
    assert_eq!(values.len(), 5);
}
