#![cfg(target_arch = "wasm32")]

use rebol_lexer::wasm::Lexer;
use wasm_bindgen_test::*;

wasm_bindgen_test_configure!();

#[wasm_bindgen_test]
fn scans_arithmetic_expression() {
    let lexer = Lexer::new(b"1 + 2");
    let outcome = lexer.scan(false, false, false);
    assert!(outcome.ok());
    assert_eq!(outcome.text(), "1 + 2");
}

#[wasm_bindgen_test]
fn reports_error_message_on_malformed_input() {
    let lexer = Lexer::new(b"[1 2");
    let outcome = lexer.scan(false, false, false);
    assert!(!outcome.ok());
    assert!(!outcome.error().is_empty());
}

#[wasm_bindgen_test]
fn finds_script_header_offset() {
    let lexer = Lexer::new(b"REBOL [title: \"demo\"]");
    assert_eq!(lexer.scan_header(), 0);
}

#[wasm_bindgen_test]
fn reports_no_header_as_negative_one() {
    let lexer = Lexer::new(b"print 1");
    assert_eq!(lexer.scan_header(), -1);
}
