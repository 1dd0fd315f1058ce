use rebol_syntax::{ScanOptions, Value};

/// Scans `src` with default options, panicking on error — the shared
/// happy-path helper every integration test file in this directory uses.
pub fn scan(src: &str) -> Vec<Value> {
    rebol_lexer::scan_source(src.as_bytes(), ScanOptions::new()).expect("scan should succeed")
}

/// Scans `src` with the given options.
pub fn scan_with(src: &str, options: ScanOptions) -> Vec<Value> {
    rebol_lexer::scan_source(src.as_bytes(), options).expect("scan should succeed")
}
