//! Public API surface (§6): the small set of entry points the rest of the
//! REBOL toolchain calls into — load a whole source, probe for a script
//! header, validate a lone word or issue lexeme, or transcode a prefix of
//! a byte stream and report how far it got.

use rebol_syntax::{ScanError, ScanOptions, Value};

use crate::byte_class::{self, LexClass};
use crate::cursor::Cursor;
use crate::header::{self, HeaderKind};
use crate::scanner::Scanner;

/// Scans an entire source buffer into a flat top-level block of values.
/// Equivalent to `Scan_Code` called over the whole input (§4.1, §4.8).
pub fn scan_source(source: &[u8], options: ScanOptions) -> Result<Vec<Value>, ScanError> {
    tracing::trace!(bytes = source.len(), ?options, "scan_source starting");
    let mut scanner = Scanner::new(source, options);
    scanner.scan_top()
}

/// Scans a source buffer and also reports the byte offset where scanning
/// stopped — the `NEXT` option calls into this to find the position at
/// which parsing should resume on recursive composition (§9 "transcode
/// position return").
pub fn transcode(source: &[u8], options: ScanOptions) -> Result<(Vec<Value>, usize), ScanError> {
    let mut scanner = Scanner::new(source, options);
    let values = scanner.scan_top()?;
    Ok((values, scanner.position()))
}

/// Locates a `REBOL [...]` header in `source`. Returns the byte offset of
/// the header's opening `R`/`r` (or of a preceding embedded `[` — see
/// [`header::scan_head`]), or `None` if no header is present.
pub fn scan_header(source: &[u8]) -> Option<usize> {
    let scan = header::scan_head(source);
    match scan.kind {
        HeaderKind::None => None,
        HeaderKind::Plain | HeaderKind::Embedded => Some(scan.offset),
    }
}

/// Validates and returns a single WORD lexeme spanning all of `source`, or
/// `None` if `source` is empty or contains anything but word/number-class
/// bytes bounded appropriately (§4.2's WORD lexical class, used when
/// interning a bare identifier rather than scanning a full program).
pub fn scan_word(source: &[u8]) -> Option<String> {
    if source.is_empty() {
        return None;
    }
    let first = byte_class::classify(source[0]);
    if first.class() != LexClass::Word {
        return None;
    }
    let mut cursor = Cursor::new(source);
    cursor.advance_while(|c| c.class() == LexClass::Word || c.class() == LexClass::Number);
    if cursor.position() != source.len() {
        return None;
    }
    std::str::from_utf8(source).ok().map(str::to_string)
}

/// Like [`scan_word`], but additionally allows the extra punctuation an
/// ISSUE lexeme permits (`'`, `,`, `.`, `+`, `-`, `<`, `>` — §4.7's ISSUE
/// arm of `classify_pound`).
pub fn scan_issue(source: &[u8]) -> Option<String> {
    if source.is_empty() {
        return None;
    }
    fn issue_byte(b: u8) -> bool {
        let class = byte_class::classify(b).class();
        matches!(class, LexClass::Word | LexClass::Number)
            || matches!(b, b'\'' | b',' | b'.' | b'+' | b'-' | b'<' | b'>')
    }
    if !source.iter().all(|&b| issue_byte(b)) {
        return None;
    }
    std::str::from_utf8(source).ok().map(str::to_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scans_source_into_a_flat_block() {
        let values = scan_source(b"1 + 2", ScanOptions::new()).unwrap();
        assert_eq!(values.len(), 3);
    }

    #[test]
    fn transcode_reports_stop_position() {
        let (values, pos) = transcode(b"1 2 3", ScanOptions::new().next(true)).unwrap();
        assert_eq!(values.len(), 1);
        assert!(pos < 5);
    }

    #[test]
    fn scan_header_finds_offset() {
        let pos = scan_header(b"  REBOL [title: \"x\"]");
        assert_eq!(pos, Some(2));
    }

    #[test]
    fn scan_header_returns_none_without_header() {
        assert_eq!(scan_header(b"print 1"), None);
    }

    #[test]
    fn scan_word_validates_a_lone_identifier() {
        assert_eq!(scan_word(b"foo-bar?"), Some("foo-bar?".to_string()));
        assert_eq!(scan_word(b"foo bar"), None);
        assert_eq!(scan_word(b""), None);
    }

    #[test]
    fn scan_issue_allows_issue_punctuation() {
        assert_eq!(scan_issue(b"123-456-789"), Some("123-456-789".to_string()));
    }
}
