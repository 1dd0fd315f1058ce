//! Low-level byte cursor shared by every scanner in this crate.
//!
//! A start/stop-lexeme, advance/peek cursor, extended with line tracking:
//! the block scanner (§4.8 step 8)
//! and the error constructor (§6 "Error object") both need the current
//! line number and a trimmed snippet of its text.

use crate::byte_class::{self, Lex};

pub(crate) struct Cursor<'src> {
    source: &'src [u8],
    position: usize,
    lexeme_start: usize,
    line: u32,
    line_start: usize,
}

impl<'src> Cursor<'src> {
    pub(crate) fn new(source: &'src [u8]) -> Self {
        Self { source, position: 0, lexeme_start: 0, line: 1, line_start: 0 }
    }

    pub(crate) fn position(&self) -> usize {
        self.position
    }

    pub(crate) fn line(&self) -> u32 {
        self.line
    }

    /// Start recording a lexeme from the current position.
    pub(crate) fn start_lexeme(&mut self) {
        self.lexeme_start = self.position;
    }

    /// The bytes recorded since the last `start_lexeme`.
    pub(crate) fn lexeme_bytes(&self) -> &'src [u8] {
        &self.source[self.lexeme_start..self.position]
    }

    pub(crate) fn lexeme_str(&self) -> &'src str {
        std::str::from_utf8(self.lexeme_bytes()).unwrap_or("?")
    }

    /// A whitespace-trimmed slice of the current source line, for
    /// `ScanError::new`'s `nearest` field.
    pub(crate) fn line_snippet(&self) -> &'src str {
        let mut end = self.line_start;
        while end < self.source.len() && self.source[end] != b'\n' && self.source[end] != b'\r' {
            end += 1;
        }
        std::str::from_utf8(&self.source[self.line_start..end]).unwrap_or("?").trim()
    }

    /// Advance the cursor by one byte and return the byte at the new position.
    pub(crate) fn advance(&mut self) -> Option<u8> {
        self.advance_by(1)
    }

    #[inline]
    pub(crate) fn advance_by(&mut self, offset: usize) -> Option<u8> {
        debug_assert!(offset > 0);
        for step in 0..offset {
            if let Some(&b) = self.source.get(self.position + step) {
                if b == b'\n' {
                    self.line += 1;
                    self.line_start = self.position + step + 1;
                }
            }
        }
        self.position += offset;
        self.source.get(self.position).copied()
    }

    pub(crate) fn peek(&self) -> Option<u8> {
        self.peek_by(0)
    }

    #[inline]
    pub(crate) fn peek_by(&self, offset: usize) -> Option<u8> {
        self.source.get(self.position + offset).copied()
    }

    pub(crate) fn peek_class(&self) -> Option<Lex> {
        self.peek().map(byte_class::classify)
    }

    #[inline]
    pub(crate) fn is_eof(&self) -> bool {
        self.position >= self.source.len()
    }

    /// Advance while the predicate holds on the classifier output, never
    /// crossing end of input.
    pub(crate) fn advance_while(&mut self, mut pred: impl FnMut(Lex) -> bool) {
        while let Some(b) = self.peek() {
            if !pred(byte_class::classify(b)) {
                break;
            }
            self.advance();
        }
    }

    pub(crate) fn rest(&self) -> &'src [u8] {
        &self.source[self.position..]
    }

    pub(crate) fn lexeme_start_pos(&self) -> usize {
        self.lexeme_start
    }

    /// The remaining source starting at an arbitrary absolute position.
    pub(crate) fn source_from(&self, pos: usize) -> &'src [u8] {
        &self.source[pos..]
    }

    /// Overrides the cursor's position to `lexeme_start + len`, used when a
    /// sub-scanner (angle-run, quoted string) determines a different
    /// consumption length than prescan's initial guess. Recomputes line
    /// tracking from scratch since the jump may be backward or forward.
    pub(crate) fn seek_lexeme_end(&mut self, len_from_lexeme_start: usize) {
        let target = self.lexeme_start + len_from_lexeme_start;
        let mut line = 1u32;
        let mut line_start = 0usize;
        for (i, &b) in self.source.iter().enumerate().take(target) {
            if b == b'\n' {
                line += 1;
                line_start = i + 1;
            }
        }
        self.line = line;
        self.line_start = line_start;
        self.position = target;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn tracks_line_number_across_linefeeds() {
        let mut cursor = Cursor::new(b"a\nb\nc");
        assert_eq!(cursor.line(), 1);
        cursor.advance_by(2);
        assert_eq!(cursor.line(), 2);
        cursor.advance_by(2);
        assert_eq!(cursor.line(), 3);
    }

    #[test]
    fn lexeme_bytes_span_start_to_current_position() {
        let mut cursor = Cursor::new(b"hello world");
        cursor.advance_by(5);
        cursor.start_lexeme();
        cursor.advance_by(1);
        cursor.advance_by(5);
        assert_eq!(cursor.lexeme_str(), " world");
    }

    #[test]
    fn line_snippet_trims_and_stops_at_linefeed() {
        let mut cursor = Cursor::new(b"  first line  \nsecond");
        assert_eq!(cursor.line_snippet(), "first line");
        cursor.advance_by(16);
        assert_eq!(cursor.line_snippet(), "second");
    }
}
