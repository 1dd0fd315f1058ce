//! The prescan pass (§4.6): skips leading whitespace, then finds the outer
//! boundary of the next lexeme and records which SPECIAL characters (other
//! than a leading one) it contains, plus whether any WORD-class byte
//! appeared.
//!
//! Deliberately oblivious to escapes — it only defines the lexeme's outer
//! span; the quoted-string, item, and tag scanners (§4.3-4.5) extend `end`
//! further when the classifier recognises the lexeme as one of those forms.

use crate::byte_class::{self, Delimit, Lex, LexClass, Special};
use crate::cursor::Cursor;

/// One bit per [`Special`] variant, plus a `WORD` bit. Hand-rolled rather
/// than pulled in from a bitset crate — the set is fixed at thirteen
/// special values and never grows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub(crate) struct Flags(u16);

impl Flags {
    const WORD_BIT: u16 = 1 << 13;

    fn bit_for(special: Special) -> u16 {
        1 << (special as u16)
    }

    pub(crate) fn set_special(&mut self, special: Special) {
        self.0 |= Self::bit_for(special);
    }

    pub(crate) fn set_word(&mut self) {
        self.0 |= Self::WORD_BIT;
    }

    pub(crate) fn has(&self, special: Special) -> bool {
        self.0 & Self::bit_for(special) != 0
    }

    pub(crate) fn has_word(&self) -> bool {
        self.0 & Self::WORD_BIT != 0
    }

    pub(crate) fn any_special(&self) -> bool {
        self.0 & ((1 << 13) - 1) != 0
    }
}

/// The outcome of one prescan call: the lexeme's flags, and whether the
/// lexeme consumed was itself a single delimiter byte (a `LINE`/bracket/etc
/// token) as opposed to a word/number/special run.
pub(crate) struct Prescanned {
    pub(crate) flags: Flags,
    pub(crate) is_delimiter: bool,
    pub(crate) delimiter: Option<Delimit>,
}

/// Skips DELIMIT/SPACE bytes, then scans one lexeme starting at the cursor's
/// current position. On return the cursor's lexeme span covers the lexeme
/// (call `start_lexeme` before this, or let the caller do it — this
/// function calls `start_lexeme` itself once whitespace is skipped).
pub(crate) fn prescan(cursor: &mut Cursor<'_>) -> Prescanned {
    while let Some(Lex::Delimit(Delimit::Space)) = cursor.peek_class() {
        cursor.advance();
    }

    cursor.start_lexeme();
    let mut flags = Flags::default();

    let Some(first) = cursor.peek_class() else {
        return Prescanned { flags, is_delimiter: true, delimiter: Some(Delimit::EndFile) };
    };

    match first {
        Lex::Delimit(d) => {
            cursor.advance();
            Prescanned { flags, is_delimiter: true, delimiter: Some(d) }
        }
        Lex::Special(_) => {
            cursor.advance();
            scan_run(cursor, &mut flags);
            Prescanned { flags, is_delimiter: false, delimiter: None }
        }
        Lex::Word(_) => {
            flags.set_word();
            cursor.advance_while(|c| c.class() == LexClass::Word || c.class() == LexClass::Number);
            Prescanned { flags, is_delimiter: false, delimiter: None }
        }
        Lex::Number(_) => {
            cursor.advance_while(|c| c.class() == LexClass::Number);
            Prescanned { flags, is_delimiter: false, delimiter: None }
        }
    }
}

/// After the first byte of a SPECIAL-led lexeme, continue consuming
/// WORD/NUMBER/SPECIAL runs, recording non-leading SPECIAL flags.
fn scan_run(cursor: &mut Cursor<'_>, flags: &mut Flags) {
    loop {
        match cursor.peek_class() {
            Some(Lex::Special(sp)) => {
                flags.set_special(sp);
                cursor.advance();
            }
            Some(Lex::Word(_)) => {
                flags.set_word();
                cursor.advance_while(|c| c.class() == LexClass::Word || c.class() == LexClass::Number);
            }
            Some(Lex::Number(_)) => {
                cursor.advance_while(|c| c.class() == LexClass::Number);
            }
            _ => break,
        }
    }
}

/// Recomputes flags over an already-bounded lexeme. Used by the number
/// classifier, which extends its lexeme past prescan's own NUMBER-run
/// boundary (§4.7 "NUMBER" — the classifier, not prescan, absorbs the
/// mixed digit/special/word run a date or tuple lexeme needs) and must
/// re-derive which SPECIAL bytes it contains to dispatch correctly.
pub(crate) fn collect_flags(bytes: &[u8]) -> Flags {
    let mut flags = Flags::default();
    for (i, &b) in bytes.iter().enumerate() {
        match byte_class::classify(b) {
            Lex::Special(sp) if i > 0 => flags.set_special(sp),
            Lex::Word(_) => flags.set_word(),
            _ => {}
        }
    }
    flags
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn skips_leading_spaces() {
        let mut cursor = Cursor::new(b"   foo");
        let result = prescan(&mut cursor);
        assert!(!result.is_delimiter);
        assert_eq!(cursor.lexeme_str(), "foo");
    }

    #[test]
    fn a_lone_delimiter_is_its_own_lexeme() {
        let mut cursor = Cursor::new(b"[rest");
        let result = prescan(&mut cursor);
        assert!(result.is_delimiter);
        assert_eq!(result.delimiter, Some(Delimit::LeftBracket));
        assert_eq!(cursor.lexeme_str(), "[");
    }

    #[test]
    fn word_run_sets_the_word_flag() {
        let mut cursor = Cursor::new(b"foo-bar baz");
        let result = prescan(&mut cursor);
        assert!(result.flags.has_word());
        assert_eq!(cursor.lexeme_str(), "foo-bar");
    }

    #[test]
    fn special_led_lexeme_records_inner_specials() {
        let mut cursor = Cursor::new(b"a@b.com rest");
        let result = prescan(&mut cursor);
        assert!(result.flags.has_word());
        assert!(result.flags.has(Special::At));
        assert!(result.flags.has(Special::Period));
        assert_eq!(cursor.lexeme_str(), "a@b.com");
    }

    #[test]
    fn number_run_stays_number_class() {
        let mut cursor = Cursor::new(b"1234 rest");
        let result = prescan(&mut cursor);
        assert!(!result.flags.has_word());
        assert_eq!(cursor.lexeme_str(), "1234");
    }
}
