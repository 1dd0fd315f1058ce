//! The character classifier (§4.1): a constant 256-entry table mapping each
//! input byte to a lexical class and a value nibble.
//!
//! Transcribed from `Lex_Map` in the original REBOL 3 scanner
//! (`src/core/l-scan.c`), built under that source's `USE_UNICODE` branch
//! since this crate's input contract is UTF-8 (§6): the four lead bytes that
//! can never appear in valid UTF-8 (`0xC0`, `0xC1`, `0xF5`, `0xFF`) classify
//! as [`Delimit::Utf8Error`] rather than [`Lex::Word`].
//!
//! One faithfully-preserved quirk: in the original table, the "default"
//! control bytes (`0x01`-`0x09`, `0x0B`, `0x0C`, `0x0E`-`0x1F`, `0x7F`) share
//! the same zero-valued table entry as `NUL`/end-of-file. A bare TAB or
//! other C0 control character appearing in REBOL source is therefore
//! classified identically to end-of-file and terminates scanning at that
//! byte — this is not a bug we introduced, it is how the original behaves,
//! and §9's design notes do not flag it for change.

/// Which of the four lexical classes a byte belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LexClass {
    Delimit,
    Special,
    Word,
    Number,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delimit {
    EndFile,
    Linefeed,
    Return,
    Space,
    Quote,
    LeftParen,
    RightParen,
    Slash,
    Semicolon,
    LeftBracket,
    RightBracket,
    LeftBrace,
    RightBrace,
    Utf8Error,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Special {
    Pound,
    Dollar,
    Percent,
    Tick,
    Plus,
    Comma,
    Minus,
    Period,
    Colon,
    Lesser,
    Greater,
    At,
    Backslash,
}

/// One entry of the classifier table: a class plus its value nibble.
///
/// For [`Lex::Word`]/[`Lex::Number`] the payload is a compact hex-digit hint
/// (0 when the byte isn't a hex digit) used by the `^(hex)` escape scanner
/// (§4.2) to walk hex runs without a second table lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lex {
    Delimit(Delimit),
    Special(Special),
    Word(u8),
    Number(u8),
}

impl Lex {
    pub fn class(&self) -> LexClass {
        match self {
            Lex::Delimit(_) => LexClass::Delimit,
            Lex::Special(_) => LexClass::Special,
            Lex::Word(_) => LexClass::Word,
            Lex::Number(_) => LexClass::Number,
        }
    }

    /// True for classes at or above WORD (word chars and digits) — used by
    /// prescan's "at least word" run-length tests.
    pub fn is_at_least_word(&self) -> bool {
        matches!(self, Lex::Word(_) | Lex::Number(_))
    }

    pub fn is_at_least_number(&self) -> bool {
        matches!(self, Lex::Number(_))
    }

    /// The hex-digit value for a byte, when the byte is `0-9A-Fa-f`.
    pub fn hex_value(&self) -> Option<u8> {
        match self {
            Lex::Number(v) => Some(*v),
            Lex::Word(v) if *v > 0 => Some(*v),
            _ => None,
        }
    }
}

const fn d(v: Delimit) -> Lex {
    Lex::Delimit(v)
}
const fn s(v: Special) -> Lex {
    Lex::Special(v)
}
const fn w() -> Lex {
    Lex::Word(0)
}
const fn wh(v: u8) -> Lex {
    Lex::Word(v)
}
const fn n(v: u8) -> Lex {
    Lex::Number(v)
}

/// Bytes that are classified identically to end-of-file (see module docs).
const DEFAULT: Lex = Lex::Delimit(Delimit::EndFile);

pub const LEX_TABLE: [Lex; 256] = [
    // 00-0F
    d(Delimit::EndFile),
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT, // 08 BS
    DEFAULT, // 09 TAB
    d(Delimit::Linefeed),
    DEFAULT,
    DEFAULT, // 0C page
    d(Delimit::Return),
    DEFAULT,
    DEFAULT,
    // 10-1F
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    DEFAULT,
    // 20-2F
    d(Delimit::Space),
    w(),                    // 21 !
    d(Delimit::Quote),      // 22 "
    s(Special::Pound),      // 23 #
    s(Special::Dollar),     // 24 $
    s(Special::Percent),    // 25 %
    w(),                    // 26 &
    s(Special::Tick),       // 27 '
    d(Delimit::LeftParen),  // 28 (
    d(Delimit::RightParen), // 29 )
    w(),                    // 2A *
    s(Special::Plus),       // 2B +
    s(Special::Comma),      // 2C ,
    s(Special::Minus),      // 2D -
    s(Special::Period),     // 2E .
    d(Delimit::Slash),      // 2F /
    // 30-3F
    n(0),
    n(1),
    n(2),
    n(3),
    n(4),
    n(5),
    n(6),
    n(7),
    n(8),
    n(9),
    s(Special::Colon),     // 3A :
    d(Delimit::Semicolon), // 3B ;
    s(Special::Lesser),    // 3C <
    w(),                   // 3D =
    s(Special::Greater),   // 3E >
    w(),                   // 3F ?
    // 40-4F
    s(Special::At), // 40 @
    wh(10),         // 41 A
    wh(11),         // 42 B
    wh(12),         // 43 C
    wh(13),         // 44 D
    wh(14),         // 45 E
    wh(15),         // 46 F
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    // 50-5F
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    d(Delimit::LeftBracket),  // 5B [
    s(Special::Backslash),   // 5C backslash
    d(Delimit::RightBracket), // 5D ]
    w(),                      // 5E ^
    w(),                      // 5F _
    // 60-6F
    w(), // 60 `
    wh(10),
    wh(11),
    wh(12),
    wh(13),
    wh(14),
    wh(15),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    // 70-7F
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    w(),
    d(Delimit::LeftBrace),  // 7B {
    w(),                    // 7C |
    d(Delimit::RightBrace), // 7D }
    w(),                    // 7E ~
    DEFAULT,                // 7F DEL
    // 80-8F: odd control chars, word-class
    w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(),
    // 90-9F
    w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(),
    // A0-AF
    w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(),
    // B0-BF
    w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(),
    // C0-CF: C0, C1 invalid UTF-8 lead bytes
    d(Delimit::Utf8Error),
    d(Delimit::Utf8Error),
    w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(),
    // D0-DF
    w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(),
    // E0-EF
    w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(), w(),
    // F0-FF: F5, FF invalid UTF-8 lead bytes
    w(), w(), w(), w(),
    w(), d(Delimit::Utf8Error), w(), w(),
    w(), w(), w(), w(),
    w(), w(), w(), d(Delimit::Utf8Error),
];

#[inline]
pub fn classify(byte: u8) -> Lex {
    LEX_TABLE[byte as usize]
}

/// Folds an ASCII byte to upper case; non-letter bytes pass through.
/// Mirrors the original `Upper_Case` table's ASCII range, used by the
/// escape decoder's `^A`..`^Z` control-code rule (§4.2 rule 3).
#[inline]
pub fn upper_case(byte: u8) -> u8 {
    byte.to_ascii_uppercase()
}

#[inline]
pub fn lower_case(byte: u8) -> u8 {
    byte.to_ascii_lowercase()
}
