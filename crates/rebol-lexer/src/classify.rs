//! The token classifier (§4.7): the heart of the scanner. Runs prescan to
//! find the next lexeme, then decides which of the ~20 [`TokenKind`]s it
//! is. Per §9's redesign note the classifier never throws — malformed
//! lexemes come back as `Err((kind, lexeme))`, a proper sum type standing
//! in for the original's negative-token convention.

use rebol_syntax::TokenKind;

use crate::angle::{self, AngleOutcome};
use crate::byte_class::{Delimit, Lex, LexClass, Special};
use crate::cursor::Cursor;
use crate::item;
use crate::prescan::{self, Flags};
use crate::strings;
use crate::tag;

pub(crate) struct Classified {
    pub(crate) kind: TokenKind,
    /// Decoded text for string-shaped kinds, raw lexeme text otherwise.
    pub(crate) text: String,
}

pub(crate) struct Malformed {
    pub(crate) kind: TokenKind,
    pub(crate) lexeme: String,
}

pub(crate) type ClassifyResult = Result<Classified, Malformed>;

pub(crate) fn classify(cursor: &mut Cursor<'_>) -> ClassifyResult {
    let scanned = prescan::prescan(cursor);

    if scanned.is_delimiter {
        return classify_delimiter(cursor, scanned.delimiter.unwrap());
    }

    let lead = cursor.lexeme_bytes()[0];
    let class = crate::byte_class::classify(lead).class();

    match class {
        LexClass::Special => classify_special(cursor, lead, scanned.flags),
        LexClass::Word => classify_word(cursor, scanned.flags),
        LexClass::Number => classify_number(cursor, scanned.flags),
        LexClass::Delimit => unreachable!("handled above"),
    }
}

fn ok(kind: TokenKind, text: impl Into<String>) -> ClassifyResult {
    Ok(Classified { kind, text: text.into() })
}

fn bad(kind: TokenKind, lexeme: impl Into<String>) -> ClassifyResult {
    Err(Malformed { kind, lexeme: lexeme.into() })
}

fn classify_delimiter(cursor: &mut Cursor<'_>, delimit: Delimit) -> ClassifyResult {
    match delimit {
        Delimit::EndFile => ok(TokenKind::Eof, ""),
        Delimit::Linefeed | Delimit::Return => ok(TokenKind::Line, "\n"),
        Delimit::Semicolon => {
            cursor.advance_while(|c| !matches!(c, Lex::Delimit(Delimit::Linefeed | Delimit::Return | Delimit::EndFile)));
            ok(TokenKind::Line, ";")
        }
        Delimit::LeftBracket => ok(TokenKind::Block, "["),
        Delimit::RightBracket => ok(TokenKind::BlockEnd, "]"),
        Delimit::LeftParen => ok(TokenKind::Paren, "("),
        Delimit::RightParen => ok(TokenKind::ParenEnd, ")"),
        Delimit::LeftBrace | Delimit::Quote => classify_quoted(cursor),
        Delimit::RightBrace => bad(TokenKind::String, "}"),
        Delimit::Slash => classify_path_lead(cursor),
        Delimit::Space => unreachable!("prescan consumes leading space"),
        Delimit::Utf8Error => bad(TokenKind::Word, "?"),
    }
}

fn classify_quoted(cursor: &mut Cursor<'_>) -> ClassifyResult {
    let rest = &cursor_rest_from_lexeme_start(cursor)[..];
    match strings::scan(rest) {
        Ok(scanned) => {
            cursor.advance_by(scanned.consumed - 1);
            ok(TokenKind::String, scanned.text)
        }
        Err(_) => bad(TokenKind::String, String::from_utf8_lossy(rest).into_owned()),
    }
}

/// `/` leading the lexeme: a bare `/` word (the division operator), a
/// `/refine` token, or the start of a relative path segment consumed by the
/// block scanner. Consecutive `/` runs are absorbed first; more than one
/// slash before the refinement body is malformed ("no ///refine").
fn classify_path_lead(cursor: &mut Cursor<'_>) -> ClassifyResult {
    let mut extra_slashes = 0usize;
    while cursor.peek() == Some(b'/') {
        cursor.advance();
        extra_slashes += 1;
    }

    let starts_refine_body = matches!(cursor.peek_class(), Some(Lex::Word(_)) | Some(Lex::Number(_)))
        || matches!(cursor.peek(), Some(b'+') | Some(b'-') | Some(b'.') | Some(b'<') | Some(b'>'));

    if !starts_refine_body {
        // No refinement body follows: the whole slash run becomes one plain
        // word (`/` is the division operator; a longer run is its own word).
        return ok(TokenKind::Path, cursor.lexeme_str().to_string());
    }

    if extra_slashes > 0 {
        return bad(TokenKind::Refine, cursor.lexeme_str().to_string());
    }

    classify_refine_body(cursor)
}

/// The refinement name following a single `/` (§4.7's angle-word/tag
/// differentiation, "mode 1: after /"): an angle-word lead gets the same
/// disambiguation a bare word gets, but may only resolve to a plain word —
/// a refinement can never become a SET word or a tag.
fn classify_refine_body(cursor: &mut Cursor<'_>) -> ClassifyResult {
    if matches!(cursor.peek(), Some(b'<') | Some(b'>')) {
        let rest = cursor_rest_from_position(cursor);
        return match angle::classify_angle_run(rest) {
            Ok((AngleOutcome::Word(w), len)) => {
                cursor.advance_by(len.max(1));
                ok(TokenKind::Refine, format!("/{w}"))
            }
            Ok((_, len)) => {
                cursor.advance_by(len.max(1));
                bad(TokenKind::Refine, cursor.lexeme_str().to_string())
            }
            Err(_) => {
                cursor.advance_while(|c| !matches!(c, Lex::Delimit(Delimit::Space | Delimit::Linefeed | Delimit::Return | Delimit::EndFile)));
                bad(TokenKind::Refine, cursor.lexeme_str().to_string())
            }
        };
    }

    cursor.advance_while(|c| c.class() == LexClass::Word || c.class() == LexClass::Number || matches!(c, Lex::Special(_)));
    ok(TokenKind::Refine, cursor.lexeme_str().to_string())
}

fn classify_special(cursor: &mut Cursor<'_>, lead: u8, flags: Flags) -> ClassifyResult {
    let special = match crate::byte_class::classify(lead) {
        Lex::Special(sp) => sp,
        _ => unreachable!(),
    };

    match special {
        Special::At => bad(TokenKind::Email, cursor.lexeme_str().to_string()),
        Special::Percent => classify_file(cursor),
        Special::Colon => classify_get_or_time(cursor),
        Special::Tick => classify_lit(cursor),
        Special::Comma | Special::Period => classify_number(cursor, flags),
        Special::Lesser | Special::Greater => classify_angle(cursor),
        Special::Plus | Special::Minus => classify_sign_lead(cursor, flags),
        Special::Pound => classify_pound(cursor),
        Special::Dollar => classify_money(cursor),
        Special::Backslash => bad(TokenKind::Word, cursor.lexeme_str().to_string()),
    }
}

fn classify_file(cursor: &mut Cursor<'_>) -> ClassifyResult {
    if cursor.peek() == Some(b'"') {
        let rest = cursor_rest_from_position(cursor);
        return match strings::scan(rest) {
            Ok(scanned) => {
                cursor.advance_by(scanned.consumed);
                ok(TokenKind::File, scanned.text)
            }
            Err(_) => bad(TokenKind::File, String::from_utf8_lossy(rest).into_owned()),
        };
    }
    let rest = cursor_rest_from_position(cursor);
    match item::scan(rest, None, &[]) {
        Ok((text, len)) => {
            cursor.advance_by(len.max(1));
            ok(TokenKind::File, text)
        }
        Err(_) => bad(TokenKind::File, String::from_utf8_lossy(rest).into_owned()),
    }
}

fn classify_get_or_time(cursor: &mut Cursor<'_>) -> ClassifyResult {
    if matches!(cursor.peek_class(), Some(Lex::Number(_))) {
        cursor.advance_while(|c| c.class() == LexClass::Number || matches!(c, Lex::Special(Special::Colon | Special::Period)));
        return ok(TokenKind::Time, cursor.lexeme_str().to_string());
    }
    if cursor.peek() == Some(b'<') {
        let rest = cursor_rest_from_position(cursor);
        return match angle::classify_angle_run(rest) {
            Ok((AngleOutcome::Tag(body), len)) => {
                cursor.advance_by(len);
                ok(TokenKind::Get, body)
            }
            _ => bad(TokenKind::Get, cursor.lexeme_str().to_string()),
        };
    }
    cursor.advance_while(|c| c.class() == LexClass::Word || c.class() == LexClass::Number);
    ok(TokenKind::Get, cursor.lexeme_str()[1..].to_string())
}

fn classify_lit(cursor: &mut Cursor<'_>) -> ClassifyResult {
    cursor.advance_while(|c| c.class() == LexClass::Word || c.class() == LexClass::Number);
    // A lit-word can never be set (`'foo:` has no meaning); absorb a
    // trailing `:` so the whole ill-formed lexeme is reported as one error.
    let has_colon = cursor.peek() == Some(b':');
    if has_colon {
        cursor.advance();
    }
    let text = cursor.lexeme_str();
    if text.len() <= 1 || has_colon {
        return bad(TokenKind::Lit, text.to_string());
    }
    ok(TokenKind::Lit, text[1..].to_string())
}

fn classify_angle(cursor: &mut Cursor<'_>) -> ClassifyResult {
    let rest = cursor_rest_from_lexeme_start(cursor);
    match angle::classify_angle_run(rest) {
        Ok((AngleOutcome::Word(w), len)) => {
            cursor.seek_lexeme_end(len);
            ok(TokenKind::Word, w)
        }
        Ok((AngleOutcome::SetWord(w), len)) => {
            cursor.seek_lexeme_end(len);
            ok(TokenKind::Set, w)
        }
        Ok((AngleOutcome::Tag(body), len)) => {
            cursor.seek_lexeme_end(len);
            ok(TokenKind::Tag, angle::strip_rescue_dot(&body).to_string())
        }
        Err(_) => bad(TokenKind::Tag, String::from_utf8_lossy(rest).into_owned()),
    }
}

fn classify_sign_lead(cursor: &mut Cursor<'_>, _flags: Flags) -> ClassifyResult {
    let rest = cursor_rest_from_lexeme_start(cursor);
    if rest.contains(&b'$') {
        return classify_money(cursor);
    }
    if matches!(cursor.peek_class(), Some(Lex::Number(_))) || matches!(cursor.peek(), Some(b'.') | Some(b',')) {
        cursor.advance_while(|c| c.class() == LexClass::Number || matches!(c, Lex::Special(_)) || c.class() == LexClass::Word);
        let flags = prescan::collect_flags(cursor.lexeme_bytes());
        return classify_number_body(cursor, flags);
    }
    cursor.advance_while(|c| c.class() == LexClass::Word || c.class() == LexClass::Number);
    ok(TokenKind::Word, cursor.lexeme_str().to_string())
}

fn classify_pound(cursor: &mut Cursor<'_>) -> ClassifyResult {
    match cursor.peek() {
        Some(b'[') => {
            cursor.advance();
            ok(TokenKind::Construct, "#")
        }
        Some(b'"') => {
            let rest = cursor_rest_from_position(cursor);
            match strings::scan(rest) {
                Ok(scanned) if scanned.text.chars().count() == 1 => {
                    cursor.advance_by(scanned.consumed);
                    ok(TokenKind::Char, scanned.text)
                }
                Ok(scanned) => {
                    cursor.advance_by(scanned.consumed);
                    bad(TokenKind::Char, scanned.text)
                }
                Err(_) => bad(TokenKind::Char, String::from_utf8_lossy(rest).into_owned()),
            }
        }
        Some(b'{') => classify_binary(cursor),
        None => ok(TokenKind::Word, "#"),
        Some(_) => {
            cursor.advance_while(|c| c.class() == LexClass::Word || c.class() == LexClass::Number);
            ok(TokenKind::Issue, cursor.lexeme_str()[1..].to_string())
        }
    }
}

fn classify_binary(cursor: &mut Cursor<'_>) -> ClassifyResult {
    let rest = cursor_rest_from_position(cursor);
    match brace_body(rest) {
        Some((body, len)) => {
            cursor.advance_by(len);
            ok(TokenKind::Binary, body.to_string())
        }
        None => bad(TokenKind::Binary, String::from_utf8_lossy(rest).into_owned()),
    }
}

/// Bytes starting at `{`, returns the (unvalidated) body text and bytes
/// consumed including both braces. Hex-digit validation and whitespace
/// skipping are `construct::parse_binary`'s job.
fn brace_body(rest: &[u8]) -> Option<(&str, usize)> {
    if rest.first() != Some(&b'{') {
        return None;
    }
    let close = rest.iter().position(|&b| b == b'}')?;
    let body = std::str::from_utf8(&rest[1..close]).ok()?;
    Some((body, close + 1))
}

fn classify_money(cursor: &mut Cursor<'_>) -> ClassifyResult {
    cursor.advance_while(|c| c.class() == LexClass::Number || matches!(c, Lex::Special(Special::Period | Special::Comma | Special::Minus | Special::Plus)));
    ok(TokenKind::Money, cursor.lexeme_str().to_string())
}

fn classify_word(cursor: &mut Cursor<'_>, flags: Flags) -> ClassifyResult {
    if flags.has(Special::At) {
        return ok(TokenKind::Email, cursor.lexeme_str().to_string());
    }
    if flags.has(Special::Dollar) {
        return ok(TokenKind::Money, cursor.lexeme_str().to_string());
    }
    for forbidden in [Special::Backslash, Special::Percent, Special::Pound] {
        if flags.has(forbidden) {
            return bad(TokenKind::Word, cursor.lexeme_str().to_string());
        }
    }
    // The classifier, not prescan, decides SET-vs-URL promotion here: it
    // emits the WORD kind first and only then inspects the byte at `end`
    // (§9 "overlapping grammars" redesign note), exactly like the PATH
    // promotion the block scanner performs one level up.
    if cursor.peek() == Some(b':') {
        return classify_word_colon(cursor);
    }
    // Mode 4: a word immediately followed by `<tag>` needs no splicing here
    // — the word token is emitted as-is and the tag becomes the next
    // sibling lexeme the block scanner reads.
    ok(TokenKind::Word, cursor.lexeme_str().to_string())
}

fn classify_word_colon(cursor: &mut Cursor<'_>) -> ClassifyResult {
    let word_text = cursor.lexeme_str().to_string();
    let after_colon = cursor.peek_by(1);
    let is_delim = match after_colon {
        None => true,
        Some(b'/') => false,
        Some(b) => crate::byte_class::classify(b).class() == LexClass::Delimit,
    };
    if is_delim {
        cursor.advance();
        ok(TokenKind::Set, word_text)
    } else {
        cursor.advance();
        cursor.advance_while(|c| !matches!(c, Lex::Delimit(Delimit::Space | Delimit::Linefeed | Delimit::Return | Delimit::EndFile)));
        ok(TokenKind::Url, cursor.lexeme_str().to_string())
    }
}

fn classify_number(cursor: &mut Cursor<'_>, _flags: Flags) -> ClassifyResult {
    cursor.advance_while(|c| {
        c.class() == LexClass::Number
            || c.class() == LexClass::Word
            || matches!(c, Lex::Special(_))
    });

    // A date lexeme may carry an embedded time across a `/` (`1-jan-2024/
    // 10:30:00`). That `/` is consumed here by the date constructor's own
    // lookahead rather than by the generic path mechanism, the same way
    // the original's `Scan_Date` reaches past the date body for a time.
    if looks_like_date(cursor.lexeme_str())
        && cursor.peek() == Some(b'/')
        && matches!(cursor.peek_by(1).map(crate::byte_class::classify), Some(Lex::Number(_)))
    {
        cursor.advance();
        cursor.advance_while(|c| c.class() == LexClass::Number || matches!(c, Lex::Special(Special::Colon | Special::Period)));
    }

    let flags = prescan::collect_flags(cursor.lexeme_bytes());
    classify_number_body(cursor, flags)
}

fn looks_like_date(text: &str) -> bool {
    text.find('-').map(|i| i > 0).unwrap_or(false)
}

fn classify_number_body(cursor: &mut Cursor<'_>, flags: Flags) -> ClassifyResult {
    let text = cursor.lexeme_str();

    if flags.has(Special::At) {
        return ok(TokenKind::Email, text.to_string());
    }
    if flags.has(Special::Pound) {
        if let Some(result) = classify_radix_binary(cursor, text) {
            return result;
        }
        return bad(TokenKind::Integer, text.to_string());
    }
    // A `-` not in lead position means a date (`1-Jan-2024`, possibly with
    // an embedded time after `/`) — this must be checked before the colon
    // flag below, since a date's embedded time also carries colons.
    if looks_like_date(text) {
        return ok(TokenKind::Date, text.to_string());
    }
    if flags.has(Special::Colon) {
        return ok(TokenKind::Time, text.to_string());
    }
    if flags.has(Special::Period) {
        let dots = text.matches('.').count();
        if dots >= 2 && !text.contains(',') {
            return ok(TokenKind::Tuple, text.to_string());
        }
        if text.contains(['x', 'X']) {
            return ok(TokenKind::Pair, text.to_string());
        }
        return ok(TokenKind::Decimal, text.to_string());
    }
    if flags.has(Special::Comma) {
        if text.contains(['x', 'X']) {
            return ok(TokenKind::Pair, text.to_string());
        }
        return ok(TokenKind::Decimal, text.to_string());
    }

    for ch in text.chars() {
        match ch {
            'x' | 'X' => return ok(TokenKind::Pair, text.to_string()),
            'e' | 'E' if !text.starts_with(['e', 'E']) => return ok(TokenKind::Decimal, text.to_string()),
            '%' => return ok(TokenKind::Percent, text.to_string()),
            _ => {}
        }
    }

    if flags.has(Special::Tick) {
        return ok(TokenKind::Integer, text.replace('\'', ""));
    }

    if text.chars().all(|c| c.is_ascii_digit() || c == '-' || c == '+') {
        ok(TokenKind::Integer, text.to_string())
    } else {
        bad(TokenKind::Integer, text.to_string())
    }
}

/// `64#{`, `16#{`, `2#{` radix-prefixed binary literal (§4.7 "NUMBER" Flag
/// POUND): only these three exact prefixes redirect into the binary path;
/// any other POUND-flagged number is a malformed integer.
fn classify_radix_binary(cursor: &mut Cursor<'_>, text: &str) -> Option<ClassifyResult> {
    if cursor.peek() != Some(b'{') {
        return None;
    }
    if !matches!(text, "64#" | "16#" | "2#") {
        return None;
    }
    Some(classify_binary(cursor))
}

fn cursor_rest_from_lexeme_start(cursor: &Cursor<'_>) -> &[u8] {
    cursor.source_from(cursor.lexeme_start_pos())
}

fn cursor_rest_from_position(cursor: &Cursor<'_>) -> &[u8] {
    cursor.rest()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn classify_text(src: &str) -> Classified {
        let mut cursor = Cursor::new(src.as_bytes());
        classify(&mut cursor).map_err(|m| panic!("expected valid token, got malformed {:?} lexeme {:?}", m.kind, m.lexeme)).unwrap()
    }

    #[test]
    fn classifies_plain_integer() {
        let c = classify_text("1234");
        assert_eq!(c.kind, TokenKind::Integer);
    }

    #[test]
    fn classifies_set_word() {
        let c = classify_text("foo:");
        assert_eq!(c.kind, TokenKind::Set);
        assert_eq!(c.text, "foo");
    }

    #[test]
    fn classifies_lit_word() {
        let c = classify_text("'foo");
        assert_eq!(c.kind, TokenKind::Lit);
        assert_eq!(c.text, "foo");
    }

    #[test]
    fn classifies_refinement() {
        let c = classify_text("/only");
        assert_eq!(c.kind, TokenKind::Refine);
        assert_eq!(c.text, "/only");
    }

    #[test]
    fn classifies_email() {
        let c = classify_text("a@b.com");
        assert_eq!(c.kind, TokenKind::Email);
    }

    #[test]
    fn classifies_money() {
        let c = classify_text("$19.99");
        assert_eq!(c.kind, TokenKind::Money);
    }

    #[test]
    fn classifies_pair() {
        let c = classify_text("100x200");
        assert_eq!(c.kind, TokenKind::Pair);
    }

    #[test]
    fn classifies_string() {
        let c = classify_text("\"hi\"");
        assert_eq!(c.kind, TokenKind::String);
        assert_eq!(c.text, "hi");
    }

    #[test]
    fn classifies_block_open() {
        let c = classify_text("[a]");
        assert_eq!(c.kind, TokenKind::Block);
    }
}
