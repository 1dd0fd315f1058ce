//! Tag/word disambiguation (§9 "Tag/word disambiguator").
//!
//! The original scanner has six numbered "modes" scattered across the
//! positions where `<`…`>` might open either an angle-word (`<=`, `>>`,
//! `<>`) or a tag body. This module collapses them into one function,
//! `classify_angle_run`, called from every one of those positions with the
//! bytes starting at the `<`/`>` byte.

use crate::tag;

const ANGLE_CHARS: &[u8] = b"-=<|>+~";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AngleError {
    Unterminated,
    InvalidWord,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum AngleOutcome {
    Word(String),
    SetWord(String),
    Tag(String),
}

/// `rest` starts at `<` or `>`. Returns the outcome and the number of bytes
/// consumed (including the closing `>` for a tag).
pub(crate) fn classify_angle_run(rest: &[u8]) -> Result<(AngleOutcome, usize), AngleError> {
    debug_assert!(matches!(rest.first(), Some(b'<') | Some(b'>')));

    // Closing-tag special case: `</…>` is always a tag, never a word.
    if rest.starts_with(b"</") {
        let (body, len) = tag::scan(rest).map_err(|_| AngleError::Unterminated)?;
        return Ok((AngleOutcome::Tag(body.to_string()), len));
    }

    let mut i = 0usize;
    while let Some(&b) = rest.get(i) {
        if ANGLE_CHARS.contains(&b) {
            i += 1;
        } else {
            break;
        }
    }
    let run = &rest[..i];

    let after_run = rest.get(i).copied();
    let set_colon = after_run == Some(b':') && is_delimiter_or_eof(rest.get(i + 1).copied());

    if set_colon {
        let word = String::from_utf8_lossy(run).into_owned();
        return Ok((AngleOutcome::SetWord(word), i + 1));
    }

    if is_delimiter_or_eof(after_run) {
        let word = String::from_utf8_lossy(run).into_owned();
        return Ok((AngleOutcome::Word(word), i));
    }

    if run.first() == Some(&b'<') {
        let (body, len) = tag::scan(rest).map_err(|_| AngleError::Unterminated)?;
        return Ok((AngleOutcome::Tag(body.to_string()), len));
    }

    Err(AngleError::InvalidWord)
}

/// After a tag is constructed (§4.8 step 7, mode 5): a tag body that began
/// with a `.` purely to escape an otherwise-ambiguous angle-word form
/// (`<.>` disambiguating an empty tag from the angle-word `<>`) has that
/// leading `.` stripped from the interned value.
pub(crate) fn strip_rescue_dot(body: &str) -> &str {
    body.strip_prefix('.').unwrap_or(body)
}

fn is_delimiter_or_eof(byte: Option<u8>) -> bool {
    match byte {
        None => true,
        Some(b) => crate::byte_class::classify(b).class() == crate::byte_class::LexClass::Delimit,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn lone_angle_word_before_space_is_a_word() {
        let (outcome, len) = classify_angle_run(b"<> rest").unwrap();
        assert_eq!(outcome, AngleOutcome::Word("<>".into()));
        assert_eq!(len, 2);
    }

    #[test]
    fn angle_word_followed_by_colon_is_set_word() {
        let (outcome, len) = classify_angle_run(b"<=: rest").unwrap();
        assert_eq!(outcome, AngleOutcome::SetWord("<=".into()));
        assert_eq!(len, 3);
    }

    #[test]
    fn double_less_before_space_is_a_word() {
        let (outcome, _) = classify_angle_run(b"<< rest").unwrap();
        assert_eq!(outcome, AngleOutcome::Word("<<".into()));
    }

    #[test]
    fn closing_tag_form_is_always_a_tag() {
        let (outcome, len) = classify_angle_run(b"</done>rest").unwrap();
        assert_eq!(outcome, AngleOutcome::Tag("/done".into()));
        assert_eq!(len, 7);
    }

    #[test]
    fn leading_angle_with_non_angle_tail_scans_as_tag() {
        let (outcome, _) = classify_angle_run(b"<a/b>rest").unwrap();
        assert_eq!(outcome, AngleOutcome::Tag("a/b".into()));
    }

    #[test]
    fn rescue_dot_is_stripped() {
        assert_eq!(strip_rescue_dot(".foo"), "foo");
        assert_eq!(strip_rescue_dot("foo"), "foo");
    }
}
