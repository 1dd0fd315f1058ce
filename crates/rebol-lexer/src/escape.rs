//! The escape decoder (§4.2): yields one logical character from a byte
//! cursor, advancing it past everything consumed. Shared by the quoted
//! string scanner, the item scanner, and the char constructor.

/// The fixed `^(name)` table (§9 "Open question"): canonical REBOL escape
/// names and their code points. No boot-time table was retrieved alongside
/// the scanner source, so this crate pins the set every REBOL encoding in
/// the wild agrees on.
const ESCAPE_NAMES: &[(&str, u32)] = &[
    ("null", 0),
    ("line", 10),
    ("tab", 9),
    ("page", 12),
    ("escape", 27),
    ("back", 8),
    ("del", 127),
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum EscapeError {
    BadUtf8,
    UnterminatedParen,
    HexTooLong,
    UnknownName,
}

/// Decodes one character starting at `bytes[0]`. Returns the character and
/// the number of bytes consumed.
pub(crate) fn decode(bytes: &[u8]) -> Result<(char, usize), EscapeError> {
    let Some(&first) = bytes.first() else {
        return Ok(('\0', 0));
    };

    if first >= 0x80 {
        return decode_utf8(bytes);
    }

    if first != b'^' {
        return Ok((first as char, 1));
    }

    let Some(&next) = bytes.get(1) else {
        return Ok(('^', 1));
    };

    match next {
        b'(' => decode_paren(&bytes[2..]).map(|(c, n)| (c, n + 2)),
        b'@' => Ok(('\0', 2)),
        b'/' => Ok(('\n', 2)),
        b'^' => Ok(('^', 2)),
        b'-' => Ok(('\t', 2)),
        b'!' => Ok(('\u{1E}', 2)),
        b'~' => Ok(('\u{7F}', 2)),
        b'A'..=b'Z' | b'a'..=b'z' | b'[' | b'\\' | b']' | b'_' => {
            let folded = next.to_ascii_uppercase();
            Ok(((folded - b'@') as char, 2))
        }
        other => Ok((other as char, 2)),
    }
}

fn decode_paren(rest: &[u8]) -> Result<(char, usize), EscapeError> {
    let close = rest.iter().position(|&b| b == b')').ok_or(EscapeError::UnterminatedParen)?;
    let body = &rest[..close];

    if body.iter().all(|b| b.is_ascii_hexdigit()) && !body.is_empty() {
        if body.len() > 4 {
            return Err(EscapeError::HexTooLong);
        }
        let text = std::str::from_utf8(body).map_err(|_| EscapeError::UnknownName)?;
        let code = u32::from_str_radix(text, 16).map_err(|_| EscapeError::UnknownName)?;
        let ch = char::from_u32(code).ok_or(EscapeError::UnknownName)?;
        return Ok((ch, close + 1));
    }

    let name = std::str::from_utf8(body).map_err(|_| EscapeError::UnknownName)?;
    for (candidate, code) in ESCAPE_NAMES {
        if candidate.eq_ignore_ascii_case(name) {
            let ch = char::from_u32(*code).ok_or(EscapeError::UnknownName)?;
            return Ok((ch, close + 1));
        }
    }
    Err(EscapeError::UnknownName)
}

fn decode_utf8(bytes: &[u8]) -> Result<(char, usize), EscapeError> {
    let width = utf8_width(bytes[0]).ok_or(EscapeError::BadUtf8)?;
    if bytes.len() < width {
        return Err(EscapeError::BadUtf8);
    }
    let text = std::str::from_utf8(&bytes[..width]).map_err(|_| EscapeError::BadUtf8)?;
    let ch = text.chars().next().ok_or(EscapeError::BadUtf8)?;
    Ok((ch, width))
}

fn utf8_width(lead: u8) -> Option<usize> {
    match lead {
        0x00..=0x7F => Some(1),
        0xC2..=0xDF => Some(2),
        0xE0..=0xEF => Some(3),
        0xF0..=0xF4 => Some(4),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    #[rstest]
    #[case(b"^/", '\n', 2)]
    #[case(b"^-", '\t', 2)]
    #[case(b"^^", '^', 2)]
    #[case(b"^A", '\u{1}', 2)]
    #[case(b"^a", '\u{1}', 2)]
    #[case(b"^[", '\u{1B}', 2)]
    #[case(b"^\\", '\u{1C}', 2)]
    #[case(b"^]", '\u{1D}', 2)]
    #[case(b"^_", '\u{1F}', 2)]
    #[case(b"a", 'a', 1)]
    fn decodes_simple_escapes(#[case] input: &[u8], #[case] ch: char, #[case] len: usize) {
        assert_eq!(decode(input), Ok((ch, len)));
    }

    #[test]
    fn decodes_paren_hex() {
        assert_eq!(decode(b"^(2022)"), Ok(('\u{2022}', 7)));
    }

    #[test]
    fn decodes_paren_name_case_insensitively() {
        assert_eq!(decode(b"^(Line)"), Ok(('\n', 7)));
        assert_eq!(decode(b"^(TAB)"), Ok(('\t', 6)));
    }

    #[test]
    fn rejects_hex_runs_over_four_digits() {
        assert_eq!(decode(b"^(20222)"), Err(EscapeError::HexTooLong));
    }

    #[test]
    fn rejects_unknown_names() {
        assert_eq!(decode(b"^(bogus)"), Err(EscapeError::UnknownName));
    }

    #[test]
    fn rejects_unterminated_paren() {
        assert_eq!(decode(b"^(line"), Err(EscapeError::UnterminatedParen));
    }

    #[test]
    fn decodes_utf8_continuation() {
        let bytes = "é".as_bytes();
        assert_eq!(decode(bytes), Ok(('é', 2)));
    }

    #[test]
    fn rejects_malformed_utf8() {
        assert_eq!(decode(&[0xC0, 0x80]), Err(EscapeError::BadUtf8));
    }
}
