//! The quoted-string scanner (§4.3): entered at `"` or `{`, decodes escapes
//! via [`crate::escape`] and appends to a per-call mold buffer rather than
//! the process-wide one the original runtime used (§9 "shared mold/emit
//! buffers" — replaced with per-scan owned buffers).

use crate::escape;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum StringError {
    Unterminated,
    BareLineBreak,
    BadEscape,
}

pub(crate) struct ScannedString {
    pub(crate) text: String,
    /// Bytes consumed including both delimiters.
    pub(crate) consumed: usize,
    pub(crate) lines_consumed: u32,
}

/// `rest` starts at the opening delimiter (`"` or `{`).
pub(crate) fn scan(rest: &[u8]) -> Result<ScannedString, StringError> {
    match rest.first() {
        Some(b'"') => scan_quoted(rest),
        Some(b'{') => scan_braced(rest),
        _ => Err(StringError::Unterminated),
    }
}

fn scan_quoted(rest: &[u8]) -> Result<ScannedString, StringError> {
    let mut text = String::new();
    let mut i = 1usize;
    let mut lines = 0u32;

    loop {
        let Some(&b) = rest.get(i) else {
            return Err(StringError::Unterminated);
        };
        match b {
            b'"' => {
                return Ok(ScannedString { text, consumed: i + 1, lines_consumed: lines });
            }
            b'\n' => return Err(StringError::BareLineBreak),
            b'\r' => {
                text.push('\n');
                i += 1;
                if rest.get(i) == Some(&b'\n') {
                    i += 1;
                }
                lines += 1;
            }
            _ => {
                let (ch, len) = escape::decode(&rest[i..]).map_err(|_| StringError::BadEscape)?;
                if len == 0 {
                    return Err(StringError::Unterminated);
                }
                text.push(ch);
                i += len;
            }
        }
    }
}

fn scan_braced(rest: &[u8]) -> Result<ScannedString, StringError> {
    let mut text = String::new();
    let mut i = 1usize;
    let mut depth = 0u32;
    let mut lines = 0u32;

    loop {
        let Some(&b) = rest.get(i) else {
            return Err(StringError::Unterminated);
        };
        match b {
            b'}' if depth == 0 => {
                return Ok(ScannedString { text, consumed: i + 1, lines_consumed: lines });
            }
            b'}' => {
                depth -= 1;
                text.push('}');
                i += 1;
            }
            b'{' => {
                depth += 1;
                text.push('{');
                i += 1;
            }
            b'\n' => {
                text.push('\n');
                i += 1;
                lines += 1;
            }
            b'\r' => {
                text.push('\n');
                i += 1;
                if rest.get(i) == Some(&b'\n') {
                    i += 1;
                }
                lines += 1;
            }
            _ => {
                let (ch, len) = escape::decode(&rest[i..]).map_err(|_| StringError::BadEscape)?;
                if len == 0 {
                    return Err(StringError::Unterminated);
                }
                text.push(ch);
                i += len;
            }
        }
    }
}
