//! Script-header discovery (§4.9): a small state machine that walks lines
//! looking for the word `REBOL` followed, possibly across whitespace and
//! comments, by `[`.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum HeaderKind {
    /// No `REBOL [...]` header found.
    None,
    /// `REBOL` found before its `[`.
    Plain,
    /// A standalone `[` was seen before `REBOL` was found to own it.
    Embedded,
}

pub(crate) struct HeaderScan {
    pub(crate) kind: HeaderKind,
    /// Byte offset of the first `R`/`r` of `REBOL` (plain) or of the `[`
    /// (embedded).
    pub(crate) offset: usize,
}

/// Locates a `REBOL [ ... ]` header. Mirrors `Scan_Head`'s state machine:
/// a standalone `[` seen before the `REBOL` keyword is remembered, and if
/// `REBOL` later claims it the result is reported "embedded" rather than
/// "plain".
pub(crate) fn scan_head(source: &[u8]) -> HeaderScan {
    let mut i = 0usize;
    let mut pending_bracket: Option<usize> = None;

    while i < source.len() {
        match source[i] {
            b';' => {
                while i < source.len() && source[i] != b'\n' {
                    i += 1;
                }
            }
            b'[' if pending_bracket.is_none() => {
                pending_bracket = Some(i);
                i += 1;
            }
            b'R' | b'r' if source[i..].len() >= 5 && source[i..i + 5].eq_ignore_ascii_case(b"rebol") => {
                let after = i + 5;
                let mut j = after;
                while j < source.len() && is_header_gap(source[j]) {
                    if source[j] == b';' {
                        while j < source.len() && source[j] != b'\n' {
                            j += 1;
                        }
                    } else {
                        j += 1;
                    }
                }
                if source.get(j) == Some(&b'[') {
                    return match pending_bracket {
                        Some(offset) => {
                            tracing::debug!(offset, "REBOL header found, embedded");
                            HeaderScan { kind: HeaderKind::Embedded, offset }
                        }
                        None => {
                            tracing::debug!(offset = i, "REBOL header found, plain");
                            HeaderScan { kind: HeaderKind::Plain, offset: i }
                        }
                    };
                }
                i += 5;
            }
            _ => {
                // "There can be nothing on the line before the header": any
                // non-gap byte disowns a bracket seen earlier on the line.
                if !is_header_gap(source[i]) {
                    pending_bracket = None;
                }
                i += 1;
            }
        }
    }

    tracing::debug!("no REBOL header found");
    HeaderScan { kind: HeaderKind::None, offset: 0 }
}

fn is_header_gap(b: u8) -> bool {
    matches!(b, b' ' | b'\t' | b'\n' | b'\r' | b';')
}
