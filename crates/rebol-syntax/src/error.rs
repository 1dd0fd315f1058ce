use std::fmt;

use crate::TokenKind;

/// The three error ids §7 recognises. The token classifier never throws —
/// it signals malformedness by returning `Err`; the block scanner is the
/// single propagation boundary that turns one of these into either an
/// unwind or, under `ScanOptions::relax`, a [`crate::Value::Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ScanErrorKind {
    /// A lexeme matched a token kind but is malformed (`1.2.`, a bad escape).
    Invalid,
    /// An opening bracket was never closed, or a closing bracket appeared
    /// with nothing open.
    Missing,
    /// A `#[ ... ]` construct expression did not name a recognised type.
    Construct,
}

impl ScanErrorKind {
    fn message(&self) -> &'static str {
        match self {
            ScanErrorKind::Invalid => "invalid lexeme",
            ScanErrorKind::Missing => "missing bracket",
            ScanErrorKind::Construct => "unrecognised construct",
        }
    }
}

/// The error object produced by the scanner (§6 "Error object", §7).
///
/// Fields mirror the original exactly: `nearest` is the line number plus a
/// whitespace-trimmed snippet of the source line the error occurred on,
/// `arg1` is the token kind's name, `arg2` is the offending lexeme's text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ScanError {
    pub kind: ScanErrorKind,
    pub nearest: String,
    pub arg1: &'static str,
    pub arg2: String,
    pub line: u32,
    pub offset: usize,
}

impl ScanError {
    pub fn new(kind: ScanErrorKind, line: u32, line_snippet: &str, token: TokenKind, lexeme: &str, offset: usize) -> Self {
        tracing::trace!(?kind, line, token = token.name(), "building scan error object");
        Self {
            kind,
            nearest: format!("(line {line}) {line_snippet}"),
            arg1: token.name(),
            arg2: lexeme.to_string(),
            line,
            offset,
        }
    }
}

impl fmt::Display for ScanError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "REBOL-{:?}: {} — {} near {}", self.kind, self.kind.message(), self.arg1, self.nearest)
    }
}

impl std::error::Error for ScanError {}
