/// The ~20 lexeme kinds the token classifier (§4.7) can produce.
///
/// A [`TokenKind`] names *what the lexeme looks like*, not whether it was
/// well-formed — malformedness is carried out of band as a
/// [`crate::ScanError`] rather than as a negated kind: `Result<Token,
/// (TokenKind, Reason)>` in place of the original negative-token convention.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum TokenKind {
    /// A run of one or more newlines/comments; carries no value, just
    /// advances the pending "new line" flag (§4.8 step 8).
    Line,
    /// `[`
    Block,
    /// `]`
    BlockEnd,
    /// `(`
    Paren,
    /// `)`
    ParenEnd,
    /// A bare lexeme absorbed into a path by the recursive scanner; never
    /// produced directly by the classifier.
    Path,
    Word,
    Set,
    Get,
    Lit,
    Refine,
    Issue,
    String,
    Binary,
    Pair,
    Tuple,
    File,
    Email,
    Url,
    Tag,
    Char,
    Integer,
    Decimal,
    Percent,
    Money,
    Time,
    Date,
    Construct,
    Eof,
}

impl TokenKind {
    /// The name used in error reporting (`arg1` of the surfaced error, §6).
    pub fn name(&self) -> &'static str {
        match self {
            TokenKind::Line => "line",
            TokenKind::Block => "block",
            TokenKind::BlockEnd => "block-end",
            TokenKind::Paren => "paren",
            TokenKind::ParenEnd => "paren-end",
            TokenKind::Path => "path",
            TokenKind::Word => "word",
            TokenKind::Set => "set-word",
            TokenKind::Get => "get-word",
            TokenKind::Lit => "lit-word",
            TokenKind::Refine => "refinement",
            TokenKind::Issue => "issue",
            TokenKind::String => "string",
            TokenKind::Binary => "binary",
            TokenKind::Pair => "pair",
            TokenKind::Tuple => "tuple",
            TokenKind::File => "file",
            TokenKind::Email => "email",
            TokenKind::Url => "url",
            TokenKind::Tag => "tag",
            TokenKind::Char => "char",
            TokenKind::Integer => "integer",
            TokenKind::Decimal => "decimal",
            TokenKind::Percent => "percent",
            TokenKind::Money => "money",
            TokenKind::Time => "time",
            TokenKind::Date => "date",
            TokenKind::Construct => "construct",
            TokenKind::Eof => "end-of-file",
        }
    }

    /// Tokens that may start or extend a path when followed by `/` (§4.8
    /// step 5): plain words, lit-words, get-words, and nested paths.
    pub fn can_start_path(&self) -> bool {
        matches!(self, TokenKind::Word | TokenKind::Lit | TokenKind::Get | TokenKind::Path)
    }
}
