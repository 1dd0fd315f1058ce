use std::fmt;

/// A REBOL value, as produced by the scanner.
///
/// This is the output shape of the recursive block scanner (§4.8): leaf
/// kinds hold their decoded payload, compound kinds (`Block`/`Paren`/the
/// path family) hold nested values built by recursion. Binding, evaluation
/// and word interning (turning a [`Value::Word`]'s text into an interned
/// symbol) are out of scope (§1) — words carry their source text directly
/// rather than a symbol id.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    None,
    Integer(i64),
    Decimal(f64),
    Percent(f64),
    Money(f64),
    Pair(f64, f64),
    Tuple(Vec<u8>),
    Date { year: i32, month: u8, day: u8, time: Option<Box<Value>> },
    Time { hours: i32, minutes: u8, seconds: u8, nanos: u32 },
    Char(char),
    String(String),
    Binary(Vec<u8>),
    File(String),
    Email(String),
    Url(String),
    Tag(String),
    Issue(String),
    Word(String),
    SetWord(String),
    GetWord(String),
    LitWord(String),
    Refinement(String),
    Block(Vec<Value>),
    Paren(Vec<Value>),
    Path(Vec<Value>),
    SetPath(Vec<Value>),
    GetPath(Vec<Value>),
    LitPath(Vec<Value>),
    /// A `#[ ... ]` construct expression: the raw block plus the type word
    /// that names the value it constructs. Evaluating it into an actual
    /// typed value is out of scope (§1); the scanner only recognises the
    /// shape.
    Construct(Box<Value>, Vec<Value>),
    /// A syntax error captured inline under `ScanOptions::relax` (§6),
    /// rather than unwound through the single propagation boundary.
    Error(crate::ScanError),
}

impl Value {
    /// Whether this value was flagged as starting a new source line by the
    /// block scanner (§4.8 step 8). Line-break bookkeeping itself lives on
    /// the scanner side; this is only the carrier used by tests and
    /// callers that want to re-mold output with original line breaks.
    pub fn is_block_like(&self) -> bool {
        matches!(self, Value::Block(_) | Value::Paren(_) | Value::Path(_) | Value::SetPath(_) | Value::GetPath(_) | Value::LitPath(_))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::None => write!(f, "none"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Decimal(n) => write!(f, "{n}"),
            Value::Percent(n) => write!(f, "{}%", n * 100.0),
            Value::Money(n) => write!(f, "${n}"),
            Value::Pair(x, y) => write!(f, "{x}x{y}"),
            Value::Tuple(parts) => {
                for (i, p) in parts.iter().enumerate() {
                    if i > 0 {
                        write!(f, ".")?;
                    }
                    write!(f, "{p}")?;
                }
                Ok(())
            }
            Value::Date { year, month, day, time } => {
                write!(f, "{day}-{month}-{year}")?;
                if let Some(t) = time {
                    write!(f, "/{t}")?;
                }
                Ok(())
            }
            Value::Time { hours, minutes, seconds, .. } => write!(f, "{hours}:{minutes:02}:{seconds:02}"),
            Value::Char(c) => write!(f, "#\"{c}\""),
            Value::String(s) => write!(f, "{s:?}"),
            Value::Binary(b) => write!(f, "#{{{}}}", b.iter().map(|byte| format!("{byte:02X}")).collect::<String>()),
            Value::File(s) => write!(f, "%{s}"),
            Value::Email(s) => write!(f, "{s}"),
            Value::Url(s) => write!(f, "{s}"),
            Value::Tag(s) => write!(f, "<{s}>"),
            Value::Issue(s) => write!(f, "#{s}"),
            Value::Word(s) => write!(f, "{s}"),
            Value::SetWord(s) => write!(f, "{s}:"),
            Value::GetWord(s) => write!(f, ":{s}"),
            Value::LitWord(s) => write!(f, "'{s}"),
            Value::Refinement(s) => write!(f, "/{s}"),
            Value::Block(items) => write_series(f, '[', ']', items),
            Value::Paren(items) => write_series(f, '(', ')', items),
            Value::Path(items) => write_path(f, items),
            Value::SetPath(items) => {
                write_path(f, items)?;
                write!(f, ":")
            }
            Value::GetPath(items) => {
                write!(f, ":")?;
                write_path(f, items)
            }
            Value::LitPath(items) => {
                write!(f, "'")?;
                write_path(f, items)
            }
            Value::Construct(type_word, body) => {
                write!(f, "#[{type_word} ")?;
                write_series_body(f, body)?;
                write!(f, "]")
            }
            Value::Error(err) => write!(f, "{err}"),
        }
    }
}

fn write_series(f: &mut fmt::Formatter<'_>, open: char, close: char, items: &[Value]) -> fmt::Result {
    write!(f, "{open}")?;
    write_series_body(f, items)?;
    write!(f, "{close}")
}

fn write_series_body(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, " ")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}

fn write_path(f: &mut fmt::Formatter<'_>, items: &[Value]) -> fmt::Result {
    for (i, item) in items.iter().enumerate() {
        if i > 0 {
            write!(f, "/")?;
        }
        write!(f, "{item}")?;
    }
    Ok(())
}
