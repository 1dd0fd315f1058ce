//! Value constructors (§1 "Out of scope: external collaborators" —
//! `Scan_Integer`, `Scan_Decimal`, `Scan_Date`, etc.).
//!
//! The original scanner treats these as callouts with no implementation
//! given; a scanner that cannot actually produce `Value`s isn't useful to
//! anyone reading this crate, so each is implemented here as a small pure
//! function over the classified lexeme's text. They are deliberately plain
//! — no interning, no heap, no evaluation — matching the "external
//! collaborator" contract's narrow surface.

use rebol_syntax::{Value, TokenKind};

pub(crate) fn integer(text: &str) -> Option<Value> {
    let cleaned = text.replace('\'', "");
    cleaned.parse::<i64>().ok().map(Value::Integer)
}

pub(crate) fn decimal(text: &str) -> Option<Value> {
    text.replace(',', ".").parse::<f64>().ok().map(Value::Decimal)
}

pub(crate) fn percent(text: &str) -> Option<Value> {
    let body = text.strip_suffix('%')?;
    body.parse::<f64>().ok().map(|n| Value::Percent(n / 100.0))
}

pub(crate) fn money(text: &str) -> Option<Value> {
    let body = text.strip_prefix('$').unwrap_or(text);
    body.parse::<f64>().ok().map(Value::Money)
}

pub(crate) fn pair(text: &str) -> Option<Value> {
    let (x, y) = split_once_ci(text, 'x')?;
    Some(Value::Pair(x.parse().ok()?, y.parse().ok()?))
}

pub(crate) fn tuple(text: &str) -> Option<Value> {
    let mut parts = Vec::new();
    for segment in text.split('.') {
        parts.push(segment.parse::<u8>().ok()?);
    }
    if parts.len() < 2 {
        return None;
    }
    Some(Value::Tuple(parts))
}

pub(crate) fn time(text: &str) -> Option<Value> {
    let mut sign = 1i32;
    let text = if let Some(rest) = text.strip_prefix('-') {
        sign = -1;
        rest
    } else {
        text.strip_prefix('+').unwrap_or(text)
    };

    let mut fields = text.split(':');
    let hours: i32 = fields.next()?.parse().ok()?;
    let minutes: u8 = fields.next().unwrap_or("0").parse().ok()?;
    let (seconds, nanos) = match fields.next() {
        Some(sec) => {
            if let Some((whole, frac)) = sec.split_once('.') {
                let nanos = frac_to_nanos(frac);
                (whole.parse().ok()?, nanos)
            } else {
                (sec.parse().ok()?, 0)
            }
        }
        None => (0, 0),
    };

    Some(Value::Time { hours: sign * hours, minutes, seconds, nanos })
}

fn frac_to_nanos(frac: &str) -> u32 {
    let mut digits: String = frac.chars().take(9).collect();
    while digits.len() < 9 {
        digits.push('0');
    }
    digits.parse().unwrap_or(0)
}

pub(crate) fn date(text: &str) -> Option<Value> {
    let (date_part, time_part) = match text.split_once('/') {
        Some((d, t)) => (d, Some(t)),
        None => (text, None),
    };

    let mut segments = date_part.splitn(3, '-');
    let first = segments.next()?;
    let second = segments.next()?;
    let third = segments.next()?;

    let (day, month, year) = if first.len() == 4 {
        (third.parse().ok()?, month_number(second)?, first.parse().ok()?)
    } else {
        (first.parse().ok()?, month_number(second)?, normalise_year(third)?)
    };

    let time = match time_part {
        Some(t) => Some(Box::new(time(t)?)),
        None => None,
    };

    Some(Value::Date { year, month, day, time })
}

fn normalise_year(text: &str) -> Option<i32> {
    let n: i32 = text.parse().ok()?;
    Some(if text.len() <= 2 { if n < 70 { 2000 + n } else { 1900 + n } } else { n })
}

fn month_number(text: &str) -> Option<u8> {
    if let Ok(n) = text.parse::<u8>() {
        return (1..=12).contains(&n).then_some(n);
    }
    const NAMES: [&str; 12] =
        ["jan", "feb", "mar", "apr", "may", "jun", "jul", "aug", "sep", "oct", "nov", "dec"];
    let lower = text.to_ascii_lowercase();
    NAMES.iter().position(|n| lower.starts_with(n)).map(|i| i as u8 + 1)
}

pub(crate) fn binary(body: &str) -> Option<Value> {
    let hex: String = body.chars().filter(|c| !c.is_whitespace()).collect();
    if hex.len() % 2 != 0 {
        return None;
    }
    let mut bytes = Vec::with_capacity(hex.len() / 2);
    let chars: Vec<char> = hex.chars().collect();
    for pair in chars.chunks(2) {
        let s: String = pair.iter().collect();
        bytes.push(u8::from_str_radix(&s, 16).ok()?);
    }
    Some(Value::Binary(bytes))
}

fn split_once_ci(text: &str, sep: char) -> Option<(&str, &str)> {
    let idx = text.find(|c: char| c.eq_ignore_ascii_case(&sep))?;
    Some((&text[..idx], &text[idx + sep.len_utf8()..]))
}

/// Builds the typed leaf [`Value`] for a classified token. Returns `None`
/// when the constructor itself fails to parse the body — the caller turns
/// that into a `syntax_error` (§4.8 step 6).
pub(crate) fn construct_leaf(kind: TokenKind, text: &str) -> Option<Value> {
    match kind {
        TokenKind::Integer => integer(text),
        TokenKind::Decimal => decimal(text),
        TokenKind::Percent => percent(text),
        TokenKind::Money => money(text),
        TokenKind::Pair => pair(text),
        TokenKind::Tuple => tuple(text),
        TokenKind::Time => time(text),
        TokenKind::Date => date(text),
        TokenKind::Binary => binary(text),
        TokenKind::Char => text.chars().next().map(Value::Char),
        TokenKind::String => Some(Value::String(text.to_string())),
        TokenKind::File => Some(Value::File(text.to_string())),
        TokenKind::Email => Some(Value::Email(text.to_string())),
        TokenKind::Url => Some(Value::Url(text.to_string())),
        TokenKind::Tag => Some(Value::Tag(text.to_string())),
        TokenKind::Issue => Some(Value::Issue(text.to_string())),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn parses_integer_with_tick_separators() {
        assert_eq!(integer("1'200"), Some(Value::Integer(1200)));
    }

    #[test]
    fn parses_percent() {
        assert_eq!(percent("50%"), Some(Value::Percent(0.5)));
    }

    #[test]
    fn parses_pair() {
        assert_eq!(pair("100x200"), Some(Value::Pair(100.0, 200.0)));
    }

    #[test]
    fn parses_tuple() {
        assert_eq!(tuple("1.2.3"), Some(Value::Tuple(vec![1, 2, 3])));
    }

    #[test]
    fn parses_time_with_fraction() {
        let v = time("10:30:15.5").unwrap();
        assert_eq!(v, Value::Time { hours: 10, minutes: 30, seconds: 15, nanos: 500_000_000 });
    }

    #[test]
    fn parses_date_with_named_month_and_embedded_time() {
        let v = date("1-jan-2024/10:30:00").unwrap();
        match v {
            Value::Date { year, month, day, time } => {
                assert_eq!((year, month, day), (2024, 1, 1));
                assert_eq!(*time.unwrap(), Value::Time { hours: 10, minutes: 30, seconds: 0, nanos: 0 });
            }
            _ => panic!("expected a date"),
        }
    }

    #[test]
    fn parses_binary_ignoring_whitespace() {
        assert_eq!(binary(" DEAD beef "), Some(Value::Binary(vec![0xDE, 0xAD, 0xBE, 0xEF])));
    }
}
