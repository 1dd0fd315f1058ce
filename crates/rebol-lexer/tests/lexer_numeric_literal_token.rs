use pretty_assertions::assert_eq;
use rebol_lexer::{scan_source, ScanOptions, Value};

fn scan(src: &str) -> Vec<Value> {
    scan_source(src.as_bytes(), ScanOptions::new()).expect("scan should succeed")
}

#[test]
fn scans_plain_integer() {
    assert_eq!(scan("123"), vec![Value::Integer(123)]);
}

#[test]
fn scans_signed_integers() {
    assert_eq!(scan("+17"), vec![Value::Integer(17)]);
    assert_eq!(scan("-98"), vec![Value::Integer(-98)]);
}

#[test]
fn scans_integer_with_tick_separators() {
    assert_eq!(scan("1'000'000"), vec![Value::Integer(1_000_000)]);
}

#[test]
fn scans_decimal() {
    assert_eq!(scan("34.5"), vec![Value::Decimal(34.5)]);
    assert_eq!(scan("-3.62"), vec![Value::Decimal(-3.62)]);
}

#[test]
fn scans_percent() {
    assert_eq!(scan("50%"), vec![Value::Percent(0.5)]);
}

#[test]
fn scans_money() {
    assert_eq!(scan("$19.99"), vec![Value::Money(19.99)]);
}

#[test]
fn scans_pair() {
    assert_eq!(scan("100x200"), vec![Value::Pair(100.0, 200.0)]);
}

#[test]
fn scans_tuple() {
    assert_eq!(scan("1.2.3"), vec![Value::Tuple(vec![1, 2, 3])]);
}

#[test]
fn scans_time() {
    assert_eq!(scan("10:30:15"), vec![Value::Time { hours: 10, minutes: 30, seconds: 15, nanos: 0 }]);
}

#[test]
fn scans_radix_prefixed_binary_literals() {
    assert_eq!(scan("2#{0A}"), vec![Value::Binary(vec![0x0A])]);
    assert_eq!(scan("16#{FF}"), vec![Value::Binary(vec![0xFF])]);
    assert_eq!(scan("64#{DEAD BEEF}"), vec![Value::Binary(vec![0xDE, 0xAD, 0xBE, 0xEF])]);
}

#[test]
fn pound_flagged_number_without_a_binary_prefix_is_malformed() {
    let err = scan_source(b"12#34", ScanOptions::new()).unwrap_err();
    assert_eq!(err.kind, rebol_syntax::ScanErrorKind::Invalid);
}

#[test]
fn scans_date_with_embedded_time() {
    let values = scan("1-Jan-2024/10:30:00");
    match &values[0] {
        Value::Date { year, month, day, time } => {
            assert_eq!((*year, *month, *day), (2024, 1, 1));
            assert!(time.is_some());
        }
        other => panic!("expected a date, got {other:?}"),
    }
}
