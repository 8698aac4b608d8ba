//! Integer parsing for raw form-control values.
//!
//! Browsers hand us strings from `<input>` elements; the page script has always
//! read them with `parseInt(value, 10)`, so "12abc" is 12 and "abc" is nothing.

/// Leading-integer parse: optional leading whitespace, optional sign, then at
/// least one ASCII digit. Trailing characters are ignored. Saturates instead of
/// overflowing.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };

    let end = digits
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(digits.len());
    if end == 0 {
        return None;
    }

    let magnitude = digits[..end].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// `parseInt(raw || fallback, 10)`: an empty string reads as `fallback`.
pub fn parse_int_or(raw: &str, fallback: &str) -> Option<i64> {
    if raw.is_empty() {
        parse_int_prefix(fallback)
    } else {
        parse_int_prefix(raw)
    }
}
