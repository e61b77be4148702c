//! Lenient cell parsers: malformed input yields `None`, never an error.

/// Non-negative integer made only of ASCII digits (`"10"`).
/// Empty strings, signs, spaces and decimals are rejected.
pub fn parse_optional_int(s: &str) -> Option<u64> {
    if s.is_empty() || !s.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    s.parse().ok()
}

/// Any finite floating-point number, surrounding whitespace allowed.
pub fn parse_optional_float(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    t.parse::<f64>().ok().filter(|v| v.is_finite())
}
