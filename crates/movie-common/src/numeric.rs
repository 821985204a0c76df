//! Numeric parsing and formatting helpers.
//!
//! Values move between CSV text and typed fields in both directions, so the
//! parsing and formatting rules live in one place.

/// Formats a floating-point number as a string without trailing zeros.
///
/// Rust's `Display` for `f64` already produces the shortest representation
/// that round-trips and never uses exponent notation, so integral values
/// print without a fractional part. Negative zero is folded into `0`.
///
/// # Examples
///
/// ```
/// use movie_common::format_numeric;
///
/// assert_eq!(format_numeric(1.0), "1");
/// assert_eq!(format_numeric(1.5), "1.5");
/// assert_eq!(format_numeric(100.0), "100");
/// assert_eq!(format_numeric(0.0), "0");
/// assert_eq!(format_numeric(-0.0), "0");
/// ```
pub fn format_numeric(v: f64) -> String {
    if v == 0.0 {
        return "0".to_string();
    }
    let s = format!("{v}");
    if s.contains('.') {
        s.trim_end_matches('0').trim_end_matches('.').to_string()
    } else {
        s
    }
}

/// Returns true when `value` is non-empty and made only of ASCII decimal digits.
///
/// Signs, decimal points, whitespace and any other characters are rejected.
///
/// # Examples
///
/// ```
/// use movie_common::is_digit_string;
///
/// assert!(is_digit_string("1000"));
/// assert!(is_digit_string("0"));
/// assert!(!is_digit_string("10.5"));
/// assert!(!is_digit_string("-3"));
/// assert!(!is_digit_string(""));
/// ```
pub fn is_digit_string(value: &str) -> bool {
    !value.is_empty() && value.bytes().all(|b| b.is_ascii_digit())
}

/// Parses a string as `f64`, returning `None` for invalid or empty strings.
///
/// Non-finite results (`NaN`, `inf`) are rejected.
pub fn parse_f64(value: &str) -> Option<f64> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|v| v.is_finite())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_numeric() {
        assert_eq!(format_numeric(1.0), "1");
        assert_eq!(format_numeric(1.5), "1.5");
        assert_eq!(format_numeric(1.50), "1.5");
        assert_eq!(format_numeric(0.0), "0");
        assert_eq!(format_numeric(30_000_000.0), "30000000");
        assert_eq!(format_numeric(1e20), "100000000000000000000");
    }

    #[test]
    fn test_format_numeric_round_trips() {
        for value in [12.451_780_7, 0.1 + 0.2, 373_554_033.0 / 30_000_000.0] {
            let text = format_numeric(value);
            assert_eq!(text.parse::<f64>().unwrap(), value);
        }
    }

    #[test]
    fn test_is_digit_string() {
        assert!(is_digit_string("30000000"));
        assert!(!is_digit_string("1e6"));
        assert!(!is_digit_string(" 12"));
        assert!(!is_digit_string("/zaSf5OoaPsRLo.jpg"));
    }

    #[test]
    fn test_parse_f64() {
        assert_eq!(parse_f64(""), None);
        assert_eq!(parse_f64("  "), None);
        assert_eq!(parse_f64("2.75"), Some(2.75));
        assert_eq!(parse_f64("  2.75  "), Some(2.75));
        assert_eq!(parse_f64("invalid"), None);
        assert_eq!(parse_f64("NaN"), None);
    }
}
