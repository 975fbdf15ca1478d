//! Lenient parsing of the `timeIndex` request parameter.

/// Parses a raw time index, falling back to `default` when nothing usable is present.
///
/// Accepts the longest `[+-]?[0-9]+` prefix after trimming whitespace, so `"12abc"` is 12
/// and `"3.9"` is 3. Missing, empty, non-numeric and `i64`-overflowing input all resolve
/// to `default`.
pub fn parse_time_index(raw: Option<&str>, default: i64) -> i64 {
    let Some(raw) = raw else {
        return default;
    };
    let s = raw.trim();

    let sign_len = usize::from(s.starts_with(['+', '-']));
    let digits = s[sign_len..]
        .bytes()
        .take_while(u8::is_ascii_digit)
        .count();
    if digits == 0 {
        return default;
    }

    s[..sign_len + digits].parse().unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    const DEFAULT: i64 = 3310;

    #[test]
    fn missing_or_blank_uses_default() {
        assert_eq!(parse_time_index(None, DEFAULT), DEFAULT);
        assert_eq!(parse_time_index(Some(""), DEFAULT), DEFAULT);
        assert_eq!(parse_time_index(Some("   "), DEFAULT), DEFAULT);
    }

    #[test]
    fn non_numeric_uses_default() {
        assert_eq!(parse_time_index(Some("abc"), DEFAULT), DEFAULT);
        assert_eq!(parse_time_index(Some("-"), DEFAULT), DEFAULT);
        assert_eq!(parse_time_index(Some("+x1"), DEFAULT), DEFAULT);
        assert_eq!(parse_time_index(Some("NaN"), DEFAULT), DEFAULT);
    }

    #[test]
    fn plain_integers() {
        assert_eq!(parse_time_index(Some("0"), DEFAULT), 0);
        assert_eq!(parse_time_index(Some("42"), DEFAULT), 42);
        assert_eq!(parse_time_index(Some(" 7 "), DEFAULT), 7);
        assert_eq!(parse_time_index(Some("+12"), DEFAULT), 12);
        assert_eq!(parse_time_index(Some("-5"), DEFAULT), -5);
    }

    #[test]
    fn numeric_prefix_is_kept() {
        assert_eq!(parse_time_index(Some("12abc"), DEFAULT), 12);
        assert_eq!(parse_time_index(Some("3.9"), DEFAULT), 3);
        assert_eq!(parse_time_index(Some("-2e5"), DEFAULT), -2);
    }

    #[test]
    fn overflow_uses_default() {
        assert_eq!(parse_time_index(Some("99999999999999999999999"), DEFAULT), DEFAULT);
        assert_eq!(
            parse_time_index(Some("9223372036854775807"), DEFAULT),
            i64::MAX
        );
    }
}
