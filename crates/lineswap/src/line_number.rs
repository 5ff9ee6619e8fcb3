//! Lenient line-number parsing for the command line.
//!
//! Follows C `atoi`: leading ASCII whitespace is skipped, one optional sign
//! is accepted, then the longest run of decimal digits is read. Anything
//! else yields `0`, which the range check later rejects like any other
//! out-of-range index. Overflow saturates instead of wrapping.

use crate::replace::LineIndex;

/// Parses `raw` into a [`LineIndex`], never failing.
#[must_use]
pub fn parse_line_number(raw: &str) -> LineIndex {
    let trimmed = raw.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let (negative, digits) = match trimmed.as_bytes().first().copied() {
        Some(b'-') => (true, trimmed.get(1..).unwrap_or_default()),
        Some(b'+') => (false, trimmed.get(1..).unwrap_or_default()),
        _ => (false, trimmed),
    };

    let magnitude = digits
        .bytes()
        .take_while(u8::is_ascii_digit)
        .fold(0_i64, |acc, digit| {
            acc.saturating_mul(10)
                .saturating_add(i64::from(digit - b'0'))
        });

    LineIndex::new(if negative { -magnitude } else { magnitude })
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2", 2)]
    #[case("  17", 17)]
    #[case("\t+4", 4)]
    #[case("-3", -3)]
    #[case("12abc", 12)]
    #[case("007", 7)]
    #[case("abc", 0)]
    #[case("", 0)]
    #[case("-", 0)]
    #[case("+-1", 0)]
    #[case(" 1 2", 1)]
    #[case("99999999999999999999999", i64::MAX)]
    #[case("-99999999999999999999999", -i64::MAX)]
    fn parses_like_atoi(#[case] raw: &str, #[case] expected: i64) {
        assert_eq!(parse_line_number(raw), LineIndex::new(expected));
    }
}
