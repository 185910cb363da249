//! Token parsing

use crate::error::{InvalidToken, TokenErrorKind};

/// First code point of each run of ten Basic Multilingual Plane characters
/// in Unicode category `Nd`, sorted. Digit value is the offset from the run
/// start.
const BMP_DIGIT_ZEROS: [u32; 37] = [
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10,
];

/// Decimal value of a digit character.
///
/// Supplementary-plane digits are rejected.
fn decimal_digit(c: char) -> Option<i32> {
    let cp = u32::from(c);
    let run = BMP_DIGIT_ZEROS.partition_point(|&zero| zero <= cp);
    let zero = BMP_DIGIT_ZEROS[run.checked_sub(1)?];
    let value = cp - zero;
    (value < 10).then_some(value as i32)
}

/// Parse a single token as a base-10 `i32`.
///
/// Accepts an optional leading `+` or `-` followed by one or more decimal
/// digits from any script (`٤`, `２`). Surrounding whitespace, decimal points
/// and out-of-range values are rejected.
pub fn parse_token(token: &str) -> Result<i32, InvalidToken> {
    let invalid = |kind| InvalidToken::new(token, kind);

    if token.is_empty() {
        return Err(invalid(TokenErrorKind::Empty));
    }

    let (negative, digits) = match token.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, token.strip_prefix('+').unwrap_or(token)),
    };
    if digits.is_empty() {
        return Err(invalid(TokenErrorKind::InvalidDigit));
    }

    // Accumulate negatively so i32::MIN is reachable.
    let mut value: i32 = 0;
    for c in digits.chars() {
        let digit = decimal_digit(c).ok_or_else(|| invalid(TokenErrorKind::InvalidDigit))?;
        value = value
            .checked_mul(10)
            .and_then(|v| v.checked_sub(digit))
            .ok_or_else(|| invalid(TokenErrorKind::Overflow))?;
    }

    if negative {
        Ok(value)
    } else {
        value
            .checked_neg()
            .ok_or_else(|| invalid(TokenErrorKind::Overflow))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_plain_values() {
        assert_eq!(parse_token("0"), Ok(0));
        assert_eq!(parse_token("-0"), Ok(0));
        assert_eq!(parse_token("42"), Ok(42));
        assert_eq!(parse_token("-4"), Ok(-4));
        assert_eq!(parse_token("+2"), Ok(2));
        assert_eq!(parse_token("007"), Ok(7));
    }

    #[test]
    fn test_parse_range_limits() {
        assert_eq!(parse_token("2147483647"), Ok(i32::MAX));
        assert_eq!(parse_token("-2147483648"), Ok(i32::MIN));

        let err = parse_token("2147483648").unwrap_err();
        assert_eq!(err.kind, TokenErrorKind::Overflow);
        assert_eq!(err.token, "2147483648");

        let err = parse_token("-2147483649").unwrap_err();
        assert_eq!(err.kind, TokenErrorKind::Overflow);

        let err = parse_token("99999999999999999999").unwrap_err();
        assert_eq!(err.kind, TokenErrorKind::Overflow);
    }

    #[test]
    fn test_parse_non_ascii_digits() {
        assert_eq!(parse_token("٤"), Ok(4));
        assert_eq!(parse_token("２"), Ok(2));
        assert_eq!(parse_token("-۱۲"), Ok(-12));
        assert_eq!(parse_token("१०"), Ok(10));
        assert_eq!(parse_token("1٢３"), Ok(123));
    }

    #[test]
    fn test_decimal_digit_boundaries() {
        assert_eq!(decimal_digit('0'), Some(0));
        assert_eq!(decimal_digit('9'), Some(9));
        assert_eq!(decimal_digit('\u{0669}'), Some(9));
        assert_eq!(decimal_digit('\u{FF19}'), Some(9));
        assert_eq!(decimal_digit('/'), None);
        assert_eq!(decimal_digit(':'), None);
        assert_eq!(decimal_digit('\u{066A}'), None);
        assert_eq!(decimal_digit('\u{FF1A}'), None);
        assert_eq!(decimal_digit('a'), None);
        // Mathematical bold digit two, outside the BMP
        assert_eq!(decimal_digit('\u{1D7D0}'), None);
    }

    #[test]
    fn test_rejects_non_integer_forms() {
        for token in [
            " 2", "2 ", "2.0", "four", "1e3", "-", "+", "0x10", "+-5", "--5", "½", "Ⅳ",
        ] {
            let err = parse_token(token).unwrap_err();
            assert_eq!(err.kind, TokenErrorKind::InvalidDigit, "token {:?}", token);
        }
    }

    #[test]
    fn test_rejects_empty() {
        assert_eq!(parse_token("").unwrap_err().kind, TokenErrorKind::Empty);
    }
}
