//! Parsing of the `--upper` / `--lower` limit arguments.
//!
//! Limits follow C integer literal conventions: a `0x`/`0X` prefix selects
//! hexadecimal, a leading `0` selects octal, anything else is decimal.
//! Leading whitespace and a single `+` are tolerated. The whole argument must
//! be consumed, otherwise it is rejected.

use crate::error::{Error, Result};

/// Parse a limit argument into a `u64`.
///
/// # Errors
///
/// Returns [`Error::InvalidNumber`] carrying the original argument when it is
/// empty, signed negative, contains trailing garbage, or overflows `u64`.
pub fn parse_limit(arg: &str) -> Result<u64> {
    let invalid = || Error::invalid_number(arg);

    let body = arg.trim_start_matches(|c: char| c.is_ascii_whitespace());
    let body = body.strip_prefix('+').unwrap_or(body);

    let (digits, radix) = if let Some(hex) = body
        .strip_prefix("0x")
        .or_else(|| body.strip_prefix("0X"))
    {
        (hex, 16)
    } else if body.len() > 1 && body.starts_with('0') {
        (&body[1..], 8)
    } else {
        (body, 10)
    };

    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return Err(invalid());
    }

    u64::from_str_radix(digits, radix).map_err(|_| invalid())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal() {
        assert_eq!(parse_limit("0").unwrap(), 0);
        assert_eq!(parse_limit("1").unwrap(), 1);
        assert_eq!(parse_limit("4096").unwrap(), 4096);
        assert_eq!(parse_limit("18446744073709551615").unwrap(), u64::MAX);
    }

    #[test]
    fn test_octal() {
        assert_eq!(parse_limit("010").unwrap(), 8);
        assert_eq!(parse_limit("0777").unwrap(), 511);
        assert_eq!(parse_limit("00").unwrap(), 0);
    }

    #[test]
    fn test_hex() {
        assert_eq!(parse_limit("0x10").unwrap(), 16);
        assert_eq!(parse_limit("0XfF").unwrap(), 255);
    }

    #[test]
    fn test_leading_whitespace_and_plus() {
        assert_eq!(parse_limit("  42").unwrap(), 42);
        assert_eq!(parse_limit("+7").unwrap(), 7);
        assert_eq!(parse_limit(" +0x1f").unwrap(), 31);
    }

    #[test]
    fn test_rejects_partial_input() {
        for arg in ["abc", "12abc", "1 ", "0x", "0xg", "08", "1.5", "", " ", "+", "++1"] {
            let err = parse_limit(arg).unwrap_err();
            assert!(
                matches!(&err, Error::InvalidNumber { arg: a } if a == arg),
                "{arg:?} should be rejected, got {err:?}"
            );
        }
    }

    #[test]
    fn test_rejects_negative() {
        assert!(parse_limit("-1").is_err());
        assert!(parse_limit("-0").is_err());
    }

    #[test]
    fn test_rejects_overflow() {
        assert!(parse_limit("18446744073709551616").is_err());
        assert!(parse_limit("0x10000000000000000").is_err());
    }

    #[test]
    fn test_error_names_argument() {
        let err = parse_limit("abc").unwrap_err();
        assert_eq!(err.to_string(), "'abc' is not a non-negative integer");
    }
}
