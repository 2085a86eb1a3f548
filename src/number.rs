//! Numeric token classification and cleanup.
//!
//! The transpiler never evaluates numbers: a token classified as numeric is
//! emitted as a **quoted string** (after separator cleanup) so
//! arbitrary-precision values survive round-trips through double-precision
//! downstream parsers. Classification is therefore purely lexical and must
//! be exact — a token with an identifier tail (`123abc`, `45px`, `0xFFg`)
//! is NOT a number and falls back to bareword handling.

use crate::chars::is_digit;
use std::borrow::Cow;

/// Checks whether a whole token is a pure decimal number.
///
/// Accepts an optional leading sign, `_` separators, a single decimal point
/// (leading and trailing dots are fine: `.5`, `1.`, `0.`) and an optional
/// exponent (`e`/`E`, optional sign, at least one digit). At least one
/// mantissa digit is required overall.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::number::is_decimal_number;
///
/// assert!(is_decimal_number("1_000"));
/// assert!(is_decimal_number("-9.99e+48"));
/// assert!(is_decimal_number(".5"));
/// assert!(is_decimal_number("123."));
/// assert!(!is_decimal_number("123abc"));
/// assert!(!is_decimal_number("123..456"));
/// assert!(!is_decimal_number("123e"));
/// assert!(!is_decimal_number("."));
/// ```
#[must_use]
pub fn is_decimal_number(token: &str) -> bool {
    let bytes = token.as_bytes();
    let len = bytes.len();
    if len == 0 {
        return false;
    }

    let mut j = 0;
    if bytes[0] == b'+' || bytes[0] == b'-' {
        if len == 1 {
            return false;
        }
        j = 1;
    }

    // The first significant character must be a digit or a dot.
    if !is_digit(bytes[j]) && bytes[j] != b'.' {
        return false;
    }

    let mut saw_digit = false;
    let mut saw_dot = false;

    while j < len {
        let b = bytes[j];
        if is_digit(b) {
            saw_digit = true;
            j += 1;
        } else if b == b'_' {
            j += 1;
        } else if b == b'.' && !saw_dot {
            saw_dot = true;
            j += 1;
        } else if (b == b'e' || b == b'E') && saw_digit {
            j += 1;
            if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
                j += 1;
            }
            let mut exp_digits = false;
            while j < len {
                if is_digit(bytes[j]) {
                    exp_digits = true;
                    j += 1;
                } else if bytes[j] == b'_' {
                    j += 1;
                } else {
                    return false;
                }
            }
            return exp_digits;
        } else {
            return false;
        }
    }

    saw_digit
}

/// Checks whether a whole token is a radix literal: optional sign, then
/// `0x`/`0X` hex, `0b`/`0B` binary or `0o`/`0O` octal digits, with `_`
/// separators allowed. Requires at least one radix digit.
///
/// Only consulted when `radix_literals_as_numbers` is enabled; otherwise
/// these tokens are generic barewords.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::number::is_radix_number;
///
/// assert!(is_radix_number("0xFF_FF"));
/// assert!(is_radix_number("-0b1010"));
/// assert!(is_radix_number("0o755"));
/// assert!(!is_radix_number("0x"));
/// assert!(!is_radix_number("0xFFg"));
/// assert!(!is_radix_number("0b102"));
/// ```
#[must_use]
pub fn is_radix_number(token: &str) -> bool {
    let bytes = token.as_bytes();
    let len = bytes.len();

    let mut j = 0;
    if j < len && (bytes[j] == b'+' || bytes[j] == b'-') {
        j += 1;
    }
    if j + 1 >= len || bytes[j] != b'0' {
        return false;
    }

    let digit_ok: fn(u8) -> bool = match bytes[j + 1] {
        b'x' | b'X' => |b: u8| b.is_ascii_hexdigit(),
        b'b' | b'B' => |b: u8| b == b'0' || b == b'1',
        b'o' | b'O' => |b: u8| (b'0'..=b'7').contains(&b),
        _ => return false,
    };
    j += 2;

    let mut saw_digit = false;
    while j < len {
        let b = bytes[j];
        if digit_ok(b) {
            saw_digit = true;
        } else if b != b'_' {
            return false;
        }
        j += 1;
    }
    saw_digit
}

/// Strips `_` separators and a single leading `+` from a classified numeric
/// token. A leading `-` is preserved. Borrows when nothing needs stripping.
///
/// # Examples
///
/// ```rust
/// use relaxed_json::number::clean_number;
///
/// assert_eq!(clean_number("1_000"), "1000");
/// assert_eq!(clean_number("+7"), "7");
/// assert_eq!(clean_number("-9_876_543.21_0"), "-9876543.210");
/// assert_eq!(clean_number("12.5"), "12.5");
/// ```
#[must_use]
pub fn clean_number(token: &str) -> Cow<'_, str> {
    if !token.contains('_') && !token.starts_with('+') {
        return Cow::Borrowed(token);
    }
    let mut cleaned = String::with_capacity(token.len());
    for (k, ch) in token.chars().enumerate() {
        if ch == '_' || (k == 0 && ch == '+') {
            continue;
        }
        cleaned.push(ch);
    }
    Cow::Owned(cleaned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_integers_and_signs() {
        assert!(is_decimal_number("0"));
        assert!(is_decimal_number("-0"));
        assert!(is_decimal_number("+0"));
        assert!(is_decimal_number("00"));
        assert!(is_decimal_number("123"));
        assert!(is_decimal_number("-42"));
        assert!(is_decimal_number("+7"));
        assert!(!is_decimal_number("+"));
        assert!(!is_decimal_number("-"));
        assert!(!is_decimal_number(""));
    }

    #[test]
    fn test_floats_and_dots() {
        assert!(is_decimal_number("0.5"));
        assert!(is_decimal_number(".75"));
        assert!(is_decimal_number("-3.14159"));
        assert!(is_decimal_number("0."));
        assert!(is_decimal_number("1."));
        assert!(is_decimal_number(".0"));
        assert!(!is_decimal_number("."));
        assert!(!is_decimal_number("-."));
        assert!(!is_decimal_number("1.2.3"));
        assert!(!is_decimal_number("123..456"));
    }

    #[test]
    fn test_exponents() {
        assert!(is_decimal_number("1e3"));
        assert!(is_decimal_number("9.99999999999999E+48"));
        assert!(is_decimal_number("4.2e-7"));
        assert!(is_decimal_number("1e1_0"));
        assert!(!is_decimal_number("123e"));
        assert!(!is_decimal_number("123e+"));
        assert!(!is_decimal_number("123ee456"));
        assert!(!is_decimal_number("e10"));
    }

    #[test]
    fn test_underscores() {
        assert!(is_decimal_number("1_000"));
        assert!(is_decimal_number("12_3.4_5e6_7"));
        assert!(!is_decimal_number("_123")); // must start with digit or dot
    }

    #[test]
    fn test_identifier_tails_rejected() {
        assert!(!is_decimal_number("123abc"));
        assert!(!is_decimal_number("45px"));
        assert!(!is_decimal_number("45$"));
        assert!(!is_decimal_number("100%"));
    }

    #[test]
    fn test_radix() {
        assert!(is_radix_number("0xFF"));
        assert!(is_radix_number("0X1a"));
        assert!(is_radix_number("-0x2a"));
        assert!(is_radix_number("0xAB_CD"));
        assert!(is_radix_number("0b1010"));
        assert!(is_radix_number("0O755"));
        assert!(!is_radix_number("0x"));
        assert!(!is_radix_number("0x_"));
        assert!(!is_radix_number("0xFFg"));
        assert!(!is_radix_number("0b2"));
        assert!(!is_radix_number("0o8"));
        assert!(!is_radix_number("1x0"));
    }

    #[test]
    fn test_clean_number() {
        assert_eq!(clean_number("1_000"), "1000");
        assert_eq!(clean_number("0xFF_FF"), "0xFFFF");
        assert_eq!(clean_number("+.5"), ".5");
        assert_eq!(clean_number("-1.0e+2"), "-1.0e+2");
        // borrow when nothing to strip
        assert!(matches!(clean_number("123"), Cow::Borrowed(_)));
    }
}
