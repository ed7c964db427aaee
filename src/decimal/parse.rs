//! String → `Decimal` (spec §4.5 item 1).
//!
//! Grammar: `[sign][int-part][. frac-part][(e|E)[sign]exponent]`, ASCII
//! digits only, leading/trailing whitespace stripped, empty int-part and
//! empty frac-part simultaneously is invalid. Non-ASCII Unicode digits are
//! rejected (spec §9 open question, resolved toward rejection).

use super::Decimal;
use crate::error::{DecimalError, ParseError, Result};
use crate::rounding::RoundingMode;
use crate::sign::Sign;
use crate::uint::UBig;
use core::str::FromStr;

struct Parsed {
    sign: Sign,
    digits: alloc::string::String,
    precision: u32,
}

fn parse_raw(s: &str) -> core::result::Result<Parsed, ParseError> {
    let s = s.trim();
    if s.is_empty() {
        return Err(ParseError::NoDigits);
    }

    let mut chars = s.char_indices().peekable();
    let mut sign = Sign::Positive;
    let mut rest = s;
    if let Some(&(_, c)) = chars.peek() {
        if c == '+' || c == '-' {
            if c == '-' {
                sign = Sign::Negative;
            }
            rest = &s[c.len_utf8()..];
        }
    }

    // Split off an exponent, if present.
    let (mantissa, exponent): (&str, i64) = match rest.find(['e', 'E']) {
        Some(idx) => {
            let exp_str = &rest[idx + 1..];
            if exp_str.is_empty() {
                return Err(ParseError::InvalidExponent);
            }
            let exp: i64 = exp_str.parse().map_err(|_| ParseError::InvalidExponent)?;
            (&rest[..idx], exp)
        }
        None => (rest, 0),
    };

    let (int_part, frac_part) = match mantissa.find('.') {
        Some(idx) => (&mantissa[..idx], &mantissa[idx + 1..]),
        None => (mantissa, ""),
    };

    if int_part.is_empty() && frac_part.is_empty() {
        return Err(ParseError::Empty);
    }
    if !int_part.bytes().all(|b| b.is_ascii_digit()) || !frac_part.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ParseError::InvalidDigit);
    }

    let mut digits = alloc::string::String::with_capacity(int_part.len() + frac_part.len());
    digits.push_str(int_part);
    digits.push_str(frac_part);
    if digits.is_empty() {
        digits.push('0');
    }

    // Stored precision is frac digit count, shifted by the exponent
    // (negative exponent increases precision, positive decreases it; a
    // positive exponent large enough to consume all fractional digits and
    // beyond pads the digit string with trailing zeros).
    let frac_len = frac_part.len() as i64;
    let mut precision = frac_len - exponent;
    if precision < 0 {
        // exponent shifts the point past all given digits: pad with zeros.
        for _ in 0..(-precision) {
            digits.push('0');
        }
        precision = 0;
    }

    Ok(Parsed { sign, digits, precision: precision as u32 })
}

impl Decimal {
    /// Parse without a target precision: the stored precision equals the
    /// number of fractional digits written (after accounting for an `e`
    /// exponent), not normalized.
    pub fn parse(s: &str) -> Result<Decimal> {
        let parsed = parse_raw(s)?;
        let coefficient = UBig::from_str_radix10(&parsed.digits)?;
        Ok(Decimal::from_parts(
            if coefficient.is_zero() { Sign::Zero } else { parsed.sign },
            coefficient,
            parsed.precision,
        ))
    }

    /// Parse with an explicit target precision and rounding mode (spec
    /// §4.5: optional `precision`/`rounding` keywords on the string
    /// factory).
    pub fn parse_with_precision(s: &str, precision: u32, rounding: Option<RoundingMode>) -> Result<Decimal> {
        let value = Decimal::parse(s)?;
        value.adjusted(Some(precision as i64), rounding)
    }
}

impl FromStr for Decimal {
    type Err = DecimalError;

    fn from_str(s: &str) -> Result<Decimal> {
        Decimal::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rounding::RoundingMode;

    #[test]
    fn parses_plain_decimal() {
        let d = Decimal::parse("17.800").unwrap();
        assert_eq!(d.precision(), 3);
        assert_eq!(d.coefficient.to_decimal_string(), "17800");
    }

    #[test]
    fn parses_sign_and_exponent() {
        let d = Decimal::parse("-12345678901234567890.1234567890E-10").unwrap();
        assert_eq!(d.precision(), 20);
        assert!(d.is_negative());
    }

    #[test]
    fn positive_exponent_shrinks_precision() {
        let d = Decimal::parse("123.456e2").unwrap();
        assert_eq!(d.precision(), 1);
        assert_eq!(d.coefficient.to_decimal_string(), "123456");
    }

    #[test]
    fn rejects_empty_mantissa() {
        assert!(Decimal::parse(".").is_err());
        assert!(Decimal::parse("").is_err());
        assert!(Decimal::parse("abc").is_err());
    }

    #[test]
    fn strips_whitespace() {
        let d = Decimal::parse("  42.5  ").unwrap();
        assert_eq!(d.precision(), 1);
    }

    #[test]
    fn parse_with_precision_rounds() {
        let d = Decimal::parse_with_precision("17.849", 1, Some(RoundingMode::HalfUp)).unwrap();
        assert_eq!(d.precision(), 1);
        assert_eq!(d.coefficient.to_decimal_string(), "178");
    }
}
