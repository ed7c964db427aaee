//! Parsing a `UBig` from a decimal digit string (spec §4.1: "construct
//! from ... decimal digit string").

use super::UBig;
use crate::error::ParseError;

impl UBig {
    /// Parse an ASCII decimal digit string (no sign, no whitespace, no
    /// exponent — those are handled one layer up by `Decimal`'s parser).
    pub fn from_str_radix10(s: &str) -> Result<UBig, ParseError> {
        if s.is_empty() {
            return Err(ParseError::NoDigits);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ParseError::InvalidDigit);
        }

        // Process in chunks of 9 decimal digits so the multiply-accumulate
        // loop does O(n/9) big-multiplications instead of O(n).
        const CHUNK: usize = 9;
        let bytes = s.as_bytes();
        let first_chunk_len = bytes.len() % CHUNK;
        let mut acc = UBig::ZERO;
        let ten_pow_chunk = UBig::pow10(CHUNK as u32);

        let mut start = 0;
        if first_chunk_len != 0 {
            let chunk_val: u64 = s[0..first_chunk_len].parse().unwrap();
            acc = UBig::from_u64(chunk_val);
            start = first_chunk_len;
        }
        while start < bytes.len() {
            let chunk_val: u64 = s[start..start + CHUNK].parse().unwrap();
            acc = acc.mul(&ten_pow_chunk).add(&UBig::from_u64(chunk_val));
            start += CHUNK;
        }
        Ok(acc)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_small() {
        assert_eq!(UBig::from_str_radix10("12345").unwrap(), UBig::from_u64(12345));
    }

    #[test]
    fn parses_large() {
        let s = "1".to_string() + &"0".repeat(40);
        let v = UBig::from_str_radix10(&s).unwrap();
        assert_eq!(v.to_string(), s);
    }

    #[test]
    fn rejects_non_digits() {
        assert_eq!(UBig::from_str_radix10("12a").unwrap_err(), ParseError::InvalidDigit);
        assert_eq!(UBig::from_str_radix10("").unwrap_err(), ParseError::NoDigits);
    }
}
