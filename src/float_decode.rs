//! Exact decomposition of an `f64` into `sign * mantissa / 2^k` (or
//! `sign * mantissa * 2^k`), shared by the cross-type comparator (spec
//! §4.6), the cross-type hash (spec §9) and the `from_f64` constructor
//! (spec §4.5 item 6).
//!
//! Shifts go through [`UBig::pow`] rather than a native `<<`, so a
//! subnormal's exponent floor (`-1074`) or a near-`f64::MAX` exponent
//! (`+971`) never overflows a fixed-width shift the way `1u128 << k` would.

use crate::sign::Sign;
use crate::uint::UBig;

/// Decompose a finite, nonzero `f64` into `(sign, numerator, denominator)`
/// such that the value equals `sign * numerator / denominator` exactly,
/// with `denominator` always a power of two. Returns `None` for zero,
/// NaN or infinite inputs; callers special-case those themselves.
pub(crate) fn decompose_f64(v: f64) -> Option<(Sign, UBig, UBig)> {
    if v == 0.0 || !v.is_finite() {
        return None;
    }
    let bits = v.to_bits();
    let sign = if bits >> 63 == 1 { Sign::Negative } else { Sign::Positive };
    let biased_exponent = ((bits >> 52) & 0x7ff) as i64;
    let mantissa_bits = bits & 0xf_ffff_ffff_ffff;

    // Normalized doubles carry an implicit leading 1 bit and exponent bias
    // 1023 + 52; subnormals have no implicit bit and their true exponent
    // floor is -1074 (1 - 1023 - 52).
    let (mantissa, exponent): (u64, i64) = if biased_exponent == 0 {
        (mantissa_bits, -1074)
    } else {
        (mantissa_bits | 0x10_0000_0000_0000, biased_exponent - 1075)
    };

    let mantissa = UBig::from_u64(mantissa);
    if exponent >= 0 {
        Some((sign, mantissa.mul(&UBig::from_u64(2).pow(exponent as u32)), UBig::from_u64(1)))
    } else {
        Some((sign, mantissa, UBig::from_u64(2).pow((-exponent) as u32)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decomposes_one_half() {
        let (sign, num, den) = decompose_f64(0.5).unwrap();
        assert_eq!(sign, Sign::Positive);
        assert_eq!(num, UBig::from_u64(1));
        assert_eq!(den, UBig::from_u64(2));
    }

    #[test]
    fn decomposes_large_magnitude_without_overflow() {
        // Exponent here is far larger than a u128/i128 shift could survive
        // (this regressed a shift-overflow panic in an earlier revision).
        let (sign, num, den) = decompose_f64(1e300).unwrap();
        assert_eq!(sign, Sign::Positive);
        assert_eq!(den, UBig::from_u64(1));
        assert!(!num.is_zero());
    }

    #[test]
    fn decomposes_subnormal_without_overflow() {
        let tiny = f64::from_bits(1); // smallest positive subnormal
        let (sign, num, den) = decompose_f64(tiny).unwrap();
        assert_eq!(sign, Sign::Positive);
        assert_eq!(num, UBig::from_u64(1));
        assert_eq!(den, UBig::from_u64(2).pow(1074));
    }

    #[test]
    fn rejects_non_finite() {
        assert!(decompose_f64(f64::NAN).is_none());
        assert!(decompose_f64(f64::INFINITY).is_none());
        assert!(decompose_f64(0.0).is_none());
    }
}
