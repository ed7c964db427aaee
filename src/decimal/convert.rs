//! Constructors from non-string sources, and conversions back out to
//! integers, rationals and floats (spec §4.4, §4.5).

use super::Decimal;
use crate::error::{ConversionError, DecimalError, Result};
use crate::int::Int;
use crate::rounding::RoundingMode;
use crate::sign::Sign;
use crate::uint::UBig;

fn gcd(a: &UBig, b: &UBig) -> UBig {
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let (_, r) = a.divmod(&b);
        a = b;
        b = r;
    }
    a
}

impl Decimal {
    /// From a machine integer; precision defaults to 0 (spec §4.5 item 2).
    pub fn from_i64(v: i64) -> Decimal {
        Decimal::from_parts(Sign::of_i64(v), UBig::from_u64(v.unsigned_abs()), 0)
    }

    /// From an arbitrary-precision signed integer; precision 0.
    pub fn from_int(v: &Int) -> Decimal {
        Decimal::from_parts(v.sign, v.magnitude.clone(), 0)
    }

    /// Rewrap an existing `Decimal`, optionally adjusting to a new
    /// precision (spec §4.5 item 3: "if `p` is given, delegates to
    /// `adjusted(p, mode)`").
    pub fn from_decimal(v: &Decimal, precision: Option<i64>, rounding: Option<RoundingMode>) -> Result<Decimal> {
        match precision {
            Some(p) => v.adjusted(Some(p), rounding),
            None => Ok(v.clone()),
        }
    }

    /// From a reduced rational `numerator/denominator` (spec §4.5 item 5).
    /// If `precision` is given, the value is rounded to that precision
    /// using `rounding` (or the process default). If `precision` is
    /// absent, the ratio must be exactly representable as `n * 10^-p` for
    /// some integer `p`, or this fails with a *value error*.
    pub fn from_ratio(numerator: i128, denominator: i128, precision: Option<u32>, rounding: Option<RoundingMode>) -> Result<Decimal> {
        if denominator == 0 {
            return Err(DecimalError::Arithmetic("zero denominator"));
        }
        let sign = Sign::of_i64(numerator.signum() as i64) * Sign::of_i64(denominator.signum() as i64);
        let num_mag = UBig::from_u128(numerator.unsigned_abs());
        let den_mag = UBig::from_u128(denominator.unsigned_abs());
        Decimal::from_ratio_ubig(sign, num_mag, den_mag, precision, rounding)
    }

    /// `from_ratio`'s implementation over arbitrary-precision magnitudes,
    /// shared with [`from_f64`](Self::from_f64) so a float whose exact
    /// binary exponent is out of `i128` range (subnormals, or magnitudes
    /// near `f64::MAX`) never needs a fixed-width numerator/denominator.
    pub(crate) fn from_ratio_ubig(sign: Sign, num_mag: UBig, den_mag: UBig, precision: Option<u32>, rounding: Option<RoundingMode>) -> Result<Decimal> {
        let g = gcd(&num_mag, &den_mag);
        let (num_mag, _) = num_mag.divmod(&g);
        let (den_mag, _) = den_mag.divmod(&g);
        let sign = if num_mag.is_zero() { Sign::Zero } else { sign };

        match precision {
            Some(p) => {
                let mode = Decimal::default_rounding_or(rounding);
                let scaled_num = num_mag.mul(&UBig::pow10(p));
                let (q, r) = scaled_num.divmod(&den_mag);
                let up = crate::rounding::should_round_up(&q, &r, &den_mag, sign, mode);
                let coeff = if up { q.add(&UBig::from_u64(1)) } else { q };
                Ok(Decimal::from_parts(sign, coeff, p))
            }
            None => {
                // Denominator must reduce to 2^a * 5^b for an exact
                // terminating decimal expansion to exist (spec §9).
                let mut rem_den = den_mag.clone();
                let mut a = 0u32;
                while rem_den.cmp_ubig(&UBig::from_u64(1)) != core::cmp::Ordering::Equal {
                    let (q, r) = rem_den.divmod_small(2);
                    if r != 0 {
                        break;
                    }
                    rem_den = q;
                    a += 1;
                }
                let mut b = 0u32;
                while rem_den.cmp_ubig(&UBig::from_u64(1)) != core::cmp::Ordering::Equal {
                    let (q, r) = rem_den.divmod_small(5);
                    if r != 0 {
                        break;
                    }
                    rem_den = q;
                    b += 1;
                }
                if rem_den.cmp_ubig(&UBig::from_u64(1)) != core::cmp::Ordering::Equal {
                    return Err(DecimalError::Value(
                        "rational denominator is not of the form 2^a * 5^b; a precision or rounding mode is required",
                    ));
                }
                let p = a.max(b);
                let scale_num = UBig::pow10(p).mul(&num_mag);
                let (coeff, _) = scale_num.divmod(&den_mag);
                Ok(Decimal::from_parts(sign, coeff, p))
            }
        }
    }

    /// From a binary float via its exact integer-ratio decomposition
    /// (spec §4.5 item 6). Always requires a target precision: binary
    /// floats almost never have short terminating decimal expansions.
    pub fn from_f64(v: f64, precision: u32, rounding: Option<RoundingMode>) -> Result<Decimal> {
        if !v.is_finite() {
            return Err(DecimalError::Value("non-finite float source"));
        }
        if v == 0.0 {
            return Ok(Decimal::with_precision(precision));
        }
        let (sign, num_mag, den_mag) =
            crate::float_decode::decompose_f64(v).expect("finite nonzero float decomposes");
        Decimal::from_ratio_ubig(sign, num_mag, den_mag, Some(precision), rounding)
    }

    /// `(numerator, denominator)` in lowest terms, positive denominator
    /// (spec §4.4: `as_fraction`/`as_integer_ratio`).
    pub fn as_fraction(&self) -> (Int, UBig) {
        let num = Int::from_sign_magnitude(self.sign, self.coefficient.clone());
        let den = UBig::pow10(self.precision);
        let g = gcd(&num.magnitude, &den);
        if g.cmp_ubig(&UBig::from_u64(1)) == core::cmp::Ordering::Equal {
            return (num, den);
        }
        let (num_mag, _) = num.magnitude.divmod(&g);
        let (den, _) = den.divmod(&g);
        (Int::from_sign_magnitude(num.sign, num_mag), den)
    }

    /// Alias for [`as_fraction`](Self::as_fraction) (spec §4.4).
    pub fn as_integer_ratio(&self) -> (Int, UBig) {
        self.as_fraction()
    }

    /// `(sign_bit, significand, -precision)` (spec §4.4: `as_tuple`).
    pub fn as_tuple(&self) -> (u8, UBig, i64) {
        let sign_bit = if self.sign == Sign::Negative { 1 } else { 0 };
        (sign_bit, self.coefficient.clone(), -(self.precision as i64))
    }

    /// The numerator of the reduced fraction (spec §4.4).
    pub fn numerator(&self) -> Int {
        self.as_fraction().0
    }

    /// The denominator of the reduced fraction (spec §4.4).
    pub fn denominator(&self) -> UBig {
        self.as_fraction().1
    }

    /// Convert to the nearest `f64` (not part of the spec's arithmetic
    /// core, but needed to round-trip through the numeric tower per
    /// spec §4.6's cross-type comparisons).
    pub fn to_f64(&self) -> f64 {
        let (num, den) = self.as_fraction();
        let sign = if num.sign == Sign::Negative { -1.0 } else { 1.0 };
        let num_f = ubig_to_f64(&num.magnitude);
        let den_f = ubig_to_f64(&den);
        sign * (num_f / den_f)
    }

    pub fn try_to_i64(&self) -> core::result::Result<i64, ConversionError> {
        if self.precision != 0 {
            let (c, p) = crate::coefficient::normalize(&self.coefficient, self.precision);
            if p != 0 {
                return Err(ConversionError::LossOfPrecision);
            }
            return Int::from_sign_magnitude(self.sign, c).to_i64();
        }
        Int::from_sign_magnitude(self.sign, self.coefficient.clone()).to_i64()
    }
}

fn ubig_to_f64(v: &UBig) -> f64 {
    // Render through the decimal string: simple and exact enough for a
    // library that otherwise never produces binary floats itself.
    v.to_decimal_string().parse::<f64>().unwrap_or(f64::INFINITY)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn as_fraction_reduces_to_lowest_terms() {
        let d = Decimal::parse("0.5").unwrap();
        let (num, den) = d.as_fraction();
        assert_eq!(num, Int::from_i64(1));
        assert_eq!(den, UBig::from_u64(2));
    }

    #[test]
    fn as_tuple_matches_spec() {
        let d = Decimal::parse("-12.34").unwrap();
        let (sign_bit, sig, exp) = d.as_tuple();
        assert_eq!(sign_bit, 1);
        assert_eq!(sig, UBig::from_u64(1234));
        assert_eq!(exp, -2);
    }

    #[test]
    fn from_ratio_exact_power_of_two_denominator() {
        let d = Decimal::from_ratio(1, 4, None, None).unwrap();
        assert_eq!(d.precision(), 2);
        assert_eq!(d.coefficient.to_decimal_string(), "25");
    }

    #[test]
    fn from_ratio_non_terminating_requires_precision() {
        assert!(Decimal::from_ratio(1, 3, None, None).is_err());
        assert!(Decimal::from_ratio(1, 3, Some(5), None).is_ok());
    }

    #[test]
    fn from_f64_round_trips_half() {
        let d = Decimal::from_f64(0.5, 4, None).unwrap();
        assert_eq!(d.to_f64(), 0.5);
    }
}
