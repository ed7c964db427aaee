//! A signed arbitrary-precision integer, built from [`UBig`] plus a
//! [`Sign`]. Used for the numerator of `as_fraction()` and as a
//! construction source (spec §4.5 item 2, "machine / big integer").

use crate::error::ConversionError;
use crate::sign::Sign;
use crate::uint::UBig;
use alloc::string::{String, ToString};
use core::cmp::Ordering;
use core::fmt::{self, Display, Formatter};

#[derive(Clone, Debug)]
pub struct Int {
    pub(crate) sign: Sign,
    pub(crate) magnitude: UBig,
}

impl Int {
    pub const ZERO: Int = Int { sign: Sign::Zero, magnitude: UBig::ZERO };

    pub fn from_sign_magnitude(sign: Sign, magnitude: UBig) -> Int {
        if magnitude.is_zero() {
            return Int::ZERO;
        }
        debug_assert!(sign != Sign::Zero, "nonzero magnitude needs a nonzero sign");
        Int { sign, magnitude }
    }

    pub fn from_i64(v: i64) -> Int {
        let sign = Sign::of_i64(v);
        let magnitude = UBig::from_u64(v.unsigned_abs());
        Int { sign, magnitude }
    }

    pub fn from_i128(v: i128) -> Int {
        let sign = if v < 0 { Sign::Negative } else if v == 0 { Sign::Zero } else { Sign::Positive };
        Int { sign, magnitude: UBig::from_u128(v.unsigned_abs()) }
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    pub fn neg(&self) -> Int {
        Int { sign: -self.sign, magnitude: self.magnitude.clone() }
    }

    pub fn to_i64(&self) -> Result<i64, ConversionError> {
        let mag = self.magnitude.to_u64().map_err(|_| ConversionError::OutOfBounds)?;
        match self.sign {
            Sign::Zero => Ok(0),
            Sign::Positive => i64::try_from(mag).map_err(|_| ConversionError::OutOfBounds),
            Sign::Negative => {
                if mag <= i64::MAX as u64 + 1 {
                    Ok((mag as i128 * -1) as i64)
                } else {
                    Err(ConversionError::OutOfBounds)
                }
            }
        }
    }

    pub fn add(&self, other: &Int) -> Int {
        match (self.sign, other.sign) {
            (Sign::Zero, _) => other.clone(),
            (_, Sign::Zero) => self.clone(),
            (a, b) if a == b => Int::from_sign_magnitude(a, self.magnitude.add(&other.magnitude)),
            _ => {
                match self.magnitude.cmp_ubig(&other.magnitude) {
                    Ordering::Equal => Int::ZERO,
                    Ordering::Greater => {
                        Int::from_sign_magnitude(self.sign, self.magnitude.sub(&other.magnitude))
                    }
                    Ordering::Less => {
                        Int::from_sign_magnitude(other.sign, other.magnitude.sub(&self.magnitude))
                    }
                }
            }
        }
    }

    pub fn sub(&self, other: &Int) -> Int {
        self.add(&other.neg())
    }

    pub fn mul(&self, other: &Int) -> Int {
        Int::from_sign_magnitude(self.sign * other.sign, self.magnitude.mul(&other.magnitude))
    }

    /// Truncated-toward-zero division, matching spec §4.1's `divmod`
    /// tie-break: `dividend = quotient * divisor + remainder`,
    /// `sign(remainder) in {0, sign(dividend)}`, `|remainder| < |divisor|`.
    pub fn divmod_trunc(&self, other: &Int) -> (Int, Int) {
        let (qmag, rmag) = self.magnitude.divmod(&other.magnitude);
        let qsign = self.sign * other.sign;
        let rsign = self.sign;
        (Int::from_sign_magnitude(qsign, qmag), Int::from_sign_magnitude(rsign, rmag))
    }

    pub fn cmp_int(&self, other: &Int) -> Ordering {
        match self.sign.cmp(&other.sign) {
            Ordering::Equal => match self.sign {
                Sign::Negative => other.magnitude.cmp_ubig(&self.magnitude),
                _ => self.magnitude.cmp_ubig(&other.magnitude),
            },
            ord => ord,
        }
    }
}

impl PartialEq for Int {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_int(other) == Ordering::Equal
    }
}
impl Eq for Int {}
impl PartialOrd for Int {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_int(other))
    }
}
impl Ord for Int {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_int(other)
    }
}

impl Display for Int {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        if self.sign == Sign::Negative {
            f.write_str("-")?;
        }
        f.write_str(&self.magnitude.to_decimal_string())
    }
}

impl Int {
    pub fn to_decimal_string(&self) -> String {
        self.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_mixed_signs() {
        let a = Int::from_i64(5);
        let b = Int::from_i64(-3);
        assert_eq!(a.add(&b), Int::from_i64(2));
        assert_eq!(b.add(&a), Int::from_i64(2));
    }

    #[test]
    fn divmod_trunc_matches_truncating_semantics() {
        let a = Int::from_i64(-7);
        let b = Int::from_i64(2);
        let (q, r) = a.divmod_trunc(&b);
        assert_eq!(q, Int::from_i64(-3));
        assert_eq!(r, Int::from_i64(-1));
    }
}
