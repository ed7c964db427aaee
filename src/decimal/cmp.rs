//! Cross-type equality, ordering and hashing (spec §4.6).
//!
//! Comparison is performed on exact rationals: a `Decimal`'s
//! `(sign * coefficient, 10^precision)` pair versus the other operand's
//! rational form. Floats are decomposed into their exact integer ratio
//! before comparison, never through a lossy `as f64`/`as i64` cast.

use super::Decimal;
use crate::hash;
use crate::sign::Sign;
use crate::uint::UBig;
use core::cmp::Ordering;
use core::hash::{Hash, Hasher};

/// Cross-multiply two `(sign, magnitude, denominator)` rationals to get
/// their ordering without computing a common denominator via division.
fn cmp_rationals(a_sign: Sign, a_num: &UBig, a_den: &UBig, b_sign: Sign, b_num: &UBig, b_den: &UBig) -> Ordering {
    match a_sign.cmp(&b_sign) {
        Ordering::Equal => {}
        ord => return ord,
    }
    if a_sign == Sign::Zero {
        return Ordering::Equal;
    }
    let lhs = a_num.mul(b_den);
    let rhs = b_num.mul(a_den);
    let mag_order = lhs.cmp_ubig(&rhs);
    if a_sign == Sign::Negative {
        mag_order.reverse()
    } else {
        mag_order
    }
}

impl Decimal {
    fn as_rational(&self) -> (Sign, UBig, UBig) {
        (self.sign, self.coefficient.clone(), UBig::pow10(self.precision))
    }

    pub fn cmp_decimal(&self, other: &Decimal) -> Ordering {
        let (sa, na, da) = self.as_rational();
        let (sb, nb, db) = other.as_rational();
        cmp_rationals(sa, &na, &da, sb, &nb, &db)
    }
}

impl PartialEq for Decimal {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_decimal(other) == Ordering::Equal
    }
}
impl Eq for Decimal {}

impl PartialOrd for Decimal {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_decimal(other))
    }
}
impl Ord for Decimal {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_decimal(other)
    }
}

impl Hash for Decimal {
    fn hash<H: Hasher>(&self, state: &mut H) {
        let (num, den) = self.as_fraction();
        hash::hash_rational(num.sign, &num.magnitude, &den).hash(state);
    }
}

// --- cross-type comparisons -------------------------------------------------

macro_rules! impl_cmp_with_signed_int {
    ($($t:ty)*) => {$(
        impl PartialEq<$t> for Decimal {
            fn eq(&self, other: &$t) -> bool {
                self.cmp_decimal(&Decimal::from_i64(*other as i64)) == Ordering::Equal
            }
        }
        impl PartialOrd<$t> for Decimal {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                Some(self.cmp_decimal(&Decimal::from_i64(*other as i64)))
            }
        }
    )*};
}
impl_cmp_with_signed_int!(i8 i16 i32 i64 isize);

macro_rules! impl_cmp_with_unsigned_int {
    ($($t:ty)*) => {$(
        impl PartialEq<$t> for Decimal {
            fn eq(&self, other: &$t) -> bool {
                self.cmp_decimal(&Decimal::from_parts(
                    if *other == 0 { Sign::Zero } else { Sign::Positive },
                    UBig::from_u64(*other as u64),
                    0,
                )) == Ordering::Equal
            }
        }
        impl PartialOrd<$t> for Decimal {
            fn partial_cmp(&self, other: &$t) -> Option<Ordering> {
                let rhs = Decimal::from_parts(
                    if *other == 0 { Sign::Zero } else { Sign::Positive },
                    UBig::from_u64(*other as u64),
                    0,
                );
                Some(self.cmp_decimal(&rhs))
            }
        }
    )*};
}
impl_cmp_with_unsigned_int!(u8 u16 u32 u64 usize);

/// Compares a `Decimal` against a binary float by decomposing the float
/// into its exact rational value first (spec §4.6: never a lossy
/// `as`-cast). Returns `None` for NaN, matching float's own
/// not-ordered-with-anything behavior.
fn cmp_with_f64(d: &Decimal, other: f64) -> Option<Ordering> {
    if other.is_nan() {
        return None;
    }
    if other.is_infinite() {
        return Some(if other > 0.0 { Ordering::Less } else { Ordering::Greater });
    }
    let (sign, num, den) = f64_as_rational(other);
    let (sa, na, da) = d.as_rational();
    Some(cmp_rationals(sa, &na, &da, sign, &num, &den))
}

fn f64_as_rational(v: f64) -> (Sign, UBig, UBig) {
    crate::float_decode::decompose_f64(v).unwrap_or((Sign::Zero, UBig::ZERO, UBig::from_u64(1)))
}

impl PartialEq<f64> for Decimal {
    fn eq(&self, other: &f64) -> bool {
        cmp_with_f64(self, *other) == Some(Ordering::Equal)
    }
}
impl PartialOrd<f64> for Decimal {
    fn partial_cmp(&self, other: &f64) -> Option<Ordering> {
        cmp_with_f64(self, *other)
    }
}
impl PartialEq<f32> for Decimal {
    fn eq(&self, other: &f32) -> bool {
        cmp_with_f64(self, *other as f64) == Some(Ordering::Equal)
    }
}
impl PartialOrd<f32> for Decimal {
    fn partial_cmp(&self, other: &f32) -> Option<Ordering> {
        cmp_with_f64(self, *other as f64)
    }
}

/// Compares a `Decimal` against a reduced rational `(numerator,
/// denominator)` pair, e.g. from a host's `Fraction`/`Rational` type.
impl PartialEq<(i64, i64)> for Decimal {
    fn eq(&self, other: &(i64, i64)) -> bool {
        self.partial_cmp(other) == Some(Ordering::Equal)
    }
}
impl PartialOrd<(i64, i64)> for Decimal {
    fn partial_cmp(&self, other: &(i64, i64)) -> Option<Ordering> {
        let (n, d) = *other;
        if d == 0 {
            return None;
        }
        let sign = crate::sign::Sign::of_i64(n.signum() * d.signum());
        let (sa, na, da) = self.as_rational();
        Some(cmp_rationals(sa, &na, &da, sign, &UBig::from_u64(n.unsigned_abs()), &UBig::from_u64(d.unsigned_abs())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::collections::BTreeSet;

    #[test]
    fn equal_values_with_different_precision_compare_equal() {
        let a = Decimal::with_precision(0);
        let b = Decimal::with_precision(4);
        assert_eq!(a, b);
        assert_eq!(a.sign, Sign::Zero);
        assert_eq!(b.sign, Sign::Zero);
    }

    #[test]
    fn decimal_equals_float_with_same_value() {
        let d = Decimal::parse("17.800").unwrap();
        assert_eq!(d, 17.8f64);
    }

    #[test]
    fn decimal_compares_with_integers() {
        let d = Decimal::parse("10.0").unwrap();
        assert!(d == 10i64);
        assert!(d > 9i64);
        assert!(d < 11u32);
    }

    #[test]
    fn decimal_compares_with_rational_tuple() {
        let d = Decimal::parse("0.5").unwrap();
        assert!(d == (1i64, 2i64));
        assert!(d < (2i64, 3i64));
    }

    #[test]
    fn ordering_is_total_across_sorted_set() {
        let values: BTreeSet<_> = ["3.1", "-2", "0", "1.5"]
            .iter()
            .map(|s| Decimal::parse(s).unwrap())
            .collect();
        let rendered: alloc::vec::Vec<_> = values.iter().map(|d| alloc::string::ToString::to_string(d)).collect();
        assert_eq!(rendered, alloc::vec!["-2", "0", "1.5", "3.1"]);
    }
}
