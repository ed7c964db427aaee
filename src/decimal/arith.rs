//! Exact arithmetic operators (spec §4.4).

use super::Decimal;
use crate::error::{DecimalError, Result};
use crate::rounding::{should_round_up, RoundingMode, LIMIT_PREC};
use crate::sign::Sign;
use crate::uint::UBig;
use core::ops::{Add, Div, Mul, Neg, Rem, Sub};

/// Align two coefficients to a common precision by scaling the
/// less-precise one (spec §4.4: `x + y` result precision is `max(x.p, y.p)`).
fn align(x: &Decimal, y: &Decimal) -> (UBig, UBig, u32) {
    let p = x.precision.max(y.precision);
    let xc = if x.precision < p {
        x.coefficient.mul(&UBig::pow10(p - x.precision))
    } else {
        x.coefficient.clone()
    };
    let yc = if y.precision < p {
        y.coefficient.mul(&UBig::pow10(p - y.precision))
    } else {
        y.coefficient.clone()
    };
    (xc, yc, p)
}

impl Decimal {
    pub fn checked_add(&self, other: &Decimal) -> Decimal {
        let (xc, yc, p) = align(self, other);
        let x_signed = signed(self.sign, xc);
        let y_signed = signed(other.sign, yc);
        let (sign, coeff) = x_signed.add(&y_signed);
        Decimal::from_parts(sign, coeff, p)
    }

    pub fn checked_sub(&self, other: &Decimal) -> Decimal {
        self.checked_add(&other.neg())
    }

    pub fn checked_mul(&self, other: &Decimal) -> Decimal {
        let precision = self.precision + other.precision;
        if self.is_zero() || other.is_zero() {
            return Decimal::from_parts(Sign::Zero, UBig::ZERO, precision);
        }
        let coeff = self.coefficient.mul(&other.coefficient);
        Decimal::from_parts(self.sign * other.sign, coeff, precision)
    }

    /// `x / y`: exact if the terminating expansion needs `<= LIMIT_PREC`
    /// fractional digits, else rounded to `LIMIT_PREC` using `mode` (spec
    /// §4.4 `x / y`, §6 `LIMIT_PREC = 32`).
    pub fn checked_div(&self, other: &Decimal, mode: Option<RoundingMode>) -> Result<Decimal> {
        if other.is_zero() {
            return Err(DecimalError::Arithmetic("division by zero"));
        }
        if self.is_zero() {
            return Ok(Decimal::from_parts(Sign::Zero, UBig::ZERO, 0));
        }
        let sign = self.sign * other.sign;
        let mode = Decimal::default_rounding_or(mode);

        // value = (x.c / 10^x.p) / (y.c / 10^y.p) = x.c * 10^y.p / (y.c * 10^x.p)
        // Try increasing precisions up to LIMIT_PREC looking for an exact
        // quotient; fall back to rounding at LIMIT_PREC.
        let num0 = self.coefficient.clone();
        let den0 = other.coefficient.clone();

        // Reduce num0/den0 by their gcd so termination can be detected
        // directly from the denominator's prime factors (spec's "if y's
        // reduced denominator is 2^a * 5^b" edge rule).
        let g = gcd(&num0, &den0);
        let (num, _) = num0.divmod(&g);
        let (den, _) = den0.divmod(&g);

        // scale accounts for x.p and y.p: value = (num / den) * 10^(y.p - x.p)
        let point_shift = other.precision as i64 - self.precision as i64;

        let mut rem_den = den.clone();
        let mut a = 0u32;
        loop {
            if rem_den.cmp_ubig(&UBig::from_u64(1)) == core::cmp::Ordering::Equal {
                break;
            }
            let (q, r) = rem_den.divmod_small(2);
            if r != 0 {
                break;
            }
            rem_den = q;
            a += 1;
        }
        let mut b = 0u32;
        loop {
            if rem_den.cmp_ubig(&UBig::from_u64(1)) == core::cmp::Ordering::Equal {
                break;
            }
            let (q, r) = rem_den.divmod_small(5);
            if r != 0 {
                break;
            }
            rem_den = q;
            b += 1;
        }
        let terminates = rem_den.cmp_ubig(&UBig::from_u64(1)) == core::cmp::Ordering::Equal;
        let natural_frac_digits = a.max(b) as i64;

        let target_frac_digits = if terminates && natural_frac_digits - point_shift <= LIMIT_PREC as i64 {
            (natural_frac_digits - point_shift).max(0)
        } else {
            LIMIT_PREC as i64
        };
        let target_frac_digits = target_frac_digits.max(0) as u32;

        // coefficient = round(num * 10^(target_frac_digits + point_shift) / den)
        let shift = target_frac_digits as i64 + point_shift;
        let (scaled_num, extra_den_shift) = if shift >= 0 {
            (num.mul(&UBig::pow10(shift as u32)), 0u32)
        } else {
            (num, (-shift) as u32)
        };
        let den = if extra_den_shift > 0 { den.mul(&UBig::pow10(extra_den_shift)) } else { den };

        let (q, r) = scaled_num.divmod(&den);
        let coeff = if should_round_up(&q, &r, &den, sign, mode) {
            q.add(&UBig::from_u64(1))
        } else {
            q
        };
        Ok(Decimal::from_parts(sign, coeff, target_frac_digits))
    }

    /// Integer quotient truncated toward negative infinity (spec §4.4
    /// `x // y`).
    pub fn checked_floor_div(&self, other: &Decimal) -> Result<Decimal> {
        if other.is_zero() {
            return Err(DecimalError::Arithmetic("division by zero"));
        }
        let (xc, yc, _) = align(self, other);
        if xc.is_zero() {
            return Ok(Decimal::from_parts(Sign::Zero, UBig::ZERO, 0));
        }
        let (q, r) = xc.divmod(&yc);
        let sign = self.sign * other.sign;
        // truncated quotient; adjust toward -inf when signs differ and
        // there's a nonzero remainder.
        let floor_q = if sign == Sign::Negative && !r.is_zero() {
            q.add(&UBig::from_u64(1))
        } else {
            q
        };
        Ok(Decimal::from_parts(if floor_q.is_zero() { Sign::Zero } else { sign }, floor_q, 0))
    }

    /// `x % y`, sign matches `y` (spec §4.4 `x % y`).
    pub fn checked_rem(&self, other: &Decimal) -> Result<Decimal> {
        let q = self.checked_floor_div(other)?;
        Ok(self.checked_sub(&q.checked_mul(other)))
    }

    /// `(x // y, x % y)` in one pass (spec §4.4 `divmod`).
    pub fn checked_divmod(&self, other: &Decimal) -> Result<(Decimal, Decimal)> {
        let q = self.checked_floor_div(other)?;
        let r = self.checked_sub(&q.checked_mul(other));
        Ok((q, r))
    }

    /// Integer exponent (spec §4.4 `x ** n`). Negative `n` requires
    /// `x != 0` and delegates to division.
    pub fn checked_pow(&self, n: i64, mode: Option<RoundingMode>) -> Result<Decimal> {
        if n == 0 {
            return Ok(Decimal::from_i64(1));
        }
        if self.is_zero() && n < 0 {
            return Err(DecimalError::Arithmetic("zero base with negative exponent"));
        }
        if n > 0 {
            let coeff = self.coefficient.pow(n as u32);
            let precision = self.precision as u64 * n as u64;
            let sign = if self.is_zero() {
                Sign::Zero
            } else if n % 2 == 0 {
                Sign::Positive
            } else {
                self.sign
            };
            return Ok(Decimal::from_parts(sign, coeff, precision as u32));
        }
        let positive = self.checked_pow(-n, mode)?;
        Decimal::from_i64(1).checked_div(&positive, mode)
    }
}

fn gcd(a: &UBig, b: &UBig) -> UBig {
    let (mut a, mut b) = (a.clone(), b.clone());
    while !b.is_zero() {
        let (_, r) = a.divmod(&b);
        a = b;
        b = r;
    }
    a
}

/// Combine a sign and magnitude into a "signed" coefficient pair used
/// internally by `align`'s addition, then decompose the sum back into
/// `(sign, magnitude)`.
fn signed(sign: Sign, magnitude: UBig) -> SignedCoeff {
    SignedCoeff { sign, magnitude }
}

struct SignedCoeff {
    sign: Sign,
    magnitude: UBig,
}

impl SignedCoeff {
    fn add(&self, other: &SignedCoeff) -> (Sign, UBig) {
        match (self.sign, other.sign) {
            (Sign::Zero, _) => (other.sign, other.magnitude.clone()),
            (_, Sign::Zero) => (self.sign, self.magnitude.clone()),
            (a, b) if a == b => (a, self.magnitude.add(&other.magnitude)),
            _ => match self.magnitude.cmp_ubig(&other.magnitude) {
                core::cmp::Ordering::Equal => (Sign::Zero, UBig::ZERO),
                core::cmp::Ordering::Greater => (self.sign, self.magnitude.sub(&other.magnitude)),
                core::cmp::Ordering::Less => (other.sign, other.magnitude.sub(&self.magnitude)),
            },
        }
    }
}

impl Add for &Decimal {
    type Output = Decimal;
    fn add(self, rhs: &Decimal) -> Decimal {
        self.checked_add(rhs)
    }
}

impl Sub for &Decimal {
    type Output = Decimal;
    fn sub(self, rhs: &Decimal) -> Decimal {
        self.checked_sub(rhs)
    }
}

impl Mul for &Decimal {
    type Output = Decimal;
    fn mul(self, rhs: &Decimal) -> Decimal {
        self.checked_mul(rhs)
    }
}

impl Div for &Decimal {
    type Output = Decimal;
    /// Panics on division by zero; use [`Decimal::checked_div`] for a
    /// fallible path.
    fn div(self, rhs: &Decimal) -> Decimal {
        self.checked_div(rhs, None).expect("division by zero")
    }
}

impl Rem for &Decimal {
    type Output = Decimal;
    fn rem(self, rhs: &Decimal) -> Decimal {
        self.checked_rem(rhs).expect("division by zero")
    }
}

impl Neg for &Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        Decimal::neg(self)
    }
}

impl Neg for Decimal {
    type Output = Decimal;
    fn neg(self) -> Decimal {
        Decimal::neg(&self)
    }
}

macro_rules! impl_owned_binop {
    ($trait:ident, $method:ident) => {
        impl $trait for Decimal {
            type Output = Decimal;
            fn $method(self, rhs: Decimal) -> Decimal {
                $trait::$method(&self, &rhs)
            }
        }
        impl $trait<&Decimal> for Decimal {
            type Output = Decimal;
            fn $method(self, rhs: &Decimal) -> Decimal {
                $trait::$method(&self, rhs)
            }
        }
        impl $trait<Decimal> for &Decimal {
            type Output = Decimal;
            fn $method(self, rhs: Decimal) -> Decimal {
                $trait::$method(self, &rhs)
            }
        }
    };
}
impl_owned_binop!(Add, add);
impl_owned_binop!(Sub, sub);
impl_owned_binop!(Mul, mul);
impl_owned_binop!(Div, div);
impl_owned_binop!(Rem, rem);
