//! The `Decimal` value type (spec §3, §4.4): an immutable
//! `sign * coefficient * 10^-precision` triple.

mod arith;
mod cmp;
mod convert;
mod fmt;
mod parse;
mod round;

pub use fmt::{DefaultLocale, LocaleFormat};

use crate::coefficient;
use crate::error::{DecimalError, Result};
use crate::rounding::RoundingMode;
use crate::sign::Sign;
use crate::uint::UBig;

/// An exact decimal fixed-point number: `sign * coefficient * 10^-precision`.
///
/// See spec §3 for the data model and invariants. The type is immutable:
/// every operation below produces a fresh `Decimal` (or a scalar/boolean).
#[derive(Clone, Debug)]
pub struct Decimal {
    pub(crate) sign: Sign,
    pub(crate) coefficient: UBig,
    pub(crate) precision: u32,
}

impl Decimal {
    /// The canonical zero, with precision 0.
    pub const ZERO: Decimal = Decimal { sign: Sign::Zero, coefficient: UBig::ZERO, precision: 0 };

    /// Build from the internal `(sign, coefficient, precision)` triple,
    /// enforcing the invariant that a zero coefficient carries `Sign::Zero`
    /// (spec §3: "If coefficient == 0, then sign == 0").
    pub(crate) fn from_parts(sign: Sign, coefficient: UBig, precision: u32) -> Decimal {
        if coefficient.is_zero() {
            Decimal { sign: Sign::Zero, coefficient, precision }
        } else {
            debug_assert!(sign != Sign::Zero, "nonzero coefficient needs a nonzero sign");
            Decimal { sign, coefficient, precision }
        }
    }

    /// No-value construction (spec §4.5 item 7): zero with the given
    /// precision (default 0).
    pub fn with_precision(precision: u32) -> Decimal {
        Decimal::from_parts(Sign::Zero, UBig::ZERO, precision)
    }

    /// Build directly from a validated `(sign, coefficient, precision)`
    /// triple (spec §4.4 `as_tuple`'s inverse). Fails with a *value error*
    /// if `sign` and `coefficient` disagree about zero-ness.
    pub fn from_sign_coefficient_precision(sign: Sign, coefficient: UBig, precision: u32) -> Result<Decimal> {
        if coefficient.is_zero() != (sign == Sign::Zero) {
            return Err(DecimalError::Value("sign and coefficient disagree about zero-ness"));
        }
        Ok(Decimal::from_parts(sign, coefficient, precision))
    }

    pub fn is_zero(&self) -> bool {
        self.sign == Sign::Zero
    }

    pub fn is_negative(&self) -> bool {
        self.sign == Sign::Negative
    }

    /// Stored precision (spec §4.4: `x.precision`).
    pub fn precision(&self) -> u32 {
        self.precision
    }

    /// `floor(log10(|x|))` (spec §4.4: `x.magnitude`). Fails with a *value
    /// error* for zero, per spec §9's open-question resolution.
    pub fn magnitude(&self) -> Result<i64> {
        if self.is_zero() {
            return Err(DecimalError::Value("magnitude of zero is undefined"));
        }
        let digits = coefficient::digit_count(&self.coefficient) as i64;
        Ok(digits - 1 - self.precision as i64)
    }

    /// Sign-flipped copy; precision preserved.
    pub fn neg(&self) -> Decimal {
        Decimal::from_parts(-self.sign, self.coefficient.clone(), self.precision)
    }

    /// `(|x|, precision)`.
    pub fn abs(&self) -> Decimal {
        let sign = if self.is_zero() { Sign::Zero } else { Sign::Positive };
        Decimal::from_parts(sign, self.coefficient.clone(), self.precision)
    }

    /// `self` (spec §6: `real` instance member — a `Decimal` is its own
    /// real part).
    pub fn real(&self) -> Decimal {
        self.clone()
    }

    /// Zero, with the same precision as `self` (spec §6: `imag` instance
    /// member — a `Decimal` has no imaginary part).
    pub fn imag(&self) -> Decimal {
        Decimal::with_precision(self.precision)
    }

    /// Strip the internal representation down to its minimal (sign,
    /// coefficient, precision) form without changing precision or value,
    /// used internally before comparisons and hashing.
    pub(crate) fn reduced(&self) -> (Sign, UBig, u32) {
        if self.is_zero() {
            return (Sign::Zero, UBig::ZERO, 0);
        }
        let (c, p) = coefficient::normalize(&self.coefficient, self.precision);
        (self.sign, c, p)
    }

    /// Construct directly from a big-integer coefficient, sign and
    /// precision, validating nothing beyond the zero-sign invariant. Used
    /// by arithmetic kernels that already know the result is well-formed.
    pub(crate) fn raw(sign: Sign, coefficient: UBig, precision: u32) -> Decimal {
        Decimal::from_parts(sign, coefficient, precision)
    }

    pub(crate) fn default_rounding_or(mode: Option<RoundingMode>) -> RoundingMode {
        mode.unwrap_or_else(crate::rounding::get_rounding)
    }
}

impl Default for Decimal {
    fn default() -> Decimal {
        Decimal::ZERO
    }
}
