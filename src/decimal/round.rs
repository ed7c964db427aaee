//! Rounding-driven precision adjustment: `adjusted`, `quantize`, `round`,
//! `floor`, `ceil`, `trunc` (spec §4.4).

use super::Decimal;
use crate::coefficient;
use crate::error::Result;
use crate::int::Int;
use crate::rounding::{should_round_up, RoundingMode};
use crate::sign::Sign;
use crate::uint::UBig;

impl Decimal {
    /// Returns a `Decimal` whose stored precision equals `max(p, 0)` and
    /// whose value equals `self` rounded to a multiple of `10^-p` using
    /// `mode` (or the process default). `p = None` strips trailing
    /// fractional zeros without changing the value (spec §4.4).
    pub fn adjusted(&self, p: Option<i64>, mode: Option<RoundingMode>) -> Result<Decimal> {
        let target = match p {
            None => {
                let (c, p) = coefficient::normalize(&self.coefficient, self.precision);
                return Ok(Decimal::from_parts(self.sign, c, p));
            }
            Some(p) => p,
        };

        let shift = self.precision as i64 - target;
        if shift <= 0 {
            let pad = (-shift) as u32;
            let coeff = coefficient::shift_left(&self.coefficient, pad);
            return Ok(Decimal::from_parts(self.sign, coeff, target.max(0) as u32));
        }

        let mode = Decimal::default_rounding_or(mode);
        let mut coeff = coefficient::shift_right_round(&self.coefficient, shift as u32, self.sign, mode);
        if target < 0 {
            // Stored precision clamps to 0, but the rounded value still
            // sits at a multiple of 10^-target: scale back up so the
            // stored coefficient represents that multiple at precision 0
            // (spec §4.4: "stored precision equals max(p, 0)").
            coeff = coefficient::shift_left(&coeff, (-target) as u32);
        }
        Ok(Decimal::from_parts(
            if coeff.is_zero() { Sign::Zero } else { self.sign },
            coeff,
            target.max(0) as u32,
        ))
    }

    /// Round `self` to the nearest multiple of `quant` (spec §4.4
    /// `quantize`). The result's stored precision is the natural one of
    /// the snapped value, i.e. `quant`'s own precision.
    pub fn quantize(&self, quant: &Decimal, mode: Option<RoundingMode>) -> Result<Decimal> {
        if quant.is_zero() {
            return Err(crate::error::DecimalError::Arithmetic("quantize step must not be zero"));
        }
        let n = self.checked_div_to_nearest_int(quant, mode);
        Ok(n.checked_mul_decimal(quant))
    }

    /// `n = None`: nearest integer using the default (or given) mode,
    /// returned as an arbitrary-precision integer (spec §4.4 `round`).
    pub fn round_to_integer(&self, mode: Option<RoundingMode>) -> Int {
        let mode = Decimal::default_rounding_or(mode);
        let coeff = coefficient::shift_right_round(&self.coefficient, self.precision, self.sign, mode);
        Int::from_sign_magnitude(if coeff.is_zero() { Sign::Zero } else { self.sign }, coeff)
    }

    /// `n` given: round to `n` fractional digits, returning a `Decimal`
    /// (spec §4.4 `round`).
    pub fn round(&self, n: i64, mode: Option<RoundingMode>) -> Result<Decimal> {
        self.adjusted(Some(n), mode)
    }

    /// Largest integer `<= self` (spec §4.4 `floor`).
    pub fn floor(&self) -> Int {
        self.round_with_fixed_mode(RoundingMode::Floor)
    }

    /// Smallest integer `>= self` (spec §4.4 `ceil`).
    pub fn ceil(&self) -> Int {
        self.round_with_fixed_mode(RoundingMode::Ceiling)
    }

    /// Integer part, truncated toward zero (spec §4.4 `trunc`).
    pub fn trunc(&self) -> Int {
        self.round_with_fixed_mode(RoundingMode::Down)
    }

    fn round_with_fixed_mode(&self, mode: RoundingMode) -> Int {
        let coeff = coefficient::shift_right_round(&self.coefficient, self.precision, self.sign, mode);
        Int::from_sign_magnitude(if coeff.is_zero() { Sign::Zero } else { self.sign }, coeff)
    }

    /// Round `self / other` to the nearest integer (half-to-even-style
    /// kernel, used by `quantize`).
    fn checked_div_to_nearest_int(&self, other: &Decimal, mode: Option<RoundingMode>) -> Int {
        let mode = Decimal::default_rounding_or(mode);
        let p = self.precision.max(other.precision);
        let xc = coefficient::shift_left(&self.coefficient, p - self.precision);
        let yc = coefficient::shift_left(&other.coefficient, p - other.precision);
        let (q, r) = xc.divmod(&yc);
        let sign = self.sign * other.sign;
        let up = should_round_up(&q, &r, &yc, sign, mode);
        let mag = if up { q.add(&UBig::from_u64(1)) } else { q };
        Int::from_sign_magnitude(if mag.is_zero() { Sign::Zero } else { sign }, mag)
    }
}

impl Int {
    fn checked_mul_decimal(&self, other: &Decimal) -> Decimal {
        let sign = self.sign * other.sign;
        let coeff = self.magnitude.mul(&other.coefficient);
        Decimal::raw(if coeff.is_zero() { Sign::Zero } else { sign }, coeff, other.precision)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn adjusted_strips_trailing_zeros_when_p_is_none() {
        let d = Decimal::parse("17.800").unwrap().adjusted(None, None).unwrap();
        assert_eq!(d.precision(), 1);
        assert_eq!(d.coefficient.to_decimal_string(), "178");
    }

    #[test]
    fn adjusted_half_up_example() {
        let d = Decimal::parse("17.849")
            .unwrap()
            .adjusted(Some(1), Some(RoundingMode::HalfUp))
            .unwrap();
        assert_eq!(d.precision(), 1);
        assert_eq!(d.coefficient.to_decimal_string(), "178");
    }

    #[test]
    fn adjusted_small_value_half_up() {
        let d = Decimal::parse("0.00015")
            .unwrap()
            .adjusted(Some(4), Some(RoundingMode::HalfUp))
            .unwrap();
        assert_eq!(d.precision(), 4);
        assert_eq!(d.coefficient.to_decimal_string(), "2");
    }

    #[test]
    fn adjusted_is_idempotent() {
        let d = Decimal::parse("17.849").unwrap();
        let once = d.adjusted(Some(1), None).unwrap();
        let twice = once.adjusted(Some(1), None).unwrap();
        assert_eq!(once.coefficient.to_decimal_string(), twice.coefficient.to_decimal_string());
        assert_eq!(twice.precision(), 1);
    }

    #[test]
    fn adjusted_negative_precision_rounds_to_multiple_and_stores_zero() {
        let d = Decimal::parse("12345").unwrap().adjusted(Some(-3), None).unwrap();
        assert_eq!(d.precision(), 0);
        assert_eq!(d.coefficient.to_decimal_string(), "12000");
    }

    #[test]
    fn quantize_snaps_to_step() {
        let x = Decimal::parse("2.48").unwrap();
        let step = Decimal::parse("0.25").unwrap();
        let q = x.quantize(&step, None).unwrap();
        assert_eq!(q.precision(), 2);
        assert_eq!(q.coefficient.to_decimal_string(), "250");
    }

    #[test]
    fn floor_ceil_trunc_on_negative_value() {
        let d = Decimal::parse("-1.5").unwrap();
        assert_eq!(d.floor().to_i64().unwrap(), -2);
        assert_eq!(d.ceil().to_i64().unwrap(), -1);
        assert_eq!(d.trunc().to_i64().unwrap(), -1);
    }
}
