//! Decimal-shifted-integer operations over [`UBig`] coefficients
//! (spec §4.2).

use crate::rounding::{should_round_up, RoundingMode};
use crate::sign::Sign;
use crate::uint::UBig;

/// `c * 10^k`, exact.
pub fn shift_left(c: &UBig, k: u32) -> UBig {
    if k == 0 {
        return c.clone();
    }
    c.mul(&UBig::pow10(k))
}

/// Round `c / 10^k` using `mode`, returning the integer quotient. `sign`
/// is the sign of the overall (signed) value `c` belongs to — needed by
/// the floor/ceiling modes.
pub fn shift_right_round(c: &UBig, k: u32, sign: Sign, mode: RoundingMode) -> UBig {
    if k == 0 {
        return c.clone();
    }
    let divisor = UBig::pow10(k);
    let (q, r) = c.divmod(&divisor);
    if should_round_up(&q, &r, &divisor, sign, mode) {
        q.add(&UBig::from_u64(1))
    } else {
        q
    }
}

/// Number of decimal digits of `c` (spec §4.2; `0` is defined to have 1
/// digit — see spec §9's reference to digit-count of zero).
pub fn digit_count(c: &UBig) -> u32 {
    if c.is_zero() {
        return 1;
    }
    c.to_decimal_string().len() as u32
}

/// Largest `t` with `10^t | c` (`0` for `c == 0`, since nothing beyond the
/// trivial factor divides zero meaningfully for normalization purposes).
pub fn trailing_zeros(c: &UBig) -> u32 {
    if c.is_zero() {
        return 0;
    }
    let mut count = 0u32;
    let mut cur = c.clone();
    loop {
        let (q, r) = cur.divmod_small(10);
        if r != 0 {
            break;
        }
        count += 1;
        cur = q;
    }
    count
}

/// Reduce `(c, p)` to `(c / 10^t, p - t)` where `t = min(trailing_zeros(c), p)`.
pub fn normalize(c: &UBig, p: u32) -> (UBig, u32) {
    let t = trailing_zeros(c).min(p);
    if t == 0 {
        return (c.clone(), p);
    }
    let (q, _) = c.divmod(&UBig::pow10(t));
    (q, p - t)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_left_multiplies_by_power_of_ten() {
        assert_eq!(shift_left(&UBig::from_u64(7), 3), UBig::from_u64(7000));
    }

    #[test]
    fn digit_count_basic() {
        assert_eq!(digit_count(&UBig::ZERO), 1);
        assert_eq!(digit_count(&UBig::from_u64(999)), 3);
        assert_eq!(digit_count(&UBig::from_u64(1000)), 4);
    }

    #[test]
    fn trailing_zeros_basic() {
        assert_eq!(trailing_zeros(&UBig::from_u64(1000)), 3);
        assert_eq!(trailing_zeros(&UBig::from_u64(1001)), 0);
        assert_eq!(trailing_zeros(&UBig::ZERO), 0);
    }

    #[test]
    fn normalize_strips_trailing_zeros_up_to_precision() {
        let (c, p) = normalize(&UBig::from_u64(178_00), 4);
        assert_eq!(c, UBig::from_u64(178));
        assert_eq!(p, 2);
    }

    #[test]
    fn normalize_caps_strip_at_precision() {
        // 100 has 2 trailing zeros, but precision is only 1: can't strip
        // past the decimal point.
        let (c, p) = normalize(&UBig::from_u64(100), 1);
        assert_eq!(c, UBig::from_u64(10));
        assert_eq!(p, 0);
    }
}
