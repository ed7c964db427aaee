//! The eight rounding modes and the rounding kernel (spec §4.3, §6).

use crate::sign::Sign;
use crate::uint::UBig;
use core::sync::atomic::{AtomicU8, Ordering as AtomicOrdering};

/// A rounding policy for collapsing a division remainder into an adjusted
/// quotient. Names are part of the external contract (spec §6).
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
#[repr(u8)]
pub enum RoundingMode {
    /// Toward zero; drop the remainder.
    Down = 0,
    /// Away from zero; add one to the magnitude if the remainder is nonzero.
    Up = 1,
    /// Toward negative infinity.
    Floor = 2,
    /// Toward positive infinity.
    Ceiling = 3,
    /// Nearest; ties toward zero.
    HalfDown = 4,
    /// Nearest; ties away from zero.
    HalfUp = 5,
    /// Nearest; ties to the even last digit. The default.
    HalfEven = 6,
    /// If the dropped fraction is nonzero and the last kept digit is 0 or
    /// 5, round away from zero; otherwise toward zero.
    Round05Up = 7,
}

impl RoundingMode {
    pub const ALL: [RoundingMode; 8] = [
        RoundingMode::Down,
        RoundingMode::Up,
        RoundingMode::Floor,
        RoundingMode::Ceiling,
        RoundingMode::HalfDown,
        RoundingMode::HalfUp,
        RoundingMode::HalfEven,
        RoundingMode::Round05Up,
    ];

    pub const fn default_mode() -> RoundingMode {
        RoundingMode::HalfEven
    }

    const fn from_u8(v: u8) -> RoundingMode {
        match v {
            0 => RoundingMode::Down,
            1 => RoundingMode::Up,
            2 => RoundingMode::Floor,
            3 => RoundingMode::Ceiling,
            4 => RoundingMode::HalfDown,
            5 => RoundingMode::HalfUp,
            6 => RoundingMode::HalfEven,
            7 => RoundingMode::Round05Up,
            _ => unreachable!(),
        }
    }
}

/// Process-wide default rounding mode (spec §3, §5, §9). A single atomic
/// word; concurrent writers are responsible for their own synchronization
/// beyond the atomicity of the write itself, exactly as spec §5 describes.
static DEFAULT_ROUNDING: AtomicU8 = AtomicU8::new(RoundingMode::HalfEven as u8);

/// Return the process-wide default rounding mode.
pub fn get_rounding() -> RoundingMode {
    RoundingMode::from_u8(DEFAULT_ROUNDING.load(AtomicOrdering::Relaxed))
}

/// Set the process-wide default rounding mode.
pub fn set_rounding(mode: RoundingMode) {
    DEFAULT_ROUNDING.store(mode as u8, AtomicOrdering::Relaxed);
}

/// Maximum fractional digits produced by division or inexact conversion
/// when no explicit precision is given (spec §6, GLOSSARY).
pub const LIMIT_PREC: u32 = 32;

/// Mirrors the `get_limit_prec()` accessor in `original_source/src/
/// decimalfp/rounding.py`.
pub const fn limit_prec() -> u32 {
    LIMIT_PREC
}

/// The rounding kernel (spec §4.3): given a non-negative `quotient`,
/// non-negative `remainder` with `remainder < divisor`, the `divisor`
/// itself, and the `sign` of the overall (signed) value being rounded,
/// decide whether to add one to `quotient`'s magnitude.
///
/// Every precision-reducing operation in this crate routes through this
/// function.
pub fn should_round_up(quotient: &UBig, remainder: &UBig, divisor: &UBig, sign: Sign, mode: RoundingMode) -> bool {
    if remainder.is_zero() {
        return false;
    }
    let twice_remainder = remainder.mul(&UBig::from_u64(2));
    let half_cmp = twice_remainder.cmp_ubig(divisor);

    match mode {
        RoundingMode::Down => false,
        RoundingMode::Up => true,
        RoundingMode::Floor => sign == Sign::Negative,
        RoundingMode::Ceiling => sign != Sign::Negative,
        RoundingMode::HalfDown => half_cmp == core::cmp::Ordering::Greater,
        RoundingMode::HalfUp => half_cmp != core::cmp::Ordering::Less,
        RoundingMode::HalfEven => match half_cmp {
            core::cmp::Ordering::Greater => true,
            core::cmp::Ordering::Less => false,
            core::cmp::Ordering::Equal => {
                let (_, last_digit) = quotient.divmod_small(10);
                last_digit % 2 != 0
            }
        },
        RoundingMode::Round05Up => {
            let (_, last_digit) = quotient.divmod_small(10);
            last_digit == 0 || last_digit == 5
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn check(q: u64, r: u64, d: u64, sign: Sign, mode: RoundingMode) -> bool {
        should_round_up(&UBig::from_u64(q), &UBig::from_u64(r), &UBig::from_u64(d), sign, mode)
    }

    #[test]
    fn half_even_ties_to_even() {
        // quotient 12, remainder 5, divisor 10 -> exact tie; 2 is even, stay.
        assert!(!check(12, 5, 10, Sign::Positive, RoundingMode::HalfEven));
        // quotient 13, remainder 5, divisor 10 -> exact tie; 3 is odd, round up.
        assert!(check(13, 5, 10, Sign::Positive, RoundingMode::HalfEven));
    }

    #[test]
    fn half_up_ties_away_from_zero() {
        assert!(check(12, 5, 10, Sign::Positive, RoundingMode::HalfUp));
    }

    #[test]
    fn half_down_ties_toward_zero() {
        assert!(!check(12, 5, 10, Sign::Positive, RoundingMode::HalfDown));
    }

    #[test]
    fn floor_and_ceiling_depend_on_sign() {
        assert!(check(1, 1, 10, Sign::Negative, RoundingMode::Floor));
        assert!(!check(1, 1, 10, Sign::Positive, RoundingMode::Floor));
        assert!(check(1, 1, 10, Sign::Positive, RoundingMode::Ceiling));
        assert!(!check(1, 1, 10, Sign::Negative, RoundingMode::Ceiling));
    }

    #[test]
    fn round_05up() {
        assert!(check(10, 1, 10, Sign::Positive, RoundingMode::Round05Up));
        assert!(check(15, 1, 10, Sign::Positive, RoundingMode::Round05Up));
        assert!(!check(12, 1, 10, Sign::Positive, RoundingMode::Round05Up));
    }

    #[test]
    fn default_is_half_even() {
        assert_eq!(RoundingMode::default_mode(), RoundingMode::HalfEven);
    }

    #[test]
    fn get_set_roundtrip() {
        let original = get_rounding();
        set_rounding(RoundingMode::Floor);
        assert_eq!(get_rounding(), RoundingMode::Floor);
        set_rounding(original);
    }
}
