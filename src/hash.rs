//! Cross-type rational hash (spec §4.6, §9 "hash of very large Decimals").
//!
//! For `x` representing `n/d` in lowest terms, `hash(x)` must equal the
//! host's canonical hash of the same rational, so that a `Decimal` and an
//! equal-valued integer, rational or float all land in the same hash
//! bucket. There is no such canonical hash in the Rust standard library,
//! so this module defines one: the same modular-inverse reduction CPython
//! uses for `hash(Fraction)`/`hash(Decimal)`, as spec §9 suggests
//! ("reduce `n * modular_inverse(d, M)` mod a large prime `M`").

use crate::int::Int;
use crate::sign::Sign;
use crate::uint::UBig;

/// The largest Mersenne prime below 2^63, matching CPython's
/// `_PyHASH_MODULUS` on 64-bit builds.
const HASH_MODULUS: u64 = (1u64 << 61) - 1;
const HASH_INF: u64 = 314_159; // CPython's sentinel for hash(inf)/overflow.

fn pow_mod(mut base: u64, mut exp: u64, modulus: u64) -> u64 {
    let mut result: u128 = 1;
    base %= modulus;
    let modulus = modulus as u128;
    let mut base = base as u128;
    while exp > 0 {
        if exp & 1 == 1 {
            result = (result * base) % modulus;
        }
        base = (base * base) % modulus;
        exp >>= 1;
    }
    result as u64
}

/// `hash(n/d)` for `n` signed, `d` positive, following CPython's
/// `Fraction.__hash__`.
pub(crate) fn hash_rational(sign: Sign, numerator_mag: &UBig, denominator: &UBig) -> u64 {
    let d_mod = denominator.mod_u64(HASH_MODULUS);
    if d_mod == 0 {
        // denominator divisible by the modulus: CPython falls back to its
        // "infinite" sentinel, since no modular inverse exists.
        return apply_sign(HASH_INF, sign);
    }
    let d_inv = pow_mod(d_mod, HASH_MODULUS - 2, HASH_MODULUS);
    let n_mod = numerator_mag.mod_u64(HASH_MODULUS);
    let mut h = ((n_mod as u128 * d_inv as u128) % HASH_MODULUS as u128) as u64;
    h = apply_sign(h, sign);
    if h == u64::MAX {
        // CPython maps a hash of -1 to -2, reserving -1 for "error".
        // Mirrored here as u64::MAX -> u64::MAX - 1 for the same reason.
        h = u64::MAX - 1;
    }
    h
}

fn apply_sign(h: u64, sign: Sign) -> u64 {
    match sign {
        Sign::Negative => h.wrapping_neg(),
        _ => h,
    }
}

/// `hash` of a plain (non-fractional) signed big integer, as the `n/1`
/// rational.
pub(crate) fn hash_int(value: &Int) -> u64 {
    hash_rational(value.sign, &value.magnitude, &UBig::from_u64(1))
}

/// `hash` of an `f64`, via its exact integer ratio, so that an equal-value
/// float and `Decimal` hash identically (spec §4.6: "Floats are
/// decomposed into their exact integer ratio before comparison").
pub(crate) fn hash_f64(v: f64) -> Option<u64> {
    if v.is_nan() || v.is_infinite() {
        return None;
    }
    if v == 0.0 {
        return Some(0);
    }
    let (sign, num, den) = crate::float_decode::decompose_f64(v)?;
    Some(hash_rational(sign, &num, &den))
}
