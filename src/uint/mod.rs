//! Arbitrary-precision unsigned big integer: the coefficient backend
//! (spec §4.1).

mod fmt;
mod ops;
mod parse;
mod repr;

use crate::error::ConversionError;
use alloc::string::ToString;
use core::cmp::Ordering;
use repr::Repr;

pub(crate) use repr::Word;

/// A signed-magnitude arbitrary-precision unsigned integer.
///
/// Backed by [`Repr`]: values that fit in a single machine word take a
/// native-arithmetic fast path, everything else falls back to a
/// little-endian limb vector (spec §4.1).
#[derive(Clone, Debug)]
pub struct UBig(pub(crate) Repr);

impl UBig {
    pub const ZERO: UBig = UBig(Repr::ZERO);

    #[inline]
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }

    /// Whether the magnitude fits in one machine word (spec §4.1).
    #[inline]
    pub fn is_small(&self) -> bool {
        self.0.is_small()
    }

    #[inline]
    pub fn from_u64(v: u64) -> UBig {
        UBig(Repr::Small(v))
    }

    #[inline]
    pub fn from_u128(v: u128) -> UBig {
        if v <= u64::MAX as u128 {
            return UBig::from_u64(v as u64);
        }
        let lo = v as u64;
        let hi = (v >> 64) as u64;
        let limbs = [
            lo as Word,
            (lo >> 32) as Word,
            hi as Word,
            (hi >> 32) as Word,
        ];
        UBig(Repr::from_limbs(limbs.to_vec()))
    }

    /// Try converting to `u64`, failing with `OutOfBounds` on overflow.
    pub fn to_u64(&self) -> Result<u64, ConversionError> {
        match &self.0 {
            Repr::Small(v) => Ok(*v),
            Repr::Large(_) => Err(ConversionError::OutOfBounds),
        }
    }

    pub fn to_u128(&self) -> Result<u128, ConversionError> {
        match &self.0 {
            Repr::Small(v) => Ok(*v as u128),
            Repr::Large(limbs) => {
                if limbs.len() > 4 {
                    return Err(ConversionError::OutOfBounds);
                }
                let mut out: u128 = 0;
                for (i, &w) in limbs.iter().enumerate() {
                    out |= (w as u128) << (32 * i);
                }
                Ok(out)
            }
        }
    }

    pub fn cmp_ubig(&self, other: &UBig) -> Ordering {
        match (&self.0, &other.0) {
            (Repr::Small(a), Repr::Small(b)) => a.cmp(b),
            _ => ops::cmp_limbs(&self.0.to_limbs(), &other.0.to_limbs()),
        }
    }

    pub fn add(&self, other: &UBig) -> UBig {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.0, &other.0) {
            if let Some(sum) = a.checked_add(*b) {
                return UBig(Repr::Small(sum));
            }
        }
        let limbs = ops::add_limbs(&self.0.to_limbs(), &other.0.to_limbs());
        UBig(Repr::from_limbs(limbs))
    }

    /// `self - other`; panics if `self < other` (non-negativity is an
    /// invariant of `UBig`, the caller — `IBig`/`Decimal` — is responsible
    /// for sign bookkeeping, per spec §4.1's signed-magnitude design).
    pub fn sub(&self, other: &UBig) -> UBig {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.0, &other.0) {
            return UBig(Repr::Small(a.checked_sub(*b).expect("UBig subtraction underflow")));
        }
        let limbs = ops::sub_limbs(&self.0.to_limbs(), &other.0.to_limbs());
        UBig(Repr::from_limbs(limbs))
    }

    pub fn mul(&self, other: &UBig) -> UBig {
        if let (Repr::Small(a), Repr::Small(b)) = (&self.0, &other.0) {
            if let Some(prod) = (*a as u128).checked_mul(*b as u128) {
                if prod <= u64::MAX as u128 {
                    return UBig(Repr::Small(prod as u64));
                }
                return UBig::from_u128(prod);
            }
        }
        let limbs = ops::mul_limbs(&self.0.to_limbs(), &other.0.to_limbs());
        UBig(Repr::from_limbs(limbs))
    }

    /// Truncating division: `(quotient, remainder)`.
    pub fn divmod(&self, other: &UBig) -> (UBig, UBig) {
        if other.is_zero() {
            crate::error::panic_divide_by_0();
        }
        if let (Repr::Small(a), Repr::Small(b)) = (&self.0, &other.0) {
            return (UBig(Repr::Small(a / b)), UBig(Repr::Small(a % b)));
        }
        let (q, r) = ops::divmod_limbs(&self.0.to_limbs(), &other.0.to_limbs());
        (UBig(Repr::from_limbs(q)), UBig(Repr::from_limbs(r)))
    }

    /// Remainder modulo an arbitrary `u64`, via Horner's method over the
    /// limbs (most significant first). Used by the cross-type hash
    /// (spec §4.6, §9) to reduce an arbitrarily large coefficient modulo
    /// the hash prime without materializing a big-integer modulus.
    pub(crate) fn mod_u64(&self, m: u64) -> u64 {
        match &self.0 {
            Repr::Small(v) => v % m,
            Repr::Large(limbs) => {
                let mut acc: u128 = 0;
                for &w in limbs.iter().rev() {
                    acc = ((acc << 32) | w as u128) % m as u128;
                }
                acc as u64
            }
        }
    }

    /// Divide by a small (`u32`) divisor, returning `(quotient, remainder)`.
    /// Used by decimal-digit conversion and trailing-zero counting, where
    /// the divisor is always a power of ten chunk.
    pub(crate) fn divmod_small(&self, divisor: u32) -> (UBig, u32) {
        assert!(divisor != 0);
        if let Repr::Small(a) = &self.0 {
            return (UBig(Repr::Small(a / divisor as u64)), (a % divisor as u64) as u32);
        }
        let limbs = self.0.to_limbs();
        let mut out = alloc::vec![0 as Word; limbs.len()];
        let mut rem: u64 = 0;
        for i in (0..limbs.len()).rev() {
            let cur = (rem << 32) | limbs[i] as u64;
            out[i] = (cur / divisor as u64) as Word;
            rem = cur % divisor as u64;
        }
        (UBig(Repr::from_limbs(out)), rem as u32)
    }

    pub fn pow(&self, mut exp: u32) -> UBig {
        let mut base = self.clone();
        let mut result = UBig::from_u64(1);
        while exp > 0 {
            if exp & 1 == 1 {
                result = result.mul(&base);
            }
            base = base.mul(&base);
            exp >>= 1;
        }
        result
    }

    /// The largest power of ten in `UBig::from_u64(10).pow(n)` form, used
    /// by the coefficient engine's `shift_left`.
    pub(crate) fn pow10(n: u32) -> UBig {
        UBig::from_u64(10).pow(n)
    }
}

impl PartialEq for UBig {
    fn eq(&self, other: &Self) -> bool {
        self.cmp_ubig(other) == Ordering::Equal
    }
}
impl Eq for UBig {}

impl PartialOrd for UBig {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp_ubig(other))
    }
}
impl Ord for UBig {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cmp_ubig(other)
    }
}

impl core::hash::Hash for UBig {
    fn hash<H: core::hash::Hasher>(&self, state: &mut H) {
        // Hash on the canonical decimal string: cheap to get right, and
        // `UBig` equality is already defined on the represented value.
        self.to_string().hash(state)
    }
}

impl Default for UBig {
    fn default() -> UBig {
        UBig::ZERO
    }
}
