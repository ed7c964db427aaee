//! Internal representation of [`UBig`](super::UBig): a small-value fast
//! path plus a multi-limb fallback, per spec §4.1 ("expose a cheap
//! single-word fast path").

use alloc::vec::Vec;
use core::mem;
use static_assertions::const_assert_eq;

/// A single limb of the multi-limb representation.
pub(crate) type Word = u32;
/// Twice the width of [`Word`], wide enough to hold the full product or
/// sum-with-carry of two limbs without overflow.
pub(crate) type DoubleWord = u64;

const_assert_eq!(mem::size_of::<DoubleWord>(), 2 * mem::size_of::<Word>());

pub(crate) const WORD_BITS: u32 = Word::BITS;

/// The coefficient engine's internal number representation.
///
/// `Small` covers every magnitude that fits in a single machine word
/// (here, a `u64`, matching a 64-bit machine word) and is handled with
/// native integer arithmetic. `Large` is the arbitrary-precision fallback:
/// little-endian base-2^32 limbs with no leading zero limb and at least
/// two limbs (anything that would fit in one limb is normalized to
/// `Small`).
#[derive(Clone, Debug)]
pub(crate) enum Repr {
    Small(u64),
    Large(Vec<Word>),
}

use Repr::*;

impl Repr {
    pub(crate) const ZERO: Repr = Small(0);

    #[inline]
    pub(crate) fn is_zero(&self) -> bool {
        matches!(self, Small(0))
    }

    /// Whether the magnitude fits in one machine word (spec §4.1's
    /// "fits-in-one-word" predicate).
    #[inline]
    pub(crate) fn is_small(&self) -> bool {
        matches!(self, Small(_))
    }

    #[inline]
    pub(crate) fn as_small(&self) -> Option<u64> {
        match self {
            Small(v) => Some(*v),
            Large(_) => None,
        }
    }

    /// Decompose into little-endian limbs (allocates for the `Small` case).
    pub(crate) fn to_limbs(&self) -> Vec<Word> {
        match self {
            Small(v) => {
                let lo = *v as Word;
                let hi = (*v >> WORD_BITS) as Word;
                if hi == 0 {
                    alloc::vec![lo]
                } else {
                    alloc::vec![lo, hi]
                }
            }
            Large(limbs) => limbs.clone(),
        }
    }

    /// Build a normalized `Repr` from little-endian limbs, collapsing to
    /// `Small` when possible and stripping leading zero limbs.
    pub(crate) fn from_limbs(mut limbs: Vec<Word>) -> Repr {
        while limbs.len() > 1 && *limbs.last().unwrap() == 0 {
            limbs.pop();
        }
        if limbs.is_empty() {
            return Small(0);
        }
        if limbs.len() <= 2 {
            let lo = limbs[0] as u64;
            let hi = if limbs.len() == 2 { limbs[1] as u64 } else { 0 };
            return Small(lo | (hi << WORD_BITS));
        }
        Large(limbs)
    }
}
