//! Arbitrary-precision decimal fixed-point numbers with exact arithmetic.
//!
//! A [`Decimal`] represents `sign * coefficient * 10^-precision` exactly:
//! no binary-floating-point rounding ever enters the picture. Every
//! arithmetic operation is either exact or routes through one of the
//! eight [`RoundingMode`]s via an explicit argument or the process-wide
//! default (see [`get_rounding`]/[`set_rounding`]).
//!
//! ```
//! use decimalfp::{Decimal, RoundingMode};
//!
//! let price = Decimal::parse("19.99").unwrap();
//! let quantity = Decimal::from_i64(3);
//! let total = &price * &quantity;
//! assert_eq!(total.to_string(), "59.97");
//!
//! let third = Decimal::from_i64(1)
//!     .checked_div(&Decimal::from_i64(3), Some(RoundingMode::HalfUp))
//!     .unwrap();
//! assert_eq!(third.precision(), 32);
//! ```
#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;

mod coefficient;
mod decimal;
mod error;
mod float_decode;
mod hash;
mod int;
mod rounding;
mod sign;
mod uint;

mod third_party;

pub use decimal::{Decimal, DefaultLocale, LocaleFormat};
pub use error::{ConversionError, DecimalError, FormatError, ParseError, Result};
pub use int::Int;
pub use rounding::{get_rounding, limit_prec, set_rounding, RoundingMode, LIMIT_PREC};
pub use sign::Sign;
pub use uint::UBig;
