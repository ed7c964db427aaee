//! Error types surfaced by the public API.

use core::fmt::{self, Display, Formatter};

/// Error parsing a number from a string.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ParseError {
    /// No digits in the string.
    NoDigits,
    /// Invalid digit (or stray character) for a decimal literal.
    InvalidDigit,
    /// Both the integer and fractional parts were empty.
    Empty,
    /// The exponent could not be parsed as an integer.
    InvalidExponent,
}

impl Display for ParseError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ParseError::NoDigits => f.write_str("no digits"),
            ParseError::InvalidDigit => f.write_str("invalid digit"),
            ParseError::Empty => f.write_str("empty integer and fractional parts"),
            ParseError::InvalidExponent => f.write_str("invalid exponent"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ParseError {}

/// A numeric conversion could not be performed losslessly.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum ConversionError {
    /// The value does not fit in the target representation.
    OutOfBounds,
    /// The conversion would lose information (e.g. a fractional value to an integer).
    LossOfPrecision,
}

impl Display for ConversionError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            ConversionError::OutOfBounds => f.write_str("number out of bounds"),
            ConversionError::LossOfPrecision => f.write_str("number can't be converted losslessly"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for ConversionError {}

/// A malformed or unsupported `format!` specifier (spec §4.7, §7 *format error*).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum FormatError {
    /// `.precision` was present but empty (e.g. `<.`).
    EmptyPrecision,
    /// An unsupported type code, e.g. `e`, `E`, `g`, `G`.
    UnsupportedType(char),
    /// The alternate-form flag `#` was requested.
    AlternateFormUnsupported,
    /// The specifier could not be parsed at all.
    MalformedSpec,
}

impl Display for FormatError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            FormatError::EmptyPrecision => f.write_str("empty precision in format spec"),
            FormatError::UnsupportedType(c) => write!(f, "unsupported format type {c:?}"),
            FormatError::AlternateFormUnsupported => {
                f.write_str("alternate form '#' is not supported")
            }
            FormatError::MalformedSpec => f.write_str("malformed format specifier"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for FormatError {}

/// The unified error type for all fallible `Decimal` operations.
///
/// Mirrors the four caller-facing error categories from spec §7: *type
/// error*, *value error*, *arithmetic error* and *format error*, plus
/// parsing failures (a flavor of *value error*).
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum DecimalError {
    /// An argument of a kind the operation forbids, e.g. a float precision
    /// argument, or a complex comparand in an ordering.
    Type(&'static str),
    /// A well-typed but semantically invalid argument: negative construction
    /// precision, a non-finite source, a malformed numeric string, the
    /// magnitude of zero, or a rational that cannot be represented exactly
    /// at the requested precision without a rounding mode.
    Value(&'static str),
    /// Division by zero, or a zero base raised to a negative exponent.
    Arithmetic(&'static str),
    /// An unsupported or malformed format specifier.
    Format(FormatError),
}

impl Display for DecimalError {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        match self {
            DecimalError::Type(msg) => write!(f, "type error: {msg}"),
            DecimalError::Value(msg) => write!(f, "value error: {msg}"),
            DecimalError::Arithmetic(msg) => write!(f, "arithmetic error: {msg}"),
            DecimalError::Format(e) => write!(f, "format error: {e}"),
        }
    }
}

#[cfg(feature = "std")]
impl std::error::Error for DecimalError {}

impl From<ParseError> for DecimalError {
    fn from(e: ParseError) -> Self {
        match e {
            ParseError::NoDigits => DecimalError::Value("no digits in numeric string"),
            ParseError::InvalidDigit => DecimalError::Value("invalid digit in numeric string"),
            ParseError::Empty => DecimalError::Value("empty integer and fractional parts"),
            ParseError::InvalidExponent => DecimalError::Value("invalid exponent"),
        }
    }
}

impl From<FormatError> for DecimalError {
    fn from(e: FormatError) -> Self {
        DecimalError::Format(e)
    }
}

/// The result type used throughout the crate's public surface.
pub type Result<T> = core::result::Result<T, DecimalError>;

/// Panics when a big-integer divisor is zero. Mirrors
/// `dashu_int::error::panic_divide_by_0`, used for the *arithmetic error*
/// category where the caller passed a literal zero divisor to a checked
/// division entry point that deliberately panics instead of allocating an
/// error for a programmer mistake (the checked `Decimal` division path
/// returns `DecimalError::Arithmetic` instead of panicking).
#[inline]
pub(crate) const fn panic_divide_by_0() -> ! {
    panic!("divisor must not be 0")
}
