//! Textual rendering: the default `Display` plus the format-specifier
//! mini-language from spec §4.7.

use super::Decimal;
use crate::error::{FormatError, Result};
use alloc::format;
use alloc::string::{String, ToString};
use core::fmt::{self, Debug, Display, Formatter, Write};

/// Split the coefficient's decimal digit string into `(int_part,
/// frac_part)` at the stored precision, left-padding with zeros so the
/// fractional part always has exactly `precision` digits.
fn split_digits(digits: &str, precision: u32) -> (String, String) {
    let precision = precision as usize;
    if precision == 0 {
        return (digits.to_string(), String::new());
    }
    if digits.len() <= precision {
        let frac = format!("{:0>width$}", digits, width = precision);
        return ("0".to_string(), frac);
    }
    let split_at = digits.len() - precision;
    (digits[..split_at].to_string(), digits[split_at..].to_string())
}

fn group_thousands(int_part: &str, sep: char) -> String {
    let bytes = int_part.as_bytes();
    let mut out = String::with_capacity(int_part.len() + int_part.len() / 3);
    let first_group = bytes.len() % 3;
    let first_group = if first_group == 0 { 3 } else { first_group };
    out.push_str(&int_part[..first_group]);
    let mut i = first_group;
    while i < bytes.len() {
        out.push(sep);
        out.push_str(&int_part[i..i + 3]);
        i += 3;
    }
    out
}

impl Decimal {
    fn sign_str(&self, force_plus: bool, force_space: bool) -> &'static str {
        if self.is_negative() {
            "-"
        } else if force_plus {
            "+"
        } else if force_space {
            " "
        } else {
            ""
        }
    }
}

impl Display for Decimal {
    /// Renders the value using its stored precision verbatim (spec §4.7:
    /// default type). Honors the standard `{:+}`/`{:width}`/`{:<}` flags
    /// Rust's `Formatter` exposes, but not the mini-language's grouping or
    /// type code — use [`Decimal::format`] for those.
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        let digits = self.coefficient.to_decimal_string();
        let (int_part, frac_part) = split_digits(&digits, self.precision);
        let sign = self.sign_str(f.sign_plus(), false);

        let mut body = String::new();
        body.push_str(int_part.as_str());
        if !frac_part.is_empty() {
            body.push('.');
            body.push_str(&frac_part);
        }

        let unsigned_len = body.chars().count();
        let total_len = sign.len() + unsigned_len;
        match f.width() {
            Some(w) if w > total_len => {
                let pad = w - total_len;
                let fill = f.fill();
                for _ in 0..pad {
                    f.write_char(fill)?;
                }
                f.write_str(sign)?;
                f.write_str(&body)
            }
            _ => {
                f.write_str(sign)?;
                f.write_str(&body)
            }
        }
    }
}

impl Debug for Decimal {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        write!(f, "Decimal({}, precision={})", self, self.precision)
    }
}

/// A parsed format specifier (spec §4.7 grammar).
struct Spec {
    fill: char,
    align: Option<char>,
    sign: Option<char>,
    zero_pad: bool,
    width: Option<usize>,
    grouping: Option<char>,
    precision: Option<usize>,
    ty: Option<char>,
}

fn parse_spec(spec: &str) -> Result<Spec> {
    let chars: alloc::vec::Vec<char> = spec.chars().collect();
    let mut i = 0;

    let mut fill = ' ';
    let mut align = None;
    if chars.len() >= 2 && is_align(chars[1]) {
        fill = chars[0];
        align = Some(chars[1]);
        i = 2;
    } else if !chars.is_empty() && is_align(chars[0]) {
        align = Some(chars[0]);
        i = 1;
    }

    let mut sign = None;
    if i < chars.len() && (chars[i] == '+' || chars[i] == '-' || chars[i] == ' ') {
        sign = Some(chars[i]);
        i += 1;
    }

    if i < chars.len() && chars[i] == '#' {
        return Err(FormatError::AlternateFormUnsupported.into());
    }

    let mut zero_pad = false;
    if i < chars.len() && chars[i] == '0' {
        zero_pad = true;
        i += 1;
    }

    let mut width = None;
    let start = i;
    while i < chars.len() && chars[i].is_ascii_digit() {
        i += 1;
    }
    if i > start {
        width = Some(chars[start..i].iter().collect::<String>().parse().unwrap());
    }

    let mut grouping = None;
    if i < chars.len() && (chars[i] == ',' || chars[i] == '_') {
        grouping = Some(chars[i]);
        i += 1;
    }

    let mut precision = None;
    if i < chars.len() && chars[i] == '.' {
        i += 1;
        let start = i;
        while i < chars.len() && chars[i].is_ascii_digit() {
            i += 1;
        }
        if i == start {
            return Err(FormatError::EmptyPrecision.into());
        }
        precision = Some(chars[start..i].iter().collect::<String>().parse().unwrap());
    }

    let mut ty = None;
    if i < chars.len() {
        let c = chars[i];
        if matches!(c, 'f' | 'F' | '%' | 'n') {
            ty = Some(c);
            i += 1;
        } else if matches!(c, 'e' | 'E' | 'g' | 'G') {
            return Err(FormatError::UnsupportedType(c).into());
        } else {
            return Err(FormatError::MalformedSpec.into());
        }
    }

    if i != chars.len() {
        return Err(FormatError::MalformedSpec.into());
    }

    Ok(Spec { fill, align, sign, zero_pad, width, grouping, precision, ty })
}

fn is_align(c: char) -> bool {
    matches!(c, '<' | '>' | '=' | '^')
}

/// Locale information needed by the `n` type code (spec §4.7). The core
/// crate has no locale database of its own (spec §1: locale databases for
/// grouping/decimal separators are an external collaborator); a host
/// embeds this crate and supplies its own locale's separators through
/// this narrow interface.
pub trait LocaleFormat {
    fn decimal_point(&self) -> char {
        '.'
    }
    fn grouping_separator(&self) -> char {
        ','
    }
}

/// The default (`.`, `,`) locale, used when no locale is supplied to
/// [`Decimal::format`].
pub struct DefaultLocale;
impl LocaleFormat for DefaultLocale {}

impl Decimal {
    /// Render using the format-specifier grammar from spec §4.7.
    ///
    /// ```text
    /// spec      := [fill][align][sign][#][0][width][grouping][.precision][type]
    /// align     := '<' | '>' | '=' | '^'
    /// sign      := '+' | '-' | ' '
    /// grouping  := ',' | '_'
    /// type      := 'f' | 'F' | '%' | 'n' | (absent)
    /// ```
    pub fn format(&self, spec: &str) -> Result<String> {
        self.format_with_locale(spec, &DefaultLocale)
    }

    pub fn format_with_locale(&self, spec: &str, locale: &dyn LocaleFormat) -> Result<String> {
        let parsed = parse_spec(spec)?;

        let mut value = self.clone();
        let mut suffix = String::new();
        if parsed.ty == Some('%') {
            value = value.checked_mul(&Decimal::from_i64(100));
            suffix.push('%');
        }

        let effective_precision = match parsed.ty {
            Some('f') | Some('F') | Some('%') => parsed.precision.unwrap_or(value.precision as usize) as u32,
            _ => match parsed.precision {
                Some(p) => p as u32,
                None => value.precision,
            },
        };

        let rounded = if effective_precision != value.precision {
            value.adjusted(Some(effective_precision as i64), None)?
        } else {
            value
        };

        let digits = rounded.coefficient.to_decimal_string();
        let (mut int_part, frac_part) = split_digits(&digits, rounded.precision);

        if let Some(sep) = parsed.grouping {
            let locale_sep = locale.grouping_separator();
            let sep = if sep == ',' || sep == '_' { sep } else { locale_sep };
            int_part = group_thousands(&int_part, sep);
        }

        let decimal_point = if parsed.ty == Some('n') { locale.decimal_point() } else { '.' };

        let force_plus = parsed.sign == Some('+');
        let force_space = parsed.sign == Some(' ');
        let sign_str = rounded.sign_str(force_plus, force_space);

        let mut body = String::new();
        body.push_str(&int_part);
        if !frac_part.is_empty() {
            body.push(decimal_point);
            body.push_str(&frac_part);
        }
        body.push_str(&suffix);

        Ok(pad(&body, sign_str, &parsed))
    }
}

fn pad(body: &str, sign_str: &str, spec: &Spec) -> String {
    let content_len = sign_str.chars().count() + body.chars().count();
    let width = spec.width.unwrap_or(0);
    if width <= content_len {
        return format!("{sign_str}{body}");
    }
    let pad_len = width - content_len;
    let fill = if spec.zero_pad && spec.align.is_none() { '0' } else { spec.fill };
    let align = spec.align.unwrap_or(if spec.zero_pad { '=' } else { '>' });

    match align {
        '<' => format!("{sign_str}{body}{}", fill.to_string().repeat(pad_len)),
        '^' => {
            let left = pad_len / 2;
            let right = pad_len - left;
            format!("{}{sign_str}{body}{}", fill.to_string().repeat(left), fill.to_string().repeat(right))
        }
        '=' => format!("{sign_str}{}{body}", fill.to_string().repeat(pad_len)),
        _ => format!("{}{sign_str}{body}", fill.to_string().repeat(pad_len)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_display_uses_stored_precision() {
        let d = Decimal::parse("17.800").unwrap();
        assert_eq!(d.to_string(), "17.800");
    }

    #[test]
    fn grouped_fixed_precision_half_even() {
        let d = Decimal::parse("1234567890.12345678901234567890").unwrap();
        assert_eq!(d.format(",.4f").unwrap(), "1,234,567,890.1235");
    }

    #[test]
    fn fixed_precision_honors_the_process_wide_rounding_mode() {
        use crate::rounding::{get_rounding, set_rounding, RoundingMode};
        let original = get_rounding();
        let d = Decimal::parse("1.25").unwrap();

        set_rounding(RoundingMode::HalfEven);
        assert_eq!(d.format(".1f").unwrap(), "1.2");

        set_rounding(RoundingMode::HalfUp);
        assert_eq!(d.format(".1f").unwrap(), "1.3");

        set_rounding(original);
    }

    #[test]
    fn percent_type_multiplies_and_suffixes() {
        let d = Decimal::parse("0.256").unwrap();
        assert_eq!(d.format(".1%").unwrap(), "25.6%");
    }

    #[test]
    fn rejects_empty_precision() {
        assert!(Decimal::parse("1").unwrap().format("<.").is_err());
    }

    #[test]
    fn rejects_scientific_type() {
        assert!(Decimal::parse("1").unwrap().format(".2e").is_err());
    }

    #[test]
    fn rejects_alternate_form() {
        assert!(Decimal::parse("1").unwrap().format("#").is_err());
    }

    #[test]
    fn width_and_fill_and_align() {
        let d = Decimal::parse("42").unwrap();
        assert_eq!(d.format("*>6").unwrap(), "****42");
        assert_eq!(d.format("*<6").unwrap(), "42****");
        assert_eq!(d.format("*^6").unwrap(), "**42**");
    }

    #[test]
    fn equals_sign_pads_between_sign_and_digits() {
        let d = Decimal::parse("-42").unwrap();
        assert_eq!(d.format("=8").unwrap(), "-     42");
    }

    #[test]
    fn zero_flag_pads_with_zeros_after_the_sign() {
        let d = Decimal::parse("-42").unwrap();
        assert_eq!(d.format("08").unwrap(), "-0000042");
    }
}
