//! Rendering a `UBig` back to a decimal digit string (spec §4.1).

use super::repr::Repr;
use super::UBig;
use alloc::string::{String, ToString};
use core::fmt::{self, Display, Formatter};

impl Display for UBig {
    fn fmt(&self, f: &mut Formatter) -> fmt::Result {
        f.write_str(&self.to_decimal_string())
    }
}

impl UBig {
    /// Render as an unsigned decimal digit string, with no leading zeros
    /// (except for the value zero itself, which renders as `"0"`).
    pub fn to_decimal_string(&self) -> String {
        if let Repr::Small(v) = &self.0 {
            return v.to_string();
        }

        // Peel off base-10^9 chunks least-significant first, then reverse.
        const CHUNK: u32 = 1_000_000_000;
        let mut chunks = alloc::vec::Vec::new();
        let mut cur = self.clone();
        while !cur.is_zero() {
            let (q, r) = cur.divmod_small(CHUNK);
            chunks.push(r);
            cur = q;
        }
        if chunks.is_empty() {
            return "0".into();
        }
        let mut s = String::new();
        s.push_str(&chunks.pop().unwrap().to_string());
        while let Some(c) = chunks.pop() {
            s.push_str(&alloc::format!("{c:09}"));
        }
        s
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn renders_zero() {
        assert_eq!(UBig::ZERO.to_decimal_string(), "0");
    }

    #[test]
    fn renders_large_without_dropping_internal_zero_chunks() {
        // 10^9 has an all-zero low chunk once split into base-10^9 groups.
        let v = UBig::pow10(18);
        assert_eq!(v.to_decimal_string(), "1".to_string() + &"0".repeat(18));
    }
}
