//! CLDR plural operands.
//!
//! See <https://unicode.org/reports/tr35/tr35-numbers.html#Operands>. The
//! operands are derived from the decimal representation of a number, so
//! `1.50` parsed from a string has `v = 2` while the `f64` value `1.5` has
//! `v = 1`.

use std::str::FromStr;

use thiserror::Error;

/// The numeric facets CLDR plural rules are written against.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PluralOperands {
    /// Absolute value of the source number.
    pub n: f64,
    /// Integer digits of `n`.
    pub i: u64,
    /// Number of visible fraction digits, with trailing zeros.
    pub v: usize,
    /// Number of visible fraction digits, without trailing zeros.
    pub w: usize,
    /// Visible fraction digits, with trailing zeros, as an integer.
    pub f: u64,
    /// Visible fraction digits, without trailing zeros, as an integer.
    pub t: u64,
}

/// A string that is not a plain decimal number.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("invalid plural operand '{0}': expected a decimal number")]
pub struct ParseOperandsError(pub String);

/// Extract the plural operands of `n`.
///
/// Non-finite input produces zero integer and fraction operands.
///
/// # Examples
///
/// ```
/// use glossa::plural::get_operands;
///
/// let ops = get_operands(-12.25);
/// assert_eq!((ops.i, ops.v, ops.w, ops.f, ops.t), (12, 2, 2, 25, 25));
/// ```
pub fn get_operands(n: f64) -> PluralOperands {
    let abs = n.abs();
    if !abs.is_finite() {
        return PluralOperands {
            n: abs,
            i: 0,
            v: 0,
            w: 0,
            f: 0,
            t: 0,
        };
    }

    // f64's Display never uses exponent notation and never prints trailing
    // fraction zeros, so the fraction digits are exactly the visible ones.
    let text = abs.to_string();
    let fraction = text.split_once('.').map(|(_, digits)| digits).unwrap_or("");
    from_parts(abs, abs.trunc() as u64, fraction)
}

fn from_parts(n: f64, i: u64, fraction: &str) -> PluralOperands {
    let trimmed = fraction.trim_end_matches('0');
    PluralOperands {
        n,
        i,
        v: fraction.len(),
        w: trimmed.len(),
        f: digits_value(fraction),
        t: digits_value(trimmed),
    }
}

fn digits_value(digits: &str) -> u64 {
    if digits.is_empty() {
        0
    } else {
        digits.parse().unwrap_or(u64::MAX)
    }
}

impl PluralOperands {
    /// True when the number has no visible fraction digits.
    pub fn is_integer(&self) -> bool {
        self.v == 0
    }
}

impl From<f64> for PluralOperands {
    fn from(n: f64) -> Self {
        get_operands(n)
    }
}

impl FromStr for PluralOperands {
    type Err = ParseOperandsError;

    /// Parse a decimal string, keeping visible trailing zeros.
    ///
    /// ```
    /// use glossa::plural::PluralOperands;
    ///
    /// let ops: PluralOperands = "1.50".parse().unwrap();
    /// assert_eq!((ops.i, ops.v, ops.w, ops.f, ops.t), (1, 2, 1, 50, 5));
    /// ```
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let invalid = || ParseOperandsError(s.to_string());
        let unsigned = s.strip_prefix('-').unwrap_or(s);
        let (integer, fraction) = unsigned.split_once('.').unwrap_or((unsigned, ""));

        let all_digits = |part: &str| part.chars().all(|c| c.is_ascii_digit());
        if integer.is_empty() || !all_digits(integer) || !all_digits(fraction) {
            return Err(invalid());
        }
        if unsigned.ends_with('.') {
            return Err(invalid());
        }

        let n: f64 = unsigned.parse().map_err(|_| invalid())?;
        Ok(from_parts(n, digits_value(integer), fraction))
    }
}
