//! # Money Module
//!
//! Provides the `Money` type for handling monetary values safely.
//!
//! ## Why Integer Money?
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  THE FLOATING POINT PROBLEM                                             │
//! │                                                                         │
//! │  In floating point:                                                     │
//! │    $10.00 × 8.25% = 0.825 → stored as 0.82499999999999995559           │
//! │    round(0.825 × 100) = 82  ❌ (the exact answer rounds to 83)          │
//! │                                                                         │
//! │  For tip splitting this decides whether the tip is "uneven" at all,     │
//! │  so a wrong cent means a wrong advisory decision.                       │
//! │                                                                         │
//! │  OUR SOLUTION: Integer Cents × Integer Basis Points                     │
//! │    1000 cents × 825 bps = 825_000 (exact, in 1/10000 of a cent)        │
//! │    (825_000 + 5_000) / 10_000 = 83 cents                               │
//! │                                                                         │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipease_core::money::Money;
//! use tipease_core::types::TipRate;
//!
//! let bill = Money::from_cents(5000); // $50.00
//! let tip = bill.percentage_of(TipRate::from_percent(15));
//! assert_eq!(tip.cents(), 750);
//!
//! // Decimal text enters through the parser, never through f64
//! assert_eq!(Money::parse_decimal("12.345"), Some(Money::from_cents(1235)));
//! ```

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::Add;

use crate::types::TipRate;

// =============================================================================
// Money Type
// =============================================================================

/// Represents a monetary value in the smallest currency unit (cents for USD).
///
/// ## Design Decisions
/// - **i64 (signed)**: Arithmetic stays closed under subtraction
/// - **Single field tuple struct**: Zero-cost abstraction over i64
/// - **Serialized as cents**: Wire formats that need a decimal number use
///   [`Money::as_decimal`] explicitly
///
/// ## Where Money is Used
/// ```text
/// ┌─────────────────────────────────────────────────────────────────────────┐
/// │                                                                         │
/// │  bill text ──► Money::parse_decimal ──► BillInput.bill                 │
/// │                                              │                          │
/// │                                              ▼                          │
/// │                     percentage_of(TipRate) ──► SplitResult.tip_amount  │
/// │                                              │                          │
/// │                                              ▼                          │
/// │          bill + tip ──► SplitResult.total_amount ──► per-person share  │
/// │                                                                         │
/// └─────────────────────────────────────────────────────────────────────────┘
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Money(i64);

impl Money {
    /// Creates a Money value from cents (the smallest currency unit).
    ///
    /// ## Example
    /// ```rust
    /// use tipease_core::money::Money;
    ///
    /// let price = Money::from_cents(1099); // Represents $10.99
    /// assert_eq!(price.cents(), 1099);
    /// ```
    #[inline]
    pub const fn from_cents(cents: i64) -> Self {
        Money(cents)
    }

    /// Parses the leading decimal number of a string (`"50"`, `".99"`,
    /// `"-3.10"`, `"1e2"`, `"12abc"`).
    ///
    /// Digits beyond the cent are rounded half away from zero, so
    /// `"0.125"` becomes 13 cents and `"-0.125"` becomes -13 cents. Text
    /// after the number is ignored. Returns `None` when the text does not
    /// start with a number or the amount overflows.
    ///
    /// ## Example
    /// ```rust
    /// use tipease_core::money::Money;
    ///
    /// assert_eq!(Money::parse_decimal("50.00"), Some(Money::from_cents(5000)));
    /// assert_eq!(Money::parse_decimal(" 7.5 "), Some(Money::from_cents(750)));
    /// assert_eq!(Money::parse_decimal("1e2"), Some(Money::from_cents(10000)));
    /// assert_eq!(Money::parse_decimal("abc"), None);
    /// ```
    pub fn parse_decimal(text: &str) -> Option<Self> {
        parse_fixed_point(text, 2).map(Money)
    }

    /// Returns the value in cents (smallest currency unit).
    #[inline]
    pub const fn cents(&self) -> i64 {
        self.0
    }

    /// Returns the major unit (dollars) portion.
    #[inline]
    pub const fn dollars(&self) -> i64 {
        self.0 / 100
    }

    /// Returns the minor unit (cents) portion (always 0-99).
    #[inline]
    pub const fn cents_part(&self) -> i64 {
        (self.0 % 100).abs()
    }

    /// Returns the value as a decimal number of dollars.
    ///
    /// For display and for wire formats that carry plain JSON numbers only.
    /// Never feed the result back into cent arithmetic.
    #[inline]
    pub fn as_decimal(&self) -> f64 {
        self.0 as f64 / 100.0
    }

    /// Returns zero money value.
    #[inline]
    pub const fn zero() -> Self {
        Money(0)
    }

    /// Checks if the value is zero.
    #[inline]
    pub const fn is_zero(&self) -> bool {
        self.0 == 0
    }

    /// Checks if the value is positive (greater than zero).
    #[inline]
    pub const fn is_positive(&self) -> bool {
        self.0 > 0
    }

    /// Checks if the value is negative (less than zero).
    #[inline]
    pub const fn is_negative(&self) -> bool {
        self.0 < 0
    }

    /// Calculates `self × rate` rounded to the cent, half away from zero.
    ///
    /// ## Implementation
    /// `cents × bps` is exact in units of 1/10000 cent. Adding 5000 before
    /// the integer division rounds the magnitude half up; the sign is
    /// restored afterwards so negative amounts round away from zero too.
    ///
    /// ## Example
    /// ```rust
    /// use tipease_core::money::Money;
    /// use tipease_core::types::TipRate;
    ///
    /// let bill = Money::from_cents(1000); // $10.00
    /// let rate = TipRate::from_bps(825);  // 8.25%
    ///
    /// // $10.00 × 8.25% = $0.825 → rounds to $0.83
    /// assert_eq!(bill.percentage_of(rate).cents(), 83);
    /// ```
    pub fn percentage_of(&self, rate: TipRate) -> Money {
        let scaled = self.0 as i128 * rate.bps() as i128;
        let rounded = (scaled.abs() + 5000) / 10000;
        let cents = if scaled < 0 { -rounded } else { rounded };
        // Absurd rates on absurd bills saturate instead of wrapping
        Money::from_cents(cents.clamp(i64::MIN as i128, i64::MAX as i128) as i64)
    }

    /// Remainder in cents left over when this amount is shared by `people`.
    ///
    /// Zero people leaves nothing to share, so the remainder is zero.
    ///
    /// ## Example
    /// ```rust
    /// use tipease_core::money::Money;
    ///
    /// assert_eq!(Money::from_cents(750).remainder_among(4), 2);
    /// assert_eq!(Money::from_cents(750).remainder_among(3), 0);
    /// ```
    #[inline]
    pub fn remainder_among(&self, people: u32) -> i64 {
        if people == 0 {
            return 0;
        }
        self.0.rem_euclid(people as i64)
    }

    /// Splits the amount into whole-cent shares.
    ///
    /// Returns `(base_share, remainder)`: every person pays `base_share` and
    /// `remainder` people pay one extra cent. `base × people + remainder`
    /// always equals the original amount.
    ///
    /// ## Example
    /// ```rust
    /// use tipease_core::money::Money;
    ///
    /// let (base, extra) = Money::from_cents(750).split_among(4);
    /// assert_eq!(base.cents(), 187);
    /// assert_eq!(extra, 2);
    /// ```
    pub fn split_among(&self, people: u32) -> (Money, i64) {
        if people == 0 {
            return (Money::zero(), 0);
        }
        let n = people as i64;
        (Money(self.0.div_euclid(n)), self.0.rem_euclid(n))
    }
}

// =============================================================================
// Fixed-Point Parsing
// =============================================================================

/// Parses decimal text into an integer scaled by `10^scale`.
///
/// Shared by [`Money`] (scale 2, cents) and [`TipRate`] (scale 2, basis
/// points of a percent). The accepted text is the longest leading number of
/// the form `[+-]digits[.digits][e[+-]digits]`; anything after it is
/// ignored, so `"12abc"` reads as 12 and `"1e2"` as 100. The exponent shifts
/// the exact digit string before the single half-away-from-zero rounding.
///
/// Returns `None` when no digits lead the text or the value overflows.
pub(crate) fn parse_fixed_point(text: &str, scale: u32) -> Option<i64> {
    let bytes = text.trim_start().as_bytes();
    let mut pos = 0;

    let negative = match bytes.first() {
        Some(b'-') => {
            pos += 1;
            true
        }
        Some(b'+') => {
            pos += 1;
            false
        }
        _ => false,
    };

    let mut digits: Vec<u8> = Vec::new();
    let int_start = pos;
    while let Some(digit) = digit_at(bytes, pos) {
        digits.push(digit);
        pos += 1;
    }
    let mut has_digits = pos > int_start;

    let mut frac_len: i64 = 0;
    if bytes.get(pos) == Some(&b'.') {
        let frac_start = pos + 1;
        let mut end = frac_start;
        while let Some(digit) = digit_at(bytes, end) {
            digits.push(digit);
            end += 1;
        }
        // A lone "." is not part of the number
        if end > frac_start || has_digits {
            frac_len = (end - frac_start) as i64;
            has_digits |= end > frac_start;
            pos = end;
        }
    }
    if !has_digits {
        return None;
    }

    // Exponent only counts when at least one digit follows the marker
    let mut exponent: i64 = 0;
    if matches!(bytes.get(pos), Some(b'e' | b'E')) {
        let mut cursor = pos + 1;
        let exp_negative = match bytes.get(cursor) {
            Some(b'-') => {
                cursor += 1;
                true
            }
            Some(b'+') => {
                cursor += 1;
                false
            }
            _ => false,
        };
        let exp_start = cursor;
        let mut magnitude: i64 = 0;
        while let Some(digit) = digit_at(bytes, cursor) {
            magnitude = magnitude.saturating_mul(10).saturating_add(digit as i64);
            cursor += 1;
        }
        if cursor > exp_start {
            exponent = if exp_negative { -magnitude } else { magnitude };
        }
    }

    let digits = match digits.iter().position(|&d| d != 0) {
        Some(first) => &digits[first..],
        None => return Some(0),
    };

    // Power of ten applied to the digit string to reach the scaled unit
    let shift = exponent
        .saturating_sub(frac_len)
        .saturating_add(scale as i64);

    let (kept, first_dropped) = if shift >= 0 {
        (digits, None)
    } else {
        let dropped = usize::try_from(shift.unsigned_abs()).unwrap_or(usize::MAX);
        if dropped > digits.len() {
            (&digits[..0], None)
        } else {
            let cut = digits.len() - dropped;
            (&digits[..cut], digits.get(cut).copied())
        }
    };

    let mut value: i64 = 0;
    for &digit in kept {
        value = value.checked_mul(10)?.checked_add(digit as i64)?;
    }
    for _ in 0..shift.max(0) {
        value = value.checked_mul(10)?;
    }

    // First dropped digit decides the rounding direction
    if first_dropped.is_some_and(|digit| digit >= 5) {
        value = value.checked_add(1)?;
    }

    Some(if negative { -value } else { value })
}

fn digit_at(bytes: &[u8], pos: usize) -> Option<u8> {
    bytes
        .get(pos)
        .filter(|b| b.is_ascii_digit())
        .map(|b| b - b'0')
}

// =============================================================================
// Trait Implementations
// =============================================================================

/// Display implementation shows money in a plain `$D.CC` format.
///
/// ## Note
/// This is for logs and prompts. The CLI applies grouping separators for
/// its own display.
impl fmt::Display for Money {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let sign = if self.0 < 0 { "-" } else { "" };
        write!(
            f,
            "{}${}.{:02}",
            sign,
            self.dollars().abs(),
            self.cents_part()
        )
    }
}

impl Default for Money {
    fn default() -> Self {
        Money::zero()
    }
}

impl Add for Money {
    type Output = Self;

    #[inline]
    fn add(self, other: Self) -> Self {
        Money(self.0.saturating_add(other.0))
    }
}

// =============================================================================
// Unit Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_cents() {
        let money = Money::from_cents(1099);
        assert_eq!(money.cents(), 1099);
        assert_eq!(money.dollars(), 10);
        assert_eq!(money.cents_part(), 99);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Money::from_cents(1099)), "$10.99");
        assert_eq!(format!("{}", Money::from_cents(750)), "$7.50");
        assert_eq!(format!("{}", Money::from_cents(-50)), "-$0.50");
        assert_eq!(format!("{}", Money::from_cents(0)), "$0.00");
    }

    #[test]
    fn test_parse_decimal_plain_forms() {
        assert_eq!(Money::parse_decimal("50"), Some(Money::from_cents(5000)));
        assert_eq!(Money::parse_decimal("50."), Some(Money::from_cents(5000)));
        assert_eq!(Money::parse_decimal(".5"), Some(Money::from_cents(50)));
        assert_eq!(Money::parse_decimal("+1.01"), Some(Money::from_cents(101)));
        assert_eq!(Money::parse_decimal("-3.10"), Some(Money::from_cents(-310)));
    }

    #[test]
    fn test_parse_decimal_rounds_half_away_from_zero() {
        assert_eq!(Money::parse_decimal("0.125"), Some(Money::from_cents(13)));
        assert_eq!(Money::parse_decimal("0.124999"), Some(Money::from_cents(12)));
        assert_eq!(Money::parse_decimal("-0.125"), Some(Money::from_cents(-13)));
        assert_eq!(Money::parse_decimal("9.995"), Some(Money::from_cents(1000)));
    }

    #[test]
    fn test_parse_decimal_rejects_text_without_leading_digits() {
        for text in ["", " ", ".", "-", "+.", "abc", "e5", ".e1", "--1", "$5"] {
            assert_eq!(Money::parse_decimal(text), None, "input {:?}", text);
        }
        assert_eq!(Money::parse_decimal("99999999999999999999"), None);
        assert_eq!(Money::parse_decimal("1e300"), None);
    }

    #[test]
    fn test_parse_decimal_reads_leading_number() {
        assert_eq!(Money::parse_decimal("12abc"), Some(Money::from_cents(1200)));
        assert_eq!(Money::parse_decimal("1,000.00"), Some(Money::from_cents(100)));
        assert_eq!(Money::parse_decimal("1.2.3"), Some(Money::from_cents(120)));
        assert_eq!(Money::parse_decimal("5 dollars"), Some(Money::from_cents(500)));
        assert_eq!(Money::parse_decimal("7e"), Some(Money::from_cents(700)));
        assert_eq!(Money::parse_decimal("7e+"), Some(Money::from_cents(700)));
    }

    #[test]
    fn test_parse_decimal_exponent_forms() {
        assert_eq!(Money::parse_decimal("1e2"), Some(Money::from_cents(10000)));
        assert_eq!(Money::parse_decimal("1E3"), Some(Money::from_cents(100000)));
        assert_eq!(Money::parse_decimal("2.5e1"), Some(Money::from_cents(2500)));
        assert_eq!(Money::parse_decimal("125e-3"), Some(Money::from_cents(13)));
        assert_eq!(Money::parse_decimal("-125e-3"), Some(Money::from_cents(-13)));
        assert_eq!(Money::parse_decimal(".5e-1"), Some(Money::from_cents(5)));
        assert_eq!(Money::parse_decimal("4e-3"), Some(Money::from_cents(0)));
        assert_eq!(Money::parse_decimal("5e-3"), Some(Money::from_cents(1)));
        assert_eq!(Money::parse_decimal("1e-400"), Some(Money::from_cents(0)));
        assert_eq!(Money::parse_decimal("0e500"), Some(Money::from_cents(0)));
    }

    #[test]
    fn test_percentage_of_exact_half_cent_rounds_up() {
        // $10.00 at 8.25% = $0.825 exactly; float rounding would give 82
        let bill = Money::from_cents(1000);
        assert_eq!(bill.percentage_of(TipRate::from_bps(825)).cents(), 83);
    }

    #[test]
    fn test_percentage_of_basic() {
        let bill = Money::from_cents(5000);
        assert_eq!(bill.percentage_of(TipRate::from_percent(15)).cents(), 750);
        assert_eq!(bill.percentage_of(TipRate::zero()).cents(), 0);
    }

    #[test]
    fn test_percentage_of_negative_rounds_away_from_zero() {
        let refund = Money::from_cents(-1000);
        assert_eq!(refund.percentage_of(TipRate::from_bps(825)).cents(), -83);
    }

    #[test]
    fn test_remainder_among() {
        assert_eq!(Money::from_cents(750).remainder_among(4), 2);
        assert_eq!(Money::from_cents(750).remainder_among(3), 0);
        assert_eq!(Money::from_cents(750).remainder_among(1), 0);
        assert_eq!(Money::from_cents(750).remainder_among(0), 0);
    }

    /// $10.00 shared by three: the split keeps the lost cent visible
    #[test]
    fn test_split_among_accounts_for_every_cent() {
        let (base, extra) = Money::from_cents(1000).split_among(3);
        assert_eq!(base.cents(), 333);
        assert_eq!(extra, 1);
        assert_eq!(base.cents() * 3 + extra, 1000);
    }

    #[test]
    fn test_add_saturates() {
        let a = Money::from_cents(1000);
        assert_eq!((a + Money::from_cents(500)).cents(), 1500);
        assert_eq!((Money::from_cents(i64::MAX) + a).cents(), i64::MAX);
    }
}
