//! # Input Normalization
//!
//! Turns raw form text into a [`BillInput`]. Nothing here fails: text that
//! cannot be used is replaced with a safe default.
//!
//! ## Normalization Layers
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                      Normalization Rules                                │
//! │                                                                         │
//! │  Field          Accepts                Fallback                        │
//! │  ─────          ───────                ────────                        │
//! │  bill           "50", "1e2", "12abc"   unparsable / negative → $0.00   │
//! │  custom tip     "18", "1.5e1"          unparsable / negative → 0%      │
//! │  people         "4", "3.7" (→ 3)       unparsable / <= 0     → 1       │
//! │                                                                         │
//! │  The split arithmetic only ever sees normalized values.               │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//! ```rust
//! use tipease_core::input::{normalize_bill, normalize_people};
//!
//! assert_eq!(normalize_bill("oops").cents(), 0);
//! assert_eq!(normalize_people("-2"), 1);
//! ```

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::money::Money;
use crate::split::BillInput;
use crate::types::{TipRate, TipSelection};
use crate::DEFAULT_PEOPLE;

// =============================================================================
// Field Normalizers
// =============================================================================

/// Normalizes the bill amount text.
///
/// ## Rules
/// - Leading number with optional exponent (`"1e2"` → $100.00, `"12abc"`
///   → $12.00), extra digits rounded half away from zero to cents
/// - No leading number or negative → `$0.00`
pub fn normalize_bill(text: &str) -> Money {
    match Money::parse_decimal(text) {
        Some(bill) if !bill.is_negative() => bill,
        _ => {
            debug!(input = %text, "Bill text not usable, treating as zero");
            Money::zero()
        }
    }
}

/// Normalizes a custom tip percentage.
///
/// ## Rules
/// - Leading number as for the bill, kept to 0.01% (basis points)
/// - No leading number, empty or negative → `0%`
pub fn normalize_tip_percentage(text: &str) -> TipRate {
    TipRate::parse_percentage(text).unwrap_or_else(|| {
        debug!(input = %text, "Custom tip text not usable, treating as zero");
        TipRate::zero()
    })
}

/// Normalizes the number of people.
///
/// ## Rules
/// - Leading integer is used, anything after it is ignored (`"3.7"` → 3,
///   `"4 people"` → 4)
/// - No leading digits, zero, negative or too large → `1`
pub fn normalize_people(text: &str) -> u32 {
    let text = text.trim();
    let (negative, unsigned) = match text.as_bytes().first() {
        Some(b'-') => (true, &text[1..]),
        Some(b'+') => (false, &text[1..]),
        _ => (false, text),
    };

    let digits_end = unsigned
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(unsigned.len());

    match unsigned[..digits_end].parse::<u32>() {
        Ok(people) if !negative && people > 0 => people,
        _ => {
            debug!(input = %text, "People text not usable, treating as one");
            DEFAULT_PEOPLE
        }
    }
}

/// Picks the tip rate for the current selection.
pub fn resolve_tip_rate(selection: TipSelection, custom_text: &str) -> TipRate {
    match selection {
        TipSelection::Preset(percent) => TipRate::from_percent(percent),
        TipSelection::Custom => normalize_tip_percentage(custom_text),
    }
}

// =============================================================================
// Raw Form Fields
// =============================================================================

/// The calculator form exactly as typed.
///
/// ## Defaults
/// Empty bill, the 15% preset, empty custom tip, one person.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillFields {
    pub bill: String,
    pub tip: TipSelection,
    pub custom_tip: String,
    pub people: String,
}

impl Default for BillFields {
    fn default() -> Self {
        BillFields {
            bill: String::new(),
            tip: TipSelection::default(),
            custom_tip: String::new(),
            people: DEFAULT_PEOPLE.to_string(),
        }
    }
}

impl BillFields {
    /// Normalizes every field into a [`BillInput`].
    pub fn to_input(&self) -> BillInput {
        BillInput::new(
            normalize_bill(&self.bill),
            resolve_tip_rate(self.tip, &self.custom_tip),
            normalize_people(&self.people),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_normalize_bill() {
        assert_eq!(normalize_bill("50.00").cents(), 5000);
        assert_eq!(normalize_bill(" 12.345 ").cents(), 1235);
        assert_eq!(normalize_bill("").cents(), 0);
        assert_eq!(normalize_bill("fifty").cents(), 0);
        assert_eq!(normalize_bill("-20").cents(), 0);
    }

    #[test]
    fn test_exponent_and_trailing_text_read_like_number_fields() {
        assert_eq!(normalize_bill("1e2").cents(), 10000);
        assert_eq!(normalize_bill("12abc").cents(), 1200);
        assert_eq!(normalize_bill("5.0e-1").cents(), 50);
        assert_eq!(normalize_tip_percentage("1.5e1"), TipRate::from_percent(15));
        assert_eq!(normalize_tip_percentage("18%"), TipRate::from_percent(18));

        let fields = BillFields {
            bill: "1e2".to_string(),
            tip: TipSelection::Custom,
            custom_tip: "1.5e1".to_string(),
            people: "4".to_string(),
        };
        assert_eq!(fields.to_input().split().tip_amount.cents(), 1500);
    }

    #[test]
    fn test_normalize_tip_percentage() {
        assert_eq!(normalize_tip_percentage("18"), TipRate::from_percent(18));
        assert_eq!(normalize_tip_percentage("12.5"), TipRate::from_bps(1250));
        assert_eq!(normalize_tip_percentage(""), TipRate::zero());
        assert_eq!(normalize_tip_percentage("-5"), TipRate::zero());
        assert_eq!(normalize_tip_percentage("x"), TipRate::zero());
    }

    #[test]
    fn test_normalize_people() {
        assert_eq!(normalize_people("4"), 4);
        assert_eq!(normalize_people(" 3.7 "), 3);
        assert_eq!(normalize_people("4 people"), 4);
        assert_eq!(normalize_people("+2"), 2);
        assert_eq!(normalize_people(""), 1);
        assert_eq!(normalize_people("0"), 1);
        assert_eq!(normalize_people("-2"), 1);
        assert_eq!(normalize_people("two"), 1);
        assert_eq!(normalize_people("99999999999"), 1);
    }

    #[test]
    fn test_resolve_tip_rate() {
        assert_eq!(
            resolve_tip_rate(TipSelection::Preset(20), "99"),
            TipRate::from_percent(20)
        );
        assert_eq!(
            resolve_tip_rate(TipSelection::Custom, "7.25"),
            TipRate::from_bps(725)
        );
    }

    #[test]
    fn test_default_fields() {
        let input = BillFields::default().to_input();
        assert!(input.bill.is_zero());
        assert_eq!(input.tip_rate, TipRate::from_percent(15));
        assert_eq!(input.people, 1);
    }

    #[test]
    fn test_fields_to_input() {
        let fields = BillFields {
            bill: "50".to_string(),
            tip: TipSelection::Custom,
            custom_tip: "15".to_string(),
            people: "4".to_string(),
        };
        let split = fields.to_input().split();
        assert_eq!(split.tip_amount.cents(), 750);
        assert!(split.is_uneven);
    }
}
