//! # Split Arithmetic
//!
//! Turns a bill, a tip rate and a head count into the figures the person
//! sees: tip, total and each person's share.
//!
//! ## Calculation
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │  BillInput { bill: $50.00, tip_rate: 15%, people: 4 }                   │
//! │       │                                                                 │
//! │       ▼                                                                 │
//! │  tip   = bill.percentage_of(rate)        = $7.50   (750 cents)         │
//! │  total = bill + tip                      = $57.50                      │
//! │  each  = total / people                  = 14.375  (decimal)           │
//! │  uneven = advisory::should_offer(750, 4) = true    (750 % 4 = 2)       │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```

use serde::{Deserialize, Serialize};

use crate::advisory::should_offer_advisory;
use crate::money::Money;
use crate::types::TipRate;

/// Normalized calculator input. Built fresh for every calculation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BillInput {
    pub bill: Money,
    pub tip_rate: TipRate,
    pub people: u32,
}

impl BillInput {
    pub fn new(bill: Money, tip_rate: TipRate, people: u32) -> Self {
        BillInput {
            bill,
            tip_rate,
            people,
        }
    }

    /// Runs [`compute_split`] on this input.
    pub fn split(&self) -> SplitResult {
        compute_split(self.bill, self.tip_rate, self.people)
    }
}

impl Default for BillInput {
    fn default() -> Self {
        BillInput::new(Money::zero(), TipRate::default(), crate::DEFAULT_PEOPLE)
    }
}

/// Everything derived from a [`BillInput`].
///
/// `per_person_amount` is a plain decimal: a share of a total in cents is
/// not generally a whole number of cents.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SplitResult {
    pub tip_amount: Money,
    pub total_amount: Money,
    pub per_person_amount: f64,
    pub is_uneven: bool,
}

/// Computes tip, total and per-person share.
///
/// ## Rules
/// - `tip = bill × rate`, rounded once to the cent, half away from zero
/// - `total = bill + tip` (exact in cents)
/// - `per_person = total / people`, or `0` when `people` is zero
/// - `is_uneven` is the advisory gate's verdict on `(tip, people)`
///
/// ## Example
/// ```rust
/// use tipease_core::money::Money;
/// use tipease_core::split::compute_split;
/// use tipease_core::types::TipRate;
///
/// let split = compute_split(Money::from_cents(5000), TipRate::from_percent(15), 3);
/// assert_eq!(split.tip_amount.cents(), 750);
/// assert_eq!(split.total_amount.cents(), 5750);
/// assert!(!split.is_uneven);
/// ```
pub fn compute_split(bill: Money, tip_rate: TipRate, people: u32) -> SplitResult {
    let tip_amount = bill.percentage_of(tip_rate);
    let total_amount = bill + tip_amount;

    let per_person_amount = if people > 0 {
        total_amount.as_decimal() / people as f64
    } else {
        0.0
    };

    SplitResult {
        tip_amount,
        total_amount,
        per_person_amount,
        is_uneven: should_offer_advisory(tip_amount, people),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dollars(text: &str) -> Money {
        Money::parse_decimal(text).unwrap()
    }

    #[test]
    fn test_scenario_three_people_divides_evenly() {
        let split = compute_split(dollars("50.00"), TipRate::from_percent(15), 3);
        assert_eq!(split.tip_amount, dollars("7.50"));
        assert_eq!(split.total_amount, dollars("57.50"));
        assert_eq!(split.tip_amount.cents() % 3, 0);
        assert!(!split.is_uneven);
    }

    #[test]
    fn test_scenario_four_people_uneven() {
        let split = compute_split(dollars("50.00"), TipRate::from_percent(15), 4);
        assert_eq!(split.tip_amount.cents(), 750);
        assert_eq!(split.tip_amount.cents() % 4, 2);
        assert!(split.is_uneven);
        assert!((split.per_person_amount - 14.375).abs() < 1e-9);
    }

    #[test]
    fn test_single_person_never_uneven() {
        for cents in [1, 3, 7, 751, 99_999] {
            let split = compute_split(Money::from_cents(cents), TipRate::from_bps(1733), 1);
            assert!(!split.is_uneven, "bill {} cents", cents);
        }
    }

    #[test]
    fn test_zero_tip_never_uneven() {
        for people in 1..=12 {
            let split = compute_split(dollars("33.33"), TipRate::zero(), people);
            assert!(split.tip_amount.is_zero());
            assert!(!split.is_uneven);
        }
    }

    #[test]
    fn test_zero_people_yields_zero_share() {
        let split = compute_split(dollars("20.00"), TipRate::from_percent(10), 0);
        assert_eq!(split.per_person_amount, 0.0);
        assert!(!split.is_uneven);
    }

    #[test]
    fn test_total_and_share_properties() {
        let bills = ["0", "0.01", "9.99", "10.00", "50", "123.45", "1000000.07"];
        let rates = [0, 1, 825, 1000, 1250, 1500, 1733, 2000, 10000];
        for bill in bills {
            for bps in rates {
                for people in 1..=9u32 {
                    let bill = dollars(bill);
                    let split = compute_split(bill, TipRate::from_bps(bps), people);

                    assert_eq!(split.total_amount, bill + split.tip_amount);

                    let rebuilt = split.per_person_amount * people as f64;
                    let total = split.total_amount.as_decimal();
                    assert!((rebuilt - total).abs() <= 1e-9 * total.max(1.0));

                    assert_eq!(
                        split.is_uneven,
                        should_offer_advisory(split.tip_amount, people)
                    );
                }
            }
        }
    }

    #[test]
    fn test_idempotent() {
        let first = compute_split(dollars("87.13"), TipRate::from_bps(1875), 7);
        let second = compute_split(dollars("87.13"), TipRate::from_bps(1875), 7);
        assert_eq!(first, second);
        assert_eq!(
            first.per_person_amount.to_bits(),
            second.per_person_amount.to_bits()
        );
    }

    #[test]
    fn test_half_cent_tip_rounds_away_from_zero() {
        // $10.00 × 8.25% = $0.825 → 83 cents, which is odd
        let split = compute_split(dollars("10.00"), TipRate::from_bps(825), 2);
        assert_eq!(split.tip_amount.cents(), 83);
        assert!(split.is_uneven);
    }

    #[test]
    fn test_serializes_camel_case() {
        let split = compute_split(dollars("50.00"), TipRate::from_percent(15), 4);
        let json = serde_json::to_value(split).unwrap();
        assert_eq!(json["tipAmount"], 750);
        assert_eq!(json["totalAmount"], 5750);
        assert_eq!(json["isUneven"], true);
    }
}
